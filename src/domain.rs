use crate::{engine::core::CalcResult, error::CalculatorError};

/// The binary (bitwise/integer) numeric domain.
///
/// Operands are base-2 digit strings interpreted as two's-complement
/// integers. The operation set covers integer arithmetic (`+`, `-`, `*`) and
/// the bitwise operators `AND`, `OR`, `XOR`, `NAND` and `NOR`, plus the unary
/// complement and one-bit shifts used outside the infix grammar.
pub mod binary;
/// The decimal (floating-point) numeric domain.
///
/// Operands are base-10 numerals interpreted as double-precision floats. The
/// operation set covers `+`, `-`, `*` and `/`, with an explicit
/// divide-by-zero check and a final fixed-precision rounding step.
pub mod decimal;

/// Describes one numeric domain of the calculator.
///
/// The two domains (binary and decimal) run through structurally identical
/// pipelines; this trait is the capability seam that lets a single generic
/// converter and evaluator serve both. A domain contributes its operator
/// table, the precedence ranking used during infix-to-postfix conversion,
/// the arity-2 operation dispatch, and an optional final cleanup of the
/// result string.
pub trait Domain {
    /// The domain's closed set of infix operator kinds.
    type Operator: Copy + PartialEq + std::fmt::Debug;

    /// Looks a token up in the domain's operator table.
    ///
    /// This is the membership check used by the converter: a token that
    /// returns `None` is treated as an operand, never as an error.
    fn lookup(token: &str) -> Option<Self::Operator>;

    /// Returns the precedence rank of an operator.
    ///
    /// A higher rank binds tighter. Equal ranks are left-associative: during
    /// conversion, an equal or higher rank on the stack top pops before the
    /// incoming operator is pushed.
    fn precedence(operator: Self::Operator) -> u8;

    /// Applies a binary operator to two string-encoded operands.
    ///
    /// `first` is the left operand and `second` the right one; the order
    /// matters for the non-commutative operators.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperand`] if either operand does not
    /// parse in the domain's base, and any operator-specific error such as
    /// [`CalculatorError::DivideByZero`].
    fn apply(operator: Self::Operator, first: &str, second: &str) -> CalcResult<String>;

    /// Classifies a token that already passed the membership check.
    ///
    /// # Errors
    /// Returns [`CalculatorError::UnknownOperator`] if the token maps to no
    /// operator kind after all.
    fn classify(token: &str) -> CalcResult<Self::Operator> {
        Self::lookup(token).ok_or_else(|| CalculatorError::UnknownOperator { token: token.to_string() })
    }

    /// Returns `true` if the token denotes an operator of this domain.
    fn is_operator(token: &str) -> bool {
        Self::lookup(token).is_some()
    }

    /// Final cleanup applied to the result of a whole calculation.
    ///
    /// The default implementation returns the value unchanged; the decimal
    /// domain overrides this with its fixed-precision rounding step.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperand`] if the result string does
    /// not parse back, which indicates a bug in the operation set rather than
    /// bad user input.
    fn finish(value: String) -> CalcResult<String> {
        Ok(value)
    }
}
