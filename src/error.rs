#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while calculating an expression.
///
/// Every error aborts the current calculation immediately; no partial result
/// is produced and the engine's internal stack is cleared before control
/// returns to the caller. These are deterministic input-validation failures,
/// so retrying the same input always fails the same way.
pub enum CalculatorError {
    /// `calculate` was invoked while the engine's internal stack was not
    /// empty, i.e. another calculation is still in flight on this instance.
    EngineBusy,
    /// A token passed the operator membership check but maps to no known
    /// operator kind of the active domain.
    UnknownOperator {
        /// The offending token.
        token: String,
    },
    /// An operator was encountered during evaluation with fewer than two
    /// values on the operand stack.
    InsufficientOperands {
        /// The operator symbol that could not be applied.
        symbol: String,
    },
    /// Evaluation finished with zero or more than one value remaining on the
    /// operand stack.
    MalformedExpression {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// An operand token could not be parsed as a number in the active
    /// domain's base.
    InvalidOperand {
        /// The offending token.
        token: String,
    },
    /// Decimal division with a zero divisor.
    DivideByZero,
}

impl std::fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EngineBusy => {
                write!(f, "Error: The calculator is busy with another calculation.")
            },
            Self::UnknownOperator { token } => {
                write!(f, "Error: Unknown operator '{token}'.")
            },
            Self::InsufficientOperands { symbol } => write!(f,
                                                            "Error: Not enough operands for operator '{symbol}'."),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Error: Malformed expression; {remaining} values remained instead of one."),
            Self::InvalidOperand { token } => {
                write!(f, "Error: '{token}' is not a valid operand.")
            },
            Self::DivideByZero => write!(f, "Error: Division by zero."),
        }
    }
}

impl std::error::Error for CalculatorError {}
