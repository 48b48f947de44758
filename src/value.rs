/// Represents one element of a formula inside the engine.
///
/// `CalculatorValue` covers both kinds of tokens a postfix formula can hold:
/// operands, which carry a numeric digit string and nothing else, and
/// operators, which carry their source symbol together with the classified
/// operator kind `K` of the active domain. Operation results are re-wrapped
/// as plain operands before being pushed back onto the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorValue<K> {
    /// A numeric operand, encoded as a digit string in the domain's base.
    Operand(String),
    /// A classified operator.
    Operator {
        /// The source token, e.g. `"+"` or `"NAND"`.
        symbol: String,
        /// The operator kind, used for precedence and dispatch.
        kind:   K,
    },
}

impl<K> From<String> for CalculatorValue<K> {
    fn from(value: String) -> Self {
        Self::Operand(value)
    }
}

impl<K> From<&str> for CalculatorValue<K> {
    fn from(value: &str) -> Self {
        Self::Operand(value.to_string())
    }
}

impl<K> CalculatorValue<K> {
    /// Returns `true` if this value is an operand.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}
