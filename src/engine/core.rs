use crate::{domain::{Domain, binary::BinaryDomain, decimal::DecimalDomain},
            error::CalculatorError,
            value::CalculatorValue};

/// Result type used by the calculator.
///
/// All fallible calculator functions return either a value of type `T` or a
/// `CalculatorError` describing the failure.
pub type CalcResult<T> = Result<T, CalculatorError>;

/// A calculator engine for bitwise/integer expressions over base-2 operands.
pub type BinaryCalculator = Calculator<BinaryDomain>;
/// A calculator engine for floating-point expressions over base-10 operands.
pub type DecimalCalculator = Calculator<DecimalDomain>;

/// Stores the calculation state for one numeric domain.
///
/// The engine owns a single internal stack which serves as the operator stack
/// during infix-to-postfix conversion and as the operand stack during postfix
/// evaluation. The stack is empty between calculations: `calculate` requires
/// it empty on entry and clears it on every exit path, success or failure.
///
/// ## Usage
///
/// Construct one instance per caller and reuse it across independent
/// expressions. The engine is not safe for concurrent invocation; callers
/// needing concurrency use one instance each or serialize access externally.
pub struct Calculator<D: Domain> {
    /// The internal stack shared by conversion and evaluation.
    pub(crate) stack: Vec<CalculatorValue<D::Operator>>,
}

#[allow(clippy::new_without_default)]
impl<D: Domain> Calculator<D> {
    /// Creates a new engine with an empty internal stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Calculates an infix token sequence and returns the result as a digit
    /// string of the engine's domain.
    ///
    /// The tokens are converted to postfix order, evaluated on the operand
    /// stack, and the final value passes through the domain's finishing step
    /// (the decimal domain rounds to nine fractional digits there). The
    /// internal stack is empty again when this returns, so the engine can be
    /// reused immediately, even after a failure.
    ///
    /// # Parameters
    /// - `tokens`: The expression as alternating operand and operator tokens.
    ///
    /// # Returns
    /// The result value, encoded as a digit string in the domain's base.
    ///
    /// # Errors
    /// Returns [`CalculatorError::EngineBusy`] if a calculation is already in
    /// flight on this instance, or any error raised during conversion or
    /// evaluation.
    ///
    /// # Example
    /// ```
    /// use radixcalc::engine::core::DecimalCalculator;
    ///
    /// let mut calculator = DecimalCalculator::new();
    ///
    /// let result = calculator.calculate(&["3", "+", "4", "*", "2"]).unwrap();
    /// assert_eq!(result, "11");
    /// ```
    pub fn calculate<S: AsRef<str>>(&mut self, tokens: &[S]) -> CalcResult<String> {
        if !self.stack.is_empty() {
            return Err(CalculatorError::EngineBusy);
        }

        let result = self.run(tokens);
        self.clear();

        result
    }

    /// Runs one calculation; the caller is responsible for the stack
    /// pre- and postconditions.
    fn run<S: AsRef<str>>(&mut self, tokens: &[S]) -> CalcResult<String> {
        let postfix = self.to_postfix(tokens)?;
        let value = self.evaluate(postfix)?;

        D::finish(value)
    }

    /// Unconditionally empties the internal stack.
    ///
    /// Idempotent; safe to call at any time to force-reset the engine.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_engine_rejects_a_second_calculation() {
        let mut calculator = DecimalCalculator::new();
        calculator.stack.push(CalculatorValue::Operand("1".to_string()));

        assert_eq!(calculator.calculate(&["1", "+", "1"]).unwrap_err(),
                   CalculatorError::EngineBusy);

        calculator.clear();
        assert_eq!(calculator.calculate(&["1", "+", "1"]).unwrap(), "2");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut calculator = BinaryCalculator::new();
        calculator.clear();
        calculator.clear();

        assert_eq!(calculator.calculate(&["1", "+", "1"]).unwrap(), "10");
    }
}
