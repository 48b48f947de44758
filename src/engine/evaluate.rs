use crate::{domain::Domain,
            engine::core::{CalcResult, Calculator},
            error::CalculatorError,
            value::CalculatorValue};

impl<D: Domain> Calculator<D> {
    /// Evaluates a postfix-ordered sequence on the operand stack.
    ///
    /// Operands push onto the stack. An operator pops its second operand
    /// first and its first (left) operand second, dispatches to the domain's
    /// operation set, and pushes the result back as a plain operand. After
    /// the scan exactly one value must remain; it is popped and returned.
    ///
    /// # Parameters
    /// - `postfix`: The postfix sequence produced by `to_postfix`.
    ///
    /// # Returns
    /// The final result value as a digit string.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InsufficientOperands`] if an operator finds
    /// fewer than two stacked values, [`CalculatorError::MalformedExpression`]
    /// if anything other than exactly one value remains at the end, and any
    /// error raised by the domain's operations.
    pub(crate) fn evaluate(&mut self,
                           postfix: Vec<CalculatorValue<D::Operator>>)
                           -> CalcResult<String> {
        for value in postfix {
            match value {
                CalculatorValue::Operand(_) => self.stack.push(value),
                CalculatorValue::Operator { symbol, kind } => {
                    let second = self.pop_operand(&symbol)?;
                    let first = self.pop_operand(&symbol)?;
                    let result = D::apply(kind, &first, &second)?;

                    self.stack.push(CalculatorValue::Operand(result));
                },
            }
        }

        let remaining = self.stack.len();

        // The loop above only ever pushes operands, so a leftover operator is
        // as malformed as a wrong value count.
        match self.stack.pop() {
            Some(CalculatorValue::Operand(value)) if remaining == 1 => Ok(value),
            _ => Err(CalculatorError::MalformedExpression { remaining }),
        }
    }

    /// Pops one operand for `symbol`, failing if none is available.
    fn pop_operand(&mut self, symbol: &str) -> CalcResult<String> {
        match self.stack.pop() {
            Some(CalculatorValue::Operand(value)) => Ok(value),
            _ => Err(CalculatorError::InsufficientOperands { symbol: symbol.to_string() }),
        }
    }
}
