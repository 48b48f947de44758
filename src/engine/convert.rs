use crate::{domain::Domain,
            engine::core::{CalcResult, Calculator},
            value::CalculatorValue};

impl<D: Domain> Calculator<D> {
    /// Converts an infix token sequence into postfix (Reverse Polish) order.
    ///
    /// Tokens are scanned left to right. Operands append directly to the
    /// output. An operator first pops every stacked operator whose precedence
    /// is greater than or equal to its own (equal precedence pops first, which
    /// makes every operator left-associative), then pushes itself. After the
    /// scan the remaining stacked operators drain into the output in pop
    /// order, leaving the internal stack empty.
    ///
    /// # Parameters
    /// - `tokens`: The expression as alternating operand and operator tokens.
    ///
    /// # Returns
    /// The equivalent postfix-ordered sequence of calculator values.
    ///
    /// # Errors
    /// Returns [`CalculatorError::UnknownOperator`] if a token passes the
    /// operator membership check but cannot be classified.
    ///
    /// [`CalculatorError::UnknownOperator`]: crate::error::CalculatorError::UnknownOperator
    ///
    /// # Example
    /// ```
    /// use radixcalc::{engine::core::DecimalCalculator, value::CalculatorValue};
    ///
    /// let mut calculator = DecimalCalculator::new();
    /// let postfix = calculator.to_postfix(&["3", "+", "4", "*", "2"]).unwrap();
    ///
    /// let rendered: Vec<&str> = postfix.iter()
    ///                                  .map(|value| match value {
    ///                                      CalculatorValue::Operand(operand) => operand.as_str(),
    ///                                      CalculatorValue::Operator { symbol, .. } => symbol.as_str(),
    ///                                  })
    ///                                  .collect();
    /// assert_eq!(rendered, ["3", "4", "2", "*", "+"]);
    /// ```
    pub fn to_postfix<S: AsRef<str>>(&mut self,
                                     tokens: &[S])
                                     -> CalcResult<Vec<CalculatorValue<D::Operator>>> {
        let mut postfix = Vec::with_capacity(tokens.len());

        for token in tokens {
            let token = token.as_ref();

            if D::is_operator(token) {
                let kind = D::classify(token)?;

                loop {
                    let pops_first = match self.stack.last() {
                        Some(CalculatorValue::Operator { kind: top, .. }) => {
                            D::precedence(*top) >= D::precedence(kind)
                        },
                        _ => false,
                    };

                    if !pops_first {
                        break;
                    }
                    if let Some(top) = self.stack.pop() {
                        postfix.push(top);
                    }
                }

                self.stack.push(CalculatorValue::Operator { symbol: token.to_string(),
                                                            kind });
            } else {
                postfix.push(CalculatorValue::Operand(token.to_string()));
            }
        }

        while let Some(operator) = self.stack.pop() {
            postfix.push(operator);
        }

        Ok(postfix)
    }
}
