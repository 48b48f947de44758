use crate::{domain::Domain, engine::core::CalcResult, error::CalculatorError,
            util::round::set_precision};

/// The infix operators of the decimal domain.
///
/// Multiplication and division bind tighter than addition and subtraction;
/// all operators are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalOperator {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Subtract,
    /// Multiplication, `*`.
    Multiply,
    /// Division, `/`.
    Divide,
}

/// The operator table of the decimal domain.
const OPERATORS: &[(&str, DecimalOperator)] = &[("+", DecimalOperator::Add),
                                                ("-", DecimalOperator::Subtract),
                                                ("*", DecimalOperator::Multiply),
                                                ("/", DecimalOperator::Divide)];

/// The decimal (floating-point) numeric domain.
///
/// Operands parse as `f64`; results re-encode with the shortest
/// representation that round-trips, and the final result of a calculation is
/// rounded to nine fractional digits to strip floating-point noise.
pub struct DecimalDomain;

impl Domain for DecimalDomain {
    type Operator = DecimalOperator;

    fn lookup(token: &str) -> Option<DecimalOperator> {
        OPERATORS.iter()
                 .find(|(symbol, _)| *symbol == token)
                 .map(|(_, kind)| *kind)
    }

    fn precedence(operator: DecimalOperator) -> u8 {
        use DecimalOperator::{Add, Divide, Multiply, Subtract};

        match operator {
            Multiply | Divide => 1,
            Add | Subtract => 0,
        }
    }

    fn apply(operator: DecimalOperator, first: &str, second: &str) -> CalcResult<String> {
        use DecimalOperator::{Add, Divide, Multiply, Subtract};

        match operator {
            Add => add(first, second),
            Subtract => subtract(first, second),
            Multiply => multiply(first, second),
            Divide => divide(first, second),
        }
    }

    fn finish(value: String) -> CalcResult<String> {
        let rounded = set_precision(parse_operand(&value)?);

        Ok(rounded.to_string())
    }
}

/// Parses a base-10 numeral.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if the token is not a valid
/// decimal numeral.
fn parse_operand(token: &str) -> CalcResult<f64> {
    token.parse()
         .map_err(|_| CalculatorError::InvalidOperand { token: token.to_string() })
}

/// Applies an arithmetic operation to two parsed operands.
fn arithmetic<F>(first: &str, second: &str, operation: F) -> CalcResult<String>
    where F: FnOnce(f64, f64) -> f64
{
    let first_value = parse_operand(first)?;
    let second_value = parse_operand(second)?;

    Ok(operation(first_value, second_value).to_string())
}

/// Adds two decimal operands.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand is not a
/// valid decimal numeral.
pub fn add(first: &str, second: &str) -> CalcResult<String> {
    arithmetic(first, second, |a, b| a + b)
}

/// Subtracts the second decimal operand from the first.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand is not a
/// valid decimal numeral.
pub fn subtract(first: &str, second: &str) -> CalcResult<String> {
    arithmetic(first, second, |a, b| a - b)
}

/// Multiplies two decimal operands.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand is not a
/// valid decimal numeral.
pub fn multiply(first: &str, second: &str) -> CalcResult<String> {
    arithmetic(first, second, |a, b| a * b)
}

/// Divides the first decimal operand by the second.
///
/// # Errors
/// Returns [`CalculatorError::DivideByZero`] if the divisor is zero, or
/// [`CalculatorError::InvalidOperand`] if either operand is not a valid
/// decimal numeral.
///
/// # Example
/// ```
/// use radixcalc::{domain::decimal::divide, error::CalculatorError};
///
/// assert_eq!(divide("9", "2").unwrap(), "4.5");
/// assert_eq!(divide("4", "0").unwrap_err(), CalculatorError::DivideByZero);
/// ```
pub fn divide(first: &str, second: &str) -> CalcResult<String> {
    let first_value = parse_operand(first)?;
    let second_value = parse_operand(second)?;

    if second_value == 0.0 {
        return Err(CalculatorError::DivideByZero);
    }

    Ok((first_value / second_value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_and_division_respect_operand_order() {
        assert_eq!(subtract("8", "3").unwrap(), "5");
        assert_eq!(divide("1", "4").unwrap(), "0.25");
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert_eq!(divide("4", "0").unwrap_err(), CalculatorError::DivideByZero);
        assert_eq!(divide("4", "0.0").unwrap_err(), CalculatorError::DivideByZero);
    }

    #[test]
    fn invalid_numerals_are_rejected() {
        assert_eq!(add("abc", "1").unwrap_err(),
                   CalculatorError::InvalidOperand { token: "abc".to_string() });
        assert!(multiply("1", "1.2.3").is_err());
    }

    #[test]
    fn finish_strips_representation_noise() {
        let noisy = add("0.1", "0.2").unwrap();
        assert_eq!(DecimalDomain::finish(noisy).unwrap(), "0.3");
        assert_eq!(DecimalDomain::finish("11".to_string()).unwrap(), "11");
    }
}
