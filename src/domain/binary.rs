use crate::{domain::Domain, engine::core::CalcResult, error::CalculatorError};

/// The infix operators of the binary domain.
///
/// Precedence follows the conventional C-style ordering with arithmetic above
/// the bitwise operators; all operators are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Integer addition, `+`.
    Add,
    /// Integer subtraction, `-`.
    Subtract,
    /// Integer multiplication, `*`.
    Multiply,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise exclusive OR.
    Xor,
    /// Bitwise AND followed by complement.
    Nand,
    /// Bitwise OR followed by complement.
    Nor,
}

/// The operator table of the binary domain.
const OPERATORS: &[(&str, BinaryOperator)] = &[("+", BinaryOperator::Add),
                                               ("-", BinaryOperator::Subtract),
                                               ("*", BinaryOperator::Multiply),
                                               ("AND", BinaryOperator::And),
                                               ("OR", BinaryOperator::Or),
                                               ("XOR", BinaryOperator::Xor),
                                               ("NAND", BinaryOperator::Nand),
                                               ("NOR", BinaryOperator::Nor)];

/// The binary (bitwise/integer) numeric domain.
///
/// Operands parse with radix 2 into the host's native signed integer, so the
/// arithmetic is two's-complement at 64 bits. Results re-encode in the same
/// sign-magnitude textual form the operands use: `-110` is negative six.
pub struct BinaryDomain;

impl Domain for BinaryDomain {
    type Operator = BinaryOperator;

    fn lookup(token: &str) -> Option<BinaryOperator> {
        OPERATORS.iter()
                 .find(|(symbol, _)| *symbol == token)
                 .map(|(_, kind)| *kind)
    }

    fn precedence(operator: BinaryOperator) -> u8 {
        use BinaryOperator::{Add, And, Multiply, Nand, Nor, Or, Subtract, Xor};

        match operator {
            Multiply => 4,
            Add | Subtract => 3,
            And | Nand => 2,
            Xor => 1,
            Or | Nor => 0,
        }
    }

    fn apply(operator: BinaryOperator, first: &str, second: &str) -> CalcResult<String> {
        use BinaryOperator::{Add, And, Multiply, Nand, Nor, Or, Subtract, Xor};

        match operator {
            Add => add(first, second),
            Subtract => subtract(first, second),
            Multiply => multiply(first, second),
            And => and(first, second),
            Or => or(first, second),
            Xor => xor(first, second),
            Nand => nand(first, second),
            Nor => nor(first, second),
        }
    }
}

/// Parses a base-2 digit string, with an optional leading `-`.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if the token contains anything
/// but binary digits after the sign.
fn parse_operand(token: &str) -> CalcResult<i64> {
    i64::from_str_radix(token, 2).map_err(|_| CalculatorError::InvalidOperand { token: token.to_string() })
}

/// Re-encodes a value as a sign-magnitude base-2 digit string.
fn format_value(value: i64) -> String {
    if value < 0 {
        format!("-{:b}", value.unsigned_abs())
    } else {
        format!("{value:b}")
    }
}

/// Re-encodes a value with its magnitude left-padded with zeros to `width`
/// digits. Padding never changes the parsed value; it only keeps bitwise
/// results as wide as their inputs.
fn format_padded(value: i64, width: usize) -> String {
    let magnitude = format!("{:b}", value.unsigned_abs());
    let padded = format!("{magnitude:0>width$}");

    if value < 0 {
        format!("-{padded}")
    } else {
        padded
    }
}

/// Returns the digit count of an operand token, ignoring any sign.
fn operand_width(token: &str) -> usize {
    token.trim_start_matches('-').len()
}

/// Applies a bitwise operation, padding the result to the wider operand.
fn bitwise<F>(first: &str, second: &str, operation: F) -> CalcResult<String>
    where F: FnOnce(i64, i64) -> i64
{
    let first_value = parse_operand(first)?;
    let second_value = parse_operand(second)?;
    let width = operand_width(first).max(operand_width(second));

    Ok(format_padded(operation(first_value, second_value), width))
}

/// Applies an arithmetic operation; the result keeps its natural width.
fn arithmetic<F>(first: &str, second: &str, operation: F) -> CalcResult<String>
    where F: FnOnce(i64, i64) -> i64
{
    let first_value = parse_operand(first)?;
    let second_value = parse_operand(second)?;

    Ok(format_value(operation(first_value, second_value)))
}

/// Adds two binary operands.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn add(first: &str, second: &str) -> CalcResult<String> {
    arithmetic(first, second, |a, b| a + b)
}

/// Subtracts the second binary operand from the first.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn subtract(first: &str, second: &str) -> CalcResult<String> {
    arithmetic(first, second, |a, b| a - b)
}

/// Multiplies two binary operands.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn multiply(first: &str, second: &str) -> CalcResult<String> {
    arithmetic(first, second, |a, b| a * b)
}

/// Computes the bitwise AND of two binary operands.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
///
/// # Example
/// ```
/// use radixcalc::domain::binary::and;
///
/// assert_eq!(and("101", "110").unwrap(), "100");
/// ```
pub fn and(first: &str, second: &str) -> CalcResult<String> {
    bitwise(first, second, |a, b| a & b)
}

/// Computes the bitwise OR of two binary operands.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn or(first: &str, second: &str) -> CalcResult<String> {
    bitwise(first, second, |a, b| a | b)
}

/// Computes the bitwise exclusive OR of two binary operands.
///
/// The result keeps the width of the wider operand, so `101 XOR 110` yields
/// `011` rather than `11`.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn xor(first: &str, second: &str) -> CalcResult<String> {
    bitwise(first, second, |a, b| a ^ b)
}

/// Computes the bitwise NAND of two binary operands: AND, then complement.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn nand(first: &str, second: &str) -> CalcResult<String> {
    not(&and(first, second)?)
}

/// Computes the bitwise NOR of two binary operands: OR, then complement.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if either operand does not
/// parse as a base-2 digit string.
pub fn nor(first: &str, second: &str) -> CalcResult<String> {
    not(&or(first, second)?)
}

/// Computes the two's-complement bitwise complement of one operand.
///
/// Not an infix operator; NAND and NOR use it internally and callers may use
/// it directly.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if the operand does not parse
/// as a base-2 digit string.
///
/// # Example
/// ```
/// use radixcalc::domain::binary::not;
///
/// // !5 is -6 in two's complement, encoded sign-magnitude.
/// assert_eq!(not("101").unwrap(), "-110");
/// ```
pub fn not(token: &str) -> CalcResult<String> {
    let value = parse_operand(token)?;

    Ok(format_value(!value))
}

/// Shifts one operand left by exactly one bit.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if the operand does not parse
/// as a base-2 digit string.
pub fn left_shift(token: &str) -> CalcResult<String> {
    let value = parse_operand(token)?;

    Ok(format_value(value << 1))
}

/// Shifts one operand right by exactly one bit (arithmetic shift).
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if the operand does not parse
/// as a base-2 digit string.
pub fn right_shift(token: &str) -> CalcResult<String> {
    let value = parse_operand(token)?;

    Ok(format_value(value >> 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitwise_results_keep_operand_width() {
        assert_eq!(xor("101", "110").unwrap(), "011");
        assert_eq!(and("1", "1111").unwrap(), "0001");
        assert_eq!(or("101", "110").unwrap(), "111");
    }

    #[test]
    fn nand_and_nor_complement_their_base_operation() {
        // 101 AND 110 = 100, complement of 4 is -5.
        assert_eq!(nand("101", "110").unwrap(), "-101");
        // 101 OR 110 = 111, complement of 7 is -8.
        assert_eq!(nor("101", "110").unwrap(), "-1000");
    }

    #[test]
    fn shifts_move_exactly_one_bit() {
        assert_eq!(left_shift("101").unwrap(), "1010");
        assert_eq!(right_shift("101").unwrap(), "10");
        assert_eq!(right_shift("1").unwrap(), "0");
    }

    #[test]
    fn arithmetic_handles_negative_results() {
        assert_eq!(subtract("10", "101").unwrap(), "-11");
        assert_eq!(add("101", "110").unwrap(), "1011");
        assert_eq!(multiply("11", "11").unwrap(), "1001");
    }

    #[test]
    fn invalid_digits_are_rejected() {
        assert_eq!(add("102", "1").unwrap_err(),
                   CalculatorError::InvalidOperand { token: "102".to_string() });
        assert!(not("abc").is_err());
    }

    #[test]
    fn negative_operands_round_trip() {
        assert_eq!(add("-101", "1").unwrap(), "-100");
        assert_eq!(not("-110").unwrap(), "101");
    }
}
