use radixcalc::{calculate_binary, calculate_decimal,
                engine::core::{BinaryCalculator, DecimalCalculator},
                error::CalculatorError,
                value::CalculatorValue};

fn assert_decimal(tokens: &[&str], expected: &str) {
    match calculate_decimal(tokens) {
        Ok(result) => assert_eq!(result, expected, "for {tokens:?}"),
        Err(e) => panic!("Calculation of {tokens:?} failed: {e}"),
    }
}

fn assert_binary(tokens: &[&str], expected: &str) {
    match calculate_binary(tokens) {
        Ok(result) => assert_eq!(result, expected, "for {tokens:?}"),
        Err(e) => panic!("Calculation of {tokens:?} failed: {e}"),
    }
}

#[test]
fn multiplication_binds_before_addition() {
    assert_decimal(&["3", "+", "4", "*", "2"], "11");
    assert_decimal(&["4", "*", "2", "+", "3"], "11");
    assert_binary(&["1", "+", "10", "*", "11"], "111");
}

#[test]
fn equal_precedence_evaluates_left_to_right() {
    assert_decimal(&["8", "-", "3", "-", "2"], "3");
    assert_decimal(&["8", "/", "2", "/", "2"], "2");
    assert_binary(&["100", "-", "10", "-", "1"], "1");
}

#[test]
fn conversion_produces_postfix_order() {
    let mut calculator = DecimalCalculator::new();
    let postfix = calculator.to_postfix(&["3", "+", "4", "*", "2"]).unwrap();

    let rendered: Vec<&str> = postfix.iter()
                                     .map(|value| match value {
                                         CalculatorValue::Operand(operand) => operand.as_str(),
                                         CalculatorValue::Operator { symbol, .. } => symbol.as_str(),
                                     })
                                     .collect();
    assert_eq!(rendered, ["3", "4", "2", "*", "+"]);
}

#[test]
fn bitwise_operators_compute_their_truth_tables() {
    assert_binary(&["101", "AND", "110"], "100");
    assert_binary(&["101", "OR", "110"], "111");
    assert_binary(&["101", "XOR", "110"], "011");
}

#[test]
fn nand_and_nor_complement_their_base_operations() {
    assert_binary(&["101", "NAND", "110"], "-101");
    assert_binary(&["101", "NOR", "110"], "-1000");
}

#[test]
fn and_binds_before_or() {
    assert_binary(&["101", "OR", "110", "AND", "011"], "111");
    assert_binary(&["110", "AND", "011", "OR", "101"], "111");
}

#[test]
fn division_by_zero_fails_and_leaves_the_engine_reusable() {
    let mut calculator = DecimalCalculator::new();

    assert_eq!(calculator.calculate(&["4", "/", "0"]).unwrap_err(),
               CalculatorError::DivideByZero);

    // The stack was cleared on the failure path, so the next call succeeds.
    assert_eq!(calculator.calculate(&["4", "/", "2"]).unwrap(), "2");
}

#[test]
fn clear_after_a_failure_restores_the_engine() {
    let mut calculator = BinaryCalculator::new();

    assert!(calculator.calculate(&["102", "AND", "1"]).is_err());
    calculator.clear();

    assert_eq!(calculator.calculate(&["101", "AND", "110"]).unwrap(), "100");
}

#[test]
fn final_results_are_rounded_to_nine_fractional_digits() {
    assert_decimal(&["0.1", "+", "0.2"], "0.3");
    assert_decimal(&["0.1", "*", "3"], "0.3");
    assert_decimal(&["1", "/", "3"], "0.333333333");
}

#[test]
fn leftover_values_are_rejected_as_malformed() {
    assert_eq!(calculate_decimal(&["3", "4"]).unwrap_err(),
               CalculatorError::MalformedExpression { remaining: 2 });
    assert_eq!(calculate_decimal::<&str>(&[]).unwrap_err(),
               CalculatorError::MalformedExpression { remaining: 0 });
}

#[test]
fn a_single_operand_is_its_own_result() {
    assert_decimal(&["5"], "5");
    assert_binary(&["101"], "101");
}

#[test]
fn operators_without_two_operands_are_rejected() {
    assert_eq!(calculate_decimal(&["+"]).unwrap_err(),
               CalculatorError::InsufficientOperands { symbol: "+".to_string() });
    assert_eq!(calculate_binary(&["11", "XOR"]).unwrap_err(),
               CalculatorError::InsufficientOperands { symbol: "XOR".to_string() });
}

#[test]
fn unparsable_operands_are_rejected_in_both_domains() {
    assert_eq!(calculate_decimal(&["abc", "+", "1"]).unwrap_err(),
               CalculatorError::InvalidOperand { token: "abc".to_string() });
    assert_eq!(calculate_binary(&["102", "OR", "1"]).unwrap_err(),
               CalculatorError::InvalidOperand { token: "102".to_string() });
}

#[test]
fn one_engine_handles_independent_expressions_in_sequence() {
    let mut calculator = DecimalCalculator::new();

    assert_eq!(calculator.calculate(&["1", "+", "2"]).unwrap(), "3");
    assert_eq!(calculator.calculate(&["2", "*", "3", "+", "4"]).unwrap(), "10");
    assert_eq!(calculator.calculate(&["10", "-", "4", "*", "2"]).unwrap(), "2");
}
