//! # radixcalc
//!
//! radixcalc is a stack-based infix calculator written in Rust.
//! It converts already-tokenized infix expressions to postfix (Reverse
//! Polish) order with an operator-precedence algorithm and evaluates them on
//! an operand stack, in one of two numeric domains: two's-complement binary
//! integers with bitwise operators, or decimal floating-point numbers.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::core::{BinaryCalculator, CalcResult, DecimalCalculator};

/// Defines the numeric domains of the calculator.
///
/// This module declares the `Domain` trait — the capability seam between the
/// generic engine and a concrete numeric domain — together with the two
/// implementations: binary (bitwise/integer, base-2 operands) and decimal
/// (floating-point, base-10 operands). Each domain contributes its operator
/// table, precedence ranks, and the pure operation set applied to
/// string-encoded operands.
///
/// # Responsibilities
/// - Classifies operator tokens into per-domain operator kinds.
/// - Ranks operators for the left-associative precedence comparison.
/// - Implements each operator's arithmetic or bitwise semantics.
pub mod domain;
/// Orchestrates the conversion and evaluation pipeline.
///
/// This module ties together the infix-to-postfix converter and the postfix
/// evaluator behind the generic `Calculator` engine, which owns the internal
/// stack and exposes the `calculate`/`clear` surface with its empty-stack
/// pre- and postconditions.
///
/// # Responsibilities
/// - Holds the engine state: one stack per instance, empty between calls.
/// - Converts infix token sequences to postfix order.
/// - Evaluates postfix sequences against the active domain's operations.
pub mod engine;
/// Provides unified error types for the calculator.
///
/// This module defines all errors that can be raised while converting or
/// evaluating an expression: engine misuse, unclassifiable operators,
/// operand-stack underflow, malformed expressions, unparsable operands, and
/// division by zero.
///
/// # Responsibilities
/// - Defines the `CalculatorError` enum covering all failure modes.
/// - Attaches the offending token or symbol where one exists.
/// - Supports integration with standard error handling traits.
pub mod error;
/// General utilities for numeric cleanup.
///
/// This module provides the fixed-precision rounding helper applied to final
/// decimal results to strip floating-point representation noise.
pub mod util;
/// Defines the values flowing through the engine.
///
/// This module declares `CalculatorValue`, the tagged union of operand and
/// operator that both the postfix output sequence and the internal stack are
/// made of.
pub mod value;

/// Calculates a binary (bitwise/integer) infix expression in one shot.
///
/// Constructs a fresh engine, so independent callers never share state. Use
/// [`engine::core::BinaryCalculator`] directly to reuse one engine across
/// expressions.
///
/// # Errors
/// Returns an error if the expression is malformed or an operand is not a
/// base-2 digit string.
///
/// # Example
/// ```
/// use radixcalc::calculate_binary;
///
/// let result = calculate_binary(&["101", "AND", "110"]).unwrap();
/// assert_eq!(result, "100");
/// ```
pub fn calculate_binary<S: AsRef<str>>(tokens: &[S]) -> CalcResult<String> {
    let mut calculator = BinaryCalculator::new();

    calculator.calculate(tokens)
}

/// Calculates a decimal (floating-point) infix expression in one shot.
///
/// Constructs a fresh engine, so independent callers never share state. Use
/// [`engine::core::DecimalCalculator`] directly to reuse one engine across
/// expressions.
///
/// # Errors
/// Returns an error if the expression is malformed, an operand is not a
/// decimal numeral, or a division by zero occurs.
///
/// # Example
/// ```
/// use radixcalc::calculate_decimal;
///
/// let result = calculate_decimal(&["8", "-", "3", "-", "2"]).unwrap();
/// assert_eq!(result, "3");
/// ```
pub fn calculate_decimal<S: AsRef<str>>(tokens: &[S]) -> CalcResult<String> {
    let mut calculator = DecimalCalculator::new();

    calculator.calculate(tokens)
}
