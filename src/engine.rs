/// Converts infix token sequences to postfix order.
///
/// This module implements the operator-precedence (shunting-yard style)
/// conversion shared by both numeric domains. Operands pass straight through
/// to the output; operators go through the engine's stack, which pops
/// equal-or-higher precedence operators first to preserve left-associativity.
pub mod convert;
/// The engine state and its public surface.
///
/// This module defines the generic [`core::Calculator`] that owns the
/// internal stack, the `calculate`/`clear` entry points with their
/// empty-stack pre- and postconditions, and the [`core::CalcResult`] alias
/// used throughout the crate.
pub mod core;
/// Evaluates postfix token sequences.
///
/// This module implements the stack-based postfix evaluation shared by both
/// numeric domains: operands push, operators pop two values, dispatch to the
/// domain's operation set, and push the result back as a plain operand.
pub mod evaluate;
