/// Fixed-precision rounding helpers.
///
/// This module provides the final rounding step applied to decimal results to
/// strip floating-point representation noise before the value is re-encoded
/// as a digit string.
pub mod round;
