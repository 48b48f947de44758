/// Scale factor giving nine significant fractional digits.
pub const PRECISION: f64 = 1e9;

/// Rounds a value to nine fractional digits.
///
/// The value is scaled by [`PRECISION`], rounded to the nearest integer
/// (half away from zero), and scaled back down. This eliminates the trailing
/// representation noise of results like `0.1 + 0.2` without affecting any
/// value a user could meaningfully enter.
///
/// # Parameters
/// - `value`: The value to round.
///
/// # Returns
/// The value rounded to nine fractional digits.
///
/// # Example
/// ```
/// use radixcalc::util::round::set_precision;
///
/// assert_eq!(set_precision(0.1 + 0.2), 0.3);
/// assert_eq!(set_precision(11.0), 11.0);
/// ```
#[must_use]
pub fn set_precision(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}
