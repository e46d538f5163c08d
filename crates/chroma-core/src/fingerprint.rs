//! Cache-key derivation from color coordinates.
//!
//! Two key shapes exist:
//! - [`fingerprint`]: exact-lookup key — L and C at 3 decimals, H at whole
//!   degrees (`0.500-0.120-240`).
//! - [`intelligence_key`]: augmentation-cache key — L and C at 2 decimals,
//!   H at 1 decimal, collapsing near-duplicate colors onto one entry.
//!
//! Rounding rule (the cross-implementation contract): scale by 10^n, apply
//! round-half-away-from-zero to the scaled binary64 value (`f64::round`),
//! then format from the resulting integer. Formatting never touches floats,
//! so no second rounding pass can disagree with the first. Ties are decided
//! on the binary64 value actually held, not the decimal literal a caller
//! wrote: `0.1235` scales to exactly `123.5` and rounds up, while `0.5005`
//! scales to `500.4999…` and rounds down. That is the documented, tested
//! behavior.

use crate::types::OklchColor;

/// Correlation-id prefix for pending asynchronous augmentation.
pub const PENDING_PREFIX: &str = "pending-ai-";

/// Format `value * 10^decimals`, rounded half-away-from-zero, with exactly
/// `decimals` fractional digits. `value` must be non-negative (color
/// coordinates are validated as such).
fn format_rounded(value: f64, decimals: u32) -> String {
    let factor = 10_f64.powi(decimals as i32);
    let scaled = (value * factor).round() as i64;
    if decimals == 0 {
        return scaled.to_string();
    }
    let divisor = 10_i64.pow(decimals);
    format!(
        "{}.{:0width$}",
        scaled / divisor,
        scaled % divisor,
        width = decimals as usize
    )
}

/// Exact-lookup fingerprint: `L(3dp)-C(3dp)-H(0dp)`.
pub fn fingerprint(color: &OklchColor) -> String {
    format!(
        "{}-{}-{}",
        format_rounded(color.l(), 3),
        format_rounded(color.c(), 3),
        format_rounded(color.h(), 0)
    )
}

/// Intelligence-cache key: `L(2dp)-C(2dp)-H(1dp)`.
///
/// Coarser than [`fingerprint`] so colors that differ below perceptual
/// resolution share one augmentation entry.
pub fn intelligence_key(color: &OklchColor) -> String {
    format!(
        "{}-{}-{}",
        format_rounded(color.l(), 2),
        format_rounded(color.c(), 2),
        format_rounded(color.h(), 1)
    )
}

/// Correlation id for a pending augmentation of `color`.
pub fn pending_correlation_id(color: &OklchColor) -> String {
    format!("{PENDING_PREFIX}{}", intelligence_key(color))
}
