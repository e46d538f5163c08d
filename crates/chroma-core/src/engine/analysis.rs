//! Temperature classification and lightness flag.

use crate::types::{Accessibility, Temperature};

/// Fixed hue buckets, degrees. Warm wraps across 0°.
const WARM_END: f64 = 90.0;
const NEUTRAL_END: f64 = 180.0;
const COOL_END: f64 = 330.0;

/// Classify a hue into warm / neutral / cool.
///
/// Buckets: warm `[330,360) ∪ [0,90)`, neutral `[90,180)`, cool `[180,330)`.
/// Constants, never data-dependent.
pub fn classify_temperature(h: f64) -> Temperature {
    if h < WARM_END || h >= COOL_END {
        Temperature::Warm
    } else if h < NEUTRAL_END {
        Temperature::Neutral
    } else {
        Temperature::Cool
    }
}

/// Whether the color reads as light: it contrasts at least as strongly
/// against black as against white. Derived from the already-computed
/// accessibility figures so the two never disagree.
pub fn is_light(accessibility: &Accessibility) -> bool {
    accessibility.on_black.ratio >= accessibility.on_white.ratio
}
