use maldet_core::{Feature, FeatureValue};

/// Numeric value of a feature for scoring. Total: never fails.
///
/// Flags (`has_ip_host`, `has_at`, `has_login`, `has_verify`, `has_secure`,
/// `has_hex_path`) become exactly 0.0 or 1.0. Everything else is cast, and a
/// cast that does not yield a finite number becomes 0.0.
pub fn coerce(feature: Feature, value: FeatureValue) -> f64 {
    if feature.is_flag() {
        return if value.is_set() { 1.0 } else { 0.0 };
    }
    finite_or_zero(value.as_f64())
}

pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
