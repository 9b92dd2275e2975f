//! Canonical numeric results.

use serde::{Deserialize, Serialize};

/// A finite expression value.
///
/// Values within [`Value::INTEGER_TOLERANCE`] of an integer are stored as
/// that integer; anything else is rounded to three decimal places.
///
/// ```
/// use target_x::expr::Value;
///
/// assert_eq!(Value::from_f64(2.0000000000000004).unwrap().as_integer(), Some(2));
/// assert_eq!(Value::from_f64(1.0 / 3.0).unwrap().as_f64(), 0.333);
/// assert!(Value::from_f64(f64::NAN).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(f64);

impl Value {
    /// Distance from an integer still treated as that integer.
    pub const INTEGER_TOLERANCE: f64 = 1e-9;

    /// Decimal places kept for non-integers.
    pub const DECIMAL_PLACES: i32 = 3;

    /// Canonicalize a raw result, `None` if it is infinite or NaN.
    #[must_use]
    pub fn from_f64(raw: f64) -> Option<Self> {
        if !raw.is_finite() {
            return None;
        }

        let nearest = raw.round();
        let canonical = if (raw - nearest).abs() <= Self::INTEGER_TOLERANCE {
            nearest
        } else {
            let scale = 10f64.powi(Self::DECIMAL_PLACES);
            (raw * scale).round() / scale
        };

        // Adding zero turns -0.0 into 0.0.
        Some(Self(canonical + 0.0))
    }

    /// Value as a float.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    /// Whether the value is a whole number.
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.0.fract() == 0.0
    }

    /// Whole-number value, if it is one and fits in an `i64`.
    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        // 2^63 is exactly representable; i64::MAX is not.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if self.is_integer() && self.0 >= -LIMIT && self.0 < LIMIT {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    /// Whether this value hits `target` exactly.
    #[must_use]
    pub fn matches(self, target: i64) -> bool {
        self.as_integer() == Some(target)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
