//! Quality values.
//!
//! RFC 9110 section 12.4.2.

use std::cmp::Ordering;
use std::fmt;

/// Quality value (`qvalue`), the relative weight of a preference.
///
/// The value is always in the range `0.0..=1.0`, values outside of it are
/// clamped when creating a `QualityValue`.
#[derive(Copy, Clone, Debug)]
pub struct QualityValue(f64);

impl QualityValue {
    /// Lowest quality, "not acceptable".
    pub const MIN: QualityValue = QualityValue(0.0);
    /// Highest quality, also the default if no quality is given.
    pub const MAX: QualityValue = QualityValue(1.0);
    /// Quality used if none is given or it can't be parsed.
    pub const DEFAULT: QualityValue = QualityValue::MAX;

    /// Create a new `QualityValue`, clamping `value` to `0.0..=1.0`.
    ///
    /// NaN is treated as an unusable weight and results in
    /// [`QualityValue::DEFAULT`].
    pub fn new(value: f64) -> QualityValue {
        if value.is_nan() {
            QualityValue::DEFAULT
        } else if value == 0.0 {
            // Normalise `-0.0`, `total_cmp` orders it before `0.0`.
            QualityValue::MIN
        } else {
            QualityValue(value.clamp(0.0, 1.0))
        }
    }

    /// Parse a quality value.
    ///
    /// This is more lenient than the `qvalue` grammar, any floating point
    /// number is accepted and clamped to the valid range. Returns `None` if
    /// `value` is not a number.
    pub fn parse(value: &str) -> Option<QualityValue> {
        match value.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => Some(QualityValue::new(value)),
            _ => None,
        }
    }

    /// Returns the value as float.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` if the quality is zero, meaning "not acceptable".
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for QualityValue {
    fn default() -> QualityValue {
        QualityValue::DEFAULT
    }
}

impl Eq for QualityValue {}

impl PartialEq for QualityValue {
    fn eq(&self, other: &QualityValue) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Ord for QualityValue {
    fn cmp(&self, other: &QualityValue) -> Ordering {
        // NOTE: never NaN, see `QualityValue::new`.
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for QualityValue {
    fn partial_cmp(&self, other: &QualityValue) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Formats the value with at most three decimals, without trailing zeros.
impl fmt::Display for QualityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let thousandths = (self.0 * 1000.0).round() as u16;
        match thousandths {
            0 => f.write_str("0"),
            1000.. => f.write_str("1"),
            n => {
                let mut digits = format!("{n:03}");
                while digits.ends_with('0') {
                    let _ = digits.pop();
                }
                write!(f, "0.{digits}")
            }
        }
    }
}
