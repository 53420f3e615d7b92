//! RSSI to signal level classification.

use crate::types::constants::rssi;

/// Maps an RSSI reading to a level bucket.
///
/// Implementations must be monotonic non-decreasing in `rssi`. The reader
/// clamps whatever comes back into `0..=max_level`.
///
/// Any `Fn(i32, i32) -> i32` closure is a classifier:
///
/// ```rust
/// use wifiinfo::SignalClassifier;
///
/// let halves = |rssi: i32, max_level: i32| if rssi > -70 { max_level } else { 0 };
/// assert_eq!(halves.level(-60, 100), 100);
/// ```
pub trait SignalClassifier: Send + Sync {
    /// Returns the level for `rssi` on a scale with `max_level` buckets.
    fn level(&self, rssi: i32, max_level: i32) -> i32;
}

impl<F> SignalClassifier for F
where
    F: Fn(i32, i32) -> i32 + Send + Sync,
{
    fn level(&self, rssi: i32, max_level: i32) -> i32 {
        self(rssi, max_level)
    }
}

/// The platform's legacy linear curve.
///
/// - `rssi <= -100`: level 0
/// - `rssi >= -55`: level `max_level - 1`
/// - otherwise: linear interpolation, truncated toward zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearClassifier;

impl SignalClassifier for LinearClassifier {
    fn level(&self, rssi: i32, max_level: i32) -> i32 {
        if max_level < 1 {
            return 0;
        }
        if rssi <= rssi::MIN {
            0
        } else if rssi >= rssi::MAX {
            max_level - 1
        } else {
            let input_range = i64::from(rssi::MAX - rssi::MIN);
            let output_range = i64::from(max_level - 1);
            let level = i64::from(rssi - rssi::MIN) * output_range / input_range;
            i32::try_from(level).unwrap_or(max_level - 1)
        }
    }
}
