//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for schedule changes, registration times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Convert epoch seconds (as reported by the hub for schedule end
/// periods) into a [`Timestamp`].
///
/// Returns `None` for values outside the representable range.
#[must_use]
pub fn from_epoch_seconds(secs: i64) -> Option<Timestamp> {
    DateTime::from_timestamp(secs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_convert_epoch_seconds() {
        let ts = from_epoch_seconds(1_500_000_000).unwrap();
        assert_eq!(ts.timestamp(), 1_500_000_000);
    }

    #[test]
    fn should_return_none_for_out_of_range_epoch() {
        assert!(from_epoch_seconds(i64::MAX).is_none());
    }
}
