//! Timestamp and signed-duration support, backed by `chrono`.
//!
//! The zero timestamp is the instant `0001-01-01T00:00:00` UTC. It is a
//! sentinel, not a real time: the Unix epoch is an ordinary non-zero
//! timestamp. A timestamp is zero when its UTC instant equals the sentinel,
//! whatever offset it carries.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::classify::Classify;
use crate::shape::Shape;
use crate::zero::Zero;

static ZERO_INSTANT: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("0001-01-01T00:00:00 is a valid datetime")
});

/// Returns the zero timestamp, `0001-01-01T00:00:00` UTC.
///
/// ```
/// use chrono::Datelike;
///
/// assert_eq!(coalesce::zero_time().year(), 1);
/// ```
pub fn zero_time() -> DateTime<Utc> {
    Utc.from_utc_datetime(&ZERO_INSTANT)
}

impl Zero for NaiveDateTime {
    fn zero() -> Self {
        *ZERO_INSTANT
    }

    fn is_zero(&self) -> bool {
        *self == *ZERO_INSTANT
    }
}

impl Zero for DateTime<Utc> {
    fn zero() -> Self {
        zero_time()
    }

    fn is_zero(&self) -> bool {
        self.naive_utc() == *ZERO_INSTANT
    }
}

impl Zero for DateTime<FixedOffset> {
    fn zero() -> Self {
        Utc.fix().from_utc_datetime(&ZERO_INSTANT)
    }

    fn is_zero(&self) -> bool {
        self.naive_utc() == *ZERO_INSTANT
    }
}

impl Zero for TimeDelta {
    fn zero() -> Self {
        TimeDelta::zero()
    }

    fn is_zero(&self) -> bool {
        TimeDelta::is_zero(self)
    }
}

impl<Tz: TimeZone> Classify for DateTime<Tz> {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.naive_utc() == *ZERO_INSTANT,
        }
    }
}

impl Classify for NaiveDateTime {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: Zero::is_zero(self),
        }
    }
}

impl Classify for TimeDelta {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: TimeDelta::is_zero(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn zero_time_is_year_one() {
        let zero = zero_time();
        assert_eq!(zero.year(), 1);
        assert_eq!(zero.month(), 1);
        assert_eq!(zero.day(), 1);
        assert_eq!(zero.hour(), 0);
        assert!(Zero::is_zero(&zero));
    }

    #[test]
    fn epoch_is_not_zero() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        assert!(!Zero::is_zero(&epoch));
        assert!(!epoch.is_empty_value());
    }

    #[test]
    fn zero_ignores_offset() {
        let east = FixedOffset::east_opt(5 * 3600).expect("valid offset");
        let shifted = zero_time().with_timezone(&east);
        assert!(Zero::is_zero(&shifted));
        assert!(shifted.is_empty_value());
        assert_ne!(shifted.naive_local(), *ZERO_INSTANT);
    }

    #[test]
    fn fixed_offset_zero() {
        let zero = <DateTime<FixedOffset> as Zero>::zero();
        assert!(Zero::is_zero(&zero));
        assert_eq!(zero.offset().local_minus_utc(), 0);
    }

    #[test]
    fn naive_zero() {
        assert!(Zero::is_zero(&<NaiveDateTime as Zero>::zero()));
        assert!(!Zero::is_zero(&DateTime::<Utc>::UNIX_EPOCH.naive_utc()));
    }

    #[test]
    fn time_delta_zero() {
        assert!(Zero::is_zero(&TimeDelta::zero()));
        assert!(!Zero::is_zero(&TimeDelta::seconds(-1)));
        assert!(!TimeDelta::milliseconds(5).is_empty_value());
    }
}
