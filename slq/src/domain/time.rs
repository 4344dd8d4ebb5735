//! Expected-time handling for departures.
//!
//! The SL API sends expected times as naive local timestamps
//! (`YYYY-MM-DDTHH:MM:SS`, no zone designator). They are compared against the
//! local wall clock represented the same naive way; no timezone conversion
//! happens anywhere.

use chrono::{NaiveDateTime, SubsecRound, Timelike};
use std::fmt;

/// Format of the `expected` field.
const EXPECTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Clock label shown when an expected time cannot be parsed.
pub const UNKNOWN_CLOCK: &str = "??:??";

/// Error returned when parsing an invalid expected time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid expected time: {input:?}")]
pub struct TimeError {
    input: String,
}

/// A parsed expected departure time.
///
/// # Examples
///
/// ```
/// use slq::domain::ExpectedTime;
///
/// let t = ExpectedTime::parse("2025-09-09T13:33:30").unwrap();
/// assert_eq!(t.to_string(), "13:33");
///
/// assert!(ExpectedTime::parse("13:33").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpectedTime(NaiveDateTime);

impl ExpectedTime {
    /// Parse an expected time.
    ///
    /// Only the leading `YYYY-MM-DDTHH:MM:SS` part is read; trailing text
    /// such as fractional seconds is ignored.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        NaiveDateTime::parse_and_remainder(s, EXPECTED_FORMAT)
            .map(|(dt, _rest)| Self(dt))
            .map_err(|_| TimeError {
                input: s.to_string(),
            })
    }

    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Whole minutes from `now` until this time, truncated toward zero.
    ///
    /// `now` is cut to whole seconds first, the precision of expected times.
    /// Times in the past yield zero.
    pub fn minutes_from(&self, now: NaiveDateTime) -> u32 {
        let minutes = self
            .0
            .signed_duration_since(now.trunc_subsecs(0))
            .num_minutes();
        u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for ExpectedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

/// How long until a departure leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Leaving now (less than a minute away, or already past).
    Now,
    /// Leaving in this many whole minutes.
    Minutes(u32),
    /// The expected time could not be parsed.
    Unknown,
}

impl Wait {
    /// Evaluate the wait for an `expected` string relative to `now`.
    pub fn until(expected: &str, now: NaiveDateTime) -> Self {
        match ExpectedTime::parse(expected) {
            Ok(t) => match t.minutes_from(now) {
                0 => Wait::Now,
                n => Wait::Minutes(n),
            },
            Err(_) => Wait::Unknown,
        }
    }

    /// The wait in minutes, or `None` if unknown.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            Wait::Now => Some(0),
            Wait::Minutes(n) => Some(*n),
            Wait::Unknown => None,
        }
    }
}

impl fmt::Display for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wait::Now => f.write_str("Now"),
            Wait::Minutes(n) => write!(f, "{n}m"),
            Wait::Unknown => f.write_str("?"),
        }
    }
}

/// The `HH:MM` clock label for an expected time, or `??:??`.
pub fn clock_label(expected: &str) -> String {
    ExpectedTime::parse(expected)
        .map(|t| t.to_string())
        .unwrap_or_else(|_| UNKNOWN_CLOCK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = ExpectedTime::parse("2025-09-09T13:33:30").unwrap();
        assert_eq!(t.to_datetime(), at(13, 33, 30));

        let t = ExpectedTime::parse("2025-09-09T00:00:00").unwrap();
        assert_eq!(t.to_string(), "00:00");
    }

    #[test]
    fn parse_ignores_trailing_text() {
        let t = ExpectedTime::parse("2025-09-09T13:33:30Z").unwrap();
        assert_eq!(t.to_datetime(), at(13, 33, 30));
    }

    #[test]
    fn parse_invalid_format() {
        assert!(ExpectedTime::parse("").is_err());
        assert!(ExpectedTime::parse("13:33").is_err());
        assert!(ExpectedTime::parse("2025-09-09 13:33:30").is_err());
        assert!(ExpectedTime::parse("2025-09-09T25:00:00").is_err());
        assert!(ExpectedTime::parse("soon").is_err());
    }

    #[test]
    fn error_display() {
        let err = ExpectedTime::parse("soon").unwrap_err();
        assert_eq!(err.to_string(), "invalid expected time: \"soon\"");
    }

    #[test]
    fn clock_label_formats() {
        assert_eq!(clock_label("2025-09-09T07:05:59"), "07:05");
        assert_eq!(clock_label("not a time"), "??:??");
    }

    #[test]
    fn wait_now_when_equal() {
        assert_eq!(Wait::until("2025-09-09T13:33:30", at(13, 33, 30)), Wait::Now);
    }

    #[test]
    fn wait_in_whole_minutes() {
        let wait = Wait::until("2025-09-09T13:38:30", at(13, 33, 30));
        assert_eq!(wait, Wait::Minutes(5));
        assert_eq!(wait.to_string(), "5m");
    }

    #[test]
    fn wait_truncates_partial_minutes() {
        // 4 minutes 59 seconds
        assert_eq!(
            Wait::until("2025-09-09T13:38:29", at(13, 33, 30)),
            Wait::Minutes(4)
        );
        // 59 seconds
        assert_eq!(Wait::until("2025-09-09T13:34:29", at(13, 33, 30)), Wait::Now);
    }

    #[test]
    fn wait_ignores_subsecond_now() {
        let now = NaiveDate::from_ymd_opt(2025, 9, 9)
            .unwrap()
            .and_hms_milli_opt(13, 30, 0, 400)
            .unwrap();
        assert_eq!(Wait::until("2025-09-09T13:35:00", now), Wait::Minutes(5));

        let now = now.with_nanosecond(999_999_999).unwrap();
        assert_eq!(Wait::until("2025-09-09T13:31:00", now), Wait::Minutes(1));
    }

    #[test]
    fn wait_in_past_is_now() {
        assert_eq!(Wait::until("2025-09-09T13:00:00", at(13, 33, 30)), Wait::Now);
    }

    #[test]
    fn wait_across_midnight() {
        let now = at(23, 58, 0);
        assert_eq!(Wait::until("2025-09-10T00:03:00", now), Wait::Minutes(5));
    }

    #[test]
    fn wait_unknown_for_garbage() {
        let wait = Wait::until("??", at(13, 33, 30));
        assert_eq!(wait, Wait::Unknown);
        assert_eq!(wait.to_string(), "?");
        assert_eq!(wait.minutes(), None);
    }

    #[test]
    fn wait_labels() {
        assert_eq!(Wait::Now.to_string(), "Now");
        assert_eq!(Wait::Minutes(12).to_string(), "12m");
        assert_eq!(Wait::Unknown.to_string(), "?");
        assert_eq!(Wait::Now.minutes(), Some(0));
    }

    #[test]
    fn minutes_from_far_future() {
        let t = ExpectedTime::parse("2025-09-10T13:33:30").unwrap();
        let now = at(13, 33, 30);
        assert_eq!(t.minutes_from(now), 24 * 60);
        assert_eq!(t.minutes_from(now + Duration::days(2)), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    prop_compose! {
        fn valid_datetime()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap()
        }
    }

    proptest! {
        /// Rendering then parsing an expected time gives the same instant
        #[test]
        fn format_parse_roundtrip(dt in valid_datetime()) {
            let s = dt.format(EXPECTED_FORMAT).to_string();
            prop_assert_eq!(ExpectedTime::parse(&s).unwrap().to_datetime(), dt);
        }

        /// Clock label is HH:MM of the parsed time
        #[test]
        fn clock_label_is_hhmm(dt in valid_datetime()) {
            let s = dt.format(EXPECTED_FORMAT).to_string();
            prop_assert_eq!(clock_label(&s), dt.format("%H:%M").to_string());
        }

        /// A departure exactly n minutes away waits n minutes
        #[test]
        fn whole_minutes_exact(now in valid_datetime(), n in 0i64..600) {
            let expected = (now + Duration::minutes(n)).format(EXPECTED_FORMAT).to_string();
            let wait = Wait::until(&expected, now);
            prop_assert_eq!(wait.minutes(), Some(n as u32));
        }

        /// Departures in the past never produce a negative wait
        #[test]
        fn past_is_clamped(now in valid_datetime(), secs in 1i64..86_400) {
            let expected = (now - Duration::seconds(secs)).format(EXPECTED_FORMAT).to_string();
            prop_assert_eq!(Wait::until(&expected, now), Wait::Now);
        }
    }
}
