// crates/domain/src/model/timestamp.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, TimeZone};
use file_lister_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::{TimestampError, validate};

/// `strftime` layout matching [`Timestamp`]'s canonical form.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MONTH_ABBREVIATIONS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Calendar date and wall-clock time with second precision.
///
/// Instances only come out of [`Timestamp::parse`] (directly or through
/// [`Timestamp::from_datetime`]) or [`Timestamp::EPOCH`], so every field is within the
/// bounds the validator enforces. Fields are declared most significant first, which
/// makes the derived `Ord` the lexicographic order over
/// `(year, month, day, hour, minute, second)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Timestamp {
    /// `1970-01-01 00:00:00`, the threshold used when none is given.
    pub const EPOCH: Self = Self { year: 1970, month: 1, day: 1, hour: 0, minute: 0, second: 0 };

    /// Parses a canonical `YYYY-MM-DD hh:mm:ss` string.
    ///
    /// # Errors
    /// Returns the validator's [`TimestampError`] when `input` breaks the layout.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        validate(input)?;
        let b = input.as_bytes();
        Ok(Self {
            year: place_value(&b[0..4]),
            month: two_digits(&b[5..7]),
            day: two_digits(&b[8..10]),
            hour: two_digits(&b[11..13]),
            minute: two_digits(&b[14..16]),
            second: two_digits(&b[17..19]),
        })
    }

    /// Renders `at` in its own time zone as a canonical string and parses that.
    ///
    /// # Errors
    /// Fails with [`DomainError::YearOutOfRange`] for years that do not fit four digits.
    pub fn from_datetime<Tz>(at: &DateTime<Tz>) -> DomainResult<Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let year = at.year();
        if !(0..=9999).contains(&year) {
            return Err(DomainError::YearOutOfRange { year });
        }
        let canonical = at.format(CANONICAL_FORMAT).to_string();
        Self::parse(&canonical).map_err(|err| DomainError::InvalidTimestamp {
            reason: err.to_string(),
            input: canonical.clone(),
        })
    }

    /// Strictly later than `other`; equal timestamps are not after each other.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Short `ls -l` style rendering: `Mon DD  hh:mm`, day padded with a space.
    #[must_use]
    pub fn display_time(&self) -> String {
        let month = usize::from(self.month)
            .checked_sub(1)
            .and_then(|idx| MONTH_ABBREVIATIONS.get(idx))
            .copied()
            .unwrap_or("???");
        format!("{month} {:>2}  {:02}:{:02}", self.day, self.hour, self.minute)
    }
}

// Both helpers run on validated input: every byte is an ASCII digit.
fn place_value(digits: &[u8]) -> u16 {
    digits.iter().fold(0, |acc, d| acc * 10 + u16::from(d - b'0'))
}

fn two_digits(digits: &[u8]) -> u8 {
    (digits[0] - b'0') * 10 + (digits[1] - b'0')
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};

    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).expect("valid timestamp")
    }

    #[test]
    fn parses_every_field_with_place_values() {
        let t = ts("2024-07-09 08:05:03");
        assert_eq!(
            (t.year, t.month, t.day, t.hour, t.minute, t.second),
            (2024, 7, 9, 8, 5, 3)
        );
        assert_eq!(ts("0007-01-01 00:00:00").year, 7);
    }

    #[test]
    fn canonical_rendering_round_trips() {
        for s in ["1970-01-01 00:00:00", "0042-10-31 23:59:59", "2024-02-29 12:00:01"] {
            assert_eq!(ts(s).to_string(), s);
        }
    }

    #[test]
    fn epoch_is_the_default() {
        assert_eq!(Timestamp::default(), ts("1970-01-01 00:00:00"));
        assert_eq!(Timestamp::EPOCH.to_string(), "1970-01-01 00:00:00");
    }

    #[test]
    fn invalid_input_produces_no_timestamp() {
        assert!(Timestamp::parse("2024-13-01 00:00:00").is_err());
        assert!("yesterday".parse::<Timestamp>().is_err());
    }

    #[test]
    fn is_after_crosses_month_boundary() {
        assert!(ts("2024-02-01 00:00:00").is_after(&ts("2024-01-31 23:59:59")));
        assert!(!ts("2024-01-31 23:59:59").is_after(&ts("2024-02-01 00:00:00")));
    }

    #[test]
    fn is_after_crosses_year_boundary() {
        assert!(!ts("2023-12-31 23:59:59").is_after(&ts("2024-01-01 00:00:00")));
        assert!(ts("2024-01-01 00:00:00").is_after(&ts("2023-12-31 23:59:59")));
    }

    #[test]
    fn later_month_wins_over_larger_day() {
        // A day-only comparison under "same year" would get this backwards.
        assert!(ts("2024-03-01 00:00:00").is_after(&ts("2024-02-28 00:00:00")));
        assert!(!ts("2024-02-28 00:00:00").is_after(&ts("2024-03-01 00:00:00")));
    }

    #[test]
    fn clock_fields_break_ties_in_order() {
        assert!(ts("2024-05-05 10:00:00").is_after(&ts("2024-05-05 09:59:59")));
        assert!(ts("2024-05-05 10:01:00").is_after(&ts("2024-05-05 10:00:59")));
        assert!(ts("2024-05-05 10:00:01").is_after(&ts("2024-05-05 10:00:00")));
    }

    #[test]
    fn equal_timestamps_are_not_after_each_other() {
        let a = ts("2024-05-05 10:00:00");
        assert!(!a.is_after(&a));
    }

    #[test]
    fn display_time_matches_long_listing_layout() {
        assert_eq!(ts("2024-03-05 07:09:00").display_time(), "Mar  5  07:09");
        assert_eq!(ts("2024-12-25 23:45:59").display_time(), "Dec 25  23:45");
    }

    #[test]
    fn display_time_tolerates_month_zero() {
        // the layout accepts "00" as a month; rendering must not index out of bounds
        assert_eq!(ts("2024-00-10 01:02:03").display_time(), "??? 10  01:02");
    }

    #[test]
    fn from_datetime_uses_the_datetime_own_zone() {
        let offset = FixedOffset::east_opt(9 * 3600).expect("offset");
        let at = offset.from_local_datetime(
            &NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(3, 4, 5)).expect("date"),
        );
        let at = at.single().expect("unambiguous");
        assert_eq!(Timestamp::from_datetime(&at).expect("convert").to_string(), "2024-01-02 03:04:05");
    }

    #[test]
    fn from_datetime_zero_pads_single_digit_seconds() {
        let at = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).single().expect("date");
        assert_eq!(Timestamp::from_datetime(&at).expect("convert").to_string(), "2001-02-03 04:05:06");
    }

    #[test]
    fn from_datetime_rejects_five_digit_years() {
        let at = Utc.with_ymd_and_hms(10_000, 1, 1, 0, 0, 0).single().expect("date");
        assert!(matches!(
            Timestamp::from_datetime(&at),
            Err(DomainError::YearOutOfRange { year: 10_000 })
        ));
    }

    #[test]
    fn serializes_as_canonical_string() {
        let json = serde_json::to_string(&ts("2024-01-02 03:04:05")).expect("serialize");
        assert_eq!(json, "\"2024-01-02 03:04:05\"");
        let back: Timestamp = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ts("2024-01-02 03:04:05"));
        assert!(serde_json::from_str::<Timestamp>("\"2024-01-02\"").is_err());
    }
}
