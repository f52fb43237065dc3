//! Calendar values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{error, fmt};
use std::convert::TryFrom;
use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike
};
use super::offset::FixedOffset;


//------------ YearDigits ----------------------------------------------------

/// The number of digits used for the year in a time string.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum YearDigits {
    /// A four digit year as used by GeneralizedTime.
    Four,

    /// A two digit year as used by UTCTime.
    ///
    /// Years `00` to `49` are taken as `2000` to `2049` and `50` to `99`
    /// as `1950` to `1999`, as in RFC 5280. Only these years can be
    /// expressed.
    Two,
}

impl YearDigits {
    /// Returns the number of digits in the year field.
    pub fn year_len(self) -> usize {
        match self {
            YearDigits::Four => 4,
            YearDigits::Two => 2,
        }
    }

    /// Returns the length of all the fields up to and including seconds.
    pub fn fields_len(self) -> usize {
        self.year_len() + 10
    }

    /// Returns the smallest and largest year that can be expressed.
    pub fn year_range(self) -> (i32, i32) {
        match self {
            YearDigits::Four => (0, 9999),
            YearDigits::Two => (1950, 2049),
        }
    }

    /// Converts the numeric value of the year field into a year.
    pub(crate) fn expand_year(self, field: u32) -> i32 {
        // The field has at most four digits, so it fits into an i32.
        let field = field as i32;
        match self {
            YearDigits::Four => field,
            YearDigits::Two if field < 50 => 2000 + field,
            YearDigits::Two => 1900 + field,
        }
    }
}


//------------ CalendarValue -------------------------------------------------

/// A date and time with an optional timezone.
///
/// This is the structured form of a time string. The date and time are
/// kept as a chrono [`NaiveDateTime`] in local time of the timezone if
/// there is one. The fraction of a second is limited to hundredths of a
/// second, the resolution of the string form, and any finer part is
/// truncated when a value is created. The year is limited to `0` to
/// `9999`. Because of these limits, a calendar value can always be
/// turned into a GeneralizedTime string.
///
/// A value without timezone is called _naive._ When turned into a string,
/// it is treated as UTC.
///
/// [`NaiveDateTime`]: ../../chrono/naive/struct.NaiveDateTime.html
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CalendarValue {
    /// The date and time, truncated to centiseconds.
    datetime: NaiveDateTime,

    /// The timezone if there is one.
    timezone: Option<FixedOffset>,
}

impl CalendarValue {
    /// The number of nanoseconds in a centisecond.
    const CENTI_NANOS: u32 = 10_000_000;

    /// Creates a new value from a date and time and an optional timezone.
    ///
    /// The fraction of a second is truncated to hundredths. Returns an
    /// error if the year is outside of `0` to `9999` or if the time is a
    /// leap second.
    pub fn new(
        datetime: NaiveDateTime, timezone: Option<FixedOffset>
    ) -> Result<Self, RangeError> {
        if datetime.year() < 0 || datetime.year() > 9999 {
            return xerr!(Err(RangeError))
        }
        let nanos = datetime.nanosecond();
        if nanos >= 1_000_000_000 {
            return xerr!(Err(RangeError))
        }
        let datetime = datetime.with_nanosecond(
            nanos - nanos % Self::CENTI_NANOS
        ).ok_or(RangeError)?;
        Ok(CalendarValue { datetime, timezone })
    }

    /// Creates a new value from its components.
    ///
    /// Returns an error if the components do not form a valid date and
    /// time or if any of them is outside the limits described with
    /// [`new`].
    ///
    /// [`new`]: #method.new
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        year: i32, month: u32, day: u32,
        hour: u32, minute: u32, second: u32, centisecond: u32,
        timezone: Option<FixedOffset>,
    ) -> Result<Self, RangeError> {
        if centisecond > 99 || second > 59 {
            return xerr!(Err(RangeError))
        }
        let datetime = NaiveDate::from_ymd_opt(year, month, day).and_then(
            |date| date.and_hms_nano_opt(
                hour, minute, second, centisecond * Self::CENTI_NANOS
            )
        ).ok_or(RangeError)?;
        Self::new(datetime, timezone)
    }

    /// Creates a naive value from a date and time.
    pub fn naive_from(datetime: NaiveDateTime) -> Result<Self, RangeError> {
        Self::new(datetime, None)
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// Returns the month starting from 1.
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    /// Returns the day of month starting from 1.
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    /// Returns the hour.
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    /// Returns the minute.
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    /// Returns the second.
    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    /// Returns the fraction of the second in hundredths.
    pub fn centisecond(&self) -> u32 {
        self.datetime.nanosecond() / Self::CENTI_NANOS
    }

    /// Returns the fraction of the second in nanoseconds.
    ///
    /// This is always a multiple of ten million.
    pub fn nanosecond(&self) -> u32 {
        self.datetime.nanosecond()
    }

    /// Returns the timezone if there is one.
    pub fn timezone(&self) -> Option<&FixedOffset> {
        self.timezone.as_ref()
    }

    /// Returns whether the value has no timezone.
    pub fn is_naive(&self) -> bool {
        self.timezone.is_none()
    }

    /// Returns the date and time without the timezone.
    pub fn naive(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Returns the value as a chrono date and time with offset.
    ///
    /// Returns `None` for a naive value.
    pub fn to_datetime(&self) -> Option<DateTime<chrono::FixedOffset>> {
        let offset = self.timezone.as_ref()?.to_chrono();
        offset.from_local_datetime(&self.datetime).single()
    }
}


//--- TryFrom

/// Converts a chrono date and time.
///
/// Fails if the offset is not a whole number of minutes since a time
/// string cannot express it.
impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for CalendarValue {
    type Error = RangeError;

    fn try_from(datetime: DateTime<Tz>) -> Result<Self, Self::Error> {
        let offset = datetime.offset().fix();
        if offset.local_minus_utc() % 60 != 0 {
            return xerr!(Err(RangeError))
        }
        Self::new(
            datetime.naive_local(), Some(FixedOffset::from_chrono(offset))
        )
    }
}


//--- Display

impl fmt::Display for CalendarValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "{}.{:02}", self.datetime.format("%Y-%m-%d %H:%M:%S"),
            self.centisecond()
        )?;
        match self.timezone {
            Some(ref tz) => write!(f, " {}", tz.to_chrono()),
            None => Ok(())
        }
    }
}


//------------ RangeError ----------------------------------------------------

/// A date and time cannot be represented.
///
/// This happens if a calendar value is created from components that do
/// not form a valid date and time, if its year is outside of the range
/// supported by [`CalendarValue`], or if a UTCTime is requested for a year
/// it cannot express.
///
/// [`CalendarValue`]: struct.CalendarValue.html
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeError;

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("date and time out of range")
    }
}

impl error::Error for RangeError { }


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveTime;

    fn naive(
        year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32,
        nano: u32
    ) -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            NaiveTime::from_hms_nano_opt(hour, min, sec, nano).unwrap(),
        )
    }

    #[test]
    fn truncates_to_centiseconds() {
        let value = CalendarValue::new(
            naive(2021, 6, 15, 12, 0, 0, 123_456_789), None
        ).unwrap();
        assert_eq!(value.centisecond(), 12);
        assert_eq!(value.nanosecond(), 120_000_000);
        assert!(value.is_naive());
    }

    #[test]
    fn year_limits() {
        assert!(CalendarValue::naive_from(naive(0, 1, 1, 0, 0, 0, 0)).is_ok());
        assert!(
            CalendarValue::naive_from(naive(9999, 12, 31, 23, 59, 59, 0))
                .is_ok()
        );
        assert_eq!(
            CalendarValue::naive_from(naive(-1, 12, 31, 0, 0, 0, 0)),
            Err(RangeError)
        );
        assert_eq!(
            CalendarValue::naive_from(naive(10000, 1, 1, 0, 0, 0, 0)),
            Err(RangeError)
        );
    }

    #[test]
    fn rejects_leap_second() {
        assert_eq!(
            CalendarValue::naive_from(
                naive(2016, 12, 31, 23, 59, 59, 1_000_000_000)
            ),
            Err(RangeError)
        );
    }

    #[test]
    fn from_parts() {
        let value = CalendarValue::from_parts(
            2021, 6, 15, 12, 30, 45, 50, Some(FixedOffset::utc())
        ).unwrap();
        assert_eq!(value.year(), 2021);
        assert_eq!(value.month(), 6);
        assert_eq!(value.day(), 15);
        assert_eq!(value.hour(), 12);
        assert_eq!(value.minute(), 30);
        assert_eq!(value.second(), 45);
        assert_eq!(value.centisecond(), 50);
        assert_eq!(value.timezone(), Some(&FixedOffset::utc()));

        assert!(
            CalendarValue::from_parts(2021, 2, 29, 0, 0, 0, 0, None).is_err()
        );
        assert!(
            CalendarValue::from_parts(2020, 2, 29, 0, 0, 0, 0, None).is_ok()
        );
        assert!(
            CalendarValue::from_parts(2021, 6, 15, 24, 0, 0, 0, None).is_err()
        );
        assert!(
            CalendarValue::from_parts(2021, 6, 15, 0, 0, 0, 100, None).is_err()
        );
    }

    #[test]
    fn chrono_conversion() {
        let offset = chrono::FixedOffset::east_opt(90 * 60).unwrap();
        let datetime = offset.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        let value = CalendarValue::try_from(datetime).unwrap();
        assert_eq!(value.hour(), 12);
        assert_eq!(value.timezone().unwrap().offset_minutes(), 90);
        assert_eq!(value.to_datetime(), Some(datetime));

        let utc = chrono::Utc.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        let value = CalendarValue::try_from(utc).unwrap();
        assert_eq!(value.timezone(), Some(&FixedOffset::utc()));

        let naive = CalendarValue::naive_from(utc.naive_utc()).unwrap();
        assert_eq!(naive.to_datetime(), None);
    }

    #[test]
    fn chrono_offset_with_seconds() {
        let offset = chrono::FixedOffset::east_opt(3600 + 30).unwrap();
        let datetime = offset.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(CalendarValue::try_from(datetime), Err(RangeError));

        let offset = chrono::FixedOffset::west_opt(3600 + 30).unwrap();
        let datetime = offset.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(CalendarValue::try_from(datetime), Err(RangeError));

        // Whole minutes keep the instant.
        let offset = chrono::FixedOffset::east_opt(3600 + 60).unwrap();
        let datetime = offset.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        let value = CalendarValue::try_from(datetime).unwrap();
        assert_eq!(
            value.to_datetime().map(|dt| dt.timestamp()),
            Some(datetime.timestamp())
        );
    }

    #[test]
    fn display() {
        let value = CalendarValue::from_parts(
            2021, 6, 15, 12, 0, 0, 5, FixedOffset::new(-90, "?")
        ).unwrap();
        assert_eq!(value.to_string(), "2021-06-15 12:00:00.05 -01:30");
        let value = CalendarValue::from_parts(
            2021, 6, 15, 12, 0, 0, 0, None
        ).unwrap();
        assert_eq!(value.to_string(), "2021-06-15 12:00:00.00");
    }

    #[test]
    fn expand_year() {
        assert_eq!(YearDigits::Two.expand_year(0), 2000);
        assert_eq!(YearDigits::Two.expand_year(49), 2049);
        assert_eq!(YearDigits::Two.expand_year(50), 1950);
        assert_eq!(YearDigits::Two.expand_year(99), 1999);
        assert_eq!(YearDigits::Four.expand_year(1999), 1999);
        assert_eq!(YearDigits::Two.fields_len(), 12);
        assert_eq!(YearDigits::Four.fields_len(), 14);
    }
}
