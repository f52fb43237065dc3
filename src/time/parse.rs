//! Parsing time strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{error, fmt, iter};
use chrono::{NaiveDate, NaiveDateTime};
use super::offset::FixedOffset;
use super::value::{CalendarValue, YearDigits};


//------------ parse ---------------------------------------------------------

/// Parses a time string into a calendar value.
///
/// The string must consist of the year with the number of digits given
/// by `digits`, followed by two digits each for month, day, hour, minute,
/// and second. This may be followed by a `.` and one or more digits for
/// the fraction of a second. Finally, there may be either a `Z` for UTC
/// or a `+` or `-` and four digits giving the offset from UTC as hours
/// and minutes.
///
/// A `Z` results in the [`FixedOffset::utc`] timezone, a numeric offset
/// in a timezone named `"?"`, and no suffix in a naive value. The
/// fraction is truncated to hundredths of a second.
///
/// The timezone is looked at first since the suffix decides how many
/// characters at the end belong to the offset rather than the seconds.
///
/// [`FixedOffset::utc`]: struct.FixedOffset.html#method.utc
pub fn parse(s: &str, digits: YearDigits) -> Result<CalendarValue, ParseError> {
    let (rest, timezone) = take_timezone(s)?;
    let (rest, centisecond) = take_fraction(s, rest)?;
    let datetime = take_datetime(s, rest, digits, centisecond)?;
    CalendarValue::new(datetime, timezone).map_err(|_| {
        xerr!(ParseError::BadDateTime(s.into()))
    })
}

/// Splits the timezone off the end of `s`.
fn take_timezone(
    s: &str
) -> Result<(&str, Option<FixedOffset>), ParseError> {
    if let Some(rest) = s.strip_suffix('Z') {
        return Ok((rest, Some(FixedOffset::utc())))
    }
    let octets = s.as_bytes();
    let Some(start) = octets.len().checked_sub(5) else {
        return xerr!(Err(ParseError::BadOffset(s.into())))
    };
    let sign = match octets[start] {
        b'+' => 1,
        b'-' => -1,
        _ => return Ok((s, None))
    };
    let offset = &octets[start + 1..];
    if !is_decimal(offset) {
        return xerr!(Err(ParseError::BadOffset(s.into())))
    }
    let hours = decimal_value(&offset[..2]);
    let minutes = decimal_value(&offset[2..]);
    if hours > 23 || minutes > 59 {
        return xerr!(Err(ParseError::BadOffset(s.into())))
    }
    // Both fields have two digits, so these casts are fine.
    let minutes = sign * (hours as i32 * 60 + minutes as i32);
    match FixedOffset::new(minutes, "?") {
        // The octet at `start` is ASCII, so it is a char boundary.
        Some(timezone) => Ok((&s[..start], Some(timezone))),
        None => xerr!(Err(ParseError::BadOffset(s.into())))
    }
}

/// Splits the fraction of a second off the end of `rest`.
///
/// Returns the fraction in centiseconds.
fn take_fraction<'a>(
    s: &str, rest: &'a str
) -> Result<(&'a str, u32), ParseError> {
    let Some((fields, fraction)) = rest.split_once('.') else {
        return Ok((rest, 0))
    };
    if !is_decimal(fraction.as_bytes()) {
        return xerr!(Err(ParseError::BadFraction(s.into())))
    }
    let centisecond = fraction.bytes().chain(iter::repeat(b'0')).take(2).fold(
        0, |res, ch| res * 10 + u32::from(ch - b'0')
    );
    Ok((fields, centisecond))
}

/// Parses the fixed-width date and time fields.
fn take_datetime(
    s: &str, fields: &str, digits: YearDigits, centisecond: u32
) -> Result<NaiveDateTime, ParseError> {
    let fields = fields.as_bytes();
    if fields.len() != digits.fields_len() || !is_decimal(fields) {
        return xerr!(Err(ParseError::BadDateTime(s.into())))
    }
    let (year, fields) = fields.split_at(digits.year_len());
    let year = digits.expand_year(decimal_value(year));
    let month = decimal_value(&fields[0..2]);
    let day = decimal_value(&fields[2..4]);
    let hour = decimal_value(&fields[4..6]);
    let minute = decimal_value(&fields[6..8]);
    let second = decimal_value(&fields[8..10]);
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| {
        date.and_hms_nano_opt(hour, minute, second, centisecond * 10_000_000)
    }).ok_or_else(|| {
        xerr!(ParseError::BadDateTime(s.into()))
    })
}

/// Returns whether `octets` is a non-empty sequence of ASCII digits.
fn is_decimal(octets: &[u8]) -> bool {
    !octets.is_empty() && octets.iter().all(u8::is_ascii_digit)
}

/// Returns the value of a sequence of ASCII digits.
///
/// The caller has to make sure the slice only contains digits and is
/// short enough for the value to fit.
fn decimal_value(octets: &[u8]) -> u32 {
    octets.iter().fold(0, |res, ch| res * 10 + u32::from(ch - b'0'))
}


//------------ ParseError ----------------------------------------------------

/// A time string could not be parsed.
///
/// Each variant contains the complete string that was given to the
/// parser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The UTC offset at the end of the string is malformed.
    ///
    /// This includes strings too short to contain an offset and offsets
    /// whose hours are greater than 23 or whose minutes are greater
    /// than 59.
    BadOffset(String),

    /// The fraction of a second is not a sequence of digits.
    BadFraction(String),

    /// The date and time fields are malformed or not a valid date.
    BadDateTime(String),
}

impl ParseError {
    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        match *self {
            ParseError::BadOffset(ref s) => s,
            ParseError::BadFraction(ref s) => s,
            ParseError::BadDateTime(ref s) => s,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::BadOffset(ref s) => {
                write!(f, "unknown time specification {}", s)
            }
            ParseError::BadFraction(ref s) => {
                write!(f, "bad sub-second time specification {}", s)
            }
            ParseError::BadDateTime(ref s) => {
                write!(f, "bad date and time specification {}", s)
            }
        }
    }
}

impl error::Error for ParseError { }


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn generalized(s: &str) -> Result<CalendarValue, ParseError> {
        parse(s, YearDigits::Four)
    }

    #[test]
    fn parse_utc() {
        let value = generalized("20210615120000Z").unwrap();
        assert_eq!(value.year(), 2021);
        assert_eq!(value.month(), 6);
        assert_eq!(value.day(), 15);
        assert_eq!(value.hour(), 12);
        assert_eq!(value.minute(), 0);
        assert_eq!(value.second(), 0);
        assert_eq!(value.centisecond(), 0);
        assert_eq!(value.timezone(), Some(&FixedOffset::utc()));
    }

    #[test]
    fn parse_fraction() {
        let value = generalized("20210615120000.50Z").unwrap();
        assert_eq!(value.centisecond(), 50);
        assert_eq!(value.nanosecond(), 500_000_000);
        assert_eq!(generalized("20210615120000.5Z").unwrap().centisecond(), 50);
        assert_eq!(
            generalized("20210615120000.05Z").unwrap().centisecond(), 5
        );
        assert_eq!(
            generalized("20210615120000.999999Z").unwrap().centisecond(), 99
        );
        assert_eq!(
            generalized("20210615120000.0Z").unwrap().centisecond(), 0
        );
    }

    #[test]
    fn parse_offset() {
        let value = generalized("20210615120000+0130").unwrap();
        let tz = value.timezone().unwrap();
        assert_eq!(tz.offset_minutes(), 90);
        assert_eq!(tz.name(), "?");
        assert_eq!(value.hour(), 12);

        let value = generalized("20210615120000.25-0545").unwrap();
        assert_eq!(value.timezone().unwrap().offset_minutes(), -345);
        assert_eq!(value.centisecond(), 25);

        let value = generalized("20210615120000+0000").unwrap();
        assert!(value.timezone().unwrap().is_utc());
        assert_eq!(value.timezone().unwrap().name(), "?");
    }

    #[test]
    fn parse_naive() {
        let value = generalized("20210615120000").unwrap();
        assert!(value.is_naive());
        let value = generalized("20210615120000.1").unwrap();
        assert!(value.is_naive());
        assert_eq!(value.centisecond(), 10);
    }

    #[test]
    fn parse_two_digit_year() {
        let value = parse("210615120000Z", YearDigits::Two).unwrap();
        assert_eq!(value.year(), 2021);
        assert_eq!(value.month(), 6);
        let value = parse("991231235959Z", YearDigits::Two).unwrap();
        assert_eq!(value.year(), 1999);
        let value = parse("500101000000+0100", YearDigits::Two).unwrap();
        assert_eq!(value.year(), 1950);
        let value = parse("491231235959Z", YearDigits::Two).unwrap();
        assert_eq!(value.year(), 2049);

        // The layouts are not interchangeable.
        assert_eq!(
            parse("20210615120000Z", YearDigits::Two),
            Err(ParseError::BadDateTime("20210615120000Z".into()))
        );
        assert_eq!(
            generalized("210615120000Z"),
            Err(ParseError::BadDateTime("210615120000Z".into()))
        );
    }

    #[test]
    fn short_input() {
        assert_eq!(
            generalized("2021"), Err(ParseError::BadOffset("2021".into()))
        );
        assert_eq!(generalized(""), Err(ParseError::BadOffset("".into())));
        assert_eq!(generalized("Z"), Err(ParseError::BadDateTime("Z".into())));
        assert!(generalized("+0100").is_err());
    }

    #[test]
    fn bad_offset() {
        for s in &[
            "20210615120000+01a0", "20210615120000-2400",
            "20210615120000+0160", "20210615120000+ 130",
        ] {
            assert_eq!(generalized(s), Err(ParseError::BadOffset((*s).into())));
        }
    }

    #[test]
    fn bad_fraction() {
        for s in &[
            "20210615120000.Z", "20210615120000.5aZ", "20210615120000.5.5Z",
            "20210615120000.-5Z",
        ] {
            assert_eq!(
                generalized(s), Err(ParseError::BadFraction((*s).into()))
            );
        }
    }

    #[test]
    fn bad_datetime() {
        for s in &[
            "2021061512000Z", "202106151200000Z", "2021-06-15T12:00:00Z",
            "20211315120000Z", "20210230120000Z", "20210615250000Z",
            "20210615126000Z", "20210615120060Z", "2021061512000aZ",
            "20210615120000ZZ", "２0210615120000Z",
        ] {
            assert_eq!(
                generalized(s), Err(ParseError::BadDateTime((*s).into()))
            );
        }
    }

    #[test]
    fn error_display() {
        let err = generalized("2021").unwrap_err();
        assert_eq!(err.input(), "2021");
        assert_eq!(err.to_string(), "unknown time specification 2021");
        assert_eq!(
            generalized("20210615120000.xZ").unwrap_err().to_string(),
            "bad sub-second time specification 20210615120000.xZ"
        );
    }
}
