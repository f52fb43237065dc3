//! Creating time strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use super::value::{CalendarValue, RangeError, YearDigits};


//------------ format --------------------------------------------------------

/// Formats a calendar value as a time string.
///
/// The string contains the year with the number of digits given by
/// `digits` followed by two digits each for month, day, hour, minute, and
/// second, a `.` and two digits for the hundredths of the second. It ends
/// in `Z` if the value is naive or its offset is zero. Otherwise, it ends
/// in the sign of the offset and its hours and minutes.
///
/// With a four digit year, this never fails. Two digit years can only
/// express 1950 to 2049 and an error is returned for any other year.
pub fn format(
    value: &CalendarValue, digits: YearDigits
) -> Result<String, RangeError> {
    let (min, max) = digits.year_range();
    if value.year() < min || value.year() > max {
        return xerr!(Err(RangeError))
    }
    Ok(compose(value, digits))
}

/// Formats a calendar value as a time string with a four digit year.
pub(crate) fn format_four_digit(value: &CalendarValue) -> String {
    compose(value, YearDigits::Four)
}

/// Assembles the string.
///
/// The year of `value` must be within the range for `digits`.
fn compose(value: &CalendarValue, digits: YearDigits) -> String {
    let mut res = String::with_capacity(digits.fields_len() + 8);

    // The year is non-negative, so rem_euclid only drops the century for
    // two digit years.
    let year = match digits {
        YearDigits::Four => value.year().rem_euclid(10_000),
        YearDigits::Two => value.year().rem_euclid(100),
    };
    push_decimal(&mut res, year as u32, digits.year_len());
    push_decimal(&mut res, value.month(), 2);
    push_decimal(&mut res, value.day(), 2);
    push_decimal(&mut res, value.hour(), 2);
    push_decimal(&mut res, value.minute(), 2);
    push_decimal(&mut res, value.second(), 2);
    res.push('.');
    push_decimal(&mut res, value.centisecond(), 2);

    match value.timezone() {
        Some(tz) if !tz.is_utc() => {
            let minutes = tz.offset_minutes();
            res.push(if minutes < 0 { '-' } else { '+' });
            let minutes = minutes.unsigned_abs();
            push_decimal(&mut res, minutes / 60, 2);
            push_decimal(&mut res, minutes % 60, 2);
        }
        _ => res.push('Z')
    }
    res
}

/// Appends `value` as exactly `width` zero-padded decimal digits.
///
/// Digits beyond `width` are dropped.
fn push_decimal(target: &mut String, value: u32, width: usize) {
    let start = target.len();
    let mut value = value;
    for _ in 0..width {
        // The remainder is a single digit.
        target.insert(start, char::from(b'0' + (value % 10) as u8));
        value /= 10;
    }
}


//============ Tests =========================================================
