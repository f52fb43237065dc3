//! Conversion between time strings and calendar values.
//!
//! The ASN.1 time types GeneralizedTime and UTCTime keep their value as a
//! string of concatenated numeric fields: the year, month, day, hour,
//! minute, and second, optionally followed by a fraction of a second after
//! a `.` and either a `Z` for UTC or a signed `HHMM` offset from UTC. A
//! GeneralizedTime uses a four digit year while a UTCTime only has two.
//!
//! This module converts such strings into a [`CalendarValue`] via
//! [`parse`] and back via [`format`]. Which of the two year layouts is
//! used is selected by [`YearDigits`]. Both functions are pure and can be
//! used from any thread.
//!
//! Only this narrow profile is supported. In particular, neither the
//! minutes nor the seconds can be left out and there are no delimiters
//! between the fields.
//!
//! [`CalendarValue`]: struct.CalendarValue.html
//! [`parse`]: fn.parse.html
//! [`format`]: fn.format.html
//! [`YearDigits`]: enum.YearDigits.html

pub use self::format::format;
pub use self::offset::FixedOffset;
pub use self::parse::{parse, ParseError};
pub use self::value::{CalendarValue, RangeError, YearDigits};

pub(crate) use self::format::format_four_digit;

mod format;
mod offset;
mod parse;
mod value;
