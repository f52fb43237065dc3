//! The useful types GeneralizedTime, UTCTime, and ObjectDescriptor.
//!
//! X.680 defines these as restricted character strings with their own
//! universal tag:
//!
//! ```text
//! GeneralizedTime ::= [UNIVERSAL 24] IMPLICIT VisibleString
//! UTCTime ::= [UNIVERSAL 23] IMPLICIT VisibleString
//! ObjectDescriptor ::= [UNIVERSAL 7] IMPLICIT GraphicString
//! ```
//!
//! Each of them is a [`RestrictedString`] with its own [`CharSet`] that
//! accepts the characters of the base type and reports the implicitly
//! tagged tag set. The two time types additionally implement
//! [`TimeCharSet`] which provides the conversion from and into a
//! [`CalendarValue`].
//!
//! [`RestrictedString`]: ../string/struct.RestrictedString.html
//! [`CharSet`]: ../string/trait.CharSet.html
//! [`TimeCharSet`]: trait.TimeCharSet.html
//! [`CalendarValue`]: ../time/struct.CalendarValue.html

use std::fmt;
use std::borrow::Cow;
use std::convert::TryFrom;
use bytes::Bytes;
use crate::string::{
    CharSet, CharSetError, GraphicCharSet, RestrictedString, VisibleCharSet
};
use crate::tag::Tag;
use crate::tagset::TagSet;
use crate::time::{self, CalendarValue, ParseError, RangeError, YearDigits};


//------------ TimeCharSet ---------------------------------------------------

/// The character set of a restricted string containing a time.
///
/// This trait marks the strings that can be converted from and into a
/// [`CalendarValue`] and tells how many digits their year has.
///
/// [`CalendarValue`]: ../time/struct.CalendarValue.html
pub trait TimeCharSet: CharSet {
    /// The number of digits of the year.
    const YEAR_DIGITS: YearDigits;
}

/// # Conversion from and to calendar values
///
impl<L: TimeCharSet> RestrictedString<L> {
    /// Parses the string into a calendar value.
    ///
    /// See [`time::parse`] for the details. The value is created afresh
    /// every time this method is called.
    ///
    /// [`time::parse`]: ../time/fn.parse.html
    pub fn to_calendar(&self) -> Result<CalendarValue, ParseError> {
        time::parse(&self.to_str(), L::YEAR_DIGITS)
    }

    /// Creates a new string from a calendar value.
    ///
    /// See [`time::format`] for the details. This fails only if the year
    /// of the value cannot be expressed in the string.
    ///
    /// [`time::format`]: ../time/fn.format.html
    pub fn try_from_calendar(
        value: &CalendarValue
    ) -> Result<Self, RangeError> {
        time::format(value, L::YEAR_DIGITS).map(|s| {
            // Formatting only produces digits, `.`, `Z`, `+`, and `-`.
            Self::new_unchecked(Bytes::from(s))
        })
    }
}


//------------ GeneralizedTime -----------------------------------------------

/// A time with a four digit year.
///
/// This is a VisibleString implicitly tagged as UNIVERSAL 24. Its content
/// should be of the form `YYYYMMDDHHMMSS` optionally followed by a
/// fraction of a second and a timezone suffix. Since any string of visible
/// characters can be stored, the form is only checked when converting
/// into a calendar value via [`to_calendar`].
///
/// [`to_calendar`]: ../string/struct.RestrictedString.html#method.to_calendar
pub type GeneralizedTime = RestrictedString<GeneralizedTimeCharSet>;

/// The character set for the GeneralizedTime ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct GeneralizedTimeCharSet;

impl CharSet for GeneralizedTimeCharSet {
    const TAG: Tag = Tag::GENERALIZED_TIME;

    fn next_char<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError> {
        VisibleCharSet::next_char(iter)
    }

    fn from_str(s: &str) -> Result<Cow<[u8]>, CharSetError> {
        VisibleCharSet::from_str(s)
    }

    fn tag_set() -> TagSet {
        VisibleCharSet::tag_set().tag_implicitly(Self::TAG)
    }
}

impl TimeCharSet for GeneralizedTimeCharSet {
    const YEAR_DIGITS: YearDigits = YearDigits::Four;
}

impl GeneralizedTime {
    /// Creates a new GeneralizedTime from a calendar value.
    ///
    /// Since every calendar value can be expressed with a four digit
    /// year, this never fails.
    pub fn from_calendar(value: &CalendarValue) -> Self {
        Self::new_unchecked(Bytes::from(time::format_four_digit(value)))
    }
}

impl<'a> From<&'a CalendarValue> for GeneralizedTime {
    fn from(value: &'a CalendarValue) -> Self {
        Self::from_calendar(value)
    }
}


//------------ UtcTime -------------------------------------------------------

/// A time with a two digit year.
///
/// This is a VisibleString implicitly tagged as UNIVERSAL 23. Its content
/// should be of the form `YYMMDDHHMMSS` optionally followed by a
/// fraction of a second and a timezone suffix. The years `00` to `49`
/// mean 2000 to 2049, `50` to `99` mean 1950 to 1999.
pub type UtcTime = RestrictedString<UtcTimeCharSet>;

/// The character set for the UTCTime ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct UtcTimeCharSet;

impl CharSet for UtcTimeCharSet {
    const TAG: Tag = Tag::UTC_TIME;

    fn next_char<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError> {
        VisibleCharSet::next_char(iter)
    }

    fn from_str(s: &str) -> Result<Cow<[u8]>, CharSetError> {
        VisibleCharSet::from_str(s)
    }

    fn tag_set() -> TagSet {
        VisibleCharSet::tag_set().tag_implicitly(Self::TAG)
    }
}

impl TimeCharSet for UtcTimeCharSet {
    const YEAR_DIGITS: YearDigits = YearDigits::Two;
}

impl<'a> TryFrom<&'a CalendarValue> for UtcTime {
    type Error = RangeError;

    fn try_from(value: &'a CalendarValue) -> Result<Self, Self::Error> {
        Self::try_from_calendar(value)
    }
}


//------------ ObjectDescriptor ----------------------------------------------

/// A human readable description of an object.
///
/// This is a GraphicString implicitly tagged as UNIVERSAL 7 and nothing
/// more.
pub type ObjectDescriptor = RestrictedString<ObjectDescriptorCharSet>;

/// The character set for the ObjectDescriptor ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct ObjectDescriptorCharSet;

impl CharSet for ObjectDescriptorCharSet {
    const TAG: Tag = Tag::OBJECT_DESCRIPTOR;

    fn next_char<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError> {
        GraphicCharSet::next_char(iter)
    }

    fn from_str(s: &str) -> Result<Cow<[u8]>, CharSetError> {
        GraphicCharSet::from_str(s)
    }

    fn tag_set() -> TagSet {
        GraphicCharSet::tag_set().tag_implicitly(Self::TAG)
    }
}


//------------ UsefulType ----------------------------------------------------

/// A value of any of the useful types.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum UsefulType {
    /// A GeneralizedTime value.
    GeneralizedTime(GeneralizedTime),

    /// A UTCTime value.
    UtcTime(UtcTime),

    /// An ObjectDescriptor value.
    ObjectDescriptor(ObjectDescriptor),
}

impl UsefulType {
    /// Creates a value from its tag and content.
    ///
    /// Returns `Ok(None)` if `tag` isn’t the tag of one of the useful
    /// types and an error if the content contains characters not allowed
    /// for the type.
    pub fn from_tagged(
        tag: Tag, octets: Bytes
    ) -> Result<Option<Self>, CharSetError> {
        match tag {
            Tag::GENERALIZED_TIME => {
                GeneralizedTime::new(octets).map(|s| Some(s.into()))
            }
            Tag::UTC_TIME => {
                UtcTime::new(octets).map(|s| Some(s.into()))
            }
            Tag::OBJECT_DESCRIPTOR => {
                ObjectDescriptor::new(octets).map(|s| Some(s.into()))
            }
            _ => Ok(None)
        }
    }

    /// Returns the natural tag of the value’s type.
    pub fn tag(&self) -> Tag {
        match *self {
            UsefulType::GeneralizedTime(ref s) => s.tag(),
            UsefulType::UtcTime(ref s) => s.tag(),
            UsefulType::ObjectDescriptor(ref s) => s.tag(),
        }
    }

    /// Returns the tag set of the value’s type.
    pub fn tag_set(&self) -> TagSet {
        match *self {
            UsefulType::GeneralizedTime(ref s) => s.tag_set(),
            UsefulType::UtcTime(ref s) => s.tag_set(),
            UsefulType::ObjectDescriptor(ref s) => s.tag_set(),
        }
    }

    /// Returns the content as a string.
    pub fn to_str(&self) -> Cow<str> {
        match *self {
            UsefulType::GeneralizedTime(ref s) => s.to_str(),
            UsefulType::UtcTime(ref s) => s.to_str(),
            UsefulType::ObjectDescriptor(ref s) => s.to_str(),
        }
    }

    /// Converts a time value into a calendar value.
    ///
    /// Returns `None` for an ObjectDescriptor.
    pub fn to_calendar(&self) -> Option<Result<CalendarValue, ParseError>> {
        match *self {
            UsefulType::GeneralizedTime(ref s) => Some(s.to_calendar()),
            UsefulType::UtcTime(ref s) => Some(s.to_calendar()),
            UsefulType::ObjectDescriptor(_) => None,
        }
    }
}


//--- From

impl From<GeneralizedTime> for UsefulType {
    fn from(src: GeneralizedTime) -> Self {
        UsefulType::GeneralizedTime(src)
    }
}

impl From<UtcTime> for UsefulType {
    fn from(src: UtcTime) -> Self {
        UsefulType::UtcTime(src)
    }
}

impl From<ObjectDescriptor> for UsefulType {
    fn from(src: ObjectDescriptor) -> Self {
        UsefulType::ObjectDescriptor(src)
    }
}


//--- Display

impl fmt::Display for UsefulType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UsefulType::GeneralizedTime(ref s) => fmt::Display::fmt(s, f),
            UsefulType::UtcTime(ref s) => fmt::Display::fmt(s, f),
            UsefulType::ObjectDescriptor(ref s) => fmt::Display::fmt(s, f),
        }
    }
}


//============ Tests =========================================================
