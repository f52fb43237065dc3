//! The ASN.1 useful types.
//!
//! ASN.1 defines a handful of so-called _useful types_ in clause 46 of
//! X.680. They are plain restricted character strings carrying their own
//! universal tag:
//!
//! * [`GeneralizedTime`] is a VisibleString implicitly tagged as
//!   UNIVERSAL 24 containing a time with a four digit year,
//! * [`UtcTime`] is a VisibleString implicitly tagged as UNIVERSAL 23
//!   containing a time with a two digit year,
//! * [`ObjectDescriptor`] is a GraphicString implicitly tagged as
//!   UNIVERSAL 7.
//!
//! The two time types can be converted from and into a [`CalendarValue`],
//! a date and time with an optional [`FixedOffset`] timezone. The
//! conversion itself is available through the free functions
//! [`time::parse`] and [`time::format`].
//!
//! [`GeneralizedTime`]: useful/type.GeneralizedTime.html
//! [`UtcTime`]: useful/type.UtcTime.html
//! [`ObjectDescriptor`]: useful/type.ObjectDescriptor.html
//! [`CalendarValue`]: time/struct.CalendarValue.html
//! [`FixedOffset`]: time/struct.FixedOffset.html
//! [`time::parse`]: time/fn.parse.html
//! [`time::format`]: time/fn.format.html

pub use self::string::{CharSet, CharSetError, RestrictedString};
pub use self::tag::{Tag, TagClass};
pub use self::tagset::{TagError, TagFormat, TagSet};
pub use self::time::{
    CalendarValue, FixedOffset, ParseError, RangeError, YearDigits
};
pub use self::useful::{
    GeneralizedTime, ObjectDescriptor, TimeCharSet, UsefulType, UtcTime
};

#[macro_use] pub mod debug;

pub mod string;
pub mod tag;
pub mod tagset;
pub mod time;
pub mod useful;
