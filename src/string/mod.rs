//! Restricted character string types.
//!
//! This module provides the restricted character strings that the ASN.1
//! useful types are built on. A restricted character string is a sequence
//! of characters from a pre-defined character set. ASN.1 defines quite a
//! few of those of which this crate only implements the two needed here:
//!
//! * [`VisibleString`] contains the printing ASCII characters and space,
//! * [`GraphicString`] contains graphic characters and space. We only
//!   support the ASCII repertoire for it.
//!
//! Both are implemented atop a generic [`RestrictedString`] by providing
//! an implementation for the [`CharSet`] trait. The useful types in the
//! [`useful`] module are further instances of the same pattern.
//!
//! [`VisibleString`]: type.VisibleString.html
//! [`GraphicString`]: type.GraphicString.html
//! [`RestrictedString`]: struct.RestrictedString.html
//! [`CharSet`]: trait.CharSet.html
//! [`useful`]: ../useful/index.html

//--- Re-exports

pub use self::restricted::{
    CharSet, CharSetError,
    RestrictedString, RestrictedStringChars,
    GraphicCharSet, GraphicString, VisibleCharSet, VisibleString,
};

//--- Private modules

mod restricted;
