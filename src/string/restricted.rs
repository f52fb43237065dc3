//! Restricted Character String types.
//!
//! This is an internal module. It’s public items are re-exported by the
//! parent.

use std::{char, cmp, error, fmt, hash, iter, slice, str};
use std::borrow::Cow;
use std::marker::PhantomData;
use bytes::Bytes;
use crate::tag::Tag;
use crate::tagset::{TagFormat, TagSet};


//------------ CharSet -------------------------------------------------------

/// The character set of a restricted character string type.
///
/// The trait only includes associated items and can thus be implemented
/// for marker types. Its main purpose is to take an iterator over `u8`s and
/// produce `char`s or errors. This happens in [`next_char`].
///
/// In addition, the character set determines the tags of the string type.
/// Its natural tag is given by [`TAG`] and the full tag set by
/// [`tag_set`]. Types derived from a base string type through implicit
/// tagging override the latter.
///
/// The trait is primarily used to define the character set of the
/// [`RestrictedString`] type.
///
/// [`next_char`]: #tymethod.next_char
/// [`TAG`]: #associatedconstant.TAG
/// [`tag_set`]: #method.tag_set
/// [`RestrictedString`]: struct.RestrictedString.html
pub trait CharSet {
    /// The natural tag of the related restricted character string type.
    const TAG: Tag;

    /// Returns the next character from a octet sequence.
    fn next_char<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError>;

    /// Converts a `str` into a octet sequence.
    ///
    /// If the string can be encoded in this character set and its own octet
    /// sequence is identical to the encoded sequence, it returns its octet
    /// sequence as a `Ok(Cow::Borrowed(_))`. If the octet sequence differs,
    /// it creates that and returns it as a `Ok(Cow::Owned(_))`. Finally, if
    /// the string cannot be encoded in this character set, it returns an
    /// error.
    fn from_str(s: &str) -> Result<Cow<[u8]>, CharSetError>;

    /// Checks whether a sequence of octets is a valid string.
    fn check<I: Iterator<Item=u8>>(iter: &mut I) -> Result<(), CharSetError> {
        while Self::next_char(iter)?.is_some() { }
        Ok(())
    }

    /// Converts a valid octet sequence into a `str`.
    ///
    /// The default implementation works for all character sets that are
    /// a subset of UTF-8 and borrows in this case.
    fn to_str(slice: &[u8]) -> Cow<str> {
        String::from_utf8_lossy(slice)
    }

    /// Returns the tag set of the related restricted string type.
    ///
    /// By default, this is the natural tag in simple format.
    fn tag_set() -> TagSet {
        TagSet::new(Self::TAG, TagFormat::Simple)
    }
}


//------------ RestrictedString ----------------------------------------------

/// A generic restricted character string.
///
/// Restricted character strings essentially are a sequence of characters
/// from a specific character set mapped into a sequence of octets. This
/// type keeps that octet sequence in a [`Bytes`] value and makes sure that
/// it is correctly encoded for the given character set. Once created, a
/// value is never changed.
///
/// You can create a new value from a [`Bytes`], `String`, or `str` via
/// the [`new`] and [`from_string`] associated functions and the `FromStr`
/// trait. Conversely, a restricted character string can be converted into
/// a string by way of the [`to_str`] method or its `Display` impl.
/// The [`chars`] method provides an iterator over the characters encoded
/// in the string.
///
/// [`Bytes`]: ../../bytes/struct.Bytes.html
/// [`new`]: #method.new
/// [`from_string`]: #method.from_string
/// [`to_str`]: #method.to_str
/// [`chars`]: #method.chars
#[derive(Clone, Debug)]
pub struct RestrictedString<L: CharSet> {
    /// The underlying octets.
    octets: Bytes,

    /// Marker for our character set.
    marker: PhantomData<L>
}

impl<L: CharSet> RestrictedString<L> {
    /// Creates a new character string without any checks.
    ///
    /// The caller must make sure that `octets` is valid for the character
    /// set.
    pub(crate) fn new_unchecked(octets: Bytes) -> Self {
        RestrictedString {
            octets,
            marker: PhantomData
        }
    }

    /// Creates a new character string from a bytes value.
    ///
    /// If the octets contain sequences that are not valid for the
    /// character set, an appropriate error will be returned.
    pub fn new(octets: Bytes) -> Result<Self, CharSetError> {
        L::check(&mut octets.iter().copied())?;
        Ok(Self::new_unchecked(octets))
    }

    /// Creates a new character string from a `String`.
    ///
    /// If the string’s internal representation is identical to the encoding
    /// of restricted character string, the string will be reused and no
    /// allocation occurs. Otherwise, a new bytes value is created.
    ///
    /// If the string cannot be encoded in the character set, an error is
    /// returned.
    pub fn from_string(s: String) -> Result<Self, CharSetError> {
        let converted = match L::from_str(s.as_str())? {
            Cow::Borrowed(_) => None,
            Cow::Owned(owned) => Some(owned),
        };
        Ok(Self::new_unchecked(match converted {
            Some(owned) => owned.into(),
            None => s.into_bytes().into(),
        }))
    }

    /// Returns an iterator over the character in the character string.
    pub fn chars(&self) -> RestrictedStringChars<L> {
        RestrictedStringChars::new(self.octets.iter().copied())
    }

    /// Returns the content of the string as a `str`.
    pub fn to_str(&self) -> Cow<str> {
        L::to_str(self.octets.as_ref())
    }

    /// Returns the raw octets of the string.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns the number of octets in the string.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Converts the string into its underlying bytes.
    ///
    /// Note that the bytes value will contain the raw octets of the string
    /// which are not necessarily a valid Rust string.
    pub fn into_bytes(self) -> Bytes {
        self.octets
    }

    /// Returns the natural tag of the string type.
    pub fn tag(&self) -> Tag {
        L::TAG
    }

    /// Returns the tag set of the string type.
    pub fn tag_set(&self) -> TagSet {
        L::tag_set()
    }
}


//--- FromStr

impl<L: CharSet> str::FromStr for RestrictedString<L> {
    type Err = CharSetError;

    fn from_str(s: &str) -> Result<Self, CharSetError> {
        Ok(Self::new_unchecked(Bytes::from(L::from_str(s)?.into_owned())))
    }
}


//--- AsRef

impl<L: CharSet> AsRef<[u8]> for RestrictedString<L> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//--- PartialEq and Eq, PartialOrd and Ord
//
// We only supply PartialEq<Self> because two identical octet sequences in
// different character sets can mean different things.

impl<L: CharSet> PartialEq for RestrictedString<L> {
    fn eq(&self, other: &Self) -> bool {
        self.octets.eq(&other.octets)
    }
}

impl<L: CharSet> Eq for RestrictedString<L> { }

impl<L: CharSet> PartialOrd for RestrictedString<L> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<L: CharSet> Ord for RestrictedString<L> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.octets.cmp(&other.octets)
    }
}


//--- Hash

impl<L: CharSet> hash::Hash for RestrictedString<L> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.octets.hash(state)
    }
}


//--- Display

impl<L: CharSet> fmt::Display for RestrictedString<L> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.chars().try_for_each(|ch| fmt::Display::fmt(&ch, fmt))
    }
}


//------------ RestrictedStringChars ------------------------------------------

/// An iterator over the characters in a restricted character string.
///
/// You can obtain a value of this type via a restricted string’s [`chars`]
/// method.
///
/// [`chars`]: struct.RestrictedString.html#method.chars
#[derive(Clone, Debug)]
pub struct RestrictedStringChars<'a, L: CharSet> {
    /// The underlying octet iterator.
    octets: iter::Copied<slice::Iter<'a, u8>>,

    /// Our character set.
    marker: PhantomData<L>,
}

impl<'a, L: CharSet> RestrictedStringChars<'a, L> {
    /// Creates a new character iterator from an octet iterator.
    fn new(octets: iter::Copied<slice::Iter<'a, u8>>) -> Self {
        RestrictedStringChars {
            octets,
            marker: PhantomData
        }
    }
}

impl<'a, L: CharSet> Iterator for RestrictedStringChars<'a, L> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        // The octets have been checked when the string was created.
        L::next_char(&mut self.octets).unwrap_or(None)
    }
}


//============ Concrete Restricted String Types ==============================

//------------ VisibleString -------------------------------------------------

/// A restricted character string containing printing ASCII characters.
///
/// This character string allows the ASCII characters from space `0x20`
/// to tilde `0x7E` and encodes them with their ASCII value. Control
/// characters, including DEL, are not allowed.
///
/// It is the base type for the [`GeneralizedTime`] and [`UtcTime`]
/// useful types.
///
/// See [`RestrictedString`] for more details on restricted character
/// strings in general.
///
/// [`GeneralizedTime`]: ../useful/type.GeneralizedTime.html
/// [`UtcTime`]: ../useful/type.UtcTime.html
/// [`RestrictedString`]: struct.RestrictedString.html
pub type VisibleString = RestrictedString<VisibleCharSet>;

/// The character set for the VisibleString ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct VisibleCharSet;

impl VisibleCharSet {
    fn is_valid(ch: u8) -> bool {
        ch == b' ' || ch.is_ascii_graphic()
    }

    pub(crate) fn str_from_str(s: &str) -> Result<Cow<[u8]>, CharSetError> {
        if s.bytes().all(Self::is_valid) {
            Ok(Cow::Borrowed(s.as_bytes()))
        }
        else {
            xerr!(Err(CharSetError))
        }
    }

    pub(crate) fn next_ascii<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError> {
        match iter.next() {
            Some(ch) if Self::is_valid(ch) => Ok(Some(char::from(ch))),
            Some(_) => xerr!(Err(CharSetError)),
            None => Ok(None)
        }
    }
}

impl CharSet for VisibleCharSet {
    const TAG: Tag = Tag::VISIBLE_STRING;

    fn next_char<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError> {
        Self::next_ascii(iter)
    }

    fn from_str(s: &str) -> Result<Cow<[u8]>, CharSetError> {
        Self::str_from_str(s)
    }
}


//------------ GraphicString -------------------------------------------------

/// A restricted character string containing graphic characters.
///
/// In ASN.1, a GraphicString can contain characters from all registered
/// graphic character sets plus space. We only support the ASCII
/// registration, so this type accepts the same octets as a
/// [`VisibleString`] but keeps its own tag.
///
/// It is the base type for the [`ObjectDescriptor`] useful type.
///
/// [`VisibleString`]: type.VisibleString.html
/// [`ObjectDescriptor`]: ../useful/type.ObjectDescriptor.html
pub type GraphicString = RestrictedString<GraphicCharSet>;

/// The character set for the GraphicString ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct GraphicCharSet;

impl CharSet for GraphicCharSet {
    const TAG: Tag = Tag::GRAPHIC_STRING;

    fn next_char<I: Iterator<Item=u8>>(
        iter: &mut I
    ) -> Result<Option<char>, CharSetError> {
        VisibleCharSet::next_ascii(iter)
    }

    fn from_str(s: &str) -> Result<Cow<[u8]>, CharSetError> {
        VisibleCharSet::str_from_str(s)
    }
}


//------------ CharSetError --------------------------------------------------

/// An illegal value was encountered during character set conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharSetError;

impl fmt::Display for CharSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid characters")
    }
}

impl error::Error for CharSetError { }


//------------ Testing -------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_accept_visible_string() {
        let vs = VisibleString::new(
            Bytes::from_static(b"This is okay ~ (really).")
        ).unwrap();
        assert_eq!(vs.to_str(), "This is okay ~ (really).");
        assert_eq!(vs.to_string(), "This is okay ~ (really).");
        assert_eq!(vs.len(), 24);
        assert_eq!(vs.chars().next(), Some('T'));
        assert_eq!(vs.tag(), Tag::VISIBLE_STRING);
    }

    #[test]
    fn should_restrict_visible_string() {
        assert!(VisibleString::new(Bytes::from_static(b"tab\there")).is_err());
        assert!(VisibleString::new(Bytes::from_static(b"del\x7f")).is_err());
        assert!(VisibleString::new(Bytes::from_static(b"\xc3\xa4")).is_err());
        assert!("grüße".parse::<VisibleString>().is_err());
        assert!(
            VisibleString::from_string(String::from("line\n")).is_err()
        );
    }

    #[test]
    fn from_str_and_string_agree() {
        let parsed: VisibleString = "20210615120000Z".parse().unwrap();
        let owned = VisibleString::from_string(
            String::from("20210615120000Z")
        ).unwrap();
        assert_eq!(parsed, owned);
        assert_eq!(parsed.as_slice(), b"20210615120000Z");
        assert_eq!(
            parsed.clone().into_bytes(),
            Bytes::from_static(b"20210615120000Z")
        );
        assert!(parsed <= owned);
    }

    #[test]
    fn graphic_string() {
        let gs: GraphicString = "a descriptor".parse().unwrap();
        assert_eq!(gs.tag(), Tag::GRAPHIC_STRING);
        assert_eq!(
            gs.tag_set(), TagSet::new(Tag::GRAPHIC_STRING, TagFormat::Simple)
        );
        assert!("bell\x07".parse::<GraphicString>().is_err());
    }

    #[test]
    fn empty_string() {
        let vs = VisibleString::new(Bytes::new()).unwrap();
        assert!(vs.is_empty());
        assert_eq!(vs.chars().count(), 0);
        assert_eq!(vs.to_string(), "");
    }
}
