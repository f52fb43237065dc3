//! ASN.1 tags.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;


//------------ TagClass ------------------------------------------------------

/// The class of a tag.
///
/// ASN.1 splits the tag space into four classes. The universal class is
/// reserved for the types defined by ASN.1 itself, all of the types in
/// this crate are in it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TagClass {
    /// The universal class for types defined in X.680.
    Universal,

    /// The application class.
    Application,

    /// The context specific class.
    ContextSpecific,

    /// The private class.
    Private,
}


//------------ Tag -----------------------------------------------------------

/// The tag of an ASN.1 type.
///
/// The tag consists of two parts: the class and the number – the `Tag`
/// type includes both of them. Whether a value is encoded in primitive
/// or constructed form is not part of the tag but is kept alongside it
/// in a [`TagSet`].
///
/// # Limitations
///
/// Since BER can only sensibly encode tag numbers in up to four identifier
/// octets, we only support tag numbers between 0 and 1fffff.
///
/// [`TagSet`]: ../tagset/struct.TagSet.html
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Tag {
    /// The class of the tag.
    class: TagClass,

    /// The tag number.
    number: u32,
}

/// # Constants for Often Used Tag Values
///
impl Tag {
    /// The largest tag number we support.
    pub const MAX_NUMBER: u32 = 0x001f_ffff;

    /// The tag marking the end-of-value in an indefinite length value.
    ///
    /// This is UNIVERSAL 0.
    pub const END_OF_VALUE: Self = Tag::universal(0);

    //--- Universal Tags
    //
    // See clause 8.6 of X.680.

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Tag::universal(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Tag::universal(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Tag::universal(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Tag::universal(4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Tag::universal(5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Tag::universal(6);

    /// The tag for the ObjectDescriptor type, UNIVERSAL 7.
    pub const OBJECT_DESCRIPTOR: Self = Tag::universal(7);

    /// The tag for the EXTERNAL and Instance-of types, UNIVERSAL 8.
    pub const EXTERNAL: Self = Tag::universal(8);

    /// The tag for the REAL type, UNIVERSAL 9.
    pub const REAL: Self = Tag::universal(9);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Tag::universal(10);

    /// The tag for the EMBEDDED PDV type, UNIVERSAL 11.
    pub const EMBEDDED_PDV: Self = Tag::universal(11);

    /// The tag for the UTF8String type, UNIVERSAL 12
    pub const UTF8_STRING: Self = Tag::universal(12);

    /// The tag for the RELATIVE-OID type, UNIVERSAL 13.
    pub const RELATIVE_OID: Self = Tag::universal(13);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Tag::universal(16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Tag::universal(17);

    /// The tag for the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Tag::universal(18);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Tag::universal(19);

    /// The tag for the TeletexString type, UNIVERSAL 20.
    pub const TELETEX_STRING: Self = Tag::universal(20);

    /// The tag for the VideotexString type, UNIVERSAL 21.
    pub const VIDEOTEX_STRING: Self = Tag::universal(21);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Tag::universal(22);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Tag::universal(23);

    /// The tag for the GeneralizedTime type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Tag::universal(24);

    /// The tag for the GraphicString type, UNIVERSAL 25.
    pub const GRAPHIC_STRING: Self = Tag::universal(25);

    /// The tag for the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Tag::universal(26);

    /// The tag for the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Tag::universal(27);

    /// The tag for the UniversalString type, UNIVERSAL 28.
    pub const UNIVERSAL_STRING: Self = Tag::universal(28);

    /// The tag for the BMPString type, UNIVERSAL 30.
    pub const BMP_STRING: Self = Tag::universal(30);
}

impl Tag {
    /// Creates a new tag from a class and a number.
    ///
    /// # Panics
    ///
    /// This function panics if the tag number is greater than
    /// `Self::MAX_NUMBER`.
    pub const fn new(class: TagClass, number: u32) -> Self {
        assert!(number <= Tag::MAX_NUMBER);
        Tag { class, number }
    }

    /// Creates a new tag in the universal class with the given tag number.
    ///
    /// # Panics
    ///
    /// Currently, this function panics if the tag number is greater than
    /// `MAX_NUMBER`.
    pub const fn universal(number: u32) -> Self {
        Tag::new(TagClass::Universal, number)
    }

    /// Creates a new tag in the application class with the given tag number.
    ///
    /// # Panics
    ///
    /// Currently, this function panics if the tag number is greater than
    /// `MAX_NUMBER`.
    pub const fn application(number: u32) -> Self {
        Tag::new(TagClass::Application, number)
    }

    /// Creates a new tag in the context specific class.
    ///
    /// # Panics
    ///
    /// Currently, this function panics if the provided tag number is greater
    /// than `MAX_NUMBER`.
    pub const fn ctx(number: u32) -> Self {
        Tag::new(TagClass::ContextSpecific, number)
    }

    /// Creates a new tag in the private class with the given tag number.
    ///
    /// # Panics
    ///
    /// Currently, this function panics if the provided tag number is greater
    /// than `MAX_NUMBER`.
    pub const fn private(number: u32) -> Self {
        Tag::new(TagClass::Private, number)
    }

    /// Returns the class of the tag.
    pub fn class(self) -> TagClass {
        self.class
    }

    /// Returns the number of the tag.
    pub fn number(self) -> u32 {
        self.number
    }

    /// Returns whether the tag is of the universal class.
    pub fn is_universal(self) -> bool {
        self.class == TagClass::Universal
    }

    /// Returns whether the tag is of the application class.
    pub fn is_application(self) -> bool {
        self.class == TagClass::Application
    }

    /// Returns whether the tag is of the context specific class.
    pub fn is_context_specific(self) -> bool {
        self.class == TagClass::ContextSpecific
    }

    /// Returns whether the tag is of the private class.
    pub fn is_private(self) -> bool {
        self.class == TagClass::Private
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::OBJECT_DESCRIPTOR => write!(f, "ObjectDescriptor"),
            Tag::EXTERNAL => write!(f, "EXTERNAL"),
            Tag::REAL => write!(f, "REAL"),
            Tag::ENUMERATED => write!(f, "ENUMERATED"),
            Tag::EMBEDDED_PDV => write!(f, "EMBEDDED PDV"),
            Tag::UTF8_STRING => write!(f, "UTF8String"),
            Tag::RELATIVE_OID => write!(f, "RELATIVE-OID"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            Tag::NUMERIC_STRING => write!(f, "NumericString"),
            Tag::PRINTABLE_STRING => write!(f, "PrintableString"),
            Tag::TELETEX_STRING => write!(f, "TeletexString"),
            Tag::VIDEOTEX_STRING => write!(f, "VideotexString"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::UTC_TIME => write!(f, "UTCTime"),
            Tag::GENERALIZED_TIME => write!(f, "GeneralizedTime"),
            Tag::GRAPHIC_STRING => write!(f, "GraphicString"),
            Tag::VISIBLE_STRING => write!(f, "VisibleString"),
            Tag::GENERAL_STRING => write!(f, "GeneralString"),
            Tag::UNIVERSAL_STRING => write!(f, "UniversalString"),
            Tag::BMP_STRING => write!(f, "BMPString"),
            tag => {
                match tag.class {
                    TagClass::Universal => write!(f, "[UNIVERSAL ")?,
                    TagClass::Application => write!(f, "[APPLICATION ")?,
                    TagClass::ContextSpecific => write!(f, "[")?,
                    TagClass::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", tag.number)
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    const CLASSES: &[TagClass] = &[
        TagClass::Universal, TagClass::Application,
        TagClass::ContextSpecific, TagClass::Private
    ];

    #[test]
    fn class_and_number() {
        for &class in CLASSES {
            for &number in &[0, 1, 30, 31, 127, 128, Tag::MAX_NUMBER] {
                let tag = Tag::new(class, number);
                assert_eq!(tag.class(), class);
                assert_eq!(tag.number(), number);
            }
        }
        assert!(Tag::universal(7).is_universal());
        assert!(Tag::application(7).is_application());
        assert!(Tag::ctx(7).is_context_specific());
        assert!(Tag::private(7).is_private());
        assert_ne!(Tag::universal(7), Tag::ctx(7));
    }

    #[test]
    fn useful_type_tags() {
        assert_eq!(Tag::OBJECT_DESCRIPTOR.number(), 7);
        assert_eq!(Tag::UTC_TIME.number(), 23);
        assert_eq!(Tag::GENERALIZED_TIME.number(), 24);
        assert!(Tag::GENERALIZED_TIME.is_universal());
    }

    #[test]
    #[should_panic]
    fn number_too_large() {
        let _ = Tag::ctx(Tag::MAX_NUMBER + 1);
    }

    #[test]
    fn display() {
        assert_eq!(Tag::GENERALIZED_TIME.to_string(), "GeneralizedTime");
        assert_eq!(Tag::UTC_TIME.to_string(), "UTCTime");
        assert_eq!(Tag::OBJECT_DESCRIPTOR.to_string(), "ObjectDescriptor");
        assert_eq!(Tag::ctx(3).to_string(), "[3]");
        assert_eq!(Tag::application(40).to_string(), "[APPLICATION 40]");
        assert_eq!(Tag::universal(14).to_string(), "[UNIVERSAL 14]");
        assert_eq!(
            format!("{:?}", Tag::VISIBLE_STRING), "Tag(VisibleString)"
        );
    }
}
