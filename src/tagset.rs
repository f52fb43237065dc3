//! Tag sets and tagging.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{error, fmt, slice};
use smallvec::SmallVec;
use crate::tag::Tag;


//------------ TagFormat -----------------------------------------------------

/// The encoding format signalled alongside a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TagFormat {
    /// The value is encoded in primitive form.
    Simple,

    /// The value is encoded in constructed form.
    Constructed,
}


//------------ TagSet --------------------------------------------------------

/// The sequence of tags applied to a type.
///
/// A type starts out with its natural tag. Each time the type is tagged
/// in an ASN.1 module, the tag set changes. Implicit tagging replaces the
/// outermost tag while explicit tagging adds a new outer tag, wrapping the
/// value in another constructed layer on the wire. The two must not be
/// confused since they result in different encodings.
///
/// The tags are kept innermost first. Tag sets are rarely more than two
/// tags deep, so they normally live entirely on the stack.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TagSet {
    tags: SmallVec<[(Tag, TagFormat); 2]>,
}

impl TagSet {
    /// Creates an empty tag set.
    ///
    /// This is the tag set of an untagged type such as a CHOICE.
    pub fn untagged() -> Self {
        TagSet { tags: SmallVec::new() }
    }

    /// Creates the tag set of a type with the given natural tag.
    pub fn new(tag: Tag, format: TagFormat) -> Self {
        let mut tags = SmallVec::new();
        tags.push((tag, format));
        TagSet { tags }
    }

    /// Returns a new tag set with `tag` applied implicitly.
    ///
    /// The outermost tag is replaced by `tag` which keeps the format of
    /// the tag it replaces. If the set is empty, `tag` is added as a
    /// simple tag.
    pub fn tag_implicitly(&self, tag: Tag) -> Self {
        let mut res = self.clone();
        match res.tags.last_mut() {
            Some(last) => last.0 = tag,
            None => res.tags.push((tag, TagFormat::Simple)),
        }
        res
    }

    /// Returns a new tag set with `tag` applied explicitly.
    ///
    /// The tag is added as a new constructed outermost tag. Tags of the
    /// universal class cannot be used for explicit tagging and result in
    /// an error.
    pub fn tag_explicitly(&self, tag: Tag) -> Result<Self, TagError> {
        if tag.is_universal() {
            return xerr!(Err(TagError::ExplicitUniversal(tag)))
        }
        let mut res = self.clone();
        res.tags.push((tag, TagFormat::Constructed));
        Ok(res)
    }

    /// Returns the innermost tag.
    pub fn base_tag(&self) -> Option<Tag> {
        self.tags.first().map(|item| item.0)
    }

    /// Returns the outermost tag and its format.
    ///
    /// This is the tag that appears first on the wire.
    pub fn outermost(&self) -> Option<(Tag, TagFormat)> {
        self.tags.last().copied()
    }

    /// Returns the number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns an iterator over the tags, innermost first.
    pub fn iter(&self) -> slice::Iter<(Tag, TagFormat)> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a (Tag, TagFormat);
    type IntoIter = slice::Iter<'a, (Tag, TagFormat)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (tag, _) in self.tags.iter().rev() {
            if first {
                first = false;
            }
            else {
                f.write_str(" ")?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}


//------------ TagError ------------------------------------------------------

/// A tag could not be applied to a tag set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagError {
    /// A universal tag was used for explicit tagging.
    ExplicitUniversal(Tag),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TagError::ExplicitUniversal(tag) => {
                write!(f, "cannot tag explicitly with universal tag {}", tag)
            }
        }
    }
}

impl error::Error for TagError { }


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn implicit_replaces() {
        let base = TagSet::new(Tag::VISIBLE_STRING, TagFormat::Simple);
        let tagged = base.tag_implicitly(Tag::GENERALIZED_TIME);
        assert_eq!(tagged.len(), 1);
        assert_eq!(
            tagged.outermost(),
            Some((Tag::GENERALIZED_TIME, TagFormat::Simple))
        );
        assert_eq!(tagged.base_tag(), Some(Tag::GENERALIZED_TIME));
        assert_eq!(
            tagged, TagSet::new(Tag::GENERALIZED_TIME, TagFormat::Simple)
        );

        // The base set is unchanged.
        assert_eq!(base.base_tag(), Some(Tag::VISIBLE_STRING));
    }

    #[test]
    fn implicit_keeps_format() {
        let set = TagSet::new(Tag::SEQUENCE, TagFormat::Constructed)
            .tag_implicitly(Tag::ctx(0));
        assert_eq!(
            set.outermost(), Some((Tag::ctx(0), TagFormat::Constructed))
        );
    }

    #[test]
    fn implicit_on_untagged() {
        let set = TagSet::untagged().tag_implicitly(Tag::ctx(1));
        assert_eq!(set.outermost(), Some((Tag::ctx(1), TagFormat::Simple)));
        assert!(TagSet::untagged().is_empty());
    }

    #[test]
    fn explicit_wraps() {
        let set = TagSet::new(Tag::UTC_TIME, TagFormat::Simple)
            .tag_explicitly(Tag::ctx(2)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.base_tag(), Some(Tag::UTC_TIME));
        assert_eq!(
            set.outermost(), Some((Tag::ctx(2), TagFormat::Constructed))
        );
        assert_eq!(set.to_string(), "[2] UTCTime");
        assert_eq!(
            set.iter().map(|item| item.0).collect::<Vec<_>>(),
            vec![Tag::UTC_TIME, Tag::ctx(2)]
        );
    }

    #[test]
    fn explicit_universal_fails() {
        let set = TagSet::new(Tag::VISIBLE_STRING, TagFormat::Simple);
        assert_eq!(
            set.tag_explicitly(Tag::OCTET_STRING),
            Err(TagError::ExplicitUniversal(Tag::OCTET_STRING))
        );
    }
}
