use derive_more::Display;

/// A view into the text being parsed. Parsers never copy the text, they only
/// move the offset forward and hand the new view to the next parser.
///
/// Elements are `char`s. Advancing always lands on a character boundary.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[display("{}", self.rest())]
pub struct Input<'s> {
    text: &'s str,
    /// Byte offset of the first unconsumed character. Starts at 0.
    offset: usize,
}

impl<'s> Input<'s> {
    pub const fn new(text: &'s str) -> Self {
        Input { text, offset: 0 }
    }

    /// A view of `text` starting `offset` bytes in.
    ///
    /// # Panics
    ///
    /// If `offset` is past the end of `text` or not on a character boundary.
    pub fn at(text: &'s str, offset: usize) -> Self {
        assert!(
            text.is_char_boundary(offset),
            "offset {offset} is not a character boundary of the input"
        );
        Input { text, offset }
    }

    /// The whole buffer this view was cut from.
    pub const fn text(&self) -> &'s str {
        self.text
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed suffix.
    pub fn rest(&self) -> &'s str {
        &self.text[self.offset..]
    }

    pub fn is_empty(&self) -> bool {
        self.offset == self.text.len()
    }

    /// Length of the unconsumed suffix, in bytes.
    pub fn len(&self) -> usize {
        self.text.len() - self.offset
    }

    pub fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Pop the first element, returning it with the view after it.
    pub fn split_first(self) -> Option<(char, Self)> {
        let c = self.first()?;
        Some((c, self.advance(c.len_utf8())))
    }

    /// The view after `prefix`, if the remainder starts with exactly `prefix`.
    pub fn strip_prefix(self, prefix: &str) -> Option<Self> {
        if self.rest().starts_with(prefix) {
            Some(self.advance(prefix.len()))
        } else {
            None
        }
    }

    /// Skip `bytes` bytes.
    ///
    /// # Panics
    ///
    /// If that would leave the view past the end of the text or in the middle
    /// of a character.
    pub fn advance(self, bytes: usize) -> Self {
        Input::at(self.text, self.offset + bytes)
    }

    /// Whether `self` views the same buffer as `other` and starts at or after it.
    pub fn is_suffix_of(&self, other: &Input<'_>) -> bool {
        std::ptr::eq(self.text, other.text) && self.offset >= other.offset
    }
}

impl<'s> From<&'s str> for Input<'s> {
    fn from(text: &'s str) -> Self {
        Input::new(text)
    }
}
