use crate::error::SourceLoc;

/// Read position inside an immutable byte input.
///
/// A cursor is a cheap `Copy` value pairing the full input slice with a
/// byte offset. Parsers receive a cursor and return the cursor to continue
/// from; a failed parser simply never hands a new cursor back, so the
/// caller keeps parsing from the one it already had. Offset `len` is a
/// valid position and means end of input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'src> {
    input: &'src [u8],
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Cursor at the start of `input`.
    pub fn new(input: &'src [u8]) -> Self {
        Cursor { input, offset: 0 }
    }

    /// The byte at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Cursor moved forward by `n` bytes, saturating at end of input.
    pub fn advance(self, n: usize) -> Self {
        Cursor {
            input: self.input,
            offset: usize::min(self.offset.saturating_add(n), self.input.len()),
        }
    }

    /// Current byte offset from the start of the input.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The not-yet-consumed tail of the input.
    pub fn remaining(&self) -> &'src [u8] {
        &self.input[self.offset..]
    }

    /// The whole input this cursor reads from.
    pub fn source(&self) -> &'src [u8] {
        self.input
    }

    /// True once every byte has been consumed.
    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// The current position as an error location.
    pub fn loc(&self) -> SourceLoc<'src> {
        SourceLoc::new(self.input, self.offset)
    }
}
