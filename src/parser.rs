use crate::cursor::Cursor;
use crate::error::ParseError;

/// Core trait every parser and combinator implements.
///
/// A parser is a pure function of a cursor: on success it returns the
/// parsed value together with the cursor to continue from, on failure a
/// `ParseError` locating where matching failed. A failing parser consumes
/// nothing; the caller still holds its own cursor and backtracking is
/// just using it again.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse at the cursor's position.
    fn parse(&self, cursor: Cursor<'src>) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>>;
}

impl<'src, P: Parser<'src> + ?Sized> Parser<'src> for &P {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        (**self).parse(cursor)
    }
}
