use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries two alternatives in order at the same
/// position and commits to the first that matches.
///
/// This is ordered choice: once the first alternative succeeds, the
/// second is never considered, even if it would have matched more input.
/// When both fail, the last alternative's failure is returned and
/// earlier failures are dropped; all alternatives started at the same
/// position, so the reported offset is the choice's own start either
/// way.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        match self.first.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.second.parse(cursor),
        }
    }
}

/// Extension trait to add `.or()` method support for parsers.
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an `Or` parser.
pub fn or<'src, P1, P2, O>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(first, second)
}
