use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead.
///
/// Succeeds with `()` if the given parser fails at the current position,
/// fails if it succeeds. Never consumes input either way; on the success
/// path the caller continues from the same position it started at.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
{
    type Output = ();

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::new(
                "negative lookahead failed: unexpected match",
                cursor.loc(),
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a `Not` parser.
pub fn not<'src, P>(parser: P) -> Not<P>
where
    P: Parser<'src>,
{
    Not::new(parser)
}

/// Extension trait to add `.not()` method support for parsers.
pub trait NotExt<'src>: Parser<'src> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<'src, P> NotExt<'src> for P where P: Parser<'src> {}
