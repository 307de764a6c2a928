use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional. Never fails.
///
/// On success the value is wrapped in `Some` and the cursor advances as
/// the inner parser left it; on failure the combinator succeeds with
/// `None` at the unchanged position. `None` is the absent marker, so
/// "optional thing was missing" is an ordinary value the grammar can
/// branch on.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an `Optional` parser.
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}

/// Extension trait to add `.opt()` method support for parsers.
pub trait OptionalExt<'src>: Parser<'src> + Sized {
    fn opt(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'src, P> OptionalExt<'src> for P where P: Parser<'src> {}
