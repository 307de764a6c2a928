use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// A parser with its concrete type erased.
///
/// Combinator chains grow elaborate nested types; boxing flattens them
/// to a single nameable one, which is what lets a recursive grammar
/// function write down its own return type. See
/// [`lazy`](crate::lazy::lazy) for the recursion idiom built on top of
/// this.
pub struct BoxedParser<'src, O> {
    inner: Box<dyn Parser<'src, Output = O> + 'src>,
}

impl<'src, O> BoxedParser<'src, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'src, Output = O> + 'src,
    {
        Self {
            inner: Box::new(parser),
        }
    }
}

impl<'src, O> Parser<'src> for BoxedParser<'src, O> {
    type Output = O;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add `.boxed()` method support for parsers.
pub trait BoxedExt<'src>: Parser<'src> + Sized {
    fn boxed(self) -> BoxedParser<'src, Self::Output>
    where
        Self: 'src,
    {
        BoxedParser::new(self)
    }
}

impl<'src, P> BoxedExt<'src> for P where P: Parser<'src> {}
