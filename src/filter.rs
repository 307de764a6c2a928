use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that refines another parser with a pure predicate.
///
/// The inner parser runs first; if the predicate rejects its value the
/// combinator fails with the given message at the position where the
/// inner parser started, so the rejected consumption is rolled back
/// like any other failure.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            parser,
            predicate,
            message: message.into(),
        }
    }
}

impl<'src, P, F, T> Parser<'src> for Filter<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let (value, next_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next_cursor))
        } else {
            Err(ParseError::new(self.message.clone(), cursor.loc()))
        }
    }
}

/// Extension trait to add `.filter()` method support for parsers.
pub trait FilterExt<'src>: Parser<'src> {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, message)
    }
}

impl<'src, P: Parser<'src>> FilterExt<'src> for P {}

/// Convenience function to create a `Filter` parser.
pub fn filter<'src, P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, message)
}
