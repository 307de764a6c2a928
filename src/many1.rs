use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::many::many;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given
/// parser.
///
/// The first application must succeed; its failure becomes the failure
/// of the whole combinator, at the starting position. After that first
/// success the behavior is exactly [`many`](crate::many::many)'s,
/// including the rule that a zero-width success ends the repetition.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'src, P> Parser<'src> for Many1<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let start = cursor.position();
        let (first, cursor) = self.parser.parse(cursor)?;

        if cursor.position() == start {
            // zero-width first match: repeating could never progress
            return Ok((vec![first], cursor));
        }

        let (rest, cursor) = many(&self.parser).parse(cursor)?;
        let mut results = Vec::with_capacity(1 + rest.len());
        results.push(first);
        results.extend(rest);
        Ok((results, cursor))
    }
}

/// Convenience function to create a `Many1` parser.
pub fn many1<'src, P>(parser: P) -> Many1<P>
where
    P: Parser<'src>,
{
    Many1::new(parser)
}
