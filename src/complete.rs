use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that requires its parser to consume the whole
/// input.
///
/// Runs the inner parser once, then fails unless the cursor has reached
/// end of input. A grammar on its own is happy to match a prefix and
/// hand back the rest; wrapping the top-level rule in `complete` is how
/// "the input must be a whole expression" gets enforced. The
/// trailing-input failure is reported at the offset where the leftover
/// begins, since that is the byte the grammar could not account for.
///
/// Example:
/// ```
/// use pegkit::complete::complete;
/// use pegkit::cursor::Cursor;
/// use pegkit::parser::Parser;
/// use pegkit::pattern::pattern;
///
/// let parser = complete(pattern("[0-9]+"));
/// assert!(parser.parse(Cursor::new(b"123")).is_ok());
/// assert!(parser.parse(Cursor::new(b"123abc")).is_err());
/// ```
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Complete { parser }
    }
}

impl<'src, P> Parser<'src> for Complete<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let (value, cursor) = self.parser.parse(cursor)?;

        if cursor.at_end() {
            Ok((value, cursor))
        } else {
            tracing::trace!(offset = cursor.position(), "trailing input rejected");
            Err(ParseError::new(
                "expected end of input",
                cursor.loc(),
            ))
        }
    }
}

/// Convenience function to create a `Complete` parser.
pub fn complete<'src, P>(parser: P) -> Complete<P>
where
    P: Parser<'src>,
{
    Complete::new(parser)
}
