use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value
/// with the delimiter values discarded.
///
/// Like any sequence, a failure in `content` or `close` is reported at the
/// position where the whole form began, so callers that try an alternative
/// resume from a sensible place.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"{data}"` → `"data"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, P1, P2, P3> Parser<'src> for Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let origin = cursor.loc();

        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self
            .content
            .parse(cursor)
            .map_err(|error| error.at(origin))?;
        let (_, cursor) = self.close.parse(cursor).map_err(|error| error.at(origin))?;

        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
///
/// The delimiters are parsed and discarded; only the content value is returned.
pub fn between<'src, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    Between::new(open, content, close)
}
