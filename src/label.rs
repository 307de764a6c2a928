use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that renames a parser's failure.
///
/// Any failure of the inner parser is replaced by one carrying the given
/// message, reported at the position where this parser started. Grammar
/// authors use it to speak in domain terms ("expected a number") instead
/// of surfacing whichever low-level piece happened to fail first. What
/// the parser accepts is unchanged; only the message and reported offset
/// of the failure are.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            parser,
            message: message.into(),
        }
    }
}

impl<'src, P> Parser<'src> for Label<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        self.parser
            .parse(cursor)
            .map_err(|_| ParseError::new(self.message.clone(), cursor.loc()))
    }
}

/// Extension trait to add `.label()` method support for parsers.
pub trait LabelExt<'src>: Parser<'src> + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

impl<'src, P> LabelExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a `Label` parser.
pub fn label<'src, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'src>,
{
    Label::new(parser, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::is_byte;
    use crate::exact::exact;
    use crate::or::OrExt;

    #[test]
    fn test_label_replaces_message() {
        let cursor = Cursor::new(b"xyz");
        let parser = is_byte(b'0').or(is_byte(b'1')).label("expected a bit");

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("expected a bit"));
        assert!(!error.to_string().contains("found 'x'"));
    }

    #[test]
    fn test_label_reports_at_parser_start() {
        let cursor = Cursor::new(b"..abc").advance(2);
        let parser = exact("abx").label("expected marker");

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_label_leaves_success_alone() {
        let cursor = Cursor::new(b"abc");
        let parser = exact("ab").label("expected marker");

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value.as_ref(), "ab");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_label_function_syntax() {
        let cursor = Cursor::new(b"z");
        let parser = label(is_byte(b'a'), "expected the letter a");

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("expected the letter a"));
    }
}
