use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser. Never fails.
///
/// A success that consumed nothing is retained once and then ends the
/// repetition: re-running the parser at the same position would return
/// the same result forever, so stopping keeps termination independent of
/// how the grammar was written.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    let progressed = next_cursor.position() > cursor.position();
                    results.push(value);
                    cursor = next_cursor;
                    if !progressed {
                        break;
                    }
                }
                Err(_) => {
                    // zero or more; failure just ends the repetition
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a `Many` parser.
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte};
    use crate::exact::exact;
    use crate::pattern::pattern;

    #[test]
    fn test_many_zero_matches() {
        let cursor = Cursor::new(b"xyz");
        let parser = many(is_byte(b'a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_one_match() {
        let cursor = Cursor::new(b"abc");
        let parser = many(is_byte(b'a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b'a']);
        assert_eq!(cursor.peek(), Some(b'b'));
    }

    #[test]
    fn test_many_multiple_matches() {
        let cursor = Cursor::new(b"aaabcd");
        let parser = many(is_byte(b'a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b'a', b'a', b'a']);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_many_consumes_all_input() {
        let cursor = Cursor::new(b"hello");
        let parser = many(byte());

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b'h', b'e', b'l', b'l', b'o']);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_many_empty_input() {
        let cursor = Cursor::new(b"");
        let parser = many(is_byte(b'a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![]);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_many_stops_after_zero_width_success() {
        // `x?` matches nothing at 'y' and would do so forever; the
        // zero-width success is kept once and the loop stops
        let cursor = Cursor::new(b"yyy");
        let parser = many(pattern("x?"));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b"" as &[u8]]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_zero_width_after_progress() {
        // consumes both 'x's, then ends on the zero-width match
        let cursor = Cursor::new(b"xxy");
        let parser = many(pattern("x?"));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b"x" as &[u8], b"x", b""]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_many_of_empty_literal_terminates() {
        let cursor = Cursor::new(b"abc");
        let parser = many(exact(""));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_at_advanced_position() {
        let cursor = Cursor::new(b"xy123").advance(2);
        let parser = many(crate::byte::byte_range(b'0', b'9'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![b'1', b'2', b'3']);
        assert!(cursor.at_end());
    }
}
