use crate::byte::{byte_range, is_byte};
use crate::cursor::Cursor;
use crate::error::{ParseError, SourceLoc};
use crate::many1::many1;
use crate::optional::OptionalExt;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace<'src>() -> impl Parser<'src, Output = u8> {
    is_byte(b' ')
        .or(is_byte(b'\t'))
        .or(is_byte(b'\n'))
        .or(is_byte(b'\r'))
}

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<'src>() -> impl Parser<'src, Output = u8> {
    byte_range(b'0', b'9')
}

/// Parser that matches a decimal integer with an optional sign
///
/// Overflow is a parse failure, reported at the start of the number.
pub fn integer<'src>() -> impl Parser<'src, Output = i64> {
    Integer
}

struct Integer;

impl<'src> Parser<'src> for Integer {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'src>) -> Result<(i64, Cursor<'src>), ParseError<'src>> {
        let origin = cursor.loc();

        let (sign, cursor) = is_byte(b'-').or(is_byte(b'+')).opt().parse(cursor)?;
        let negative = sign == Some(b'-');

        let (digits, cursor) = many1(digit())
            .parse(cursor)
            .map_err(|error| error.at(origin))?;

        // Accumulate negated so that i64::MIN parses without overflowing
        // on the final sign flip.
        let mut magnitude: i64 = 0;
        for &digit in &digits {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|value| value.checked_sub(i64::from(digit - b'0')))
                .ok_or_else(|| out_of_range(negative, &digits, origin))?;
        }

        let value = if negative {
            magnitude
        } else {
            magnitude
                .checked_neg()
                .ok_or_else(|| out_of_range(negative, &digits, origin))?
        };

        Ok((value, cursor))
    }
}

fn out_of_range<'src>(negative: bool, digits: &[u8], loc: SourceLoc<'src>) -> ParseError<'src> {
    let digits = String::from_utf8_lossy(digits);
    let message = if negative {
        format!("negative number too large: -{}", digits)
    } else {
        format!("positive number too large: {}", digits)
    };
    ParseError::new(message, loc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;

    #[test]
    fn test_whitespace_space() {
        let cursor = Cursor::new(b" abc");
        let parser = whitespace();

        let (ws, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ws, b' ');
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn test_whitespace_tab() {
        let cursor = Cursor::new(b"\txyz");
        let parser = whitespace();

        let (ws, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ws, b'\t');
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_whitespace_newline_and_carriage_return() {
        let (ws, _) = whitespace().parse(Cursor::new(b"\nabc")).unwrap();
        assert_eq!(ws, b'\n');

        let (ws, _) = whitespace().parse(Cursor::new(b"\rxyz")).unwrap();
        assert_eq!(ws, b'\r');
    }

    #[test]
    fn test_whitespace_non_whitespace_fails() {
        let cursor = Cursor::new(b"abc");
        let result = whitespace().parse(cursor);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("expected byte"));
    }

    #[test]
    fn test_many_whitespace() {
        let cursor = Cursor::new(b"  \t\n abc");
        let parser = many(whitespace());

        let (ws, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ws, vec![b' ', b' ', b'\t', b'\n', b' ']);
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn test_many_whitespace_zero_matches() {
        let cursor = Cursor::new(b"abc");
        let parser = many(whitespace());

        let (ws, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ws, vec![]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_digit_bounds() {
        let (d, _) = digit().parse(Cursor::new(b"0abc")).unwrap();
        assert_eq!(d, b'0');

        let (d, _) = digit().parse(Cursor::new(b"9xyz")).unwrap();
        assert_eq!(d, b'9');
    }

    #[test]
    fn test_digit_non_digit_fails() {
        let cursor = Cursor::new(b"abc");
        let result = digit().parse(cursor);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("expected byte"));
    }

    #[test]
    fn test_positive_integer() {
        let cursor = Cursor::new(b"123abc");
        let parser = integer();

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn test_negative_integer() {
        let cursor = Cursor::new(b"-456xyz");
        let parser = integer();

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, -456);
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_integer_with_plus() {
        let cursor = Cursor::new(b"+789");
        let parser = integer();

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 789);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_integer_zero() {
        let (value, cursor) = integer().parse(Cursor::new(b"0")).unwrap();
        assert_eq!(value, 0);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_integer_no_digit_fails() {
        let cursor = Cursor::new(b"abc");
        assert!(integer().parse(cursor).is_err());
    }

    #[test]
    fn test_integer_minus_only_fails_at_start() {
        let cursor = Cursor::new(b"..-abc");
        let error = integer().parse(cursor.advance(2)).unwrap_err();
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_integer_extremes() {
        let (value, _) = integer()
            .parse(Cursor::new(b"9223372036854775807"))
            .unwrap();
        assert_eq!(value, i64::MAX);

        let (value, _) = integer()
            .parse(Cursor::new(b"-9223372036854775808"))
            .unwrap();
        assert_eq!(value, i64::MIN);
    }

    #[test]
    fn test_integer_overflow_fails() {
        let cursor = Cursor::new(b"9223372036854775808");
        let result = integer().parse(cursor);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("too large"));
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_integer_negative_overflow_fails() {
        let cursor = Cursor::new(b"-9223372036854775809");
        let result = integer().parse(cursor);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_integer_stops_at_non_digit() {
        let cursor = Cursor::new(b"42.5");
        let (value, cursor) = integer().parse(cursor).unwrap();

        assert_eq!(value, 42);
        assert_eq!(cursor.peek(), Some(b'.'));
    }
}
