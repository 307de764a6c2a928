use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string, code unit for code unit.
///
/// Matching is case-sensitive. The empty string matches at every valid
/// position, including end of input, and consumes nothing. On any
/// mismatch the failure is reported at the position where the match was
/// attempted, not at the diverging byte.
pub struct Exact {
    expected: Cow<'static, str>,
}

impl Exact {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for Exact {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let expected = self.expected.as_bytes();
        let remaining = cursor.remaining();

        let matched = expected
            .iter()
            .zip(remaining)
            .take_while(|(a, b)| a == b)
            .count();

        if matched == expected.len() {
            // Cow clone only copies the reference for borrowed strings
            return Ok((self.expected.clone(), cursor.advance(expected.len())));
        }

        let message = if matched == remaining.len() {
            format!("input ended while matching \"{}\"", self.expected)
        } else {
            format!("expected \"{}\"", self.expected)
        };
        Err(ParseError::new(message, cursor.loc()))
    }
}

/// Convenience function to create an `Exact` parser.
pub fn exact(expected: impl Into<Cow<'static, str>>) -> Exact {
    Exact::new(expected)
}
