use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use regex::bytes::Regex;

/// Parser that matches a regular expression anchored at the cursor.
///
/// The pattern is compiled once, wrapped as `\A(?:pattern)`, so a match
/// must begin exactly at the current position; a match existing further
/// into the input is not a match. Zero-length matches (for patterns like
/// `\s*`) are ordinary successes that consume nothing. Flags use the
/// inline syntax of the `regex` crate, e.g. `(?i)` for case-insensitive
/// matching, and Unicode character classes are available as usual.
pub struct Pattern {
    regex: Regex,
    text: String,
}

impl Pattern {
    /// Compile `pattern` into an anchored matcher.
    ///
    /// Returns the `regex` crate's error when the pattern does not parse;
    /// use this form for patterns that are not compile-time constants.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\A(?:{})", pattern))?;
        tracing::debug!(pattern, "compiled anchored pattern");
        Ok(Self {
            regex,
            text: pattern.to_owned(),
        })
    }
}

impl<'src> Parser<'src> for Pattern {
    type Output = &'src [u8];

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let remaining = cursor.remaining();
        match self.regex.find(remaining) {
            Some(found) => {
                let matched = &remaining[..found.end()];
                Ok((matched, cursor.advance(found.end())))
            }
            None => Err(ParseError::new(
                format!("expected a match for /{}/", self.text),
                cursor.loc(),
            )),
        }
    }
}

/// Convenience function to create a `Pattern` parser.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. Grammar
/// patterns are normally literals written next to the grammar, where an
/// invalid one is a bug; use [`Pattern::new`] for patterns arriving at
/// runtime.
pub fn pattern(pattern: &str) -> Pattern {
    match Pattern::new(pattern) {
        Ok(parser) => parser,
        Err(error) => panic!("invalid pattern /{}/: {}", pattern, error),
    }
}
