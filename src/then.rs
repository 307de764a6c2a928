use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results
/// as a tuple.
///
/// Note: When chaining multiple `.then()` calls, this produces nested
/// tuples like `(((a, b), c), d)` rather than flat tuples like
/// `(a, b, c, d)`. This is due to Rust's lack of variadic generics.
/// While macros could flatten specific arities, the nested tuple is more
/// general and the destructuring pattern is explicit about parsing
/// order.
///
/// If any element fails, the whole sequence fails at the position where
/// the sequence began; input consumed by earlier elements is abandoned.
///
/// Example:
/// ```
/// use pegkit::cursor::Cursor;
/// use pegkit::byte::is_byte;
/// use pegkit::then::ThenExt;
/// use pegkit::parser::Parser;
///
/// let cursor = Cursor::new(b"A5x");
/// let ((a, five), cursor) = is_byte(b'A')
///     .then(is_byte(b'5'))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(a, b'A');
/// assert_eq!(five, b'5');
/// assert_eq!(cursor.position(), 2);
/// ```
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let origin = cursor.loc();
        let (first, cursor) = self.first.parse(cursor)?;
        let (second, cursor) = self
            .second
            .parse(cursor)
            .map_err(|error| error.at(origin))?;
        Ok(((first, second), cursor))
    }
}

/// Convenience function to create a `Then` parser.
pub fn then<'src, P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    Then::new(first, second)
}

/// Extension trait to add `.then()` method support for parsers.
pub trait ThenExt<'src>: Parser<'src> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'src>,
    {
        Then::new(self, other)
    }
}

impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}
