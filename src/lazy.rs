use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use once_cell::sync::OnceCell;

/// A lazy parser that defers construction of the actual parser until the
/// first parse, then caches it.
///
/// The factory is not invoked when the `Lazy` value is built; it runs on
/// first use and at most once per value, with every later parse reusing
/// the constructed parser. This breaks definition cycles in recursive
/// grammars: a rule function can mention itself through `lazy` without
/// recursing at construction time, because each nesting level of input
/// forces at most one further level of grammar.
///
/// The usual recursion idiom pairs `lazy` with boxing:
///
/// ```
/// use pegkit::boxed::{BoxedExt, BoxedParser};
/// use pegkit::byte::is_byte;
/// use pegkit::cursor::Cursor;
/// use pegkit::lazy::lazy;
/// use pegkit::map::MapExt;
/// use pegkit::or::OrExt;
/// use pegkit::parser::Parser;
/// use pegkit::then::ThenExt;
///
/// fn parens<'src>() -> BoxedParser<'src, u8> {
///     is_byte(b'(')
///         .then(lazy(parens))
///         .then(is_byte(b')'))
///         .map(|((_, inner), _)| inner)
///         .or(is_byte(b'x'))
///         .boxed()
/// }
///
/// let (value, cursor) = parens().parse(Cursor::new(b"((x))")).unwrap();
/// assert_eq!(value, b'x');
/// assert!(cursor.at_end());
/// ```
pub struct Lazy<F, P> {
    factory: F,
    cell: OnceCell<P>,
}

impl<F, P> Lazy<F, P> {
    /// Create a new lazy parser with the given factory function.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cell: OnceCell::new(),
        }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        let parser = self.cell.get_or_init(|| {
            tracing::trace!("constructing deferred parser on first use");
            (self.factory)()
        });
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function.
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}
