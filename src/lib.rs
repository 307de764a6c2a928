//! # Pegkit - Parser Combinator Library
//!
//! A parser combinator library for building recursive descent parsers over
//! raw bytes.
//!
//! Pegkit provides composable, type-safe parsers that can be combined to build
//! complex parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Provides line numbers, context, and detailed error messages
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Ordered choice**: Alternatives commit to the first match, and a failed
//!   branch never consumes input

pub mod ascii;
pub mod between;
pub mod boxed;
pub mod byte;
pub mod complete;
pub mod cursor;
pub mod error;
pub mod exact;
pub mod filter;
pub mod label;
pub mod lazy;
pub mod many;
pub mod many1;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod then;

pub use between::between;
pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::Cursor;
pub use error::{ParseError, SourceLoc};
pub use parser::Parser;
