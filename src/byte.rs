use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Render a byte for error messages: printable ASCII as a quoted char,
/// everything else as hex.
fn show(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02X}", byte)
    }
}

/// Parser that consumes and returns the next byte, whatever it is.
pub struct Byte;

impl Byte {
    pub fn new() -> Self {
        Byte
    }
}

impl<'src> Parser<'src> for Byte {
    type Output = u8;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        match cursor.peek() {
            Some(byte) => Ok((byte, cursor.advance(1))),
            None => Err(ParseError::unexpected_end(cursor.loc())),
        }
    }
}

/// Parser that matches one specific byte.
pub struct IsByte {
    expected: u8,
}

impl IsByte {
    pub fn new(expected: u8) -> Self {
        IsByte { expected }
    }
}

impl<'src> Parser<'src> for IsByte {
    type Output = u8;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        match cursor.peek() {
            Some(byte) if byte == self.expected => Ok((byte, cursor.advance(1))),
            Some(byte) => Err(ParseError::new(
                format!("expected byte {}, found {}", show(self.expected), show(byte)),
                cursor.loc(),
            )),
            None => Err(ParseError::unexpected_end(cursor.loc())),
        }
    }
}

/// Parser that matches a byte within an inclusive range.
pub struct ByteRange {
    start: u8,
    end: u8,
}

impl ByteRange {
    pub fn new(start: u8, end: u8) -> Self {
        ByteRange { start, end }
    }
}

impl<'src> Parser<'src> for ByteRange {
    type Output = u8;

    fn parse(
        &self,
        cursor: Cursor<'src>,
    ) -> Result<(Self::Output, Cursor<'src>), ParseError<'src>> {
        match cursor.peek() {
            Some(byte) if byte >= self.start && byte <= self.end => Ok((byte, cursor.advance(1))),
            Some(byte) => Err(ParseError::new(
                format!(
                    "expected byte in range {}-{}, found {}",
                    show(self.start),
                    show(self.end),
                    show(byte)
                ),
                cursor.loc(),
            )),
            None => Err(ParseError::unexpected_end(cursor.loc())),
        }
    }
}

/// Convenience function to create a `Byte` parser.
pub fn byte() -> Byte {
    Byte::new()
}

/// Convenience function to create an `IsByte` parser.
pub fn is_byte(expected: u8) -> IsByte {
    IsByte::new(expected)
}

/// Convenience function to create a `ByteRange` parser.
pub fn byte_range(start: u8, end: u8) -> ByteRange {
    ByteRange::new(start, end)
}
