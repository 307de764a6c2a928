use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Location of a parse failure: the full input plus the byte offset at
/// which matching failed.
///
/// Line numbers and in-line offsets are derived lazily for display. The
/// in-line value is a byte offset rather than a column number because
/// columns depend on encoding, tab width and rendering; the byte offset
/// is unambiguous.
#[derive(Debug, Copy, Clone)]
pub struct SourceLoc<'src> {
    source: &'src [u8],
    offset: usize,
}

impl<'src> SourceLoc<'src> {
    pub fn new(source: &'src [u8], offset: usize) -> Self {
        Self { source, offset }
    }

    /// Absolute byte offset from the start of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// One-based line number and byte offset within that line.
    fn readable(&self) -> (usize, usize) {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &byte) in self.source.iter().enumerate().take(self.offset) {
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        (line, self.offset - line_start)
    }

    /// Source lines around the failure, up to two on each side, with a
    /// pointer under the failing offset.
    fn context_lines(&self) -> Vec<String> {
        let (line, line_offset) = self.readable();
        let mut lines = Vec::new();

        for (i, raw) in self.source.split(|&b| b == b'\n').enumerate() {
            let number = i + 1;
            if number + 2 < line || number > line + 2 {
                continue;
            }

            let prefix = if number == line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, String::from_utf8_lossy(raw)));

            if number == line {
                let pointer_offset = prefix.len() + line_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// The one kind of parse error: matching failed at some location.
///
/// Failures are ordinary values flowing back through `Result`, never
/// panics. The message is for humans; no combinator's control flow reads
/// it, so replacing it (see `label`) cannot change what a grammar
/// accepts.
#[derive(Debug)]
pub struct ParseError<'src> {
    message: Cow<'static, str>,
    loc: SourceLoc<'src>,
}

impl<'src> ParseError<'src> {
    pub fn new(message: impl Into<Cow<'static, str>>, loc: SourceLoc<'src>) -> Self {
        Self {
            message: message.into(),
            loc,
        }
    }

    /// Failure for reads past the end of the input.
    pub fn unexpected_end(loc: SourceLoc<'src>) -> Self {
        Self::new("unexpected end of input", loc)
    }

    /// Byte offset at which matching failed.
    pub fn position(&self) -> usize {
        self.loc.offset()
    }

    pub fn loc(&self) -> SourceLoc<'src> {
        self.loc
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The same failure reported from an earlier location.
    ///
    /// Sequencing combinators use this to report at the offset where the
    /// whole sequence began rather than where the late element gave up.
    pub fn at(mut self, loc: SourceLoc<'src>) -> Self {
        self.loc = loc;
        self
    }
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, line_offset) = self.loc.readable();
        writeln!(
            f,
            "Parse error at line {}, byte offset {}: {}",
            line, line_offset, self.message
        )?;
        writeln!(f)?;
        for context_line in self.loc.context_lines() {
            writeln!(f, "{}", context_line)?;
        }
        Ok(())
    }
}

impl Error for ParseError<'_> {}
