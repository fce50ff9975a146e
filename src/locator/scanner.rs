//! Line Scanner
//!
//! Streams a library file line by line while tracking byte offsets.

use std::io::BufRead;

use crate::error::Result;

/// Line-oriented reader that knows where every line starts
///
/// Lines are returned with their trailing `\n` (if any) so that offsets
/// add up to the exact file length.
pub struct LineScanner<R> {
    reader: R,
    /// Offset of the next unread byte
    offset: u64,
    /// Reused line buffer
    buf: Vec<u8>,
}

impl<R: BufRead> LineScanner<R> {
    /// Start scanning at offset 0
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            buf: Vec::new(),
        }
    }

    /// Read the next line
    ///
    /// Returns `(offset, line)` where `offset` is the position of the
    /// line's first byte, or `None` at end of file.
    pub fn next_line(&mut self) -> Result<Option<(u64, &[u8])>> {
        self.buf.clear();
        let start = self.offset;
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.offset += read as u64;
        Ok(Some((start, &self.buf)))
    }

    /// Offset just past the last line returned
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}
