//! Boundary Locator
//!
//! Finds the byte span of one record by re-scanning the live file.
//!
//! ## Responsibilities
//! - Locate the opening line of a named record
//! - Find where that record ends (next opening line, or the footer)
//! - Capture everything after the record verbatim
//!
//! No offsets are cached between calls: the file is the source of truth,
//! so a stale index can never point the mutator at the wrong bytes.
//!
//! ## Record Span
//! ```text
//!   header ... │ (symbol "A" (pin ... │ (symbol "B" (pin ... │ )
//!              ▲                      ▲
//!            start                   end ──── tail ──────────────▶ EOF
//! ```

mod scanner;

use std::io::{BufRead, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::container::pattern::{opens_record, record_name};
use crate::container::{ContainerAccessor, LIB_FOOTER};
use crate::error::{Result, SymlibError};

pub use scanner::LineScanner;

/// Location of a record inside the library file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Offset of the record's opening line
    pub start: u64,
    /// Offset where the record's span ends (start of `tail`)
    pub end: u64,
    /// Bytes from `end` to end of file
    pub tail: Vec<u8>,
}

impl Boundary {
    /// Length of the span occupied by the record and its separator
    pub fn span_len(&self) -> u64 {
        self.end - self.start
    }
}

/// Locate the record `name` in the library file
///
/// Fails with `NotFound` when the file is missing or holds no such
/// record, whatever the index says.
pub fn locate(accessor: &ContainerAccessor, name: &str) -> Result<Boundary> {
    if !accessor.exists() {
        return Err(SymlibError::NotFound(name.to_string()));
    }
    let reader = accessor.open_read()?;
    locate_in(reader, name, accessor.path())
}

/// Locate the record `name` in any seekable line source
///
/// `path` is only used for error reporting.
pub fn locate_in<R: BufRead + Seek>(reader: R, name: &str, path: &Path) -> Result<Boundary> {
    let mut scanner = LineScanner::new(reader);

    // Step 1: find the opening line
    let mut start = None;
    while let Some((offset, line)) = scanner.next_line()? {
        if opens_record(line, name) {
            start = Some(offset);
            break;
        }
    }
    let start = start.ok_or_else(|| SymlibError::NotFound(name.to_string()))?;
    let after_opening = scanner.offset();
    debug!(name, start, "Found symbol opening line");

    // Step 2: find the next record, or run into end of file
    let mut next = None;
    while let Some((offset, line)) = scanner.next_line()? {
        if record_name(line).is_some() {
            next = Some(offset);
            break;
        }
    }

    let mut reader = scanner.into_inner();
    let end = match next {
        Some(offset) => offset,
        None => {
            // Last record: the tail is exactly the footer
            let len = reader.seek(SeekFrom::End(0))?;
            let footer_len = LIB_FOOTER.len() as u64;
            if len < after_opening + footer_len {
                return Err(SymlibError::MissingFooter(path.to_path_buf()));
            }
            len - footer_len
        }
    };

    // Step 3: capture the tail verbatim
    reader.seek(SeekFrom::Start(end))?;
    let mut tail = Vec::new();
    reader.read_to_end(&mut tail)?;

    if next.is_none() && tail != LIB_FOOTER {
        return Err(SymlibError::MissingFooter(path.to_path_buf()));
    }

    debug!(name, start, end, tail_len = tail.len(), "Located symbol span");
    Ok(Boundary { start, end, tail })
}
