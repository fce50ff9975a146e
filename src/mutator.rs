//! Mutator
//!
//! In-place writes to the library file.
//!
//! ## Operations
//! - Append: drop the footer, write `payload || "\n" || footer`
//! - Replace: truncate at the record start, write `payload || "\n" || tail`
//!
//! Bytes before the affected span and the preserved tail are reproduced
//! exactly. A failure between truncate and the final write leaves the file
//! without its tail; there is no journal.

use tracing::{debug, info};

use crate::container::{ContainerAccessor, LIB_FOOTER, RECORD_SEPARATOR};
use crate::error::{Result, SymlibError};
use crate::index::NameIndex;
use crate::locator;

/// Append a new record in front of the footer
///
/// Creates the file (header, record, footer) if it does not exist yet.
/// The caller must already have checked that `name` is absent.
pub fn insert_new(
    accessor: &ContainerAccessor,
    index: &mut NameIndex,
    name: &str,
    payload: &[u8],
) -> Result<()> {
    if !accessor.exists() {
        accessor.create_with(payload)?;
        info!(
            path = %accessor.path().display(),
            name,
            "Created symbol library"
        );
    } else {
        let mut file = accessor.open_rw()?;
        if !file.ends_with_footer()? {
            return Err(SymlibError::MissingFooter(accessor.path().to_path_buf()));
        }

        let footer_start = file.len()? - LIB_FOOTER.len() as u64;
        debug!(name, offset = footer_start, "Appending symbol before footer");

        file.truncate_at(footer_start)?;
        file.write(payload)?;
        file.write(RECORD_SEPARATOR)?;
        file.write(LIB_FOOTER)?;
        file.sync()?;
    }

    index.insert(name);
    Ok(())
}

/// Replace the content of an existing record
///
/// The record is located against live file content, so a stale index
/// still yields `NotFound` rather than a bad write.
pub fn replace_existing(accessor: &ContainerAccessor, name: &str, payload: &[u8]) -> Result<()> {
    let boundary = locator::locate(accessor, name)?;

    let mut file = accessor.open_rw()?;
    file.truncate_at(boundary.start)?;
    file.write(payload)?;
    file.write(RECORD_SEPARATOR)?;
    file.write(&boundary.tail)?;
    file.sync()?;

    debug!(
        name,
        start = boundary.start,
        old_len = boundary.span_len(),
        new_len = payload.len() + RECORD_SEPARATOR.len(),
        "Rewrote symbol span"
    );
    Ok(())
}
