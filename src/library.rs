//! Library Module
//!
//! The public entry point that ties the container, index and mutator
//! together.
//!
//! ## Responsibilities
//! - Create the library directory on open
//! - Build the name index lazily on first use
//! - Enforce the add/update policy (AlreadyExists / NotFound)
//! - Keep the index in step with appends

use std::path::Path;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::container::pattern::record_name;
use crate::container::ContainerAccessor;
use crate::error::{Result, SymlibError};
use crate::index::{Lookup, NameIndex};
use crate::mutator;

/// A symbol library backed by a single `.kicad_sym` file
///
/// ## Concurrency Model
///
/// Single owner, blocking I/O. All mutating calls take `&mut self`; there
/// is no file locking, so two libraries (or processes) on the same path
/// will corrupt each other's writes.
pub struct SymbolLibrary {
    /// Library configuration
    config: Config,

    /// Path and file-handle access
    accessor: ContainerAccessor,

    /// Known symbol names (built on first use)
    index: NameIndex,
}

impl SymbolLibrary {
    /// Open a library with the given config
    ///
    /// Creates the library directory if needed. The file itself is only
    /// created by the first `add`.
    pub fn open(config: Config) -> Result<Self> {
        let accessor = ContainerAccessor::new(&config);

        if accessor.ensure_directory()? {
            warn!(
                root = %config.lib_root().display(),
                "Library directory did not exist, created it"
            );
        }

        Ok(Self {
            config,
            accessor,
            index: NameIndex::new(),
        })
    }

    /// Open with a directory (convenience method)
    ///
    /// Uses default config with the specified library root
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().lib_root(path).build()?;
        Self::open(config)
    }

    /// Resolve a symbol name
    pub fn lookup(&mut self, name: &str) -> Result<Lookup> {
        self.index.build(&self.accessor, false)?;
        Ok(self.index.lookup(name))
    }

    /// Check whether a symbol exists
    pub fn exists(&mut self, name: &str) -> Result<bool> {
        Ok(self.lookup(name)?.is_present())
    }

    /// Add a symbol, or replace it when `update` is set
    ///
    /// - present, `update == false` → `AlreadyExists`, file untouched
    /// - present, `update == true` → in-place replace
    /// - absent → append before the footer
    pub fn add(&mut self, name: &str, payload: &[u8], update: bool) -> Result<()> {
        info!(name, update, "Adding symbol");

        match self.lookup(name)? {
            Lookup::Direct(_) if !update => {
                warn!(name, "Symbol already in library");
                Err(SymlibError::AlreadyExists(name.to_string()))
            }
            Lookup::Direct(_) => {
                self.check_payload(name, payload)?;
                mutator::replace_existing(&self.accessor, name, payload).inspect_err(|e| {
                    if matches!(e, SymlibError::NotFound(_)) {
                        error!(name, "Unable to update symbol, not found in library file");
                    }
                })?;
                info!(name, "Symbol updated");
                Ok(())
            }
            Lookup::Alias(target) => Err(SymlibError::AlreadyExists(format!(
                "{} (alias of {})",
                name, target
            ))),
            Lookup::Absent => {
                self.check_payload(name, payload)?;
                mutator::insert_new(&self.accessor, &mut self.index, name, payload)?;
                info!(name, "Symbol added");
                Ok(())
            }
        }
    }

    /// Replace an existing symbol (same as `add(name, payload, true)`)
    pub fn update(&mut self, name: &str, payload: &[u8]) -> Result<()> {
        self.add(name, payload, true)
    }

    /// Rebuild the name index
    ///
    /// Without `force` this only builds an index that was never built.
    /// Use `force` after the file was modified by other means.
    pub fn rebuild_index(&mut self, force: bool) -> Result<()> {
        self.index.build(&self.accessor, force)
    }

    /// All known symbol names, sorted
    pub fn names(&mut self) -> Result<Vec<String>> {
        self.index.build(&self.accessor, false)?;
        Ok(self.index.sorted_names())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the library file
    pub fn path(&self) -> &Path {
        self.accessor.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the name index has been built
    pub fn is_index_built(&self) -> bool {
        self.index.is_built()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Reject payloads that do not open exactly the record `name`
    ///
    /// The first line must be the opening line for `name`, and no later
    /// line may open another record. Otherwise later scans would not find
    /// `name`, or would split the payload into extra records.
    fn check_payload(&self, name: &str, payload: &[u8]) -> Result<()> {
        if !self.config.check_payloads {
            return Ok(());
        }

        let mut lines = payload.split(|&b| b == b'\n');

        let first = lines.next().unwrap_or_default();
        match record_name(first) {
            Some(found) if found == name => {}
            Some(found) => {
                return Err(SymlibError::InvalidPayload(format!(
                    "first line opens symbol \"{}\", expected \"{}\"",
                    found, name
                )));
            }
            None => {
                return Err(SymlibError::InvalidPayload(format!(
                    "first line does not open symbol \"{}\"",
                    name
                )));
            }
        }

        for (line_no, line) in lines.enumerate() {
            if let Some(found) = record_name(line) {
                return Err(SymlibError::InvalidPayload(format!(
                    "line {} opens another symbol \"{}\"",
                    line_no + 2,
                    found
                )));
            }
        }
        Ok(())
    }
}
