//! Name index implementation
//!
//! HashSet-based index filled by a streaming scan of the library file.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::container::pattern::record_name;
use crate::container::ContainerAccessor;
use crate::error::Result;
use crate::locator::LineScanner;

use super::Lookup;

/// Set of symbol names present in the library file
#[derive(Debug, Default)]
pub struct NameIndex {
    names: HashSet<String>,
    built: bool,
}

impl NameIndex {
    /// Create an empty, unbuilt index
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a scan has completed
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Scan the library file and collect every record name
    ///
    /// No-op if already built and `force` is false. A missing file yields
    /// an empty, built index. On I/O failure the index stays unbuilt.
    pub fn build(&mut self, accessor: &ContainerAccessor, force: bool) -> Result<()> {
        if self.built && !force {
            debug!("Symbol index already built, skipping scan");
            return Ok(());
        }

        let mut names = HashSet::new();

        if accessor.exists() {
            let mut scanner = LineScanner::new(accessor.open_read()?);
            while let Some((_, line)) = scanner.next_line()? {
                if let Some(name) = record_name(line) {
                    names.insert(name.into_owned());
                }
            }
        }

        info!(
            path = %accessor.path().display(),
            symbols = names.len(),
            force,
            "Built symbol index"
        );

        self.names = names;
        self.built = true;
        Ok(())
    }

    /// Whether `name` is known
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Resolve `name` against the index
    pub fn lookup(&self, name: &str) -> Lookup {
        if self.contains(name) {
            Lookup::Direct(name.to_string())
        } else {
            Lookup::Absent
        }
    }

    /// Register a freshly appended name
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Number of known names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are known
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Known names in sorted order
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}
