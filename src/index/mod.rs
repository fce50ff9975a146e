//! Index Module
//!
//! In-memory set of known symbol names.
//!
//! ## Responsibilities
//! - One linear scan of the library file to collect names
//! - Membership checks for `exists`/`add`
//! - Explicit, idempotent rebuild (forced rebuild after out-of-band edits)
//!
//! The index carries no offsets and is never invalidated on its own.

mod table;

pub use table::NameIndex;

/// Result of looking a name up in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// No record with this name
    Absent,

    /// A record stored under exactly this name
    Direct(String),

    /// The name is an alias of another record (reserved, never produced)
    Alias(String),
}

impl Lookup {
    /// Whether the name resolves to anything
    pub fn is_present(&self) -> bool {
        !matches!(self, Lookup::Absent)
    }
}
