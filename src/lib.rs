//! # symlib
//!
//! A record store for KiCad symbol library (`.kicad_sym`) files:
//! - Existence checks through a lazily built name index
//! - Append of new symbols in front of the footer
//! - In-place replace of one symbol, leaving every other byte untouched
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SymbolLibrary                            │
//! │               (exists / add / update)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────┐
//!          │            │                 │
//!          ▼            ▼                 ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │  NameIndex  │ │   Mutator   │ │   Locator   │
//!   │  (HashSet)  │ │(append/repl)│ │ (line scan) │
//!   └──────┬──────┘ └──────┬──────┘ └──────┬──────┘
//!          │               │               │
//!          ▼               ▼               ▼
//!   ┌─────────────────────────────────────────────┐
//!   │                  Container                   │
//!   │        (header │ records │ footer)           │
//!   └─────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod container;
pub mod index;
pub mod locator;
pub mod mutator;
pub mod library;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SymlibError, Result};
pub use config::Config;
pub use index::Lookup;
pub use library::SymbolLibrary;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of symlib
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
