//! Container Module
//!
//! The single library file that holds every symbol record.
//!
//! ## Responsibilities
//! - Own the library path and lazy directory creation
//! - Provide the fixed header/footer templates
//! - Recognize the opening line of a record
//! - Expose a random-access handle for in-place rewrites
//!
//! ## File Format (KiCad 6 symbol library)
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ Header                                                     │
//! │ (kicad_symbol_lib (version 20211014) (generator ...)       │
//! ├────────────────────────────────────────────────────────────┤
//! │ Record 1                                                   │
//! │   (symbol "R_0402" (pin_names ...)   ← opening line        │
//! │     ...                                                    │
//! │   )                                                        │
//! ├────────────────────────────────────────────────────────────┤
//! │ ... (one "\n"-terminated record per symbol)                │
//! ├────────────────────────────────────────────────────────────┤
//! │ Footer                                                     │
//! │ )                                                          │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod accessor;
pub mod pattern;

pub use accessor::{ContainerAccessor, ContainerFile};

/// File extension of a symbol library
pub const LIB_EXTENSION: &str = "kicad_sym";

/// Fixed header written when the library file is created
pub const LIB_HEADER: &[u8] =
    b"(kicad_symbol_lib (version 20211014) (generator kicad_symbol_editor)\n";

/// Fixed footer closing the top-level list
pub const LIB_FOOTER: &[u8] = b")\n";

/// Separator written after every record payload
pub const RECORD_SEPARATOR: &[u8] = b"\n";
