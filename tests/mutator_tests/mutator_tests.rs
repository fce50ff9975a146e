//! Tests for the mutator
//!
//! These tests verify:
//! - insert_new creates the file or appends before the footer
//! - insert_new registers the name in the index
//! - replace_existing rewrites only the target span
//! - replace_existing fails cleanly on unknown names

use std::fs;

use symlib::config::Config;
use symlib::container::{ContainerAccessor, LIB_FOOTER, LIB_HEADER};
use symlib::index::NameIndex;
use symlib::mutator::{insert_new, replace_existing};
use symlib::SymlibError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_accessor() -> (TempDir, ContainerAccessor) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().lib_root(temp_dir.path()).build().unwrap();
    let accessor = ContainerAccessor::new(&config);
    (temp_dir, accessor)
}

fn expected(records: &[&[u8]]) -> Vec<u8> {
    let mut out = LIB_HEADER.to_vec();
    for record in records {
        out.extend_from_slice(record);
        out.push(b'\n');
    }
    out.extend_from_slice(LIB_FOOTER);
    out
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_insert_creates_file() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();
    let payload: &[u8] = b"  (symbol \"A\" (pin_names)\n  )";

    insert_new(&accessor, &mut index, "A", payload).unwrap();

    assert_eq!(fs::read(accessor.path()).unwrap(), expected(&[payload]));
    assert!(index.contains("A"));
}

#[test]
fn test_insert_appends() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();
    let a: &[u8] = b"  (symbol \"A\" (pin_names)\n  )";
    let b: &[u8] = b"  (symbol \"B\" (pin_names)\n  )";

    insert_new(&accessor, &mut index, "A", a).unwrap();
    insert_new(&accessor, &mut index, "B", b).unwrap();

    assert_eq!(fs::read(accessor.path()).unwrap(), expected(&[a, b]));
    assert_eq!(index.sorted_names(), vec!["A", "B"]);
}

#[test]
fn test_insert_empty_payload() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();

    insert_new(&accessor, &mut index, "EMPTY", b"").unwrap();

    assert_eq!(fs::read(accessor.path()).unwrap(), expected(&[b""]));
}

#[test]
fn test_insert_into_empty_existing_file_fails() {
    let (_temp, accessor) = setup_accessor();
    fs::write(accessor.path(), b"").unwrap();
    let mut index = NameIndex::new();

    let result = insert_new(&accessor, &mut index, "A", b"(symbol \"A\" (pin))");

    assert!(matches!(result, Err(SymlibError::MissingFooter(_))));
    assert!(!index.contains("A"));
    assert!(fs::read(accessor.path()).unwrap().is_empty());
}

// =============================================================================
// Replace Tests
// =============================================================================

#[test]
fn test_replace_preserves_neighbours() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();
    let a: &[u8] = b"  (symbol \"A\" (pin_names)\n    (property \"Value\" \"1\")\n  )";
    let b: &[u8] = b"  (symbol \"B\" (pin_names)\n  )";
    let c: &[u8] = b"  (symbol \"C\" (pin_names)\n  )";
    for (name, payload) in [("A", a), ("B", b), ("C", c)] {
        insert_new(&accessor, &mut index, name, payload).unwrap();
    }

    let b_new: &[u8] = b"  (symbol \"B\" (pin_names)\n    (pin passive line (at 0 0 0) (length 2))\n  )";
    replace_existing(&accessor, "B", b_new).unwrap();

    let contents = fs::read(accessor.path()).unwrap();
    assert_eq!(contents, expected(&[a, b_new, c]));

    // Bytes before the replaced span are untouched
    let prefix_len = LIB_HEADER.len() + a.len() + 1;
    assert_eq!(&contents[..prefix_len], &expected(&[a, b, c])[..prefix_len]);
}

#[test]
fn test_replace_last_keeps_single_footer() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();
    let a: &[u8] = b"(symbol \"A\" (pin a))";
    let b: &[u8] = b"(symbol \"B\" (pin b))";
    insert_new(&accessor, &mut index, "A", a).unwrap();
    insert_new(&accessor, &mut index, "B", b).unwrap();

    let b_new: &[u8] = b"(symbol \"B\" (pin bb))";
    replace_existing(&accessor, "B", b_new).unwrap();

    assert_eq!(fs::read(accessor.path()).unwrap(), expected(&[a, b_new]));
}

#[test]
fn test_replace_unknown_name() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();
    insert_new(&accessor, &mut index, "A", b"(symbol \"A\" (pin a))").unwrap();
    let before = fs::read(accessor.path()).unwrap();

    let result = replace_existing(&accessor, "Z", b"(symbol \"Z\" (pin z))");

    assert!(matches!(result, Err(SymlibError::NotFound(_))));
    assert_eq!(fs::read(accessor.path()).unwrap(), before);
}

// =============================================================================
// File Handle Tests
// =============================================================================

#[test]
fn test_container_file_rewrite_and_sync() {
    let (_temp, accessor) = setup_accessor();
    let mut index = NameIndex::new();
    insert_new(&accessor, &mut index, "A", b"(symbol \"A\" (pin a))").unwrap();

    let mut file = accessor.open_rw().unwrap();
    assert!(file.ends_with_footer().unwrap());

    let footer_start = file.len().unwrap() - LIB_FOOTER.len() as u64;
    file.truncate_at(footer_start).unwrap();
    file.write(LIB_FOOTER).unwrap();
    file.sync().unwrap();
    drop(file);

    assert_eq!(
        fs::read(accessor.path()).unwrap(),
        expected(&[b"(symbol \"A\" (pin a))"])
    );
}
