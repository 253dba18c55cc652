//! Round-trip tests for the directory copier.
//!
//! The copier promises byte-for-byte mirrors for arbitrary nesting depth and
//! arbitrary binary content, and an early failure when the source cannot be
//! opened.

use cforge::copy::copy_dir;
use std::fs;
use std::path::Path;

fn write_tree(root: &Path) {
    fs::create_dir_all(root.join("nested").join("deeper")).unwrap();
    fs::write(root.join("plain.txt"), "hello\n").unwrap();
    fs::write(root.join("empty.bin"), []).unwrap();
    fs::write(
        root.join("nested").join("binary.bin"),
        [0u8, 255, 10, 13, 0, 128, 7],
    )
    .unwrap();
    fs::write(root.join("nested").join("deeper").join("leaf.c"), "int x;\n").unwrap();
    fs::create_dir(root.join("hollow")).unwrap();
}

fn assert_identical(src: &Path, dest: &Path, rel: &Path) {
    let a = fs::read(src.join(rel)).unwrap();
    let b = fs::read(dest.join(rel)).unwrap();
    assert_eq!(a, b, "contents differ for {}", rel.display());
}

#[test]
fn test_copy_round_trip_preserves_bytes() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let dest_root = dest.path().join("mirror");
    write_tree(src.path());

    copy_dir(src.path(), &dest_root).unwrap();

    for rel in [
        "plain.txt",
        "empty.bin",
        "nested/binary.bin",
        "nested/deeper/leaf.c",
    ] {
        assert_identical(src.path(), &dest_root, Path::new(rel));
    }
    assert!(dest_root.join("hollow").is_dir());
}

#[test]
fn test_copy_into_existing_destination() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    write_tree(src.path());

    // Destination already exists and holds unrelated data.
    fs::write(dest.path().join("keep.txt"), "keep me").unwrap();

    copy_dir(src.path(), dest.path()).unwrap();

    assert_eq!(fs::read(dest.path().join("keep.txt")).unwrap(), b"keep me");
    assert_identical(src.path(), dest.path(), Path::new("plain.txt"));
}

#[test]
fn test_copy_missing_source_fails_without_creating_destination() {
    let workspace = tempfile::tempdir().unwrap();
    let src = workspace.path().join("does_not_exist");
    let dest = workspace.path().join("never_created");

    let result = copy_dir(&src, &dest);

    assert!(result.is_err());
    assert!(!dest.exists(), "destination must not be created on failure");
}
