//! Unit tests for the BookmarkStore public API.
//!
//! These tests exercise bookmark and folder CRUD operations through the
//! `BookmarkStoreTrait` interface, using an in-memory SQLite database.

use wrenbrowser::database::Database;
use wrenbrowser::stores::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use wrenbrowser::types::errors::StoreError;

/// Helper: create a fresh in-memory database.
fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Adding a bookmark without a folder should make it visible in the
/// unfiled listing.
#[test]
fn test_add_and_list_unfiled_bookmarks() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let id = store
        .add_bookmark("Example", "https://example.com", None, None)
        .unwrap();

    let unfiled = store.get_bookmarks(None).unwrap();
    assert_eq!(unfiled.len(), 1);
    assert_eq!(unfiled[0].id, id);
    assert_eq!(unfiled[0].title, "Example");
    assert_eq!(unfiled[0].url, "https://example.com");
    assert!(unfiled[0].folder_id.is_none());
}

/// Listing a folder should return only the bookmarks filed in it.
#[test]
fn test_list_bookmarks_filters_by_folder() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let folder_id = store.add_folder("Work", None).unwrap();
    let in_folder = store
        .add_bookmark("Example", "https://example.com", None, Some(folder_id))
        .unwrap();
    store
        .add_bookmark("Rust", "https://rust-lang.org", None, None)
        .unwrap();

    let folder_bookmarks = store.get_bookmarks(Some(folder_id)).unwrap();
    assert_eq!(folder_bookmarks.len(), 1);
    assert_eq!(folder_bookmarks[0].id, in_folder);

    let unfiled = store.get_bookmarks(None).unwrap();
    assert_eq!(unfiled.len(), 1);
    assert_eq!(unfiled[0].url, "https://rust-lang.org");
}

/// Removing a bookmark by id should leave the others untouched.
#[test]
fn test_remove_bookmark() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let first = store
        .add_bookmark("Example", "https://example.com", None, None)
        .unwrap();
    let second = store
        .add_bookmark("Rust", "https://rust-lang.org", None, None)
        .unwrap();

    store.remove_bookmark(first).unwrap();

    let remaining = store.get_bookmarks(None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);
}

/// Removing an id that was never assigned should succeed without effect.
#[test]
fn test_remove_missing_bookmark_is_noop() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    store
        .add_bookmark("Example", "https://example.com", None, None)
        .unwrap();

    store.remove_bookmark(9999).unwrap();
    assert_eq!(store.get_bookmarks(None).unwrap().len(), 1);
}

/// is_bookmarked should track the full add/remove lifecycle of a url.
#[test]
fn test_is_bookmarked_lifecycle() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    assert!(!store.is_bookmarked("https://example.com").unwrap());

    let id = store
        .add_bookmark("Example", "https://example.com", None, None)
        .unwrap();
    assert!(store.is_bookmarked("https://example.com").unwrap());

    store.remove_bookmark(id).unwrap();
    assert!(!store.is_bookmarked("https://example.com").unwrap());
}

/// is_bookmarked compares the stored url exactly, not by prefix.
#[test]
fn test_is_bookmarked_matches_exact_url_only() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    store
        .add_bookmark("Example", "https://example.com", None, None)
        .unwrap();

    assert!(store.is_bookmarked("https://example.com").unwrap());
    assert!(!store.is_bookmarked("https://example.com/page").unwrap());
    assert!(!store.is_bookmarked("https://example.co").unwrap());
}

/// The store does not deduplicate: bookmarking the same url twice keeps
/// both rows with distinct ids.
#[test]
fn test_duplicate_urls_accumulate() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let first = store
        .add_bookmark("Example", "https://example.com", None, None)
        .unwrap();
    let second = store
        .add_bookmark("Example again", "https://example.com", None, None)
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(store.get_bookmarks(None).unwrap().len(), 2);
}

/// Favicon bytes should be stored and returned unchanged.
#[test]
fn test_favicon_bytes_roundtrip() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let icon: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
    store
        .add_bookmark("Example", "https://example.com", Some(icon), None)
        .unwrap();
    store
        .add_bookmark("Plain", "https://plain.example", None, None)
        .unwrap();

    let bookmarks = store.get_bookmarks(None).unwrap();
    assert_eq!(bookmarks[0].favicon.as_deref(), Some(icon));
    assert!(bookmarks[1].favicon.is_none());
}

/// Folders should list by parent: top-level for None, children for Some.
#[test]
fn test_create_folder_and_list_by_parent() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let work = store.add_folder("Work", None).unwrap();
    let play = store.add_folder("Play", None).unwrap();
    let child = store.add_folder("Projects", Some(work)).unwrap();

    let top_level = store.get_folders(None).unwrap();
    assert_eq!(top_level.len(), 2);
    assert_eq!(top_level[0].id, work);
    assert_eq!(top_level[1].id, play);

    let children = store.get_folders(Some(work)).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, child);
    assert_eq!(children[0].name, "Projects");
    assert_eq!(children[0].parent_id, Some(work));

    assert!(store.get_folders(Some(play)).unwrap().is_empty());
}

/// Deleting a folder should delete the bookmarks filed in it.
#[test]
fn test_remove_folder_deletes_contained_bookmarks() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let folder_id = store.add_folder("Temp", None).unwrap();
    store
        .add_bookmark("Example", "https://example.com", None, Some(folder_id))
        .unwrap();
    store
        .add_bookmark("Kept", "https://kept.example", None, None)
        .unwrap();

    store.remove_folder(folder_id).unwrap();

    assert!(store.get_folders(None).unwrap().is_empty());
    assert!(store.get_bookmarks(Some(folder_id)).unwrap().is_empty());
    assert!(!store.is_bookmarked("https://example.com").unwrap());

    // Unfiled bookmarks are untouched
    assert_eq!(store.get_bookmarks(None).unwrap().len(), 1);
}

/// Deleting a folder should take its whole subtree with it, leaving
/// unrelated folders and bookmarks alone.
#[test]
fn test_remove_folder_cascades_to_subfolders() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let root = store.add_folder("Root", None).unwrap();
    let child = store.add_folder("Child", Some(root)).unwrap();
    let grandchild = store.add_folder("Grandchild", Some(child)).unwrap();
    let other = store.add_folder("Other", None).unwrap();

    store
        .add_bookmark("In root", "https://a.example", None, Some(root))
        .unwrap();
    store
        .add_bookmark("In child", "https://b.example", None, Some(child))
        .unwrap();
    store
        .add_bookmark("In grandchild", "https://c.example", None, Some(grandchild))
        .unwrap();
    store
        .add_bookmark("In other", "https://d.example", None, Some(other))
        .unwrap();

    store.remove_folder(root).unwrap();

    let top_level = store.get_folders(None).unwrap();
    assert_eq!(top_level.len(), 1);
    assert_eq!(top_level[0].id, other);
    assert!(store.get_folders(Some(root)).unwrap().is_empty());

    assert!(!store.is_bookmarked("https://a.example").unwrap());
    assert!(!store.is_bookmarked("https://b.example").unwrap());
    assert!(!store.is_bookmarked("https://c.example").unwrap());
    assert!(store.is_bookmarked("https://d.example").unwrap());
}

/// Deleting a folder id that does not exist should succeed without effect.
#[test]
fn test_remove_missing_folder_is_noop() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let folder_id = store.add_folder("Keep", None).unwrap();
    store.remove_folder(folder_id + 100).unwrap();

    assert_eq!(store.get_folders(None).unwrap().len(), 1);
}

/// Filing a bookmark into a folder that does not exist should be rejected
/// by the foreign key.
#[test]
fn test_add_bookmark_with_unknown_folder_is_constraint_error() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    let result = store.add_bookmark("Bad", "https://bad.example", None, Some(999));
    assert!(
        matches!(result, Err(StoreError::Constraint(_))),
        "expected a constraint error, got {:?}",
        result
    );
}

/// Listings come back in insertion order (ascending id).
#[test]
fn test_bookmarks_keep_insertion_order() {
    let db = setup();
    let mut store = BookmarkStore::new(db.connection());

    for n in 1..=4 {
        store
            .add_bookmark(&format!("Page {}", n), &format!("https://example.com/{}", n), None, None)
            .unwrap();
    }

    let bookmarks = store.get_bookmarks(None).unwrap();
    let titles: Vec<&str> = bookmarks.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Page 1", "Page 2", "Page 3", "Page 4"]);
}
