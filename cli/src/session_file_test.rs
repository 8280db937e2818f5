use std::sync::atomic::{AtomicUsize, Ordering};

use wire::User;

use super::*;

static NEXT: AtomicUsize = AtomicUsize::new(0);

fn scratch_store() -> FileSessionStore {
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("keylo-session-test-{}-{n}", std::process::id()));
    FileSessionStore::new(dir.join("nested").join("session.json"))
}

fn session() -> Session {
    Session {
        token: "tok-1".to_owned(),
        user: User { id: "u1".to_owned(), name: "Ada".to_owned(), ..User::default() },
    }
}

#[test]
fn default_path_ends_in_keylo_dir() {
    assert!(default_path().ends_with(".keylo/session.json"));
}

#[test]
fn missing_file_loads_nothing() {
    assert_eq!(scratch_store().load(), None);
}

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let store = scratch_store();
    store.save(&session());
    assert!(store.path().exists());
    assert_eq!(store.load(), Some(session()));
    store.clear();
}

#[test]
fn clear_removes_file_and_tolerates_absence() {
    let store = scratch_store();
    store.save(&session());
    store.clear();
    assert_eq!(store.load(), None);
    store.clear();
}

#[test]
fn corrupt_or_tokenless_file_is_ignored() {
    let store = scratch_store();
    store.save(&session());
    std::fs::write(store.path(), b"{not json").unwrap();
    assert_eq!(store.load(), None);

    std::fs::write(store.path(), br#"{"token":"","user":{}}"#).unwrap();
    assert_eq!(store.load(), None);
    store.clear();
}
