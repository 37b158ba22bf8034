use confessional::model::{Category, Confession};
use confessional::store::backend::{StorageBackend, StorageKey};
use confessional::store::fs_backend::FsBackend;
use confessional::store::ConfessionStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read(StorageKey::AutoSave).unwrap(), None);

    backend.write(StorageKey::AutoSave, "Hello World").unwrap();
    assert_eq!(
        backend.read(StorageKey::AutoSave).unwrap(),
        Some("Hello World".to_string())
    );

    backend.remove(StorageKey::AutoSave).unwrap();
    assert_eq!(backend.read(StorageKey::AutoSave).unwrap(), None);

    // Removing twice is fine
    backend.remove(StorageKey::AutoSave).unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    for key in StorageKey::ALL {
        backend.write(key, "value").unwrap();
        assert!(backend.location(key).exists());
    }

    let entries = fs::read_dir(dir.path().join("data")).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_file_names() {
    let (dir, backend) = setup();
    backend.write(StorageKey::Confessions, "[]").unwrap();
    assert!(dir.path().join("data").join("confessions.json").exists());
    assert_eq!(
        backend.location(StorageKey::Favorites),
        dir.path().join("data").join("favorites.json")
    );
}

#[test]
fn test_snapshot_round_trip_through_disk() {
    let (dir, backend) = setup();
    let mut store = ConfessionStore::open(backend).unwrap();

    let first = Confession::new(store.next_id().unwrap(), "the first secret".to_string(), Category::Love);
    store.prepend(first).unwrap();
    let mut second = Confession::new(store.next_id().unwrap(), "the second secret".to_string(), Category::Regret);
    second.rating = 3;
    let second_id = second.id;
    store.prepend(second).unwrap();
    store
        .modify(second_id, |c| {
            c.reactions.like = 4;
            c.comments.push(confessional::model::Comment::new("ouch".to_string()));
        })
        .unwrap();
    store.toggle_favorite(second_id).unwrap();

    let expected = store.confessions().to_vec();
    drop(store);

    let reopened = ConfessionStore::open(FsBackend::new(dir.path().join("data"))).unwrap();
    assert_eq!(reopened.confessions(), expected.as_slice());
    assert!(reopened.favorites().contains(second_id));
}

#[test]
fn test_reads_snapshot_with_legacy_category_keys() {
    let (dir, backend) = setup();
    backend
        .write(
            StorageKey::Confessions,
            r#"[{"id":1,"text":"eski bir itiraf burada","category":"ask",
                "createdAt":"2025-01-01T10:00:00Z","createdDate":"2025-01-01"}]"#,
        )
        .unwrap();

    let store = ConfessionStore::open(FsBackend::new(dir.path().join("data"))).unwrap();
    assert_eq!(store.confessions()[0].category, Category::Love);
    assert_eq!(store.confessions()[0].reactions.love, 0);
}
