//! Integration tests for [`storage::SqliteKeyValueStore`].
//!
//! Covers set/get/overwrite/remove on an in-memory database, persistence across reopen with a file
//! database, and a JsonListRepository on top of SQLite.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storage::{JsonListRepository, KeyValueStore, Record, Repository, SqliteKeyValueStore};

/// **Test: Set, overwrite, get and remove a key.**
///
/// **Setup:** In-memory SQLite store.
/// **Action:** set → get → set again → get → remove → get.
/// **Expected:** latest value wins; remove reports true once; missing key reads as None.
#[tokio::test]
async fn test_set_get_overwrite_remove() {
    let store = SqliteKeyValueStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store");

    store.set("prospera:profile", "{\"name\":\"Ana\"}").await.unwrap();
    assert_eq!(
        store.get("prospera:profile").await.unwrap().as_deref(),
        Some("{\"name\":\"Ana\"}")
    );

    store.set("prospera:profile", "{\"name\":\"Bia\"}").await.unwrap();
    assert_eq!(
        store.get("prospera:profile").await.unwrap().as_deref(),
        Some("{\"name\":\"Bia\"}")
    );

    assert!(store.remove("prospera:profile").await.unwrap());
    assert!(!store.remove("prospera:profile").await.unwrap());
    assert_eq!(store.get("prospera:profile").await.unwrap(), None);
}

/// **Test: Values survive reopening a file database.**
///
/// **Setup:** Temp dir; store opened on `prospera.db` inside it.
/// **Action:** set a key, drop the store, open a new store on the same path.
/// **Expected:** value is read back.
#[tokio::test]
async fn test_file_database_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prospera.db");
    let path = path.to_str().expect("utf-8 path");

    {
        let store = SqliteKeyValueStore::new(path).await.expect("open");
        store.set("prospera:goals", "[]").await.unwrap();
    }

    let reopened = SqliteKeyValueStore::new(path).await.expect("reopen");
    assert_eq!(reopened.get("prospera:goals").await.unwrap().as_deref(), Some("[]"));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    id: String,
    amount: f64,
}

impl Record for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

/// **Test: JsonListRepository over SQLite keeps records in one key.**
///
/// **Setup:** In-memory SQLite store wrapped in a repository under `test:items`.
/// **Action:** save two items, delete one.
/// **Expected:** find_all returns the remaining item; the raw key holds a JSON array.
#[tokio::test]
async fn test_list_repository_on_sqlite() {
    let store: Arc<dyn KeyValueStore> =
        Arc::new(SqliteKeyValueStore::new("sqlite::memory:").await.expect("open"));
    let repo: JsonListRepository<Item> = JsonListRepository::new(store.clone(), "test:items");

    repo.save(&Item { id: "a".into(), amount: 10.0 }).await.unwrap();
    repo.save(&Item { id: "b".into(), amount: 20.5 }).await.unwrap();
    assert!(repo.delete("a").await.unwrap());

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![Item { id: "b".into(), amount: 20.5 }]);

    let raw = store.get("test:items").await.unwrap().expect("key present");
    assert!(raw.starts_with('['));
}
