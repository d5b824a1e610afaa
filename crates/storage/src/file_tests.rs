// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn store_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    store.set("accessCodes", "[]").await.unwrap();

    assert_eq!(store.get("accessCodes").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn store_get_missing_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("notes").await.unwrap(), None);
}

#[tokio::test]
async fn store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileStore::open(dir.path()).unwrap();
        store.set("practiceTime", "120").await.unwrap();
    }

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(
        reopened.get("practiceTime").await.unwrap().as_deref(),
        Some("120")
    );
}

#[tokio::test]
async fn store_set_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    store.set("darkMode", "false").await.unwrap();
    store.set("darkMode", "true").await.unwrap();

    assert_eq!(store.get("darkMode").await.unwrap().as_deref(), Some("true"));
    // No temp files left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn store_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    store.set("notes", "{}").await.unwrap();
    store.remove("notes").await.unwrap();
    store.remove("notes").await.unwrap();

    assert_eq!(store.get("notes").await.unwrap(), None);
}

#[tokio::test]
async fn store_remove_many() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    store.set("a", "1").await.unwrap();
    store.set("b", "2").await.unwrap();
    store.set("c", "3").await.unwrap();
    store.remove_many(&["a", "c"]).await.unwrap();

    assert_eq!(store.keys().unwrap(), vec!["b"]);
}

#[tokio::test]
async fn store_rejects_path_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nested")).unwrap();

    let result = store.set("../escape", "x").await;

    assert!(matches!(result, Err(StoreError::InvalidKey(_))));
    assert!(!dir.path().join("escape.val").exists());
}
