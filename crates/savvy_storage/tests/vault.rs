use savvy_storage::{ApiKeyVault, FileBackend, StorageAdapter};
use std::sync::Arc;

#[test]
fn key_survives_vault_reconstruction() {
    let storage = Arc::new(StorageAdapter::in_memory());

    let vault = ApiKeyVault::load(storage.clone());
    vault.set_key("sk-live-1234");
    drop(vault);

    let fresh = ApiKeyVault::load(storage);
    assert_eq!(fresh.key(), "sk-live-1234");
}

#[test]
fn cleared_key_stays_cleared_after_reload() {
    let storage = Arc::new(StorageAdapter::in_memory());

    let vault = ApiKeyVault::load(storage.clone());
    vault.set_key("sk-live-1234");
    vault.set_key("");

    let fresh = ApiKeyVault::load(storage);
    assert_eq!(fresh.key(), "");
    assert!(!fresh.has_key());
}

#[test]
fn key_survives_process_restart_via_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let storage = Arc::new(StorageAdapter::new(FileBackend::open(&path).unwrap()));
        ApiKeyVault::load(storage).set_key("sk-live-5678");
    }

    let storage = Arc::new(StorageAdapter::new(FileBackend::open(&path).unwrap()));
    assert_eq!(ApiKeyVault::load(storage).key(), "sk-live-5678");
}
