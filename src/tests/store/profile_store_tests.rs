use super::*;

use crate::model::ApiConfig;

fn open_store(dir: &tempfile::TempDir) -> ProfileStore {
    ProfileStore::open(dir.path().join("profile")).unwrap()
}

#[test]
fn fresh_profile_has_no_config_or_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    assert!(store.read_config().unwrap().api.is_none());
    assert_eq!(store.read_token().unwrap(), None);
}

#[test]
fn config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let mut cfg = store.read_config().unwrap();
    cfg.api = Some(ApiConfig {
        base_url: "https://api.rline.example".to_string(),
    });
    store.write_config(&cfg).unwrap();

    let cfg = store.read_config().unwrap();
    assert_eq!(cfg.api.unwrap().base_url, "https://api.rline.example");
}

#[test]
fn token_is_set_and_cleared_under_the_rline_token_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.set_token("T1").unwrap();
    assert_eq!(store.read_token().unwrap().as_deref(), Some("T1"));

    // The on-disk key is part of the contract.
    let raw = std::fs::read(store.root().join("state.json")).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(v.get("rline_token").and_then(|x| x.as_str()), Some("T1"));

    store.clear_token().unwrap();
    assert_eq!(store.read_token().unwrap(), None);
}

#[test]
fn set_token_replaces_the_previous_one() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store.set_token("T1").unwrap();
    store.set_token("T2").unwrap();
    assert_eq!(store.read_token().unwrap().as_deref(), Some("T2"));
}
