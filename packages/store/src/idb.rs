//! # IndexedDB key-value store: browser-side session persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`] used on the **web platform**. It keeps
//! the session entries in the browser's IndexedDB via the [`rexie`] crate, so a
//! signed-in user stays signed in across page reloads.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"projecthub"` (version 1) with one object
//! store, `"session"`, mapping a string key to a string value.
//!
//! ## Connection management
//!
//! `IdbStore` opens a fresh [`Rexie`] connection on every operation. `Rexie`
//! does not implement `Clone`, and the browser caches IndexedDB connections.
//!
//! ## Error handling
//!
//! Failures degrade to "no entry" on reads and are dropped on writes, so an
//! unavailable IndexedDB behaves like a signed-out browser.

use crate::session::KeyValueStore;
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DEFAULT_DB_NAME: &str = "projecthub";
const DB_VERSION: u32 = 1;
const SESSION_STORE: &str = "session";

/// IndexedDB-backed KeyValueStore for the web platform.
#[derive(Clone)]
pub struct IdbStore {
    db_name: String,
}

impl Default for IdbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdbStore {
    pub fn new() -> Self {
        Self {
            db_name: DEFAULT_DB_NAME.to_string(),
        }
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(&self.db_name)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(SESSION_STORE))
            .build()
            .await
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Option<String> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[SESSION_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(SESSION_STORE).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()??;
        serde_wasm_bindgen::from_value(value).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[SESSION_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(SESSION_STORE) else {
            return;
        };

        let key = JsValue::from_str(key);
        let value = JsValue::from_str(value);
        let _ = store.put(&value, Some(&key)).await;
        let _ = tx.done().await;
    }

    async fn remove(&self, key: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[SESSION_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(SESSION_STORE) else {
            return;
        };

        let _ = store.delete(JsValue::from_str(key)).await;
        let _ = tx.done().await;
    }
}
