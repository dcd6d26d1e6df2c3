//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): IndexedDB via `store::IdbStore`
//! - **Native**: a process-wide [`store::MemoryStore`], so the session lives as
//!   long as the app does

use store::{KeyValueStore, SessionStore};

/// Create the platform-appropriate session store.
///
/// Every call hands out a store over the same backing entries, so a session
/// written by the login view is what the guard reads back.
pub fn make_session_store() -> SessionStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::IdbStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static BACKING: OnceLock<store::MemoryStore> = OnceLock::new();
        SessionStore::new(BACKING.get_or_init(store::MemoryStore::new).clone())
    }
}
