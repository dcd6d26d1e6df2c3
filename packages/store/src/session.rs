//! # Persisted session
//!
//! The signed-in state survives reloads by writing two entries into a
//! [`KeyValueStore`]: the bearer token under [`TOKEN_KEY`] and the JSON user
//! record under [`USER_KEY`]. [`SessionStore`] is the only reader and writer of
//! those keys.
//!
//! Backends live in sibling modules: [`crate::MemoryStore`] for tests and
//! native builds, and `IdbStore` (IndexedDB) on the web.

use crate::models::{Session, UserInfo};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Async string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Reads and writes the [`Session`] through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted session.
    ///
    /// A user record that no longer parses (for example an unknown role) is
    /// dropped; the token is kept so the guard and role router decide what to
    /// do with it.
    pub async fn load(&self) -> Session {
        let token = self.store.get(TOKEN_KEY).await.filter(|t| !t.is_empty());
        let user = match self.store.get(USER_KEY).await {
            Some(raw) => serde_json::from_str::<UserInfo>(&raw).ok(),
            None => None,
        };
        Session { token, user }
    }

    /// Persist `session`. A session without a token clears the store.
    pub async fn save(&self, session: &Session) -> Result<(), serde_json::Error> {
        let Some(token) = session.token.as_deref() else {
            self.clear().await;
            return Ok(());
        };
        self.store.set(TOKEN_KEY, token).await;
        match &session.user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.store.set(USER_KEY, &raw).await;
            }
            None => self.store.remove(USER_KEY).await,
        }
        Ok(())
    }

    /// Forget the session.
    pub async fn clear(&self) {
        self.store.remove(TOKEN_KEY).await;
        self.store.remove(USER_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{authorize, login_redirect, Access, Page, Viewer};
    use crate::memory::MemoryStore;
    use crate::models::Role;

    fn manager() -> UserInfo {
        UserInfo {
            id: 3,
            name: "Morgan Lee".to_string(),
            email: "morgan@example.com".to_string(),
            role: Role::Manager,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_session_survives_reload() {
        let backing = MemoryStore::new();
        let sessions = SessionStore::new(backing.clone());
        assert_eq!(sessions.load().await, Session::default());

        let session = Session::new("tok-123".to_string(), manager());
        sessions.save(&session).await.unwrap();

        // A fresh store over the same backing plays the part of a page reload.
        let reloaded = SessionStore::new(backing).load().await;
        assert_eq!(reloaded, session);
        assert_eq!(Viewer::of(&reloaded), Viewer::Manager);
    }

    #[tokio::test]
    async fn test_clear_then_dashboard_redirects_to_login() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions
            .save(&Session::new("tok".to_string(), manager()))
            .await
            .unwrap();

        sessions.clear().await;

        let session = sessions.load().await;
        assert!(!session.is_authenticated());
        assert_eq!(authorize(Page::Dashboard, &session), Access::Redirect(Page::Login));
    }

    #[tokio::test]
    async fn test_corrupt_user_record_is_dropped() {
        let backing = MemoryStore::new();
        backing.set(TOKEN_KEY, "tok").await;
        backing
            .set(USER_KEY, r#"{"id":1,"name":"X","email":"x@example.com","role":"Owner"}"#)
            .await;

        let session = SessionStore::new(backing).load().await;
        assert!(session.is_authenticated());
        assert!(session.user.is_none());
        assert_eq!(Viewer::of(&session), Viewer::Unauthenticated);

        // The guard lets `/` through, the role router sends it to login, and
        // login must not send it back.
        assert_eq!(authorize(Page::Dashboard, &session), Access::Granted);
        assert_eq!(login_redirect(&session), None);
    }

    #[tokio::test]
    async fn test_token_without_user_record_stays_on_login() {
        let backing = MemoryStore::new();
        backing.set(TOKEN_KEY, "tok").await;

        let session = SessionStore::new(backing).load().await;
        assert!(session.is_authenticated());
        assert_eq!(Viewer::of(&session), Viewer::Unauthenticated);
        assert_eq!(login_redirect(&session), None);
    }

    #[tokio::test]
    async fn test_saving_signed_out_session_clears() {
        let backing = MemoryStore::new();
        let sessions = SessionStore::new(backing.clone());
        sessions
            .save(&Session::new("tok".to_string(), manager()))
            .await
            .unwrap();

        sessions.save(&Session::default()).await.unwrap();
        assert!(backing.get(TOKEN_KEY).await.is_none());
        assert!(backing.get(USER_KEY).await.is_none());
    }
}
