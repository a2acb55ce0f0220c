//! Concurrent chat-id → session map.
//!
//! Sessions are created lazily on first contact and never evicted;
//! unbounded growth is an accepted limitation. Each session sits behind
//! its own mutex, so holding the handle's lock across the engine call
//! serializes same-chat turns explicitly instead of relying on the
//! transport delivering per-chat messages in order.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use lingo_core::Session;

/// Shared handle to one chat's session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Thread-safe store of all live sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, SessionHandle>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session for a chat, inserting a fresh one on first
    /// contact. At most one session is ever constructed per chat id;
    /// concurrent callers observe the same handle.
    pub async fn get_or_create(&self, chat_id: i64) -> SessionHandle {
        let mut sessions = self.sessions.lock().await;
        Arc::clone(sessions.entry(chat_id).or_insert_with(|| {
            debug!(chat_id, "creating session");
            Arc::new(Mutex::new(Session::new(chat_id)))
        }))
    }

    /// Reset a chat's session to its initial state, if one exists.
    pub async fn reset(&self, chat_id: i64) {
        let handle = {
            let sessions = self.sessions.lock().await;
            sessions.get(&chat_id).map(Arc::clone)
        };

        if let Some(handle) = handle {
            handle.lock().await.reset();
            debug!(chat_id, "session reset");
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
