use std::collections::HashMap;

use tokio::sync::RwLock;

use groqchat_types::Turn;

/// In-memory mapping from session id to its ordered chat history.
///
/// Histories only grow for the lifetime of the process; nothing is pruned or
/// expired. The lock guards individual map operations, not whole chat
/// round-trips: two concurrent requests for the same session id may
/// interleave their appends in either order.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Vec<Turn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a session history, creating an empty one if the id is new
    pub async fn get_or_create(&self, session_id: &str) -> Vec<Turn> {
        let mut sessions = self.sessions.write().await;
        sessions.entry(session_id.to_string()).or_default().clone()
    }

    /// Append a turn, creating the session if needed, and return the
    /// post-append history snapshot
    pub async fn append(&self, session_id: &str, turn: Turn) -> Vec<Turn> {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(turn);
        history.clone()
    }

    /// Snapshot of the stored history, empty if the session id is unknown
    pub async fn history(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of sessions currently held
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
