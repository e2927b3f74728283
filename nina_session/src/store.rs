//! Session store keyed by chat identifier.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use crate::{CheckIn, DiaryEntry, FlowState, MemoryWindow, RecordLog};

/// Everything the bot remembers about one chat.
#[derive(Debug, Clone)]
pub struct Session {
    pub chat_id: i64,
    pub memory: MemoryWindow,
    pub flow: FlowState,
    pub checkins: RecordLog<CheckIn>,
    pub diaries: RecordLog<DiaryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new(chat_id: i64, memory_limit: usize) -> Self {
        let now = Utc::now();
        Self {
            chat_id,
            memory: MemoryWindow::new(memory_limit),
            flow: FlowState::Idle,
            checkins: RecordLog::new(),
            diaries: RecordLog::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Forget the conversation and any flow in progress.
    ///
    /// Check-ins and diary entries are kept for the summary.
    pub fn reset_conversation(&mut self) {
        self.memory.clear();
        self.flow = FlowState::Idle;
        self.touch();
    }

    /// Switch to `flow`, logging the transition.
    pub fn set_flow(&mut self, flow: FlowState) {
        if self.flow != flow {
            info!(
                "chat {}: flow {} -> {}",
                self.chat_id,
                self.flow.label(),
                flow.label()
            );
        }
        self.flow = flow;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// In-process session store.
///
/// Sessions are created lazily on first use and never removed. Each session
/// sits behind its own lock so turns for the same chat run one at a time
/// while different chats proceed independently.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<i64, Arc<Mutex<Session>>>>>,
    memory_limit: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(memory_limit: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            memory_limit,
        }
    }

    /// Get or create the session handle for a chat.
    pub async fn get_or_create(&self, chat_id: i64) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;
        Arc::clone(sessions.entry(chat_id).or_insert_with(|| {
            debug!("Creating session for chat {chat_id}");
            Arc::new(Mutex::new(Session::new(chat_id, self.memory_limit)))
        }))
    }

    /// Lock a chat's session for the duration of a turn.
    ///
    /// The map lock is released before waiting on the session lock, so a
    /// slow turn only blocks later turns of the same chat.
    pub async fn lock(&self, chat_id: i64) -> OwnedMutexGuard<Session> {
        self.get_or_create(chat_id).await.lock_owned().await
    }

    /// Clear memory and flow state of a chat.
    pub async fn reset(&self, chat_id: i64) {
        self.lock(chat_id).await.reset_conversation();
    }

    /// Copy of a chat's session, if it has been seen.
    pub async fn snapshot(&self, chat_id: i64) -> Option<Session> {
        let handle = {
            let sessions = self.sessions.lock().await;
            sessions.get(&chat_id).map(Arc::clone)?
        };
        let session = handle.lock().await;
        Some(session.clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    #[must_use]
    pub const fn memory_limit(&self) -> usize {
        self.memory_limit
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MEMORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiaryStep;
    use nina_core::Role;
    use std::time::Duration;

    #[tokio::test]
    async fn test_sessions_created_lazily() {
        let store = SessionStore::default();
        assert!(store.is_empty().await);
        assert!(store.snapshot(7).await.is_none());

        store.lock(7).await.memory.push(Role::User, "oi");

        let session = store.snapshot(7).await.unwrap();
        assert_eq!(session.chat_id, 7);
        assert_eq!(session.memory.len(), 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_reset_keeps_records() {
        let store = SessionStore::default();
        {
            let mut session = store.lock(1).await;
            session.memory.push(Role::User, "oi");
            session.set_flow(FlowState::Diary(DiaryStep::Weighed));
            session.checkins.append(CheckIn::clamped([1, 2, 3, 4]));
            session
                .diaries
                .append(DiaryEntry::new("a".to_string(), "b".to_string()));
        }

        store.reset(1).await;

        let session = store.snapshot(1).await.unwrap();
        assert!(session.memory.is_empty());
        assert_eq!(session.flow, FlowState::Idle);
        assert_eq!(session.checkins.len(), 1);
        assert_eq!(session.diaries.len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new(3);
        store.lock(1).await.set_flow(FlowState::AwaitingCheckin);

        let other = store.lock(2).await;
        assert!(other.flow.is_idle());
        assert_eq!(other.memory.limit(), 3);
    }

    #[tokio::test]
    async fn test_same_chat_turns_are_serialized() {
        let store = SessionStore::default();
        let guard = store.lock(5).await;

        let contender = {
            let store = store.clone();
            tokio::spawn(async move {
                let mut session = store.lock(5).await;
                session.memory.push(Role::User, "second");
            })
        };

        // Another chat is not blocked by chat 5's lock.
        store.lock(6).await.memory.push(Role::User, "other");

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
        assert_eq!(store.snapshot(5).await.unwrap().memory.len(), 1);
    }
}
