use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tutor_algo::{Question, QuestionGenerator, SessionContext, UserState};

use crate::store::AttemptStore;

// ==================== Session ====================

/// Per-session tutoring state. Each session carries its own generator so
/// question streams from different sessions never interleave.
pub struct Session {
    pub user_state: UserState,
    pub context: SessionContext,
    pub current_question: Option<Question>,
    pub generator: QuestionGenerator,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user_state: UserState::default(),
            context: SessionContext {
                session_active: true,
                loading: false,
            },
            current_question: None,
            generator: QuestionGenerator::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== AppState ====================

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    store: Option<Arc<AttemptStore>>,
}

impl AppState {
    pub fn new(store: Option<AttemptStore>) -> Self {
        Self {
            started_at: Instant::now(),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            store: store.map(Arc::new),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn sessions(&self) -> &RwLock<HashMap<String, Session>> {
        &self.sessions
    }

    pub fn store(&self) -> Option<Arc<AttemptStore>> {
        self.store.clone()
    }
}
