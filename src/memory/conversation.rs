//! Bounded rolling window of recent turns plus session-level side state.
//!
//! The caller is authoritative for history: `record_history` replaces the
//! window with the most recent N turns it was handed, it never appends. The
//! memory does accumulate two things of its own across the session — the set
//! of topics seen and the highest turn count observed — but only the engine
//! pipeline feeds those; loading history alone has no side effects on them.

use chrono::{DateTime, Utc};

use crate::topics::Topic;
use crate::types::{Role, Turn};

/// How many accumulated topics a summary view renders, even though the
/// backing list can grow without bound for the session's lifetime.
pub const RECENT_TOPIC_VIEW: usize = 5;

/// Per-session conversation memory.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    /// Most-recent-N turns, oldest first. Value semantics: turns are copied
    /// in, never aliased externally.
    window: Vec<Turn>,
    /// Window capacity N.
    capacity: usize,
    /// Topics seen this session, first-seen order, deduplicated. Never
    /// shrinks within a session.
    accumulated_topics: Vec<Topic>,
    /// When this memory was created.
    session_start: DateTime<Utc>,
    /// Highest history length observed. Monotonically non-decreasing.
    turn_count: usize,
}

impl ConversationMemory {
    /// Create an empty memory with the given window capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            window: Vec::new(),
            capacity,
            accumulated_topics: Vec::new(),
            session_start: Utc::now(),
            turn_count: 0,
        }
    }

    /// Replace the window with the last N entries of `full_history`.
    ///
    /// An empty history yields an empty window. Topic accumulation and the
    /// turn counter are untouched.
    pub fn record_history(&mut self, full_history: &[Turn]) {
        let skip = full_history.len().saturating_sub(self.capacity);
        self.window = full_history[skip..].to_vec();
        log::debug!(
            "conversation window: {} of {} supplied turns retained",
            self.window.len(),
            full_history.len()
        );
    }

    /// Union topics into the accumulated set, preserving first-seen order.
    pub fn note_topics(&mut self, topics: &[Topic]) {
        for topic in topics {
            if !self.accumulated_topics.contains(topic) {
                self.accumulated_topics.push(*topic);
            }
        }
    }

    /// Raise the observed turn count. Lower observations are ignored, so the
    /// counter never decreases.
    pub fn observe_turn_count(&mut self, count: usize) {
        self.turn_count = self.turn_count.max(count);
    }

    /// The last `k` turns in chronological order. Each call yields a fresh
    /// iterator over the window.
    pub fn most_recent(&self, k: usize) -> impl Iterator<Item = &Turn> + '_ {
        let skip = self.window.len().saturating_sub(k);
        self.window[skip..].iter()
    }

    /// The full window, oldest first.
    pub fn window(&self) -> &[Turn] {
        &self.window
    }

    /// Every topic seen this session, first-seen order.
    pub fn accumulated_topics(&self) -> &[Topic] {
        &self.accumulated_topics
    }

    /// The most recently seen topics, capped for rendering into summaries.
    pub fn recent_topics(&self) -> &[Topic] {
        let skip = self
            .accumulated_topics
            .len()
            .saturating_sub(RECENT_TOPIC_VIEW);
        &self.accumulated_topics[skip..]
    }

    /// Number of user-authored turns currently in the window.
    pub fn user_turns_in_window(&self) -> usize {
        self.window.iter().filter(|t| t.role == Role::User).count()
    }

    /// Highest history length observed this session.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// When this memory was created.
    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    /// Number of turns currently held.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
