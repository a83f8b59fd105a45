//! Session analytics snapshot.

use serde::{Deserialize, Serialize};

use crate::persona::PersonaKey;
use crate::topics::Topic;

/// A point-in-time report of the current session.
///
/// Only catalogs with session reporting enabled produce one; see
/// `ConversationEngine::session_analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalytics {
    /// Whole minutes elapsed since the session started.
    pub duration_minutes: i64,
    /// Number of `generate_response` calls served this session.
    pub response_count: u64,
    /// Every topic observed this session, in first-seen order.
    pub topics: Vec<Topic>,
    /// The personality currently answering.
    pub active_personality: PersonaKey,
}
