//! Conversation identity.

use serde::{Deserialize, Serialize};

/// Chat (private, group or channel) an event came from and its response goes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
