use serde::{Deserialize, Serialize};

/// Outcome of a pilot command such as a gear or drag-chute toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Whether the command changed anything.
    pub applied: bool,
    /// Human-readable explanation for UI feedback.
    pub reason: String,
}

impl CommandResult {
    pub fn applied(reason: impl Into<String>) -> Self {
        Self {
            applied: true,
            reason: reason.into(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            applied: false,
            reason: reason.into(),
        }
    }
}
