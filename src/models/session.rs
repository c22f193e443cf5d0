use serde::{Deserialize, Serialize};

use super::list::TodoList;

/// Per-client state: the lists plus one-shot status messages.
///
/// `error` and `success` are set by a handler and shown on exactly one
/// subsequent render, which clears them through [`SessionState::take_flash`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub lists: Vec<TodoList>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Transient messages taken out of the session for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when there is nothing worth keeping between requests.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.error.is_none() && self.success.is_none()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    /// Remove and return both transient messages.
    pub fn take_flash(&mut self) -> Flash {
        Flash {
            error: self.error.take(),
            success: self.success.take(),
        }
    }
}
