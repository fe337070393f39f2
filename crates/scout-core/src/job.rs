//! Handles for submitted asynchronous research jobs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifies one submitted deep-research job.
///
/// Created on successful submission and immutable afterwards. The optional
/// `last_event_id` is an incremental-poll cursor: when present, a status
/// fetch returns only events after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobHandle {
    /// Opaque job identifier assigned by the provider.
    pub interaction_id: String,
    /// Cursor of the last event seen, for incremental polling.
    pub last_event_id: Option<String>,
}

impl JobHandle {
    /// Handle for a freshly submitted job with no events seen yet.
    #[must_use]
    pub const fn new(interaction_id: String) -> Self {
        Self {
            interaction_id,
            last_event_id: None,
        }
    }

    /// Copy of this handle with the cursor advanced to `event_id`.
    #[must_use]
    pub fn with_cursor(&self, event_id: Option<String>) -> Self {
        Self {
            interaction_id: self.interaction_id.clone(),
            last_event_id: event_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::JobHandle;

    #[test]
    fn new_handle_has_no_cursor() {
        let handle = JobHandle::new("int-42".to_string());
        assert_eq!(handle.interaction_id, "int-42");
        assert!(handle.last_event_id.is_none());
    }

    #[test]
    fn with_cursor_keeps_interaction_id() {
        let handle = JobHandle::new("int-42".to_string());
        let advanced = handle.with_cursor(Some("ev-7".to_string()));
        assert_eq!(advanced.interaction_id, "int-42");
        assert_eq!(advanced.last_event_id.as_deref(), Some("ev-7"));
    }
}
