// SPDX-License-Identifier: MPL-2.0
//! Activity event types recorded by the presenter.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// What the presenter did or declined to do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    /// A page was handed to the surface at construction.
    Shown { index: usize },

    /// Constructed over an empty collection; nothing is shown.
    Inert,

    /// The asset under the cursor was selected.
    Selected {
        index: usize,
        ordinal: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        evicted: Option<usize>,
    },

    /// The asset under the cursor was deselected.
    Deselected { index: usize },

    /// The collection refused a selection change.
    SelectionRejected { index: usize, reason: String },

    /// A completed transition moved the cursor.
    Moved { index: usize },

    /// The user abandoned a transition mid-gesture.
    TransitionCancelled,

    /// Discarded pages had their in-flight requests cancelled.
    RequestsCancelled { pages: usize, requests: usize },

    /// A programmatic move was not started.
    NavigationRefused { reason: String },

    /// A lookup failed and the operation became a no-op.
    Degraded { reason: String },

    /// The host asked the presenter to close.
    Closed,
}

/// A timestamped activity record.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    /// When the event was recorded (monotonic clock).
    pub timestamp: Instant,
    /// What happened.
    pub kind: ActivityKind,
}

impl ActivityEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_uses_current_instant() {
        let before = Instant::now();
        let event = ActivityEvent::new(ActivityKind::Closed);
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Instant::now());
    }

    #[test]
    fn kind_serializes_with_type_tag() {
        let json = serde_json::to_string(&ActivityKind::Moved { index: 4 })
            .expect("serialization should succeed");
        assert_eq!(json, r#"{"type":"moved","index":4}"#);
    }

    #[test]
    fn selected_omits_missing_eviction() {
        let json = serde_json::to_string(&ActivityKind::Selected {
            index: 1,
            ordinal: 2,
            evicted: None,
        })
        .expect("serialization should succeed");
        assert!(!json.contains("evicted"));
    }

    #[test]
    fn kind_deserializes_from_json() {
        let json = r#"{"type":"requests_cancelled","pages":2,"requests":5}"#;
        let kind: ActivityKind = serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            ActivityKind::RequestsCancelled {
                pages: 2,
                requests: 5
            }
        );
    }
}
