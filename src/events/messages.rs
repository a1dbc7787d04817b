//! UI Event Types
//!
//! The events a host forwards from its own dispatch, and what handling them
//! did. Both are JSON with a `type` tag so scripts can be replayed.

use serde::{Deserialize, Serialize};

use crate::router::RouteOutcome;

/// Events sent from the host view to the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A nav link was clicked
    LinkClicked {
        /// Nav item identifier
        id: String,
    },
    /// A conversation list item was clicked
    EntryClicked {
        /// Position of the entry in the list
        index: usize,
    },
}

impl UiEvent {
    pub fn link(id: impl Into<String>) -> Self {
        UiEvent::LinkClicked { id: id.into() }
    }

    pub fn entry(index: usize) -> Self {
        UiEvent::EntryClicked { index }
    }
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventOutcome {
    /// The router handled a link click
    Routed(RouteOutcome),
    /// A list entry became active
    Selected {
        index: usize,
        label: String,
    },
    /// The receiving component does not own this event, or the event named
    /// nothing it knows
    Ignored {
        reason: String,
    },
}

impl EventOutcome {
    pub fn ignored(reason: impl Into<String>) -> Self {
        EventOutcome::Ignored {
            reason: reason.into(),
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventOutcome::Ignored { .. })
    }
}
