//! Event handling capability
//!
//! Components expose `handle(event)` and the host wires it to whatever
//! event dispatch it has. Nothing here binds to a UI toolkit.

use super::messages::{EventOutcome, UiEvent};
use crate::router::ViewRouter;
use crate::selection::SelectionList;

/// A component that reacts to host UI events
pub trait EventHandler {
    fn handle(&mut self, event: &UiEvent) -> EventOutcome;
}

impl EventHandler for ViewRouter {
    fn handle(&mut self, event: &UiEvent) -> EventOutcome {
        match event {
            UiEvent::LinkClicked { id } => EventOutcome::Routed(self.select_link(id)),
            _ => EventOutcome::ignored("not a navigation event"),
        }
    }
}

impl EventHandler for SelectionList {
    fn handle(&mut self, event: &UiEvent) -> EventOutcome {
        match event {
            UiEvent::EntryClicked { index } => match self.select_entry(*index) {
                Some(entry) => EventOutcome::Selected {
                    index: entry.index,
                    label: entry.label.clone(),
                },
                None => EventOutcome::ignored(format!("no list entry at index {}", index)),
            },
            _ => EventOutcome::ignored("not a list event"),
        }
    }
}
