//! Selection List
//!
//! Single-selection list switcher for the conversation mock-up. Selecting
//! an entry makes it the only active one and copies its label into the
//! header display. No conversation content is loaded.

use crate::view::{HeaderDisplay, ListEntry, ListModel, ViewTree};

/// Conversation list with its mirrored header
#[derive(Debug, Clone)]
pub struct SelectionList {
    entries: Vec<ListEntry>,
    header: HeaderDisplay,
}

impl SelectionList {
    pub fn new(model: ListModel) -> Self {
        Self {
            entries: model.entries,
            header: model.header,
        }
    }

    /// Select the entry at `index`.
    ///
    /// Returns the newly active entry, or `None` when `index` is not a
    /// registered entry, in which case nothing changes.
    pub fn select_entry(&mut self, index: usize) -> Option<&ListEntry> {
        if index >= self.entries.len() {
            tracing::warn!(index, entries = self.entries.len(), "Ignoring unknown list entry");
            return None;
        }

        for entry in &mut self.entries {
            entry.active = false;
        }
        let entry = &mut self.entries[index];
        entry.active = true;
        self.header.text = entry.label.clone();

        tracing::debug!(index, label = %entry.label, "List entry selected");
        Some(entry)
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&ListEntry> {
        self.entries.iter().find(|entry| entry.active)
    }

    pub fn header(&self) -> &HeaderDisplay {
        &self.header
    }

    /// Position of the first entry labelled `label`
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }

    /// Mirror active flags and the header text onto the host tree
    pub fn apply_to(&self, tree: &mut ViewTree, active_class: &str) {
        for entry in &self.entries {
            if let Some(path) = &entry.node {
                if !tree.set_class(path, active_class, entry.active) {
                    tracing::warn!(%path, "List entry no longer present in view tree");
                }
            }
        }
        if let Some(path) = &self.header.node {
            if !tree.set_text(path, &self.header.text) {
                tracing::warn!(%path, "Header display no longer present in view tree");
            }
        }
    }
}
