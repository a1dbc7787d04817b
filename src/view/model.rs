//! View-model
//!
//! The explicit state the selection components operate on. It is extracted
//! once from a [`ViewTree`] (or built directly, e.g. in tests) and handed to
//! [`ViewRouter`](crate::router::ViewRouter) and
//! [`SelectionList`](crate::selection::SelectionList) at construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{ViewError, ViewResult};
use super::tree::{NodePath, ViewTree};

/// Class and tag hooks used to locate components in the host tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selectors {
    #[serde(default = "default_nav_link_class")]
    pub nav_link_class: String,
    #[serde(default = "default_target_attribute")]
    pub target_attribute: String,
    #[serde(default = "default_page_class")]
    pub page_class: String,
    #[serde(default = "default_entry_class")]
    pub entry_class: String,
    #[serde(default = "default_label_tag")]
    pub label_tag: String,
    #[serde(default = "default_header_class")]
    pub header_class: String,
    #[serde(default = "default_header_tag")]
    pub header_tag: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
}

fn default_nav_link_class() -> String {
    "nav-link".to_string()
}

fn default_target_attribute() -> String {
    "data-page".to_string()
}

fn default_page_class() -> String {
    "page".to_string()
}

fn default_entry_class() -> String {
    "conversation-item".to_string()
}

fn default_label_tag() -> String {
    "strong".to_string()
}

fn default_header_class() -> String {
    "chat-header".to_string()
}

fn default_header_tag() -> String {
    "h3".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_link_class: default_nav_link_class(),
            target_attribute: default_target_attribute(),
            page_class: default_page_class(),
            entry_class: default_entry_class(),
            label_tag: default_label_tag(),
            header_class: default_header_class(),
            header_tag: default_header_tag(),
            active_class: default_active_class(),
        }
    }
}

/// A selectable navigation control targeting one panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavItem {
    pub id: String,
    /// Identifier of the panel this link shows
    pub target: String,
    pub active: bool,
    #[serde(skip)]
    pub node: Option<NodePath>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            active: false,
            node: None,
        }
    }
}

/// A content region shown while its nav item is active
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Panel {
    pub id: String,
    pub active: bool,
    #[serde(skip)]
    pub node: Option<NodePath>,
}

impl Panel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: false,
            node: None,
        }
    }
}

/// A selectable row in the conversation list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListEntry {
    pub index: usize,
    pub label: String,
    pub active: bool,
    #[serde(skip)]
    pub node: Option<NodePath>,
}

/// Label area mirroring the active list entry
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HeaderDisplay {
    pub text: String,
    #[serde(skip)]
    pub node: Option<NodePath>,
}

/// Nav links and panels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavModel {
    pub items: Vec<NavItem>,
    pub panels: Vec<Panel>,
}

impl NavModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: register a link
    pub fn link(mut self, id: impl Into<String>, target: impl Into<String>) -> Self {
        self.items.push(NavItem::new(id, target));
        self
    }

    /// Builder method: register a panel
    pub fn panel(mut self, id: impl Into<String>) -> Self {
        self.panels.push(Panel::new(id));
        self
    }

    /// Builder method: mark a link and its panel active
    pub fn active(mut self, link_id: &str) -> Self {
        let target = self
            .items
            .iter_mut()
            .find(|item| item.id == link_id)
            .map(|item| {
                item.active = true;
                item.target.clone()
            });
        if let Some(target) = target {
            for panel in self.panels.iter_mut().filter(|p| p.id == target) {
                panel.active = true;
            }
        }
        self
    }
}

/// List entries and the header that mirrors them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListModel {
    pub entries: Vec<ListEntry>,
    pub header: HeaderDisplay,
}

impl ListModel {
    /// Build from labels, nothing active and an empty header
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| ListEntry {
                index,
                label: label.into(),
                active: false,
                node: None,
            })
            .collect();
        Self {
            entries,
            header: HeaderDisplay::default(),
        }
    }
}

/// Everything the dashboard components need, extracted from the host tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub nav: NavModel,
    pub list: ListModel,
    pub selectors: Selectors,
}

impl ViewModel {
    /// Locate nav links, pages, list entries and the header in `tree`.
    ///
    /// Initial active flags are read from the tree's active class. A nav
    /// link's id is its element id, or its target when it has none. Pages
    /// without an id cannot be targeted and are skipped.
    pub fn from_tree(tree: &ViewTree, selectors: &Selectors) -> ViewResult<Self> {
        let active = selectors.active_class.as_str();

        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for path in tree.query_class(&selectors.nav_link_class) {
            let Some(el) = tree.get(&path) else { continue };
            let target = el
                .attribute(&selectors.target_attribute)
                .ok_or_else(|| ViewError::MissingTarget {
                    path: path.clone(),
                    attribute: selectors.target_attribute.clone(),
                })?
                .to_string();
            let id = el.id.clone().unwrap_or_else(|| target.clone());
            if !seen.insert(id.clone()) {
                return Err(ViewError::DuplicateLink(id));
            }
            items.push(NavItem {
                id,
                target,
                active: el.has_class(active),
                node: Some(path),
            });
        }

        let mut panels = Vec::new();
        for path in tree.query_class(&selectors.page_class) {
            let Some(el) = tree.get(&path) else { continue };
            let Some(id) = el.id.clone() else {
                tracing::debug!(%path, "Skipping page without id");
                continue;
            };
            panels.push(Panel {
                id,
                active: el.has_class(active),
                node: Some(path),
            });
        }

        let mut entries = Vec::new();
        for (index, path) in tree.query_class(&selectors.entry_class).into_iter().enumerate() {
            let Some(el) = tree.get(&path) else { continue };
            let label_path = tree
                .find_descendant_tag(&path, &selectors.label_tag)
                .ok_or_else(|| ViewError::MissingLabel(path.clone()))?;
            let label = tree
                .get(&label_path)
                .map(|l| l.text_content())
                .unwrap_or_default();
            entries.push(ListEntry {
                index,
                label,
                active: el.has_class(active),
                node: Some(path),
            });
        }

        let header_path = tree
            .select_first(&selectors.header_class, &selectors.header_tag)
            .ok_or_else(|| ViewError::MissingHeader {
                class: selectors.header_class.clone(),
                tag: selectors.header_tag.clone(),
            })?;
        let mut header = HeaderDisplay {
            text: tree
                .get(&header_path)
                .map(|h| h.text_content())
                .unwrap_or_default(),
            node: Some(header_path),
        };
        if let Some(active) = entries.iter().find(|e| e.active) {
            if active.label != header.text {
                tracing::warn!(
                    header = %header.text,
                    label = %active.label,
                    "Header does not match the active entry, using its label"
                );
                header.text = active.label.clone();
            }
        }

        tracing::debug!(
            links = items.len(),
            panels = panels.len(),
            entries = entries.len(),
            "View-model extracted"
        );

        Ok(Self {
            nav: NavModel { items, panels },
            list: ListModel { entries, header },
            selectors: selectors.clone(),
        })
    }
}
