//! Dashboard View Layer
//!
//! - **tree**: the host document (elements, classes, attributes, text)
//! - **model**: the view-model extracted from the tree
//! - **layout**: the built-in vaccination dashboard layout
//! - **error**: error types
//!
//! ```text
//! ViewTree ──from_tree──▶ ViewModel ──▶ ViewRouter / SelectionList
//!    ▲                                          │
//!    └──────────────── apply_to ────────────────┘
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod tree;

pub use error::{ViewError, ViewResult};
pub use layout::default_layout;
pub use model::{HeaderDisplay, ListEntry, ListModel, NavItem, NavModel, Panel, Selectors, ViewModel};
pub use tree::{Element, NodePath, ViewTree};
