//! View layer error types
//!
//! Selection itself never fails; these cover building the view-model from a
//! host tree that does not have the expected structure.

use std::path::PathBuf;
use thiserror::Error;

use super::tree::NodePath;

/// Errors raised while reading or interpreting the view tree
#[derive(Error, Debug)]
pub enum ViewError {
    /// Layout file could not be read
    #[error("Failed to read layout {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Layout JSON is malformed
    #[error("Invalid view tree: {0}")]
    InvalidTree(String),

    /// No element matches the header selector
    #[error("Header display not found: .{class} {tag}")]
    MissingHeader { class: String, tag: String },

    /// A list item has no label sub-element
    #[error("List entry at {0} has no label element")]
    MissingLabel(NodePath),

    /// A nav link carries no panel target attribute
    #[error("Nav link at {path} has no '{attribute}' attribute")]
    MissingTarget { path: NodePath, attribute: String },

    /// Two nav links resolve to the same identifier
    #[error("Duplicate nav link id: {0}")]
    DuplicateLink(String),
}

/// Result type alias for view operations
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ViewError::MissingHeader {
            class: "chat-header".to_string(),
            tag: "h3".to_string(),
        };
        assert_eq!(err.to_string(), "Header display not found: .chat-header h3");

        let err = ViewError::MissingLabel(NodePath(vec![2, 1]));
        assert_eq!(err.to_string(), "List entry at /2/1 has no label element");
    }
}
