//! Host view tree
//!
//! A small in-memory document: nested elements carrying a tag, an optional
//! id, a class set, attributes and text content. Nodes are addressed by
//! [`NodePath`], the list of child indices from the root.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::error::{ViewError, ViewResult};

/// A single element in the view tree
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder method: set id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder method: add a class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Builder method: set an attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder method: set text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder method: append a child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder method: append several children
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Text of this element and all descendants, concatenated in order
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Replace the text content (drops children, like `textContent = ..`)
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.children.clear();
    }
}

/// Path from the root to a node, as child indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn join(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/")?;
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("/"))
    }
}

/// The whole document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewTree {
    pub root: Element,
}

impl ViewTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse a tree from JSON
    pub fn from_json(json: &str) -> ViewResult<Self> {
        serde_json::from_str(json).map_err(|e| ViewError::InvalidTree(e.to_string()))
    }

    /// Load a tree from a JSON file
    pub fn load(path: &Path) -> ViewResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ViewError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ViewError::InvalidTree(e.to_string()))
    }

    pub fn get(&self, path: &NodePath) -> Option<&Element> {
        let mut node = &self.root;
        for &index in &path.0 {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Element> {
        let mut node = &mut self.root;
        for &index in &path.0 {
            node = node.children.get_mut(index)?;
        }
        Some(node)
    }

    /// All nodes carrying `class`, in document order
    pub fn query_class(&self, class: &str) -> Vec<NodePath> {
        let mut found = Vec::new();
        walk(&self.root, NodePath::root(), &mut |el, path| {
            if el.has_class(class) {
                found.push(path.clone());
            }
            true
        });
        found
    }

    /// First node whose id equals `id`
    pub fn find_id(&self, id: &str) -> Option<NodePath> {
        let mut found = None;
        walk(&self.root, NodePath::root(), &mut |el, path| {
            if el.id.as_deref() == Some(id) {
                found = Some(path.clone());
                return false;
            }
            true
        });
        found
    }

    /// First element with `tag` strictly below `ancestor`
    pub fn find_descendant_tag(&self, ancestor: &NodePath, tag: &str) -> Option<NodePath> {
        let start = self.get(ancestor)?;
        let mut found = None;
        for (i, child) in start.children.iter().enumerate() {
            walk(child, ancestor.join(i), &mut |el, path| {
                if el.tag == tag {
                    found = Some(path.clone());
                    return false;
                }
                true
            });
            if found.is_some() {
                break;
            }
        }
        found
    }

    /// Descendant selector `.class tag`: first match in document order
    pub fn select_first(&self, class: &str, tag: &str) -> Option<NodePath> {
        self.query_class(class)
            .iter()
            .find_map(|ancestor| self.find_descendant_tag(ancestor, tag))
    }

    /// Add or remove `class` on the node at `path`. Returns false if the
    /// path does not resolve.
    pub fn set_class(&mut self, path: &NodePath, class: &str, on: bool) -> bool {
        match self.get_mut(path) {
            Some(el) => {
                if on {
                    el.classes.insert(class.to_string());
                } else {
                    el.classes.remove(class);
                }
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, path: &NodePath, text: &str) -> bool {
        match self.get_mut(path) {
            Some(el) => {
                el.set_text_content(text);
                true
            }
            None => false,
        }
    }
}

/// Pre-order walk; the visitor returns false to stop
fn walk<F>(el: &Element, path: NodePath, visit: &mut F) -> bool
where
    F: FnMut(&Element, &NodePath) -> bool,
{
    if !visit(el, &path) {
        return false;
    }
    for (i, child) in el.children.iter().enumerate() {
        if !walk(child, path.join(i), visit) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewTree {
        ViewTree::new(
            Element::new("body")
                .child(
                    Element::new("nav")
                        .child(Element::new("a").class("nav-link").attr("data-page", "a"))
                        .child(Element::new("a").class("nav-link").attr("data-page", "b")),
                )
                .child(
                    Element::new("div").class("chat-header").child(
                        Element::new("div").child(Element::new("h3").text("Maria")),
                    ),
                )
                .child(Element::new("section").id("a").class("page")),
        )
    }

    #[test]
    fn test_query_class_document_order() {
        let tree = sample();
        let links = tree.query_class("nav-link");
        assert_eq!(links, vec![NodePath(vec![0, 0]), NodePath(vec![0, 1])]);
        assert_eq!(tree.get(&links[1]).unwrap().attribute("data-page"), Some("b"));
    }

    #[test]
    fn test_find_id() {
        let tree = sample();
        assert_eq!(tree.find_id("a"), Some(NodePath(vec![2])));
        assert_eq!(tree.find_id("missing"), None);
    }

    #[test]
    fn test_descendant_selector() {
        let tree = sample();
        let path = tree.select_first("chat-header", "h3").unwrap();
        assert_eq!(path, NodePath(vec![1, 0, 0]));
        assert_eq!(tree.get(&path).unwrap().text_content(), "Maria");
        assert!(tree.select_first("chat-header", "table").is_none());
    }

    #[test]
    fn test_set_class_and_text() {
        let mut tree = sample();
        let page = tree.find_id("a").unwrap();
        assert!(tree.set_class(&page, "active", true));
        assert!(tree.get(&page).unwrap().has_class("active"));
        assert!(tree.set_class(&page, "active", false));
        assert!(!tree.get(&page).unwrap().has_class("active"));

        let header = tree.select_first("chat-header", "h3").unwrap();
        assert!(tree.set_text(&header, "Beto"));
        assert_eq!(tree.get(&header).unwrap().text, "Beto");

        assert!(!tree.set_class(&NodePath(vec![9]), "active", true));
    }

    #[test]
    fn test_text_content_concatenates_children() {
        let el = Element::new("li")
            .text("> ")
            .child(Element::new("strong").text("Ana"))
            .child(Element::new("span").text(" 16:20"));
        assert_eq!(el.text_content(), "> Ana 16:20");
    }

    #[test]
    fn test_json_load() {
        let json = r#"{"root": {"tag": "body", "children": [{"tag": "canvas", "id": "stockChart"}]}}"#;
        let tree = ViewTree::from_json(json).unwrap();
        assert_eq!(tree.find_id("stockChart"), Some(NodePath(vec![0])));

        let err = ViewTree::from_json("{not json").unwrap_err();
        assert!(matches!(err, ViewError::InvalidTree(_)));
    }

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::root().to_string(), "/");
        assert_eq!(NodePath(vec![1, 0, 2]).to_string(), "/1/0/2");
    }
}
