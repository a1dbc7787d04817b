//! View Router
//!
//! Single-selection tab switcher. Keeps exactly one nav item and its
//! matching panel active.

use serde::Serialize;

use crate::view::{NavItem, NavModel, NodePath, Panel, ViewTree};

/// Result of a `select_link` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Link and its panel are now active
    Activated { link: String, panel: String },
    /// Link is active but no registered panel carries its target id
    ActivatedWithoutPanel { link: String, target: String },
    /// Unknown link id: everything was deactivated
    Cleared { requested: String },
}

/// Tab switcher over a fixed set of nav items and panels
#[derive(Debug, Clone)]
pub struct ViewRouter {
    items: Vec<NavItem>,
    panels: Vec<Panel>,
}

impl ViewRouter {
    pub fn new(model: NavModel) -> Self {
        Self {
            items: model.items,
            panels: model.panels,
        }
    }

    /// Select the nav item `id`.
    ///
    /// Every item and panel is deactivated first, then the item and the
    /// panel named by its target are activated. An unknown id therefore
    /// leaves nothing active.
    pub fn select_link(&mut self, id: &str) -> RouteOutcome {
        for item in &mut self.items {
            item.active = false;
        }
        for panel in &mut self.panels {
            panel.active = false;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::warn!(link = id, "Unknown nav link, selection cleared");
            return RouteOutcome::Cleared {
                requested: id.to_string(),
            };
        };
        item.active = true;
        let target = item.target.clone();

        match self.panels.iter_mut().find(|panel| panel.id == target) {
            Some(panel) => {
                panel.active = true;
                tracing::debug!(link = id, panel = %target, "Nav link selected");
                RouteOutcome::Activated {
                    link: id.to_string(),
                    panel: target,
                }
            }
            None => {
                tracing::warn!(link = id, target = %target, "Nav link target panel not found");
                RouteOutcome::ActivatedWithoutPanel {
                    link: id.to_string(),
                    target,
                }
            }
        }
    }

    pub fn links(&self) -> &[NavItem] {
        &self.items
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn active_link(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.active)
    }

    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.active)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Exactly one active link, exactly one active panel, and the panel is
    /// the link's target
    pub fn is_consistent(&self) -> bool {
        let links: Vec<&NavItem> = self.items.iter().filter(|i| i.active).collect();
        let panels: Vec<&Panel> = self.panels.iter().filter(|p| p.active).collect();
        matches!((links.as_slice(), panels.as_slice()), ([link], [panel]) if link.target == panel.id)
    }

    /// Mirror active flags onto the host tree as `active_class`
    pub fn apply_to(&self, tree: &mut ViewTree, active_class: &str) {
        let flags = self
            .items
            .iter()
            .map(|i| (&i.node, i.active))
            .chain(self.panels.iter().map(|p| (&p.node, p.active)));
        for (node, active) in flags {
            if let Some(path) = node {
                set_flag(tree, path, active_class, active);
            }
        }
    }
}

fn set_flag(tree: &mut ViewTree, path: &NodePath, class: &str, on: bool) {
    if !tree.set_class(path, class, on) {
        tracing::warn!(%path, "Node no longer present in view tree");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{default_layout, Selectors, ViewModel};

    fn router() -> ViewRouter {
        ViewRouter::new(
            NavModel::new()
                .link("dashboard", "dashboard-panel")
                .link("chat", "chat-panel")
                .panel("dashboard-panel")
                .panel("chat-panel")
                .active("dashboard"),
        )
    }

    fn panel(router: &ViewRouter, id: &str) -> bool {
        router.panels().iter().find(|p| p.id == id).unwrap().active
    }

    fn link(router: &ViewRouter, id: &str) -> bool {
        router.links().iter().find(|l| l.id == id).unwrap().active
    }

    #[test]
    fn test_select_chat_scenario() {
        let mut router = router();
        let outcome = router.select_link("chat");

        assert_eq!(
            outcome,
            RouteOutcome::Activated {
                link: "chat".to_string(),
                panel: "chat-panel".to_string()
            }
        );
        assert!(!panel(&router, "dashboard-panel"));
        assert!(panel(&router, "chat-panel"));
        assert!(link(&router, "chat"));
        assert!(!link(&router, "dashboard"));
        assert!(router.is_consistent());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = router();
        once.select_link("chat");

        let mut twice = router();
        twice.select_link("chat");
        twice.select_link("chat");

        assert_eq!(once.links(), twice.links());
        assert_eq!(once.panels(), twice.panels());
    }

    #[test]
    fn test_valid_sequences_keep_invariant() {
        let mut router = router();
        let ids = ["dashboard", "chat"];
        // deterministic pseudo-random walk over valid ids
        let mut seed: u32 = 17;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let id = ids[(seed >> 16) as usize % ids.len()];
            router.select_link(id);
            assert!(router.is_consistent());
            assert_eq!(router.active_link().unwrap().id, id);
        }
    }

    #[test]
    fn test_unknown_id_clears_everything() {
        let mut router = router();
        let outcome = router.select_link("reports");

        assert!(matches!(outcome, RouteOutcome::Cleared { requested } if requested == "reports"));
        assert!(router.active_link().is_none());
        assert!(router.active_panel().is_none());
        assert!(!router.is_consistent());

        // a valid selection recovers
        router.select_link("dashboard");
        assert!(router.is_consistent());
    }

    #[test]
    fn test_contains() {
        let router = router();
        assert!(router.contains("chat"));
        assert!(!router.contains("chat-panel"));
        assert!(!router.contains("reports"));
    }

    #[test]
    fn test_missing_panel_activates_link_only() {
        let mut router = ViewRouter::new(
            NavModel::new()
                .link("a", "panel-a")
                .link("b", "panel-b")
                .panel("panel-a")
                .active("a"),
        );
        let outcome = router.select_link("b");

        assert!(matches!(outcome, RouteOutcome::ActivatedWithoutPanel { .. }));
        assert_eq!(router.active_link().unwrap().id, "b");
        assert!(router.active_panel().is_none());
    }

    #[test]
    fn test_apply_to_tree() {
        let mut tree = default_layout();
        let model = ViewModel::from_tree(&tree, &Selectors::default()).unwrap();
        let mut router = ViewRouter::new(model.nav);

        router.select_link("whatsapp");
        router.apply_to(&mut tree, "active");

        for path in tree.query_class("page") {
            let el = tree.get(&path).unwrap();
            assert_eq!(el.tag, "section");
            assert_eq!(el.has_class("active"), el.id.as_deref() == Some("whatsapp"));
        }
        for path in tree.query_class("nav-link") {
            let el = tree.get(&path).unwrap();
            assert_eq!(el.tag, "a");
            assert_eq!(el.has_class("active"), el.attribute("data-page") == Some("whatsapp"));
        }

        // the previously active dashboard page and link are both cleared
        let dashboard_page = tree.find_id("dashboard").unwrap();
        assert!(tree.get(&dashboard_page).unwrap().has_class("page"));
        assert!(!tree.get(&dashboard_page).unwrap().has_class("active"));
        let dashboard_link = tree
            .query_class("nav-link")
            .into_iter()
            .find(|p| tree.get(p).unwrap().attribute("data-page") == Some("dashboard"))
            .unwrap();
        assert!(!tree.get(&dashboard_link).unwrap().has_class("active"));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = RouteOutcome::Cleared {
            requested: "x".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"result\":\"cleared\""));
        assert!(json.contains("\"requested\":\"x\""));
    }
}
