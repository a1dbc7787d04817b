//! Dashboard
//!
//! Owns one [`ViewRouter`], one [`SelectionList`] and the chart set, and is
//! the single object a host wires into its event dispatch. When built from
//! a host tree, every handled event is mirrored back onto that tree.

use serde::Serialize;

use crate::charts::{ChartRenderer, ChartSet};
use crate::error::DashboardResult;
use crate::events::{EventHandler, EventOutcome, UiEvent};
use crate::router::ViewRouter;
use crate::selection::SelectionList;
use crate::view::{ListEntry, NavItem, Panel, Selectors, ViewModel, ViewTree};

/// Serialisable view of the current selection state
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub active_link: Option<String>,
    pub active_panel: Option<String>,
    pub active_entry: Option<usize>,
    pub header: String,
    pub links: Vec<NavItem>,
    pub panels: Vec<Panel>,
    pub entries: Vec<ListEntry>,
}

/// Router, list and charts over one view
pub struct Dashboard {
    router: ViewRouter,
    list: SelectionList,
    charts: ChartSet,
    tree: Option<ViewTree>,
    active_class: String,
}

impl Dashboard {
    /// Build from an explicit view-model, with no host tree attached
    pub fn from_model(model: ViewModel, charts: ChartSet) -> Self {
        let ViewModel {
            nav,
            list,
            selectors,
        } = model;
        Self {
            router: ViewRouter::new(nav),
            list: SelectionList::new(list),
            charts,
            tree: None,
            active_class: selectors.active_class,
        }
    }

    /// Extract the view-model from `tree` and keep the tree as the mirror
    pub fn from_tree(tree: ViewTree, selectors: &Selectors, charts: ChartSet) -> DashboardResult<Self> {
        let model = ViewModel::from_tree(&tree, selectors)?;
        let mut dashboard = Self::from_model(model, charts);
        dashboard.tree = Some(tree);

        tracing::info!(
            links = dashboard.router.links().len(),
            entries = dashboard.list.entries().len(),
            charts = dashboard.charts.charts().len(),
            "Dashboard initialised"
        );
        Ok(dashboard)
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn list(&self) -> &SelectionList {
        &self.list
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn tree(&self) -> Option<&ViewTree> {
        self.tree.as_ref()
    }

    /// Apply `events` in order, returning one outcome per event
    pub fn replay<'a, I>(&mut self, events: I) -> Vec<EventOutcome>
    where
        I: IntoIterator<Item = &'a UiEvent>,
    {
        events.into_iter().map(|event| self.handle(event)).collect()
    }

    /// Hand every chart whose surface is present to `renderer`. Without a
    /// host tree there are no surfaces and nothing is rendered.
    pub fn render_charts(&self, renderer: &mut dyn ChartRenderer) -> DashboardResult<Vec<String>> {
        match &self.tree {
            Some(tree) => Ok(self.charts.render_all(renderer, tree)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            active_link: self.router.active_link().map(|l| l.id.clone()),
            active_panel: self.router.active_panel().map(|p| p.id.clone()),
            active_entry: self.list.active().map(|e| e.index),
            header: self.list.header().text.clone(),
            links: self.router.links().to_vec(),
            panels: self.router.panels().to_vec(),
            entries: self.list.entries().to_vec(),
        }
    }

    fn sync_tree(&mut self) {
        if let Some(tree) = self.tree.as_mut() {
            self.router.apply_to(tree, &self.active_class);
            self.list.apply_to(tree, &self.active_class);
        }
    }
}

impl EventHandler for Dashboard {
    fn handle(&mut self, event: &UiEvent) -> EventOutcome {
        let outcome = match event {
            UiEvent::LinkClicked { .. } => self.router.handle(event),
            UiEvent::EntryClicked { .. } => self.list.handle(event),
        };
        if !outcome.is_ignored() {
            self.sync_tree();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartJsRenderer, ChartKind};
    use crate::router::RouteOutcome;
    use crate::view::{default_layout, ListModel, NavModel};

    fn dashboard() -> Dashboard {
        Dashboard::from_tree(default_layout(), &Selectors::default(), ChartSet::presets()).unwrap()
    }

    #[test]
    fn test_initial_snapshot() {
        let snap = dashboard().snapshot();
        assert_eq!(snap.active_link.as_deref(), Some("dashboard"));
        assert_eq!(snap.active_panel.as_deref(), Some("dashboard"));
        assert_eq!(snap.active_entry, Some(0));
        assert_eq!(snap.header, "Maria Silva");
    }

    #[test]
    fn test_replay_and_tree_mirror() {
        let mut dash = dashboard();
        let events = vec![UiEvent::link("whatsapp"), UiEvent::entry(1)];
        let outcomes = dash.replay(&events);

        assert!(matches!(outcomes[0], EventOutcome::Routed(RouteOutcome::Activated { .. })));
        assert_eq!(
            outcomes[1],
            EventOutcome::Selected {
                index: 1,
                label: "João Santos".to_string()
            }
        );

        let tree = dash.tree().unwrap();
        let header = tree.select_first("chat-header", "h3").unwrap();
        assert_eq!(tree.get(&header).unwrap().text_content(), "João Santos");

        let node = |class: &str, id: &str| {
            tree.query_class(class)
                .into_iter()
                .find(|p| {
                    let el = tree.get(p).unwrap();
                    el.id.as_deref() == Some(id) || el.attribute("data-page") == Some(id)
                })
                .map(|p| tree.get(&p).unwrap().clone())
                .unwrap()
        };

        let whatsapp_page = node("page", "whatsapp");
        assert_eq!(whatsapp_page.tag, "section");
        assert!(whatsapp_page.has_class("active"));
        let whatsapp_link = node("nav-link", "whatsapp");
        assert_eq!(whatsapp_link.tag, "a");
        assert!(whatsapp_link.has_class("active"));

        let dashboard_page = node("page", "dashboard");
        assert_eq!(dashboard_page.tag, "section");
        assert!(!dashboard_page.has_class("active"));
        let dashboard_link = node("nav-link", "dashboard");
        assert_eq!(dashboard_link.tag, "a");
        assert!(!dashboard_link.has_class("active"));
    }

    #[test]
    fn test_unknown_link_clears_tree() {
        let mut dash = dashboard();
        dash.handle(&UiEvent::link("reports"));

        let snap = dash.snapshot();
        assert!(snap.active_link.is_none());
        assert!(snap.active_panel.is_none());

        let tree = dash.tree().unwrap();
        assert!(tree
            .query_class("page")
            .iter()
            .all(|p| !tree.get(p).unwrap().has_class("active")));
    }

    #[test]
    fn test_ignored_entry_leaves_state() {
        let mut dash = dashboard();
        let before = dash.snapshot();
        assert!(dash.handle(&UiEvent::entry(42)).is_ignored());
        assert_eq!(dash.snapshot(), before);
    }

    #[test]
    fn test_from_model_without_tree() {
        let model = ViewModel {
            nav: NavModel::new()
                .link("dashboard", "dashboard-panel")
                .link("chat", "chat-panel")
                .panel("dashboard-panel")
                .panel("chat-panel")
                .active("dashboard"),
            list: ListModel::from_labels(["Ana", "Beto"]),
            selectors: Selectors::default(),
        };
        let mut dash = Dashboard::from_model(model, ChartSet::presets());
        dash.handle(&UiEvent::link("chat"));
        dash.handle(&UiEvent::entry(1));

        let snap = dash.snapshot();
        assert_eq!(snap.active_panel.as_deref(), Some("chat-panel"));
        assert_eq!(snap.header, "Beto");
        assert!(dash.tree().is_none());

        let mut renderer = ChartJsRenderer::new();
        assert!(dash.render_charts(&mut renderer).unwrap().is_empty());
    }

    #[test]
    fn test_render_charts() {
        let dash = dashboard();
        let mut renderer = ChartJsRenderer::new();
        let rendered = dash.render_charts(&mut renderer).unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(dash.charts().get("stock").unwrap().kind, ChartKind::Bar);
        assert_eq!(renderer.configs().len(), 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_string(&dashboard().snapshot()).unwrap();
        assert!(json.contains("\"active_link\":\"dashboard\""));
        assert!(json.contains("\"header\":\"Maria Silva\""));
        assert!(!json.contains("node"));
    }
}
