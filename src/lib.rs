//! # Vaccine Dashboard
//!
//! View-state core for the vaccination system dashboard: tab switching
//! between pages, the conversation list mock-up, and the declarative chart
//! descriptions handed to an external charting library.
//!
//! ## Modules
//!
//! - [`view`]: host view tree and the view-model extracted from it
//! - [`router`]: single-selection nav link / page switcher
//! - [`selection`]: single-selection list with a mirrored header
//! - [`events`]: host event types and the `EventHandler` capability
//! - [`charts`]: chart descriptions and the rendering collaborator seam
//! - [`dashboard`]: everything above wired into one handler
//!
//! ## Quick Start
//!
//! ```rust
//! use vaccine_dashboard::*;
//!
//! let mut dashboard = Dashboard::from_tree(
//!     default_layout(),
//!     &Selectors::default(),
//!     ChartSet::presets(),
//! )?;
//!
//! dashboard.handle(&UiEvent::link("whatsapp"));
//! dashboard.handle(&UiEvent::entry(2));
//!
//! let snapshot = dashboard.snapshot();
//! assert_eq!(snapshot.active_panel.as_deref(), Some("whatsapp"));
//! assert_eq!(snapshot.header, "Ana Costa");
//! # Ok::<(), DashboardError>(())
//! ```

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod router;
pub mod selection;
pub mod view;

// Re-export top-level types for convenience
pub use charts::{
    ChartError, ChartJsRenderer, ChartKind, ChartOptions, ChartRenderer, ChartResult, ChartSet,
    ChartSpec, Rgba, Series, SeriesStyle, chatbot_chart, stock_chart,
};

pub use config::{ChartsConfig, Config, ConfigError, DashboardConfig, LoggingConfig};

pub use dashboard::{Dashboard, DashboardSnapshot};

pub use error::{DashboardError, DashboardResult};

pub use events::{EventHandler, EventOutcome, UiEvent};

pub use router::{RouteOutcome, ViewRouter};

pub use selection::SelectionList;

pub use view::{
    Element, HeaderDisplay, ListEntry, ListModel, NavItem, NavModel, NodePath, Panel, Selectors,
    ViewError, ViewModel, ViewResult, ViewTree, default_layout,
};
