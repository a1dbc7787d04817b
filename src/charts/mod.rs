//! Dashboard Charts
//!
//! Charts are described declaratively and drawn by an external
//! collaborator:
//!
//! - **types**: `ChartSpec`, `Series`, `SeriesStyle`, `Rgba`
//! - **presets**: the stock and chatbot charts
//! - **render**: the `ChartRenderer` seam and the Chart.js renderer
//! - **error**: error types

pub mod error;
pub mod presets;
pub mod render;
pub mod types;

pub use error::{ChartError, ChartResult};
pub use presets::{chatbot_chart, stock_chart, CHATBOT_CANVAS, STOCK_CANVAS};
pub use render::{ChartJsRenderer, ChartRenderer, ChartSet};
pub use types::{ChartKind, ChartOptions, ChartSpec, Rgba, Series, SeriesStyle};
