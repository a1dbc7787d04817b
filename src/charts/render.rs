//! Rendering collaborator seam
//!
//! The dashboard never draws. It hands each [`ChartSpec`] to a
//! [`ChartRenderer`] together with the id of the surface to draw on.
//! [`ChartJsRenderer`] produces the Chart.js configuration object for each
//! surface so a browser host can pass it straight to `new Chart(ctx, ..)`.

use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::error::ChartResult;
use super::presets::{chatbot_chart, stock_chart};
use super::types::{ChartSpec, Series};
use crate::view::ViewTree;

/// External charting collaborator
pub trait ChartRenderer {
    /// Draw `spec` on the surface with id `surface`
    fn render(&mut self, surface: &str, spec: &ChartSpec) -> ChartResult<()>;
}

/// Collects Chart.js configuration objects keyed by surface id
#[derive(Debug, Default)]
pub struct ChartJsRenderer {
    configs: BTreeMap<String, Value>,
}

impl ChartJsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self, surface: &str) -> Option<&Value> {
        self.configs.get(surface)
    }

    pub fn configs(&self) -> &BTreeMap<String, Value> {
        &self.configs
    }

    pub fn into_configs(self) -> BTreeMap<String, Value> {
        self.configs
    }

    /// Chart.js configuration for one chart
    pub fn to_config(spec: &ChartSpec) -> Value {
        let datasets: Vec<Value> = spec.series.iter().map(dataset).collect();
        json!({
            "type": spec.kind,
            "data": {
                "labels": spec.labels,
                "datasets": datasets,
            },
            "options": {
                "responsive": spec.options.responsive,
                "maintainAspectRatio": spec.options.maintain_aspect_ratio,
                "scales": {
                    "y": { "beginAtZero": spec.options.begin_at_zero }
                }
            }
        })
    }
}

fn dataset(series: &Series) -> Value {
    let mut ds = json!({
        "label": series.name,
        "data": series.values,
        "backgroundColor": series.style.background_color.to_string(),
        "borderColor": series.style.border_color.to_string(),
    });
    if let Some(map) = ds.as_object_mut() {
        if let Some(width) = series.style.border_width {
            map.insert("borderWidth".to_string(), json!(width));
        }
        if let Some(tension) = series.style.tension {
            map.insert("tension".to_string(), json!(tension));
        }
        if let Some(fill) = series.style.fill {
            map.insert("fill".to_string(), json!(fill));
        }
    }
    ds
}

impl ChartRenderer for ChartJsRenderer {
    fn render(&mut self, surface: &str, spec: &ChartSpec) -> ChartResult<()> {
        self.configs.insert(surface.to_string(), Self::to_config(spec));
        Ok(())
    }
}

/// The charts configured for a dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    charts: Vec<ChartSpec>,
}

impl ChartSet {
    /// Validate and collect `charts`
    pub fn new(charts: Vec<ChartSpec>) -> ChartResult<Self> {
        for chart in &charts {
            chart.validate()?;
        }
        Ok(Self { charts })
    }

    /// Stock and chatbot presets
    pub fn presets() -> Self {
        Self {
            charts: vec![stock_chart(), chatbot_chart()],
        }
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    pub fn get(&self, name: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.name == name)
    }

    /// Render every chart whose surface exists in `tree`; the rest are
    /// skipped. Returns the names of the charts rendered.
    pub fn render_all(
        &self,
        renderer: &mut dyn ChartRenderer,
        tree: &ViewTree,
    ) -> ChartResult<Vec<String>> {
        let mut rendered = Vec::new();
        for chart in &self.charts {
            if tree.find_id(&chart.canvas).is_none() {
                tracing::debug!(chart = %chart.name, surface = %chart.canvas, "Surface absent, chart skipped");
                continue;
            }
            renderer.render(&chart.canvas, chart)?;
            rendered.push(chart.name.clone());
        }
        tracing::info!(count = rendered.len(), "Charts rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::error::ChartError;
    use crate::charts::types::{ChartKind, Rgba, SeriesStyle};
    use crate::view::{default_layout, Element};

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(String, ChartKind, usize)>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, surface: &str, spec: &ChartSpec) -> ChartResult<()> {
            self.calls.push((surface.to_string(), spec.kind, spec.series.len()));
            Ok(())
        }
    }

    struct FailingRenderer;

    impl ChartRenderer for FailingRenderer {
        fn render(&mut self, surface: &str, _spec: &ChartSpec) -> ChartResult<()> {
            Err(ChartError::Render {
                surface: surface.to_string(),
                message: "no 2d context".to_string(),
            })
        }
    }

    #[test]
    fn test_render_all_on_default_layout() {
        let mut renderer = RecordingRenderer::default();
        let rendered = ChartSet::presets()
            .render_all(&mut renderer, &default_layout())
            .unwrap();

        assert_eq!(rendered, vec!["stock", "chatbot"]);
        assert_eq!(
            renderer.calls,
            vec![
                ("stockChart".to_string(), ChartKind::Bar, 2),
                ("chatbotChart".to_string(), ChartKind::Line, 3),
            ]
        );
    }

    #[test]
    fn test_missing_surface_is_skipped() {
        let tree = ViewTree::new(Element::new("body").child(Element::new("canvas").id("chatbotChart")));
        let mut renderer = RecordingRenderer::default();
        let rendered = ChartSet::presets().render_all(&mut renderer, &tree).unwrap();

        assert_eq!(rendered, vec!["chatbot"]);
        assert_eq!(renderer.calls.len(), 1);
    }

    #[test]
    fn test_renderer_error_propagates() {
        let err = ChartSet::presets()
            .render_all(&mut FailingRenderer, &default_layout())
            .unwrap_err();
        assert!(matches!(err, ChartError::Render { surface, .. } if surface == "stockChart"));
    }

    #[test]
    fn test_chart_js_config_shape() {
        let mut renderer = ChartJsRenderer::new();
        ChartSet::presets()
            .render_all(&mut renderer, &default_layout())
            .unwrap();

        let stock = renderer.config("stockChart").unwrap();
        assert_eq!(stock["type"], "bar");
        assert_eq!(stock["data"]["labels"].as_array().unwrap().len(), 5);
        assert_eq!(stock["data"]["datasets"][0]["label"], "Estoque Atual");
        assert_eq!(stock["data"]["datasets"][0]["data"][1], 200.0);
        assert_eq!(stock["data"]["datasets"][1]["backgroundColor"], "rgba(239, 68, 68, 0.8)");
        assert_eq!(stock["data"]["datasets"][1]["borderWidth"], 1);
        assert!(stock["data"]["datasets"][0].get("tension").is_none());
        assert_eq!(stock["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(stock["options"]["maintainAspectRatio"], true);

        let chatbot = renderer.config("chatbotChart").unwrap();
        assert_eq!(chatbot["type"], "line");
        assert_eq!(chatbot["data"]["datasets"][2]["label"], "Atendimento Humano");
        assert_eq!(chatbot["data"]["datasets"][2]["tension"], 0.4);
        assert_eq!(chatbot["data"]["datasets"][2]["fill"], true);
        assert!(chatbot["data"]["datasets"][0].get("borderWidth").is_none());
    }

    #[test]
    fn test_chart_set_rejects_invalid() {
        let bad = ChartSpec::new("bad", "c", ChartKind::Bar)
            .labels(["a"])
            .series(Series::new(
                "s",
                vec![1.0, 2.0],
                SeriesStyle::bar(Rgba::rgb(0, 0, 0), Rgba::rgb(0, 0, 0)),
            ));
        assert!(ChartSet::new(vec![bad]).is_err());
        assert!(ChartSet::new(vec![stock_chart()]).is_ok());
    }
}
