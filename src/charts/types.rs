//! Declarative chart descriptions
//!
//! Plain immutable data handed to the rendering collaborator:
//! - `ChartSpec`: surface, kind, categories, series and options
//! - `Series` and `SeriesStyle`: one named row of values and its styling
//! - `Rgba`: a CSS colour

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use super::error::{ChartError, ChartResult};

/// Chart kind understood by the collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
        }
    }
}

/// CSS colour, written `rgb(..)` when opaque and `rgba(..)` otherwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour at a different opacity
    pub const fn alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(s.to_string());
        let s = s.trim();
        let (inner, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, false)
        } else {
            return Err(invalid());
        };

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let a = if with_alpha {
            let a = parts[3].parse::<f32>().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(invalid());
            }
            a
        } else {
            1.0
        };
        Ok(Self {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
            a,
        })
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Display styling for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub background_color: Rgba,
    pub border_color: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// Bezier curve tension for line charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Fill the area under the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl SeriesStyle {
    /// Solid bar: given fill and border, border width 1
    pub fn bar(background_color: Rgba, border_color: Rgba) -> Self {
        Self {
            background_color,
            border_color,
            border_width: Some(1),
            tension: None,
            fill: None,
        }
    }

    /// Smoothed, filled line in `color` with a translucent area
    pub fn filled_line(color: Rgba, fill_alpha: f32, tension: f64) -> Self {
        Self {
            background_color: color.alpha(fill_alpha),
            border_color: color,
            border_width: None,
            tension: Some(tension),
            fill: Some(true),
        }
    }
}

/// One named row of values, one per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(name: impl Into<String>, values: impl Into<Vec<f64>>, style: SeriesStyle) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
            style,
        }
    }
}

/// Options passed through to the collaborator untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_true")]
    pub responsive: bool,
    #[serde(default = "default_true")]
    pub maintain_aspect_ratio: bool,
    #[serde(default = "default_true")]
    pub begin_at_zero: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            begin_at_zero: true,
        }
    }
}

/// Complete declarative description of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Short name used to pick the chart from the CLI
    pub name: String,
    /// Id of the drawing surface in the host tree
    pub canvas: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new(name: impl Into<String>, canvas: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            name: name.into(),
            canvas: canvas.into(),
            kind,
            labels: Vec::new(),
            series: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    /// Builder method: set the category labels
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: add a series
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Check that the description is well formed
    pub fn validate(&self) -> ChartResult<()> {
        if self.labels.is_empty() {
            return Err(ChartError::NoLabels(self.name.clone()));
        }
        let mut names = HashSet::new();
        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(ChartError::LengthMismatch {
                    series: series.name.clone(),
                    expected: self.labels.len(),
                    actual: series.values.len(),
                });
            }
            if !names.insert(series.name.as_str()) {
                return Err(ChartError::DuplicateSeries(series.name.clone()));
            }
        }
        Ok(())
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}
