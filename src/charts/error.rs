//! Chart description error types

use thiserror::Error;

/// Errors raised while validating or rendering a chart description
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A chart needs at least one category
    #[error("Chart '{0}' has no category labels")]
    NoLabels(String),

    /// A series does not carry one value per category
    #[error("Series '{series}' has {actual} values, expected {expected}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// Two series share a name
    #[error("Duplicate series name: {0}")]
    DuplicateSeries(String),

    /// Colour string could not be parsed
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// The rendering collaborator rejected the chart
    #[error("Render error on surface '{surface}': {message}")]
    Render { surface: String, message: String },
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
