//! Crate-level error type

use thiserror::Error;

use crate::charts::ChartError;
use crate::config::ConfigError;
use crate::view::ViewError;

/// Any failure while building or driving a dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
