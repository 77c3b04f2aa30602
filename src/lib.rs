//! dashboard-charts: chart geometry, analytics transforms and hover
//! interaction for an analytics dashboard.
//!
//! The crate keeps a strict split between pure geometry (`core`), derived
//! analytics (`analytics`), backend-agnostic drawing (`render`) and the
//! stateful chart view (`api`).

pub mod analytics;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartKind, Dashboard, DashboardSettings};
pub use error::{ChartError, ChartResult};
