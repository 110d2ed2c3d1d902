//! Shared application service layer for the RC transient explorer.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! the dashboard configuration object, chart specifications behind a
//! swappable rendering surface, derivation content and asset lookup.

pub mod chart;
pub mod dashboard;
pub mod derivation;
pub mod diagram;
pub mod error;
pub mod magnitude;

// Re-export key types for convenience
pub use chart::{ChartSpec, ChartSurface, ReferenceMarker, TIME_AXIS_LABEL};
pub use dashboard::{Dashboard, DashboardSettings, build_dashboard};
pub use derivation::{DerivationStep, INTEGRATING_FACTOR_STEPS, MODEL_EQUATIONS};
pub use diagram::{DIAGRAM_FILE, DiagramAsset, locate_diagram};
pub use error::{AppError, AppResult};
pub use magnitude::Magnitude;
