pub mod chart_view;
pub mod derivation_view;
pub mod parameter_panel;
pub mod summary_view;

pub use chart_view::ChartView;
pub use derivation_view::DerivationView;
pub use parameter_panel::ParameterPanel;
pub use summary_view::SummaryView;
