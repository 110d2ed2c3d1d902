use crate::views::{ChartView, DerivationView, ParameterPanel, SummaryView};
use rc_app::{Dashboard, DashboardSettings, DiagramAsset, build_dashboard, locate_diagram};

const INTRO: &str = "Charging of a capacitor in a series RC circuit, modelled by \
     R dq/dt + q/C = E0 and solved with the integrating factor method.";

pub struct RcTransientApp {
    settings: DashboardSettings,
    /// Settings the cached dashboard was built from
    computed_for: Option<DashboardSettings>,
    dashboard: Result<Dashboard, String>,
    diagram: DiagramAsset,
    parameter_panel: ParameterPanel,
    summary_view: SummaryView,
    chart_view: ChartView,
    derivation_view: DerivationView,
}

impl RcTransientApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let diagram = match std::env::current_dir() {
            Ok(dir) => locate_diagram(&dir),
            Err(e) => DiagramAsset::Missing {
                hint: format!("Circuit diagram unavailable: {}", e),
            },
        };

        let settings = DashboardSettings::default();
        let mut app = Self {
            settings,
            computed_for: None,
            dashboard: Err("Not computed yet".to_string()),
            diagram,
            parameter_panel: ParameterPanel::from_params(&settings.params),
            summary_view: SummaryView,
            chart_view: ChartView,
            derivation_view: DerivationView,
        };
        app.refresh();
        app
    }

    /// Rebuild the dashboard if the settings changed since the last build.
    fn refresh(&mut self) {
        if self.computed_for == Some(self.settings) {
            return;
        }

        self.dashboard = build_dashboard(&self.settings).map_err(|e| {
            tracing::warn!(error = %e, "dashboard evaluation failed");
            e.to_string()
        });
        if let Ok(dashboard) = &self.dashboard {
            tracing::debug!(
                tau_s = dashboard.summary.time_constant_s,
                magnitude = %self.settings.magnitude,
                "dashboard refreshed"
            );
        }
        self.computed_for = Some(self.settings);
    }
}

impl eframe::App for RcTransientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Interactive Series RC Circuit Simulator");
            ui.label(INTRO);
            ui.add_space(4.0);
        });

        egui::SidePanel::left("parameters")
            .default_width(280.0)
            .show(ctx, |ui| {
                self.parameter_panel.show(ui, &mut self.settings);
            });

        self.refresh();

        let mut magnitude = self.settings.magnitude;
        let mut magnitude_changed = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &self.dashboard {
                Ok(dashboard) => {
                    ui.columns(2, |cols| {
                        self.summary_view
                            .show(&mut cols[0], &dashboard.summary, &self.diagram);
                        magnitude_changed =
                            self.chart_view
                                .show(&mut cols[1], &mut magnitude, &dashboard.chart);
                    });

                    if self.settings.show_derivation {
                        ui.separator();
                        self.derivation_view.show(ui);
                    }
                }
                Err(message) => {
                    ui.colored_label(egui::Color32::RED, message);
                }
            });
        });

        if magnitude_changed {
            self.settings.magnitude = magnitude;
            self.refresh();
            ctx.request_repaint();
        }
    }
}
