use egui_extras::{Column, TableBuilder};
use rc_app::{DiagramAsset, MODEL_EQUATIONS};
use rc_circuit::{CircuitSummary, HORIZON_TIME_CONSTANTS, settling_table};

#[derive(Default)]
pub struct SummaryView;

impl SummaryView {
    pub fn show(&self, ui: &mut egui::Ui, summary: &CircuitSummary, diagram: &DiagramAsset) {
        ui.heading("Circuit summary");

        match diagram {
            DiagramAsset::Available(path) => {
                ui.add(egui::Image::new(format!("file://{}", path.display())).max_width(320.0));
                ui.small("Series RC circuit");
            }
            DiagramAsset::Missing { hint } => {
                ui.label(format!("📷 {}", hint));
            }
        }

        ui.add_space(6.0);
        for eq in &MODEL_EQUATIONS {
            ui.strong(eq.caption);
            ui.monospace(eq.formula);
        }

        ui.separator();
        ui.push_id("summary_values", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(120.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Quantity");
                    });
                    header.col(|ui| {
                        ui.strong("Value");
                    });
                })
                .body(|mut body| {
                    let rows = [
                        ("τ = RC", format!("{:.4e} s", summary.time_constant_s)),
                        ("q_max = E₀C", format!("{:.4e} C", summary.q_max_c)),
                        ("Vc(∞)", format!("{:.2} V", summary.vc_final_v)),
                        ("Vc(τ)", format!("{:.4} V", summary.vc_at_tau_v)),
                    ];
                    for (name, value) in rows {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(name);
                            });
                            row.col(|ui| {
                                ui.monospace(value);
                            });
                        });
                    }
                });
        });

        ui.add_space(6.0);
        ui.push_id("settling", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(40.0))
                .column(Column::auto().at_least(100.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("t");
                    });
                    header.col(|ui| {
                        ui.strong("Time [s]");
                    });
                    header.col(|ui| {
                        ui.strong("Charged");
                    });
                })
                .body(|mut body| {
                    let max_n = HORIZON_TIME_CONSTANTS as u32;
                    for row_data in settling_table(summary.time_constant_s, max_n) {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(format!("{}τ", row_data.n_tau));
                            });
                            row.col(|ui| {
                                ui.monospace(format!("{:.4e}", row_data.time_s));
                            });
                            row.col(|ui| {
                                ui.monospace(format!("{:.2}%", row_data.fraction * 100.0));
                            });
                        });
                    }
                });
        });
    }
}
