use rc_app::DashboardSettings;
use rc_circuit::{CAPACITANCE_UF, CircuitParams, RESISTANCE_OHM, SOURCE_VOLTAGE_V};

/// Sidebar sliders for R, C and E0 plus the derivation toggle.
///
/// Slider values are kept here in input units (Ω, μF, V) and pushed into
/// the settings through the range-validated constructor.
pub struct ParameterPanel {
    resistance_ohm: f64,
    capacitance_uf: f64,
    source_voltage_v: f64,
    error: Option<String>,
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self::from_params(&CircuitParams::default())
    }
}

impl ParameterPanel {
    pub fn from_params(params: &CircuitParams) -> Self {
        Self {
            resistance_ohm: params.resistance_ohm(),
            capacitance_uf: params.capacitance_uf(),
            source_voltage_v: params.source_voltage_v(),
            error: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, settings: &mut DashboardSettings) {
        ui.heading("Circuit parameters");
        ui.separator();

        let mut changed = false;

        let mut r_slider = egui::Slider::new(
            &mut self.resistance_ohm,
            RESISTANCE_OHM.min..=RESISTANCE_OHM.max,
        )
        .text("Resistance R [Ω]");
        if let Some(step) = RESISTANCE_OHM.step {
            r_slider = r_slider.step_by(step);
        }
        changed |= ui.add(r_slider).changed();

        changed |= ui
            .add(
                egui::Slider::new(
                    &mut self.capacitance_uf,
                    CAPACITANCE_UF.min..=CAPACITANCE_UF.max,
                )
                .logarithmic(true)
                .text("Capacitance C [μF]"),
            )
            .changed();

        changed |= ui
            .add(
                egui::Slider::new(
                    &mut self.source_voltage_v,
                    SOURCE_VOLTAGE_V.min..=SOURCE_VOLTAGE_V.max,
                )
                .text("Source voltage E₀ [V]"),
            )
            .changed();

        if changed {
            self.apply(settings);
        }

        ui.add_space(8.0);
        ui.checkbox(&mut settings.show_derivation, "Show theoretical derivation");

        if ui.button("Reset to defaults").clicked() {
            *self = Self::default();
            settings.params = CircuitParams::default();
        }

        if let Some(err) = &self.error {
            ui.separator();
            ui.colored_label(egui::Color32::RED, err);
        }
    }

    /// Push slider values into `settings`. Returns true if the parameters changed.
    fn apply(&mut self, settings: &mut DashboardSettings) -> bool {
        match CircuitParams::from_inputs(
            self.resistance_ohm,
            self.capacitance_uf,
            self.source_voltage_v,
        ) {
            Ok(params) => {
                self.error = None;
                if params != settings.params {
                    settings.params = params;
                    true
                } else {
                    false
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected parameter input");
                self.error = Some(e.to_string());
                false
            }
        }
    }
}
