use rc_app::INTEGRATING_FACTOR_STEPS;

#[derive(Default)]
pub struct DerivationView;

impl DerivationView {
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.heading("Theoretical derivation (integrating factor method)");
        ui.add_space(4.0);

        for step in &INTEGRATING_FACTOR_STEPS {
            ui.label(egui::RichText::new(step.caption).strong());
            ui.indent(step.caption, |ui| {
                ui.monospace(step.formula);
            });
            ui.add_space(4.0);
        }
    }
}
