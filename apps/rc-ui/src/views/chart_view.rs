use std::convert::Infallible;

use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};
use rc_app::{ChartSpec, ChartSurface, Magnitude, ReferenceMarker};

/// egui_plot implementation of the chart surface.
pub struct EguiChart<'a> {
    ui: &'a mut egui::Ui,
    height: f32,
}

impl<'a> EguiChart<'a> {
    pub fn new(ui: &'a mut egui::Ui, height: f32) -> Self {
        Self { ui, height }
    }
}

impl ChartSurface for EguiChart<'_> {
    type Error = Infallible;

    fn plot(&mut self, chart: &ChartSpec) -> Result<(), Self::Error> {
        self.ui.strong(&chart.title);

        let points: PlotPoints = chart.points.clone().into();
        let line = Line::new(points).name(&chart.series_name);

        Plot::new("rc_chart")
            .legend(Legend::default())
            .height(self.height)
            .x_axis_label(chart.x_label.as_str())
            .y_axis_label(chart.y_label.as_str())
            .show(self.ui, |plot_ui| {
                plot_ui.line(line);
                for marker in &chart.markers {
                    match marker {
                        ReferenceMarker::Vertical { x, label } => {
                            plot_ui.vline(
                                VLine::new(*x)
                                    .name(label)
                                    .style(LineStyle::dashed_loose()),
                            );
                        }
                        ReferenceMarker::Horizontal { y, label } => {
                            plot_ui.hline(
                                HLine::new(*y)
                                    .name(label)
                                    .style(LineStyle::dotted_loose()),
                            );
                        }
                    }
                }
            });

        Ok(())
    }
}

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    /// Magnitude selector and chart. Returns true if the selection changed.
    pub fn show(&self, ui: &mut egui::Ui, magnitude: &mut Magnitude, chart: &ChartSpec) -> bool {
        ui.heading("Capacitor charging curve");

        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Magnitude to plot:");
            for option in Magnitude::ALL {
                changed |= ui.radio_value(magnitude, option, option.label()).changed();
            }
        });
        ui.separator();

        let Ok(()) = EguiChart::new(ui, 380.0).plot(chart);

        changed
    }
}
