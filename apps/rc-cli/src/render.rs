//! Text rendering surfaces for charts.

use std::io::Write;

use clap::ValueEnum;
use rc_app::{AppError, AppResult, ChartSpec, ChartSurface, ReferenceMarker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a header block
    Table,
    /// `time_s,<series>` rows
    Csv,
    /// Full chart description as JSON
    Json,
}

/// Writes a chart to any `Write` sink in the chosen format.
pub struct TextSurface<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_table(&mut self, chart: &ChartSpec) -> AppResult<()> {
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "  x: {}", chart.x_label)?;
        writeln!(self.out, "  y: {}", chart.y_label)?;
        for marker in &chart.markers {
            match marker {
                ReferenceMarker::Vertical { label, .. } => {
                    writeln!(self.out, "  | {}", label)?;
                }
                ReferenceMarker::Horizontal { label, .. } => {
                    writeln!(self.out, "  - {}", label)?;
                }
            }
        }
        writeln!(self.out)?;
        writeln!(self.out, "{:>14}  {:>14}", "t [s]", chart.series_name)?;
        for [t, y] in &chart.points {
            writeln!(self.out, "{:>14.6e}  {:>14.6e}", t, y)?;
        }
        Ok(())
    }

    fn write_csv(&mut self, chart: &ChartSpec) -> AppResult<()> {
        writeln!(self.out, "time_s,{}", chart.series_name)?;
        for [t, y] in &chart.points {
            writeln!(self.out, "{},{}", t, y)?;
        }
        Ok(())
    }

    fn write_json(&mut self, chart: &ChartSpec) -> AppResult<()> {
        serde_json::to_writer_pretty(&mut self.out, chart).map_err(|e| AppError::Render {
            message: e.to_string(),
        })?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ChartSurface for TextSurface<W> {
    type Error = AppError;

    fn plot(&mut self, chart: &ChartSpec) -> Result<(), Self::Error> {
        match self.format {
            OutputFormat::Table => self.write_table(chart)?,
            OutputFormat::Csv => self.write_csv(chart)?,
            OutputFormat::Json => self.write_json(chart)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
