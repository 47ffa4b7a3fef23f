use anyhow::Result;
use std::io::Write;

use crate::analysis::{BatchSummary, ImageOutcome};
use crate::models::DisplayRecord;
use crate::render::Renderer;

const DIVIDER_WIDTH: usize = 48;
const BAR_WIDTH: usize = 40;

/// Human-readable report: banner per image plus a text bar chart
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_chart(&mut self, record: &DisplayRecord) -> Result<()> {
        let label_width = record
            .chart
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        for row in &record.chart {
            writeln!(
                self.out,
                "  {:<width$} {:<bars$} {:>5.1}",
                row.label,
                bar(row.percent),
                row.percent,
                width = label_width,
                bars = BAR_WIDTH,
            )?;
        }

        Ok(())
    }
}

/// Bar of full blocks, `BAR_WIDTH` cells at 100%
pub fn bar(percent: f32) -> String {
    let cells = (percent.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f32).round() as usize;
    "█".repeat(cells)
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self, total: usize) -> Result<()> {
        writeln!(self.out, "Analyzing {} image(s).", total)?;
        Ok(())
    }

    fn render(&mut self, outcome: &ImageOutcome) -> Result<()> {
        writeln!(self.out, "{}", "─".repeat(DIVIDER_WIDTH))?;

        match outcome.dimensions {
            Some((w, h)) => writeln!(self.out, "Input image: {} ({}x{})", outcome.name, w, h)?,
            None => writeln!(self.out, "Input image: {}", outcome.name)?,
        }

        match &outcome.result {
            Ok(record) => {
                writeln!(self.out, "{}", record.headline())?;
                self.write_chart(record)?;
            }
            Err(e) => writeln!(self.out, "✖ {}", e)?,
        }

        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, summary: &BatchSummary) -> Result<()> {
        if summary.total == 0 {
            return Ok(());
        }

        writeln!(self.out, "{}", "─".repeat(DIVIDER_WIDTH))?;
        writeln!(
            self.out,
            "Done: {} classified, {} failed.",
            summary.succeeded, summary.failed
        )?;
        self.out.flush()?;
        Ok(())
    }
}
