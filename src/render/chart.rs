use anyhow::Result;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use std::path::PathBuf;
use tracing::debug;

use crate::analysis::ImageOutcome;
use crate::models::DisplayRecord;
use crate::render::Renderer;

pub const BAR_COLOR: Rgb<u8> = Rgb([0xFF, 0x4B, 0x4B]);
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS_COLOR: Rgb<u8> = Rgb([160, 160, 160]);

/// Height of the plot area in pixels (a 100% bar fills it)
pub const PLOT_HEIGHT: u32 = 200;
const BAR_WIDTH: u32 = 40;
const BAR_GAP: u32 = 16;
const MARGIN: u32 = 12;

/// Writes one PNG bar chart per successfully classified image
pub struct PngChartRenderer {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngChartRenderer {
    /// Creates `output_dir` if it does not exist yet
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            written: Vec::new(),
        })
    }

    /// Paths of all charts written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

/// Draw the score table as vertical bars, in chart order
pub fn draw_chart(record: &DisplayRecord) -> RgbImage {
    let bars = record.chart.len().max(1) as u32;
    let width = 2 * MARGIN + bars * BAR_WIDTH + (bars - 1) * BAR_GAP;
    let height = PLOT_HEIGHT + 2 * MARGIN;

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let baseline = MARGIN + PLOT_HEIGHT;

    for (i, row) in record.chart.iter().enumerate() {
        let bar_height = (row.percent.clamp(0.0, 100.0) / 100.0 * PLOT_HEIGHT as f32).round() as u32;
        if bar_height == 0 {
            continue;
        }

        let x = MARGIN + i as u32 * (BAR_WIDTH + BAR_GAP);
        let y = baseline - bar_height;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x as i32, y as i32).of_size(BAR_WIDTH, bar_height),
            BAR_COLOR,
        );
    }

    draw_line_segment_mut(
        &mut img,
        (MARGIN as f32 / 2.0, baseline as f32),
        ((width - MARGIN / 2) as f32, baseline as f32),
        AXIS_COLOR,
    );

    img
}

impl Renderer for PngChartRenderer {
    fn render(&mut self, outcome: &ImageOutcome) -> Result<()> {
        let Ok(record) = &outcome.result else {
            return Ok(());
        };

        let filename = format!("{:02}-{}.png", outcome.index + 1, outcome.stem);
        let path = self.output_dir.join(filename);

        draw_chart(record)
            .save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save chart {}: {}", path.display(), e))?;

        debug!(path = %path.display(), "Chart saved");
        self.written.push(path);
        Ok(())
    }
}
