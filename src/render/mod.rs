pub mod chart;
pub mod json;
pub mod terminal;

use anyhow::Result;

use crate::analysis::{BatchSummary, ImageOutcome};

pub use chart::PngChartRenderer;
pub use json::JsonRenderer;
pub use terminal::TerminalRenderer;

/// Presentation layer for batch results.
/// Outcomes arrive one at a time, in input order, as soon as they are ready.
pub trait Renderer {
    fn begin(&mut self, _total: usize) -> Result<()> {
        Ok(())
    }

    fn render(&mut self, outcome: &ImageOutcome) -> Result<()>;

    fn finish(&mut self, _summary: &BatchSummary) -> Result<()> {
        Ok(())
    }
}

/// Fans every call out to several renderers
#[derive(Default)]
pub struct RendererSet {
    renderers: Vec<Box<dyn Renderer>>,
}

impl RendererSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderers.push(renderer);
        self
    }
}

impl Renderer for RendererSet {
    fn begin(&mut self, total: usize) -> Result<()> {
        for renderer in &mut self.renderers {
            renderer.begin(total)?;
        }
        Ok(())
    }

    fn render(&mut self, outcome: &ImageOutcome) -> Result<()> {
        for renderer in &mut self.renderers {
            renderer.render(outcome)?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &BatchSummary) -> Result<()> {
        for renderer in &mut self.renderers {
            renderer.finish(summary)?;
        }
        Ok(())
    }
}
