use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::analysis::ImageOutcome;
use crate::models::DisplayRecord;
use crate::render::Renderer;

#[derive(Serialize)]
struct JsonOutcome<'a> {
    index: usize,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a DisplayRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// One JSON object per image, newline-delimited
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, outcome: &ImageOutcome) -> Result<()> {
        let line = JsonOutcome {
            index: outcome.index,
            name: &outcome.name,
            width: outcome.dimensions.map(|(w, _)| w),
            height: outcome.dimensions.map(|(_, h)| h),
            record: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(|e| e.to_string()),
        };

        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
