use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::{analyze_batch, BatchSummary};
use crate::classifier::ModelProvider;
use crate::input::ImageInput;
use crate::render::Renderer;

/// Analyze `inputs` in order, rendering each outcome before the next image
/// is read.
///
/// An empty batch returns immediately without loading the model. A model
/// load failure aborts the whole run; per-image failures only show up in
/// their own outcome and in the summary counts.
pub fn run_batch(
    inputs: Vec<ImageInput>,
    provider: &ModelProvider,
    renderer: &mut dyn Renderer,
) -> Result<BatchSummary> {
    if inputs.is_empty() {
        debug!("No images to analyze");
        return Ok(BatchSummary::default());
    }

    let classifier = provider.get_classifier()?;

    info!("Analyzing {} image(s)", inputs.len());
    renderer.begin(inputs.len())?;

    let mut summary = BatchSummary::default();
    for outcome in analyze_batch(inputs, classifier.as_ref()) {
        summary.record(&outcome);
        renderer.render(&outcome)?;
    }

    renderer.finish(&summary)?;
    Ok(summary)
}
