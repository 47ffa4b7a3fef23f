pub mod batch;
pub mod emoji;

use image::DynamicImage;

use crate::classifier::ImageClassifier;
use crate::error::ClassifyError;
use crate::models::{ChartRow, ClassificationResult, DisplayRecord};

pub use batch::{analyze_batch, BatchAnalysis, BatchSummary, ImageOutcome};
pub use emoji::{emoji_for, DEFAULT_EMOJI};

/// Classify one image and derive its display record
pub fn analyze(
    image: &DynamicImage,
    classifier: &dyn ImageClassifier,
) -> Result<DisplayRecord, ClassifyError> {
    let results = classifier.classify(image)?;
    display_record(&results)
}

/// Build the display record for an already computed classification result
pub fn display_record(results: &ClassificationResult) -> Result<DisplayRecord, ClassifyError> {
    // First entry wins ties, so a sorted result yields its head
    let top = results
        .iter()
        .reduce(|best, c| if c.score > best.score { c } else { best })
        .ok_or_else(|| ClassifyError::Inference("classifier returned no classes".into()))?;

    let chart = results
        .iter()
        .map(|c| ChartRow {
            label: c.label.clone(),
            percent: c.score * 100.0,
        })
        .collect();

    Ok(DisplayRecord {
        label: top.label.clone(),
        score: top.score,
        emoji: emoji_for(&top.label),
        chart,
    })
}
