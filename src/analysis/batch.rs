use image::GenericImageView;
use tracing::{debug, warn};

use crate::analysis::analyze;
use crate::classifier::ImageClassifier;
use crate::error::ClassifyError;
use crate::input::ImageInput;
use crate::models::DisplayRecord;

/// Result of processing one input image
#[derive(Debug)]
pub struct ImageOutcome {
    /// Zero-based position in the batch
    pub index: usize,
    pub name: String,
    pub stem: String,
    /// Pixel dimensions, known once decoding succeeded
    pub dimensions: Option<(u32, u32)>,
    pub result: Result<DisplayRecord, ClassifyError>,
}

impl ImageOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &ImageOutcome) {
        self.total += 1;
        if outcome.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Lazily analyzes images one at a time, in input order.
///
/// Each `next()` decodes and classifies exactly one input. A failure is
/// reported in that image's outcome and the remaining inputs still run.
pub struct BatchAnalysis<'a, I> {
    inputs: I,
    classifier: &'a dyn ImageClassifier,
    index: usize,
}

impl<I> Iterator for BatchAnalysis<'_, I>
where
    I: Iterator<Item = ImageInput>,
{
    type Item = ImageOutcome;

    fn next(&mut self) -> Option<ImageOutcome> {
        let input = self.inputs.next()?;
        let index = self.index;
        self.index += 1;

        debug!(index, name = %input.name(), "Analyzing image");
        let outcome = analyze_input(index, &input, self.classifier);

        if let Err(e) = &outcome.result {
            warn!(name = %outcome.name, "Image failed: {}", e);
        }

        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inputs.size_hint()
    }
}

pub fn analyze_batch<I>(inputs: I, classifier: &dyn ImageClassifier) -> BatchAnalysis<'_, I::IntoIter>
where
    I: IntoIterator<Item = ImageInput>,
{
    BatchAnalysis {
        inputs: inputs.into_iter(),
        classifier,
        index: 0,
    }
}

fn analyze_input(index: usize, input: &ImageInput, classifier: &dyn ImageClassifier) -> ImageOutcome {
    let (dimensions, result) = match input.decode() {
        Ok(image) => (Some(image.dimensions()), analyze(&image, classifier)),
        Err(e) => (None, Err(e)),
    };

    ImageOutcome {
        index,
        name: input.name(),
        stem: input.stem(),
        dimensions,
        result,
    }
}
