use image::DynamicImage;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::classifier::ImageClassifier;
use crate::error::ClassifyError;
use crate::models::{Classification, ClassificationResult};

/// Classifier that returns a fixed result for every image.
/// Stands in for the real model in tests and demos.
pub struct StaticClassifier {
    result: Option<ClassificationResult>,
    calls: AtomicUsize,
}

impl StaticClassifier {
    pub fn new(result: ClassificationResult) -> Self {
        Self {
            result: Some(result),
            calls: AtomicUsize::new(0),
        }
    }

    /// Single top-1 entry followed by nothing else
    pub fn top1(label: &str, score: f32) -> Self {
        Self::new(vec![Classification::new(label, score)])
    }

    /// Classifier whose every call fails with an inference error
    pub fn failing() -> Self {
        Self {
            result: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `classify` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for StaticClassifier {
    fn classify(&self, _image: &DynamicImage) -> Result<ClassificationResult, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .ok_or_else(|| ClassifyError::Inference("static classifier configured to fail".into()))
    }
}
