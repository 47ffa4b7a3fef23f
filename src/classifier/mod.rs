pub mod labels;
pub mod preprocess;
pub mod provider;
pub mod rten_model;
pub mod static_classifier;

use image::DynamicImage;

use crate::error::ClassifyError;
use crate::models::ClassificationResult;

pub use provider::ModelProvider;
pub use rten_model::RtenClassifier;
pub use static_classifier::StaticClassifier;

/// Maps a decoded image to a ranked list of (label, score) pairs
pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifyError>;
}
