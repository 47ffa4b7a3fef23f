use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading the model or classifying a single image
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Model files not found. Expected locations:\n  - {}\n  - {}", .model.display(), .labels.display())]
    ModelMissing { model: PathBuf, labels: PathBuf },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported image format for {name} (expected jpg, jpeg or png)")]
    UnsupportedFormat { name: String },
}

impl ClassifyError {
    /// Whether this error means the classifier itself is unavailable
    pub fn is_model_load(&self) -> bool {
        matches!(self, Self::ModelLoad(_) | Self::ModelMissing { .. })
    }
}
