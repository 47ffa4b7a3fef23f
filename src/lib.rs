pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod runner;

pub use analysis::{analyze, analyze_batch, BatchSummary, ImageOutcome};
pub use classifier::{ImageClassifier, ModelProvider, RtenClassifier, StaticClassifier};
pub use config::ModelConfig;
pub use error::ClassifyError;
pub use input::ImageInput;
pub use models::{ChartRow, Classification, ClassificationResult, DisplayRecord};
pub use render::Renderer;
pub use runner::run_batch;
