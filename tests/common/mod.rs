mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from snaplabel for tests
pub use snaplabel::{
    Classification, ClassifyError, ImageClassifier, ImageInput, ModelProvider,
    StaticClassifier,
};
