use std::path::{Path, PathBuf};

/// Identifier of the pretrained model the default files were exported from
pub const DEFAULT_MODEL_ID: &str = "google/vit-base-patch16-224";

const MODEL_FILE_NAME: &str = "vit-base-patch16-224.rten";
const LABELS_FILE_NAME: &str = "imagenet-labels.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_id: String,
    pub model_path: PathBuf,
    /// One class name per line, line index = class index
    pub labels_path: PathBuf,
    /// Square input edge in pixels
    pub input_size: u32,
    pub mean: [f32; 3],
    pub std: [f32; 3],
    /// Number of ranked classes kept per image
    pub top_k: usize,
}

impl ModelConfig {
    /// Config pointing at the standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            model_path: dir.join(MODEL_FILE_NAME),
            labels_path: dir.join(LABELS_FILE_NAME),
            input_size: 224,
            mean: [0.5, 0.5, 0.5],
            std: [0.5, 0.5, 0.5],
            top_k: 5,
        }
    }

    pub fn with_model_path(mut self, path: PathBuf) -> Self {
        self.model_path = path;
        self
    }

    pub fn with_labels_path(mut self, path: PathBuf) -> Self {
        self.labels_path = path;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }
}

/// Standard cache location for model files (`$HOME/.cache/snaplabel`)
pub fn default_cache_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());

    Path::new(&home).join(".cache/snaplabel")
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::in_dir(&default_cache_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_uses_standard_names() {
        let config = ModelConfig::in_dir(Path::new("/models"));
        assert_eq!(config.model_path, Path::new("/models/vit-base-patch16-224.rten"));
        assert_eq!(config.labels_path, Path::new("/models/imagenet-labels.txt"));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.input_size, 224);
    }

    #[test]
    fn test_top_k_is_at_least_one() {
        let config = ModelConfig::in_dir(Path::new("/models")).with_top_k(0);
        assert_eq!(config.top_k, 1);
    }
}
