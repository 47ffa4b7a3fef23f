use image::DynamicImage;
use rten::Model;
use rten_tensor::prelude::*;
use rten_tensor::NdTensor;
use std::time::Instant;
use tracing::{debug, info};

use crate::classifier::labels::{label_for, load_labels};
use crate::classifier::preprocess::image_to_tensor;
use crate::classifier::ImageClassifier;
use crate::config::ModelConfig;
use crate::error::ClassifyError;
use crate::models::{Classification, ClassificationResult};

/// ImageNet-style classifier running an rten model
pub struct RtenClassifier {
    model: Model,
    labels: Vec<String>,
    config: ModelConfig,
}

impl RtenClassifier {
    /// Load model weights and class names from the paths in `config`
    pub fn load(config: &ModelConfig) -> Result<Self, ClassifyError> {
        if !config.model_path.exists() || !config.labels_path.exists() {
            return Err(ClassifyError::ModelMissing {
                model: config.model_path.clone(),
                labels: config.labels_path.clone(),
            });
        }

        let started = Instant::now();
        info!(model = %config.model_id, path = %config.model_path.display(), "Loading model");

        let model = Model::load_file(&config.model_path).map_err(|e| {
            ClassifyError::ModelLoad(format!("{}: {}", config.model_path.display(), e))
        })?;
        let labels = load_labels(&config.labels_path)?;

        info!(
            classes = labels.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Model loaded"
        );

        Ok(Self {
            model,
            labels,
            config: config.clone(),
        })
    }
}

impl ImageClassifier for RtenClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifyError> {
        let input = image_to_tensor(image, &self.config);

        let started = Instant::now();
        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let logits: NdTensor<f32, 2> = output
            .try_into()
            .map_err(|e| ClassifyError::Inference(format!("unexpected model output: {:?}", e)))?;

        let [batch, classes] = logits.shape();
        if batch != 1 || classes == 0 {
            return Err(ClassifyError::Inference(format!(
                "expected logits of shape [1, C], got [{}, {}]",
                batch, classes
            )));
        }

        debug!(classes, elapsed_ms = started.elapsed().as_millis() as u64, "Inference done");

        let logits: Vec<f32> = logits.iter().copied().collect();
        Ok(rank(&softmax(&logits), &self.labels, self.config.top_k))
    }
}

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// Sort class probabilities descending and keep the top `top_k`
pub fn rank(probs: &[f32], labels: &[String], top_k: usize) -> ClassificationResult {
    let mut indexed: Vec<(usize, f32)> = probs.iter().copied().enumerate().collect();

    // Stable sort keeps lower class indices first on ties
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
    indexed.truncate(top_k);

    indexed
        .into_iter()
        .map(|(idx, score)| Classification::new(label_for(labels, idx), score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0, 1000.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs.iter().all(|p| *p >= 0.0));
        assert!(probs[3] > 0.99);
    }

    #[test]
    fn test_rank_orders_and_truncates() {
        let labels: Vec<String> = ["tench", "goldfish", "great white shark", "tiger shark"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ranked = rank(&[0.1, 0.6, 0.05, 0.25], &labels, 3);

        let names: Vec<&str> = ranked.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(names, vec!["goldfish", "tiger shark", "tench"]);
        assert_eq!(ranked[0].score, 0.6);
    }

    #[test]
    fn test_rank_uses_placeholder_for_unlabelled_class() {
        let ranked = rank(&[0.2, 0.8], &["only".to_string()], 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "LABEL_1");
    }

    #[test]
    fn test_load_reports_missing_files() {
        let config = ModelConfig::in_dir(std::path::Path::new("/nonexistent/snaplabel"));
        match RtenClassifier::load(&config) {
            Err(ClassifyError::ModelMissing { model, .. }) => {
                assert_eq!(model, config.model_path);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("load should fail without model files"),
        }
    }
}
