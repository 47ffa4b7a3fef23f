use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use crate::classifier::{ImageClassifier, RtenClassifier};
use crate::config::ModelConfig;
use crate::error::ClassifyError;

type Loader = Box<dyn Fn() -> Result<Arc<dyn ImageClassifier>, ClassifyError> + Send + Sync>;

/// Hands out one shared classifier, built on first use and reused afterwards
pub struct ModelProvider {
    loader: Loader,
    // Lazy-initialized classifier; the Arc is cloned out so the lock is
    // never held during inference
    classifier: Mutex<Option<Arc<dyn ImageClassifier>>>,
}

impl ModelProvider {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn ImageClassifier>, ClassifyError> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            classifier: Mutex::new(None),
        }
    }

    /// Provider backed by the rten model described by `config`
    pub fn from_config(config: ModelConfig) -> Self {
        Self::new(move || {
            let classifier = RtenClassifier::load(&config)?;
            Ok(Arc::new(classifier) as Arc<dyn ImageClassifier>)
        })
    }

    /// Return the cached classifier, loading it on the first call.
    ///
    /// A failed load is returned as-is and leaves the cache empty.
    pub fn get_classifier(&self) -> Result<Arc<dyn ImageClassifier>, ClassifyError> {
        let mut guard = self
            .classifier
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(classifier) = guard.as_ref() {
            return Ok(classifier.clone());
        }

        debug!("Initializing classifier");
        let classifier = (self.loader)().inspect_err(|e| error!("Model load failed: {}", e))?;
        *guard = Some(classifier.clone());

        Ok(classifier)
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
