use serde::Serialize;

/// One (label, score) pair returned by a classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub score: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Ranked classifier output for a single image, highest score first
pub type ClassificationResult = Vec<Classification>;

/// A chart bar: class label and its score scaled to percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub percent: f32,
}

/// Presentation data derived from one classification result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub label: String,
    pub score: f32,
    pub emoji: &'static str,
    pub chart: Vec<ChartRow>,
}

impl DisplayRecord {
    /// Top-1 score as a percentage
    pub fn percent(&self) -> f32 {
        self.score * 100.0
    }

    /// Success banner, e.g. `🐶 [golden retriever] (87.0%)`
    pub fn headline(&self) -> String {
        format!("{} [{}] ({:.1}%)", self.emoji, self.label, self.percent())
    }
}
