use std::path::Path;

use crate::error::ClassifyError;

/// Load class names, one per line. Line index is the class index.
pub fn load_labels(path: &Path) -> Result<Vec<String>, ClassifyError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ClassifyError::ModelLoad(format!("cannot read labels {}: {}", path.display(), e))
    })?;

    let labels = parse_labels(&contents);
    if labels.is_empty() {
        return Err(ClassifyError::ModelLoad(format!(
            "label file {} is empty",
            path.display()
        )));
    }

    Ok(labels)
}

pub fn parse_labels(contents: &str) -> Vec<String> {
    let mut labels: Vec<String> = contents.lines().map(|l| l.trim().to_string()).collect();

    // Trailing blank lines carry no class
    while labels.last().is_some_and(|l| l.is_empty()) {
        labels.pop();
    }

    labels
}

/// Label for a class index, `LABEL_<n>` when the file has no entry for it
pub fn label_for(labels: &[String], index: usize) -> String {
    match labels.get(index) {
        Some(label) if !label.is_empty() => label.clone(),
        _ => format!("LABEL_{}", index),
    }
}
