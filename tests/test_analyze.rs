mod common;

use common::*;
use image::{DynamicImage, RgbImage};
use snaplabel::analysis::{analyze, display_record, DEFAULT_EMOJI};

fn blank_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(8, 8))
}

#[test]
fn test_golden_retriever_headline() -> anyhow::Result<()> {
    let classifier = StaticClassifier::new(retriever_result());
    let record = analyze(&blank_image(), &classifier)?;

    assert_eq!(record.label, "golden retriever");
    assert_eq!(record.emoji, "🐶");
    assert_eq!(record.headline(), "🐶 [golden retriever] (87.0%)");
    Ok(())
}

#[test]
fn test_scenario_emojis() -> anyhow::Result<()> {
    let cases = [
        ("Egyptian cat", 0.73, "🐱"),
        ("sports car", 0.55, "🚗"),
        ("espresso", 0.42, "☕"),
        ("space shuttle", 0.91, DEFAULT_EMOJI),
    ];

    for (label, score, emoji) in cases {
        let classifier = StaticClassifier::top1(label, score);
        let record = analyze(&blank_image(), &classifier)?;
        assert_eq!(record.emoji, emoji, "label {label}");
        assert_eq!(record.score, score);
    }
    Ok(())
}

#[test]
fn test_top_score_is_maximum() -> anyhow::Result<()> {
    // Unsorted input: the maximum still wins
    let results = vec![
        Classification::new("tabby, tabby cat", 0.2),
        Classification::new("tiger cat", 0.5),
        Classification::new("lynx, catamount", 0.3),
    ];
    let record = display_record(&results)?;

    let max = results.iter().map(|c| c.score).fold(f32::MIN, f32::max);
    assert_eq!(record.score, max);
    assert_eq!(record.label, "tiger cat");
    Ok(())
}

#[test]
fn test_ties_keep_first_entry() -> anyhow::Result<()> {
    let results = vec![
        Classification::new("espresso", 0.4),
        Classification::new("cup", 0.4),
        Classification::new("pizza", 0.2),
    ];
    let record = display_record(&results)?;
    assert_eq!(record.label, "espresso");
    Ok(())
}

#[test]
fn test_chart_preserves_order_and_scales_by_100() -> anyhow::Result<()> {
    let results = retriever_result();
    let record = display_record(&results)?;

    assert_eq!(record.chart.len(), results.len());
    for (row, raw) in record.chart.iter().zip(&results) {
        assert_eq!(row.label, raw.label);
        assert_eq!(row.percent, raw.score * 100.0);
    }
    Ok(())
}

#[test]
fn test_empty_result_is_inference_error() {
    let classifier = StaticClassifier::new(Vec::new());
    let err = analyze(&blank_image(), &classifier).unwrap_err();
    assert!(matches!(err, ClassifyError::Inference(_)));
}

#[test]
fn test_classifier_failure_is_inference_error() {
    let classifier = StaticClassifier::failing();
    let err = analyze(&blank_image(), &classifier).unwrap_err();
    assert!(matches!(err, ClassifyError::Inference(_)));
    assert_eq!(classifier.calls(), 1);
}
