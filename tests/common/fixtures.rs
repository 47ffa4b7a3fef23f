use image::{ImageBuffer, Rgb};
use snaplabel::{Classification, ImageClassifier, ModelProvider, StaticClassifier};
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Creates a 100x80 red test image with the given suffix and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image(suffix: &str) -> NamedTempFile {
    let format = if suffix.ends_with("png") {
        image::ImageFormat::Png
    } else {
        image::ImageFormat::Jpeg
    };
    create_test_image_as(suffix, format)
}

/// Like `create_test_image`, but the encoding is chosen independently of the name
pub fn create_test_image_as(suffix: &str, format: image::ImageFormat) -> NamedTempFile {
    let img = ImageBuffer::from_fn(100, 80, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), format)
        .expect("Failed to save test image");
    file
}

/// Creates a file with the given suffix whose bytes are not an image
pub fn create_corrupt_image(suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"not really an image").expect("Failed to write temp file");
    file
}

/// PNG-encoded bytes of a small gray image, as a camera would deliver them
pub fn png_bytes() -> Vec<u8> {
    let img = ImageBuffer::from_pixel(32, 24, Rgb([128u8, 128u8, 128u8]));
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode png");
    bytes
}

/// Typical top-5 output for a dog photo
pub fn retriever_result() -> Vec<Classification> {
    vec![
        Classification::new("golden retriever", 0.87),
        Classification::new("Labrador retriever", 0.06),
        Classification::new("kuvasz", 0.03),
        Classification::new("tennis ball", 0.02),
        Classification::new("cocker spaniel, English cocker spaniel, cocker", 0.01),
    ]
}

/// Provider that hands out the given classifier without touching disk
pub fn static_provider(classifier: Arc<StaticClassifier>) -> ModelProvider {
    ModelProvider::new(move || Ok(classifier.clone() as Arc<dyn ImageClassifier>))
}

pub fn input_for(path: &Path) -> snaplabel::ImageInput {
    snaplabel::ImageInput::file(path)
}
