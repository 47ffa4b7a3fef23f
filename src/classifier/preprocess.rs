use image::{imageops, DynamicImage};
use rten_tensor::NdTensor;

use crate::config::ModelConfig;

/// Resize to the model's square input and build a normalized NCHW tensor
pub fn image_to_tensor(image: &DynamicImage, config: &ModelConfig) -> NdTensor<f32, 4> {
    let size = config.input_size;
    let resized = image.resize_exact(size, size, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let plane = (size * size) as usize;
    let mut data = vec![0.0f32; 3 * plane];

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let offset = (y * size + x) as usize;
        for c in 0..3 {
            let value = pixel[c] as f32 / 255.0;
            data[c * plane + offset] = (value - config.mean[c]) / config.std[c];
        }
    }

    NdTensor::from_data([1, 3, size as usize, size as usize], data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use rten_tensor::prelude::*;
    use std::path::Path;

    fn config(size: u32) -> ModelConfig {
        let mut config = ModelConfig::in_dir(Path::new("/unused"));
        config.input_size = size;
        config
    }

    #[test]
    fn test_tensor_shape() {
        let img = ImageBuffer::from_pixel(100, 60, Rgb([255u8, 0, 0]));
        let tensor = image_to_tensor(&DynamicImage::ImageRgb8(img), &config(32));
        assert_eq!(tensor.shape(), [1, 3, 32, 32]);
    }

    #[test]
    fn test_channels_are_normalized() {
        // Red becomes 1.0, green and blue become -1.0 with mean/std 0.5
        let img = ImageBuffer::from_pixel(16, 16, Rgb([255u8, 0, 0]));
        let tensor = image_to_tensor(&DynamicImage::ImageRgb8(img), &config(16));
        let values = tensor.to_vec();

        let plane = 16 * 16;
        assert!((values[0] - 1.0).abs() < 1e-6);
        assert!((values[plane] + 1.0).abs() < 1e-6);
        assert!((values[2 * plane] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mid_gray_is_near_zero() {
        let img = ImageBuffer::from_pixel(8, 8, Rgb([128u8, 128, 128]));
        let tensor = image_to_tensor(&DynamicImage::ImageRgb8(img), &config(8));
        let expected = (128.0 / 255.0 - 0.5) / 0.5;
        assert!(tensor.iter().all(|v| (v - expected).abs() < 1e-4));
    }
}
