use image::{RgbImage, imageops::FilterType};
use ndarray::Array4;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{ports::ImagePreprocessor, value_objects::{ImageTensor, PreprocessConfig}},
};

/// Resize shorter side, center crop, normalize. Matches the ImageNet eval transform.
#[derive(Debug, Clone, Default)]
pub struct ImageNetPreprocessor {
    config: PreprocessConfig,
}

impl ImageNetPreprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Square window of the source image that survives "resize shorter side, then center
    /// crop", as `(x, y, side)`. Only this window is ever resized.
    fn crop_window(&self, width: u32, height: u32) -> (u32, u32, u32) {
        let shorter = width.min(height);
        let target = self.config.resize_shorter_side.max(self.config.crop_size);

        let side = (f64::from(shorter) * f64::from(self.config.crop_size) / f64::from(target))
            .round()
            .clamp(1.0, f64::from(shorter)) as u32;

        ((width - side) / 2, (height - side) / 2, side)
    }

    fn crop_and_resize(&self, image: &RgbImage) -> RgbImage {
        let (x, y, side) = self.crop_window(image.width(), image.height());
        let window = image::imageops::crop_imm(image, x, y, side, side).to_image();
        let size = self.config.crop_size;

        image::imageops::resize(&window, size, size, FilterType::Triangle)
    }

    fn normalize(&self, image: &RgbImage) -> Array4<f32> {
        let size = self.config.crop_size as usize;
        let mean = self.config.mean;
        let std = self.config.std;

        let mut tensor = Array4::<f32>::zeros((1, 3, size, size));
        for (x, y, pixel) in image.enumerate_pixels() {
            for channel in 0..3 {
                tensor[[0, channel, y as usize, x as usize]] =
                    (f32::from(pixel[channel]) / 255.0 - mean[channel]) / std[channel];
            }
        }

        tensor
    }
}

impl ImagePreprocessor for ImageNetPreprocessor {
    fn preprocess(&self, image_bytes: &[u8]) -> Result<ImageTensor, CoreError> {
        let decoded = image::load_from_memory(image_bytes).map_err(|e| {
            tracing::warn!("Failed to decode uploaded image: {}", e);
            CoreError::InvalidImage(e.to_string())
        })?;

        let rgb = decoded.to_rgb8();
        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(CoreError::InvalidImage("image has no pixels".to_string()));
        }

        let cropped = self.crop_and_resize(&rgb);

        Ok(ImageTensor::new(self.normalize(&cropped)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb};

    use super::*;
    use crate::domain::image::value_objects::{IMAGENET_MEAN, IMAGENET_STD};

    fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_output_shape() {
        let preprocessor = ImageNetPreprocessor::default();
        for (width, height) in [(640, 480), (300, 900), (224, 224), (10, 10)] {
            let bytes = encode(&solid(width, height, [10, 20, 30]), ImageFormat::Png);
            let tensor = preprocessor.preprocess(&bytes).unwrap();
            assert_eq!(tensor.shape(), [1, 3, 224, 224]);
        }
    }

    #[test]
    fn test_imagenet_normalization() {
        let preprocessor = ImageNetPreprocessor::default();
        let bytes = encode(&solid(320, 240, [255, 0, 128]), ImageFormat::Png);

        let tensor = preprocessor.preprocess(&bytes).unwrap();
        let array = tensor.as_array();

        let expected = [
            (1.0 - IMAGENET_MEAN[0]) / IMAGENET_STD[0],
            (0.0 - IMAGENET_MEAN[1]) / IMAGENET_STD[1],
            (128.0 / 255.0 - IMAGENET_MEAN[2]) / IMAGENET_STD[2],
        ];
        for (channel, value) in expected.iter().enumerate() {
            assert!((array[[0, channel, 112, 112]] - value).abs() < 1e-4);
            assert!((array[[0, channel, 0, 223]] - value).abs() < 1e-4);
        }
    }

    #[test]
    fn test_center_crop_keeps_middle() {
        // Left third red, middle third green, right third blue
        let mut image = solid(768, 256, [255, 0, 0]);
        for (x, _, pixel) in image.enumerate_pixels_mut() {
            if x >= 512 {
                *pixel = Rgb([0, 0, 255]);
            } else if x >= 256 {
                *pixel = Rgb([0, 255, 0]);
            }
        }
        let bytes = encode(&image, ImageFormat::Png);

        let tensor = ImageNetPreprocessor::default().preprocess(&bytes).unwrap();
        let green = (1.0 - IMAGENET_MEAN[1]) / IMAGENET_STD[1];

        assert!((tensor.as_array()[[0, 1, 112, 0]] - green).abs() < 1e-4);
        assert!((tensor.as_array()[[0, 1, 112, 223]] - green).abs() < 1e-4);
    }

    #[test]
    fn test_crop_window_matches_resize_then_crop() {
        let preprocessor = ImageNetPreprocessor::default();

        // 512x1024 resizes to 256x512, the 224 crop maps back to 448 source pixels
        assert_eq!(preprocessor.crop_window(512, 1024), (32, 288, 448));
        assert_eq!(preprocessor.crop_window(256, 256), (16, 16, 224));
        assert_eq!(preprocessor.crop_window(10, 10), (0, 0, 9));
    }

    #[test]
    fn test_thin_image_stays_bounded() {
        let preprocessor = ImageNetPreprocessor::default();
        assert_eq!(preprocessor.crop_window(1, 4000), (0, 1999, 1));

        let bytes = encode(&solid(1, 4000, [90, 160, 30]), ImageFormat::Png);
        let started = std::time::Instant::now();
        let tensor = preprocessor.preprocess(&bytes).unwrap();

        assert_eq!(tensor.shape(), [1, 3, 224, 224]);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));

        let wide = encode(&solid(4000, 1, [90, 160, 30]), ImageFormat::Png);
        assert_eq!(preprocessor.preprocess(&wide).unwrap().shape(), [1, 3, 224, 224]);
    }

    #[test]
    fn test_decodes_jpeg() {
        let bytes = encode(&solid(400, 300, [200, 180, 90]), ImageFormat::Jpeg);
        let tensor = ImageNetPreprocessor::default().preprocess(&bytes).unwrap();
        assert_eq!(tensor.shape(), [1, 3, 224, 224]);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ImageNetPreprocessor::default()
            .preprocess(b"definitely not an image")
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidImage(_)));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(ImageNetPreprocessor::default().preprocess(&[]).is_err());
    }

    #[test]
    fn test_rejects_truncated_png() {
        let bytes = encode(&solid(64, 64, [1, 2, 3]), ImageFormat::Png);
        let truncated = &bytes[..bytes.len() / 2];
        assert!(ImageNetPreprocessor::default().preprocess(truncated).is_err());
    }
}
