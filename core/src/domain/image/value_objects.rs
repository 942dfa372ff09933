use ndarray::Array4;

pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Target length of the shorter image side before cropping.
    pub resize_shorter_side: u32,
    /// Side of the square center crop fed to the classifier.
    pub crop_size: u32,
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            resize_shorter_side: 256,
            crop_size: 224,
            mean: IMAGENET_MEAN,
            std: IMAGENET_STD,
        }
    }
}

/// Normalized NCHW tensor with a batch of one.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor(Array4<f32>);

impl ImageTensor {
    pub fn new(array: Array4<f32>) -> Self {
        Self(array)
    }

    pub fn shape(&self) -> [usize; 4] {
        let (n, c, h, w) = self.0.dim();
        [n, c, h, w]
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.0
    }

    /// Values in row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.0.iter().copied().collect()
    }
}
