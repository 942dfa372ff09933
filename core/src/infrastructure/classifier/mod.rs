pub mod loader;
pub mod onnx_model;

pub use loader::*;
pub use onnx_model::*;
