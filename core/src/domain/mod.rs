pub mod classification;
pub mod common;
pub mod health;
pub mod health_index;
pub mod image;
pub mod nutrition;
pub mod prediction;
