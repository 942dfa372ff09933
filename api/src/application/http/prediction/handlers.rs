pub mod predict_image;
