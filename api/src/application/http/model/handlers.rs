pub mod get_classes;
pub mod get_model_status;
