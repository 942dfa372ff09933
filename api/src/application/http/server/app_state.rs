use std::sync::Arc;

use foodhealth_core::application::FoodHealthService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodHealthService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodHealthService) -> Self {
        Self { args, service }
    }
}
