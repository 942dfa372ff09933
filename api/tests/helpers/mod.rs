#![allow(dead_code)]

use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum_test::TestServer;
use clap::Parser;
use foodhealth_api::{
    application::http::server::{app_state::AppState, http_server::router_with_metrics},
    args::Args,
};
use foodhealth_core::{
    application::ClassifierAdapter,
    domain::{
        classification::{
            entities::DEFAULT_TOP_K,
            ports::InferenceModel,
            value_objects::{LabelMapping, ModelMetadata},
        },
        common::{entities::app_errors::CoreError, services::Service},
        health_index::value_objects::HealthIndexConfig,
        image::value_objects::ImageTensor,
        prediction::value_objects::PredictionConfig,
    },
    infrastructure::{image::ImageNetPreprocessor, nutrition::InMemoryNutritionTable},
};
use image::{ImageFormat, Rgb, RgbImage};

pub const LABELS: [&str; 6] = ["Waffles", "Pancakes", "Sushi", "Ramen", "Unknown Dish", "Pizza"];

/// Returns `ln(p)` for each configured probability so softmax reproduces them exactly.
pub struct FixedProbabilityModel {
    logits: Vec<f32>,
    calls: Arc<AtomicUsize>,
}

impl FixedProbabilityModel {
    pub fn new(probabilities: &[f32]) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = Self {
            logits: probabilities.iter().map(|p| p.ln()).collect(),
            calls: Arc::clone(&calls),
        };
        (model, calls)
    }
}

impl InferenceModel for FixedProbabilityModel {
    fn infer(&self, input: &ImageTensor) -> Result<Vec<f32>, CoreError> {
        assert_eq!(input.shape(), [1, 3, 224, 224]);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.logits.clone())
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub inference_calls: Arc<AtomicUsize>,
}

pub fn test_app(probabilities: &[f32]) -> TestApp {
    test_app_with_args(probabilities, &[])
}

pub fn test_app_with_args(probabilities: &[f32], extra_args: &[&str]) -> TestApp {
    let args = Args::parse_from(std::iter::once("foodhealth-api").chain(extra_args.iter().copied()));

    let (model, inference_calls) = FixedProbabilityModel::new(probabilities);
    let classifier = ClassifierAdapter::new(
        Arc::new(model),
        LabelMapping::new(LABELS.iter().map(|l| l.to_string()).collect()),
        ModelMetadata {
            model_type: Some("efficientnet_b0".to_string()),
            num_classes: Some(LABELS.len()),
            best_accuracy: Some(78.04),
        },
        DEFAULT_TOP_K,
        224,
    );

    let prediction = PredictionConfig {
        confidence_threshold: args.inference.confidence_threshold,
        ..PredictionConfig::default()
    };

    let service = Service::new(
        ImageNetPreprocessor::default(),
        classifier,
        InMemoryNutritionTable::builtin(),
        prediction,
        HealthIndexConfig::default(),
    );

    let state = AppState::new(Arc::new(args), service);
    let router = router_with_metrics(state, false).unwrap();

    TestApp {
        server: TestServer::new(router).unwrap(),
        inference_calls,
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([180, 120, 60]));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}
