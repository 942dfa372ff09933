use crate::domain::{
    health_index::value_objects::{HealthAssessment, HealthIndexConfig, HealthTier},
    nutrition::entities::NutritionRecord,
};

pub fn compute_health_index(nutrition: &NutritionRecord) -> HealthAssessment {
    compute_health_index_with(nutrition, &HealthIndexConfig::default())
}

pub fn compute_health_index_with(
    nutrition: &NutritionRecord,
    config: &HealthIndexConfig,
) -> HealthAssessment {
    let excess_calories = (nutrition.calories - config.calorie_baseline).max(0.0);

    let raw = config.base + config.protein_weight * nutrition.protein_g
        - config.fat_weight * nutrition.fat_g
        - config.sugar_weight * nutrition.sugar_g
        - config.calorie_weight * excess_calories;

    let score = round_to_tenth(raw.clamp(config.min_score, config.max_score));

    // Tier on the rounded score so the displayed value and color always agree.
    let tier = if score >= config.green_threshold {
        HealthTier::Green
    } else if score >= config.yellow_threshold {
        HealthTier::Yellow
    } else {
        HealthTier::Red
    };

    HealthAssessment {
        score,
        tier,
        color: tier.color().to_string(),
        message: tier.message().to_string(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
