//! NutriCalc WASM Module
//!
//! This crate provides WebAssembly bindings so the calculator can run in the
//! browser without a round trip to the backend.

use nutricalc_shared::types::CalculationRequest;
use nutricalc_shared::{
    calculate_bmr_katch_mcardle, calculate_bmr_mifflin, BiologicalSex, BmrMethod,
    TrainingIntensity,
};
use wasm_bindgen::prelude::*;

/// Validate and calculate from request JSON, returning result JSON
fn calculate_json(input_json: &str) -> Result<String, String> {
    let req: CalculationRequest =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid request: {}", e))?;
    let input =
        nutricalc_shared::validate_calculation_request(&req).map_err(|e| e.to_string())?;
    let result = nutricalc_shared::calculate_macros(&input).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

/// Run the full macro calculation on a JSON request
#[wasm_bindgen]
pub fn calculate_macros(input_json: &str) -> Result<String, JsError> {
    calculate_json(input_json).map_err(|e| JsError::new(&e))
}

/// API name, version and references as JSON
#[wasm_bindgen]
pub fn api_info() -> String {
    serde_json::to_string(&nutricalc_shared::api_info()).unwrap_or_default()
}

/// Calculate BMR (rounded up), using Katch-McArdle when body fat is in (0, 50).
/// Pass a body fat of 0 when it is unknown.
#[wasm_bindgen]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    body_fat_percent: f64,
) -> f64 {
    let bmr = match BmrMethod::select(Some(body_fat_percent)) {
        BmrMethod::KatchMcArdle => calculate_bmr_katch_mcardle(weight_kg, body_fat_percent),
        BmrMethod::MifflinStJeor => {
            let sex = if is_male {
                BiologicalSex::Male
            } else {
                BiologicalSex::Female
            };
            calculate_bmr_mifflin(weight_kg, height_cm, age_years, sex)
        }
    };
    bmr.ceil()
}

/// Activity multiplier for weekly sessions and intensity ("low", "moderate", "high").
/// Unknown intensities are treated as moderate.
#[wasm_bindgen]
pub fn activity_multiplier(training_frequency: u32, intensity: &str) -> f64 {
    let intensity = match intensity {
        "low" => TrainingIntensity::Low,
        "high" => TrainingIntensity::High,
        _ => TrainingIntensity::Moderate,
    };
    nutricalc_shared::activity_multiplier(training_frequency, intensity)
}
