//! API request and response types
//!
//! Field names are camelCase on the wire so existing front ends can post the
//! same JSON they always have.

use crate::health_metrics::{Approach, BiologicalSex, Goal, TrainingIntensity};
use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Default weekly sessions when the request leaves it out
pub const DEFAULT_TRAINING_FREQUENCY: u32 = 4;

/// Raw calculation request as received from a client.
///
/// Required fields are optional here so that absence can be reported as
/// incomplete data rather than a parse failure. Training fields fall back to
/// 4 sessions, moderate intensity and a moderate approach. Range checks run through
/// `validator`; see [`crate::validation::validate_calculation_request`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150 years"))]
    pub age: Option<u32>,
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight: Option<f64>,
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sex: Option<BiologicalSex>,
    pub body_fat_percentage: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub goal: Option<Goal>,
    pub training_frequency: Option<u32>,
    pub training_intensity: Option<TrainingIntensity>,
    pub approach: Option<Approach>,
}

/// Treat `""` like an absent value so an unselected form field reads as
/// missing rather than as an unknown variant
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}

/// Validated input to the macro calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    pub sex: BiologicalSex,
    /// Switches BMR to Katch-McArdle when in (0, 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    pub goal: Goal,
    /// Training sessions per week
    pub training_frequency: u32,
    pub training_intensity: TrainingIntensity,
    pub approach: Approach,
}

/// Daily macronutrient split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroDistribution {
    /// Grams of protein
    pub protein: u32,
    /// Grams of carbohydrate
    pub carbs: u32,
    /// Grams of fat
    pub fats: u32,
    pub protein_calories: u32,
    pub carbs_calories: u32,
    pub fats_calories: u32,
    pub protein_percentage: u32,
    pub carbs_percentage: u32,
    pub fats_percentage: u32,
}

impl MacroDistribution {
    /// Energy of the split itself, which can exceed the calorie target
    pub fn total_calories(&self) -> u32 {
        self.protein_calories + self.carbs_calories + self.fats_calories
    }
}

/// Human-readable explanation of how the numbers were derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Methodology {
    pub bmr_formula: String,
    pub protein_rationale: String,
    pub calorie_rationale: String,
}

/// Full calculator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub bmr: u32,
    pub tdee: u32,
    pub target_calories: u32,
    pub macros: MacroDistribution,
    /// Rounded to two decimals
    pub activity_multiplier: f64,
    /// Negative for a deficit, positive for a surplus
    pub calorie_adjustment: i32,
    pub methodology: Methodology,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A citation backing one of the formulas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScientificReference {
    pub name: String,
    pub source: String,
    pub description: String,
}

/// Response of the info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub references: Vec<ScientificReference>,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
