//! Input validation functions
//!
//! Turns a raw [`CalculationRequest`] into a [`CalculationInput`]. Presence is
//! checked by hand so every missing field can be named; plausibility ranges
//! come from the `validator` derive on the request type.

use crate::errors::CalculationError;
use crate::types::{CalculationInput, CalculationRequest, DEFAULT_TRAINING_FREQUENCY};
use validator::Validate;

/// Fields that must be present and non-zero, in reporting order
pub const REQUIRED_FIELDS: &[&str] = &["age", "weight", "height", "sex", "goal"];

/// Collect required fields that are absent or zero
pub fn missing_required_fields(req: &CalculationRequest) -> Vec<&'static str> {
    let present = [
        req.age.is_some_and(|age| age != 0),
        req.weight.is_some_and(|weight| weight != 0.0),
        req.height.is_some_and(|height| height != 0.0),
        req.sex.is_some(),
        req.goal.is_some(),
    ];

    REQUIRED_FIELDS
        .iter()
        .zip(present)
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| *field)
        .collect()
}

/// Validate a request and fill in training defaults
pub fn validate_calculation_request(
    req: &CalculationRequest,
) -> Result<CalculationInput, CalculationError> {
    let missing = missing_required_fields(req);
    if !missing.is_empty() {
        return Err(CalculationError::IncompleteData { missing });
    }

    if let Err(errors) = req.validate() {
        let field_errors = errors.field_errors();
        let mut fields: Vec<String> = field_errors.keys().map(|k| k.to_string()).collect();
        fields.sort();

        let field = fields.into_iter().next().unwrap_or_default();
        let message = field_errors
            .iter()
            .find(|(name, _)| name.to_string() == field)
            .and_then(|(_, errs)| errs.first())
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Invalid value".to_string());

        return Err(CalculationError::Validation { field, message });
    }

    match (req.age, req.weight, req.height, req.sex, req.goal) {
        (Some(age), Some(weight), Some(height), Some(sex), Some(goal)) => Ok(CalculationInput {
            age,
            weight,
            height,
            sex,
            body_fat_percentage: req.body_fat_percentage,
            goal,
            training_frequency: req.training_frequency.unwrap_or(DEFAULT_TRAINING_FREQUENCY),
            training_intensity: req.training_intensity.unwrap_or_default(),
            approach: req.approach.unwrap_or_default(),
        }),
        // Presence was checked above
        _ => Err(CalculationError::IncompleteData {
            missing: REQUIRED_FIELDS.to_vec(),
        }),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map request field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "weight" => "Weight",
        "height" => "Height",
        "sex" => "Biological Sex",
        "goal" => "Goal",
        "bodyFatPercentage" | "body_fat_percentage" => "Body Fat Percentage",
        "trainingFrequency" | "training_frequency" => "Training Frequency",
        "trainingIntensity" | "training_intensity" => "Training Intensity",
        "approach" => "Approach",
        _ => field_name,
    }
}
