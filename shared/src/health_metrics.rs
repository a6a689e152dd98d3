//! Health metrics formulas module
//!
//! Provides the physiological formulas and lookup tables behind the macro
//! calculator: BMR equations, activity multipliers, calorie adjustments and
//! per-kilogram macro targets.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Type Safety**: Enums instead of strings for every categorical input

use serde::{Deserialize, Serialize};

// ============================================================================
// Categorical Inputs
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Lowest daily intake the calculator will ever recommend
    pub fn minimum_safe_calories(&self) -> u32 {
        match self {
            BiologicalSex::Male => 1500,
            BiologicalSex::Female => 1200,
        }
    }
}

/// What the user wants to achieve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
}

/// How hard to push the calorie deficit or surplus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    #[default]
    Moderate,
    Aggressive,
}

/// Perceived intensity of training sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingIntensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl TrainingIntensity {
    /// Offset added to the frequency-based activity multiplier
    pub fn multiplier_adjustment(&self) -> f64 {
        match self {
            TrainingIntensity::Low => -0.05,
            TrainingIntensity::Moderate => 0.0,
            TrainingIntensity::High => 0.1,
        }
    }
}

// ============================================================================
// BMR Calculations
// ============================================================================

/// BMR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrMethod {
    /// Mifflin-St Jeor (default when body fat is unknown)
    MifflinStJeor,
    /// Katch-McArdle (requires body fat %, most accurate if available)
    KatchMcArdle,
}

impl BmrMethod {
    /// Pick the equation for the given body fat percentage.
    ///
    /// Katch-McArdle is only trusted for body fat strictly between 0 and 50%.
    pub fn select(body_fat_percentage: Option<f64>) -> Self {
        match body_fat_percentage {
            Some(bf) if bf > 0.0 && bf < 50.0 => BmrMethod::KatchMcArdle,
            _ => BmrMethod::MifflinStJeor,
        }
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR using Katch-McArdle equation (requires lean body mass)
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
pub fn calculate_bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}

// ============================================================================
// Activity Multipliers
// ============================================================================

/// Base multipliers indexed by weekly training sessions (0..=7)
const BASE_ACTIVITY_MULTIPLIERS: [f64; 8] = [1.2, 1.3, 1.375, 1.465, 1.55, 1.65, 1.725, 1.9];

/// Look up the base multiplier; frequencies above 7 use the 7-session value
pub fn base_activity_multiplier(training_frequency: u32) -> f64 {
    let index = training_frequency.min(7) as usize;
    BASE_ACTIVITY_MULTIPLIERS[index]
}

/// Activity multiplier for TDEE: frequency table plus intensity offset.
///
/// The result is not clamped, so 0 sessions at high intensity gives 1.30.
pub fn activity_multiplier(training_frequency: u32, intensity: TrainingIntensity) -> f64 {
    base_activity_multiplier(training_frequency) + intensity.multiplier_adjustment()
}

// ============================================================================
// Energy Targets
// ============================================================================

/// Fraction of TDEE added (surplus) or removed (deficit) for a goal
pub fn calorie_adjustment_ratio(goal: Goal, approach: Approach) -> f64 {
    match (goal, approach) {
        (Goal::WeightLoss, Approach::Moderate) => -0.18,
        (Goal::WeightLoss, Approach::Aggressive) => -0.28,
        (Goal::MuscleGain, Approach::Moderate) => 0.12,
        (Goal::MuscleGain, Approach::Aggressive) => 0.22,
    }
}

// ============================================================================
// Macro Targets
// ============================================================================

/// Protein target in g/kg of body weight (Morton et al., 2018)
pub fn protein_per_kg(goal: Goal, approach: Approach, intensity: TrainingIntensity) -> f64 {
    let mut grams = match (goal, approach) {
        (Goal::MuscleGain, Approach::Moderate) => 1.8,
        (Goal::MuscleGain, Approach::Aggressive) => 2.2,
        (Goal::WeightLoss, Approach::Moderate) => 2.0,
        (Goal::WeightLoss, Approach::Aggressive) => 2.4,
    };

    match intensity {
        TrainingIntensity::High => grams += 0.1,
        TrainingIntensity::Low => grams -= 0.1,
        TrainingIntensity::Moderate => {}
    }

    grams
}

/// Fat target in g/kg of body weight
pub fn fat_per_kg(goal: Goal, approach: Approach) -> f64 {
    match (goal, approach) {
        (Goal::WeightLoss, Approach::Moderate) => 0.9,
        (Goal::WeightLoss, Approach::Aggressive) => 0.7,
        (Goal::MuscleGain, Approach::Moderate) => 1.0,
        (Goal::MuscleGain, Approach::Aggressive) => 1.1,
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer with ties going towards positive infinity.
///
/// `f64::round` sends -2.5 to -3; this sends it to -2.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    round_half_up(value * factor) / factor
}
