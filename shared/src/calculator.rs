//! Macro calculator
//!
//! Maps a validated [`CalculationInput`] to a [`CalculationResult`]:
//!
//! 1. BMR (Katch-McArdle when body fat is known, otherwise Mifflin-St Jeor)
//! 2. Activity multiplier from training frequency and intensity
//! 3. TDEE = BMR × multiplier
//! 4. Calorie target from goal and approach, floored at a sex-based minimum
//! 5. Protein and fat from g/kg targets, carbohydrates fill the remainder
//! 6. Rationale text, warnings and recommendations
//!
//! Rounding is part of the contract: BMR, TDEE, target and gram amounts are
//! rounded up, while the calorie adjustment and percentages round to nearest.

use crate::errors::CalculationError;
use crate::health_metrics::{
    activity_multiplier, calculate_bmr_katch_mcardle, calculate_bmr_mifflin,
    calorie_adjustment_ratio, fat_per_kg, protein_per_kg, round_half_up, round_to, Approach,
    BiologicalSex, BmrMethod, Goal, TrainingIntensity,
};
use crate::types::{CalculationInput, CalculationResult, MacroDistribution, Methodology};

/// Carbohydrate floor in grams, kept even when protein and fat use up the budget
pub const MIN_CARBS_G: f64 = 50.0;

const KCAL_PER_G_PROTEIN: u32 = 4;
const KCAL_PER_G_CARBS: u32 = 4;
const KCAL_PER_G_FAT: u32 = 9;

/// Training sessions per week below which more frequent training is suggested
const LOW_TRAINING_FREQUENCY: u32 = 3;

pub const MINOR_AGE_WARNING: &str =
    "Warning: this calculation is intended for adults. Please consult a pediatric nutritionist.";
pub const SENIOR_AGE_WARNING: &str =
    "Nutritional needs can vary for people over 65. Please consult a professional.";

pub const CONSULT_PROFESSIONAL: &str =
    "🏥 ALWAYS consult a nutritionist or doctor before starting any diet.";
pub const AGGRESSIVE_APPROACH_CAUTION: &str = "⚠️ You chose an aggressive approach. We strongly recommend the moderate approach as it is more sustainable and healthier in the long run.";
pub const LOW_FREQUENCY_SUGGESTION: &str =
    "📈 Consider training 3-4 times per week for better results.";

const WEIGHT_LOSS_TIPS: [&str; 3] = [
    "💧 Stay well hydrated - drink at least 35ml of water per kg of body weight.",
    "🥗 Prioritize whole, fiber-rich foods for greater satiety.",
    "😴 Sleep 7-9 hours per night - sleep is crucial for fat loss.",
];

const MUSCLE_GAIN_TIPS: [&str; 3] = [
    "🏋️ Focus on progressive overload in your training to stimulate hypertrophy.",
    "⏰ Spread your protein across the day (20-40g per meal).",
    "😴 Sleep 7-9 hours per night - muscle growth happens during rest.",
];

/// Warning pushed when the calorie target had to be raised to the safe minimum
pub fn safety_floor_warning(minimum: u32) -> String {
    format!(
        "⚠️ Calories were raised to the safe minimum of {} kcal. Very aggressive deficits can be harmful.",
        minimum
    )
}

/// Run the full calculation
pub fn calculate_macros(input: &CalculationInput) -> Result<CalculationResult, CalculationError> {
    let mut warnings = age_warnings(input.age);

    let method = BmrMethod::select(input.body_fat_percentage);
    let raw_bmr = match (method, input.body_fat_percentage) {
        (BmrMethod::KatchMcArdle, Some(body_fat)) => {
            calculate_bmr_katch_mcardle(input.weight, body_fat)
        }
        _ => calculate_bmr_mifflin(input.weight, input.height, input.age, input.sex),
    };
    let bmr = ensure_positive("bmr", ensure_finite("bmr", raw_bmr.ceil())?)?;

    let multiplier = activity_multiplier(input.training_frequency, input.training_intensity);
    let tdee = ensure_finite("tdee", (bmr * multiplier).ceil())?;

    let ratio = calorie_adjustment_ratio(input.goal, input.approach);
    let calorie_adjustment = ensure_finite("calorie adjustment", round_half_up(tdee * ratio))?;
    let mut target_calories = (tdee + calorie_adjustment).ceil() as u32;

    let minimum = input.sex.minimum_safe_calories();
    if target_calories < minimum {
        warnings.push(safety_floor_warning(minimum));
        target_calories = minimum;
    }

    let macros = calculate_macro_distribution(
        target_calories,
        input.weight,
        input.goal,
        input.approach,
        input.training_intensity,
    );

    let methodology = Methodology {
        bmr_formula: describe_bmr_formula(method, input),
        protein_rationale: protein_rationale(input.goal, macros.protein, input.weight),
        calorie_rationale: calorie_rationale(
            input.goal,
            input.approach,
            ratio,
            calorie_adjustment as i32,
        ),
    };

    Ok(CalculationResult {
        bmr: bmr as u32,
        tdee: tdee as u32,
        target_calories,
        macros,
        activity_multiplier: round_to(multiplier, 2),
        calorie_adjustment: calorie_adjustment as i32,
        methodology,
        warnings,
        recommendations: recommendations(input.goal, input.approach, input.training_frequency),
    })
}

/// Split a calorie target into protein, carbohydrate and fat
pub fn calculate_macro_distribution(
    target_calories: u32,
    weight_kg: f64,
    goal: Goal,
    approach: Approach,
    intensity: TrainingIntensity,
) -> MacroDistribution {
    let protein = (weight_kg * protein_per_kg(goal, approach, intensity)).ceil() as u32;
    let fats = (weight_kg * fat_per_kg(goal, approach)).ceil() as u32;

    let protein_calories = protein * KCAL_PER_G_PROTEIN;
    let fats_calories = fats * KCAL_PER_G_FAT;

    // Signed: protein and fat alone may exceed the target
    let remaining = target_calories as f64 - protein_calories as f64 - fats_calories as f64;
    let carbs = (remaining / KCAL_PER_G_CARBS as f64).max(MIN_CARBS_G).ceil() as u32;
    let carbs_calories = carbs * KCAL_PER_G_CARBS;

    let total = (protein_calories + carbs_calories + fats_calories) as f64;
    let share = |calories: u32| round_half_up(calories as f64 / total * 100.0) as u32;

    MacroDistribution {
        protein,
        carbs,
        fats,
        protein_calories,
        carbs_calories,
        fats_calories,
        protein_percentage: share(protein_calories),
        carbs_percentage: share(carbs_calories),
        fats_percentage: share(fats_calories),
    }
}

fn ensure_finite(what: &str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::Computation(format!("{} is not a finite number", what)))
    }
}

/// Extreme but in-range inputs can drive Mifflin-St Jeor below zero
fn ensure_positive(what: &str, value: f64) -> Result<f64, CalculationError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalculationError::Computation(format!(
            "{} must be positive, got {}",
            what, value
        )))
    }
}

fn age_warnings(age: u32) -> Vec<String> {
    let mut warnings = Vec::new();
    if age < 18 {
        warnings.push(MINOR_AGE_WARNING.to_string());
    }
    if age > 65 {
        warnings.push(SENIOR_AGE_WARNING.to_string());
    }
    warnings
}

fn describe_bmr_formula(method: BmrMethod, input: &CalculationInput) -> String {
    match method {
        BmrMethod::KatchMcArdle => format!(
            "Katch-McArdle (based on {}% body fat): BMR = 370 + (21.6 × lean mass)",
            input.body_fat_percentage.unwrap_or_default()
        ),
        BmrMethod::MifflinStJeor => {
            let sex_constant = match input.sex {
                BiologicalSex::Male => "+ 5",
                BiologicalSex::Female => "- 161",
            };
            format!(
                "Mifflin-St Jeor: BMR = (10 × {}) + (6.25 × {}) - (5 × {}) {}",
                input.weight, input.height, input.age, sex_constant
            )
        }
    }
}

fn protein_rationale(goal: Goal, protein_g: u32, weight_kg: f64) -> String {
    let per_kg = round_to(protein_g as f64 / weight_kg, 1);
    match goal {
        Goal::MuscleGain => format!(
            "{:.1}g/kg - based on Morton et al. (2018) to maximize muscle protein synthesis",
            per_kg
        ),
        Goal::WeightLoss => format!(
            "{:.1}g/kg - elevated protein to preserve lean mass during a calorie deficit",
            per_kg
        ),
    }
}

fn calorie_rationale(goal: Goal, approach: Approach, ratio: f64, adjustment: i32) -> String {
    let percent = round_half_up(ratio * 100.0).abs() as i32;
    match goal {
        Goal::WeightLoss => {
            let pace = match approach {
                Approach::Moderate => "gradual and sustainable",
                Approach::Aggressive => "faster",
            };
            format!(
                "{}% deficit ({} kcal) for {} weight loss",
                percent,
                adjustment.abs(),
                pace
            )
        }
        Goal::MuscleGain => {
            let pace = match approach {
                Approach::Moderate => "lean mass gain (lean bulk)",
                Approach::Aggressive => "faster mass gain",
            };
            format!("{}% surplus (+{} kcal) for {}", percent, adjustment, pace)
        }
    }
}

fn recommendations(goal: Goal, approach: Approach, training_frequency: u32) -> Vec<String> {
    let mut recommendations = vec![CONSULT_PROFESSIONAL.to_string()];

    if approach == Approach::Aggressive {
        recommendations.push(AGGRESSIVE_APPROACH_CAUTION.to_string());
    }

    let tips = match goal {
        Goal::WeightLoss => WEIGHT_LOSS_TIPS,
        Goal::MuscleGain => MUSCLE_GAIN_TIPS,
    };
    recommendations.extend(tips.iter().map(|tip| tip.to_string()));

    if training_frequency < LOW_TRAINING_FREQUENCY {
        recommendations.push(LOW_FREQUENCY_SUGGESTION.to_string());
    }

    recommendations
}
