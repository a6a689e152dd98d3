//! Scientific references behind the calculator formulas

use crate::types::{ApiInfo, ScientificReference};

pub const API_NAME: &str = "NutriCalc Pro API";
pub const API_VERSION: &str = "1.0.0";

const REFERENCES: [(&str, &str, &str); 4] = [
    (
        "Mifflin-St Jeor Equation",
        "Mifflin MD, et al. A new predictive equation for resting energy expenditure in healthy individuals. Am J Clin Nutr. 1990;51(2):241-247.",
        "Most accurate formula for estimating BMR according to a systematic review published in the Journal of the American Dietetic Association (2005).",
    ),
    (
        "Katch-McArdle Formula",
        "McArdle WD, Katch FI, Katch VL. Exercise Physiology: Nutrition, Energy, and Human Performance. 8th ed.",
        "Formula used when body fat percentage is known, based on lean body mass.",
    ),
    (
        "Protein Recommendations",
        "Morton RW, et al. A systematic review, meta-analysis and meta-regression of the effect of protein supplementation on resistance training-induced gains in muscle mass and strength in healthy adults. Br J Sports Med. 2018;52(6):376-384.",
        "Meta-analysis establishing protein recommendations for muscle hypertrophy.",
    ),
    (
        "Activity Multipliers",
        "Harris JA, Benedict FG. A Biometric Study of Human Basal Metabolism. Proc Natl Acad Sci USA. 1918;4(12):370-373.",
        "Physical activity multipliers used to calculate TDEE.",
    ),
];

/// The four citations, in display order
pub fn scientific_references() -> Vec<ScientificReference> {
    REFERENCES
        .iter()
        .map(|(name, source, description)| ScientificReference {
            name: name.to_string(),
            source: source.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Static payload for the info endpoint
pub fn api_info() -> ApiInfo {
    ApiInfo {
        name: API_NAME.to_string(),
        version: API_VERSION.to_string(),
        references: scientific_references(),
    }
}
