//! NutriCalc Shared Library
//!
//! This crate contains the calculator, its types and validation, shared by
//! the backend and WASM modules.

pub mod calculator;
pub mod errors;
pub mod health_metrics;
pub mod references;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use calculator::{calculate_macro_distribution, calculate_macros};
pub use errors::*;
pub use health_metrics::*;
pub use references::{api_info, scientific_references};
pub use types::*;
pub use validation::validate_calculation_request;
