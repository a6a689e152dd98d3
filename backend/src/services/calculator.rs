//! Calculator service - validates requests and runs the macro calculator

use crate::error::ApiError;
use nutricalc_shared::types::{CalculationRequest, CalculationResult};
use nutricalc_shared::{calculate_macros, validate_calculation_request, CalculationError};
use tracing::{debug, info, instrument, warn};

/// Calculator service for macro calculations
pub struct CalculatorService;

impl CalculatorService {
    /// Validate a raw request and calculate the result.
    ///
    /// Rejected input never reaches the calculator; warnings in the result
    /// are advisory and do not turn into errors.
    #[instrument(skip(req), fields(goal = ?req.goal, sex = ?req.sex))]
    pub fn calculate(req: &CalculationRequest) -> Result<CalculationResult, ApiError> {
        let input = validate_calculation_request(req).map_err(|err| {
            match &err {
                CalculationError::IncompleteData { missing } => {
                    debug!(?missing, "Rejected incomplete calculation request");
                }
                other => debug!(error = %other, "Rejected invalid calculation request"),
            }
            ApiError::from(err)
        })?;

        let result = calculate_macros(&input)?;

        if !result.warnings.is_empty() {
            warn!(count = result.warnings.len(), "Calculation produced warnings");
        }
        info!(
            bmr = result.bmr,
            tdee = result.tdee,
            target_calories = result.target_calories,
            "Calculation completed"
        );

        Ok(result)
    }
}
