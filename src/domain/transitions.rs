//! Stage transition logic
//!
//! Pure functions for applying stage transitions to vehicles.

use crate::errors::{Result, TallerError};
use crate::schemas::{Stage, Vehicle};

use super::validation::{validate_transition, ValidationContext};

/// Pure function that applies a stage transition to a vehicle.
///
/// This function:
/// - Never mutates the input vehicle
/// - Validates the transition against the vehicle's own budget
/// - Returns a new Vehicle with the target stage
/// - Returns `BudgetNotApproved` when the approval gate refuses
pub fn apply_stage_transition(vehicle: &Vehicle, target: Stage) -> Result<Vehicle> {
    let ctx = ValidationContext::for_vehicle(vehicle);
    let validation = validate_transition(vehicle.stage, target, &ctx);
    if !validation.valid {
        return Err(TallerError::BudgetNotApproved(vehicle.id.clone()));
    }

    Ok(vehicle.clone().with_stage(target))
}
