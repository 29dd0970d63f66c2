//! Validation rules for stage transitions
//!
//! Exactly one edge is gated: diagnosis → execution requires an approved
//! budget. Every other move, including backward moves and skips, is allowed.

use crate::schemas::{Stage, Vehicle, VehicleBudget};

/// Context required for validating stage transitions
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Whether a budget is attached to the vehicle
    pub has_budget: bool,

    /// Whether the attached budget is approved
    pub budget_approved: bool,
}

impl ValidationContext {
    /// Build the context from a vehicle's attached budget
    pub fn for_budget(budget: Option<&VehicleBudget>) -> Self {
        ValidationContext {
            has_budget: budget.is_some(),
            budget_approved: budget.is_some_and(|b| b.is_approved),
        }
    }

    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self::for_budget(vehicle.budget.as_ref())
    }
}

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionBlock {
    /// No budget attached at all
    MissingBudget,
    /// Budget attached but not approved
    UnapprovedBudget,
}

impl std::fmt::Display for TransitionBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionBlock::MissingBudget => write!(f, "no budget attached"),
            TransitionBlock::UnapprovedBudget => write!(f, "budget not approved"),
        }
    }
}

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<TransitionBlock>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: TransitionBlock) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Whether moving from `current` to `target` crosses the approval gate
pub fn is_gated_edge(current: Stage, target: Stage) -> bool {
    current == Stage::Diagnosis && target == Stage::Execution
}

/// Validate entering execution from diagnosis
pub fn can_enter_execution(ctx: &ValidationContext) -> ValidationResult {
    if !ctx.has_budget {
        return ValidationResult::failure(TransitionBlock::MissingBudget);
    }
    if !ctx.budget_approved {
        return ValidationResult::failure(TransitionBlock::UnapprovedBudget);
    }
    ValidationResult::success()
}

/// Validate a stage transition
pub fn validate_transition(
    current: Stage,
    target: Stage,
    ctx: &ValidationContext,
) -> ValidationResult {
    if is_gated_edge(current, target) {
        return can_enter_execution(ctx);
    }
    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::STAGES;

    fn approved() -> ValidationContext {
        ValidationContext {
            has_budget: true,
            budget_approved: true,
        }
    }

    fn unapproved() -> ValidationContext {
        ValidationContext {
            has_budget: true,
            budget_approved: false,
        }
    }

    #[test]
    fn test_is_gated_edge() {
        assert!(is_gated_edge(Stage::Diagnosis, Stage::Execution));
        assert!(!is_gated_edge(Stage::Reception, Stage::Execution));
        assert!(!is_gated_edge(Stage::Execution, Stage::Diagnosis));
        assert!(!is_gated_edge(Stage::Diagnosis, Stage::Quality));
    }

    #[test]
    fn test_can_enter_execution() {
        assert!(can_enter_execution(&approved()).valid);
        assert_eq!(
            can_enter_execution(&ValidationContext::default()).reason,
            Some(TransitionBlock::MissingBudget)
        );
        assert_eq!(
            can_enter_execution(&unapproved()).reason,
            Some(TransitionBlock::UnapprovedBudget)
        );
    }

    #[test]
    fn test_gate_blocks_without_budget() {
        let result = validate_transition(
            Stage::Diagnosis,
            Stage::Execution,
            &ValidationContext::default(),
        );
        assert!(!result.valid);
    }

    #[test]
    fn test_gate_blocks_unapproved_budget() {
        let result = validate_transition(Stage::Diagnosis, Stage::Execution, &unapproved());
        assert!(!result.valid);
        assert_eq!(result.reason.unwrap().to_string(), "budget not approved");
    }

    #[test]
    fn test_gate_opens_with_approved_budget() {
        let result = validate_transition(Stage::Diagnosis, Stage::Execution, &approved());
        assert!(result.valid);
    }

    #[test]
    fn test_skipping_into_execution_is_not_gated() {
        let result = validate_transition(
            Stage::Reception,
            Stage::Execution,
            &ValidationContext::default(),
        );
        assert!(result.valid);
    }

    #[test]
    fn test_backward_and_same_stage_moves_allowed() {
        let ctx = ValidationContext::default();
        assert!(validate_transition(Stage::Ready, Stage::Reception, &ctx).valid);
        assert!(validate_transition(Stage::Execution, Stage::Diagnosis, &ctx).valid);
        assert!(validate_transition(Stage::Diagnosis, Stage::Diagnosis, &ctx).valid);
    }

    #[test]
    fn test_every_ungated_pair_is_valid() {
        let ctx = ValidationContext::default();
        for &from in STAGES {
            for &to in STAGES {
                let result = validate_transition(from, to, &ctx);
                assert_eq!(result.valid, !is_gated_edge(from, to), "{} -> {}", from, to);
            }
        }
    }
}
