//! Domain logic for workshop stages, budgets and payment methods

mod budget;
mod currency;
mod payment;
mod states;
mod transitions;
mod validation;


pub use budget::{compute_total, parse_amount, parse_cost, BudgetEditor};
pub use currency::{convert_total, format_usd, format_ves, to_ves, BudgetSummary};
pub use payment::{required_fields, validate_payment_draft, validate_payment_method};
pub use states::{
    get_next_stage, get_previous_stage, get_stage_index, is_terminal_stage, INITIAL_STAGE, STAGES,
};
pub use transitions::apply_stage_transition;
pub use validation::{
    can_enter_execution, is_gated_edge, validate_transition, TransitionBlock, ValidationContext,
    ValidationResult,
};
