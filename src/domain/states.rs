//! Workshop stage definitions
//!
//! The board follows the order:
//! reception → diagnosis → execution → quality → ready
//!
//! The order is used for display and for "advance" shortcuts only. Moves in
//! any direction are legal; the single enforced rule lives in `validation`.

use crate::schemas::Stage;

/// The canonical ordering of workshop stages.
pub const STAGES: &[Stage] = &[
    Stage::Reception,
    Stage::Diagnosis,
    Stage::Execution,
    Stage::Quality,
    Stage::Ready,
];

/// Stage every new vehicle starts in
pub const INITIAL_STAGE: Stage = Stage::Reception;

/// Get the 0-based index of a stage in the board order.
pub fn get_stage_index(stage: Stage) -> usize {
    STAGES
        .iter()
        .position(|&s| s == stage)
        .unwrap_or(usize::MAX)
}

/// Returns the next stage on the board, or None for `ready`.
pub fn get_next_stage(current: Stage) -> Option<Stage> {
    STAGES.get(get_stage_index(current).saturating_add(1)).copied()
}

/// Returns the previous stage on the board, or None for `reception`.
pub fn get_previous_stage(current: Stage) -> Option<Stage> {
    get_stage_index(current)
        .checked_sub(1)
        .and_then(|i| STAGES.get(i))
        .copied()
}

/// Check if a stage is the terminal stage (ready).
///
/// Terminal means "no further forward step", not "frozen": a ready vehicle
/// may still be moved back.
pub fn is_terminal_stage(stage: Stage) -> bool {
    stage == Stage::Ready
}
