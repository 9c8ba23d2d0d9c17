//! Step sequencing over the fixed wizard order.
//!
//! Pure lookups over [`GenerationStep::ALL`]; no state, no side effects. The
//! wizard controller calls these after each AI turn to decide whether to
//! prompt for the next step or finish.

use crate::models::GenerationStep;

/// The step immediately following `current` in the wizard order, or `None`
/// once `current` is the last step.
pub fn next_step(current: GenerationStep) -> Option<GenerationStep> {
    GenerationStep::ALL.get(current as usize + 1).copied()
}

/// Completion percentage for `current`, using 1-based position so the first
/// step already reports non-zero progress and the last reports exactly 100.
/// Rounds half away from zero.
pub fn progress(current: GenerationStep) -> u8 {
    let position = current as usize + 1;
    let total = GenerationStep::ALL.len();
    (position as f64 / total as f64 * 100.0).round() as u8
}

/// True once `current` is the last stage; the wizard treats this as "ready
/// for final review".
pub fn is_final(current: GenerationStep) -> bool {
    next_step(current).is_none()
}
