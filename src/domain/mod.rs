//! Domain logic for the opportunity lifecycle

mod states;
mod transitions;
mod validation;


pub use states::{
    get_allowed_transitions, get_allowed_transitions_for_label, get_opportunity_transitions,
    get_stage_for, has_transitions, is_terminal_status, transition_table, OPPORTUNITY_STATUSES,
    TERMINAL_STATUSES,
};
pub use transitions::{apply_transition, TransitionResult};
pub use validation::{validate_transition, ValidationResult};
