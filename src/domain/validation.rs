//! Validation rules for status transitions

use crate::schemas::OpportunityStatus;

use super::states::{get_stage_for, has_transitions, is_terminal_status};

/// Result of a validation check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
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
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate moving an opportunity from `current` to `target`
pub fn validate_transition(
    current: OpportunityStatus,
    target: OpportunityStatus,
) -> ValidationResult {
    if is_terminal_status(current) {
        return ValidationResult::failure(format!(
            "cannot transition from terminal status {}",
            current
        ));
    }

    if !has_transitions(current) {
        return ValidationResult::failure(format!("no transitions are available from {}", current));
    }

    if get_stage_for(current, target).is_none() {
        return ValidationResult::failure(format!(
            "cannot transition from {} to {}",
            current, target
        ));
    }

    ValidationResult::success()
}
