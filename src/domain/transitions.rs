//! Status transition logic
//!
//! Pure functions for applying status transitions to opportunities.

use crate::schemas::{Opportunity, OpportunityStatus};

use super::states::transition_table;
use super::validation::validate_transition;

/// Result of a status transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful transition with the new opportunity state
    Success {
        /// The opportunity with updated status, stage and history
        next: Opportunity,
    },
    /// Failed transition with error message
    Error {
        /// Description of why the transition failed
        error: String,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition failed
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the next opportunity if the transition was successful
    pub fn opportunity(self) -> Option<Opportunity> {
        match self {
            TransitionResult::Success { next } => Some(next),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the error message if the transition failed
    pub fn error(self) -> Option<String> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }
}

/// Pure function that moves an opportunity to `target`.
///
/// This function:
/// - Never mutates the input opportunity
/// - Takes the stage from the lifecycle table, never from the caller
/// - Appends an entry to the opportunity's history
/// - Returns an error if `target` is not reachable from the current status
/// - Returns an error if the current status label is unrecognized
pub fn apply_transition(
    opportunity: &Opportunity,
    target: OpportunityStatus,
    note: Option<String>,
) -> TransitionResult {
    let current = match opportunity.status() {
        Some(status) => status,
        None => {
            return TransitionResult::Error {
                error: format!(
                    "status {:?} is not recognized, status changes are disabled",
                    opportunity.status_label()
                ),
            };
        }
    };

    let validation = validate_transition(current, target);
    if !validation.valid {
        return TransitionResult::Error {
            error: validation.reason.unwrap_or_else(|| "Transition validation failed".to_string()),
        };
    }

    let transition = match transition_table(current).iter().find(|t| t.status() == target) {
        Some(transition) => *transition,
        None => {
            return TransitionResult::Error {
                error: format!("cannot transition from {} to {}", current, target),
            };
        }
    };

    let next = opportunity.clone().with_transition(current, transition, note);
    tracing::info!(
        id = %next.id,
        from = %current,
        to = %transition.status(),
        stage = %transition.stage(),
        "opportunity status changed"
    );

    TransitionResult::Success { next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::get_allowed_transitions;
    use crate::schemas::OpportunityStatus::*;
    use crate::schemas::Stage;

    fn make_opportunity() -> Opportunity {
        Opportunity::new("OPP-0001".to_string(), "Acme Corp".to_string())
    }

    fn advance(opp: &Opportunity, target: OpportunityStatus) -> Opportunity {
        apply_transition(opp, target, None).opportunity().unwrap()
    }

    #[test]
    fn test_transition_open_to_on_hold() {
        let opp = make_opportunity();

        let result = apply_transition(&opp, OnHold, None);
        assert!(result.is_success());

        let next = result.opportunity().unwrap();
        assert_eq!(next.status(), Some(OnHold));
        assert_eq!(next.stage(), Some(Stage::Decision));
    }

    #[test]
    fn test_round_trip_open_on_hold_follow_up() {
        let on_hold = advance(&make_opportunity(), OnHold);

        let options = get_allowed_transitions(on_hold.status().unwrap());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].status(), FollowUpWithCustomer);
        assert_eq!(options[0].stage(), Stage::Decision);
    }

    #[test]
    fn test_happy_path_to_sales_request() {
        let opp = make_opportunity();
        let opp = advance(&opp, Negotiating);
        assert_eq!(opp.stage(), Some(Stage::Engagement));
        let opp = advance(&opp, ProposalSent);
        assert_eq!(opp.stage(), Some(Stage::Engagement));
        let opp = advance(&opp, Won);
        assert_eq!(opp.stage(), Some(Stage::Decision));
        let opp = advance(&opp, WonConverted);
        assert_eq!(opp.stage(), Some(Stage::Closure));

        assert_eq!(opp.history().len(), 4);
        let path: Vec<_> = opp.history().iter().map(|c| c.to).collect();
        assert_eq!(path, vec![Negotiating, ProposalSent, Won, WonConverted]);
    }

    #[test]
    fn test_lost_then_closed() {
        let opp = make_opportunity();
        let opp = advance(&advance(&advance(&opp, Negotiating), ProposalSent), Lost);
        let opp = advance(&opp, Closed);
        assert_eq!(opp.status(), Some(Closed));
        assert_eq!(opp.stage(), Some(Stage::Closure));
    }

    #[test]
    fn test_transition_from_terminal_status() {
        let closed = advance(&make_opportunity(), Closed);

        let result = apply_transition(&closed, Open, None);
        assert!(result.is_error());
        assert!(result.error().unwrap().contains("terminal status"));
    }

    #[test]
    fn test_transition_not_in_table() {
        let result = apply_transition(&make_opportunity(), Won, None);
        assert!(result.is_error());
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap(), "cannot transition from Open to Won");
    }

    #[test]
    fn test_transition_records_note() {
        let note = Some("kickoff call".to_string());
        let next = apply_transition(&make_opportunity(), Negotiating, note)
            .opportunity()
            .unwrap();
        assert_eq!(next.history()[0].note.as_deref(), Some("kickoff call"));
        assert_eq!(next.history()[0].from, Open);
    }

    #[test]
    fn test_transition_from_unrecognized_status() {
        let mut value = serde_json::to_value(make_opportunity()).unwrap();
        value["status"] = serde_json::Value::String("Pending".to_string());
        let stale: Opportunity = serde_json::from_value(value).unwrap();

        for target in [Negotiating, OnHold, Closed] {
            let result = apply_transition(&stale, target, None);
            assert!(result.is_error());
            assert!(result.error().unwrap().contains("\"Pending\" is not recognized"));
        }
    }

    #[test]
    fn test_transition_does_not_mutate_original() {
        let opp = make_opportunity();
        let original = opp.clone();

        let _ = apply_transition(&opp, Negotiating, None);

        assert_eq!(opp, original);
    }
}
