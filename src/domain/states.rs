//! Opportunity lifecycle table
//!
//! Open → Negotiating → Proposal Sent → Won → Won - Converted to Sales Request,
//! with side exits to On Hold, Lost and Closed along the way.

use crate::schemas::{Opportunity, OpportunityStatus, Stage, Transition};

use crate::schemas::OpportunityStatus::*;
use crate::schemas::Stage::*;

/// Every opportunity status, in pipeline order.
pub const OPPORTUNITY_STATUSES: &[OpportunityStatus] = &[
    Open,
    Negotiating,
    ProposalSent,
    Won,
    Lost,
    OnHold,
    Closed,
    WonConverted,
    FollowUpWithCustomer,
];

/// Statuses that admit no further transitions.
pub const TERMINAL_STATUSES: &[OpportunityStatus] = &[Closed, WonConverted];

const FROM_OPEN: &[Transition] = &[
    Transition::new(Negotiating, Engagement),
    Transition::new(OnHold, Decision),
    Transition::new(Closed, Closure),
];

const FROM_NEGOTIATING: &[Transition] = &[
    Transition::new(ProposalSent, Engagement),
    Transition::new(OnHold, Decision),
    Transition::new(Closed, Closure),
];

const FROM_PROPOSAL_SENT: &[Transition] = &[
    Transition::new(Won, Decision),
    Transition::new(Lost, Decision),
    Transition::new(OnHold, Decision),
];

const FROM_WON: &[Transition] = &[Transition::new(WonConverted, Closure)];

const FROM_LOST: &[Transition] = &[Transition::new(Closed, Closure)];

const FROM_ON_HOLD: &[Transition] = &[Transition::new(FollowUpWithCustomer, Decision)];

/// The transition table as a static slice per status.
///
/// This is the source of truth for which statuses are reachable and which
/// stage is recorded with each.
pub fn transition_table(current: OpportunityStatus) -> &'static [Transition] {
    match current {
        Open => FROM_OPEN,
        Negotiating => FROM_NEGOTIATING,
        ProposalSent => FROM_PROPOSAL_SENT,
        Won => FROM_WON,
        Lost => FROM_LOST,
        OnHold => FROM_ON_HOLD,
        Closed | WonConverted | FollowUpWithCustomer => &[],
    }
}

/// Returns the legal next (status, stage) pairs for a status.
///
/// Order follows the table and only affects presentation; every entry is
/// equally selectable. An empty Vec means the transition control is disabled.
pub fn get_allowed_transitions(current: OpportunityStatus) -> Vec<Transition> {
    transition_table(current).to_vec()
}

/// Returns the legal next pairs for a raw status label.
///
/// Unrecognized labels (stale or externally edited data) yield no transitions
/// instead of an error.
pub fn get_allowed_transitions_for_label(label: &str) -> Vec<Transition> {
    match label.parse::<OpportunityStatus>() {
        Ok(status) => get_allowed_transitions(status),
        Err(_) => {
            tracing::debug!(
                status = label,
                "unrecognized opportunity status, no transitions offered"
            );
            Vec::new()
        }
    }
}

/// Returns the legal next pairs for a stored opportunity.
///
/// A record whose status label is not recognized goes through the label
/// lookup and therefore offers nothing.
pub fn get_opportunity_transitions(opportunity: &Opportunity) -> Vec<Transition> {
    match opportunity.status() {
        Some(status) => get_allowed_transitions(status),
        None => get_allowed_transitions_for_label(opportunity.status_label()),
    }
}

/// Returns the stage recorded when moving from `current` to `target`, if that move is legal.
pub fn get_stage_for(current: OpportunityStatus, target: OpportunityStatus) -> Option<Stage> {
    transition_table(current)
        .iter()
        .find(|t| t.status() == target)
        .map(Transition::stage)
}

/// Check if a status is one of the terminal statuses.
pub fn is_terminal_status(status: OpportunityStatus) -> bool {
    TERMINAL_STATUSES.contains(&status)
}

/// Check if any transition leaves this status.
pub fn has_transitions(status: OpportunityStatus) -> bool {
    !transition_table(status).is_empty()
}
