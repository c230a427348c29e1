//! Transitions command - Query the lifecycle table for a status label

use crate::domain::{get_allowed_transitions_for_label, is_terminal_status};
use crate::errors::{OppflowError, Result};
use crate::schemas::{OpportunityStatus, Transition};

/// Render the options for one status label.
///
/// Unknown labels are not an error here: like terminal statuses they simply
/// have nothing to offer.
pub fn render(label: &str, transitions: &[Transition]) -> String {
    if transitions.is_empty() {
        let why = match label.parse::<OpportunityStatus>() {
            Ok(status) if is_terminal_status(status) => "terminal status",
            Ok(_) => "no onward transitions",
            Err(_) => "unrecognized status",
        };
        return format!("{}: no transitions available ({})\n", label, why);
    }

    let mut out = format!("{} can move to:\n", label);
    for transition in transitions {
        out.push_str(&format!("  {:<34} stage: {}\n", transition.status(), transition.stage()));
    }
    out
}

/// Print the statuses reachable from `label`
pub async fn run(label: &str, json: bool) -> Result<()> {
    let transitions = get_allowed_transitions_for_label(label);

    if json {
        let out = serde_json::to_string_pretty(&transitions)
            .map_err(|e| OppflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", render(label, &transitions));
    }
    Ok(())
}
