//! Advance command - Move an opportunity to its next status

use std::path::Path;

use crate::domain::{apply_transition, TransitionResult};
use crate::errors::{OppflowError, Result};
use crate::fs::{read_opportunity, write_opportunity};
use crate::schemas::Opportunity;

use super::{open_store, parse_status};

/// Move opportunity `id` to the status labelled `target` and persist it.
///
/// Returns the updated opportunity (unsaved when `dry_run` is set).
pub async fn run(
    cwd: Option<&Path>,
    id: &str,
    target: &str,
    note: Option<String>,
    dry_run: bool,
) -> Result<Opportunity> {
    let target = parse_status(target)?;
    let (root, _config) = open_store(cwd)?;
    let opportunity = read_opportunity(&root, id)?;

    let next = match apply_transition(&opportunity, target, note) {
        TransitionResult::Success { next } => next,
        TransitionResult::Error { error } => {
            return Err(OppflowError::StateTransition(format!("{}: {}", id, error)));
        }
    };

    if dry_run {
        tracing::info!(
            "[DRY RUN] would move {} from {} to {} ({})",
            id,
            opportunity.status_label(),
            next.status_label(),
            next.stage().map(|s| s.to_string()).unwrap_or_default()
        );
        return Ok(next);
    }

    write_opportunity(&root, &next)?;
    println!("{}: {} -> {}", id, opportunity.status_label(), next.status_label());
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::get_opportunity_path;
    use crate::schemas::{OpportunityStatus, Stage};
    use tempfile::TempDir;

    fn setup_store_with_open() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".oppflow")).unwrap();
        let opp = Opportunity::new("OPP-0001".to_string(), "Acme".to_string());
        write_opportunity(temp.path(), &opp).unwrap();
        temp
    }

    #[tokio::test]
    async fn test_advance_persists_status_and_stage() {
        let temp = setup_store_with_open();

        let next = run(Some(temp.path()), "OPP-0001", "On Hold", None, false).await.unwrap();
        assert_eq!(next.status(), Some(OpportunityStatus::OnHold));

        let stored = read_opportunity(temp.path(), "OPP-0001").unwrap();
        assert_eq!(stored.status(), Some(OpportunityStatus::OnHold));
        assert_eq!(stored.stage(), Some(Stage::Decision));
        assert_eq!(stored.history().len(), 1);

        run(Some(temp.path()), "OPP-0001", "Follow-up with Customer", None, false)
            .await
            .unwrap();
        let stored = read_opportunity(temp.path(), "OPP-0001").unwrap();
        assert_eq!(stored.status(), Some(OpportunityStatus::FollowUpWithCustomer));
        assert_eq!(stored.stage(), Some(Stage::Decision));
    }

    #[tokio::test]
    async fn test_advance_rejects_illegal_move() {
        let temp = setup_store_with_open();

        let err = run(Some(temp.path()), "OPP-0001", "Won", None, false).await.unwrap_err();
        assert_eq!(err.code(), "STATE_TRANSITION");
        assert!(err.to_string().contains("cannot transition from Open to Won"));

        let stored = read_opportunity(temp.path(), "OPP-0001").unwrap();
        assert_eq!(stored.status(), Some(OpportunityStatus::Open));
    }

    #[tokio::test]
    async fn test_advance_rejects_unknown_label_and_id() {
        let temp = setup_store_with_open();

        let err = run(Some(temp.path()), "OPP-0001", "Archived", None, false)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");

        let err = run(Some(temp.path()), "OPP-0099", "Closed", None, false).await.unwrap_err();
        assert_eq!(err.code(), "OPPORTUNITY_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_advance_dry_run_leaves_store_untouched() {
        let temp = setup_store_with_open();

        let preview = run(Some(temp.path()), "OPP-0001", "Negotiating", None, true)
            .await
            .unwrap();
        assert_eq!(preview.status(), Some(OpportunityStatus::Negotiating));

        let stored = read_opportunity(temp.path(), "OPP-0001").unwrap();
        assert_eq!(stored.status(), Some(OpportunityStatus::Open));
    }

    #[tokio::test]
    async fn test_advance_unrecognized_status_is_rejected() {
        let temp = setup_store_with_open();
        let path = get_opportunity_path(temp.path(), "OPP-0001");
        let mut value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        value["status"] = serde_json::Value::String("Pending".to_string());
        std::fs::write(&path, value.to_string()).unwrap();

        let err = run(Some(temp.path()), "OPP-0001", "Negotiating", None, false)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "STATE_TRANSITION");
        assert!(err.to_string().contains("status changes are disabled"));

        let stored = read_opportunity(temp.path(), "OPP-0001").unwrap();
        assert_eq!(stored.status_label(), "Pending");
        assert!(stored.history().is_empty());
    }
}
