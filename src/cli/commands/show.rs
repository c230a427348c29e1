//! Show command - Show one opportunity and its next-status options

use std::path::Path;

use serde::Serialize;

use crate::domain::get_opportunity_transitions;
use crate::errors::{OppflowError, Result};
use crate::fs::read_opportunity;
use crate::schemas::{Config, Opportunity, Transition};

use super::{format_money, open_store};

#[derive(Serialize)]
struct ShowOutput<'a> {
    opportunity: &'a Opportunity,
    next: Vec<Transition>,
    total_value: f64,
}

/// Render an opportunity for the terminal
pub fn render(opportunity: &Opportunity, config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", opportunity.id, opportunity.customer));
    match opportunity.status() {
        Some(status) => out.push_str(&format!("  Status:      {}\n", status)),
        None => out.push_str(&format!(
            "  Status:      {} (unrecognized)\n",
            opportunity.status_label()
        )),
    }
    match opportunity.stage() {
        Some(stage) => out.push_str(&format!("  Stage:       {}\n", stage)),
        None => out.push_str("  Stage:       -\n"),
    }
    if let Some(salesperson) = &opportunity.salesperson {
        out.push_str(&format!("  Salesperson: {}\n", salesperson));
    }
    if let Some(date) = opportunity.expected_close_date {
        out.push_str(&format!("  Close date:  {}\n", date));
    }
    if let Some(remarks) = &opportunity.remarks {
        out.push_str(&format!("  Remarks:     {}\n", remarks));
    }

    if !opportunity.line_items.is_empty() {
        out.push_str("  Line items:\n");
        for line in &opportunity.line_items {
            out.push_str(&format!(
                "    {} x{} @ {}\n",
                line.product,
                line.quantity,
                format_money(line.unit_price, &config.currency)
            ));
        }
    }
    out.push_str(&format!(
        "  Value:       {}\n",
        format_money(opportunity.total_value(), &config.currency)
    ));

    let next = get_opportunity_transitions(opportunity);
    if next.is_empty() {
        out.push_str("  Next:        (none, status changes disabled)\n");
    } else {
        let options: Vec<String> = next.iter().map(ToString::to_string).collect();
        out.push_str(&format!("  Next:        {}\n", options.join(", ")));
    }

    if !opportunity.history().is_empty() {
        out.push_str("  History:\n");
        for change in opportunity.history() {
            out.push_str(&format!(
                "    {}  {} -> {} ({})",
                change.changed_at, change.from, change.to, change.stage
            ));
            if let Some(note) = &change.note {
                out.push_str(&format!("  {}", note));
            }
            out.push('\n');
        }
    }
    out
}

/// Show details of a specific opportunity
pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let (root, config) = open_store(cwd)?;
    let opportunity = read_opportunity(&root, id)?;

    if json {
        let output = ShowOutput {
            opportunity: &opportunity,
            next: get_opportunity_transitions(&opportunity),
            total_value: opportunity.total_value(),
        };
        let out = serde_json::to_string_pretty(&output)
            .map_err(|e| OppflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", render(&opportunity, &config));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::apply_transition;
    use crate::fs::{get_opportunity_path, write_opportunity};
    use crate::schemas::{LineItem, OpportunityStatus};
    use tempfile::TempDir;

    fn make_opportunity() -> Opportunity {
        Opportunity::new("OPP-0001".to_string(), "Acme Corp".to_string())
            .with_salesperson(Some("Dana".to_string()))
            .with_line_item(LineItem::new("Widget", 4, 25.0))
    }

    #[test]
    fn test_render_open_opportunity() {
        let out = render(&make_opportunity(), &Config::default());
        assert!(out.contains("Status:      Open"));
        assert!(out.contains("Stage:       -"));
        assert!(out.contains("Widget x4 @ 25.00 USD"));
        assert!(out.contains("Value:       100.00 USD"));
        assert!(out.contains("Negotiating (Engagement), On Hold (Decision), Closed (Closure)"));
        assert!(!out.contains("History:"));
    }

    #[test]
    fn test_render_terminal_disables_next() {
        let closed = apply_transition(
            &make_opportunity(),
            OpportunityStatus::Closed,
            Some("no budget".to_string()),
        )
        .opportunity()
        .unwrap();
        let out = render(&closed, &Config::default());
        assert!(out.contains("Stage:       Closure"));
        assert!(out.contains("status changes disabled"));
        assert!(out.contains("Open -> Closed (Closure)  no budget"));
    }

    fn with_status_label(opportunity: &Opportunity, label: &str) -> Opportunity {
        let mut value = serde_json::to_value(opportunity).unwrap();
        value["status"] = serde_json::Value::String(label.to_string());
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_render_unrecognized_status_disables_next() {
        let pending = with_status_label(&make_opportunity(), "Pending");
        let out = render(&pending, &Config::default());
        assert!(out.contains("Status:      Pending (unrecognized)"));
        assert!(out.contains("Next:        (none, status changes disabled)"));
        assert!(out.contains("Value:       100.00 USD"));
    }

    #[tokio::test]
    async fn test_run_with_pending_file_in_store() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".oppflow")).unwrap();
        write_opportunity(temp.path(), &make_opportunity()).unwrap();

        let pending = with_status_label(
            &Opportunity::new("OPP-0002".to_string(), "Globex".to_string()),
            "Pending",
        );
        std::fs::write(
            get_opportunity_path(temp.path(), "OPP-0002"),
            serde_json::to_string(&pending).unwrap(),
        )
        .unwrap();

        run(Some(temp.path()), "OPP-0001", false).await.unwrap();
        run(Some(temp.path()), "OPP-0002", false).await.unwrap();
        run(Some(temp.path()), "OPP-0002", true).await.unwrap();
    }
}
