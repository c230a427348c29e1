//! List command - List opportunities with optional filtering

use std::path::Path;

use crate::errors::{OppflowError, Result};
use crate::fs::list_opportunities;
use crate::schemas::{Opportunity, OpportunityStatus};

use super::{open_store, parse_status};

/// Keep only opportunities in `status`, or all of them when no filter is given
pub fn filter_by_status(
    opportunities: Vec<Opportunity>,
    status: Option<OpportunityStatus>,
) -> Vec<Opportunity> {
    match status {
        Some(status) => {
            opportunities.into_iter().filter(|o| o.status() == Some(status)).collect()
        }
        None => opportunities,
    }
}

fn render(opportunities: &[Opportunity]) -> String {
    if opportunities.is_empty() {
        return "No opportunities found.\n".to_string();
    }

    let mut out = String::new();
    for opp in opportunities {
        let stage = opp.stage().map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<10} {:<34} {:<11} {}\n",
            opp.id,
            opp.status_label(),
            stage,
            opp.customer
        ));
    }
    out
}

/// List opportunities with optional filtering
pub async fn run(cwd: Option<&Path>, json: bool, status: Option<&str>) -> Result<()> {
    let status = status.map(parse_status).transpose()?;
    let (root, _config) = open_store(cwd)?;
    let opportunities = filter_by_status(list_opportunities(&root)?, status);

    if json {
        let out = serde_json::to_string_pretty(&opportunities)
            .map_err(|e| OppflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", render(&opportunities));
    }
    Ok(())
}
