//! Status command - Pipeline summary by status and stage

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::domain::{is_terminal_status, OPPORTUNITY_STATUSES};
use crate::errors::{OppflowError, Result};
use crate::fs::list_opportunities;
use crate::schemas::{Config, Opportunity};

use super::{format_money, open_store};

/// Counts and value of one status in the pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRow {
    pub status: String,
    pub count: usize,
    pub value: f64,
    pub terminal: bool,
    /// False for stored labels the lifecycle does not know
    pub recognized: bool,
}

/// Aggregate view of every opportunity in the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub total: usize,
    /// Opportunities not in a terminal status
    pub active: usize,
    pub by_status: Vec<StatusRow>,
    /// Keyed by stage label; "-" for opportunities still in `Open`
    pub by_stage: BTreeMap<String, usize>,
}

/// Build the summary; statuses with no opportunities are omitted.
///
/// Known statuses come first in lifecycle order, followed by any
/// unrecognized stored labels in alphabetical order.
pub fn summarize(opportunities: &[Opportunity]) -> PipelineSummary {
    let mut by_status: Vec<StatusRow> = OPPORTUNITY_STATUSES
        .iter()
        .filter_map(|status| {
            let matching: Vec<_> = opportunities
                .iter()
                .filter(|o| o.status() == Some(*status))
                .collect();
            if matching.is_empty() {
                return None;
            }
            Some(StatusRow {
                status: status.to_string(),
                count: matching.len(),
                value: matching.iter().map(|o| o.total_value()).sum(),
                terminal: is_terminal_status(*status),
                recognized: true,
            })
        })
        .collect();

    let mut unrecognized: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for opp in opportunities.iter().filter(|o| o.status().is_none()) {
        let entry = unrecognized.entry(opp.status_label()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += opp.total_value();
    }
    by_status.extend(unrecognized.into_iter().map(|(label, (count, value))| StatusRow {
        status: label.to_string(),
        count,
        value,
        terminal: false,
        recognized: false,
    }));

    let mut by_stage = BTreeMap::new();
    for opp in opportunities {
        let key = opp.stage().map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
        *by_stage.entry(key).or_insert(0) += 1;
    }

    PipelineSummary {
        total: opportunities.len(),
        active: opportunities
            .iter()
            .filter(|o| o.status().map_or(true, |s| !is_terminal_status(s)))
            .count(),
        by_status,
        by_stage,
    }
}

fn render(summary: &PipelineSummary, config: &Config) -> String {
    let mut out = format!("{} opportunities, {} active\n", summary.total, summary.active);
    for row in &summary.by_status {
        out.push_str(&format!(
            "  {:<34} {:>4}  {}{}\n",
            row.status,
            row.count,
            format_money(row.value, &config.currency),
            if row.terminal {
                "  (terminal)"
            } else if !row.recognized {
                "  (unrecognized)"
            } else {
                ""
            }
        ));
    }
    if !summary.by_stage.is_empty() {
        out.push_str("By stage:\n");
        for (stage, count) in &summary.by_stage {
            out.push_str(&format!("  {:<12} {:>4}\n", stage, count));
        }
    }
    out
}

/// Show the pipeline summary
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let (root, config) = open_store(cwd)?;
    let summary = summarize(&list_opportunities(&root)?);

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| OppflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", render(&summary, &config));
    }
    Ok(())
}
