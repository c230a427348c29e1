//! CLI command implementations

pub mod advance;
pub mod create;
pub mod init;
pub mod list;
pub mod show;
pub mod status;
pub mod transitions;

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::errors::{OppflowError, Result};
use crate::fs::{find_store_root, resolve_cwd};
use crate::schemas::{Config, OpportunityStatus};

/// Locate the store from the working directory and load its config.
fn open_store(cwd: Option<&Path>) -> Result<(PathBuf, Config)> {
    let root = find_store_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    Ok((root, config))
}

/// Parse a status label typed by the user.
fn parse_status(label: &str) -> Result<OpportunityStatus> {
    label.parse().map_err(OppflowError::InvalidInput)
}

fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}
