//! JSON file operations for the opportunity store
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{OppflowError, Result};
use crate::schemas::{Config, Opportunity};

use super::paths::{get_config_path, get_opportunities_dir, get_opportunity_path};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OppflowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            OppflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        OppflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| OppflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file, or the default config if there is none.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

/// Reject IDs that would escape the opportunities directory.
fn check_id(id: &str) -> Result<()> {
    if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
        return Err(OppflowError::InvalidInput(format!("Invalid opportunity ID: {:?}", id)));
    }
    Ok(())
}

/// Read one opportunity by ID.
///
/// # Errors
/// * `OpportunityNotFound` - If no file exists for the ID
pub fn read_opportunity(root: &Path, id: &str) -> Result<Opportunity> {
    check_id(id)?;
    match read_json(&get_opportunity_path(root, id)) {
        Err(OppflowError::FileNotFound(_)) => {
            Err(OppflowError::OpportunityNotFound(id.to_string()))
        }
        other => other,
    }
}

/// Write one opportunity, keyed by its ID.
pub fn write_opportunity(root: &Path, opportunity: &Opportunity) -> Result<()> {
    check_id(&opportunity.id)?;
    write_json(&get_opportunity_path(root, &opportunity.id), opportunity)
}

/// Read every opportunity in the store, sorted by ID.
pub fn list_opportunities(root: &Path) -> Result<Vec<Opportunity>> {
    let dir = get_opportunities_dir(root);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut opportunities = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        opportunities.push(read_json::<Opportunity>(&path)?);
    }
    opportunities.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(opportunities)
}

/// Next free ID of the form `<prefix><NNNN>`.
pub fn next_opportunity_id(root: &Path, prefix: &str) -> Result<String> {
    let highest = list_opportunities(root)?
        .iter()
        .filter_map(|o| o.id.strip_prefix(prefix)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    Ok(format!("{}{:04}", prefix, highest + 1))
}
