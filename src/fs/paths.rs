//! Path resolution utilities for oppflow
//!
//! Provides functions to locate the store root and construct paths
//! to the files inside `.oppflow/`.

use std::path::{Path, PathBuf};

use crate::errors::{OppflowError, Result};

/// Name of the store directory
pub const STORE_DIR_NAME: &str = ".oppflow";

/// Find the nearest directory containing a .oppflow store.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `StoreNotFound` - If no ancestor contains .oppflow
pub fn find_store_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| OppflowError::StoreNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if get_store_dir(&current).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(OppflowError::StoreNotFound(format!(
                    "Could not find a {} directory (run `oppflow init` first)",
                    STORE_DIR_NAME
                )));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .oppflow directory.
pub fn get_store_dir(root: &Path) -> PathBuf {
    root.join(STORE_DIR_NAME)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_store_dir(root).join("config.json")
}

/// Get the path to the opportunities directory.
pub fn get_opportunities_dir(root: &Path) -> PathBuf {
    get_store_dir(root).join("opportunities")
}

/// Get the path to an opportunity's JSON file.
pub fn get_opportunity_path(root: &Path, id: &str) -> PathBuf {
    get_opportunities_dir(root).join(format!("{}.json", id))
}
