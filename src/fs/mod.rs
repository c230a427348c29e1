//! File system utilities for oppflow
//!
//! Provides path resolution and JSON file operations for the store.

mod json;
mod paths;

pub use json::{
    list_opportunities, next_opportunity_id, read_config, read_json, read_opportunity,
    write_config, write_json, write_opportunity,
};
pub use paths::{
    find_store_root, get_config_path, get_opportunities_dir, get_opportunity_path, get_store_dir,
    resolve_cwd, STORE_DIR_NAME,
};
