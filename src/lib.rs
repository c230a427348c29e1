//! Oppflow - Sales opportunity lifecycle engine
//!
//! This library provides the core functionality for the oppflow CLI, including:
//! - Schema definitions for opportunities, statuses, stages and config
//! - The lifecycle table deciding which status an opportunity may move to next
//! - File system utilities for the JSON opportunity store
//! - CLI commands acting as the opportunity edit surface

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use domain::{apply_transition, get_allowed_transitions, get_allowed_transitions_for_label};
pub use errors::{OppflowError, Result};
pub use schemas::{Config, Opportunity, OpportunityStatus, Stage, Transition};
