//! Schema types for oppflow
//!
//! Records persisted as JSON in the store and exchanged with the CLI.

mod config;
mod opportunity;
mod status;

pub use config::Config;
pub use opportunity::{LineItem, Opportunity, StageChange};
pub use status::{OpportunityStatus, RecordedStatus, Stage, Transition};
