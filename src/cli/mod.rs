//! CLI module for oppflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Oppflow - Track sales opportunities through their lifecycle
#[derive(Parser, Debug)]
#[command(name = "oppflow")]
#[command(version)]
#[command(about = "Track sales opportunities from Open to Won, Lost or Closed")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview operations without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .oppflow store in the current directory
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Create a new opportunity in the Open status
    Create {
        /// Customer name
        customer: String,

        /// Assigned salesperson (defaults to the configured one)
        #[arg(long)]
        salesperson: Option<String>,

        /// Free-form remarks
        #[arg(long)]
        remarks: Option<String>,

        /// Expected close date (YYYY-MM-DD)
        #[arg(long)]
        close_date: Option<String>,

        /// Quoted line item as "<product>:<quantity>:<unit price>" (repeatable)
        #[arg(long = "line-item", value_name = "ITEM")]
        line_items: Vec<String>,
    },

    /// List opportunities with optional filtering
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by status label (e.g. "Proposal Sent")
        #[arg(long)]
        status: Option<String>,
    },

    /// Show an opportunity and the statuses it can move to
    Show {
        /// Opportunity ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the statuses reachable from a status label
    Transitions {
        /// Current status label
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move an opportunity to its next status
    Advance {
        /// Opportunity ID
        id: String,

        /// Target status label
        status: String,

        /// Note recorded in the opportunity history
        #[arg(long)]
        note: Option<String>,
    },

    /// Summarize the pipeline by status and stage
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
