//! Oppflow CLI - Track sales opportunities through their lifecycle

use clap::Parser;
use oppflow::cli::commands::create::CreateOptions;
use oppflow::cli::{Cli, Commands};
use oppflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> oppflow::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => {
            oppflow::cli::commands::init::run(cwd, force, cli.dry_run).await
        }
        Some(Commands::Create {
            customer,
            salesperson,
            remarks,
            close_date,
            line_items,
        }) => {
            let options = CreateOptions {
                salesperson,
                remarks,
                close_date,
                line_items,
            };
            oppflow::cli::commands::create::run(cwd, &customer, options, cli.dry_run)
                .await
                .map(|_| ())
        }
        Some(Commands::List { json, status }) => {
            oppflow::cli::commands::list::run(cwd, json, status.as_deref()).await
        }
        Some(Commands::Show { id, json }) => {
            oppflow::cli::commands::show::run(cwd, &id, json).await
        }
        Some(Commands::Transitions { status, json }) => {
            oppflow::cli::commands::transitions::run(&status, json).await
        }
        Some(Commands::Advance { id, status, note }) => {
            oppflow::cli::commands::advance::run(cwd, &id, &status, note, cli.dry_run)
                .await
                .map(|_| ())
        }
        Some(Commands::Status { json }) => {
            oppflow::cli::commands::status::run(cwd, json).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
