//! `folder-tree` — run folder namespace commands.
//!
//! Usage:
//!   folder-tree [--script FILE] [--format text|json] [--keep-going]
//!   folder-tree --demo
//!
//! Commands are read from stdin unless `--script` or `--demo` is given.
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use folder_tree_cli::folder_cli::{CliError, CliOptions, RunSummary, Session, DEMO_SCRIPT};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let options = CliOptions::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(&options) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> Result<RunSummary, CliError> {
    let (script, keep_going) = if options.demo {
        (DEMO_SCRIPT.to_string(), true)
    } else if let Some(path) = &options.script {
        (std::fs::read_to_string(path)?, options.keep_going)
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        (buf, options.keep_going)
    };

    let mut session = Session::new(options.format);
    let summary = session.run_script(&script, keep_going, &mut io::stdout().lock())?;
    info!(
        executed = summary.executed,
        failed = summary.failed,
        mutations = summary.mutations,
        folders = session.tree().len(),
        "script finished"
    );

    if options.demo {
        // The demo's failures are intentional.
        return Ok(RunSummary {
            failed: 0,
            ..summary
        });
    }
    Ok(summary)
}
