//! jobform CLI
//!
//! Replays recorded input events through the application form.
//!
//! ## Usage
//!
//! ```bash
//! jobform submit events.json
//! jobform validate events.json
//! jobform render events.json --submit > page.html
//! jobform --config jobform.toml -vv render events.json
//! ```

mod commands;
mod events;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use jobform_conf::Settings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobform")]
#[command(about = "Job application form validator and renderer", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Path to a TOML settings file
	#[arg(long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Replay events, submit the form and print the submitted state
	Submit {
		/// JSON file with the recorded input events
		#[arg(value_name = "EVENTS")]
		events: PathBuf,
	},

	/// Replay events and print the validation errors as JSON
	Validate {
		/// JSON file with the recorded input events
		#[arg(value_name = "EVENTS")]
		events: PathBuf,
	},

	/// Replay events and print the rendered HTML page
	Render {
		/// JSON file with the recorded input events
		#[arg(value_name = "EVENTS")]
		events: PathBuf,

		/// Submit the form before rendering
		#[arg(long)]
		submit: bool,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(cli) {
		Ok(code) => ExitCode::from(code),
		Err(e) => {
			eprintln!("{} {e:#}", "Error:".red().bold());
			ExitCode::from(2)
		}
	}
}

fn run(cli: Cli) -> anyhow::Result<u8> {
	let settings = load_settings(cli.config.as_deref())?;
	init_logging(&settings, cli.verbosity);

	let mut stdout = std::io::stdout().lock();
	match cli.command {
		Commands::Submit { events: path } => {
			commands::run_submit(&events::load_events(&path)?, &mut stdout)
		}
		Commands::Validate { events: path } => {
			commands::run_validate(&events::load_events(&path)?, &mut stdout)
		}
		Commands::Render {
			events: path,
			submit,
		} => commands::run_render(&events::load_events(&path)?, submit, &settings, &mut stdout),
	}
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
	match path {
		Some(path) => Settings::from_file(path)
			.with_context(|| format!("failed to load settings from {}", path.display())),
		None => Ok(Settings::default()),
	}
}

fn init_logging(settings: &Settings, verbosity: u8) {
	let rust_log = std::env::var("RUST_LOG").ok();
	let directives = log_directives(rust_log.as_deref(), verbosity, &settings.logging.level);

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(directives))
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

/// `RUST_LOG` wins, then `-v` flags, then the configured level.
fn log_directives<'a>(rust_log: Option<&'a str>, verbosity: u8, configured: &'a str) -> &'a str {
	if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
		return directives;
	}
	match verbosity {
		0 => configured,
		1 => "debug",
		_ => "trace",
	}
}
