use std::process::ExitCode;

use palc::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use treelox::{LoxError, Loxer, RunMode, cli::*};

/// Log to stderr, only when `RUST_LOG` is set, e.g. `RUST_LOG=treelox=debug`.
fn init_tracing() {
	if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::registry()
			.with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
			.with(EnvFilter::from_default_env())
			.init();
	}
}

fn main() -> ExitCode {
	init_tracing();

	match Cli::parse().mode {
		Mode::File { path, ast, no_eval } => {
			let mut loxer = Loxer::stdout(RunMode::from_flags(ast, no_eval));
			match loxer.run_file(&path) {
				Ok(()) => ExitCode::SUCCESS,
				Err(e) => {
					if let LoxError::InternalError(_) = e {
						eprintln!("Failed run file: {e:#}");
					}
					ExitCode::from(e.exit_code())
				}
			}
		}
		Mode::Repl { ast, no_eval } => {
			let mut loxer = Loxer::stdout(RunMode::from_flags(ast, no_eval));
			match loxer.run_prompt(std::io::stdin().lock()) {
				Ok(()) => ExitCode::SUCCESS,
				Err(e) => {
					eprintln!("Failed run prompt: {e:#}");
					ExitCode::from(e.exit_code())
				}
			}
		}
	}
}
