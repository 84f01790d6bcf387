use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "treelox", after_long_help = "Tree-walking interpreter for literals, arithmetic and print in Lox.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File {
		path:    PathBuf,
		/// Print the syntax tree before evaluating
		#[arg(long)]
		ast:     bool,
		/// Print the syntax tree and skip evaluation
		#[arg(long)]
		no_eval: bool,
	},
	/// Input prompt
	Repl {
		/// Print the syntax tree of each line before evaluating it
		#[arg(long)]
		ast:     bool,
		/// Print the syntax tree of each line and skip evaluation
		#[arg(long)]
		no_eval: bool,
	},
}
