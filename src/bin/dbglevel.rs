//! dbglevel CLI Tool
//!
//! Inspect `DEBUG` selector expressions: show how they compile, check whether
//! a given call would be shown, or run a small demo through the global logger.

use clap::{Parser, Subcommand};

mod cli;

use cli::output::OutputFormat;
use cli::{commands, CliResult};
use dbglevel::Severity;

/// dbglevel selector inspector
#[derive(Parser)]
#[command(name = "dbglevel")]
#[command(about = "Inspect and exercise DEBUG selector expressions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the terms, warnings and regular expression of a selector
    Compile {
        /// Selector expression (defaults to $DEBUG)
        expr: Option<String>,
    },
    /// Tell whether a call would be shown
    Check {
        /// Level name or rank (fatal, error, warning, info, debug, trace)
        #[arg(value_parser = parse_severity)]
        level: Severity,
        /// Source file of the call
        file: String,
        /// Enclosing function of the call
        function: Option<String>,
        /// Selector expression (defaults to $DEBUG)
        #[arg(short, long)]
        expr: Option<String>,
    },
    /// Emit sample lines through the global logger
    Demo,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse()
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let format: OutputFormat = cli.format.parse()?;
    match cli.command {
        Commands::Compile { expr } => println!("{}", commands::compile(expr, format)?),
        Commands::Check {
            level,
            file,
            function,
            expr,
        } => println!("{}", commands::check(expr, level, file, function, format)?),
        Commands::Demo => commands::demo()?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)?;
    Ok(())
}
