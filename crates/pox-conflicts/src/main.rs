mod build;
mod config;
mod merge;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::ConflictsConfig;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pox-conflicts")]
#[command(about = "Generate Composer conflict rules from security advisories")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a composer.json with conflict rules from an advisories directory
    Build(build::BuildArgs),

    /// Merge the given constraints and print the resulting conflict rule
    Merge(merge::MergeArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match ConflictsConfig::load_from_cwd()? {
        Some((path, config)) => {
            log::debug!("Using configuration from {}", path.display());
            config
        }
        None => ConflictsConfig::default(),
    };

    match args.command {
        Commands::Build(build_args) => build::execute(build_args, &config),
        Commands::Merge(merge_args) => merge::execute(merge_args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
