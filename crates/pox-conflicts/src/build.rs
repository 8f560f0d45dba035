use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pox_advisories::document::find_advisories;
use pox_advisories::{build_components, build_conflicts};
use std::path::PathBuf;

use crate::config::ConflictsConfig;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing the advisory documents
    pub advisories_dir: PathBuf,

    /// Where to write the generated manifest
    #[arg(short, long, default_value = "composer.json")]
    pub output: PathBuf,

    /// Package name of the generated manifest
    #[arg(long)]
    pub name: Option<String>,

    /// Description of the generated manifest
    #[arg(long)]
    pub description: Option<String>,

    /// File extension of advisory documents (`json` files are decoded as JSON, anything else as YAML)
    #[arg(long)]
    pub extension: Option<String>,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: BuildArgs, config: &ConflictsConfig) -> Result<i32> {
    let mut options = config.load_options();
    if let Some(extension) = args.extension {
        options.extension = extension;
    }

    let mut manifest = config.manifest();
    if let Some(name) = args.name {
        manifest.name = name;
    }
    if let Some(description) = args.description {
        manifest.description = description;
    }

    log::info!(
        "Reading *.{} advisories from {}",
        options.extension,
        args.advisories_dir.display()
    );

    let advisories = find_advisories(&args.advisories_dir, &options)
        .with_context(|| format!("Failed to load advisories from {}", args.advisories_dir.display()))?;
    let advisory_count = advisories.len();

    let components = build_components(advisories);
    let conflicts = build_conflicts(&components).context("Failed to compute conflict rules")?;
    let conflict_count = conflicts.len();

    let manifest = manifest.with_conflicts(conflicts);

    if args.dry_run {
        print!("{}", manifest.render()?);
        return Ok(0);
    }

    manifest
        .write(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "{} {} conflict rules from {} advisories ({} packages) to {}",
        "Wrote".green().bold(),
        conflict_count,
        advisory_count,
        components.len(),
        args.output.display()
    );

    Ok(0)
}
