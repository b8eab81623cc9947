use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use faceplate_editor::AttributeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Style used to decorate prompts and the sample
    #[arg(short, long, default_value = "prompt")]
    pub baseline: String,

    /// Face new sessions start from, e.g. "(:weight bold)"
    #[arg(long)]
    pub face: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    // Reject a bad face now rather than on the first edit
    if let Some(face) = &args.face {
        AttributeMap::parse(face)?;
    }

    let config = Config {
        baseline_style: args.baseline,
        initial_face: args.face,
        ..Config::default()
    };

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Add named styles under \"styles\" in {}", DEFAULT_CONFIG_NAME);
    println!("  2. Run: faceplate edit <file>");

    Ok(())
}
