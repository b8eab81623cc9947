use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Also list the attribute keys each style recognizes
    #[arg(short, long)]
    pub keys: bool,
}

pub fn styles(args: StylesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog();

    for name in catalog.names() {
        let marker = if name == config.baseline_style {
            " (baseline)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{}{}", name.bold(), marker);

        if args.keys {
            println!("   {}", catalog.keys_for(&name).join(" "));
        }
    }

    Ok(())
}
