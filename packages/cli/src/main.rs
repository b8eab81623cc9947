mod commands;
mod config;
mod terminal;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply_named, edit, init, preview, styles, ApplyNamedArgs, EditArgs, InitArgs, PreviewArgs,
    StylesArgs,
};
use tracing::Level;

/// Faceplate - build text faces interactively and apply them to documents
#[derive(Parser, Debug)]
#[command(name = "faceplate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a faceplate.config.json in the current directory
    Init(InitArgs),

    /// Build a face interactively and apply it to a span of a file
    Edit(EditArgs),

    /// Apply a named style to a span of a file
    ApplyNamed(ApplyNamedArgs),

    /// List the known named styles
    Styles(StylesArgs),

    /// Show the sample rendered with a face
    Preview(PreviewArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Edit(args) => edit(args, &cwd),
                Command::ApplyNamed(args) => apply_named(args, &cwd),
                Command::Styles(args) => styles(args, &cwd),
                Command::Preview(args) => preview(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
