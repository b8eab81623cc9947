use crate::config::Config;
use crate::terminal::{paint, TerminalSurface};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use faceplate_editor::{
    ApplyGateway, ApplyMode, AttributeMap, ContextId, ContextRegistry, EditSession,
    PreviewRenderer, PromptSurface, StyleCatalog, TextDocument,
};
use std::path::PathBuf;

use super::SpanArgs;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Text file to tag
    pub file: PathBuf,

    #[command(flatten)]
    pub span: SpanArgs,

    /// Face to start from, as a property list, e.g. "(:weight bold)"
    #[arg(long)]
    pub face: Option<String>,

    /// How to apply the face (face, properties); overrides the config
    #[arg(short, long)]
    pub mode: Option<String>,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mode = match args.mode.as_deref() {
        None => config.apply_mode,
        Some("face") => ApplyMode::Face,
        Some("properties") => ApplyMode::Properties,
        Some(other) => {
            return Err(anyhow::anyhow!(
                "Invalid mode: {}. Use: face or properties",
                other
            ))
        }
    };

    let mut document = TextDocument::load(args.file.clone())?;
    let span = args.span.select(&mut document)?;

    let mut registry = ContextRegistry::new();
    let id = ContextId::new(document.path.display().to_string());
    let initial = match &args.face {
        Some(text) => AttributeMap::parse(text)?,
        None => config.initial_face()?,
    };
    registry.load(id.clone(), initial);

    let catalog = config.catalog();
    let key_style = completion_style(&catalog, &config.baseline_style);

    println!("🎨 {} {}", "Editing face for".green().bold(), id);
    println!("   Span: {}", span);
    println!("   Empty attribute ends the session, empty value removes");
    if !catalog.keys_for(key_style).is_empty() {
        println!("   {} lists attributes", "?".cyan());
    }
    println!();

    let stdin = std::io::stdin();
    let mut surface = TerminalSurface::new(stdin.lock(), std::io::stdout(), &config.baseline_style);

    EditSession::new(
        registry.current(&id),
        PreviewRenderer::new(config.baseline_style.clone()),
    )
    .with_catalog(&catalog, key_style)
    .run(&mut surface)?;

    let face = registry.current(&id).clone();
    tracing::info!("session for {} ended with {}", id, face);

    if let Err(err) = ApplyGateway::new(&mut document, &catalog).apply(span, &face, mode) {
        surface.notify(&format!("{} {}", "✗".red(), err));
        return Err(err.into());
    }

    println!();
    println!("{} {}", "Face:".bold(), face);
    println!("{}", paint(&document.styled(), &config.baseline_style));

    Ok(())
}

/// Style whose keys are offered at the attribute prompt
fn completion_style<'a>(catalog: &StyleCatalog, baseline: &'a str) -> &'a str {
    if catalog.contains(baseline) {
        baseline
    } else {
        "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_style_prefers_baseline() {
        let mut catalog = StyleCatalog::default();
        catalog.insert("minibuffer-prompt", vec![":weight".to_string()]);

        assert_eq!(completion_style(&catalog, "minibuffer-prompt"), "minibuffer-prompt");
    }

    #[test]
    fn test_unknown_baseline_falls_back_to_default_keys() {
        let catalog = StyleCatalog::default();
        let style = completion_style(&catalog, "minibuffer-prompt");

        assert_eq!(style, "default");
        assert!(catalog.keys_for(style).iter().any(|k| k == ":weight"));
    }
}
