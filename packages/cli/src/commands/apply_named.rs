use crate::config::Config;
use crate::terminal::{paint, TerminalSurface};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use faceplate_editor::{
    ApplyGateway, AttributeMap, PreviewRenderer, PromptSurface, StyledText, TextDocument,
};
use std::path::PathBuf;

use super::SpanArgs;

#[derive(Args, Debug)]
pub struct ApplyNamedArgs {
    /// Text file to tag
    pub file: PathBuf,

    /// Named style to apply; prompts for one if omitted
    pub style: Option<String>,

    #[command(flatten)]
    pub span: SpanArgs,
}

pub fn apply_named(args: ApplyNamedArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog();

    let mut document = TextDocument::load(args.file.clone())?;
    let span = args.span.select(&mut document)?;

    let style = match args.style {
        Some(style) => style,
        None => {
            let stdin = std::io::stdin();
            let mut surface =
                TerminalSurface::new(stdin.lock(), std::io::stdout(), &config.baseline_style);
            surface.prompt_choice(&style_label(&config.baseline_style), &catalog.names())?
        }
    };

    ApplyGateway::new(&mut document, &catalog).apply_named(span, &style)?;

    println!("{} '{}' over {}", "Applied".green().bold(), style, span);
    println!("{}", paint(&document.styled(), &config.baseline_style));

    Ok(())
}

/// Choice label, decorated like every other prompt
fn style_label(baseline: &str) -> StyledText {
    PreviewRenderer::new(baseline).decorate("Style: ", &AttributeMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceplate_editor::RunStyle;

    #[test]
    fn test_style_label_is_decorated() {
        let label = style_label("minibuffer-prompt");

        assert_eq!(label.text, "[sample] Style: ");
        assert!(label
            .runs_at(10)
            .iter()
            .any(|run| run.style == RunStyle::Named("minibuffer-prompt".to_string())));
    }
}
