pub mod apply_named;
pub mod edit;
pub mod init;
pub mod preview;
pub mod styles;

pub use apply_named::{apply_named, ApplyNamedArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use styles::{styles, StylesArgs};

use anyhow::Result;
use clap::Args;
use faceplate_editor::{SelectionProvider, Span, TextDocument};

/// Span bounds shared by commands that tag a document
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SpanArgs {
    /// Start of the span (character offset, inclusive)
    #[arg(long)]
    pub start: Option<usize>,

    /// End of the span (character offset, exclusive)
    #[arg(long)]
    pub end: Option<usize>,
}

impl SpanArgs {
    /// Select the requested span in `document`, defaulting to all of it
    pub fn select(&self, document: &mut TextDocument) -> Result<Span> {
        let start = self.start.unwrap_or(0);
        let end = self.end.unwrap_or_else(|| document.len());
        document.select(Span::new(start, end)?)?;
        document
            .selection()
            .ok_or_else(|| anyhow::anyhow!("No selection"))
    }
}
