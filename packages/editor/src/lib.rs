//! # Faceplate Editor
//!
//! Interactive face editing for visual debugging of style computation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ literal: free text → Value                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: one AttributeMap per context        │
//! │  - EditSession drives prompt → set/remove   │
//! │  - PreviewRenderer decorates every prompt   │
//! │  - ApplyGateway hands the face to the host  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: PromptSurface + DocumentTagger        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use faceplate_editor::*;
//!
//! let mut registry = ContextRegistry::new();
//! let id = ContextId::from("notes.txt");
//!
//! EditSession::new(registry.current(&id), PreviewRenderer::default())
//!     .run(&mut surface)?;
//!
//! let face = registry.current(&id).clone();
//! ApplyGateway::new(&mut document, &catalog)
//!     .apply(span, &face, ApplyMode::Face)?;
//! ```

mod attribute_map;
mod catalog;
mod context;
mod document;
mod errors;
mod gateway;
mod preview;
mod prompt;
mod session;

pub use attribute_map::{AttributeMap, Key};
pub use catalog::StyleCatalog;
pub use context::{ContextId, ContextRegistry};
pub use document::TextDocument;
pub use errors::EditorError;
pub use gateway::{
    ApplyGateway, ApplyMode, DocumentTagger, SelectionProvider, Span, SpanTag, TagError,
};
pub use preview::{
    PreviewRenderer, RunStyle, StyleRun, StyledText, DEFAULT_BASELINE, SAMPLE_RANGE, SAMPLE_TEXT,
};
pub use prompt::{Answer, PromptSurface, ScriptedSurface, SurfaceError};
pub use session::{EditSession, Prompt, Response, SessionState, StepOutcome};

// Re-export the literal model for convenience
pub use faceplate_literal::{ParseError, Value};
