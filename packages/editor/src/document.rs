//! # Text Document
//!
//! In-memory host document that carries style tags over character spans.
//!
//! ## Tag semantics
//!
//! - **Face / Named**: the most recent one covering a position wins
//! - **Properties**: every tag covering a position is merged in
//!   application order, later keys overwriting earlier ones
//!
//! Positions are character offsets, not bytes.

use crate::{
    AttributeMap, DocumentTagger, EditorError, RunStyle, SelectionProvider, Span, SpanTag,
    StyledText, TagError,
};
use std::path::PathBuf;

#[derive(Debug)]
pub struct TextDocument {
    /// Where the text came from, used as the context id
    pub path: PathBuf,

    /// Increments on every successful tag
    pub version: u64,

    text: String,
    selection: Option<Span>,
    tags: Vec<(Span, SpanTag)>,
}

impl TextDocument {
    pub fn from_source(path: PathBuf, text: impl Into<String>) -> Self {
        Self {
            path,
            version: 0,
            text: text.into(),
            selection: None,
            tags: Vec::new(),
        }
    }

    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let text = std::fs::read_to_string(&path)?;
        Ok(Self::from_source(path, text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn tags(&self) -> &[(Span, SpanTag)] {
        &self.tags
    }

    pub fn select(&mut self, span: Span) -> Result<(), TagError> {
        self.check_bounds(span)?;
        self.selection = Some(span);
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection = Some(Span {
            start: 0,
            end: self.len(),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Effective face at `pos`
    pub fn face_at(&self, pos: usize) -> Option<RunStyle> {
        self.tags
            .iter()
            .rev()
            .filter(|(span, _)| span.contains(pos))
            .find_map(|(_, tag)| match tag {
                SpanTag::Face(pairs) => Some(RunStyle::Attributes(AttributeMap::from_pairs(
                    pairs.iter().cloned(),
                ))),
                SpanTag::Named(name) => Some(RunStyle::Named(name.clone())),
                SpanTag::Properties(_) => None,
            })
    }

    /// Merged generic properties at `pos`
    pub fn properties_at(&self, pos: usize) -> AttributeMap {
        let mut merged = AttributeMap::new();
        for (span, tag) in &self.tags {
            if let SpanTag::Properties(pairs) = tag {
                if span.contains(pos) {
                    for (key, value) in pairs {
                        merged.set(key.clone(), value.clone());
                    }
                }
            }
        }
        merged
    }

    /// The text with one run per stretch of identical effective face
    pub fn styled(&self) -> StyledText {
        let mut styled = StyledText::plain(self.text.clone());
        let mut current: Option<(usize, RunStyle)> = None;

        for pos in 0..self.len() {
            let face = self.face_at(pos);
            let continues = matches!((&current, &face), (Some((_, a)), Some(b)) if a == b);
            if continues {
                continue;
            }
            if let Some((start, style)) = current.take() {
                styled.push_run(start..pos, style);
            }
            current = face.map(|style| (pos, style));
        }

        if let Some((start, style)) = current {
            styled.push_run(start..self.len(), style);
        }

        styled
    }

    fn check_bounds(&self, span: Span) -> Result<(), TagError> {
        let len = self.len();
        if span.end > len {
            return Err(TagError::OutOfBounds { span, len });
        }
        Ok(())
    }
}

impl DocumentTagger for TextDocument {
    fn tag_span(&mut self, span: Span, tag: SpanTag) -> Result<(), TagError> {
        self.check_bounds(span)?;
        tracing::debug!("[TextDocument] {} tagged {:?}", span, tag);
        self.tags.push((span, tag));
        self.version += 1;
        Ok(())
    }
}

impl SelectionProvider for TextDocument {
    fn selection(&self) -> Option<Span> {
        self.selection
    }
}
