//! # Apply Gateway
//!
//! Boundary between a finished face and the host document.
//!
//! The gateway only translates; how a tag lands in the document
//! (overwrite or merge) is the tagger's business.

use crate::{AttributeMap, EditorError, Key, StyleCatalog};
use faceplate_literal::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Half-open range of document positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Result<Self, EditorError> {
        if start > end {
            return Err(EditorError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Zero for a reversed span built without [`Span::new`]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What to attach to a span
#[derive(Debug, Clone, PartialEq)]
pub enum SpanTag {
    /// Replaces the style attribute over the span
    Face(Vec<(Key, Value)>),
    /// Merged into whatever properties the span already carries
    Properties(Vec<(Key, Value)>),
    /// A pre-existing named style
    Named(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TagError {
    #[error("Span {span} is outside the document (length {len})")]
    OutOfBounds { span: Span, len: usize },

    #[error("{0}")]
    Rejected(String),
}

/// Host document that can carry style tags
pub trait DocumentTagger {
    fn tag_span(&mut self, span: Span, tag: SpanTag) -> Result<(), TagError>;
}

/// Source of the span the user has selected
pub trait SelectionProvider {
    fn selection(&self) -> Option<Span>;
}

/// How [`ApplyGateway::apply`] hands a face to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplyMode {
    #[default]
    Face,
    Properties,
}

pub struct ApplyGateway<'a, T: DocumentTagger> {
    tagger: &'a mut T,
    catalog: &'a StyleCatalog,
}

impl<'a, T: DocumentTagger> ApplyGateway<'a, T> {
    pub fn new(tagger: &'a mut T, catalog: &'a StyleCatalog) -> Self {
        Self { tagger, catalog }
    }

    /// Tag `span` with the map's pairs, in map order
    pub fn apply(&mut self, span: Span, map: &AttributeMap, mode: ApplyMode) -> Result<(), EditorError> {
        let pairs = map.to_pairs().to_vec();
        tracing::info!(
            "[ApplyGateway] apply {:?} over {} ({} attributes)",
            mode,
            span,
            pairs.len()
        );

        let tag = match mode {
            ApplyMode::Face => SpanTag::Face(pairs),
            ApplyMode::Properties => SpanTag::Properties(pairs),
        };

        self.tagger.tag_span(span, tag).map_err(|err| {
            tracing::warn!("[ApplyGateway] tagger rejected {}: {}", span, err);
            EditorError::from(err)
        })
    }

    /// Tag `span` with an existing named style
    pub fn apply_named(&mut self, span: Span, name: &str) -> Result<(), EditorError> {
        if !self.catalog.contains(name) {
            return Err(EditorError::UnknownStyle(name.to_string()));
        }
        tracing::info!("[ApplyGateway] apply named style '{}' over {}", name, span);
        self.tagger
            .tag_span(span, SpanTag::Named(name.to_string()))
            .map_err(EditorError::from)
    }
}
