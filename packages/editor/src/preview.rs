//! # Preview Rendering
//!
//! Produces the `[sample] ` carrier that decorates every prompt, so the
//! user sees the face being edited before committing to it.
//!
//! ```text
//!  [sample]␠
//!  └───────┴─ baseline style, offsets 0..9
//!   └────┘    current attribute set, offsets 1..7
//! ```

use crate::AttributeMap;
use std::ops::Range;

/// Literal carrier text
pub const SAMPLE_TEXT: &str = "[sample] ";

/// Offsets of `sample` inside [`SAMPLE_TEXT`]
pub const SAMPLE_RANGE: Range<usize> = 1..7;

pub const DEFAULT_BASELINE: &str = "prompt";

/// Style attached to a run of text
#[derive(Debug, Clone, PartialEq)]
pub enum RunStyle {
    /// A pre-existing named style
    Named(String),
    /// An explicit attribute set
    Attributes(AttributeMap),
}

/// A styled range; ranges are character offsets
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub style: RunStyle,
}

/// Text with layered style runs. Later runs stack on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    pub text: String,
    pub runs: Vec<StyleRun>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push_run(&mut self, range: Range<usize>, style: RunStyle) {
        self.runs.push(StyleRun { range, style });
    }

    /// Concatenate, shifting the other text's runs past our end
    pub fn append(&mut self, other: StyledText) {
        let offset = self.len();
        self.text.push_str(&other.text);
        self.runs.extend(other.runs.into_iter().map(|run| StyleRun {
            range: run.range.start + offset..run.range.end + offset,
            style: run.style,
        }));
    }

    /// Runs covering a character offset, bottom layer first
    pub fn runs_at(&self, offset: usize) -> Vec<&StyleRun> {
        self.runs
            .iter()
            .filter(|run| run.range.contains(&offset))
            .collect()
    }

    /// Split into maximal segments whose covering runs are identical
    pub fn segments(&self) -> Vec<(String, Vec<&RunStyle>)> {
        let mut segments: Vec<(String, Vec<&RunStyle>)> = Vec::new();

        for (i, ch) in self.text.chars().enumerate() {
            let styles: Vec<&RunStyle> = self.runs_at(i).into_iter().map(|r| &r.style).collect();
            match segments.last_mut() {
                Some((text, last)) if *last == styles => text.push(ch),
                _ => segments.push((ch.to_string(), styles)),
            }
        }

        segments
    }
}

/// Renders the live sample for an attribute set
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRenderer {
    baseline: String,
}

impl PreviewRenderer {
    pub fn new(baseline: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Recomputed on every call; the map may have changed since the last one
    pub fn render(&self, map: &AttributeMap) -> StyledText {
        let mut sample = StyledText::plain(SAMPLE_TEXT);
        sample.push_run(0..SAMPLE_TEXT.len(), RunStyle::Named(self.baseline.clone()));
        sample.push_run(SAMPLE_RANGE, RunStyle::Attributes(map.clone()));
        sample
    }

    /// Prefix a prompt label with the live sample
    pub fn decorate(&self, label: &str, map: &AttributeMap) -> StyledText {
        let mut decorated = self.render(map);

        let mut tail = StyledText::plain(label);
        let len = tail.len();
        tail.push_run(0..len, RunStyle::Named(self.baseline.clone()));
        decorated.append(tail);

        decorated
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceplate_literal::Value;

    #[test]
    fn test_render_shape() {
        let map = AttributeMap::new().with(":weight", Value::symbol("bold"));
        let sample = PreviewRenderer::default().render(&map);

        assert_eq!(sample.text, "[sample] ");
        assert_eq!(sample.len(), 9);
        assert_eq!(sample.runs.len(), 2);
        assert_eq!(sample.runs[0].range, 0..9);
        assert_eq!(sample.runs[0].style, RunStyle::Named("prompt".to_string()));
        assert_eq!(sample.runs[1].range, 1..7);
        assert_eq!(sample.runs[1].style, RunStyle::Attributes(map));
        assert_eq!(&sample.text[SAMPLE_RANGE], "sample");
    }

    #[test]
    fn test_render_tracks_mutations() {
        let renderer = PreviewRenderer::new("minibuffer-prompt");
        let mut map = AttributeMap::new();

        let before = renderer.render(&map);
        map = map.with(":slant", Value::symbol("italic"));
        let after = renderer.render(&map);

        assert_ne!(before, after);
        assert_eq!(after.runs[1].style, RunStyle::Attributes(map));
    }

    #[test]
    fn test_runs_at_edges() {
        let sample = PreviewRenderer::default().render(&AttributeMap::new());
        assert_eq!(sample.runs_at(0).len(), 1);
        assert_eq!(sample.runs_at(1).len(), 2);
        assert_eq!(sample.runs_at(6).len(), 2);
        assert_eq!(sample.runs_at(7).len(), 1);
        assert_eq!(sample.runs_at(9).len(), 0);
    }

    #[test]
    fn test_decorate_appends_label() {
        let decorated = PreviewRenderer::default().decorate("Property: ", &AttributeMap::new());

        assert_eq!(decorated.text, "[sample] Property: ");
        let label_run = decorated.runs.last().unwrap();
        assert_eq!(label_run.range, 9..19);
        assert_eq!(label_run.style, RunStyle::Named("prompt".to_string()));
    }

    #[test]
    fn test_segments() {
        let sample = PreviewRenderer::default().render(&AttributeMap::new());
        let segments = sample.segments();
        let texts: Vec<_> = segments.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["[", "sample", "] "]);
        assert_eq!(segments[1].1.len(), 2);
    }
}
