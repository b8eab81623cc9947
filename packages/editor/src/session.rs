//! # Edit Session
//!
//! Interactive loop that builds up a face one attribute at a time.
//!
//! ## States
//!
//! ```text
//!            ┌──────── "" ────────► Terminated
//!            │
//!       AwaitingKey ◄───────────────────────────┐
//!            │ key                               │
//!            ▼                                   │
//!      AwaitingValue ── value ── set, notify ────┤
//!            │ ""                                │
//!            ▼                                   │
//! AwaitingRemovalConfirmation ── yes: remove ────┘
//!                             ── no: unchanged ──┘
//! ```
//!
//! Every transition is one call to [`EditSession::feed`], so a session can
//! be driven by a real prompt surface via [`EditSession::run`] or by a
//! scripted list of responses in tests.
//!
//! An empty value means "remove this key". Typing `nil` stores nil.

use crate::{
    AttributeMap, EditorError, Key, PreviewRenderer, PromptSurface, StyleCatalog, StyledText,
};
use faceplate_literal::parse;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitingKey,
    AwaitingValue { key: Key },
    AwaitingRemovalConfirmation { key: Key },
    Terminated,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::AwaitingKey => "AwaitingKey",
            SessionState::AwaitingValue { .. } => "AwaitingValue",
            SessionState::AwaitingRemovalConfirmation { .. } => "AwaitingRemovalConfirmation",
            SessionState::Terminated => "Terminated",
        }
    }
}

/// What the session wants to ask next
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    Text {
        label: StyledText,
        completions: Vec<String>,
    },
    Confirm {
        label: StyledText,
    },
}

/// One input event
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(String),
    Confirm(bool),
}

impl Response {
    fn name(&self) -> &'static str {
        match self {
            Response::Text(_) => "text",
            Response::Confirm(_) => "a confirmation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// State moved on, face untouched
    Continue,
    /// Face was mutated; `summary` describes its full contents
    Changed { summary: String },
    Terminated,
}

pub struct EditSession<'a> {
    face: &'a mut AttributeMap,
    renderer: PreviewRenderer,
    completions: Vec<String>,
    state: SessionState,
}

impl<'a> EditSession<'a> {
    pub fn new(face: &'a mut AttributeMap, renderer: PreviewRenderer) -> Self {
        Self {
            face,
            renderer,
            completions: Vec::new(),
            state: SessionState::AwaitingKey,
        }
    }

    /// Offer the keys `style` recognizes as completions at the key prompt
    pub fn with_catalog(mut self, catalog: &StyleCatalog, style: &str) -> Self {
        self.completions = catalog.keys_for(style).to_vec();
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn face(&self) -> &AttributeMap {
        &*self.face
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Prompt for the current state, decorated with the live preview
    pub fn prompt(&self) -> Option<Prompt> {
        match &self.state {
            SessionState::AwaitingKey => Some(Prompt::Text {
                label: self.decorate("Face attribute: "),
                completions: self.completions.clone(),
            }),
            SessionState::AwaitingValue { key } => Some(Prompt::Text {
                label: self.decorate(&format!("Value for {}: ", key)),
                completions: Vec::new(),
            }),
            SessionState::AwaitingRemovalConfirmation { key } => Some(Prompt::Confirm {
                label: self.decorate(&format!("Remove property {}? ", key)),
            }),
            SessionState::Terminated => None,
        }
    }

    /// Consume one response. On error the state is left as it was.
    pub fn feed(&mut self, response: Response) -> Result<StepOutcome, EditorError> {
        let state = self.state.clone();

        match (state, response) {
            (SessionState::Terminated, _) => Err(EditorError::SessionTerminated),

            (SessionState::AwaitingKey, Response::Text(text)) => {
                if text.trim().is_empty() {
                    tracing::debug!("[EditSession] empty key, terminating");
                    self.state = SessionState::Terminated;
                    return Ok(StepOutcome::Terminated);
                }
                let key = Key::parse(&text)?;
                tracing::debug!("[EditSession] editing {}", key);
                self.state = SessionState::AwaitingValue { key };
                Ok(StepOutcome::Continue)
            }

            (SessionState::AwaitingValue { key }, Response::Text(text)) => {
                if text.trim().is_empty() {
                    self.state = SessionState::AwaitingRemovalConfirmation { key };
                    return Ok(StepOutcome::Continue);
                }
                let value = parse(&text)?;
                tracing::debug!("[EditSession] set {} = {}", key, value);
                self.face.set(key, value);
                self.state = SessionState::AwaitingKey;
                Ok(self.changed())
            }

            (SessionState::AwaitingRemovalConfirmation { key }, Response::Confirm(yes)) => {
                self.state = SessionState::AwaitingKey;
                if yes {
                    tracing::debug!("[EditSession] remove {}", key);
                    self.face.remove(&key);
                    Ok(self.changed())
                } else {
                    Ok(StepOutcome::Continue)
                }
            }

            (state, response) => Err(EditorError::UnexpectedResponse {
                state: state.name(),
                response: response.name(),
            }),
        }
    }

    /// Drive the session to termination against a prompt surface.
    ///
    /// Malformed input is reported through `notify` and the same prompt is
    /// asked again. Surface failures end the session with an error, leaving
    /// whatever was committed so far in the face.
    pub fn run(&mut self, surface: &mut dyn PromptSurface) -> Result<(), EditorError> {
        while let Some(prompt) = self.prompt() {
            let response = match prompt {
                Prompt::Text { label, completions } => {
                    Response::Text(surface.prompt_text(&label, &completions)?)
                }
                Prompt::Confirm { label } => Response::Confirm(surface.confirm(&label)?),
            };

            match self.feed(response) {
                Ok(StepOutcome::Changed { summary }) => surface.notify(&summary),
                Ok(_) => {}
                Err(err) if err.is_recoverable() => {
                    tracing::warn!("[EditSession] {} in {}", err, self.state.name());
                    surface.notify(&err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    fn decorate(&self, label: &str) -> StyledText {
        self.renderer.decorate(label, &*self.face)
    }

    fn changed(&self) -> StepOutcome {
        StepOutcome::Changed {
            summary: format!("Face: {}", self.face),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceplate_literal::Value;

    fn text(s: &str) -> Response {
        Response::Text(s.to_string())
    }

    #[test]
    fn test_empty_key_terminates() {
        let mut face = AttributeMap::new().with(":weight", Value::symbol("bold"));
        let before = face.clone();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        assert_eq!(session.feed(text("   ")).unwrap(), StepOutcome::Terminated);
        assert!(session.is_terminated());
        assert!(session.prompt().is_none());
        drop(session);
        assert_eq!(face, before);
    }

    #[test]
    fn test_set_value() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        session.feed(text(":weight")).unwrap();
        assert_eq!(
            session.state(),
            &SessionState::AwaitingValue {
                key: Key::new(":weight")
            }
        );

        let outcome = session.feed(text("bold")).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Changed {
                summary: "Face: (:weight bold)".to_string()
            }
        );
        assert_eq!(session.state(), &SessionState::AwaitingKey);
    }

    #[test]
    fn test_nil_literal_is_stored() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        session.feed(text(":background")).unwrap();
        session.feed(text("nil")).unwrap();

        assert_eq!(session.face().get(&Key::new(":background")), Some(&Value::Nil));
    }

    #[test]
    fn test_empty_value_asks_for_removal() {
        let mut face = AttributeMap::new().with(":height", 1.2);
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        session.feed(text(":height")).unwrap();
        assert_eq!(session.feed(text("")).unwrap(), StepOutcome::Continue);
        assert_eq!(
            session.state(),
            &SessionState::AwaitingRemovalConfirmation {
                key: Key::new(":height")
            }
        );
        match session.prompt() {
            Some(Prompt::Confirm { label }) => {
                assert!(label.text.ends_with("Remove property :height? "))
            }
            other => panic!("expected confirm prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_value_keeps_state() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        session.feed(text(":family")).unwrap();
        let err = session.feed(text("\"Fira")).unwrap_err();

        assert!(err.is_recoverable());
        assert_eq!(session.state().name(), "AwaitingValue");
        assert!(session.face().is_empty());
    }

    #[test]
    fn test_runaway_nesting_keeps_state() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        session.feed(text(":box")).unwrap();
        let err = session.feed(text(&"(".repeat(100_000))).unwrap_err();

        assert!(err.is_recoverable());
        assert_eq!(session.state().name(), "AwaitingValue");

        let err = session.feed(text(&"[".repeat(100_000))).unwrap_err();
        assert!(err.is_recoverable());
        assert!(session.face().is_empty());
    }

    #[test]
    fn test_non_atom_key_rejected() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        let err = session.feed(text("42")).unwrap_err();
        assert!(matches!(err, EditorError::MalformedKey(_)));
        assert_eq!(session.state(), &SessionState::AwaitingKey);
    }

    #[test]
    fn test_wrong_response_kind() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());

        let err = session.feed(Response::Confirm(true)).unwrap_err();
        assert!(matches!(
            err,
            EditorError::UnexpectedResponse {
                state: "AwaitingKey",
                ..
            }
        ));
    }

    #[test]
    fn test_feed_after_termination() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default());
        session.feed(text("")).unwrap();

        assert!(matches!(
            session.feed(text(":weight")),
            Err(EditorError::SessionTerminated)
        ));
    }

    #[test]
    fn test_prompts_carry_live_preview() {
        let mut face = AttributeMap::new();
        let mut session = EditSession::new(&mut face, PreviewRenderer::default())
            .with_catalog(&StyleCatalog::default(), "default");

        match session.prompt() {
            Some(Prompt::Text { label, completions }) => {
                assert_eq!(label.text, "[sample] Face attribute: ");
                assert!(completions.iter().any(|k| k == ":slant"));
            }
            other => panic!("expected text prompt, got {:?}", other),
        }

        session.feed(text(":slant")).unwrap();
        session.feed(text("italic")).unwrap();

        let Some(Prompt::Text { label, .. }) = session.prompt() else {
            panic!("expected text prompt");
        };
        let sample_layers = label.runs_at(1);
        assert_eq!(sample_layers.len(), 2);
        assert_eq!(
            sample_layers[1].style,
            crate::RunStyle::Attributes(AttributeMap::new().with(":slant", Value::symbol("italic")))
        );
    }
}
