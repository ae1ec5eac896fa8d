//! Snapshot of the engine for display adapters.

use serde::Serialize;

use crate::calculator::{Engine, OperatorKind};

/// Everything a display adapter needs to render one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayView {
    /// Main display text (number being typed, result, or error message).
    pub display: String,
    /// Running-expression text for the secondary display.
    pub trace: String,
    /// Pending operator, if one is waiting for its second operand.
    pub operator: Option<OperatorKind>,
    pub first_operand: Option<f64>,
    pub awaiting_fresh_entry: bool,
    /// Whether the display holds an error message.
    pub is_error: bool,
}

impl DisplayView {
    /// Capture the current state of an engine.
    pub fn from_engine(engine: &Engine) -> Self {
        Self {
            display: engine.display().to_string(),
            trace: engine.trace().to_string(),
            operator: engine.pending_operator(),
            first_operand: engine.first_operand(),
            awaiting_fresh_entry: engine.is_awaiting_fresh_entry(),
            is_error: engine.is_error(),
        }
    }

    /// Render as text: the trace line (when shown and non-empty) above
    /// the display line, both verbatim.
    pub fn render_text(&self, show_trace: bool) -> String {
        if show_trace && !self.trace.is_empty() {
            format!("{}\n{}", self.trace, self.display)
        } else {
            self.display.clone()
        }
    }

    /// Render as a single line of JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Text worth copying: the display, unless it is empty or an error.
    pub fn text_for_clipboard(&self) -> Option<&str> {
        if self.is_error || self.display.is_empty() {
            None
        } else {
            Some(crate::calculator::strip_trailing_operator(&self.display))
        }
    }
}
