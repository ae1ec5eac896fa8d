//! The calculator state machine.
//!
//! The engine accumulates keypad input into a display string and a
//! pending operation. Events are handled one at a time, each to
//! completion. Invalid events (an operator on an empty display, a second
//! decimal point, equals with nothing to evaluate) are ignored rather
//! than reported.

use std::sync::Arc;

use tracing::debug;

use super::display::{format_number, parse_display, strip_trailing_operator};
use super::operator::{CalcError, OperatorKind, operate};
use super::trace::ExpressionTrace;
use crate::input::Input;

/// Text shown in place of a result when dividing by zero.
pub const DEFAULT_DIVISION_BY_ZERO_MESSAGE: &str = "Dividing by 0, huh...?";

/// Behaviour switches for the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    /// Append the pending operator symbol to the display (`3+`).
    pub echo_operator: bool,
    /// Display text for a division by zero.
    pub division_by_zero_message: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            echo_operator: true,
            division_by_zero_message: DEFAULT_DIVISION_BY_ZERO_MESSAGE.to_string(),
        }
    }
}

/// The operation waiting for its second operand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingState {
    pub first_operand: Option<f64>,
    pub operator: Option<OperatorKind>,
    /// The next digit starts a new number instead of appending.
    pub awaiting_fresh_entry: bool,
}

/// A state change observers can react to.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// An operator was stored with its first operand.
    OperatorApplied { first: f64, op: OperatorKind },
    /// A pending operation was computed, either by equals or by chaining
    /// into the next operator.
    Evaluated {
        first: f64,
        op: OperatorKind,
        second: f64,
        result: Result<f64, CalcError>,
        chained: bool,
    },
    /// A digit replaced the previous display with a new number.
    FreshEntry,
    /// Backspace deleted the echoed operator symbol.
    OperatorRemoved,
    /// Everything was reset.
    Cleared,
}

/// Keypad calculator engine.
pub struct Engine {
    settings: EngineSettings,
    display: String,
    pending: PendingState,
    error: Option<CalcError>,
    trace: ExpressionTrace,
    on_transition: Option<Arc<dyn Fn(&Transition) + Send + Sync>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            display: String::new(),
            pending: PendingState::default(),
            error: None,
            trace: ExpressionTrace::new(),
            on_transition: None,
        }
    }

    /// Set the callback invoked for every transition.
    pub fn set_on_transition(&mut self, callback: impl Fn(&Transition) + Send + Sync + 'static) {
        self.on_transition = Some(Arc::new(callback));
    }

    /// Text for the main display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Text for the secondary expression display.
    pub fn trace(&self) -> &str {
        self.trace.text()
    }

    pub fn pending(&self) -> PendingState {
        self.pending
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.pending.first_operand
    }

    pub fn pending_operator(&self) -> Option<OperatorKind> {
        self.pending.operator
    }

    pub fn is_awaiting_fresh_entry(&self) -> bool {
        self.pending.awaiting_fresh_entry
    }

    /// The error currently shown on the display, if any.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Route one input event to the matching operation.
    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.enter_digit(digit),
            Input::Operator(op) => self.apply_operator(op),
            Input::Equals => self.equals(),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
            Input::ToggleSign => self.toggle_sign(),
        }
    }

    /// Append a digit or decimal point to the number being entered.
    pub fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            debug!(%digit, "ignoring non-digit entry");
            return;
        }

        if self.pending.awaiting_fresh_entry {
            self.display.clear();
            self.pending.awaiting_fresh_entry = false;
            self.error = None;
            self.emit(Transition::FreshEntry);
        }

        let mut entry = self.display.clone();
        if digit == '.' {
            if entry.contains('.') {
                return;
            }
            if entry.is_empty() || entry == "-" {
                entry.push('0');
            }
        } else if entry == "0" || entry == "-0" {
            // Replace a lone zero instead of building a leading zero.
            entry.pop();
        }
        entry.push(digit);

        // The display must always hold a finite number.
        if parse_display(&entry).is_none() {
            debug!(len = entry.len(), "ignoring digit: entry would overflow");
            return;
        }
        self.display = entry;
    }

    /// Store an operator, evaluating any pending operation first.
    pub fn apply_operator(&mut self, op: OperatorKind) {
        if self.error.is_some() {
            return;
        }
        let Some(current) = parse_display(&self.display) else {
            debug!(display = %self.display, "ignoring operator: display is not a number");
            return;
        };

        let first = match (self.pending.first_operand, self.pending.operator) {
            (Some(first), Some(prior)) if !self.pending.awaiting_fresh_entry => {
                let result = operate(prior, first, current);
                self.emit(Transition::Evaluated {
                    first,
                    op: prior,
                    second: current,
                    result,
                    chained: true,
                });
                match result {
                    Ok(value) => {
                        self.display = format_number(value);
                        value
                    }
                    Err(err) => {
                        self.fail(err);
                        return;
                    }
                }
            }
            _ => {
                self.display = strip_trailing_operator(&self.display).to_string();
                current
            }
        };

        self.pending.first_operand = Some(first);
        self.pending.operator = Some(op);
        self.pending.awaiting_fresh_entry = true;
        if self.settings.echo_operator {
            self.display.push(op.symbol());
        }
        self.emit(Transition::OperatorApplied { first, op });
    }

    /// Evaluate the pending operation against the number on the display.
    pub fn equals(&mut self) {
        if self.error.is_some() || self.pending.awaiting_fresh_entry {
            return;
        }
        let (Some(first), Some(op)) = (self.pending.first_operand, self.pending.operator) else {
            return;
        };
        let Some(second) = parse_display(&self.display) else {
            return;
        };

        let result = operate(op, first, second);
        self.emit(Transition::Evaluated {
            first,
            op,
            second,
            result,
            chained: false,
        });

        match result {
            Ok(value) => {
                self.display = format_number(value);
                self.pending = PendingState {
                    first_operand: Some(value),
                    operator: None,
                    awaiting_fresh_entry: true,
                };
            }
            Err(err) => self.fail(err),
        }
    }

    /// Return to the initial state.
    pub fn clear(&mut self) {
        self.display.clear();
        self.pending = PendingState::default();
        self.error = None;
        self.emit(Transition::Cleared);
    }

    /// Same as [`Engine::clear`].
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Delete the last character of the display.
    pub fn backspace(&mut self) {
        if self.error.is_some() {
            return;
        }
        let Some(removed) = self.display.pop() else {
            return;
        };

        // A leading minus is a sign, anything else is an echoed operator.
        if OperatorKind::from_symbol(removed).is_some() && !self.display.is_empty() {
            self.pending.operator = None;
            self.pending.awaiting_fresh_entry = false;
            self.emit(Transition::OperatorRemoved);
        }

        if self.display.is_empty() {
            self.pending.awaiting_fresh_entry = false;
        }
    }

    /// Flip the sign of the number on the display.
    pub fn toggle_sign(&mut self) {
        if self.error.is_some() || self.display.is_empty() {
            return;
        }

        // Right after an operator the sign belongs to the second operand.
        if self.pending.awaiting_fresh_entry && self.pending.operator.is_some() {
            self.display = "-".to_string();
            self.pending.awaiting_fresh_entry = false;
            self.emit(Transition::FreshEntry);
            return;
        }

        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    fn fail(&mut self, err: CalcError) {
        debug!(%err, "calculation failed");
        self.display = match err {
            CalcError::DivisionByZero => self.settings.division_by_zero_message.clone(),
            CalcError::Overflow { negative: false } => "Infinity".to_string(),
            CalcError::Overflow { negative: true } => "-Infinity".to_string(),
        };
        self.pending = PendingState {
            first_operand: None,
            operator: None,
            awaiting_fresh_entry: true,
        };
        self.error = Some(err);
    }

    fn emit(&mut self, transition: Transition) {
        debug!(?transition, "engine transition");
        self.trace.observe(&transition);
        if let Some(ref on_transition) = self.on_transition {
            on_transition(&transition);
        }
    }
}
