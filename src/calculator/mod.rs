//! Calculator module for keypad-style arithmetic.
//!
//! This module provides functionality to:
//! - Accumulate digit, operator and control input into a display
//! - Evaluate pending operations with chaining and result rounding
//! - Project the running expression into a secondary display
//! - Copy results to the clipboard

mod clipboard;
mod display;
mod engine;
mod operator;
mod trace;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use display::{format_number, parse_display, strip_trailing_operator};
pub use engine::{
    DEFAULT_DIVISION_BY_ZERO_MESSAGE, Engine, EngineSettings, PendingState, Transition,
};
pub use operator::{CalcError, OperatorKind, RESULT_DECIMALS, operate, round_result};
pub use trace::ExpressionTrace;
