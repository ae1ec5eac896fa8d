//! Input adapter for the calculator engine.
//!
//! This module provides functionality to:
//! - Map key names and keypad button identifiers to engine events
//! - Tokenize key scripts such as `12+3{Enter}`

mod keymap;
mod script;

pub use keymap::Input;
pub use script::{ScriptError, parse_script};
