//! Keypad calculator: an input/display state machine with a terminal
//! front end.

pub mod calculator;
pub mod config;
pub mod input;
pub mod terminal;
pub mod view;
