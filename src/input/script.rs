//! Key scripts: a compact way to type a sequence of keys.
//!
//! Every non-whitespace character is one key. Named keys go in braces:
//! `12+{Backspace}-3{Enter}`.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::keymap::Input;

lazy_static! {
    /// Matches a braced key name or any single non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(r"\{([^{}]*)\}|\S").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key `{key}` at offset {offset}")]
    UnknownKey { key: String, offset: usize },
}

/// Tokenize a key script into engine events.
pub fn parse_script(script: &str) -> Result<Vec<Input>, ScriptError> {
    KEY_TOKEN
        .captures_iter(script)
        .map(|caps| {
            let offset = caps.get(0).map_or(0, |whole| whole.start());
            let key = caps.get(1).map_or(&caps[0], |name| name.as_str());

            Input::from_key(key).ok_or_else(|| ScriptError::UnknownKey {
                key: key.to_string(),
                offset,
            })
        })
        .collect()
}
