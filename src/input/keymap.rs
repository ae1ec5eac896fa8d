//! Mapping from keys and buttons to engine events.

use crate::calculator::OperatorKind;

/// A discrete event delivered to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    Operator(OperatorKind),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
}

impl Input {
    /// Map a key name, as reported by a keyboard, to an event.
    ///
    /// Single characters map to digits and operators; named keys
    /// (`Enter`, `Backspace`, `Escape`, `F9`) map to the control events.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "=" | "Enter" | "Return" => Some(Self::Equals),
            "Backspace" | "BS" => Some(Self::Backspace),
            "Escape" | "Esc" | "c" | "C" => Some(Self::Clear),
            "n" | "F9" | "±" => Some(Self::ToggleSign),
            "," => Some(Self::Digit('.')),
            "x" | "X" | "×" => Some(Self::Operator(OperatorKind::Multiply)),
            "÷" => Some(Self::Operator(OperatorKind::Divide)),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Self::from_char(c)
            }
        }
    }

    /// Map a keypad button identifier to an event.
    pub fn from_button(id: &str) -> Option<Self> {
        match id {
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "delete-last" => Some(Self::Backspace),
            "sign" => Some(Self::ToggleSign),
            "decimal" => Some(Self::Digit('.')),
            _ => {
                if let Some(op) = OperatorKind::from_button_id(id) {
                    return Some(Self::Operator(op));
                }
                match id.as_bytes() {
                    [b] if b.is_ascii_digit() || *b == b'.' => Some(Self::Digit(*b as char)),
                    _ => None,
                }
            }
        }
    }

    fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            Some(Self::Digit(c))
        } else {
            OperatorKind::from_symbol(c).map(Self::Operator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for c in "0123456789.".chars() {
            assert_eq!(Input::from_key(&c.to_string()), Some(Input::Digit(c)));
        }
        assert_eq!(Input::from_key(","), Some(Input::Digit('.')));
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            Input::from_key("+"),
            Some(Input::Operator(OperatorKind::Add))
        );
        assert_eq!(
            Input::from_key("-"),
            Some(Input::Operator(OperatorKind::Subtract))
        );
        assert_eq!(
            Input::from_key("*"),
            Some(Input::Operator(OperatorKind::Multiply))
        );
        assert_eq!(
            Input::from_key("x"),
            Some(Input::Operator(OperatorKind::Multiply))
        );
        assert_eq!(
            Input::from_key("/"),
            Some(Input::Operator(OperatorKind::Divide))
        );
        assert_eq!(
            Input::from_key("÷"),
            Some(Input::Operator(OperatorKind::Divide))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Backspace));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("F9"), Some(Input::ToggleSign));
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(Input::from_key(""), None);
        assert_eq!(Input::from_key("%"), None);
        assert_eq!(Input::from_key("Shift"), None);
        assert_eq!(Input::from_key("12"), None);
    }

    #[test]
    fn test_buttons() {
        assert_eq!(
            Input::from_button("plus"),
            Some(Input::Operator(OperatorKind::Add))
        );
        assert_eq!(
            Input::from_button("division"),
            Some(Input::Operator(OperatorKind::Divide))
        );
        assert_eq!(Input::from_button("delete-last"), Some(Input::Backspace));
        assert_eq!(Input::from_button("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_button("decimal"), Some(Input::Digit('.')));
        assert_eq!(Input::from_button("modulo"), None);
    }
}
