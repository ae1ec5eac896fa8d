//! Binary operators and the arithmetic core.
//!
//! Every result leaving [`operate`] is rounded to [`RESULT_DECIMALS`]
//! decimal places so that binary floating-point noise (`0.1 + 0.2`)
//! never reaches the display.

use serde::Serialize;
use thiserror::Error;

/// Number of decimal places results are rounded to.
pub const RESULT_DECIMALS: i32 = 8;

/// The four binary operations on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperatorKind {
    /// All operators, in keypad order.
    pub const ALL: [OperatorKind; 4] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
    ];

    /// The symbol echoed into the display and the trace.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its display symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Button identifier used by the keypad layout.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }

    /// Look up an operator by its button identifier.
    pub fn from_button_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.button_id() == id)
    }
}

/// The only failures arithmetic can produce. None of these are fatal:
/// the engine shows them in place of a result and keeps running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result out of range")]
    Overflow { negative: bool },
}

/// Apply `op` to `a` and `b`, rounding the result.
pub fn operate(op: OperatorKind, a: f64, b: f64) -> Result<f64, CalcError> {
    let value = match op {
        OperatorKind::Add => a + b,
        OperatorKind::Subtract => a - b,
        OperatorKind::Multiply => a * b,
        OperatorKind::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    // Finite operands and a non-zero divisor never produce NaN.
    if value.is_infinite() {
        Err(CalcError::Overflow {
            negative: value.is_sign_negative(),
        })
    } else {
        Ok(round_result(value))
    }
}

/// Round to [`RESULT_DECIMALS`] places, ties toward positive infinity.
pub fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMALS);
    let scaled = value * scale;

    // Past this point there are no fractional digits left to round.
    if !scaled.is_finite() {
        return value;
    }

    // `scaled - floor` is exact, unlike `(scaled + 0.5).floor()`.
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };

    rounded / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(operate(OperatorKind::Add, 3.0, 4.0), Ok(7.0));
        assert_eq!(operate(OperatorKind::Subtract, 3.0, 4.0), Ok(-1.0));
        assert_eq!(operate(OperatorKind::Multiply, 3.0, 4.0), Ok(12.0));
        assert_eq!(operate(OperatorKind::Divide, 3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            operate(OperatorKind::Divide, 5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            operate(OperatorKind::Divide, 0.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_floating_point_noise_rounded() {
        assert_eq!(operate(OperatorKind::Add, 0.1, 0.2), Ok(0.3));
        assert_eq!(operate(OperatorKind::Multiply, 1.1, 1.1), Ok(1.21));
        assert_eq!(operate(OperatorKind::Divide, 1.0, 3.0), Ok(0.33333333));
    }

    #[test]
    fn test_rounding_to_eight_places() {
        assert_eq!(round_result(0.123456789), 0.12345679);
        assert_eq!(round_result(-0.123456789), -0.12345679);
        assert_eq!(round_result(2.0 / 3.0), 0.66666667);
        assert_eq!(round_result(42.0), 42.0);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            operate(OperatorKind::Multiply, 1e308, 10.0),
            Err(CalcError::Overflow { negative: false })
        );
        assert_eq!(
            operate(OperatorKind::Multiply, -1e308, 10.0),
            Err(CalcError::Overflow { negative: true })
        );
    }

    #[test]
    fn test_large_values_not_rounded_to_infinity() {
        assert_eq!(operate(OperatorKind::Add, 1e305, 1e305), Ok(2e305));
    }

    #[test]
    fn test_symbol_lookup() {
        for op in OperatorKind::ALL {
            assert_eq!(OperatorKind::from_symbol(op.symbol()), Some(op));
            assert_eq!(OperatorKind::from_button_id(op.button_id()), Some(op));
        }
        assert_eq!(OperatorKind::from_symbol('%'), None);
        assert_eq!(OperatorKind::from_button_id("modulo"), None);
    }
}
