//! Secondary display showing the expression in progress.
//!
//! The trace is a projection of engine transitions and never feeds back
//! into computation.

use super::display::format_number;
use super::engine::Transition;

/// Read-only running-expression text, e.g. `3 + 4 =`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionTrace {
    text: String,
}

impl ExpressionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current trace text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Update the trace for one engine transition.
    pub fn observe(&mut self, transition: &Transition) {
        match *transition {
            Transition::OperatorApplied { first, op } => {
                self.text = format!("{} {}", format_number(first), op.symbol());
            }
            Transition::Evaluated {
                first,
                op,
                second,
                chained,
                ..
            } => {
                self.text = format!(
                    "{} {} {}",
                    format_number(first),
                    op.symbol(),
                    format_number(second)
                );
                if !chained {
                    self.text.push_str(" =");
                }
            }
            Transition::FreshEntry | Transition::OperatorRemoved | Transition::Cleared => {
                self.text.clear()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::operator::OperatorKind;

    #[test]
    fn test_operator_then_equals() {
        let mut trace = ExpressionTrace::new();
        trace.observe(&Transition::OperatorApplied {
            first: 3.0,
            op: OperatorKind::Add,
        });
        assert_eq!(trace.text(), "3 +");

        trace.observe(&Transition::Evaluated {
            first: 3.0,
            op: OperatorKind::Add,
            second: 4.0,
            result: Ok(7.0),
            chained: false,
        });
        assert_eq!(trace.text(), "3 + 4 =");
    }

    #[test]
    fn test_chained_evaluation_has_no_equals() {
        let mut trace = ExpressionTrace::new();
        trace.observe(&Transition::Evaluated {
            first: 0.5,
            op: OperatorKind::Multiply,
            second: -2.0,
            result: Ok(-1.0),
            chained: true,
        });
        assert_eq!(trace.text(), "0.5 * -2");
    }

    #[test]
    fn test_cleared_by_fresh_entry_and_clear() {
        let mut trace = ExpressionTrace::new();
        trace.observe(&Transition::OperatorApplied {
            first: 1.0,
            op: OperatorKind::Divide,
        });
        trace.observe(&Transition::FreshEntry);
        assert_eq!(trace.text(), "");

        trace.observe(&Transition::OperatorApplied {
            first: 1.0,
            op: OperatorKind::Divide,
        });
        trace.observe(&Transition::Cleared);
        assert_eq!(trace.text(), "");
    }
}
