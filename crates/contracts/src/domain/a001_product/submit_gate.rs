//! Submission gate for the product form.
//!
//! Decides whether a pending form submission may proceed based on the
//! current values of the product-code and item-name fields. The field
//! values and the yes/no dialog are both injected, so the decision is a
//! total function the frontend wires to the live DOM and the browser
//! confirm, and tests wire to plain closures.

/// Outcome of evaluating the two form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    /// Product code is populated; submission proceeds without interaction.
    Proceed,
    /// Product code is blank; the user must confirm auto-generation.
    NeedsConfirmation { message: String },
}

/// Confirmation text shown when the code field is blank.
/// The item name is trimmed before interpolation.
pub fn prompt_message(item: &str) -> String {
    format!(
        "No product code entered for \"{}\". Generate one automatically?",
        item.trim()
    )
}

/// Evaluate the raw field values. Both are trimmed here; callers pass
/// whatever the input elements currently hold.
pub fn evaluate(code: &str, item: &str) -> SubmitGate {
    if code.trim().is_empty() {
        SubmitGate::NeedsConfirmation {
            message: prompt_message(item),
        }
    } else {
        SubmitGate::Proceed
    }
}

/// Full gate: `true` when the code is populated, otherwise the answer of
/// the injected dialog. `confirm` is invoked at most once, with the
/// interpolated message.
pub fn allow_submit(code: &str, item: &str, confirm: impl FnOnce(&str) -> bool) -> bool {
    match evaluate(code, item) {
        SubmitGate::Proceed => true,
        SubmitGate::NeedsConfirmation { message } => confirm(&message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn populated_code_proceeds_without_prompt() {
        let prompted = Cell::new(false);
        let allowed = allow_submit("ABC123", "Widget", |_| {
            prompted.set(true);
            false
        });
        assert!(allowed);
        assert!(!prompted.get());
    }

    #[test]
    fn populated_code_ignores_item_value() {
        assert_eq!(evaluate("EUK000001", ""), SubmitGate::Proceed);
        assert_eq!(evaluate("  X  ", "anything"), SubmitGate::Proceed);
    }

    #[test]
    fn blank_code_prompts_once_and_returns_answer() {
        let prompts = Cell::new(0);
        let accepted = allow_submit("", "Widget", |msg| {
            prompts.set(prompts.get() + 1);
            assert_eq!(
                msg,
                "No product code entered for \"Widget\". Generate one automatically?"
            );
            true
        });
        assert!(accepted);
        assert_eq!(prompts.get(), 1);

        let declined = allow_submit("", "Widget", |_| false);
        assert!(!declined);
    }

    #[test]
    fn whitespace_code_counts_as_blank() {
        let declined = allow_submit("   ", "", |msg| {
            assert_eq!(
                msg,
                "No product code entered for \"\". Generate one automatically?"
            );
            false
        });
        assert!(!declined);
    }

    #[test]
    fn item_name_is_trimmed_in_message() {
        assert_eq!(
            prompt_message("  Widget  "),
            "No product code entered for \"Widget\". Generate one automatically?"
        );
    }
}
