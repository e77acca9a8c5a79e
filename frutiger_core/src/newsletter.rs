// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newsletter form submission.
//!
//! The form never talks to a server. [`Newsletter::submit`] trims the raw
//! input, validates it, and tells the backend which toast to show and whether
//! to clear the field.

use crate::email::{trim_pattern_space, validate_email};
use crate::toast::Severity;

/// Toast messages shown after a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewsletterMessages {
    /// Shown when the address passes validation.
    pub success: &'static str,
    /// Shown when the address is malformed.
    pub error: &'static str,
}

impl NewsletterMessages {
    /// The blog's Spanish copy.
    #[must_use]
    pub const fn frutiger() -> Self {
        Self {
            success: "¡Gracias por suscribirte! 🎉",
            error: "Por favor, ingresa un email válido.",
        }
    }
}

impl Default for NewsletterMessages {
    fn default() -> Self {
        Self::frutiger()
    }
}

/// Result of one form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionOutcome<'a> {
    /// The trimmed address is syntactically valid.
    Accepted {
        /// The trimmed address.
        email: &'a str,
    },
    /// The trimmed address failed validation.
    Rejected,
}

impl SubscriptionOutcome<'_> {
    /// Whether the input field should be cleared.
    #[must_use]
    pub const fn clears_input(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Severity of the toast to show.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Accepted { .. } => Severity::Success,
            Self::Rejected => Severity::Error,
        }
    }
}

/// Submit handler state for the newsletter form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Newsletter {
    messages: NewsletterMessages,
}

impl Newsletter {
    /// Creates a handler that reports with the given messages.
    #[must_use]
    pub const fn new(messages: NewsletterMessages) -> Self {
        Self { messages }
    }

    /// Decides the outcome for the raw input value.
    #[must_use]
    pub fn submit<'a>(&self, raw: &'a str) -> SubscriptionOutcome<'a> {
        let email = trim_pattern_space(raw);
        if validate_email(email) {
            SubscriptionOutcome::Accepted { email }
        } else {
            SubscriptionOutcome::Rejected
        }
    }

    /// The toast message for `outcome`.
    #[must_use]
    pub const fn message(&self, outcome: &SubscriptionOutcome<'_>) -> &'static str {
        match outcome {
            SubscriptionOutcome::Accepted { .. } => self.messages.success,
            SubscriptionOutcome::Rejected => self.messages.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_clears_and_succeeds() {
        let n = Newsletter::default();
        let outcome = n.submit("user@example.com");
        assert_eq!(
            outcome,
            SubscriptionOutcome::Accepted {
                email: "user@example.com"
            }
        );
        assert!(outcome.clears_input(), "field cleared on success");
        assert_eq!(outcome.severity(), Severity::Success);
        assert_eq!(n.message(&outcome), NewsletterMessages::frutiger().success);
    }

    #[test]
    fn invalid_address_keeps_field_and_errors() {
        let n = Newsletter::default();
        let outcome = n.submit("bad");
        assert_eq!(outcome, SubscriptionOutcome::Rejected);
        assert!(!outcome.clears_input(), "field kept on error");
        assert_eq!(outcome.severity(), Severity::Error);
        assert_eq!(n.message(&outcome), NewsletterMessages::frutiger().error);
    }

    #[test]
    fn input_is_trimmed_before_validation() {
        let n = Newsletter::default();
        assert_eq!(
            n.submit("  a@b.co\n"),
            SubscriptionOutcome::Accepted { email: "a@b.co" }
        );
        assert_eq!(n.submit("   "), SubscriptionOutcome::Rejected);
    }

    #[test]
    fn pasted_byte_order_mark_is_trimmed() {
        let n = Newsletter::default();
        assert_eq!(
            n.submit("\u{feff}a@b.co"),
            SubscriptionOutcome::Accepted { email: "a@b.co" }
        );
    }

    #[test]
    fn trailing_next_line_is_not_trimmed() {
        // U+0085 survives the trim and joins the domain's last segment.
        let n = Newsletter::default();
        assert_eq!(
            n.submit("a@b.co\u{85}"),
            SubscriptionOutcome::Accepted {
                email: "a@b.co\u{85}"
            }
        );
        assert_eq!(
            n.submit("a@b.\u{85}"),
            SubscriptionOutcome::Accepted {
                email: "a@b.\u{85}"
            },
            "NEL counts as text after the dot"
        );
    }

    #[test]
    fn custom_messages_are_used() {
        let n = Newsletter::new(NewsletterMessages {
            success: "thanks",
            error: "nope",
        });
        assert_eq!(n.message(&n.submit("x@y.z")), "thanks");
        assert_eq!(n.message(&n.submit("xyz")), "nope");
    }
}
