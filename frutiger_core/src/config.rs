// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.
//!
//! [`PageConfig`] gathers the DOM selectors every behavior looks up plus the
//! per-behavior tuning structs defined next to the code that uses them. All
//! fields are `&'static str` or plain numbers, so the whole thing is `Copy`
//! and can be built in a `const` context.

use crate::newsletter::NewsletterMessages;
use crate::parallax::ParallaxConfig;
use crate::reveal::RevealConfig;
use crate::toast::ToastTimings;

/// CSS selectors for the elements each behavior attaches to.
///
/// A selector that matches nothing turns the corresponding behavior into a
/// no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Same-page links intercepted for smooth scrolling.
    pub anchor_links: &'static str,
    /// Elements that fade in when first scrolled into view.
    pub reveal_targets: &'static str,
    /// The newsletter subscription form.
    pub newsletter_form: &'static str,
    /// The email input, looked up inside the newsletter form.
    pub newsletter_input: &'static str,
    /// Any toast currently in the document.
    pub notification: &'static str,
    /// Decorative parallax bubbles.
    pub bubbles: &'static str,
    /// Container that receives inserted post cards.
    pub posts_container: &'static str,
}

impl Selectors {
    /// Selectors matching the FrutigerVibe blog markup.
    #[must_use]
    pub const fn frutiger() -> Self {
        Self {
            anchor_links: "a[href^=\"#\"]",
            reveal_targets: ".post-card, .widget",
            newsletter_form: ".newsletter-form",
            newsletter_input: ".newsletter-input",
            notification: ".notification",
            bubbles: ".bubble",
            posts_container: ".posts-section",
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::frutiger()
    }
}

/// Complete configuration for the page behaviors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Element selectors.
    pub selectors: Selectors,
    /// Scroll-reveal tuning.
    pub reveal: RevealConfig,
    /// Toast enter/display/exit timings.
    pub toast: ToastTimings,
    /// Bubble speed table.
    pub parallax: ParallaxConfig,
    /// Messages shown after a newsletter submission.
    pub newsletter: NewsletterMessages,
    /// Placeholder image used by `addPost` when the caller passes none.
    pub default_emoji: &'static str,
}

impl PageConfig {
    /// The stock FrutigerVibe configuration.
    #[must_use]
    pub const fn frutiger() -> Self {
        Self {
            selectors: Selectors::frutiger(),
            reveal: RevealConfig::frutiger(),
            toast: ToastTimings::frutiger(),
            parallax: ParallaxConfig::frutiger(),
            newsletter: NewsletterMessages::frutiger(),
            default_emoji: "🌟",
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::frutiger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_frutiger_preset() {
        assert_eq!(PageConfig::default(), PageConfig::frutiger());
    }

    #[test]
    fn anchor_selector_only_matches_fragment_links() {
        let s = Selectors::frutiger();
        assert_eq!(s.anchor_links, r##"a[href^="#"]"##);
        assert!(
            s.reveal_targets.contains(".post-card") && s.reveal_targets.contains(".widget"),
            "reveal covers cards and widgets"
        );
    }

    #[test]
    fn stock_timings_and_thresholds() {
        let c = PageConfig::frutiger();
        assert_eq!(c.toast.enter_delay_ms, 100);
        assert_eq!(c.toast.display_ms, 3000);
        assert_eq!(c.toast.exit_ms, 400);
        assert!((c.reveal.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(c.default_emoji, "🌟");
    }
}
