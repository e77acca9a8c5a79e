// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Same-page link handling.

/// What a click on a link should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkAction {
    /// Leave the click to the browser (bare `#` or a non-fragment link).
    FollowDefault,
    /// Cancel navigation and smoothly scroll the target into view.
    ScrollToTarget,
    /// Cancel navigation; there is nothing to scroll to.
    Suppress,
}

impl LinkAction {
    /// Returns `true` if the browser's default navigation must be cancelled.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::FollowDefault)
    }
}

/// Returns the fragment selector of a same-page link, e.g. `#posts`.
///
/// The bare `#` and links that are not fragment references yield `None`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Decides the action for a click on a link with `href`.
///
/// `target_exists` is only consulted for real fragment references.
#[must_use]
pub fn resolve_link(href: &str, target_exists: impl FnOnce(&str) -> bool) -> LinkAction {
    match fragment_target(href) {
        None => LinkAction::FollowDefault,
        Some(selector) if target_exists(selector) => LinkAction::ScrollToTarget,
        Some(_) => LinkAction::Suppress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_fragment_is_not_intercepted() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(resolve_link("#", |_| true), LinkAction::FollowDefault);
        assert!(!LinkAction::FollowDefault.prevents_default());
    }

    #[test]
    fn fragment_to_existing_element_scrolls() {
        assert_eq!(fragment_target("#posts"), Some("#posts"));
        let action = resolve_link("#posts", |sel| sel == "#posts");
        assert_eq!(action, LinkAction::ScrollToTarget);
        assert!(action.prevents_default());
    }

    #[test]
    fn fragment_to_missing_element_is_suppressed() {
        let action = resolve_link("#nowhere", |_| false);
        assert_eq!(action, LinkAction::Suppress);
        assert!(action.prevents_default(), "navigation still cancelled");
    }

    #[test]
    fn non_fragment_links_follow_default() {
        assert_eq!(fragment_target("/about"), None);
        assert_eq!(fragment_target("https://example.com/#x"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn lookup_is_skipped_for_bare_fragment() {
        let action = resolve_link("#", |_| panic!("no lookup for bare fragment"));
        assert_eq!(action, LinkAction::FollowDefault);
    }
}
