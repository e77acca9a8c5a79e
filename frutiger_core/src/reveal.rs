// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot scroll reveal.
//!
//! Each registered element starts [`Hidden`](RevealState::Hidden) (transparent,
//! pushed down by [`RevealConfig::offset_px`]) and becomes
//! [`Visible`](RevealState::Visible) the first time enough of it intersects the
//! viewport. The transition is terminal: a revealed element is no longer
//! pending and further intersection reports for it are ignored, so the
//! backend can stop observing it.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;

/// Intersection ratios within this distance below the threshold still count.
///
/// Browsers compute ratios from fractional layout rects, so a crossing
/// reported exactly at the threshold can come back a hair under it.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Scroll-reveal tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible to reveal it.
    pub threshold: f64,
    /// Downward offset of hidden elements, in CSS pixels.
    pub offset_px: f64,
    /// Duration of the opacity and transform transitions, in seconds.
    pub duration_s: f64,
    /// Class added to an element once revealed.
    pub class_name: &'static str,
}

impl RevealConfig {
    /// 10% threshold, 20px slide, 0.6s ease.
    #[must_use]
    pub const fn frutiger() -> Self {
        Self {
            threshold: 0.1,
            offset_px: 20.0,
            duration_s: 0.6,
            class_name: "animate-in",
        }
    }

    /// Translation applied to hidden elements.
    #[must_use]
    pub const fn hidden_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.offset_px)
    }

    /// CSS `transform` of a hidden element.
    #[must_use]
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.hidden_offset().y)
    }

    /// CSS `transition` set on every registered element.
    #[must_use]
    pub fn transition(&self) -> String {
        let d = self.duration_s;
        format!("opacity {d}s ease, transform {d}s ease")
    }

    /// Stylesheet forcing the visible state on revealed elements.
    ///
    /// `!important` is needed because the hidden state is applied as inline
    /// style.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        format!(
            ".{} {{ opacity: 1 !important; transform: translateY(0) !important; }}",
            self.class_name
        )
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::frutiger()
    }
}

/// Per-element reveal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Waiting to enter the viewport.
    Hidden,
    /// Revealed; never observed again.
    Visible,
}

/// Index of a registered element, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealIndex(pub u32);

/// Tracks which registered elements are still waiting to be revealed.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    states: Vec<RevealState>,
    pending: usize,
}

impl RevealTracker {
    /// Creates an empty tracker using `config`'s threshold.
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            states: Vec::new(),
            pending: 0,
        }
    }

    /// Registers a new hidden element and returns its index.
    pub fn register(&mut self) -> RevealIndex {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a page never carries u32::MAX reveal targets"
        )]
        let index = RevealIndex(self.states.len() as u32);
        self.states.push(RevealState::Hidden);
        self.pending += 1;
        index
    }

    /// Feeds one intersection report for `index`.
    ///
    /// Returns `true` exactly once per element: on the report that moves it
    /// from hidden to visible. Reports for revealed or unknown elements are
    /// ignored.
    pub fn observe_intersection(
        &mut self,
        index: RevealIndex,
        is_intersecting: bool,
        ratio: f64,
    ) -> bool {
        let Some(state) = self.states.get_mut(index.0 as usize) else {
            return false;
        };
        if *state == RevealState::Visible {
            return false;
        }
        if !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        *state = RevealState::Visible;
        self.pending -= 1;
        true
    }

    /// Current state of `index`, or `None` if it was never registered.
    #[must_use]
    pub fn state(&self, index: RevealIndex) -> Option<RevealState> {
        self.states.get(index.0 as usize).copied()
    }

    /// Returns `true` if `index` is registered and still hidden.
    #[must_use]
    pub fn is_pending(&self, index: RevealIndex) -> bool {
        self.state(index) == Some(RevealState::Hidden)
    }

    /// Number of elements still hidden.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(n: usize) -> (RevealTracker, Vec<RevealIndex>) {
        let mut t = RevealTracker::new(&RevealConfig::frutiger());
        let ids = (0..n).map(|_| t.register()).collect();
        (t, ids)
    }

    #[test]
    fn reveals_once_at_threshold() {
        let (mut t, ids) = tracker_with(1);
        let id = ids[0];

        assert!(t.observe_intersection(id, true, 0.1), "threshold reached");
        assert_eq!(t.state(id), Some(RevealState::Visible));
        assert!(!t.observe_intersection(id, true, 1.0), "second report ignored");
        assert!(!t.observe_intersection(id, false, 0.0), "never re-hidden");
        assert_eq!(t.state(id), Some(RevealState::Visible));
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let (mut t, ids) = tracker_with(1);
        assert!(!t.observe_intersection(ids[0], true, 0.05));
        assert!(!t.observe_intersection(ids[0], false, 0.0));
        assert!(t.is_pending(ids[0]));
        assert_eq!(t.pending_count(), 1);
    }

    #[test]
    fn rounding_just_under_threshold_counts() {
        let (mut t, ids) = tracker_with(2);
        assert!(t.observe_intersection(ids[0], true, 0.0991), "within tolerance");
        assert!(
            !t.observe_intersection(ids[1], true, 0.098),
            "outside tolerance"
        );
        assert!(t.is_pending(ids[1]));
    }

    #[test]
    fn not_intersecting_never_reveals() {
        let (mut t, ids) = tracker_with(1);
        assert!(!t.observe_intersection(ids[0], false, 0.5));
        assert!(t.is_pending(ids[0]));
    }

    #[test]
    fn elements_reveal_independently() {
        let (mut t, ids) = tracker_with(3);
        assert_eq!(t.pending_count(), 3);

        assert!(t.observe_intersection(ids[1], true, 0.4));
        assert_eq!(t.pending_count(), 2);
        assert!(t.is_pending(ids[0]));
        assert!(!t.is_pending(ids[1]));
        assert!(t.is_pending(ids[2]));

        assert!(t.observe_intersection(ids[0], true, 1.0));
        assert!(t.observe_intersection(ids[2], true, 0.2));
        assert_eq!(t.pending_count(), 0);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let (mut t, _) = tracker_with(1);
        assert!(!t.observe_intersection(RevealIndex(7), true, 1.0));
        assert_eq!(t.state(RevealIndex(7)), None);
        assert_eq!(t.pending_count(), 1);
    }

    #[test]
    fn css_values() {
        let c = RevealConfig::frutiger();
        assert_eq!(c.hidden_transform(), "translateY(20px)");
        assert_eq!(c.transition(), "opacity 0.6s ease, transform 0.6s ease");
        assert_eq!(
            c.stylesheet(),
            ".animate-in { opacity: 1 !important; transform: translateY(0) !important; }"
        );
    }
}
