// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble parallax.
//!
//! Every bubble drifts up as the page scrolls down, at a speed that grows
//! with its position in the collection: `speed = base + index × step`. Updates
//! are paced by a [`FrameThrottle`], so a burst of scroll events produces at
//! most one repaint per animation frame.

use alloc::format;
use alloc::string::String;

use kurbo::Vec2;

/// Bubble speed table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Speed of the first bubble, as a fraction of the scroll offset.
    pub base_speed: f64,
    /// Extra speed per subsequent bubble.
    pub speed_step: f64,
}

impl ParallaxConfig {
    /// `0.3 + 0.1 × index`.
    #[must_use]
    pub const fn frutiger() -> Self {
        Self {
            base_speed: 0.3,
            speed_step: 0.1,
        }
    }

    /// Speed of the bubble at `index`.
    #[must_use]
    pub fn speed(&self, index: usize) -> f64 {
        self.base_speed + index as f64 * self.speed_step
    }

    /// Translation of the bubble at `index` for the vertical scroll offset
    /// `scroll_y`.
    #[must_use]
    pub fn translation(&self, scroll_y: f64, index: usize) -> Vec2 {
        Vec2::new(0.0, -(scroll_y * self.speed(index)))
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self::frutiger()
    }
}

/// Formats a translation as a CSS `transform` value.
///
/// Only the vertical component is emitted; bubbles never move sideways.
#[must_use]
pub fn css_transform(offset: Vec2) -> String {
    format!("translateY({}px)", offset.y)
}

/// Frame-based throttle: at most one update in flight.
///
/// [`request`](Self::request) returns `true` when the caller should schedule
/// a frame callback, and `false` while one is already pending; those extra
/// triggers are dropped, not queued. The frame callback calls
/// [`finish`](Self::finish) once it has applied the update.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
    dropped: u32,
}

impl FrameThrottle {
    /// Creates an idle throttle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: false,
            dropped: 0,
        }
    }

    /// Records a trigger and reports whether a frame should be scheduled.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        self.pending = true;
        true
    }

    /// Marks the pending frame as done.
    ///
    /// Returns how many triggers were dropped while it was pending and resets
    /// that count.
    pub fn finish(&mut self) -> u32 {
        self.pending = false;
        core::mem::take(&mut self.dropped)
    }

    /// Returns `true` while a frame is scheduled but has not run.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Triggers dropped since the current frame was scheduled.
    #[must_use]
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds_grow_by_step() {
        let c = ParallaxConfig::frutiger();
        assert!((c.speed(0) - 0.3).abs() < 1e-12, "first bubble");
        assert!((c.speed(1) - 0.4).abs() < 1e-12, "second bubble");
        assert!((c.speed(2) - 0.5).abs() < 1e-12, "third bubble");
    }

    #[test]
    fn three_bubbles_at_offset_100() {
        let c = ParallaxConfig::frutiger();
        let ys: [f64; 3] = core::array::from_fn(|i| c.translation(100.0, i).y);
        let expected = [-30.0, -40.0, -50.0];
        for (got, want) in ys.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        assert_eq!(c.translation(100.0, 0).x, 0.0, "no horizontal drift");
    }

    #[test]
    fn css_transform_formats_vertical_offset() {
        assert_eq!(css_transform(Vec2::new(0.0, -30.0)), "translateY(-30px)");
        assert_eq!(css_transform(Vec2::new(0.0, -12.5)), "translateY(-12.5px)");
    }

    #[test]
    fn throttle_drops_triggers_while_pending() {
        let mut t = FrameThrottle::new();
        assert!(t.request(), "first trigger schedules");
        assert!(t.is_pending());
        assert!(!t.request(), "second trigger dropped");
        assert!(!t.request(), "third trigger dropped");
        assert_eq!(t.dropped(), 2);

        assert_eq!(t.finish(), 2, "finish reports dropped count");
        assert!(!t.is_pending());
        assert_eq!(t.dropped(), 0);
        assert!(t.request(), "next frame can be scheduled");
    }

    #[test]
    fn finish_without_drops_reports_zero() {
        let mut t = FrameThrottle::new();
        assert!(t.request());
        assert_eq!(t.finish(), 0);
    }
}
