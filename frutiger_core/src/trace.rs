// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the page behaviors.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! backends call as behaviors install and react to the page. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::reveal::RevealIndex;
use crate::scroll::LinkAction;
use crate::toast::{Severity, ToastPhase, ToastTicket};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which behavior an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    /// Smooth scrolling for fragment links.
    SmoothScroll,
    /// One-shot fade-in of cards and widgets.
    ScrollReveal,
    /// Newsletter form validation.
    Newsletter,
    /// Toast notifications.
    Toast,
    /// Bubble parallax.
    Parallax,
    /// Post card insertion.
    PostInserter,
}

impl BehaviorKind {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmoothScroll => "smooth-scroll",
            Self::ScrollReveal => "scroll-reveal",
            Self::Newsletter => "newsletter",
            Self::Toast => "toast",
            Self::Parallax => "parallax",
            Self::PostInserter => "post-inserter",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per behavior at page-ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstallEvent {
    /// The behavior that was installed.
    pub behavior: BehaviorKind,
    /// How many elements it attached to; zero means it is a no-op.
    pub targets: u32,
}

/// Emitted for every intercepted or passed-through link click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkEvent {
    /// What the click did.
    pub action: LinkAction,
}

/// Emitted when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEvent {
    /// Registration index of the element.
    pub index: RevealIndex,
    /// Intersection ratio that triggered the reveal.
    pub ratio: f64,
}

/// Emitted for every newsletter submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionEvent {
    /// Whether the address passed validation.
    pub accepted: bool,
}

/// Emitted whenever a toast changes phase, including when it is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastEvent {
    /// Generation of the toast.
    pub ticket: ToastTicket,
    /// Its severity.
    pub severity: Severity,
    /// The phase it just entered.
    pub phase: ToastPhase,
}

/// Emitted after each parallax repaint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrameEvent {
    /// Vertical scroll offset used for the repaint.
    pub scroll_y: f64,
    /// Number of bubbles moved.
    pub bubbles: u32,
    /// Scroll events dropped while this frame was pending.
    pub dropped: u32,
}

/// Emitted for every post insertion request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostInsertedEvent {
    /// `false` when the container was missing.
    pub inserted: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page behaviors.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a behavior finishes installing.
    fn on_install(&mut self, e: &InstallEvent) {
        _ = e;
    }

    /// Called for each link click.
    fn on_link(&mut self, e: &LinkEvent) {
        _ = e;
    }

    /// Called when an element is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called for each newsletter submission.
    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        _ = e;
    }

    /// Called when a toast changes phase.
    fn on_toast(&mut self, e: &ToastEvent) {
        _ = e;
    }

    /// Called after a parallax repaint.
    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        _ = e;
    }

    /// Called for each post insertion request.
    fn on_post_inserted(&mut self, e: &PostInsertedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! emit {
    ($(#[$doc:meta])* $name:ident, $hook:ident, $event:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$hook(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    emit!(
        /// Emits an [`InstallEvent`].
        install, on_install, InstallEvent
    );
    emit!(
        /// Emits a [`LinkEvent`].
        link, on_link, LinkEvent
    );
    emit!(
        /// Emits a [`RevealEvent`].
        reveal, on_reveal, RevealEvent
    );
    emit!(
        /// Emits a [`SubscriptionEvent`].
        subscription, on_subscription, SubscriptionEvent
    );
    emit!(
        /// Emits a [`ToastEvent`].
        toast, on_toast, ToastEvent
    );
    emit!(
        /// Emits a [`ParallaxFrameEvent`].
        parallax_frame, on_parallax_frame, ParallaxFrameEvent
    );
    emit!(
        /// Emits a [`PostInsertedEvent`].
        post_inserted, on_post_inserted, PostInsertedEvent
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        installs: u32,
        toasts: u32,
    }

    impl TraceSink for CountingSink {
        fn on_install(&mut self, _e: &InstallEvent) {
            self.installs += 1;
        }

        fn on_toast(&mut self, _e: &ToastEvent) {
            self.toasts += 1;
        }
    }

    #[test]
    fn none_tracer_accepts_events() {
        let mut t = Tracer::none();
        t.link(&LinkEvent {
            action: LinkAction::Suppress,
        });
        t.subscription(&SubscriptionEvent { accepted: true });
    }

    #[test]
    fn tracer_dispatch_matches_feature() {
        let mut sink = CountingSink::default();
        {
            let mut t = Tracer::new(&mut sink);
            t.install(&InstallEvent {
                behavior: BehaviorKind::Parallax,
                targets: 3,
            });
            t.toast(&ToastEvent {
                ticket: ToastTicket(1),
                severity: Severity::Info,
                phase: ToastPhase::Mounted,
            });
            // Not overridden by the sink; exercises the default body.
            t.post_inserted(&PostInsertedEvent { inserted: false });
        }
        let expected = u32::from(cfg!(feature = "trace"));
        assert_eq!(sink.installs, expected, "install dispatched iff trace");
        assert_eq!(sink.toasts, expected, "toast dispatched iff trace");
    }

    #[test]
    fn behavior_names_are_distinct() {
        let all = [
            BehaviorKind::SmoothScroll,
            BehaviorKind::ScrollReveal,
            BehaviorKind::Newsletter,
            BehaviorKind::Toast,
            BehaviorKind::Parallax,
            BehaviorKind::PostInserter,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
