// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace events routed to the `log` facade.
//!
//! [`LogSink`] turns each [`TraceSink`] event into one log record. In the
//! browser, `console_log` (set up by [`start`](crate::start)) prints them to
//! the devtools console.

use frutiger_core::scroll::LinkAction;
use frutiger_core::trace::{
    InstallEvent, LinkEvent, ParallaxFrameEvent, PostInsertedEvent, RevealEvent,
    SubscriptionEvent, ToastEvent, TraceSink, Tracer,
};

/// A [`TraceSink`] that logs every event.
///
/// Installs go to `info`, per-interaction events to `debug`, and per-frame
/// parallax repaints to `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_install(&mut self, e: &InstallEvent) {
        log::info!("{}", describe_install(e));
    }

    fn on_link(&mut self, e: &LinkEvent) {
        log::debug!("{}", describe_link(e));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        log::debug!("[reveal] element={} ratio={:.3}", e.index.0, e.ratio);
    }

    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        log::debug!(
            "[newsletter] {}",
            if e.accepted { "accepted" } else { "rejected" }
        );
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        log::debug!(
            "[toast] ticket={} severity={} phase={:?}",
            e.ticket.0,
            e.severity.as_str(),
            e.phase
        );
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        log::trace!(
            "[parallax] scroll_y={:.1} bubbles={} dropped={}",
            e.scroll_y,
            e.bubbles,
            e.dropped
        );
    }

    fn on_post_inserted(&mut self, e: &PostInsertedEvent) {
        if e.inserted {
            log::debug!("[posts] card appended");
        } else {
            log::debug!("[posts] no container, card skipped");
        }
    }
}

fn describe_install(e: &InstallEvent) -> String {
    if e.targets == 0 {
        format!("[install] {}: no targets, skipped", e.behavior.as_str())
    } else {
        format!("[install] {}: {} target(s)", e.behavior.as_str(), e.targets)
    }
}

fn describe_link(e: &LinkEvent) -> String {
    let what = match e.action {
        LinkAction::FollowDefault => "default navigation",
        LinkAction::ScrollToTarget => "smooth scroll",
        LinkAction::Suppress => "no target, ignored",
    };
    format!("[link] {what}")
}

/// Runs `f` with a tracer bound to a fresh [`LogSink`].
pub(crate) fn with_tracer(f: impl FnOnce(&mut Tracer<'_>)) {
    let mut sink = LogSink;
    let mut tracer = Tracer::new(&mut sink);
    f(&mut tracer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use frutiger_core::trace::BehaviorKind;

    #[test]
    fn install_lines() {
        let skipped = InstallEvent {
            behavior: BehaviorKind::Parallax,
            targets: 0,
        };
        assert_eq!(
            describe_install(&skipped),
            "[install] parallax: no targets, skipped"
        );

        let wired = InstallEvent {
            behavior: BehaviorKind::ScrollReveal,
            targets: 6,
        };
        assert_eq!(describe_install(&wired), "[install] scroll-reveal: 6 target(s)");
    }

    #[test]
    fn link_lines() {
        let e = LinkEvent {
            action: LinkAction::Suppress,
        };
        assert_eq!(describe_link(&e), "[link] no target, ignored");
    }

    #[test]
    fn with_tracer_runs_closure_once() {
        let mut calls = 0;
        with_tracer(|_| calls += 1);
        assert_eq!(calls, 1);
    }
}
