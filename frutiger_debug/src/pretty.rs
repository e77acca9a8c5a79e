// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use frutiger_core::scroll::LinkAction;
use frutiger_core::toast::ToastPhase;
use frutiger_core::trace::{
    InstallEvent, LinkEvent, ParallaxFrameEvent, PostInsertedEvent, RevealEvent,
    SubscriptionEvent, ToastEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn link_name(action: LinkAction) -> &'static str {
    match action {
        LinkAction::FollowDefault => "default",
        LinkAction::ScrollToTarget => "scroll",
        LinkAction::Suppress => "suppressed",
    }
}

fn phase_name(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Mounted => "mounted",
        ToastPhase::Shown => "shown",
        ToastPhase::Leaving => "leaving",
        ToastPhase::Removed => "removed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_install(&mut self, e: &InstallEvent) {
        let _ = writeln!(
            self.writer,
            "[install] {} targets={}",
            e.behavior.as_str(),
            e.targets,
        );
    }

    fn on_link(&mut self, e: &LinkEvent) {
        let _ = writeln!(self.writer, "[link] {}", link_name(e.action));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] element={} ratio={:.3}",
            e.index.0, e.ratio,
        );
    }

    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        let verdict = if e.accepted { "accepted" } else { "rejected" };
        let _ = writeln!(self.writer, "[newsletter] {verdict}");
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        let _ = writeln!(
            self.writer,
            "[toast] ticket={} {} {}",
            e.ticket.0,
            e.severity.as_str(),
            phase_name(e.phase),
        );
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        let _ = writeln!(
            self.writer,
            "[parallax] scroll_y={:.1} bubbles={} dropped={}",
            e.scroll_y, e.bubbles, e.dropped,
        );
    }

    fn on_post_inserted(&mut self, e: &PostInsertedEvent) {
        let what = if e.inserted { "appended" } else { "no container" };
        let _ = writeln!(self.writer, "[posts] {what}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frutiger_core::toast::{Severity, ToastTicket};
    use frutiger_core::trace::BehaviorKind;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_writer()).expect("trace output is UTF-8")
    }

    #[test]
    fn pretty_print_toast() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_toast(&ToastEvent {
            ticket: ToastTicket(3),
            severity: Severity::Error,
            phase: ToastPhase::Leaving,
        });
        let output = output(sink);
        assert_eq!(output, "[toast] ticket=3 error leaving\n", "got: {output}");
    }

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_install(&InstallEvent {
            behavior: BehaviorKind::Parallax,
            targets: 3,
        });
        sink.on_parallax_frame(&ParallaxFrameEvent {
            scroll_y: 100.0,
            bubbles: 3,
            dropped: 2,
        });
        sink.on_link(&LinkEvent {
            action: LinkAction::Suppress,
        });
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "[install] parallax targets=3",
                "[parallax] scroll_y=100.0 bubbles=3 dropped=2",
                "[link] suppressed",
            ]
        );
    }
}
