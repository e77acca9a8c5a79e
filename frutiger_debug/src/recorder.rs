// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording and JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event as a
//! [`RecordedEvent`]. [`RecorderSink::to_json`] turns the log into a JSON
//! array of `{ "kind": ..., ... }` objects for offline inspection.

use std::io::{self, Write};

use serde_json::{Value, json};

use frutiger_core::trace::{
    InstallEvent, LinkEvent, ParallaxFrameEvent, PostInsertedEvent, RevealEvent,
    SubscriptionEvent, ToastEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`InstallEvent`].
    Install(InstallEvent),
    /// A [`LinkEvent`].
    Link(LinkEvent),
    /// A [`RevealEvent`].
    Reveal(RevealEvent),
    /// A [`SubscriptionEvent`].
    Subscription(SubscriptionEvent),
    /// A [`ToastEvent`].
    Toast(ToastEvent),
    /// A [`ParallaxFrameEvent`].
    ParallaxFrame(ParallaxFrameEvent),
    /// A [`PostInsertedEvent`].
    PostInserted(PostInsertedEvent),
}

impl RecordedEvent {
    /// Serializes the event as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Install(e) => json!({
                "kind": "install",
                "behavior": e.behavior.as_str(),
                "targets": e.targets,
            }),
            Self::Link(e) => json!({
                "kind": "link",
                "action": format!("{:?}", e.action),
            }),
            Self::Reveal(e) => json!({
                "kind": "reveal",
                "index": e.index.0,
                "ratio": e.ratio,
            }),
            Self::Subscription(e) => json!({
                "kind": "subscription",
                "accepted": e.accepted,
            }),
            Self::Toast(e) => json!({
                "kind": "toast",
                "ticket": e.ticket.0,
                "severity": e.severity.as_str(),
                "phase": format!("{:?}", e.phase),
            }),
            Self::ParallaxFrame(e) => json!({
                "kind": "parallax_frame",
                "scroll_y": e.scroll_y,
                "bubbles": e.bubbles,
                "dropped": e.dropped,
            }),
            Self::PostInserted(e) => json!({
                "kind": "post_inserted",
                "inserted": e.inserted,
            }),
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the log as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(self.events.iter().map(RecordedEvent::to_json).collect())
    }

    /// Writes the log as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `writer`.
    pub fn export(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.to_json())?;
        writeln!(writer)
    }
}

impl TraceSink for RecorderSink {
    fn on_install(&mut self, e: &InstallEvent) {
        self.events.push(RecordedEvent::Install(*e));
    }

    fn on_link(&mut self, e: &LinkEvent) {
        self.events.push(RecordedEvent::Link(*e));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.events.push(RecordedEvent::Reveal(*e));
    }

    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        self.events.push(RecordedEvent::Subscription(*e));
    }

    fn on_toast(&mut self, e: &ToastEvent) {
        self.events.push(RecordedEvent::Toast(*e));
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        self.events.push(RecordedEvent::ParallaxFrame(*e));
    }

    fn on_post_inserted(&mut self, e: &PostInsertedEvent) {
        self.events.push(RecordedEvent::PostInserted(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frutiger_core::reveal::RevealIndex;
    use frutiger_core::toast::{Severity, ToastBoard, ToastPhase, ToastStep};
    use frutiger_core::trace::Tracer;

    #[test]
    fn records_through_tracer() {
        let mut rec = RecorderSink::new();
        {
            let mut t = Tracer::new(&mut rec);
            t.subscription(&SubscriptionEvent { accepted: false });
            t.reveal(&RevealEvent {
                index: RevealIndex(2),
                ratio: 0.25,
            });
        }
        assert_eq!(
            rec.events(),
            [
                RecordedEvent::Subscription(SubscriptionEvent { accepted: false }),
                RecordedEvent::Reveal(RevealEvent {
                    index: RevealIndex(2),
                    ratio: 0.25,
                }),
            ]
        );
    }

    #[test]
    fn superseded_toast_leaves_one_trail() {
        // Drive a board the way the web host does and record each phase.
        let mut board = ToastBoard::new();
        let mut rec = RecorderSink::new();
        let first = board.show("uno", Severity::Info);
        let second = board.show("dos", Severity::Success);
        for (ticket, step) in [
            (first, ToastStep::Enter),
            (second, ToastStep::Enter),
            (first, ToastStep::Leave),
            (second, ToastStep::Leave),
            (second, ToastStep::Remove),
        ] {
            if let Some(phase) = board.advance(ticket, step) {
                rec.on_toast(&ToastEvent {
                    ticket,
                    severity: Severity::Success,
                    phase,
                });
            }
        }
        let phases: Vec<ToastPhase> = rec
            .events()
            .iter()
            .map(|e| match e {
                RecordedEvent::Toast(t) => {
                    assert_eq!(t.ticket, second, "stale ticket never recorded");
                    t.phase
                }
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(
            phases,
            [ToastPhase::Shown, ToastPhase::Leaving, ToastPhase::Removed]
        );
    }

    #[test]
    fn json_export() {
        let mut rec = RecorderSink::new();
        rec.on_parallax_frame(&ParallaxFrameEvent {
            scroll_y: 100.0,
            bubbles: 3,
            dropped: 1,
        });
        rec.on_post_inserted(&PostInsertedEvent { inserted: true });

        let json = rec.to_json();
        assert_eq!(json[0]["kind"], "parallax_frame");
        assert_eq!(json[0]["bubbles"], 3);
        assert_eq!(json[1]["kind"], "post_inserted");
        assert_eq!(json[1]["inserted"], true);

        let mut out = Vec::new();
        rec.export(&mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("JSON is UTF-8");
        let parsed: Value = serde_json::from_str(&text).expect("export is valid JSON");
        assert_eq!(parsed, json);
    }
}
