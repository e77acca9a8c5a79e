// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated page session that exercises the tracing pipeline natively.
//!
//! Drives the `frutiger_core` behavior models through a scripted session
//! (link clicks, reveals, two newsletter submissions, a scroll burst and a post
//! insertion) on a virtual clock. Every event goes to both a
//! [`PrettyPrintSink`](frutiger_debug::pretty::PrettyPrintSink) on stdout and
//! a [`RecorderSink`](frutiger_debug::recorder::RecorderSink), which is then
//! exported as `trace.json`.

use std::fs::File;
use std::io::BufWriter;

use frutiger_core::config::PageConfig;
use frutiger_core::newsletter::{Newsletter, SubscriptionOutcome};
use frutiger_core::parallax::FrameThrottle;
use frutiger_core::post::PostCard;
use frutiger_core::reveal::RevealTracker;
use frutiger_core::scroll::resolve_link;
use frutiger_core::toast::{Severity, ToastBoard, ToastPhase, ToastStep, ToastTicket};
use frutiger_core::trace::{
    BehaviorKind, InstallEvent, LinkEvent, ParallaxFrameEvent, PostInsertedEvent, RevealEvent,
    SubscriptionEvent, ToastEvent, TraceSink, Tracer,
};

use frutiger_debug::pretty::PrettyPrintSink;
use frutiger_debug::recorder::RecorderSink;

/// Element ids present on the simulated page.
const PAGE_IDS: [&str; 2] = ["#inicio", "#blog"];
const BUBBLES: u32 = 3;

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

macro_rules! tee {
    ($($hook:ident: $event:ty),* $(,)?) => {
        $(
            fn $hook(&mut self, e: &$event) {
                self.pretty.$hook(e);
                self.recorder.$hook(e);
            }
        )*
    };
}

impl TraceSink for Tee<'_> {
    tee! {
        on_install: InstallEvent,
        on_link: LinkEvent,
        on_reveal: RevealEvent,
        on_subscription: SubscriptionEvent,
        on_toast: ToastEvent,
        on_parallax_frame: ParallaxFrameEvent,
        on_post_inserted: PostInsertedEvent,
    }
}

/// A toast step waiting on the virtual clock.
struct Pending {
    due_ms: u32,
    ticket: ToastTicket,
    step: ToastStep,
}

/// The toast board plus its timers, on a virtual clock.
struct ToastClock {
    board: ToastBoard,
    pending: Vec<Pending>,
    now_ms: u32,
}

impl ToastClock {
    fn show(&mut self, t: &mut Tracer<'_>, message: &str, severity: Severity) {
        // Superseding drops every pending step of the previous toast.
        self.pending.clear();
        let ticket = self.board.show(message, severity);
        t.toast(&ToastEvent {
            ticket,
            severity,
            phase: ToastPhase::Mounted,
        });
        let timings = PageConfig::frutiger().toast;
        for step in ToastStep::ON_SHOW {
            self.pending.push(Pending {
                due_ms: self.now_ms + step.delay_ms(&timings),
                ticket,
                step,
            });
        }
    }

    /// Runs every step due up to `until_ms`, in due order.
    fn run_until(&mut self, t: &mut Tracer<'_>, until_ms: u32) {
        let timings = PageConfig::frutiger().toast;
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due_ms <= until_ms)
                .min_by_key(|(_, p)| p.due_ms)
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let Pending {
                due_ms,
                ticket,
                step,
            } = self.pending.swap_remove(i);
            self.now_ms = due_ms;

            let Some(severity) = self.board.active().map(|a| a.severity) else {
                continue;
            };
            let Some(phase) = self.board.advance(ticket, step) else {
                continue;
            };
            t.toast(&ToastEvent {
                ticket,
                severity,
                phase,
            });
            if let Some(next) = step.next() {
                self.pending.push(Pending {
                    due_ms: due_ms + next.delay_ms(&timings),
                    ticket,
                    step: next,
                });
            }
        }
        self.now_ms = until_ms;
    }
}

fn main() {
    let config = PageConfig::frutiger();

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();
    let mut tee = Tee {
        pretty: &mut pretty,
        recorder: &mut recorder,
    };
    let mut t = Tracer::new(&mut tee);

    // -- install -----------------------------------------------------------
    let mut reveal = RevealTracker::new(&config.reveal);
    let cards: Vec<_> = (0..4).map(|_| reveal.register()).collect();
    for (behavior, targets) in [
        (BehaviorKind::SmoothScroll, 3),
        (BehaviorKind::ScrollReveal, 4),
        (BehaviorKind::Newsletter, 1),
        (BehaviorKind::Parallax, 3),
    ] {
        t.install(&InstallEvent { behavior, targets });
    }

    // -- link clicks -------------------------------------------------------
    for href in ["#blog", "#contacto", "#"] {
        let action = resolve_link(href, |selector| PAGE_IDS.contains(&selector));
        t.link(&LinkEvent { action });
    }

    // -- scroll reveal -----------------------------------------------------
    for (card, ratio) in [(0, 0.02), (0, 0.35), (1, 0.1), (0, 1.0), (3, 0.6)] {
        let index = cards[card];
        if reveal.observe_intersection(index, true, ratio) {
            t.reveal(&RevealEvent { index, ratio });
        }
    }

    // -- newsletter + toasts -----------------------------------------------
    let newsletter = Newsletter::new(config.newsletter);
    let mut toasts = ToastClock {
        board: ToastBoard::new(),
        pending: Vec::new(),
        now_ms: 0,
    };
    // The second submission lands while the first toast is still visible.
    for (at_ms, raw) in [(0, "sin-arroba"), (1_500, "\u{feff}lector@frutiger.es ")] {
        toasts.run_until(&mut t, at_ms);
        let outcome = newsletter.submit(raw);
        t.subscription(&SubscriptionEvent {
            accepted: matches!(outcome, SubscriptionOutcome::Accepted { .. }),
        });
        toasts.show(&mut t, newsletter.message(&outcome), outcome.severity());
    }
    toasts.run_until(&mut t, 10_000);

    // -- parallax ----------------------------------------------------------
    let mut throttle = FrameThrottle::new();
    for (burst, scroll_y) in [(5, 120.0), (1, 240.0), (12, 600.0)] {
        for _ in 0..burst {
            _ = throttle.request();
        }
        let dropped = throttle.finish();
        t.parallax_frame(&ParallaxFrameEvent {
            scroll_y,
            bubbles: BUBBLES,
            dropped,
        });
    }

    // -- post insertion ----------------------------------------------------
    let card = PostCard::new(
        "Burbujas & cristal",
        "Un repaso a la estética <Aero>.",
        "Diseño",
        "18 de octubre, 2026",
    );
    let html = card.to_html();
    t.post_inserted(&PostInsertedEvent {
        inserted: !html.is_empty(),
    });

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    recorder
        .export(&mut writer)
        .expect("failed to write trace.json");

    println!("Wrote {path} ({} events)", recorder.events().len());
}
