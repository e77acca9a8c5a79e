// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient toast notifications.
//!
//! At most one toast exists at a time. [`ToastBoard::show`] evicts the
//! current toast and hands out a fresh [`ToastTicket`]; each delayed step of
//! the new toast's lifecycle is then applied with [`ToastBoard::advance`],
//! which refuses tickets that have since been superseded.
//!
//! ```text
//!   show ──► Mounted ──(enter_delay)──► Shown ──(display, from show)──► Leaving ──(exit)──► Removed
//! ```
//!
//! Styling lives here too so every backend renders the same box:
//! [`BASE_STYLE`] for the fixed properties, [`Severity::gradient`] for the
//! background, and [`ToastPhase::visual`] for the animated properties.

use alloc::string::String;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Green, used after a successful action.
    Success,
    /// Red, used for validation failures.
    Error,
    /// Blue, the default.
    #[default]
    Info,
}

impl Severity {
    /// Parses a severity name. Anything unrecognized is [`Severity::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Lowercase name, as used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Full `class` attribute for a toast of this severity.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
        }
    }

    /// CSS background for a toast of this severity.
    #[must_use]
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #56ab2f, #a8e063)",
            Self::Error => "linear-gradient(135deg, #ff416c, #ff4b2b)",
            Self::Info => "linear-gradient(135deg, #00b4db, #0083b0)",
        }
    }
}

/// Fixed inline style of every toast, as `(property, value)` pairs.
///
/// The animated properties (`transform`, `opacity`) start from
/// [`ToastPhase::Mounted`]'s visual and are not listed here.
pub const BASE_STYLE: [(&str, &str); 10] = [
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("padding", "15px 25px"),
    ("border-radius", "12px"),
    ("color", "white"),
    ("font-weight", "600"),
    ("z-index", "9999"),
    ("transition", "all 0.4s ease"),
    ("box-shadow", "0 5px 20px rgba(0, 0, 0, 0.2)"),
];

/// Delays driving a toast's lifecycle, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    /// From mount to the entrance animation.
    pub enter_delay_ms: u32,
    /// From mount to the exit animation.
    pub display_ms: u32,
    /// From the exit animation to removal; matches the CSS transition.
    pub exit_ms: u32,
}

impl ToastTimings {
    /// 100 ms entrance delay, 3 s on screen, 400 ms exit.
    #[must_use]
    pub const fn frutiger() -> Self {
        Self {
            enter_delay_ms: 100,
            display_ms: 3000,
            exit_ms: 400,
        }
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self::frutiger()
    }
}

/// Where a toast is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// In the document, still off-screen and transparent.
    Mounted,
    /// Slid in and fully opaque.
    Shown,
    /// Sliding out.
    Leaving,
    /// Detached from the document.
    Removed,
}

/// Animated style values for a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastVisual {
    /// CSS `transform`.
    pub transform: &'static str,
    /// CSS `opacity`.
    pub opacity: &'static str,
}

const HIDDEN: ToastVisual = ToastVisual {
    transform: "translateY(100px)",
    opacity: "0",
};

const VISIBLE: ToastVisual = ToastVisual {
    transform: "translateY(0)",
    opacity: "1",
};

impl ToastPhase {
    /// The animated style for this phase, or `None` once removed.
    #[must_use]
    pub const fn visual(self) -> Option<ToastVisual> {
        match self {
            Self::Mounted | Self::Leaving => Some(HIDDEN),
            Self::Shown => Some(VISIBLE),
            Self::Removed => None,
        }
    }
}

/// A delayed lifecycle step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastStep {
    /// Animate into view.
    Enter,
    /// Animate out of view.
    Leave,
    /// Detach from the document.
    Remove,
}

impl ToastStep {
    /// Steps scheduled at the moment the toast is shown.
    pub const ON_SHOW: [Self; 2] = [Self::Enter, Self::Leave];

    /// Delay before this step, relative to when it is scheduled.
    ///
    /// [`Enter`](Self::Enter) and [`Leave`](Self::Leave) are scheduled at
    /// show time; [`Remove`](Self::Remove) is scheduled when `Leave` runs.
    #[must_use]
    pub const fn delay_ms(self, timings: &ToastTimings) -> u32 {
        match self {
            Self::Enter => timings.enter_delay_ms,
            Self::Leave => timings.display_ms,
            Self::Remove => timings.exit_ms,
        }
    }

    /// The step to schedule once this one has run.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Leave => Some(Self::Remove),
            Self::Enter | Self::Remove => None,
        }
    }

    /// The phase this step moves to.
    #[must_use]
    pub const fn target(self) -> ToastPhase {
        match self {
            Self::Enter => ToastPhase::Shown,
            Self::Leave => ToastPhase::Leaving,
            Self::Remove => ToastPhase::Removed,
        }
    }
}

/// Generation handle for one shown toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastTicket(pub u64);

/// The toast currently on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveToast {
    /// Generation of this toast.
    pub ticket: ToastTicket,
    /// Text content.
    pub message: String,
    /// Visual category.
    pub severity: Severity,
    /// Current lifecycle phase.
    pub phase: ToastPhase,
}

/// Singleton toast state.
#[derive(Debug, Default)]
pub struct ToastBoard {
    generation: u64,
    active: Option<ActiveToast>,
}

impl ToastBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            active: None,
        }
    }

    /// Replaces any current toast with a new one in [`ToastPhase::Mounted`].
    ///
    /// The previous toast's ticket is invalidated immediately, whatever its
    /// phase.
    pub fn show(&mut self, message: &str, severity: Severity) -> ToastTicket {
        self.generation += 1;
        let ticket = ToastTicket(self.generation);
        self.active = Some(ActiveToast {
            ticket,
            message: String::from(message),
            severity,
            phase: ToastPhase::Mounted,
        });
        ticket
    }

    /// Applies `step` to the toast identified by `ticket`.
    ///
    /// Returns the new phase, or `None` if the ticket has been superseded or
    /// the step does not follow from the current phase. A rejected step
    /// must not touch the DOM.
    pub fn advance(&mut self, ticket: ToastTicket, step: ToastStep) -> Option<ToastPhase> {
        let active = self.active.as_mut().filter(|a| a.ticket == ticket)?;
        let allowed = matches!(
            (active.phase, step),
            (ToastPhase::Mounted, ToastStep::Enter)
                | (ToastPhase::Mounted | ToastPhase::Shown, ToastStep::Leave)
                | (ToastPhase::Leaving, ToastStep::Remove)
        );
        if !allowed {
            return None;
        }
        let phase = step.target();
        if phase == ToastPhase::Removed {
            self.active = None;
        } else {
            active.phase = phase;
        }
        Some(phase)
    }

    /// Returns `true` if `ticket` identifies the toast on the board.
    #[must_use]
    pub fn is_current(&self, ticket: ToastTicket) -> bool {
        self.active.as_ref().is_some_and(|a| a.ticket == ticket)
    }

    /// The toast on the board, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveToast> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parse_falls_back_to_info() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("warning"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn each_severity_has_distinct_gradient_and_class() {
        let all = [Severity::Success, Severity::Error, Severity::Info];
        for (i, a) in all.iter().enumerate() {
            assert!(a.class_name().ends_with(a.as_str()), "class for {a:?}");
            assert!(a.gradient().starts_with("linear-gradient(135deg"));
            for b in &all[i + 1..] {
                assert_ne!(a.gradient(), b.gradient(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn second_show_supersedes_first() {
        let mut board = ToastBoard::new();
        let first = board.show("one", Severity::Info);
        let second = board.show("two", Severity::Error);

        assert_ne!(first, second);
        assert!(!board.is_current(first), "first ticket invalidated");
        assert!(board.is_current(second));
        let active = board.active().expect("one toast on the board");
        assert_eq!(active.message, "two");
        assert_eq!(active.severity, Severity::Error);
    }

    #[test]
    fn stale_ticket_steps_are_rejected() {
        let mut board = ToastBoard::new();
        let first = board.show("one", Severity::Info);
        let second = board.show("two", Severity::Info);

        assert_eq!(board.advance(first, ToastStep::Enter), None);
        assert_eq!(board.advance(first, ToastStep::Leave), None);
        assert_eq!(board.advance(first, ToastStep::Remove), None);

        // The newer toast is untouched by the stale steps.
        let active = board.active().expect("second toast survives");
        assert_eq!(active.ticket, second);
        assert_eq!(active.phase, ToastPhase::Mounted);
    }

    #[test]
    fn full_lifecycle() {
        let mut board = ToastBoard::new();
        let t = board.show("hi", Severity::Success);

        assert_eq!(board.advance(t, ToastStep::Enter), Some(ToastPhase::Shown));
        assert_eq!(board.advance(t, ToastStep::Leave), Some(ToastPhase::Leaving));
        assert_eq!(
            board.advance(t, ToastStep::Remove),
            Some(ToastPhase::Removed)
        );
        assert!(board.active().is_none(), "removed toast leaves the board");
        assert!(!board.is_current(t));
    }

    #[test]
    fn out_of_order_steps_are_rejected() {
        let mut board = ToastBoard::new();
        let t = board.show("hi", Severity::Info);

        assert_eq!(board.advance(t, ToastStep::Remove), None, "remove before leave");
        assert_eq!(board.advance(t, ToastStep::Leave), Some(ToastPhase::Leaving));
        assert_eq!(board.advance(t, ToastStep::Enter), None, "enter after leave");
        assert_eq!(board.advance(t, ToastStep::Leave), None, "leave twice");
    }

    #[test]
    fn step_schedule_matches_timings() {
        let timings = ToastTimings::frutiger();
        assert_eq!(ToastStep::ON_SHOW, [ToastStep::Enter, ToastStep::Leave]);
        assert_eq!(ToastStep::Enter.delay_ms(&timings), 100);
        assert_eq!(ToastStep::Leave.delay_ms(&timings), 3000);
        assert_eq!(ToastStep::Leave.next(), Some(ToastStep::Remove));
        assert_eq!(ToastStep::Remove.delay_ms(&timings), 400);
        assert_eq!(ToastStep::Remove.next(), None);
        assert_eq!(ToastStep::Enter.next(), None);
    }

    #[test]
    fn visuals_slide_in_and_out() {
        let mounted = ToastPhase::Mounted.visual().expect("mounted is visible");
        let shown = ToastPhase::Shown.visual().expect("shown is visible");
        assert_eq!(mounted.opacity, "0");
        assert_eq!(shown.opacity, "1");
        assert_eq!(shown.transform, "translateY(0)");
        assert_eq!(ToastPhase::Leaving.visual(), Some(mounted));
        assert_eq!(ToastPhase::Removed.visual(), None);
    }
}
