// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast notifications in the DOM.
//!
//! [`ToastHost`] mirrors a [`ToastBoard`] onto a single `<div>` appended to
//! `<body>`. Lifecycle steps run from `gloo_timers` timeouts. Superseding a
//! toast drops the old timeouts, which cancels them, and any step that still
//! fires carries a stale [`ToastTicket`] that the board refuses, so it never
//! touches the newer toast.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use frutiger_core::toast::{
    BASE_STYLE, Severity, ToastBoard, ToastPhase, ToastStep, ToastTicket, ToastTimings,
};
use frutiger_core::trace::ToastEvent;

use crate::SetupError;
use crate::dom::{query_all, set_styles};
use crate::log_sink::with_tracer;

thread_local! {
    static HOST: RefCell<Option<Rc<ToastHost>>> = const { RefCell::new(None) };
}

/// Owns the page's single toast.
pub(crate) struct ToastHost {
    document: Document,
    selector: &'static str,
    timings: ToastTimings,
    state: RefCell<ToastState>,
}

#[derive(Default)]
struct ToastState {
    board: ToastBoard,
    element: Option<HtmlElement>,
    timers: Vec<Timeout>,
}

impl fmt::Debug for ToastHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ToastHost")
            .field("selector", &self.selector)
            .field("timings", &self.timings)
            .field("active", &state.board.active().map(|a| a.ticket))
            .field("pending_timers", &state.timers.len())
            .finish_non_exhaustive()
    }
}

impl ToastHost {
    /// Makes a host for `document` the page's toast host, replacing any
    /// earlier one.
    pub(crate) fn install(document: Document, selector: &'static str, timings: ToastTimings) {
        let host = Rc::new(Self {
            document,
            selector,
            timings,
            state: RefCell::new(ToastState::default()),
        });
        HOST.with(|h| *h.borrow_mut() = Some(host));
    }

    /// The installed host, if any.
    pub(crate) fn current() -> Option<Rc<Self>> {
        HOST.with(|h| h.borrow().clone())
    }

    /// Shows `message`, superseding whatever toast is on screen.
    pub(crate) fn show(self: &Rc<Self>, message: &str, severity: Severity) -> Result<(), SetupError> {
        // Anything matching the selector goes, including toasts this host
        // did not create.
        for stale in query_all::<HtmlElement>(&self.document, self.selector)? {
            stale.remove();
        }

        let ticket = {
            let mut state = self.state.borrow_mut();
            state.timers.clear();
            state.element = None;
            state.board.show(message, severity)
        };

        let Some(body) = self.document.body() else {
            return Ok(());
        };
        let el: HtmlElement = self.document.create_element("div")?.unchecked_into();
        el.set_class_name(severity.class_name());
        el.set_text_content(Some(message));
        set_styles(&el, &BASE_STYLE)?;
        set_styles(&el, &[("background", severity.gradient())])?;
        apply_phase(&el, ToastPhase::Mounted)?;
        body.append_child(&el)?;

        self.trace(ticket, severity, ToastPhase::Mounted);

        let mut state = self.state.borrow_mut();
        state.element = Some(el);
        for step in ToastStep::ON_SHOW {
            let timer = self.schedule(ticket, step);
            state.timers.push(timer);
        }
        Ok(())
    }

    fn schedule(self: &Rc<Self>, ticket: ToastTicket, step: ToastStep) -> Timeout {
        let host = Rc::clone(self);
        Timeout::new(step.delay_ms(&self.timings), move || host.run(ticket, step))
    }

    /// Runs one delayed lifecycle step.
    fn run(self: &Rc<Self>, ticket: ToastTicket, step: ToastStep) {
        let mut state = self.state.borrow_mut();
        let Some(severity) = state.board.active().map(|a| a.severity) else {
            return;
        };
        let Some(phase) = state.board.advance(ticket, step) else {
            return;
        };

        if phase == ToastPhase::Removed {
            if let Some(el) = state.element.take() {
                el.remove();
            }
        } else if let Some(el) = &state.element
            && let Err(err) = apply_phase(el, phase)
        {
            log::warn!("toast: {err}");
        }

        if let Some(next) = step.next() {
            let timer = self.schedule(ticket, next);
            state.timers.push(timer);
        }
        drop(state);
        self.trace(ticket, severity, phase);
    }

    fn trace(&self, ticket: ToastTicket, severity: Severity, phase: ToastPhase) {
        with_tracer(|t| {
            t.toast(&ToastEvent {
                ticket,
                severity,
                phase,
            });
        });
    }
}

fn apply_phase(el: &HtmlElement, phase: ToastPhase) -> Result<(), SetupError> {
    let Some(visual) = phase.visual() else {
        return Ok(());
    };
    set_styles(
        el,
        &[("transform", visual.transform), ("opacity", visual.opacity)],
    )
}
