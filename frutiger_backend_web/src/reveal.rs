// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll reveal through `IntersectionObserver`.
//!
//! Targets are hidden with inline styles at install time, then revealed by
//! adding the reveal class once [`RevealTracker`] reports their first
//! qualifying intersection. Revealed elements are unobserved immediately.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use frutiger_core::config::Selectors;
use frutiger_core::reveal::{RevealConfig, RevealIndex, RevealTracker};
use frutiger_core::trace::RevealEvent;

use crate::SetupError;
use crate::dom::{query_all, set_styles};
use crate::log_sink::with_tracer;

type IntersectionClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct RevealState {
    tracker: RevealTracker,
    /// Registered elements, indexed by [`RevealIndex`].
    elements: Vec<HtmlElement>,
    class_name: &'static str,
}

impl RevealState {
    fn index_of(&self, target: &Element) -> Option<RevealIndex> {
        let pos = self.elements.iter().position(|el| {
            let el: &Element = el.as_ref();
            el == target
        })?;
        u32::try_from(pos).ok().map(RevealIndex)
    }
}

/// Hides every reveal target and starts observing it.
///
/// Returns the number of elements registered.
pub(crate) fn install(
    document: &Document,
    selectors: &Selectors,
    config: &RevealConfig,
) -> Result<usize, SetupError> {
    inject_stylesheet(document, config)?;

    let elements: Vec<HtmlElement> = query_all(document, selectors.reveal_targets)?;
    if elements.is_empty() {
        return Ok(0);
    }

    let state = Rc::new(RefCell::new(RevealState {
        tracker: RevealTracker::new(config),
        elements: Vec::with_capacity(elements.len()),
        class_name: config.class_name,
    }));

    let cb_state = Rc::clone(&state);
    let on_intersect: IntersectionClosure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut state = cb_state.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = state.index_of(&target) else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if !state
                    .tracker
                    .observe_intersection(index, entry.is_intersecting(), ratio)
                {
                    continue;
                }
                if let Err(err) = target.class_list().add_1(state.class_name) {
                    log::warn!("reveal: {}", SetupError::from(err));
                }
                observer.unobserve(&target);
                with_tracer(|t| t.reveal(&RevealEvent { index, ratio }));
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    // The observer calls back for as long as the page lives.
    on_intersect.forget();

    let hidden_transform = config.hidden_transform();
    let transition = config.transition();
    let mut state_mut = state.borrow_mut();
    for el in elements {
        set_styles(
            &el,
            &[
                ("opacity", "0"),
                ("transform", &hidden_transform),
                ("transition", &transition),
            ],
        )?;
        state_mut.tracker.register();
        observer.observe(&el);
        state_mut.elements.push(el);
    }
    Ok(state_mut.tracker.len())
}

/// Adds the stylesheet that forces the visible state on revealed elements.
fn inject_stylesheet(document: &Document, config: &RevealConfig) -> Result<(), SetupError> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(&config.stylesheet()));
    head.append_child(&style)?;
    Ok(())
}
