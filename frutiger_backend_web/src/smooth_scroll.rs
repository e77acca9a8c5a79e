// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth scrolling for same-page links.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use frutiger_core::config::Selectors;
use frutiger_core::scroll::{LinkAction, resolve_link};
use frutiger_core::trace::LinkEvent;

use crate::SetupError;
use crate::dom::query_all;
use crate::log_sink::with_tracer;

/// Attaches one shared click handler to every fragment link.
///
/// Returns the number of links wired.
pub(crate) fn install(document: &Document, selectors: &Selectors) -> Result<usize, SetupError> {
    let links: Vec<Element> = query_all(document, selectors.anchor_links)?;
    if links.is_empty() {
        return Ok(0);
    }

    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(link) = event
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };

        // An id that is not a valid selector throws; treat it as missing.
        let mut target = None;
        let action = resolve_link(&href, |selector| {
            target = doc.query_selector(selector).ok().flatten();
            target.is_some()
        });

        if action.prevents_default() {
            event.prevent_default();
        }
        if let (LinkAction::ScrollToTarget, Some(el)) = (action, &target) {
            scroll_to_top_of(el);
        }
        with_tracer(|t| t.link(&LinkEvent { action }));
    }) as Box<dyn FnMut(Event)>);

    for link in &links {
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    }
    // The links keep calling this handler for the page's lifetime.
    on_click.forget();

    Ok(links.len())
}

fn scroll_to_top_of(el: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
