// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble parallax paced by `requestAnimationFrame`.
//!
//! A window `scroll` listener asks the [`FrameThrottle`] for a frame; only the
//! first request since the last repaint registers the frame callback, so a
//! burst of scroll events costs one repaint. The frame callback reads
//! `pageYOffset` once and moves every bubble.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use frutiger_core::config::Selectors;
use frutiger_core::parallax::{FrameThrottle, ParallaxConfig, css_transform};
use frutiger_core::trace::ParallaxFrameEvent;

use crate::SetupError;
use crate::dom::query_all;
use crate::log_sink::with_tracer;

// Direct global binding instead of `web_sys::Window::request_animation_frame`,
// which returns a `Result` we would only discard.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;
}

type FrameClosure = Closure<dyn FnMut(f64)>;

struct ParallaxInner {
    window: Window,
    bubbles: Vec<HtmlElement>,
    config: ParallaxConfig,
    throttle: RefCell<FrameThrottle>,

    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Created once and re-registered on each scroll burst.
    frame: RefCell<Option<FrameClosure>>,
}

impl ParallaxInner {
    /// Moves every bubble for the current scroll offset.
    fn repaint(&self) {
        let scroll_y = self.window.page_y_offset().unwrap_or_default();
        for (index, bubble) in self.bubbles.iter().enumerate() {
            let offset = self.config.translation(scroll_y, index);
            // A failed style write only costs this frame's visual.
            let _ = bubble
                .style()
                .set_property("transform", &css_transform(offset));
        }
        let dropped = self.throttle.borrow_mut().finish();

        let bubbles = u32::try_from(self.bubbles.len()).unwrap_or(u32::MAX);
        with_tracer(|t| {
            t.parallax_frame(&ParallaxFrameEvent {
                scroll_y,
                bubbles,
                dropped,
            });
        });
    }

    fn on_scroll(&self) {
        if !self.throttle.borrow_mut().request() {
            return;
        }
        if let Some(ref frame) = *self.frame.borrow() {
            request_animation_frame(frame.as_ref().unchecked_ref());
        }
    }
}

/// Starts the parallax effect if the page has any bubbles.
///
/// Returns the number of bubbles driven.
pub(crate) fn install(
    window: &Window,
    document: &Document,
    selectors: &Selectors,
    config: &ParallaxConfig,
) -> Result<usize, SetupError> {
    let bubbles: Vec<HtmlElement> = query_all(document, selectors.bubbles)?;
    if bubbles.is_empty() {
        return Ok(0);
    }
    let count = bubbles.len();

    let inner = Rc::new(ParallaxInner {
        window: window.clone(),
        bubbles,
        config: *config,
        throttle: RefCell::new(FrameThrottle::new()),
        frame: RefCell::new(None),
    });

    let frame_inner = Rc::clone(&inner);
    let frame = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
        frame_inner.repaint();
    }) as Box<dyn FnMut(f64)>);
    *inner.frame.borrow_mut() = Some(frame);

    let scroll_inner = Rc::clone(&inner);
    let on_scroll = Closure::wrap(Box::new(move || {
        scroll_inner.on_scroll();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    // The frame closure stays alive through `inner`, which the scroll
    // handler keeps for the page's lifetime.
    on_scroll.forget();

    Ok(count)
}
