// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for the FrutigerVibe blog page.
//!
//! This crate wires the [`frutiger_core`] behavior models into the DOM:
//!
//! - smooth scrolling for `#fragment` links
//! - one-shot reveal of post cards and widgets via `IntersectionObserver`
//! - newsletter form validation with toast feedback
//! - singleton toast notifications driven by `gloo_timers`
//! - bubble parallax paced by `requestAnimationFrame`
//! - post card insertion
//!
//! Loading the wasm module runs [`start`], which installs everything once the
//! document is parsed and publishes `window.FrutigerBlog = { addPost,
//! showNotification }` for scripts on the page.
//!
//! Build with: `wasm-pack build --target web frutiger_backend_web`

// Only the pure helpers run on native hosts (in unit tests).
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

mod dom;
mod error;
mod log_sink;
mod newsletter;
mod parallax;
mod posts;
mod reveal;
mod smooth_scroll;
mod toast;

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use frutiger_core::config::PageConfig;
use frutiger_core::post::PostCard;
use frutiger_core::toast::Severity;
use frutiger_core::trace::{BehaviorKind, InstallEvent};

pub use error::SetupError;
pub use frutiger_core;
pub use log_sink::LogSink;

use crate::dom::{js_text, window_and_document};
use crate::log_sink::with_tracer;
use crate::toast::ToastHost;

/// Name of the global object carrying the public functions.
pub const NAMESPACE: &str = "FrutigerBlog";

thread_local! {
    static CONFIG: Cell<PageConfig> = const { Cell::new(PageConfig::frutiger()) };
}

/// The configuration the page was started with.
fn active_config() -> PageConfig {
    CONFIG.with(Cell::get)
}

/// Entry point: called automatically by `wasm_bindgen(start)`.
///
/// # Errors
///
/// Returns the [`SetupError`] (as a JS `Error`) if there is no usable DOM.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second init (e.g. a host page that already set a logger) is fine.
    let _ = console_log::init_with_level(log::Level::Info);
    start_with_config(PageConfig::frutiger())?;
    Ok(())
}

/// Installs the page behaviors with a custom configuration.
///
/// Publishes the [`NAMESPACE`] object immediately and installs the behaviors
/// once the document has been parsed (right away if it already has).
///
/// # Errors
///
/// Returns [`SetupError`] if there is no window or document, or if the
/// namespace object cannot be set.
pub fn start_with_config(config: PageConfig) -> Result<(), SetupError> {
    CONFIG.with(|c| c.set(config));
    let (window, document) = window_and_document()?;

    ToastHost::install(
        document.clone(),
        config.selectors.notification,
        config.toast,
    );
    publish_namespace(&window)?;

    let behaviors = PageBehaviors::new(config);
    if is_loading(&document) {
        let target = document.clone();
        let ready = Closure::once(move || behaviors.install(&window, &document));
        target.add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        // `DOMContentLoaded` fires once; the leaked closure is called at most
        // once.
        ready.forget();
    } else {
        behaviors.install(&window, &document);
    }
    Ok(())
}

/// `document.readyState == "loading"`.
fn is_loading(document: &Document) -> bool {
    still_parsing(&document.ready_state())
}

fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// The set of behaviors installed at page-ready.
///
/// Each behavior installs independently; one failing is logged and does not
/// stop the others.
#[derive(Clone, Copy, Debug)]
pub struct PageBehaviors {
    config: PageConfig,
}

impl PageBehaviors {
    /// Creates the behavior set for `config`.
    #[must_use]
    pub const fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Wires every behavior into `document`.
    pub fn install(&self, window: &Window, document: &Document) {
        let c = &self.config;
        report(
            BehaviorKind::SmoothScroll,
            smooth_scroll::install(document, &c.selectors),
        );
        report(
            BehaviorKind::ScrollReveal,
            reveal::install(document, &c.selectors, &c.reveal),
        );
        report(
            BehaviorKind::Newsletter,
            newsletter::install(document, &c.selectors, c.newsletter),
        );
        report(
            BehaviorKind::Parallax,
            parallax::install(window, document, &c.selectors, &c.parallax),
        );
    }
}

fn report(behavior: BehaviorKind, result: Result<usize, SetupError>) {
    match result {
        Ok(targets) => {
            let targets = u32::try_from(targets).unwrap_or(u32::MAX);
            with_tracer(|t| t.install(&InstallEvent { behavior, targets }));
        }
        Err(err) => log::warn!("{}: install failed: {err}", behavior.as_str()),
    }
}

/// Appends a post card to the posts container.
///
/// `emoji` defaults to the configured placeholder. Returns `false` when the
/// page has no posts container.
///
/// # Errors
///
/// Returns [`SetupError`] if there is no DOM or the insertion throws.
#[wasm_bindgen(js_name = addPost)]
pub fn add_post(
    title: &str,
    excerpt: &str,
    category: &str,
    date: &str,
    emoji: Option<String>,
) -> Result<bool, JsValue> {
    let config = active_config();
    let (_, document) = window_and_document()?;
    let emoji = emoji.as_deref().unwrap_or(config.default_emoji);
    let card = PostCard::new(title, excerpt, category, date).with_emoji(emoji);
    Ok(posts::insert(&document, config.selectors.posts_container, &card)?)
}

/// Shows a toast, replacing any toast on screen.
///
/// `severity` is `"success"`, `"error"` or `"info"` (the default; unknown
/// names also map to info).
///
/// # Errors
///
/// Returns [`SetupError`] if there is no DOM or a DOM call throws.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) -> Result<(), JsValue> {
    let severity = severity.as_deref().map_or(Severity::Info, Severity::parse);
    let host = match ToastHost::current() {
        Some(host) => host,
        None => {
            // Called before `start`: set up a host with the active config.
            let (_, document) = window_and_document()?;
            let config = active_config();
            ToastHost::install(document, config.selectors.notification, config.toast);
            ToastHost::current().ok_or(SetupError::NoDocument)?
        }
    };
    host.show(message, severity)?;
    Ok(())
}

/// Sets `window.FrutigerBlog = { addPost, showNotification }`.
fn publish_namespace(window: &Window) -> Result<(), SetupError> {
    let ns = js_sys::Object::new();

    let add = Closure::wrap(Box::new(
        |title: JsValue, excerpt: JsValue, category: JsValue, date: JsValue, emoji: JsValue| {
            let emoji = emoji.as_string();
            let result = add_post(
                &js_text(&title),
                &js_text(&excerpt),
                &js_text(&category),
                &js_text(&date),
                emoji,
            );
            if let Err(err) = result {
                log::warn!("addPost: {}", SetupError::from(err));
            }
        },
    ) as Box<dyn Fn(JsValue, JsValue, JsValue, JsValue, JsValue)>);
    js_sys::Reflect::set(&ns, &JsValue::from_str("addPost"), add.as_ref())?;
    add.forget();

    let show = Closure::wrap(Box::new(|message: JsValue, severity: JsValue| {
        if let Err(err) = show_notification(&js_text(&message), severity.as_string()) {
            log::warn!("showNotification: {}", SetupError::from(err));
        }
    }) as Box<dyn Fn(JsValue, JsValue)>);
    js_sys::Reflect::set(&ns, &JsValue::from_str("showNotification"), show.as_ref())?;
    show.forget();

    js_sys::Reflect::set(window, &JsValue::from_str(NAMESPACE), &ns)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_defers_install() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"), "DOM is parsed");
        assert!(!still_parsing("complete"));
    }

    #[test]
    fn namespace_name() {
        assert_eq!(NAMESPACE, "FrutigerBlog");
    }
}
