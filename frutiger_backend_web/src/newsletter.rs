// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newsletter form submit handling.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlInputElement};

use frutiger_core::config::Selectors;
use frutiger_core::newsletter::{Newsletter, NewsletterMessages, SubscriptionOutcome};
use frutiger_core::trace::SubscriptionEvent;

use crate::SetupError;
use crate::log_sink::with_tracer;
use crate::toast::ToastHost;

/// Intercepts submission of the newsletter form, if the page has one.
///
/// Returns the number of forms wired (zero or one).
pub(crate) fn install(
    document: &Document,
    selectors: &Selectors,
    messages: NewsletterMessages,
) -> Result<usize, SetupError> {
    let Some(form) = document.query_selector(selectors.newsletter_form)? else {
        return Ok(0);
    };

    let newsletter = Newsletter::new(messages);
    let input_selector = selectors.newsletter_input;
    let handler_form = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let Some(input) = handler_form
            .query_selector(input_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let raw = input.value();
        let outcome = newsletter.submit(&raw);
        if outcome.clears_input() {
            input.set_value("");
        }
        with_tracer(|t| {
            t.subscription(&SubscriptionEvent {
                accepted: matches!(outcome, SubscriptionOutcome::Accepted { .. }),
            });
        });

        let Some(host) = ToastHost::current() else {
            return;
        };
        if let Err(err) = host.show(newsletter.message(&outcome), outcome.severity()) {
            log::warn!("newsletter: {err}");
        }
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(1)
}
