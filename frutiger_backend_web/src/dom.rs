// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM helpers shared by the behaviors.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::SetupError;

/// Returns the global window and its document.
pub(crate) fn window_and_document() -> Result<(Window, Document), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    Ok((window, document))
}

/// All elements matching `selector` that can be cast to `T`, in document
/// order.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, SetupError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Sets each `(property, value)` pair on `el`'s inline style.
pub(crate) fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), SetupError> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Reads a loosely typed JS argument as text.
///
/// Strings pass through, numbers are formatted, and anything else
/// (including `undefined`) becomes empty.
pub(crate) fn js_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .unwrap_or_default()
}
