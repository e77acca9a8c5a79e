// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup failures.

use std::fmt;

use wasm_bindgen::JsValue;

/// Errors raised while wiring behaviors into the page.
///
/// A missing optional element is never an error; behaviors simply skip
/// themselves. These variants cover an environment without a usable DOM and
/// exceptions thrown by DOM calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no `document`.
    NoDocument,
    /// A DOM call threw; carries the exception's text.
    Js(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::Js(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(SetupError::NoWindow.to_string(), "no global window");
        assert_eq!(SetupError::NoDocument.to_string(), "window has no document");
        assert_eq!(
            SetupError::Js(String::from("SyntaxError")).to_string(),
            "DOM call failed: SyntaxError"
        );
    }

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SetupError::NoWindow);
    }
}
