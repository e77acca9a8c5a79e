// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post card insertion.

use web_sys::Document;

use frutiger_core::post::PostCard;
use frutiger_core::trace::PostInsertedEvent;

use crate::SetupError;
use crate::log_sink::with_tracer;

/// Appends `card` to the first element matching `container`.
///
/// Returns `Ok(false)` without touching the page when no container exists.
pub(crate) fn insert(
    document: &Document,
    container: &str,
    card: &PostCard<'_>,
) -> Result<bool, SetupError> {
    let inserted = match document.query_selector(container)? {
        Some(section) => {
            section.insert_adjacent_html("beforeend", &card.to_html())?;
            true
        }
        None => false,
    };
    with_tracer(|t| t.post_inserted(&PostInsertedEvent { inserted }));
    Ok(inserted)
}
