// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Permissive email syntax check.
//!
//! [`validate_email`] accepts exactly the strings matched by
//! `^[^\s@]+@[^\s@]+\.[^\s@]+$`: a non-empty local part, a single `@`, and a
//! domain containing a dot with at least one character on each side. It is a
//! syntactic sniff test, not RFC 5322 validation.

/// Returns `true` if `c` is in the `\s` class of a browser regular
/// expression.
///
/// This is Unicode `White_Space` minus U+0085 (NEXT LINE), plus U+FEFF (ZERO
/// WIDTH NO-BREAK SPACE).
fn is_pattern_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// A character allowed in any of the three email segments.
fn is_segment_char(c: char) -> bool {
    c != '@' && !is_pattern_space(c)
}

/// Strips leading and trailing whitespace the way a browser's
/// `String.prototype.trim` does.
///
/// The stripped class is the same as the pattern's `\s`: U+FEFF goes, U+0085
/// stays.
#[must_use]
pub fn trim_pattern_space(text: &str) -> &str {
    text.trim_matches(is_pattern_space)
}

/// Checks `email` against the permissive `local@domain.tld` pattern.
///
/// No trimming is performed; surrounding whitespace makes the address
/// invalid. Callers handling form input should trim first.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_segment_char) {
        return false;
    }
    // A second `@` lands in `domain` and is rejected here.
    if !domain.chars().all(is_segment_char) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
