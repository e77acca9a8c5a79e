// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post card markup.
//!
//! [`PostCard::to_html`] produces the same structure as the cards authored in
//! the page, so inserted cards pick up the existing styles. Every field is
//! escaped and lands as text, never as markup.

use alloc::string::String;
use core::fmt::Write as _;

/// Label of the card's "read more" link.
pub const READ_MORE_LABEL: &str = "Leer más →";

/// Icon preceding the date.
pub const DATE_ICON: &str = "📅";

/// One blog post card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostCard<'a> {
    /// Headline.
    pub title: &'a str,
    /// Short summary.
    pub excerpt: &'a str,
    /// Category badge.
    pub category: &'a str,
    /// Publication date, already formatted for display.
    pub date: &'a str,
    /// Emoji shown in place of a cover image.
    pub emoji: &'a str,
}

impl<'a> PostCard<'a> {
    /// Creates a card with the stock 🌟 placeholder.
    #[must_use]
    pub const fn new(title: &'a str, excerpt: &'a str, category: &'a str, date: &'a str) -> Self {
        Self {
            title,
            excerpt,
            category,
            date,
            emoji: "🌟",
        }
    }

    /// Replaces the placeholder emoji.
    #[must_use]
    pub const fn with_emoji(mut self, emoji: &'a str) -> Self {
        self.emoji = emoji;
        self
    }

    /// Renders the card as an `<article class="post-card">` fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str("<article class=\"post-card\">");
        out.push_str("<div class=\"post-image\"><div class=\"post-image-placeholder\">");
        escape_into(&mut out, self.emoji);
        out.push_str("</div></div>");
        out.push_str("<div class=\"post-content\">");
        push_element(&mut out, "span", "post-category", self.category);
        push_element(&mut out, "h4", "post-title", self.title);
        push_element(&mut out, "p", "post-excerpt", self.excerpt);
        out.push_str("<div class=\"post-meta\">");
        out.push_str("<span class=\"post-date\">");
        out.push_str(DATE_ICON);
        out.push(' ');
        escape_into(&mut out, self.date);
        out.push_str("</span>");
        let _ = write!(out, "<a href=\"#\" class=\"read-more\">{READ_MORE_LABEL}</a>");
        out.push_str("</div></div></article>");
        out
    }
}

fn push_element(out: &mut String, tag: &str, class: &str, text: &str) {
    let _ = write!(out, "<{tag} class=\"{class}\">");
    escape_into(out, text);
    let _ = write!(out, "</{tag}>");
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escapes `text` for use as HTML text or a quoted attribute value.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}
