// Copyright 2026 the FrutigerVibe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior models for the FrutigerVibe blog page.
//!
//! `frutiger_core` holds every decision the page makes, free of any browser
//! API. It is `no_std` compatible (with `alloc`) so the same models run in
//! the wasm backend and in native unit tests.
//!
//! # Architecture
//!
//! Backends turn browser events into calls on these models and apply the
//! answers back to the DOM:
//!
//! ```text
//!   click ────────► scroll::resolve_link() ──► LinkAction
//!   intersection ─► RevealTracker::observe_intersection() ──► RevealEvent
//!   submit ───────► Newsletter::submit() ──► SubscriptionOutcome
//!                                                  │
//!                                                  ▼
//!   show(...) ────► ToastBoard::show() ──► ToastTicket ──► ToastBoard::advance()
//!   scroll ───────► FrameThrottle::request() ──► ParallaxConfig::translation()
//!   addPost(...) ─► PostCard::to_html()
//! ```
//!
//! **[`config`]**: [`PageConfig`](config::PageConfig): selectors, timings and
//! tuning constants, with the stock FrutigerVibe preset.
//!
//! **[`scroll`]**: Fragment-link classification for smooth scrolling.
//!
//! **[`reveal`]**: One-shot reveal tracking for post cards and widgets.
//!
//! **[`email`]** and **[`newsletter`]**: Permissive email syntax check and the
//! subscription form's submit decision.
//!
//! **[`toast`]**: Severity styling and the generation-ticketed singleton
//! toast lifecycle.
//!
//! **[`parallax`]**: Per-bubble speeds and the frame throttle.
//!
//! **[`post`]**: Post card markup with text escaping.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! behavior instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod email;
pub mod newsletter;
pub mod parallax;
pub mod post;
pub mod reveal;
pub mod scroll;
pub mod toast;
pub mod trace;
