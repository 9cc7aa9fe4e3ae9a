// SPDX-License-Identifier: MPL-2.0
//! User interface components for the browser chrome.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! module exposes a `Message` enum, an `update` that maps messages to
//! events for the parent, and a `view` over a borrowed context.
//!
//! - [`header`] - Top bar with title, index label, dismiss and share buttons
//! - [`toolbar`] - Bottom bar with idiom-dependent item layout
//! - [`share`] - Share surface (popover on tablet, sheet on phone)
//! - [`design_tokens`] - Layout and styling constants

pub mod design_tokens;
pub mod header;
pub mod share;
pub mod toolbar;
