// SPDX-License-Identifier: MPL-2.0
//! `iced_pager` is a paged, swipeable full-screen photo browser built with
//! the Iced GUI framework.
//!
//! The crate exposes the browser as a reusable component: callers supply an
//! ordered photo sequence, toolbar items, and an optional delegate, then
//! present the browser as a window. Chrome (header bar and toolbar) is laid
//! out per device idiom and fades away in full-screen mode.

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod media;
pub mod photo;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
