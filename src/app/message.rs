// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::browser;
use crate::ui::toolbar::Idiom;
use std::path::PathBuf;

/// Launch parameters collected by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Window title; falls back to a generic one.
    pub title: Option<String>,
    /// Photos to browse, in presentation order.
    pub photos: Vec<PathBuf>,
    /// Forced device idiom from the command line.
    pub idiom: Option<Idiom>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// browser component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    /// The main window opened with the given size.
    WindowOpened(iced::Size),
    /// Escape leaves full-screen mode, or dismisses the browser when
    /// already windowed.
    EscapePressed,
    /// Destination chosen in the save-copy dialog; `None` when cancelled.
    SaveCopyDialogResult {
        source: PathBuf,
        destination: Option<PathBuf>,
    },
    /// Outcome of writing the saved copy.
    CopyFinished(Result<(), String>),
}
