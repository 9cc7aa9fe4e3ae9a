// SPDX-License-Identifier: MPL-2.0
//! Update loop: routes top-level messages into the browser component and
//! performs the effects it returns (image loads, window-mode changes, the
//! save-copy dialog, delegate dispatch).

use super::{App, Message};
use crate::browser;
use crate::media;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;

pub fn handle_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Browser(message) => {
            let effect = app.browser.handle_message(message, Instant::now());
            perform_effect(app, effect)
        }
        Message::WindowOpened(size) => {
            // Seed the idiom derivation before the first layout, then
            // install the initial page.
            app.browser
                .handle_message(browser::Message::Resized(size), Instant::now());
            let effect = app
                .browser
                .handle_message(browser::Message::Shown, Instant::now());
            perform_effect(app, effect)
        }
        Message::EscapePressed => {
            if app.browser.is_full_screen() {
                let effect = app.browser.set_full_screen(false, Instant::now());
                perform_effect(app, effect)
            } else {
                dismiss(app)
            }
        }
        Message::SaveCopyDialogResult {
            source,
            destination,
        } => match destination {
            Some(destination) => write_copy(source, destination),
            None => Task::none(),
        },
        Message::CopyFinished(result) => {
            if let Err(message) = result {
                eprintln!("Failed to save a copy: {message}");
            }
            Task::none()
        }
    }
}

fn perform_effect(app: &mut App, effect: browser::Effect) -> Task<Message> {
    match effect {
        browser::Effect::None => Task::none(),
        browser::Effect::LoadImage { index, path } => load_image(index, path),
        browser::Effect::DismissRequested => dismiss(app),
        browser::Effect::LongPress(gesture) => {
            if let Some(delegate) = app.delegate.as_mut() {
                delegate.long_press_on_image(&gesture);
            }
            Task::none()
        }
        browser::Effect::FullScreenChanged(full_screen) => update_window_mode(full_screen),
        browser::Effect::SaveImageCopy {
            source,
            suggested_name,
        } => save_copy_dialog(source, suggested_name),
        browser::Effect::ToolbarItemActivated(index) => {
            if let Some(mut delegate) = app.delegate.take() {
                delegate.toolbar_item_activated(index, &app.browser);
                app.delegate = Some(delegate);
            }
            Task::none()
        }
    }
}

fn load_image(index: usize, path: PathBuf) -> Task<Message> {
    Task::perform(async move { media::load_photo(&path) }, move |result| {
        Message::Browser(browser::Message::PageImageLoaded { index, result })
    })
}

/// Dismissal prefers the delegate; an unhandled request falls back to
/// closing the browser window.
fn dismiss(app: &mut App) -> Task<Message> {
    if let Some(mut delegate) = app.delegate.take() {
        let consumed = delegate.dismiss_requested(&app.browser);
        app.delegate = Some(delegate);
        if consumed {
            return Task::none();
        }
    }
    window::latest().and_then(window::close)
}

fn update_window_mode(full_screen: bool) -> Task<Message> {
    let mode = if full_screen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::latest().and_then(move |id| window::set_mode(id, mode))
}

fn save_copy_dialog(source: PathBuf, suggested_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Save a Copy")
                .set_file_name(&suggested_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |destination| Message::SaveCopyDialogResult {
            source: source.clone(),
            destination,
        },
    )
}

fn write_copy(source: PathBuf, destination: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            std::fs::copy(&source, &destination)
                .map(|_| ())
                .map_err(|e| e.to_string())
        },
        Message::CopyFinished,
    )
}
