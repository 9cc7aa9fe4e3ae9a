// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the browser component.
//!
//! The `App` struct owns the browser, an optional delegate, and the window
//! policy (title, default size, full-screen mode). Effects returned by the
//! browser are translated here into Iced tasks: async image decoding,
//! window-mode changes, the save-copy dialog, and delegate callbacks.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::browser::{self, BrowserDelegate};
use crate::config;
use crate::photo::Photo;
use crate::ui::toolbar::Idiom;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;

/// Root Iced application state bridging the browser component, the
/// configuration file, and the host window.
pub struct App {
    title: String,
    browser: browser::State,
    delegate: Option<Box<dyn BrowserDelegate>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("title", &self.title)
            .field("photo_count", &self.browser.photos().len())
            .field("full_screen", &self.browser.is_full_screen())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the configuration
    /// file; the initial page is installed once the window reports open.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut browser = browser::State::new();
        if let Some(color) = config.background_color() {
            browser.set_background(color);
        }
        if let Some(gap) = config.toolbar_item_gap {
            browser.set_toolbar_gap(gap);
        }

        let idiom_override = flags
            .idiom
            .or_else(|| config.idiom.as_deref().and_then(Idiom::parse));
        browser.set_idiom_override(idiom_override);

        browser.set_photos(flags.photos.into_iter().map(Photo::new).collect());

        let app = App {
            title: flags.title.unwrap_or_else(|| String::from("Photos")),
            browser,
            delegate: None,
        };
        (app, Task::none())
    }

    /// Installs a delegate receiving browser callbacks.
    pub fn set_delegate(&mut self, delegate: Box<dyn BrowserDelegate>) {
        self.delegate = Some(delegate);
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn flags() -> Flags {
        Flags {
            title: Some("Holiday".to_string()),
            photos: vec![PathBuf::from("/p/a.jpg"), PathBuf::from("/p/b.jpg")],
            idiom: Some(Idiom::Tablet),
        }
    }

    #[test]
    fn new_app_adopts_flags() {
        let (app, _task) = App::new(flags());
        assert_eq!(app.title(), "Holiday");
        assert_eq!(app.browser.photos().len(), 2);
        assert_eq!(app.browser.idiom(), Idiom::Tablet);
    }

    #[test]
    fn window_open_installs_the_initial_page() {
        let (mut app, _task) = App::new(flags());
        let _task = app.update(Message::WindowOpened(iced::Size::new(1024.0, 768.0)));

        let header = app.browser.header().expect("header after display");
        assert_eq!(header.index_label(), "1/2");
    }

    #[test]
    fn default_title_is_used_without_an_override() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.title(), "Photos");
    }
}
