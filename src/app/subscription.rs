// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: window lifecycle, keyboard navigation, and the
//! animation tick that only runs while something is actually animating.

use super::{App, Message};
use crate::browser::{self, Direction};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::{event, time, window, Subscription};
use std::time::{Duration, Instant};

/// Frame interval for the chrome fade and long-press polling.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let events = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowOpened(size))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::Browser(browser::Message::Resized(size)))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => on_key_pressed(&key),
        _ => None,
    });

    let ticks = if app.browser.needs_ticks(Instant::now()) {
        time::every(TICK_INTERVAL).map(|_| Message::Browser(browser::Message::Tick))
    } else {
        Subscription::none()
    };

    Subscription::batch([events, ticks])
}

fn on_key_pressed(key: &Key) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::ArrowRight) => Some(Message::Browser(browser::Message::Navigate(
            Direction::Forward,
        ))),
        Key::Named(Named::ArrowLeft) => Some(Message::Browser(browser::Message::Navigate(
            Direction::Backward,
        ))),
        Key::Named(Named::Escape) => Some(Message::EscapePressed),
        Key::Character(c) if c.eq_ignore_ascii_case("f") => {
            Some(Message::Browser(browser::Message::ToggleFullScreen))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert!(matches!(
            on_key_pressed(&Key::Named(Named::ArrowRight)),
            Some(Message::Browser(browser::Message::Navigate(
                Direction::Forward
            )))
        ));
        assert!(matches!(
            on_key_pressed(&Key::Named(Named::ArrowLeft)),
            Some(Message::Browser(browser::Message::Navigate(
                Direction::Backward
            )))
        ));
    }

    #[test]
    fn escape_maps_to_the_escape_message() {
        assert!(matches!(
            on_key_pressed(&Key::Named(Named::Escape)),
            Some(Message::EscapePressed)
        ));
    }

    #[test]
    fn full_screen_shortcut_ignores_letter_case() {
        for c in ["f", "F"] {
            assert!(
                matches!(
                    on_key_pressed(&Key::Character(c.into())),
                    Some(Message::Browser(browser::Message::ToggleFullScreen))
                ),
                "{c:?} should toggle full-screen"
            );
        }
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        assert!(on_key_pressed(&Key::Character("q".into())).is_none());
        assert!(on_key_pressed(&Key::Named(Named::Tab)).is_none());
    }
}
