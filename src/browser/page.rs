// SPDX-License-Identifier: MPL-2.0
//! A single preview page: one photo, its decoded image, and press tracking
//! for the long-press gesture.
//!
//! Pages are constructed fresh for every paging query and never cached;
//! revisiting an index reconstructs the page and reloads its image.

use crate::error::Error;
use crate::media::ImageData;
use crate::photo::Photo;
use crate::ui::design_tokens::{palette, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, mouse_area, Text};
use iced::{ContentFit, Element, Length, Point};
use std::time::{Duration, Instant};

/// How long a press must be held before it counts as a long press.
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(500);

/// Maximum pointer travel before a press stops being a long-press candidate.
pub const LONG_PRESS_MOVEMENT_LIMIT: f32 = 10.0;

/// A long press reported upward to the browser delegate.
#[derive(Debug, Clone, PartialEq)]
pub struct LongPress {
    /// Index of the photo the press landed on.
    pub index: usize,
    /// Pointer position when the press began.
    pub position: Point,
}

#[derive(Debug, Clone)]
struct Press {
    started: Instant,
    origin: Point,
    fired: bool,
    cancelled: bool,
}

/// Messages emitted by the page surface.
#[derive(Debug, Clone)]
pub enum Message {
    CursorMoved(Point),
    Pressed,
    Released,
}

/// A constructed preview page for one photo.
#[derive(Debug, Clone)]
pub struct PreviewPage {
    index: usize,
    photo: Photo,
    image: Option<ImageData>,
    load_failed: bool,
    cursor: Option<Point>,
    press: Option<Press>,
}

impl PreviewPage {
    /// Constructs a fresh page for the photo at `index`.
    #[must_use]
    pub fn new(photo: Photo, index: usize) -> Self {
        Self {
            index,
            photo,
            image: None,
            load_failed: false,
            cursor: None,
            press: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    /// The decoded image, once loaded.
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Installs the result of this page's image load. Failures leave the
    /// page showing its placeholder.
    pub fn set_image(&mut self, result: Result<ImageData, Error>) {
        match result {
            Ok(image) => {
                self.image = Some(image);
                self.load_failed = false;
            }
            Err(_) => {
                self.load_failed = true;
            }
        }
    }

    /// Records the pointer position; drifting past the movement limit
    /// cancels a pending long press.
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
        if let Some(press) = &mut self.press {
            let dx = position.x - press.origin.x;
            let dy = position.y - press.origin.y;
            if (dx * dx + dy * dy).sqrt() > LONG_PRESS_MOVEMENT_LIMIT {
                press.cancelled = true;
            }
        }
    }

    /// Begins tracking a press at the last known cursor position.
    pub fn press_started(&mut self, now: Instant) {
        let origin = self.cursor.unwrap_or(Point::ORIGIN);
        self.press = Some(Press {
            started: now,
            origin,
            fired: false,
            cancelled: false,
        });
    }

    /// Ends press tracking.
    pub fn press_ended(&mut self) {
        self.press = None;
    }

    /// Whether a press is currently held.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// The last known pointer position over the page.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Whether the held press still qualifies as a short stationary click:
    /// not drifted, not yet a long press, released before the hold elapses.
    pub fn press_is_click(&self, now: Instant) -> bool {
        self.press.as_ref().is_some_and(|press| {
            !press.fired
                && !press.cancelled
                && now.saturating_duration_since(press.started) < LONG_PRESS_DURATION
        })
    }

    /// Fires at most once per press, once the hold duration elapses without
    /// the pointer drifting away.
    pub fn poll_long_press(&mut self, now: Instant) -> Option<LongPress> {
        let press = self.press.as_mut()?;
        if press.fired || press.cancelled {
            return None;
        }
        if now.saturating_duration_since(press.started) < LONG_PRESS_DURATION {
            return None;
        }
        press.fired = true;
        Some(LongPress {
            index: self.index,
            position: press.origin,
        })
    }

    /// Render the page: the decoded image, or a placeholder while loading
    /// or after a failed load.
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.image {
            Some(data) => image(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => {
                let label = if self.load_failed {
                    "Could not load image"
                } else {
                    "Loading…"
                };
                Text::new(label)
                    .size(typography::BODY)
                    .color(palette::GRAY_200)
                    .into()
            }
        };

        let surface = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        mouse_area(surface)
            .on_move(Message::CursorMoved)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .into()
    }
}
