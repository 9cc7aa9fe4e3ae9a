// SPDX-License-Identifier: MPL-2.0
//! Header bar pinned to the top of the browser: photo title, "index/total"
//! label, and the dismiss (left) and share (right) buttons.
//!
//! The browser creates this state lazily on first display and only when the
//! photo sequence is non-empty; refreshes happen after completed page
//! transitions.

use crate::photo::Photo;
use crate::ui::design_tokens::{layout, opacity, palette, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

/// Renders the header index label: one-based index over the total count.
#[must_use]
pub fn index_label(current_index: usize, total: usize) -> String {
    format!("{}/{}", current_index + 1, total)
}

/// Retained header content, refreshed after completed transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    title: String,
    index_label: String,
}

impl State {
    /// Builds header content for the photo at `current_index`.
    #[must_use]
    pub fn new(photos: &[Photo], current_index: usize) -> Self {
        let mut state = Self {
            title: String::new(),
            index_label: String::new(),
        };
        state.refresh(photos, current_index);
        state
    }

    /// Re-derives the title and index label from the current photo.
    pub fn refresh(&mut self, photos: &[Photo], current_index: usize) {
        if let Some(photo) = photos.get(current_index) {
            self.title = photo.display_title();
            self.index_label = index_label(current_index, photos.len());
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn index_label(&self) -> &str {
        &self.index_label
    }
}

/// Messages emitted by the header buttons.
#[derive(Debug, Clone)]
pub enum Message {
    DismissPressed,
    SharePressed,
}

/// Events propagated to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DismissRequested,
    ShareRequested,
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::DismissPressed => Event::DismissRequested,
        Message::SharePressed => Event::ShareRequested,
    }
}

/// Contextual data needed to render the header bar.
pub struct ViewContext<'a> {
    pub state: &'a State,
    /// Chrome fade opacity.
    pub opacity: f32,
}

/// Render the header bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let text_color = iced::Color {
        a: ctx.opacity,
        ..palette::WHITE
    };

    let dismiss_button = button(Text::new("Close").size(typography::BODY).color(text_color))
        .style(button::text)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::DismissPressed);

    let share_button = button(Text::new("Share").size(typography::BODY).color(text_color))
        .style(button::text)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::SharePressed);

    let labels = Column::new()
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.state.title())
                .size(typography::TITLE)
                .color(text_color),
        )
        .push(
            Text::new(ctx.state.index_label())
                .size(typography::CAPTION)
                .color(iced::Color {
                    a: ctx.opacity,
                    ..palette::GRAY_200
                }),
        );

    let row = Row::new()
        .align_y(Vertical::Center)
        .padding([spacing::XS, spacing::SM])
        .push(dismiss_button)
        .push(
            container(labels)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(share_button);

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HEADER_HEIGHT))
        .align_y(Vertical::Bottom)
        .style(move |_theme| container::Style {
            background: Some(
                iced::Color {
                    a: opacity::CHROME_SCRIM * ctx.opacity,
                    ..palette::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::Photo;

    fn sample_photos() -> Vec<Photo> {
        vec![
            Photo::new("/p/a.jpg").with_title("First"),
            Photo::new("/p/b.jpg").with_title("Second"),
            Photo::new("/p/c.jpg"),
        ]
    }

    #[test]
    fn index_label_is_one_based_over_total() {
        assert_eq!(index_label(0, 3), "1/3");
        assert_eq!(index_label(2, 3), "3/3");
    }

    #[test]
    fn state_derives_title_and_label() {
        let photos = sample_photos();
        let state = State::new(&photos, 1);
        assert_eq!(state.title(), "Second");
        assert_eq!(state.index_label(), "2/3");
    }

    #[test]
    fn refresh_tracks_the_new_index() {
        let photos = sample_photos();
        let mut state = State::new(&photos, 0);
        state.refresh(&photos, 2);
        assert_eq!(state.title(), "c");
        assert_eq!(state.index_label(), "3/3");
    }

    #[test]
    fn refresh_with_out_of_range_index_keeps_content() {
        let photos = sample_photos();
        let mut state = State::new(&photos, 0);
        state.refresh(&photos, 9);
        assert_eq!(state.title(), "First");
        assert_eq!(state.index_label(), "1/3");
    }

    #[test]
    fn dismiss_press_maps_to_dismiss_event() {
        assert_eq!(update(Message::DismissPressed), Event::DismissRequested);
    }

    #[test]
    fn share_press_maps_to_share_event() {
        assert_eq!(update(Message::SharePressed), Event::ShareRequested);
    }

    #[test]
    fn header_view_renders() {
        let photos = sample_photos();
        let state = State::new(&photos, 0);
        let _element = view(ViewContext {
            state: &state,
            opacity: 1.0,
        });
    }
}
