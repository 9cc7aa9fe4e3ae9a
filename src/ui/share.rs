// SPDX-License-Identifier: MPL-2.0
//! Share surface for the current image.
//!
//! Presentation style branches on idiom: a popover anchored to the share
//! button on tablet, a bottom modal sheet on phone. The surface only opens
//! when the current page has a decoded image; otherwise the share action is
//! a silent no-op (handled by the browser).

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::toolbar::Idiom;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Text};
use iced::{Border, Element, Length, Padding, Rectangle};

/// How the share surface is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Bottom modal sheet spanning the window width (phone idiom).
    Sheet,
    /// Popover anchored to the share button's frame (tablet idiom).
    Popover { anchor: Rectangle },
}

/// Open share surface state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    presentation: Presentation,
}

impl State {
    /// Chooses the presentation for the given idiom and button frame.
    #[must_use]
    pub fn for_idiom(idiom: Idiom, anchor: Rectangle) -> Self {
        let presentation = match idiom {
            Idiom::Tablet => Presentation::Popover { anchor },
            Idiom::Phone => Presentation::Sheet,
        };
        Self { presentation }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }
}

/// Messages emitted by the share surface.
#[derive(Debug, Clone)]
pub enum Message {
    SaveCopyPressed,
    CancelPressed,
}

/// Events propagated to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SaveCopyRequested,
    Dismissed,
}

/// Process a share message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SaveCopyPressed => Event::SaveCopyRequested,
        Message::CancelPressed => Event::Dismissed,
    }
}

/// Render the share surface as a floating layer over the browser.
pub fn view(state: &State) -> Element<'_, Message> {
    let actions = Column::new()
        .spacing(spacing::XXS)
        .push(action_button("Save a copy…", Message::SaveCopyPressed))
        .push(action_button("Cancel", Message::CancelPressed));

    let panel = container(actions)
        .padding(spacing::XS)
        .style(|_theme| container::Style {
            background: Some(palette::GRAY_900.into()),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: palette::GRAY_700,
            },
            ..container::Style::default()
        });

    match state.presentation() {
        Presentation::Sheet => container(panel.width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom)
            .padding(spacing::SM)
            .into(),
        Presentation::Popover { anchor } => container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top)
            .padding(Padding {
                top: anchor.y + anchor.height,
                right: spacing::SM,
                bottom: 0.0,
                left: 0.0,
            })
            .into(),
    }
}

fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(
        Text::new(label)
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .style(button::text)
    .padding([spacing::XS, spacing::SM])
    .width(Length::Fill)
    .on_press(message)
    .into()
}
