// SPDX-License-Identifier: MPL-2.0
//! Bottom toolbar hosting caller-supplied action buttons.
//!
//! Item placement depends on the device idiom and the item count. The
//! placement rules are a pure function of `(item count, idiom)` and are
//! expressed as an ordered slot sequence so they can be tested without a
//! rendering backend.

use crate::ui::design_tokens::{layout, opacity, palette, spacing, typography};
use iced::widget::{button, container, Row, Space, Text};
use iced::{Element, Length};

/// A caller-supplied toolbar action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarItem {
    label: String,
}

impl ToolbarItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Device form-factor category used to branch chrome layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Idiom {
    #[default]
    Phone,
    Tablet,
}

impl Idiom {
    /// Derives the idiom from the window width.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width >= layout::TABLET_MIN_WIDTH {
            Idiom::Tablet
        } else {
            Idiom::Phone
        }
    }

    /// Parses a config/CLI override ("phone" or "tablet").
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "phone" => Some(Idiom::Phone),
            "tablet" | "pad" => Some(Idiom::Tablet),
            _ => None,
        }
    }
}

/// One slot in the resolved toolbar layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Expands to absorb remaining width.
    Flexible,
    /// Fixed-width gap.
    Fixed(f32),
    /// The item at this index in the supplied item list.
    Item(usize),
}

/// Resolves the slot sequence for `count` items under the given idiom,
/// using the standard tablet item gap.
#[must_use]
pub fn layout_items(count: usize, idiom: Idiom) -> Vec<Slot> {
    layout_items_with_gap(count, idiom, layout::TABLET_ITEM_GAP)
}

/// Resolves the slot sequence with an explicit tablet item gap.
///
/// Placement rules:
/// - Tablet: items evenly inset from both edges with fixed gaps between
///   them (`flex, item, gap, item, …, item, flex`).
/// - Phone, one item: centered (`flex, item, flex`).
/// - Phone, two items: biased toward the left and right thirds
///   (`flex, item, flex, flex, item, flex`).
/// - Phone, three or more: even distribution (`item, flex, item, …, item`).
///
/// Zero items resolve to an empty sequence; the browser never builds a
/// toolbar without items.
#[must_use]
pub fn layout_items_with_gap(count: usize, idiom: Idiom, gap: f32) -> Vec<Slot> {
    if count == 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    match idiom {
        Idiom::Tablet => {
            slots.push(Slot::Flexible);
            for index in 0..count {
                slots.push(Slot::Item(index));
                slots.push(Slot::Fixed(gap));
            }
            slots.pop();
            slots.push(Slot::Flexible);
        }
        Idiom::Phone if count == 1 => {
            slots = vec![Slot::Flexible, Slot::Item(0), Slot::Flexible];
        }
        Idiom::Phone if count == 2 => {
            slots = vec![
                Slot::Flexible,
                Slot::Item(0),
                Slot::Flexible,
                Slot::Flexible,
                Slot::Item(1),
                Slot::Flexible,
            ];
        }
        Idiom::Phone => {
            for index in 0..count {
                slots.push(Slot::Item(index));
                slots.push(Slot::Flexible);
            }
            slots.pop();
        }
    }
    slots
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone)]
pub enum Message {
    ItemPressed(usize),
}

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub items: &'a [ToolbarItem],
    pub idiom: Idiom,
    /// Gap between items in the tablet layout.
    pub item_gap: f32,
    /// Chrome fade opacity; the toolbar is skipped entirely at zero.
    pub opacity: f32,
}

/// Render the toolbar as a fixed-height bottom bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new().align_y(iced::alignment::Vertical::Center);

    for slot in layout_items_with_gap(ctx.items.len(), ctx.idiom, ctx.item_gap) {
        row = match slot {
            Slot::Flexible => row.push(Space::new().width(Length::Fill)),
            Slot::Fixed(width) => row.push(Space::new().width(Length::Fixed(width))),
            Slot::Item(index) => row.push(item_button(&ctx.items[index], index, ctx.opacity)),
        };
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(layout::TOOLBAR_HEIGHT))
        .padding([0.0, spacing::SM])
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

fn item_button(item: &ToolbarItem, index: usize, chrome_opacity: f32) -> Element<'_, Message> {
    button(
        Text::new(item.label())
            .size(typography::BODY)
            .color(iced::Color {
                a: chrome_opacity,
                ..palette::WHITE
            }),
    )
    .style(button::text)
    .padding([spacing::XS, spacing::SM])
    .on_press(Message::ItemPressed(index))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: f32 = 72.0;

    #[test]
    fn phone_single_item_is_centered() {
        let slots = layout_items(1, Idiom::Phone);
        assert_eq!(slots, vec![Slot::Flexible, Slot::Item(0), Slot::Flexible]);
    }

    #[test]
    fn phone_two_items_sit_in_outer_thirds() {
        let slots = layout_items(2, Idiom::Phone);
        assert_eq!(
            slots,
            vec![
                Slot::Flexible,
                Slot::Item(0),
                Slot::Flexible,
                Slot::Flexible,
                Slot::Item(1),
                Slot::Flexible,
            ]
        );
    }

    #[test]
    fn phone_three_items_distribute_evenly() {
        let slots = layout_items(3, Idiom::Phone);
        assert_eq!(
            slots,
            vec![
                Slot::Item(0),
                Slot::Flexible,
                Slot::Item(1),
                Slot::Flexible,
                Slot::Item(2),
            ]
        );
    }

    #[test]
    fn phone_five_items_distribute_evenly() {
        let slots = layout_items(5, Idiom::Phone);
        assert_eq!(slots.len(), 9);
        assert_eq!(slots.first(), Some(&Slot::Item(0)));
        assert_eq!(slots.last(), Some(&Slot::Item(4)));
        assert!(slots
            .iter()
            .enumerate()
            .all(|(i, slot)| if i % 2 == 0 {
                matches!(slot, Slot::Item(_))
            } else {
                matches!(slot, Slot::Flexible)
            }));
    }

    #[test]
    fn tablet_items_are_inset_with_fixed_gaps() {
        let slots = layout_items(3, Idiom::Tablet);
        assert_eq!(
            slots,
            vec![
                Slot::Flexible,
                Slot::Item(0),
                Slot::Fixed(GAP),
                Slot::Item(1),
                Slot::Fixed(GAP),
                Slot::Item(2),
                Slot::Flexible,
            ]
        );
    }

    #[test]
    fn tablet_single_item_is_centered() {
        let slots = layout_items(1, Idiom::Tablet);
        assert_eq!(slots, vec![Slot::Flexible, Slot::Item(0), Slot::Flexible]);
    }

    #[test]
    fn zero_items_resolve_to_empty_layout() {
        assert!(layout_items(0, Idiom::Phone).is_empty());
        assert!(layout_items(0, Idiom::Tablet).is_empty());
    }

    #[test]
    fn custom_gap_is_respected() {
        let slots = layout_items_with_gap(2, Idiom::Tablet, 12.0);
        assert_eq!(
            slots,
            vec![
                Slot::Flexible,
                Slot::Item(0),
                Slot::Fixed(12.0),
                Slot::Item(1),
                Slot::Flexible,
            ]
        );
    }

    #[test]
    fn idiom_derives_from_window_width() {
        assert_eq!(Idiom::from_width(320.0), Idiom::Phone);
        assert_eq!(Idiom::from_width(767.9), Idiom::Phone);
        assert_eq!(Idiom::from_width(768.0), Idiom::Tablet);
        assert_eq!(Idiom::from_width(1280.0), Idiom::Tablet);
    }

    #[test]
    fn idiom_parses_overrides() {
        assert_eq!(Idiom::parse("phone"), Some(Idiom::Phone));
        assert_eq!(Idiom::parse("Tablet"), Some(Idiom::Tablet));
        assert_eq!(Idiom::parse("pad"), Some(Idiom::Tablet));
        assert_eq!(Idiom::parse("desktop"), None);
    }

    #[test]
    fn toolbar_view_renders() {
        let items = vec![ToolbarItem::new("Delete"), ToolbarItem::new("Info")];
        let _element = view(ViewContext {
            items: &items,
            idiom: Idiom::Phone,
            item_gap: GAP,
            opacity: 1.0,
        });
    }
}
