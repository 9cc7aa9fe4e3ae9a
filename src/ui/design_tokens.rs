// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the browser chrome.
//!
//! Layout constants (toolbar height, tablet item spacing) live here as
//! named tokens so the layout functions receive them explicitly instead of
//! reading free module state.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Chrome background scrim over the photo.
    pub const CHROME_SCRIM: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Chrome Layout
// ============================================================================

pub mod layout {
    /// Header bar height, pinned to the top edge.
    pub const HEADER_HEIGHT: f32 = 64.0;

    /// Toolbar height, pinned to the bottom edge.
    pub const TOOLBAR_HEIGHT: f32 = 44.0;

    /// Fixed gap between toolbar items on the tablet idiom.
    pub const TABLET_ITEM_GAP: f32 = 72.0;

    /// Windows at least this wide use the tablet idiom.
    pub const TABLET_MIN_WIDTH: f32 = 768.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Header bar title.
    pub const TITLE: f32 = 18.0;

    /// Most UI text: buttons, toolbar items.
    pub const BODY: f32 = 14.0;

    /// Header index label ("3/12").
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CHROME_SCRIM > 0.0 && opacity::CHROME_SCRIM < 1.0);

    assert!(layout::HEADER_HEIGHT > layout::TOOLBAR_HEIGHT);
    assert!(layout::TABLET_MIN_WIDTH > layout::TABLET_ITEM_GAP);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn chrome_metrics_are_fixed() {
        assert_eq!(layout::TOOLBAR_HEIGHT, 44.0);
        assert_eq!(layout::HEADER_HEIGHT, 64.0);
        assert_eq!(layout::TABLET_ITEM_GAP, 72.0);
    }
}
