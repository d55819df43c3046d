//! Button Bar - the cluster collaborator boundary.
//!
//! A button cluster renders an ordered run of [`ButtonDescriptor`]s as one
//! unit at the leading or trailing edge of the bar. Its internal layout is a
//! black box; the layout engine only consumes the content-driven intrinsic
//! width computed here, re-measured on every pass.

use crate::text_measure::text_width;
use crate::types::{ButtonDescriptor, Font};

/// Minimum tappable width of a single button.
pub const MIN_TOUCH_TARGET: f32 = 48.0;

/// Horizontal padding on each side of a button's content.
pub const BUTTON_PADDING: f32 = 12.0;

/// Nominal width of an icon glyph.
pub const ICON_WIDTH: f32 = 24.0;

/// Intrinsic width of one button under the given caption font.
///
/// A caption button measures its text; an icon button uses the nominal icon
/// width; a descriptor with neither still occupies the minimum touch target.
pub fn button_width(item: &ButtonDescriptor, font: &Font) -> f32 {
    let content = match (&item.title, &item.icon) {
        (Some(title), _) => text_width(title, font),
        (None, Some(_)) => ICON_WIDTH,
        (None, None) => 0.0,
    };
    (content + 2.0 * BUTTON_PADDING).max(MIN_TOUCH_TARGET)
}

/// Intrinsic width of a whole cluster: the sum of its buttons, in order.
///
/// An empty run collapses to zero so the edge contributes no inset.
pub fn cluster_width(items: &[ButtonDescriptor], font: &Font) -> f32 {
    items.iter().map(|item| button_width(item, font)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cluster_is_zero() {
        assert_eq!(cluster_width(&[], &Font::default()), 0.0);
    }

    #[test]
    fn test_icon_button_uses_touch_target() {
        let item = ButtonDescriptor::icon("search");
        // 24 + 2*12 = 48 = exactly the touch target
        assert_eq!(button_width(&item, &Font::default()), MIN_TOUCH_TARGET);
    }

    #[test]
    fn test_caption_button_grows_with_text() {
        let font = Font::new(14.0);
        let short = ButtonDescriptor::titled("OK");
        let long = ButtonDescriptor::titled("Mark all as read");
        assert!(button_width(&long, &font) > button_width(&short, &font));
        assert!(button_width(&short, &font) >= MIN_TOUCH_TARGET);
    }

    #[test]
    fn test_cluster_sums_in_order() {
        let font = Font::new(14.0);
        let items = vec![
            ButtonDescriptor::icon("menu"),
            ButtonDescriptor::titled("Edit"),
        ];
        let expected = button_width(&items[0], &font) + button_width(&items[1], &font);
        assert_eq!(cluster_width(&items, &font), expected);
    }

    #[test]
    fn test_disabled_button_still_measured() {
        let font = Font::default();
        let enabled = ButtonDescriptor::titled("Save");
        let disabled = ButtonDescriptor::titled("Save").disabled();
        assert_eq!(button_width(&enabled, &font), button_width(&disabled, &font));
    }
}
