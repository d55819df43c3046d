//! Inset strategies - vertical placement of bar content.
//!
//! Two strategies share one seam, selected by the bar's
//! `use_flexible_top_bottom_insets` flag:
//!
//! - [`FixedInsets`]: the legacy mode. Layout height never drops below the
//!   56-unit minimum, and the content band sits at fixed top/bottom insets of
//!   that height regardless of the actual bounds. A custom title view's frame
//!   spans the full bar height, so the view tracks any vertical expansion of
//!   the bar.
//! - [`FlexibleInsets`]: insets scale proportionally with the actual bar
//!   height, and the title view's frame matches the button clusters' band
//!   exactly so custom content can center itself consistently with the
//!   buttons.

/// Minimum layout height the fixed-inset mode enforces.
pub const MIN_BAR_HEIGHT: f32 = 56.0;

/// Top/bottom content inset at the minimum bar height.
pub const CONTENT_VERTICAL_INSET: f32 = 8.0;

/// Vertical placement shared by both clusters and the title band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    /// Height the frames are computed against (>= bounds height in fixed mode).
    pub effective_height: f32,
    /// Top of the content band.
    pub content_y: f32,
    /// Height of the content band.
    pub content_height: f32,
}

/// Strategy seam between the two inset modes. Implementations only decide
/// vertical placement; the horizontal pass and cluster measurement are shared.
pub trait InsetStrategy {
    fn metrics(&self, bounds_height: f32) -> VerticalMetrics;

    /// Vertical frame (y, height) for a custom title view.
    fn title_view_band(&self, metrics: &VerticalMetrics) -> (f32, f32);
}

/// Legacy fixed insets: 56-unit minimum height, constant insets.
pub struct FixedInsets;

impl InsetStrategy for FixedInsets {
    fn metrics(&self, bounds_height: f32) -> VerticalMetrics {
        let effective_height = bounds_height.max(MIN_BAR_HEIGHT);
        VerticalMetrics {
            effective_height,
            content_y: CONTENT_VERTICAL_INSET,
            content_height: (effective_height - 2.0 * CONTENT_VERTICAL_INSET).max(0.0),
        }
    }

    fn title_view_band(&self, metrics: &VerticalMetrics) -> (f32, f32) {
        // The view's height follows the bar's, expansion included.
        (0.0, metrics.effective_height)
    }
}

/// Proportional insets: the content band scales with the bar height and the
/// title view tracks it exactly.
pub struct FlexibleInsets;

impl InsetStrategy for FlexibleInsets {
    fn metrics(&self, bounds_height: f32) -> VerticalMetrics {
        let inset = bounds_height * (CONTENT_VERTICAL_INSET / MIN_BAR_HEIGHT);
        VerticalMetrics {
            effective_height: bounds_height,
            content_y: inset,
            content_height: (bounds_height - 2.0 * inset).max(0.0),
        }
    }

    fn title_view_band(&self, metrics: &VerticalMetrics) -> (f32, f32) {
        (metrics.content_y, metrics.content_height)
    }
}

/// Select the strategy for the bar's inset-mode flag.
pub fn strategy_for(flexible: bool) -> &'static dyn InsetStrategy {
    if flexible {
        &FlexibleInsets
    } else {
        &FixedInsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_enforces_minimum_height() {
        let m = FixedInsets.metrics(40.0);
        assert_eq!(m.effective_height, MIN_BAR_HEIGHT);
        assert_eq!(m.content_y, CONTENT_VERTICAL_INSET);
        assert_eq!(m.content_height, 40.0);
    }

    #[test]
    fn test_fixed_insets_constant_under_growth() {
        let short = FixedInsets.metrics(56.0);
        let tall = FixedInsets.metrics(112.0);
        assert_eq!(short.content_y, tall.content_y);
        assert_eq!(tall.content_height, 112.0 - 16.0);
    }

    #[test]
    fn test_flexible_scales_proportionally() {
        let m = FlexibleInsets.metrics(112.0);
        assert_eq!(m.effective_height, 112.0);
        assert_eq!(m.content_y, 16.0);
        assert_eq!(m.content_height, 80.0);
    }

    #[test]
    fn test_flexible_title_view_tracks_band() {
        let m = FlexibleInsets.metrics(64.0);
        let (y, height) = FlexibleInsets.title_view_band(&m);
        assert_eq!(y, m.content_y);
        assert_eq!(height, m.content_height);
    }

    #[test]
    fn test_fixed_title_view_spans_bar_height() {
        let m = FixedInsets.metrics(56.0);
        let (y, height) = FixedInsets.title_view_band(&m);
        assert_eq!(y, 0.0);
        assert_eq!(height, 56.0);

        let tall = FixedInsets.metrics(80.0);
        let (y, height) = FixedInsets.title_view_band(&tall);
        assert_eq!(y, 0.0);
        assert_eq!(height, 80.0);
    }
}
