//! Layout Engine - frame computation for the navigation bar.
//!
//! Given the bar's bounds and current content state, produce frames for the
//! leading button cluster, the trailing button cluster, and the title:
//!
//! 1. Measure both cluster runs (content-driven, via [`crate::button_bar`]).
//! 2. Anchor the leading cluster at the leading edge and the trailing cluster
//!    symmetrically at the trailing edge.
//! 3. Give the title the remaining span between them (never negative; the
//!    region collapses to zero when the clusters overlap).
//! 4. Place content vertically through the active inset strategy
//!    ([`insets`]), horizontally through the bar's title alignment.
//!
//! # Reactivity
//!
//! When called from a derived, reading the bar's signals creates
//! dependencies. [`create_layout_derived`] re-runs on every bounds change and
//! every content-affecting property change, so content reflows instead of
//! clipping silently.
//!
//! # Example
//!
//! ```ignore
//! use navbar_core::{NavigationBar, Size, layout::create_layout_derived};
//!
//! let bar = NavigationBar::new();
//! bar.set_bounds(Size::new(360.0, 56.0));
//!
//! let layout = create_layout_derived(&bar);
//! let frames = layout.get();
//! assert_eq!(frames.leading_frame.x, 0.0);
//! ```

pub mod insets;

use spark_signals::{derived, Derived};

use crate::bar::NavigationBar;
use crate::button_bar::cluster_width;
use crate::text_measure::text_width;
use crate::types::{ControlState, Rect, TitleAlignment};

pub use insets::{CONTENT_VERTICAL_INSET, MIN_BAR_HEIGHT};

/// Computed frames for one layout pass. All rects share the bar's coordinate
/// space, origin at the top-leading corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarLayout {
    /// Leading button cluster, anchored to the leading edge.
    pub leading_frame: Rect,
    /// Trailing button cluster, anchored to the trailing edge.
    pub trailing_frame: Rect,
    /// The span left for the title between the two clusters.
    pub title_region: Rect,
    /// The title content itself (text or custom view), aligned within the bar.
    pub title_frame: Rect,
    /// Height the pass was computed against; exceeds the bounds height when
    /// the fixed-inset mode enforces the 56-unit minimum.
    pub effective_height: f32,
}

/// Compute frames for the bar's current content and bounds.
///
/// Pure with respect to its inputs: running it twice with unchanged state
/// yields identical frames.
pub fn compute_bar_layout(bar: &NavigationBar) -> BarLayout {
    let bounds = bar.bounds();
    let strategy = insets::strategy_for(bar.use_flexible_top_bottom_insets());
    let metrics = strategy.metrics(bounds.height);

    // Shared measurement step: both clusters under the normal-state caption font.
    let button_font = bar.buttons_title_font_for_state(ControlState::NORMAL);
    let leading_width =
        cluster_width(&bar.effective_leading_items(), &button_font).min(bounds.width);
    let trailing_width =
        cluster_width(&bar.trailing_bar_button_items(), &button_font).min(bounds.width);

    let leading_frame = Rect::new(0.0, metrics.content_y, leading_width, metrics.content_height);
    let trailing_frame = Rect::new(
        bounds.width - trailing_width,
        metrics.content_y,
        trailing_width,
        metrics.content_height,
    );

    let region_width = (bounds.width - leading_width - trailing_width).max(0.0);
    let title_region = Rect::new(
        leading_width,
        metrics.content_y,
        region_width,
        metrics.content_height,
    );

    // Title content: a custom view takes visual precedence over the text.
    let (intrinsic_width, title_y, title_height) = match bar.title_view() {
        Some(view) => {
            let (y, height) = strategy.title_view_band(&metrics);
            (view.intrinsic_size().width, y, height)
        }
        None => {
            let width = bar
                .title()
                .map_or(0.0, |title| text_width(&title, &bar.title_font()));
            (width, metrics.content_y, metrics.content_height)
        }
    };

    let title_width = intrinsic_width.min(region_width);
    let title_x = match bar.title_alignment() {
        // Center on the full bar width, not the region midpoint; clamp into
        // the region when a cluster is in the way.
        TitleAlignment::Center => {
            let ideal = (bounds.width - title_width) / 2.0;
            let max_x = (title_region.max_x() - title_width).max(title_region.x);
            ideal.clamp(title_region.x, max_x)
        }
        TitleAlignment::Leading => title_region.x,
    };

    BarLayout {
        leading_frame,
        trailing_frame,
        title_region,
        title_frame: Rect::new(title_x, title_y, title_width, title_height),
        effective_height: metrics.effective_height,
    }
}

/// Create the layout derived for a bar.
///
/// Returns a `Derived` that computes [`BarLayout`] and automatically re-runs
/// when any dependency changes: bounds, title, title view, items, back-button
/// state, alignment, inset mode, or button fonts.
pub fn create_layout_derived(bar: &NavigationBar) -> Derived<BarLayout> {
    let bar = bar.clone();
    derived(move || compute_bar_layout(&bar))
}
