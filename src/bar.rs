//! Navigation Bar - mirrored property state and the observation bridge.
//!
//! The bar holds every content property in a reactive `Signal`, so the layout
//! derived re-runs automatically when anything it reads changes. Mirroring is
//! strictly one-way: while an item is observed it is the source of truth, and
//! mutating the bar directly never writes back to the item.
//!
//! # Example
//!
//! ```ignore
//! use navbar_core::{NavigationBar, NavigationItem, ButtonDescriptor, Size};
//!
//! let bar = NavigationBar::new();
//! bar.set_bounds(Size::new(360.0, 56.0));
//!
//! let item = NavigationItem::new();
//! item.set_title(Some("Inbox".into()));
//! bar.observe_navigation_item(&item);
//! assert_eq!(bar.title(), Some("Inbox".into()));
//!
//! // Any later mutation of the item mirrors synchronously
//! item.set_right_bar_button_item(Some(ButtonDescriptor::icon("search")));
//! assert_eq!(bar.trailing_bar_button_items().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use spark_signals::{signal, Signal};

use crate::item::{ItemProperty, NavigationItem, SubscriptionToken};
use crate::types::{
    ButtonDescriptor, ControlState, Font, Rgba, Size, TextAlign, TitleAlignment,
    TitleTextAttributes, TitleView,
};

// =============================================================================
// Bar state
// =============================================================================

/// A live observation of one navigation item: the owning reference plus the
/// subscriptions to end on detach.
struct Observation {
    item: NavigationItem,
    tokens: Vec<SubscriptionToken>,
}

struct BarState {
    title: Signal<Option<String>>,
    title_view: Signal<Option<TitleView>>,
    title_font: Signal<Font>,
    title_text_color: Signal<Option<Rgba>>,
    ink_color: Signal<Option<Rgba>>,
    back_item: Signal<Option<ButtonDescriptor>>,
    hides_back_button: Signal<bool>,
    leading_items: Signal<Vec<ButtonDescriptor>>,
    trailing_items: Signal<Vec<ButtonDescriptor>>,
    leading_items_supplement_back_button: Signal<bool>,
    title_alignment: Signal<TitleAlignment>,
    use_flexible_top_bottom_insets: Signal<bool>,
    bounds: Signal<Size>,
    // Per-state button caption fonts, keyed by ControlState bits. A signal so
    // the layout derived re-measures clusters when an override changes.
    button_fonts: Signal<HashMap<u8, Font>>,

    observation: RefCell<Option<Observation>>,
}

impl BarState {
    fn new() -> Self {
        Self {
            title: signal(None),
            title_view: signal(None),
            title_font: signal(Font::title()),
            title_text_color: signal(None),
            ink_color: signal(None),
            back_item: signal(None),
            hides_back_button: signal(false),
            leading_items: signal(Vec::new()),
            trailing_items: signal(Vec::new()),
            leading_items_supplement_back_button: signal(false),
            title_alignment: signal(TitleAlignment::Leading),
            use_flexible_top_bottom_insets: signal(false),
            bounds: signal(Size::ZERO),
            button_fonts: signal(HashMap::new()),
            observation: RefCell::new(None),
        }
    }
}

/// A navigation bar: title, a leading and a trailing button cluster, and an
/// optional observed [`NavigationItem`] whose state it mirrors live.
///
/// Cheap-clone handle; clones share the same state. Rendering, hit-testing
/// and the clusters' internal layout belong to external collaborators - the
/// bar owns property state, the observation bridge and frame computation
/// (see [`crate::layout`]).
#[derive(Clone)]
pub struct NavigationBar {
    state: Rc<BarState>,
}

impl Default for NavigationBar {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NavigationBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationBar")
            .field("title", &self.state.title.get())
            .field("observing", &self.state.observation.borrow().is_some())
            .finish()
    }
}

impl NavigationBar {
    pub fn new() -> Self {
        Self {
            state: Rc::new(BarState::new()),
        }
    }

    // =========================================================================
    // Title
    // =========================================================================

    /// Title text, shown when no title view is set.
    pub fn title(&self) -> Option<String> {
        self.state.title.get()
    }

    pub fn set_title(&self, title: Option<String>) {
        self.state.title.set(title);
    }

    /// Custom title content view. Takes visual precedence over the title text
    /// when both are set. The bar can grow vertically, so the view's frame
    /// height follows the bar (see the inset strategies in [`crate::layout`]).
    pub fn title_view(&self) -> Option<TitleView> {
        self.state.title_view.get()
    }

    pub fn set_title_view(&self, view: Option<TitleView>) {
        self.state.title_view.set(view);
    }

    /// Font for the title text. Size is enforced to 20; `None` resets to the
    /// typography default.
    pub fn title_font(&self) -> Font {
        self.state.title_font.get()
    }

    pub fn set_title_font(&self, font: Option<Font>) {
        let font = match font {
            Some(mut font) => {
                font.size = Font::title().size;
                font
            }
            None => Font::title(),
        };
        self.state.title_font.set(font);
    }

    /// Title text color. `None` draws black.
    pub fn title_text_color(&self) -> Option<Rgba> {
        self.state.title_text_color.get()
    }

    pub fn set_title_text_color(&self, color: Option<Rgba>) {
        self.state.title_text_color.set(color);
    }

    /// Feedback color forwarded to all buttons in both clusters. `None` lets
    /// the clusters use their default.
    pub fn ink_color(&self) -> Option<Rgba> {
        self.state.ink_color.get()
    }

    pub fn set_ink_color(&self, color: Option<Rgba>) {
        self.state.ink_color.set(color);
    }

    // =========================================================================
    // Back button and item sequences
    // =========================================================================

    /// The back button to display, if any.
    pub fn back_item(&self) -> Option<ButtonDescriptor> {
        self.state.back_item.get()
    }

    pub fn set_back_item(&self, item: Option<ButtonDescriptor>) {
        self.state.back_item.set(item);
    }

    pub fn hides_back_button(&self) -> bool {
        self.state.hides_back_button.get()
    }

    pub fn set_hides_back_button(&self, hides: bool) {
        self.state.hides_back_button.set(hides);
    }

    /// Leading items, first item outermost (at the leading edge).
    pub fn leading_bar_button_items(&self) -> Vec<ButtonDescriptor> {
        self.state.leading_items.get()
    }

    pub fn set_leading_bar_button_items(&self, items: Vec<ButtonDescriptor>) {
        self.state.leading_items.set(items);
    }

    /// Trailing items, first item outermost (at the trailing edge).
    pub fn trailing_bar_button_items(&self) -> Vec<ButtonDescriptor> {
        self.state.trailing_items.get()
    }

    pub fn set_trailing_bar_button_items(&self, items: Vec<ButtonDescriptor>) {
        self.state.trailing_items.set(items);
    }

    /// When false (the default), leading items replace the back button; when
    /// true both render, back button outermost.
    pub fn leading_items_supplement_back_button(&self) -> bool {
        self.state.leading_items_supplement_back_button.get()
    }

    pub fn set_leading_items_supplement_back_button(&self, supplement: bool) {
        self.state.leading_items_supplement_back_button.set(supplement);
    }

    /// Element 0 of the leading sequence, or `None` when empty.
    pub fn leading_bar_button_item(&self) -> Option<ButtonDescriptor> {
        self.state.leading_items.get().into_iter().next()
    }

    pub fn set_leading_bar_button_item(&self, item: Option<ButtonDescriptor>) {
        self.state
            .leading_items
            .set(replace_first(self.state.leading_items.get(), item));
    }

    /// Element 0 of the trailing sequence, or `None` when empty.
    pub fn trailing_bar_button_item(&self) -> Option<ButtonDescriptor> {
        self.state.trailing_items.get().into_iter().next()
    }

    pub fn set_trailing_bar_button_item(&self, item: Option<ButtonDescriptor>) {
        self.state
            .trailing_items
            .set(replace_first(self.state.trailing_items.get(), item));
    }

    // =========================================================================
    // UINavigationItem-style interface matching (left/right aliases)
    // =========================================================================

    /// Equivalent to `leading_bar_button_items` - one sequence, two names.
    pub fn left_bar_button_items(&self) -> Vec<ButtonDescriptor> {
        self.leading_bar_button_items()
    }

    pub fn set_left_bar_button_items(&self, items: Vec<ButtonDescriptor>) {
        self.set_leading_bar_button_items(items);
    }

    /// Equivalent to `trailing_bar_button_items`.
    pub fn right_bar_button_items(&self) -> Vec<ButtonDescriptor> {
        self.trailing_bar_button_items()
    }

    pub fn set_right_bar_button_items(&self, items: Vec<ButtonDescriptor>) {
        self.set_trailing_bar_button_items(items);
    }

    /// Equivalent to `leading_bar_button_item`.
    pub fn left_bar_button_item(&self) -> Option<ButtonDescriptor> {
        self.leading_bar_button_item()
    }

    pub fn set_left_bar_button_item(&self, item: Option<ButtonDescriptor>) {
        self.set_leading_bar_button_item(item);
    }

    /// Equivalent to `trailing_bar_button_item`.
    pub fn right_bar_button_item(&self) -> Option<ButtonDescriptor> {
        self.trailing_bar_button_item()
    }

    pub fn set_right_bar_button_item(&self, item: Option<ButtonDescriptor>) {
        self.set_trailing_bar_button_item(item);
    }

    /// Equivalent to `leading_items_supplement_back_button`.
    pub fn left_items_supplement_back_button(&self) -> bool {
        self.leading_items_supplement_back_button()
    }

    pub fn set_left_items_supplement_back_button(&self, supplement: bool) {
        self.set_leading_items_supplement_back_button(supplement);
    }

    // =========================================================================
    // Alignment and inset mode
    // =========================================================================

    pub fn title_alignment(&self) -> TitleAlignment {
        self.state.title_alignment.get()
    }

    pub fn set_title_alignment(&self, alignment: TitleAlignment) {
        self.state.title_alignment.set(alignment);
    }

    /// Legacy alignment surface, mapped onto `title_alignment`.
    pub fn text_alignment(&self) -> TextAlign {
        self.title_alignment().into()
    }

    pub fn set_text_alignment(&self, align: TextAlign) {
        self.set_title_alignment(align.into());
    }

    /// Legacy inset mode selector. When false the bar enforces the fixed
    /// 56-unit minimum layout height; when true insets scale with the bar
    /// height and the title view tracks the clusters exactly.
    pub fn use_flexible_top_bottom_insets(&self) -> bool {
        self.state.use_flexible_top_bottom_insets.get()
    }

    pub fn set_use_flexible_top_bottom_insets(&self, flexible: bool) {
        self.state.use_flexible_top_bottom_insets.set(flexible);
    }

    /// Legacy attribute surface, written through to `title_font` and
    /// `title_text_color` (no duplicate storage). The font attribute takes
    /// precedence over `title_font` and is applied as-is. The getter yields
    /// `Some` whenever either underlying property departs from its default,
    /// so a font-only write reads back.
    pub fn title_text_attributes(&self) -> Option<TitleTextAttributes> {
        let font = self.title_font();
        let color = self.title_text_color();
        if font == Font::title() && color.is_none() {
            return None;
        }
        Some(TitleTextAttributes {
            font: Some(font),
            color,
        })
    }

    pub fn set_title_text_attributes(&self, attributes: Option<TitleTextAttributes>) {
        if let Some(attributes) = attributes {
            if let Some(font) = attributes.font {
                self.state.title_font.set(font);
            }
            self.set_title_text_color(attributes.color);
        } else {
            self.set_title_font(None);
            self.set_title_text_color(None);
        }
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    pub fn bounds(&self) -> Size {
        self.state.bounds.get()
    }

    /// Update the bar's bounds. Every size change invalidates the layout
    /// derived, so clusters and title reflow instead of clipping silently.
    pub fn set_bounds(&self, bounds: Size) {
        self.state.bounds.set(bounds);
    }

    // =========================================================================
    // Per-state button caption fonts
    // =========================================================================

    /// Set the caption font all buttons use for the given state. `None`
    /// clears that state's override without touching the others.
    pub fn set_buttons_title_font(&self, font: Option<Font>, state: ControlState) {
        let mut fonts = self.state.button_fonts.get();
        match font {
            Some(font) => {
                fonts.insert(state.bits(), font);
            }
            None => {
                fonts.remove(&state.bits());
            }
        }
        self.state.button_fonts.set(fonts);
    }

    /// Caption font for the given state: the explicit override if present,
    /// else the normal-state override, else the bar's title font. Consulted
    /// fresh on every query.
    pub fn buttons_title_font_for_state(&self, state: ControlState) -> Font {
        let fonts = self.state.button_fonts.get();
        fonts
            .get(&state.bits())
            .or_else(|| fonts.get(&ControlState::NORMAL.bits()))
            .copied()
            .unwrap_or_else(|| self.title_font())
    }

    // =========================================================================
    // Observation bridge
    // =========================================================================

    /// Begin observing `item`, ending any prior observation first.
    ///
    /// The item is strongly held for the duration. On return the bar's
    /// mirrored state already equals the item's current state - the initial
    /// sync is synchronous, not eventual.
    pub fn observe_navigation_item(&self, item: &NavigationItem) {
        self.unobserve_navigation_item();

        let tokens = subscribe_mirrors(item, Rc::downgrade(&self.state));
        *self.state.observation.borrow_mut() = Some(Observation {
            item: item.clone(),
            tokens,
        });

        // Initial pull: copy current values so the postcondition holds on
        // return rather than on the first change notification.
        pull_item(&self.state, item);
    }

    /// Stop observing. No-op when nothing is observed; mirrored properties
    /// keep their last values. Safe to call from within a change callback of
    /// the item being unobserved.
    pub fn unobserve_navigation_item(&self) {
        let observation = self.state.observation.borrow_mut().take();
        if let Some(observation) = observation {
            for token in observation.tokens {
                observation.item.unsubscribe(token);
            }
        }
    }

    /// The currently observed item, if any.
    pub fn observed_item(&self) -> Option<NavigationItem> {
        self.state
            .observation
            .borrow()
            .as_ref()
            .map(|observation| observation.item.clone())
    }

    // =========================================================================
    // Layout entry points
    // =========================================================================

    /// Compute frames for the current state and bounds, synchronously.
    /// Idempotent: unchanged inputs yield identical frames.
    pub fn layout(&self) -> crate::layout::BarLayout {
        crate::layout::compute_bar_layout(self)
    }

    /// The item run the leading cluster actually renders: the back item (when
    /// present, not hidden, and either supplementing or not displaced by
    /// leading items) placed outermost, followed by the leading items.
    pub fn effective_leading_items(&self) -> Vec<ButtonDescriptor> {
        let leading = self.leading_bar_button_items();
        let show_back = !self.hides_back_button()
            && (self.leading_items_supplement_back_button() || leading.is_empty());

        let mut run = Vec::with_capacity(leading.len() + 1);
        if show_back {
            if let Some(back) = self.back_item() {
                run.push(back);
            }
        }
        run.extend(leading);
        run
    }
}

fn replace_first(
    mut items: Vec<ButtonDescriptor>,
    item: Option<ButtonDescriptor>,
) -> Vec<ButtonDescriptor> {
    match item {
        Some(item) => {
            if items.is_empty() {
                items.push(item);
            } else {
                items[0] = item;
            }
        }
        None => {
            if !items.is_empty() {
                items.remove(0);
            }
        }
    }
    items
}

// =============================================================================
// Mirror subscriptions
// =============================================================================

/// Subscribe one mirror callback per observable identifier.
///
/// The singular identifiers alias the plural storage, so their callbacks
/// re-copy the full sequence; writes are idempotent through the signals.
/// Callbacks hold the bar weakly - a dropped bar makes them no-ops instead of
/// keeping it alive through the item's registry.
fn subscribe_mirrors(item: &NavigationItem, state: Weak<BarState>) -> Vec<SubscriptionToken> {
    fn mirror(
        item: &NavigationItem,
        property: ItemProperty,
        state: &Weak<BarState>,
        apply: impl Fn(&BarState, &NavigationItem) + 'static,
    ) -> SubscriptionToken {
        let state = state.clone();
        item.subscribe(property, move |item| {
            if let Some(state) = state.upgrade() {
                apply(&state, item);
            }
        })
    }

    vec![
        mirror(item, ItemProperty::Title, &state, |bar, item| {
            bar.title.set(item.title());
        }),
        mirror(item, ItemProperty::TitleView, &state, |bar, item| {
            bar.title_view.set(item.title_view());
        }),
        mirror(item, ItemProperty::HidesBackButton, &state, |bar, item| {
            bar.hides_back_button.set(item.hides_back_button());
        }),
        mirror(item, ItemProperty::LeftBarButtonItems, &state, |bar, item| {
            bar.leading_items.set(item.left_bar_button_items());
        }),
        mirror(item, ItemProperty::RightBarButtonItems, &state, |bar, item| {
            bar.trailing_items.set(item.right_bar_button_items());
        }),
        mirror(
            item,
            ItemProperty::LeftItemsSupplementBackButton,
            &state,
            |bar, item| {
                bar.leading_items_supplement_back_button
                    .set(item.left_items_supplement_back_button());
            },
        ),
        mirror(item, ItemProperty::LeftBarButtonItem, &state, |bar, item| {
            bar.leading_items.set(item.left_bar_button_items());
        }),
        mirror(item, ItemProperty::RightBarButtonItem, &state, |bar, item| {
            bar.trailing_items.set(item.right_bar_button_items());
        }),
    ]
}

fn pull_item(state: &BarState, item: &NavigationItem) {
    state.title.set(item.title());
    state.title_view.set(item.title_view());
    state.hides_back_button.set(item.hides_back_button());
    state.leading_items.set(item.left_bar_button_items());
    state.trailing_items.set(item.right_bar_button_items());
    state
        .leading_items_supplement_back_button
        .set(item.left_items_supplement_back_button());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    fn item_with_state() -> NavigationItem {
        let item = NavigationItem::new();
        item.set_title(Some("Inbox".into()));
        item.set_title_view(Some(TitleView::new(Size::new(80.0, 24.0))));
        item.set_hides_back_button(true);
        item.set_left_bar_button_items(vec![ButtonDescriptor::icon("menu")]);
        item.set_right_bar_button_items(vec![
            ButtonDescriptor::icon("search"),
            ButtonDescriptor::icon("more"),
        ]);
        item.set_left_items_supplement_back_button(true);
        item
    }

    #[test]
    fn test_observe_pulls_current_values_synchronously() {
        let bar = NavigationBar::new();
        let item = item_with_state();

        bar.observe_navigation_item(&item);

        assert_eq!(bar.title(), Some("Inbox".into()));
        assert_eq!(bar.title_view(), item.title_view());
        assert!(bar.hides_back_button());
        assert_eq!(bar.leading_bar_button_items(), item.left_bar_button_items());
        assert_eq!(bar.trailing_bar_button_items(), item.right_bar_button_items());
        assert!(bar.leading_items_supplement_back_button());
    }

    #[test]
    fn test_mutations_mirror_while_observed() {
        let bar = NavigationBar::new();
        let item = NavigationItem::new();
        bar.observe_navigation_item(&item);

        item.set_title(Some("Drafts".into()));
        assert_eq!(bar.title(), Some("Drafts".into()));

        item.set_left_bar_button_item(Some(ButtonDescriptor::titled("Close")));
        assert_eq!(
            bar.leading_bar_button_item(),
            Some(ButtonDescriptor::titled("Close"))
        );

        item.set_hides_back_button(true);
        assert!(bar.hides_back_button());

        item.set_title(None);
        assert_eq!(bar.title(), None);
    }

    #[test]
    fn test_unobserve_stops_mirroring_and_keeps_values() {
        let bar = NavigationBar::new();
        let item = NavigationItem::new();
        bar.observe_navigation_item(&item);

        item.set_title(Some("Kept".into()));
        bar.unobserve_navigation_item();
        assert_eq!(item.subscriber_count(), 0);

        item.set_title(Some("Dropped".into()));
        assert_eq!(bar.title(), Some("Kept".into()));
    }

    #[test]
    fn test_unobserve_without_observation_is_noop() {
        let bar = NavigationBar::new();
        bar.unobserve_navigation_item();
        assert!(bar.observed_item().is_none());
    }

    #[test]
    fn test_second_observation_replaces_first() {
        let bar = NavigationBar::new();
        let first = NavigationItem::new();
        let second = NavigationItem::new();
        second.set_title(Some("Second".into()));

        bar.observe_navigation_item(&first);
        bar.observe_navigation_item(&second);

        assert_eq!(first.subscriber_count(), 0);
        assert!(bar.observed_item().unwrap().same_item(&second));
        assert_eq!(bar.title(), Some("Second".into()));

        first.set_title(Some("Stale".into()));
        assert_eq!(bar.title(), Some("Second".into()));
    }

    #[test]
    fn test_reobserving_same_item_is_fresh_attach() {
        let bar = NavigationBar::new();
        let item = NavigationItem::new();
        item.set_title(Some("Same".into()));

        bar.observe_navigation_item(&item);
        bar.observe_navigation_item(&item);

        // No duplicate subscriptions, still mirroring
        assert_eq!(item.subscriber_count(), 8);
        item.set_title(Some("Again".into()));
        assert_eq!(bar.title(), Some("Again".into()));
    }

    #[test]
    fn test_bar_mutation_does_not_write_back() {
        let bar = NavigationBar::new();
        let item = NavigationItem::new();
        item.set_title(Some("Item".into()));
        bar.observe_navigation_item(&item);

        bar.set_title(Some("Bar only".into()));
        assert_eq!(item.title(), Some("Item".into()));

        // The item remains the source of truth
        item.set_title(Some("Item wins".into()));
        assert_eq!(bar.title(), Some("Item wins".into()));
    }

    #[test]
    fn test_left_right_alias_leading_trailing() {
        let bar = NavigationBar::new();
        let items = vec![
            ButtonDescriptor::titled("A"),
            ButtonDescriptor::titled("B"),
        ];

        bar.set_left_bar_button_items(items.clone());
        assert_eq!(bar.leading_bar_button_items(), items);

        bar.set_trailing_bar_button_items(items.clone());
        assert_eq!(bar.right_bar_button_items(), items);

        bar.set_right_bar_button_item(Some(ButtonDescriptor::titled("C")));
        assert_eq!(
            bar.trailing_bar_button_item(),
            Some(ButtonDescriptor::titled("C"))
        );
    }

    #[test]
    fn test_singular_accessor_creates_one_element_sequence() {
        let bar = NavigationBar::new();
        assert_eq!(bar.leading_bar_button_item(), None);

        bar.set_leading_bar_button_item(Some(ButtonDescriptor::titled("Only")));
        assert_eq!(bar.leading_bar_button_items().len(), 1);

        bar.set_leading_bar_button_item(None);
        assert!(bar.leading_bar_button_items().is_empty());
    }

    #[test]
    fn test_buttons_title_font_fallback_chain() {
        let bar = NavigationBar::new();

        // Tier 3: nothing set, falls through to the title font
        assert_eq!(
            bar.buttons_title_font_for_state(ControlState::HIGHLIGHTED),
            bar.title_font()
        );

        // Tier 2: normal-state override
        let normal = Font::new(14.0);
        bar.set_buttons_title_font(Some(normal), ControlState::NORMAL);
        assert_eq!(
            bar.buttons_title_font_for_state(ControlState::HIGHLIGHTED),
            normal
        );

        // Tier 1: explicit override for the queried state
        let highlighted = Font::new(16.0);
        bar.set_buttons_title_font(Some(highlighted), ControlState::HIGHLIGHTED);
        assert_eq!(
            bar.buttons_title_font_for_state(ControlState::HIGHLIGHTED),
            highlighted
        );

        // Clearing one state leaves the others alone
        bar.set_buttons_title_font(None, ControlState::HIGHLIGHTED);
        assert_eq!(
            bar.buttons_title_font_for_state(ControlState::HIGHLIGHTED),
            normal
        );
        assert_eq!(bar.buttons_title_font_for_state(ControlState::NORMAL), normal);
    }

    #[test]
    fn test_unknown_state_uses_fallback() {
        let bar = NavigationBar::new();
        let normal = Font::new(13.0);
        bar.set_buttons_title_font(Some(normal), ControlState::NORMAL);

        let unknown = ControlState::from_bits_retain(0b1010_0000);
        assert_eq!(bar.buttons_title_font_for_state(unknown), normal);
    }

    #[test]
    fn test_title_font_size_enforced() {
        let bar = NavigationBar::new();
        bar.set_title_font(Some(Font::new(34.0)));
        assert_eq!(bar.title_font().size, 20.0);

        bar.set_title_font(None);
        assert_eq!(bar.title_font(), Font::title());
    }

    #[test]
    fn test_title_text_attributes_write_through() {
        let bar = NavigationBar::new();
        let attrs = TitleTextAttributes {
            font: Some(Font::new(34.0)),
            color: Some(Rgba::WHITE),
        };
        bar.set_title_text_attributes(Some(attrs));

        // Attribute font takes precedence and is applied as-is
        assert_eq!(bar.title_font().size, 34.0);
        assert_eq!(bar.title_text_color(), Some(Rgba::WHITE));

        bar.set_title_text_attributes(None);
        assert_eq!(bar.title_font(), Font::title());
        assert_eq!(bar.title_text_color(), None);
    }

    #[test]
    fn test_title_text_attributes_font_only_round_trip() {
        let bar = NavigationBar::new();
        assert_eq!(bar.title_text_attributes(), None);

        // A font-only write must survive a read
        bar.set_title_text_attributes(Some(TitleTextAttributes {
            font: Some(Font::new(34.0)),
            color: None,
        }));
        assert_eq!(
            bar.title_text_attributes(),
            Some(TitleTextAttributes {
                font: Some(Font::new(34.0)),
                color: None,
            })
        );

        // and a color-only write likewise
        bar.set_title_text_attributes(Some(TitleTextAttributes {
            font: None,
            color: Some(Rgba::BLACK),
        }));
        let attrs = bar.title_text_attributes().unwrap();
        assert_eq!(attrs.color, Some(Rgba::BLACK));
    }

    #[test]
    fn test_effective_leading_items_back_button_rules() {
        let bar = NavigationBar::new();
        let back = ButtonDescriptor::titled("Back");
        bar.set_back_item(Some(back.clone()));

        // No leading items: back shows even with supplement = false
        assert_eq!(bar.effective_leading_items(), vec![back.clone()]);

        // Leading items displace the back item when not supplementing
        let menu = ButtonDescriptor::icon("menu");
        bar.set_leading_bar_button_items(vec![menu.clone()]);
        assert_eq!(bar.effective_leading_items(), vec![menu.clone()]);

        // Supplementing renders both, back outermost
        bar.set_leading_items_supplement_back_button(true);
        assert_eq!(
            bar.effective_leading_items(),
            vec![back.clone(), menu.clone()]
        );

        // Hiding the back button wins over everything
        bar.set_hides_back_button(true);
        assert_eq!(bar.effective_leading_items(), vec![menu]);
    }

    #[test]
    fn test_unobserve_from_within_item_callback() {
        let bar = NavigationBar::new();
        let item = NavigationItem::new();
        bar.observe_navigation_item(&item);

        // An external subscriber detaches the bar mid-dispatch of the very
        // item being unobserved.
        let bar_clone = bar.clone();
        let token = item.subscribe(ItemProperty::Title, move |_| {
            bar_clone.unobserve_navigation_item();
        });

        item.set_title(Some("Detach".into()));
        item.unsubscribe(token);

        assert!(bar.observed_item().is_none());
        assert_eq!(item.subscriber_count(), 0);

        item.set_title(Some("After".into()));
        // The mirror stopped; depending on dispatch order the bar kept either
        // the detaching value or its prior state, but never the later one.
        assert_ne!(bar.title(), Some("After".into()));
    }

    #[test]
    fn test_dropped_bar_makes_mirrors_inert() {
        let item = NavigationItem::new();
        {
            let bar = NavigationBar::new();
            bar.observe_navigation_item(&item);
            drop(bar);
        }
        // Subscriptions still registered but upgrade-fail quietly
        item.set_title(Some("Nobody listening".into()));
        assert_eq!(item.title(), Some("Nobody listening".into()));
    }
}
