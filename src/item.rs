//! Navigation Item - the externally-owned observable subject.
//!
//! A `NavigationItem` describes a screen's navigation metadata: title, bar
//! button items, and back-button visibility. The item is created and mutated
//! by its owner; a [`NavigationBar`](crate::bar::NavigationBar) observes it
//! and mirrors its state. Subscriptions use an explicit registry keyed by
//! [`ItemProperty`], decoupled from any platform observation mechanism.
//!
//! Dispatch is synchronous and re-entrancy safe: a callback may unsubscribe
//! any subscription (including its own) while a notification is in flight.
//!
//! # Example
//!
//! ```ignore
//! use navbar_core::{NavigationItem, ItemProperty};
//!
//! let item = NavigationItem::new();
//! let token = item.subscribe(ItemProperty::Title, |item| {
//!     println!("title is now {:?}", item.title());
//! });
//!
//! item.set_title(Some("Inbox".into())); // callback fires synchronously
//! item.unsubscribe(token);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::types::{ButtonDescriptor, TitleView};

// =============================================================================
// Observable surface
// =============================================================================

/// Identifier of one observable property on a [`NavigationItem`].
///
/// The singular identifiers are views over the plural sequences (element 0),
/// not separate storage; mutating either name notifies both identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemProperty {
    Title,
    TitleView,
    HidesBackButton,
    LeftBarButtonItems,
    RightBarButtonItems,
    LeftItemsSupplementBackButton,
    LeftBarButtonItem,
    RightBarButtonItem,
}

/// Proof of a live subscription. Consumed by [`NavigationItem::unsubscribe`].
#[derive(Debug)]
pub struct SubscriptionToken {
    id: u64,
}

type Callback = Rc<dyn Fn(&NavigationItem)>;

struct Subscriber {
    id: u64,
    property: ItemProperty,
    callback: Callback,
    active: Cell<bool>,
}

// =============================================================================
// Item state
// =============================================================================

#[derive(Default)]
struct ItemState {
    title: RefCell<Option<String>>,
    title_view: RefCell<Option<TitleView>>,
    hides_back_button: Cell<bool>,
    left_items: RefCell<Vec<ButtonDescriptor>>,
    right_items: RefCell<Vec<ButtonDescriptor>>,
    left_items_supplement_back_button: Cell<bool>,

    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
    // Dispatch depth: removal is deferred while > 0 so a callback can
    // unsubscribe without corrupting the list mid-iteration.
    dispatch_depth: Cell<u32>,
}

/// Externally-owned navigation metadata, observed but never created by the bar.
///
/// Cheap-clone handle; clones share the same state and subscriber registry.
#[derive(Clone, Default)]
pub struct NavigationItem {
    state: Rc<ItemState>,
}

impl std::fmt::Debug for NavigationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationItem")
            .field("title", &self.state.title.borrow())
            .field("hides_back_button", &self.state.hides_back_button.get())
            .field("left_items", &self.state.left_items.borrow().len())
            .field("right_items", &self.state.right_items.borrow().len())
            .finish()
    }
}

impl NavigationItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether two handles refer to the same underlying item.
    pub fn same_item(&self, other: &NavigationItem) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn title(&self) -> Option<String> {
        self.state.title.borrow().clone()
    }

    pub fn set_title(&self, title: Option<String>) {
        *self.state.title.borrow_mut() = title;
        self.notify(&[ItemProperty::Title]);
    }

    pub fn title_view(&self) -> Option<TitleView> {
        self.state.title_view.borrow().clone()
    }

    pub fn set_title_view(&self, view: Option<TitleView>) {
        *self.state.title_view.borrow_mut() = view;
        self.notify(&[ItemProperty::TitleView]);
    }

    pub fn hides_back_button(&self) -> bool {
        self.state.hides_back_button.get()
    }

    pub fn set_hides_back_button(&self, hides: bool) {
        self.state.hides_back_button.set(hides);
        self.notify(&[ItemProperty::HidesBackButton]);
    }

    pub fn left_bar_button_items(&self) -> Vec<ButtonDescriptor> {
        self.state.left_items.borrow().clone()
    }

    pub fn set_left_bar_button_items(&self, items: Vec<ButtonDescriptor>) {
        *self.state.left_items.borrow_mut() = items;
        self.notify(&[
            ItemProperty::LeftBarButtonItems,
            ItemProperty::LeftBarButtonItem,
        ]);
    }

    pub fn right_bar_button_items(&self) -> Vec<ButtonDescriptor> {
        self.state.right_items.borrow().clone()
    }

    pub fn set_right_bar_button_items(&self, items: Vec<ButtonDescriptor>) {
        *self.state.right_items.borrow_mut() = items;
        self.notify(&[
            ItemProperty::RightBarButtonItems,
            ItemProperty::RightBarButtonItem,
        ]);
    }

    pub fn left_items_supplement_back_button(&self) -> bool {
        self.state.left_items_supplement_back_button.get()
    }

    pub fn set_left_items_supplement_back_button(&self, supplement: bool) {
        self.state.left_items_supplement_back_button.set(supplement);
        self.notify(&[ItemProperty::LeftItemsSupplementBackButton]);
    }

    /// Element 0 of `left_bar_button_items`, or `None` when empty.
    pub fn left_bar_button_item(&self) -> Option<ButtonDescriptor> {
        self.state.left_items.borrow().first().cloned()
    }

    /// Replace element 0 of `left_bar_button_items` (insert when empty,
    /// remove when `None`).
    pub fn set_left_bar_button_item(&self, item: Option<ButtonDescriptor>) {
        replace_first(&self.state.left_items, item);
        self.notify(&[
            ItemProperty::LeftBarButtonItems,
            ItemProperty::LeftBarButtonItem,
        ]);
    }

    /// Element 0 of `right_bar_button_items`, or `None` when empty.
    pub fn right_bar_button_item(&self) -> Option<ButtonDescriptor> {
        self.state.right_items.borrow().first().cloned()
    }

    /// Replace element 0 of `right_bar_button_items` (insert when empty,
    /// remove when `None`).
    pub fn set_right_bar_button_item(&self, item: Option<ButtonDescriptor>) {
        replace_first(&self.state.right_items, item);
        self.notify(&[
            ItemProperty::RightBarButtonItems,
            ItemProperty::RightBarButtonItem,
        ]);
    }

    // =========================================================================
    // Subscription registry
    // =========================================================================

    /// Register a callback for changes to one property.
    ///
    /// The callback fires synchronously on every mutation of the property,
    /// from any code path. It is not invoked for the current value; observers
    /// that need an initial sync pull it themselves.
    pub fn subscribe(
        &self,
        property: ItemProperty,
        callback: impl Fn(&NavigationItem) + 'static,
    ) -> SubscriptionToken {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);

        self.state.subscribers.borrow_mut().push(Subscriber {
            id,
            property,
            callback: Rc::new(callback),
            active: Cell::new(true),
        });

        SubscriptionToken { id }
    }

    /// End a subscription. No-op for tokens already ended.
    ///
    /// Safe to call from within a change-notification callback, including the
    /// subscription currently being dispatched.
    pub fn unsubscribe(&self, token: SubscriptionToken) {
        let mut subscribers = self.state.subscribers.borrow_mut();
        if let Some(sub) = subscribers.iter().find(|s| s.id == token.id) {
            sub.active.set(false);
        }
        // Removal must wait until dispatch unwinds; the snapshot still holds
        // callback clones and liveness is re-checked per call.
        if self.state.dispatch_depth.get() == 0 {
            subscribers.retain(|s| s.active.get());
        }
    }

    /// Number of live subscriptions (diagnostics and tests).
    pub fn subscriber_count(&self) -> usize {
        self.state
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.active.get())
            .count()
    }

    fn notify(&self, properties: &[ItemProperty]) {
        // Snapshot under the borrow, then release it before invoking anything:
        // callbacks may subscribe, unsubscribe, or mutate this item.
        let snapshot: Vec<(u64, Callback)> = {
            let subscribers = self.state.subscribers.borrow();
            subscribers
                .iter()
                .filter(|s| s.active.get() && properties.contains(&s.property))
                .map(|s| (s.id, Rc::clone(&s.callback)))
                .collect()
        };

        self.state
            .dispatch_depth
            .set(self.state.dispatch_depth.get() + 1);

        for (id, callback) in snapshot {
            // Re-check liveness: an earlier callback may have ended this one.
            let live = self
                .state
                .subscribers
                .borrow()
                .iter()
                .any(|s| s.id == id && s.active.get());
            if live {
                callback(self);
            }
        }

        let depth = self.state.dispatch_depth.get() - 1;
        self.state.dispatch_depth.set(depth);
        if depth == 0 {
            self.state
                .subscribers
                .borrow_mut()
                .retain(|s| s.active.get());
        }
    }
}

fn replace_first(items: &RefCell<Vec<ButtonDescriptor>>, item: Option<ButtonDescriptor>) {
    let mut items = items.borrow_mut();
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
}
