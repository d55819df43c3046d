//! # navbar-core
//!
//! Reactive navigation bar component core.
//!
//! A navigation bar is a horizontal chrome element holding a title (text or
//! custom view), a leading button cluster, and a trailing button cluster. It
//! mirrors an externally-owned [`NavigationItem`] live and computes frames
//! for its content under dynamic size changes.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Two cooperating pieces:
//!
//! ```text
//! NavigationItem --(subscription registry)--> NavigationBar signals
//! NavigationBar signals + bounds --(layout derived)--> BarLayout frames
//! ```
//!
//! - The **observation bridge** attaches a bar to at most one item at a time,
//!   pulls its state synchronously, and replays every later change into the
//!   bar. Mirroring is one-way: the item is the source of truth while
//!   observed.
//! - The **layout engine** turns the bar's property state and bounds into
//!   frames for the two clusters and the title, re-running reactively on any
//!   input change.
//!
//! Rendering, hit-testing, and the clusters' internal layout are external
//! collaborators; this crate owns state, observation, and measurement.
//!
//! ## Modules
//!
//! - [`types`] - Foundation types (geometry, fonts, descriptors, states)
//! - [`item`] - The observable navigation item and its subscription registry
//! - [`bar`] - The navigation bar: mirrored state and the observation bridge
//! - [`button_bar`] - Button-cluster intrinsic measurement
//! - [`layout`] - Frame computation and the reactive layout derived
//! - [`text_measure`] - Unicode-aware width measurement

pub mod bar;
pub mod button_bar;
pub mod item;
pub mod layout;
pub mod text_measure;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use bar::NavigationBar;

pub use item::{ItemProperty, NavigationItem, SubscriptionToken};

pub use button_bar::{button_width, cluster_width};

pub use layout::{
    compute_bar_layout, create_layout_derived, BarLayout, CONTENT_VERTICAL_INSET, MIN_BAR_HEIGHT,
};

pub use text_measure::{string_width, text_width};
