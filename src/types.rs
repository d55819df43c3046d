//! Core types for navbar-core.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline: property state on the bar and
//! item, and geometry produced by the layout engine.

use std::rc::Rc;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

// =============================================================================
// Geometry
// =============================================================================

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A frame rectangle in layout units, origin at the top-leading corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Trailing edge (x + width).
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Horizontal midpoint.
    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

// =============================================================================
// Fonts
// =============================================================================

/// Weight of a font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

/// A font descriptor: point size plus weight.
///
/// Actual glyph rasterization belongs to the rendering collaborator; layout
/// only needs the size for approximate advance-width measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn with_weight(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// The typography default for bar titles. Title font size is fixed at 20.
    pub const fn title() -> Self {
        Self::with_weight(20.0, FontWeight::Medium)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::title()
    }
}

// =============================================================================
// Title alignment
// =============================================================================

/// Horizontal alignment of the bar title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleAlignment {
    /// Center the title on the full bar width.
    Center,
    /// Start the title at the leading edge of the title region.
    #[default]
    Leading,
}

/// Legacy text alignment, kept for interface matching.
///
/// Maps onto [`TitleAlignment`]: `Center` is center, everything else is
/// leading. Prefer `TitleAlignment` in new code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl From<TextAlign> for TitleAlignment {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Center => TitleAlignment::Center,
            TextAlign::Left | TextAlign::Right => TitleAlignment::Leading,
        }
    }
}

impl From<TitleAlignment> for TextAlign {
    fn from(align: TitleAlignment) -> Self {
        match align {
            TitleAlignment::Center => TextAlign::Center,
            TitleAlignment::Leading => TextAlign::Left,
        }
    }
}

// =============================================================================
// Control state (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Button control state as a bitfield.
    ///
    /// Combine with bitwise OR: `ControlState::HIGHLIGHTED | ControlState::FOCUSED`.
    /// The empty set is the normal state. Unknown bits are accepted and simply
    /// never carry an explicit font override.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlState: u8 {
        const NORMAL = 0;
        const HIGHLIGHTED = 1 << 0;
        const DISABLED = 1 << 1;
        const SELECTED = 1 << 2;
        const FOCUSED = 1 << 3;
    }
}

// =============================================================================
// Legacy title text attributes
// =============================================================================

/// Display attributes for the title text, kept for interface matching.
///
/// The font attribute takes precedence over the bar's `title_font` property.
/// Prefer `title_font` and `title_text_color` in new code.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TitleTextAttributes {
    pub font: Option<Font>,
    pub color: Option<Rgba>,
}

// =============================================================================
// Title view
// =============================================================================

#[derive(Debug)]
struct TitleViewInner {
    intrinsic_size: Size,
}

/// An opaque custom content view shown in place of the title text.
///
/// The bar never inspects its content; layout only consumes the
/// content-driven intrinsic size. Cloning shares the same view, and equality
/// is handle identity.
#[derive(Debug, Clone)]
pub struct TitleView {
    inner: Rc<TitleViewInner>,
}

impl TitleView {
    pub fn new(intrinsic_size: Size) -> Self {
        Self {
            inner: Rc::new(TitleViewInner { intrinsic_size }),
        }
    }

    /// The size the view's content wants, before the bar constrains it.
    pub fn intrinsic_size(&self) -> Size {
        self.inner.intrinsic_size
    }
}

impl PartialEq for TitleView {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

// =============================================================================
// Button descriptor
// =============================================================================

/// A bar button as supplied by the owner: caption or icon, enablement, and an
/// owner-defined tag for action dispatch.
///
/// The bar treats descriptors as opaque ordered elements; only the cluster
/// measurement step looks inside (caption/icon drive intrinsic width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub enabled: bool,
    pub tag: i32,
}

impl ButtonDescriptor {
    /// A text button.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            icon: None,
            enabled: true,
            tag: 0,
        }
    }

    /// An icon button. The icon name is opaque to the bar.
    pub fn icon(name: impl Into<String>) -> Self {
        Self {
            title: None,
            icon: Some(name.into()),
            enabled: true,
            tag: 0,
        }
    }

    pub fn with_tag(mut self, tag: i32) -> Self {
        self.tag = tag;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
