//! Items laid out by the wrap engine.

use crate::primitives::{Rect, Size};

use super::gravity::Gravity;

/// One entry in the ordered layout sequence.
///
/// The caller owns the items. The engine reads intrinsic sizes and
/// visibility during the sizing pass and writes resolved rects during the
/// placement pass. Items marked hidden are skipped entirely: they take no
/// space and belong to no row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapItem {
    /// Intrinsic width in pixels.
    width: i32,
    /// Intrinsic height in pixels.
    height: i32,
    /// Hidden items are collapsed out of the layout.
    visible: bool,
    /// Per-item gravity override; `None` inherits the container default.
    gravity: Option<Gravity>,
    /// Rect resolved by the most recent placement pass.
    rect: Option<Rect>,
}

impl WrapItem {
    /// Create a visible item with the given intrinsic size.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            visible: true,
            gravity: None,
            rect: None,
        }
    }

    /// Set the per-item gravity override (builder style).
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Mark the item hidden (builder style).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Intrinsic width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Intrinsic height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Intrinsic size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Replace the intrinsic size. Negative dimensions are clamped to zero.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }

    /// Whether the item participates in layout.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or collapse the item.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The per-item gravity override, if any.
    #[inline]
    pub fn gravity_override(&self) -> Option<Gravity> {
        self.gravity
    }

    /// Set or clear the per-item gravity override.
    pub fn set_gravity(&mut self, gravity: Option<Gravity>) {
        self.gravity = gravity;
    }

    /// Untyped-host bridge for the gravity override.
    ///
    /// [`Gravity::RAW_PARENT`] clears the override, the three known raw
    /// values set it, and anything else is silently ignored (the prior
    /// value is kept). The silent ignore is a documented contract, not an
    /// oversight: hosts feed attribute ints straight through.
    pub fn set_gravity_raw(&mut self, raw: i32) {
        if raw == Gravity::RAW_PARENT {
            self.gravity = None;
        } else if let Some(gravity) = Gravity::from_raw(raw) {
            self.gravity = Some(gravity);
        }
    }

    /// Rect resolved by the most recent placement pass.
    ///
    /// `None` for items that were hidden during placement or have never
    /// been placed.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }
}
