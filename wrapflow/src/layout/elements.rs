//! Leaf item sources: text chips measured from character-cell metrics.
//!
//! The engine itself only consumes intrinsic pixel sizes; this module is
//! the standard way for demos, tests, and simple hosts to produce them
//! without a text shaper. Widths come from a cell-count estimate (1 cell
//! for Latin, 2 for CJK, 0 for combining marks) scaled by monospace
//! metrics.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

use super::gravity::Gravity;
use super::item::WrapItem;

// Cell metrics for a monospace face at the base size.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;
pub const BASE_FONT_SIZE: f32 = 14.0;

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for
/// combining marks).
pub fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// A text chip descriptor.
///
/// Declarative: nothing is measured until the chip is turned into a
/// [`WrapItem`]. Metrics scale linearly with font size, which holds for
/// monospace faces.
#[derive(Debug, Clone)]
pub struct TextChip {
    /// Chip label.
    text: String,
    /// Font size (if different from default).
    size: Option<f32>,
    /// Per-item gravity override carried onto the item.
    gravity: Option<Gravity>,
    /// Hidden chips produce collapsed items.
    visible: bool,
}

impl TextChip {
    /// Create a new text chip.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            gravity: None,
            visible: true,
        }
    }

    /// Set the font size.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the gravity override.
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Mark the chip hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Chip label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Estimate the intrinsic pixel size from cell metrics.
    ///
    /// Width rounds up so a chip never reports narrower than its glyphs;
    /// height rounds to the nearest pixel.
    pub fn estimate_size(&self) -> Size {
        let scale = self.size.unwrap_or(BASE_FONT_SIZE) / BASE_FONT_SIZE;
        let cells = unicode_display_width(&self.text);
        Size::new(
            (cells * CHAR_WIDTH * scale).ceil() as i32,
            (LINE_HEIGHT * scale).round() as i32,
        )
    }

    /// Convert into a layout item.
    pub fn into_item(self) -> WrapItem {
        let size = self.estimate_size();
        let mut item = WrapItem::new(size.width, size.height);
        if let Some(gravity) = self.gravity {
            item = item.gravity(gravity);
        }
        if !self.visible {
            item = item.hidden();
        }
        item
    }
}

impl From<TextChip> for WrapItem {
    fn from(chip: TextChip) -> Self {
        chip.into_item()
    }
}
