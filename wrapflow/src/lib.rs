//! Wrapflow: a flow-wrap layout engine.
//!
//! Arranges an ordered sequence of rectangular items left to right into
//! rows, wrapping when the accumulated row width would exceed the
//! available width, then stacks the rows vertically. Items align within
//! their row band by gravity (top, center, bottom), either per item or
//! from the container default.
//!
//! The engine is pure geometry with no host-framework coupling: a thin
//! adapter on the host side converts widget children into [`WrapItem`]s,
//! runs the two passes, and copies the resolved rects back into its tree.
//! Sizing and placement never fail; degenerate inputs (nothing visible,
//! an item wider than the container) degrade to defined results instead
//! of errors.
//!
//! # Usage
//!
//! ```
//! use wrapflow::{AvailableWidth, Point, Size, WrapItem, WrapLayout};
//!
//! let mut engine = WrapLayout::new();
//! engine.set_horizontal_spacing(2);
//! engine.set_vertical_spacing(2);
//!
//! let mut items = vec![
//!     WrapItem::new(10, 5),
//!     WrapItem::new(20, 8),
//!     WrapItem::new(30, 6),
//! ];
//!
//! let result = engine.measure(&items, AvailableWidth::Bounded(35), Size::ZERO);
//! assert_eq!(result.row_count(), 2);
//!
//! engine.place(&mut items, &result, Point::ORIGIN);
//! assert_eq!(items[2].rect().unwrap().y, 10);
//! ```

// Core primitives
pub mod primitives;

// Layout system (two-pass flow wrap)
pub mod layout;

// Re-export core types
pub use primitives::{Point, Rect, Size};

// Layout system exports
pub use layout::{
    AvailableWidth, Gravity, LayoutResult, Row, TextChip, WrapItem, WrapLayout,
    BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT,
};
