//! Flow-wrap layout system.
//!
//! Items flow left to right and wrap to a new row when the accumulated
//! width would exceed the available width; rows stack top to bottom.
//!
//! # Architecture
//!
//! ```text
//! caller builds items -> measure() partitions rows -> place() assigns rects
//! ```
//!
//! The sizing pass must run before placement: placement consumes the row
//! partition sizing produced, handed over as an explicit [`LayoutResult`].

pub mod constraints;
pub mod elements;
pub mod gravity;
pub mod item;
pub mod wrap;

// Re-export core types
pub use constraints::AvailableWidth;
pub use elements::{TextChip, BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT};
pub use gravity::Gravity;
pub use item::WrapItem;
pub use wrap::{LayoutResult, Row, WrapLayout};
