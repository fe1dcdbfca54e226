//! Vertical gravity within a row band.
//!
//! Gravity decides where an item sits inside the height band of its row.
//! The typed enum makes invalid values unrepresentable; untyped hosts
//! (attribute ints, script bindings) go through the raw-value bridge,
//! which silently ignores anything outside the known set.

/// Vertical alignment of an item inside its row's height band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    /// Align to the top of the row.
    #[default]
    Top,
    /// Center within the row, rounding half-up on an odd pixel difference.
    Center,
    /// Align to the bottom of the row.
    Bottom,
}

impl Gravity {
    /// Raw host value for [`Gravity::Top`].
    pub const RAW_TOP: i32 = 0;
    /// Raw host value for [`Gravity::Center`].
    pub const RAW_CENTER: i32 = 1;
    /// Raw host value for [`Gravity::Bottom`].
    pub const RAW_BOTTOM: i32 = 2;
    /// Raw host value meaning "inherit the container default".
    /// Only meaningful as a per-item override.
    pub const RAW_PARENT: i32 = -1;

    /// Decode a raw host value. Unknown values yield `None`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Self::RAW_TOP => Some(Gravity::Top),
            Self::RAW_CENTER => Some(Gravity::Center),
            Self::RAW_BOTTOM => Some(Gravity::Bottom),
            _ => None,
        }
    }

    /// Encode to the raw host value.
    pub fn to_raw(self) -> i32 {
        match self {
            Gravity::Top => Self::RAW_TOP,
            Gravity::Center => Self::RAW_CENTER,
            Gravity::Bottom => Self::RAW_BOTTOM,
        }
    }

    /// Top offset of an item of `item_height` inside a row band of
    /// `row_height`.
    ///
    /// Rows are as tall as their tallest member, so the difference is
    /// never negative when called by the placement pass.
    pub fn offset_in_row(self, row_height: i32, item_height: i32) -> i32 {
        match self {
            Gravity::Top => 0,
            Gravity::Center => ((row_height - item_height) as f32 * 0.5).round() as i32,
            Gravity::Bottom => row_height - item_height,
        }
    }
}
