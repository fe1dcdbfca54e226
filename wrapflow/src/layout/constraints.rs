//! Width constraint for the sizing pass.
//!
//! The sizing pass runs in one of two modes: unbounded (size-to-content,
//! everything on one row) or bounded (wrap at a pixel limit). Resolving
//! the host's measurement mode (exact / at-most / unspecified) stays on
//! the host side; the engine only sees the wrap limit and a minimum-size
//! floor.

/// Horizontal space available to the sizing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailableWidth {
    /// No horizontal constraint: all visible items on a single row.
    #[default]
    Unbounded,
    /// Wrap when the accumulated row width would exceed this many pixels.
    Bounded(i32),
}

impl AvailableWidth {
    /// Whether a wrap limit is in effect.
    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, AvailableWidth::Bounded(_))
    }

    /// The wrap limit clamped non-negative, or `None` when unbounded.
    #[inline]
    pub fn limit(self) -> Option<i32> {
        match self {
            AvailableWidth::Unbounded => None,
            AvailableWidth::Bounded(px) => Some(px.max(0)),
        }
    }
}

impl From<i32> for AvailableWidth {
    fn from(px: i32) -> Self {
        AvailableWidth::Bounded(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_checks() {
        assert!(!AvailableWidth::Unbounded.is_bounded());
        assert!(AvailableWidth::Bounded(100).is_bounded());
    }

    #[test]
    fn test_limit_clamps_negative() {
        assert_eq!(AvailableWidth::Unbounded.limit(), None);
        assert_eq!(AvailableWidth::Bounded(35).limit(), Some(35));
        assert_eq!(AvailableWidth::Bounded(-10).limit(), Some(0));
    }

    #[test]
    fn test_from_pixels() {
        assert_eq!(AvailableWidth::from(64), AvailableWidth::Bounded(64));
    }
}
