//! Flow-wrap engine: greedy row packing plus row-relative placement.
//!
//! Two passes over the same ordered item sequence:
//!
//! ```text
//! measure(items, available, floor) -> LayoutResult (rows + overall size)
//! place(items, &LayoutResult, origin) -> rects written back to items
//! ```
//!
//! The partition travels between the passes as an explicit [`LayoutResult`]
//! value instead of hidden shared fields, so a placement call can only ever
//! consume a partition the caller actually measured. Both passes walk the
//! visible items in input order; hidden items take no space and no row slot.

use crate::primitives::{Point, Rect, Size};

use super::constraints::AvailableWidth;
use super::gravity::Gravity;
use super::item::WrapItem;

// =========================================================================
// Row partition
// =========================================================================

/// One horizontal band of the partition: how many visible items it holds
/// and its height (the max member height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    len: usize,
    height: i32,
}

impl Row {
    /// Number of visible items in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Row band height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// The outcome of a sizing pass: overall content size plus the row
/// partition the placement pass consumes.
///
/// Recomputed from scratch on every `measure`; there is no incremental
/// update. Row index 0 is the topmost row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutResult {
    size: Size,
    rows: Vec<Row>,
}

impl LayoutResult {
    /// Overall content size (post minimum-floor clamp).
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of rows in the partition.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Visible-item count of a row, or `None` for an out-of-range index.
    pub fn items_in_row(&self, index: usize) -> Option<usize> {
        self.rows.get(index).map(Row::len)
    }

    /// Height of a row band, or `None` for an out-of-range index.
    pub fn row_height(&self, index: usize) -> Option<i32> {
        self.rows.get(index).map(Row::height)
    }

    /// All row bands, topmost first.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

// =========================================================================
// WrapLayout
// =========================================================================

/// The flow-wrap layout engine.
///
/// Pure geometry over caller-owned items: the engine holds only its
/// configuration (spacing and default gravity). Hosts adapt their widget
/// children into [`WrapItem`]s, run `measure` then `place`, and copy the
/// resolved rects back into their tree.
///
/// Neither pass can fail: numeric inputs are clamped, oversized items are
/// placed on their own row rather than rejected, and an empty item set
/// yields zero rows and zero size.
#[derive(Debug, Clone)]
pub struct WrapLayout {
    /// Pixels inserted between adjacent items in a row.
    horizontal_spacing: i32,
    /// Pixels inserted between adjacent rows.
    vertical_spacing: i32,
    /// Default gravity for items without an override.
    gravity: Gravity,
    /// Raised by configuration changes, cleared by `measure`.
    needs_layout: bool,
}

impl Default for WrapLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl WrapLayout {
    /// Create an engine with zero spacing and top gravity.
    pub fn new() -> Self {
        Self {
            horizontal_spacing: 0,
            vertical_spacing: 0,
            gravity: Gravity::Top,
            needs_layout: true,
        }
    }

    // =====================================================================
    // Configuration surface
    // =====================================================================

    /// Pixels inserted between adjacent items in a row.
    #[inline]
    pub fn horizontal_spacing(&self) -> i32 {
        self.horizontal_spacing
    }

    /// Set the horizontal spacing, clamped non-negative. Raises the
    /// pending-recompute flag.
    pub fn set_horizontal_spacing(&mut self, px: i32) {
        self.horizontal_spacing = px.max(0);
        self.needs_layout = true;
    }

    /// Pixels inserted between adjacent rows.
    #[inline]
    pub fn vertical_spacing(&self) -> i32 {
        self.vertical_spacing
    }

    /// Set the vertical spacing, clamped non-negative. Raises the
    /// pending-recompute flag.
    pub fn set_vertical_spacing(&mut self, px: i32) {
        self.vertical_spacing = px.max(0);
        self.needs_layout = true;
    }

    /// Default gravity applied to items without an override.
    #[inline]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Set the default gravity. Raises the pending-recompute flag.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
        self.needs_layout = true;
    }

    /// Untyped-host bridge for the default gravity.
    ///
    /// Values outside the known set are silently ignored: the prior
    /// gravity is kept and no recompute is flagged. Documented contract,
    /// not an oversight.
    pub fn set_gravity_raw(&mut self, raw: i32) {
        if let Some(gravity) = Gravity::from_raw(raw) {
            self.set_gravity(gravity);
        }
    }

    /// Whether configuration changed since the last `measure`.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    // =====================================================================
    // Sizing pass
    // =====================================================================

    /// Partition visible items into rows and compute the overall size.
    ///
    /// Unbounded width puts every visible item on a single row. Bounded
    /// width packs greedily in order: an item joins the current row when
    /// the row is empty or the accumulated width plus spacing still fits;
    /// otherwise the row closes and the item opens the next one. An item
    /// wider than the limit is therefore still placed when it lands on an
    /// empty row, so a narrow container can never deadlock into zero rows.
    ///
    /// The result is clamped component-wise to `min_size` (the host's
    /// padding/background floor). Clears the pending-recompute flag.
    pub fn measure(
        &mut self,
        items: &[WrapItem],
        available: AvailableWidth,
        min_size: Size,
    ) -> LayoutResult {
        self.needs_layout = false;

        let mut rows: Vec<Row> = Vec::new();
        let mut content = Size::ZERO;

        match available.limit() {
            None => {
                // Unbounded: one row holds everything visible.
                let mut count = 0usize;
                let mut row_width = 0;
                let mut row_height = 0;
                for item in items.iter().filter(|item| item.is_visible()) {
                    if count > 0 {
                        row_width += self.horizontal_spacing;
                    }
                    row_width += item.width();
                    row_height = row_height.max(item.height());
                    count += 1;
                }
                if count > 0 {
                    rows.push(Row {
                        len: count,
                        height: row_height,
                    });
                    content = Size::new(row_width, row_height);
                }
            }
            Some(limit) => {
                let mut count = 0usize;
                let mut row_width = 0;
                let mut row_height = 0;
                for item in items.iter().filter(|item| item.is_visible()) {
                    let joins = count == 0
                        || row_width + self.horizontal_spacing + item.width() <= limit;
                    if joins {
                        if count > 0 {
                            row_width += self.horizontal_spacing;
                        }
                        row_width += item.width();
                        row_height = row_height.max(item.height());
                        count += 1;
                    } else {
                        content.width = content.width.max(row_width);
                        content.height += if rows.is_empty() {
                            row_height
                        } else {
                            self.vertical_spacing + row_height
                        };
                        rows.push(Row {
                            len: count,
                            height: row_height,
                        });
                        row_width = item.width();
                        row_height = item.height();
                        count = 1;
                    }
                }
                // Close the trailing in-progress row.
                if count > 0 {
                    content.width = content.width.max(row_width);
                    content.height += if rows.is_empty() {
                        row_height
                    } else {
                        self.vertical_spacing + row_height
                    };
                    rows.push(Row {
                        len: count,
                        height: row_height,
                    });
                }
            }
        }

        LayoutResult {
            size: content.max(min_size),
            rows,
        }
    }

    // =====================================================================
    // Placement pass
    // =====================================================================

    /// Assign each visible item its final rect from a measured partition.
    ///
    /// `origin` is the content top-left after the host's padding. Rows are
    /// walked top to bottom; within a row the horizontal cursor starts one
    /// spacing step left of the origin so the first item's spacing advance
    /// nets to zero. Each item's vertical offset inside the row band comes
    /// from its gravity override, falling back to the engine default.
    ///
    /// A hidden slot met while counting out a row's declared quota is
    /// skipped without consuming the quota: the partition counts visible
    /// items only, so visibility flips between measure and place cannot
    /// shift later rows' membership. Skipped and leftover items get their
    /// stale rects cleared.
    pub fn place(&self, items: &mut [WrapItem], result: &LayoutResult, origin: Point) {
        let mut next = 0usize;
        let mut row_top = origin.y - self.vertical_spacing;
        for row in result.rows() {
            let mut cursor_x = origin.x - self.horizontal_spacing;
            let mut placed = 0usize;
            while placed < row.len() && next < items.len() {
                let item = &mut items[next];
                next += 1;
                if !item.is_visible() {
                    item.set_rect(None);
                    continue;
                }
                cursor_x += self.horizontal_spacing;
                let gravity = item.gravity_override().unwrap_or(self.gravity);
                let offset = gravity.offset_in_row(row.height(), item.height());
                let top = row_top + self.vertical_spacing + offset;
                item.set_rect(Some(Rect::from_origin_size(
                    Point::new(cursor_x, top),
                    item.size(),
                )));
                cursor_x += item.width();
                placed += 1;
            }
            row_top += self.vertical_spacing + row.height();
        }
        // Items past the partition (hidden tails, or additions since the
        // last measure) hold no rect.
        for item in items.iter_mut().skip(next) {
            item.set_rect(None);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items_64() -> Vec<WrapItem> {
        vec![
            WrapItem::new(10, 5),
            WrapItem::new(20, 8),
            WrapItem::new(30, 6),
        ]
    }

    fn spaced_engine() -> WrapLayout {
        let mut engine = WrapLayout::new();
        engine.set_horizontal_spacing(2);
        engine.set_vertical_spacing(2);
        engine
    }

    #[test]
    fn test_unbounded_single_row() {
        let mut engine = spaced_engine();
        let result = engine.measure(&items_64(), AvailableWidth::Unbounded, Size::ZERO);

        assert_eq!(result.row_count(), 1);
        assert_eq!(result.items_in_row(0), Some(3));
        assert_eq!(result.size(), Size::new(64, 8));
    }

    #[test]
    fn test_bounded_wraps_at_limit() {
        let mut engine = spaced_engine();
        let result = engine.measure(&items_64(), AvailableWidth::Bounded(35), Size::ZERO);

        // 10 + 2 + 20 = 32 fits; + 2 + 30 = 64 does not
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.items_in_row(0), Some(2));
        assert_eq!(result.items_in_row(1), Some(1));
        assert_eq!(result.row_height(0), Some(8));
        assert_eq!(result.row_height(1), Some(6));
        assert_eq!(result.size(), Size::new(32, 16));
    }

    #[test]
    fn test_empty_and_all_hidden_yield_zero() {
        let mut engine = spaced_engine();
        let empty = engine.measure(&[], AvailableWidth::Bounded(100), Size::ZERO);
        assert_eq!(empty.row_count(), 0);
        assert_eq!(empty.size(), Size::ZERO);

        let hidden = vec![WrapItem::new(10, 5).hidden(), WrapItem::new(20, 8).hidden()];
        let result = engine.measure(&hidden, AvailableWidth::Bounded(100), Size::ZERO);
        assert_eq!(result.row_count(), 0);
        assert_eq!(result.size(), Size::ZERO);
    }

    #[test]
    fn test_oversized_item_owns_a_row() {
        let mut engine = WrapLayout::new();
        let items = vec![
            WrapItem::new(10, 4),
            WrapItem::new(100, 9),
            WrapItem::new(10, 4),
        ];
        let result = engine.measure(&items, AvailableWidth::Bounded(30), Size::ZERO);

        assert_eq!(result.row_count(), 3);
        assert_eq!(result.items_in_row(1), Some(1));
        // The oversized row drives the overall width past the limit
        assert_eq!(result.size().width, 100);
    }

    #[test]
    fn test_oversized_first_item_never_deadlocks() {
        let mut engine = WrapLayout::new();
        let items = vec![WrapItem::new(500, 7)];
        let result = engine.measure(&items, AvailableWidth::Bounded(30), Size::ZERO);

        assert_eq!(result.row_count(), 1);
        assert_eq!(result.items_in_row(0), Some(1));
        assert_eq!(result.size(), Size::new(500, 7));
    }

    #[test]
    fn test_min_size_floor() {
        let mut engine = spaced_engine();
        let result = engine.measure(
            &items_64(),
            AvailableWidth::Bounded(35),
            Size::new(100, 10),
        );
        assert_eq!(result.size(), Size::new(100, 16));
    }

    #[test]
    fn test_out_of_range_row_queries() {
        let mut engine = spaced_engine();
        let result = engine.measure(&items_64(), AvailableWidth::Bounded(35), Size::ZERO);
        assert_eq!(result.items_in_row(2), None);
        assert_eq!(result.row_height(99), None);
    }

    #[test]
    fn test_place_positions_and_gravity() {
        let mut engine = spaced_engine();
        let mut items = items_64();
        let result = engine.measure(&items, AvailableWidth::Bounded(35), Size::ZERO);
        engine.place(&mut items, &result, Point::ORIGIN);

        // Row 0: items 0 and 1, top gravity
        assert_eq!(items[0].rect(), Some(Rect::new(0, 0, 10, 5)));
        assert_eq!(items[1].rect(), Some(Rect::new(12, 0, 20, 8)));
        // Row 1 starts below row 0's band plus vertical spacing
        assert_eq!(items[2].rect(), Some(Rect::new(0, 10, 30, 6)));
    }

    #[test]
    fn test_place_honors_default_and_override_gravity() {
        let mut engine = spaced_engine();
        engine.set_gravity(Gravity::Bottom);
        let mut items = items_64();
        items[2] = WrapItem::new(30, 6).gravity(Gravity::Center);

        let result = engine.measure(&items, AvailableWidth::Unbounded, Size::ZERO);
        engine.place(&mut items, &result, Point::ORIGIN);

        // Row height is 8: bottom puts the 5px item at y = 3
        assert_eq!(items[0].rect(), Some(Rect::new(0, 3, 10, 5)));
        assert_eq!(items[1].rect(), Some(Rect::new(12, 0, 20, 8)));
        // Center override: (8 - 6) / 2 = 1
        assert_eq!(items[2].rect(), Some(Rect::new(34, 1, 30, 6)));
    }

    #[test]
    fn test_place_respects_origin() {
        let mut engine = spaced_engine();
        let mut items = items_64();
        let result = engine.measure(&items, AvailableWidth::Bounded(35), Size::ZERO);
        engine.place(&mut items, &result, Point::new(7, 11));

        assert_eq!(items[0].rect(), Some(Rect::new(7, 11, 10, 5)));
        assert_eq!(items[2].rect(), Some(Rect::new(7, 21, 30, 6)));
    }

    #[test]
    fn test_place_skips_hidden_without_consuming_quota() {
        let mut engine = spaced_engine();
        let mut items = vec![
            WrapItem::new(10, 5),
            WrapItem::new(20, 8).hidden(),
            WrapItem::new(30, 6),
        ];
        let result = engine.measure(&items, AvailableWidth::Bounded(100), Size::ZERO);
        assert_eq!(result.items_in_row(0), Some(2));

        engine.place(&mut items, &result, Point::ORIGIN);
        assert_eq!(items[0].rect(), Some(Rect::new(0, 0, 10, 5)));
        assert_eq!(items[1].rect(), None);
        // The hidden item advanced no cursor
        assert_eq!(items[2].rect(), Some(Rect::new(12, 0, 30, 6)));
    }

    #[test]
    fn test_place_clears_rects_past_partition() {
        let mut engine = WrapLayout::new();
        let mut items = vec![WrapItem::new(10, 5), WrapItem::new(20, 8)];
        let result = engine.measure(&items, AvailableWidth::Unbounded, Size::ZERO);
        engine.place(&mut items, &result, Point::ORIGIN);
        assert!(items[1].rect().is_some());

        // A third item added without re-measuring holds no rect
        items.push(WrapItem::new(5, 5));
        engine.place(&mut items, &result, Point::ORIGIN);
        assert_eq!(items[2].rect(), None);
    }

    #[test]
    fn test_needs_layout_flag_lifecycle() {
        let mut engine = WrapLayout::new();
        assert!(engine.needs_layout());

        engine.measure(&[], AvailableWidth::Unbounded, Size::ZERO);
        assert!(!engine.needs_layout());

        engine.set_vertical_spacing(4);
        assert!(engine.needs_layout());

        engine.measure(&[], AvailableWidth::Unbounded, Size::ZERO);
        engine.set_gravity(Gravity::Center);
        assert!(engine.needs_layout());
    }

    #[test]
    fn test_spacing_setters_clamp_negative() {
        let mut engine = WrapLayout::new();
        engine.set_horizontal_spacing(-3);
        engine.set_vertical_spacing(-1);
        assert_eq!(engine.horizontal_spacing(), 0);
        assert_eq!(engine.vertical_spacing(), 0);
    }
}
