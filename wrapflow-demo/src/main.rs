//! Wrapflow demo: the original wrap-layout showcase as a terminal app.
//!
//! Replays what the demo activity did with its radio group and seek bars:
//! a batch of random text chips laid out at a fixed container width while
//! gravity cycles through Top/Center/Bottom and the two spacings sweep.
//! Each configuration is rendered as an ASCII grid (one cell per character
//! cell) and the partition is logged through `tracing`.
//!
//! Run with: `cargo run -p wrapflow-demo`

mod chips;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use wrapflow::{
    AvailableWidth, Gravity, LayoutResult, Point, Size, WrapItem, WrapLayout, CHAR_WIDTH,
    LINE_HEIGHT,
};

/// Container width in pixels, roughly a phone screen at 1x density.
const CONTAINER_WIDTH: i32 = 360;

/// Spacing pairs the demo sweeps through (seek bar stand-ins).
const SPACINGS: &[(i32, i32)] = &[(4, 4), (15, 15), (30, 8)];

fn main() {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("starting wrapflow demo");

    let mut rng = StdRng::seed_from_u64(20150829);
    let mut items = chips::random_chips(&mut rng, 18);

    let mut engine = WrapLayout::new();
    for gravity in [Gravity::Top, Gravity::Center, Gravity::Bottom] {
        engine.set_gravity(gravity);
        for &(horizontal, vertical) in SPACINGS {
            engine.set_horizontal_spacing(horizontal);
            engine.set_vertical_spacing(vertical);

            let result = engine.measure(
                &items,
                AvailableWidth::Bounded(CONTAINER_WIDTH),
                Size::ZERO,
            );
            engine.place(&mut items, &result, Point::ORIGIN);

            tracing::info!(
                ?gravity,
                horizontal,
                vertical,
                rows = result.row_count(),
                width = result.size().width,
                height = result.size().height,
                "laid out {} chips",
                items.len()
            );

            println!(
                "-- gravity {gravity:?}, spacing {horizontal}x{vertical}: {} rows, {}x{} px",
                result.row_count(),
                result.size().width,
                result.size().height
            );
            println!("{}", render_ascii(&items, &result));
        }
    }
}

/// Render placed items onto a character grid, one glyph per item index.
///
/// Pixel coordinates map to cells via the monospace metrics, so the grid
/// is a faithful (if chunky) picture of the computed layout.
fn render_ascii(items: &[WrapItem], result: &LayoutResult) -> String {
    let cols = to_cells(result.size().width, CHAR_WIDTH).max(1);
    let rows = to_cells(result.size().height, LINE_HEIGHT).max(1);
    let mut grid = vec![vec![b'.'; cols]; rows];

    for (index, item) in items.iter().enumerate() {
        let Some(rect) = item.rect() else { continue };
        let glyph = b"0123456789abcdefghijklmnopqrstuvwxyz"[index % 36];
        let x0 = to_cells(rect.x, CHAR_WIDTH);
        let y0 = to_cells(rect.y, LINE_HEIGHT);
        let x1 = to_cells(rect.right(), CHAR_WIDTH).max(x0 + 1).min(cols);
        let y1 = to_cells(rect.bottom(), LINE_HEIGHT).max(y0 + 1).min(rows);
        for row in grid.iter_mut().take(y1).skip(y0) {
            for cell in row.iter_mut().take(x1).skip(x0) {
                *cell = glyph;
            }
        }
    }

    grid.into_iter()
        .map(|row| String::from_utf8_lossy(&row).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_cells(px: i32, cell: f32) -> usize {
    (px.max(0) as f32 / cell).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ascii_covers_partition() {
        let mut engine = WrapLayout::new();
        engine.set_horizontal_spacing(4);
        engine.set_vertical_spacing(4);
        let mut items = vec![WrapItem::new(40, 18), WrapItem::new(40, 18)];
        let result = engine.measure(&items, AvailableWidth::Bounded(50), Size::ZERO);
        engine.place(&mut items, &result, Point::ORIGIN);

        let grid = render_ascii(&items, &result);
        assert!(grid.contains('0'));
        assert!(grid.contains('1'));
        assert!(grid.lines().count() >= 2);
    }
}
