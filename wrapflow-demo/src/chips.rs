//! Random chip generation for the demo.
//!
//! Stands in for the original demo's batch of randomly sized text views:
//! each run produces a shuffled bag of labels at varying font sizes so
//! the wrap behavior is visible at every gravity/spacing combination.

use rand::Rng;
use rand::rngs::StdRng;
use wrapflow::{TextChip, WrapItem, BASE_FONT_SIZE};

const LABELS: &[&str] = &[
    "wrap",
    "layout",
    "flow",
    "row",
    "gravity",
    "spacing",
    "chip",
    "measure",
    "place",
    "band",
    "overflow",
    "greedy",
    "cursor",
    "origin",
    "bounded",
    "换行",
];

/// Build a batch of visible chips with randomized labels and font sizes.
pub fn random_chips(rng: &mut StdRng, count: usize) -> Vec<WrapItem> {
    (0..count)
        .map(|_| {
            let label = LABELS[rng.gen_range(0..LABELS.len())];
            let scale = rng.gen_range(0.7_f32..=1.8);
            TextChip::new(label)
                .size(BASE_FONT_SIZE * scale)
                .into_item()
        })
        .collect()
}
