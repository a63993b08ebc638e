//! Double-threshold edge classification
//!
//! The default strategy classifies every pixel on its own: above the high
//! threshold is strong, above the low threshold is weak, everything else is
//! background. Weak pixels are never promoted by their neighbours. The
//! hysteresis strategy is a separate variant so that callers relying on the
//! three-level map keep getting it.

use crate::analysis::lines::WALK_DIRECTIONS;
use crate::io::configuration::{STRONG_EDGE, WEAK_EDGE};
use log::debug;
use ndarray::Array2;

/// Per-pixel edge levels in {0, 128, 255}, indexed `(y, x)`
pub type EdgeMap = Array2<u8>;

/// How weak edges are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStrategy {
    /// Each pixel is classified independently; weak pixels stay at 128
    #[default]
    IndependentThreshold,
    /// Weak pixels 8-connected to a strong pixel become strong, the rest are dropped
    HysteresisLinked,
}

/// Classify a magnitude plane with two thresholds
///
/// No ordering between `low` and `high` is enforced. With `low >= high` the
/// weak band is empty and the map only holds 0 and 255.
pub fn classify(magnitude: &Array2<f32>, low: f32, high: f32, strategy: EdgeStrategy) -> EdgeMap {
    let independent = magnitude.mapv(|m| {
        if m > high {
            STRONG_EDGE
        } else if m > low {
            WEAK_EDGE
        } else {
            0
        }
    });

    let map = match strategy {
        EdgeStrategy::IndependentThreshold => independent,
        EdgeStrategy::HysteresisLinked => link_weak_edges(independent),
    };

    debug!(
        "classified edges ({strategy:?}, low {low}, high {high}): {} strong, {} weak",
        map.iter().filter(|&&v| v == STRONG_EDGE).count(),
        map.iter().filter(|&&v| v == WEAK_EDGE).count()
    );
    map
}

// Flood from every strong pixel through weak neighbours, then clear leftovers
fn link_weak_edges(mut map: EdgeMap) -> EdgeMap {
    let (rows, cols) = map.dim();
    let mut stack: Vec<(usize, usize)> = map
        .indexed_iter()
        .filter(|&(_, &v)| v == STRONG_EDGE)
        .map(|(position, _)| position)
        .collect();

    while let Some((row, col)) = stack.pop() {
        for (dx, dy) in WALK_DIRECTIONS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dy), col.checked_add_signed(dx))
            else {
                continue;
            };
            if nr >= rows || nc >= cols {
                continue;
            }
            if map[(nr, nc)] == WEAK_EDGE {
                map[(nr, nc)] = STRONG_EDGE;
                stack.push((nr, nc));
            }
        }
    }

    map.mapv_inplace(|v| if v == WEAK_EDGE { 0 } else { v });
    map
}
