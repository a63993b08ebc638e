//! Greedy gradient-following line extraction
//!
//! Pixels are scanned in row-major order. Every unvisited pixel whose
//! magnitude clears the start threshold seeds a walk that repeatedly steps
//! to the strongest unvisited 8-neighbour, as long as that neighbour's
//! magnitude exceeds [`LINE_WALK_CUTOFF`]. Walks long enough are reported in
//! discovery order.
//!
//! Each pixel is consumed by at most one walk per call, which bounds the work
//! to O(W·H). The visited flags live in a [`VisitedSet`] owned by the call.

use crate::io::configuration::LINE_WALK_CUTOFF;
use crate::raster::VisitedSet;
use log::debug;
use ndarray::Array2;

/// Neighbour enumeration order; ties go to the earliest entry
pub const WALK_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One traced path, summarised by its endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Seed pixel `(x, y)`
    pub start: (u32, u32),
    /// Last pixel reached `(x, y)`
    pub end: (u32, u32),
    /// Number of steps taken from the seed
    pub length: u32,
    /// `length / length_threshold`, at least 1 for kept segments
    pub strength: f32,
}

/// Tracing thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSettings {
    /// Seeds must satisfy `magnitude > line_threshold * 255`
    pub line_threshold: f32,
    /// Minimum step count for a walk to be kept
    pub length_threshold: u32,
}

/// Trace lines through a magnitude plane indexed `(y, x)`
///
/// Returns an empty list when no pixel qualifies as a seed. A
/// `length_threshold` of zero is treated as one.
pub fn trace_lines(magnitude: &Array2<f32>, settings: TraceSettings) -> Vec<LineSegment> {
    let (rows, cols) = magnitude.dim();
    let seed_level = settings.line_threshold * 255.0;
    let length_threshold = settings.length_threshold.max(1);
    let mut visited = VisitedSet::new(cols, rows);
    let mut segments = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            if visited.contains(x, y) || magnitude[(y, x)] <= seed_level {
                continue;
            }

            let (end, length) = walk(magnitude, &mut visited, (x, y));
            if length >= length_threshold {
                segments.push(LineSegment {
                    start: (x as u32, y as u32),
                    end: (end.0 as u32, end.1 as u32),
                    length,
                    strength: length as f32 / length_threshold as f32,
                });
            }
        }
    }

    debug!(
        "traced {} segments over {cols}x{rows} ({} pixels visited)",
        segments.len(),
        visited.count()
    );
    segments
}

// Follows the strongest unvisited neighbour from `seed`; returns (end, steps)
fn walk(
    magnitude: &Array2<f32>,
    visited: &mut VisitedSet,
    seed: (usize, usize),
) -> ((usize, usize), u32) {
    let (rows, cols) = magnitude.dim();
    let mut current = seed;
    let mut length = 0;
    visited.mark(seed.0, seed.1);

    loop {
        let mut best: Option<(usize, usize)> = None;
        let mut best_magnitude = LINE_WALK_CUTOFF;

        for (dx, dy) in WALK_DIRECTIONS {
            let (Some(nx), Some(ny)) = (
                current.0.checked_add_signed(dx),
                current.1.checked_add_signed(dy),
            ) else {
                continue;
            };
            if nx >= cols || ny >= rows || visited.contains(nx, ny) {
                continue;
            }
            let candidate = magnitude[(ny, nx)];
            if candidate > best_magnitude {
                best_magnitude = candidate;
                best = Some((nx, ny));
            }
        }

        let Some(next) = best else {
            break;
        };
        visited.mark(next.0, next.1);
        current = next;
        length += 1;
    }

    (current, length)
}
