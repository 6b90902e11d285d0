//! Flood fill bounded by an explicit border color.
//!
//! The region may mix any colors except the border color, so a painted
//! pixel cannot be told apart from an unvisited one by color alone. A
//! per-call visited mask marks processed pixels instead.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{FillReport, Tally};
use crate::error::FillResult;
use crate::grid::{validate_seed, PixelBuffer, Point};

/// One flag per pixel, row-major like the grid it shadows.
#[derive(Debug, Clone)]
pub(crate) struct VisitedMask {
    flags: Vec<bool>,
}

impl VisitedMask {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            flags: vec![false; width * height],
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    #[inline]
    pub(crate) fn mark(&mut self, idx: usize) {
        self.flags[idx] = true;
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.flags.iter().filter(|&&v| v).count()
    }
}

/// Repaint every pixel 4-connected to `seed` without crossing `border`.
///
/// Pixels equal to `border` are never painted. An open border lets the fill
/// run up to the grid edge, which acts as an implicit border. A seed that
/// sits on the border paints nothing.
pub fn fill_border<B: PixelBuffer + ?Sized>(
    grid: &mut B,
    seed: Point,
    fill: B::Color,
    border: B::Color,
) -> FillResult<FillReport> {
    let (seed_x, seed_y) = validate_seed(grid, seed)?;
    let (width, height) = (grid.width(), grid.height());
    let pixels = grid.pixels_mut();

    if pixels[seed_y * width + seed_x] == border {
        trace!(x = seed.x, y = seed.y, "seed lies on the border");
        return Ok(FillReport::default());
    }

    let mut scan = BorderScan {
        pixels,
        width,
        height,
        fill,
        border,
        visited: VisitedMask::new(width, height),
        queue: VecDeque::new(),
        tally: Tally::new(width, height),
    };
    scan.queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = scan.queue.pop_front() {
        for i in x..width {
            if !scan.paint(i, y) {
                break;
            }
        }
        for i in (0..x).rev() {
            if !scan.paint(i, y) {
                break;
            }
        }
    }

    let report = scan.tally.finish();
    debug!(
        x = seed.x,
        y = seed.y,
        painted = report.painted,
        "border flood fill complete"
    );
    Ok(report)
}

struct BorderScan<'a, C> {
    pixels: &'a mut [C],
    width: usize,
    height: usize,
    fill: C,
    border: C,
    visited: VisitedMask,
    queue: VecDeque<(usize, usize)>,
    tally: Tally,
}

impl<C: Copy + PartialEq> BorderScan<'_, C> {
    #[inline]
    fn is_open(&self, idx: usize) -> bool {
        !self.visited.is_visited(idx) && self.pixels[idx] != self.border
    }

    /// Paint `(x, y)` and queue open cells below and above it.
    ///
    /// Returns false when the cell ends the run.
    #[inline]
    fn paint(&mut self, x: usize, y: usize) -> bool {
        let idx = y * self.width + x;
        if !self.is_open(idx) {
            return false;
        }

        self.pixels[idx] = self.fill;
        self.visited.mark(idx);
        self.tally.record(x, y);

        if y + 1 < self.height && self.is_open(idx + self.width) {
            self.queue.push_back((x, y + 1));
        }
        if y >= 1 && self.is_open(idx - self.width) {
            self.queue.push_back((x, y - 1));
        }
        true
    }
}
