//! Flood fill that repaints the 4-connected region sharing the seed's color.
//!
//! Scanline variant: each queue entry paints the whole run of matching
//! pixels in its row, rightward from the entry and then leftward from the
//! pixel before it, queueing matching cells directly above and below each
//! painted pixel.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{FillReport, Tally};
use crate::error::FillResult;
use crate::grid::{validate_seed, PixelBuffer, Point};

/// Repaint every pixel 4-connected to `seed` through pixels of the seed's
/// original color.
///
/// # Arguments
/// * `grid` - Grid to mutate in place
/// * `seed` - Starting pixel, must lie inside the grid
/// * `fill` - Replacement color
///
/// # Returns
/// Painted pixel count and bounds. When the seed already has the fill color
/// nothing is painted and the report is empty.
pub fn fill_area<B: PixelBuffer + ?Sized>(
    grid: &mut B,
    seed: Point,
    fill: B::Color,
) -> FillResult<FillReport> {
    let (seed_x, seed_y) = validate_seed(grid, seed)?;
    let (width, height) = (grid.width(), grid.height());
    let pixels = grid.pixels_mut();

    let reference = pixels[seed_y * width + seed_x];
    if reference == fill {
        // painted pixels double as visited markers, which needs reference != fill
        trace!(x = seed.x, y = seed.y, "seed already carries the fill color");
        return Ok(FillReport::default());
    }

    let mut scan = AreaScan {
        pixels,
        width,
        height,
        reference,
        fill,
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
        "area flood fill complete"
    );
    Ok(report)
}

struct AreaScan<'a, C> {
    pixels: &'a mut [C],
    width: usize,
    height: usize,
    reference: C,
    fill: C,
    queue: VecDeque<(usize, usize)>,
    tally: Tally,
}

impl<C: Copy + PartialEq> AreaScan<'_, C> {
    /// A cell is open while it still carries the reference color.
    #[inline]
    fn is_open(&self, idx: usize) -> bool {
        let color = self.pixels[idx];
        color == self.reference && color != self.fill
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
        debug_assert!(self.reference != self.fill);

        self.pixels[idx] = self.fill;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FillError;
    use crate::grid::{GridMut, PixelGrid, Rgba8};

    const WHITE: Rgba8 = [255, 255, 255, 255];
    const BLACK: Rgba8 = [0, 0, 0, 255];
    const RED: Rgba8 = [255, 0, 0, 255];

    fn grid_from_rows(rows: &[&str]) -> PixelGrid<u8> {
        let width = rows[0].len();
        let pixels = rows.iter().flat_map(|r| r.bytes()).collect();
        PixelGrid::from_vec(width, rows.len(), pixels).unwrap()
    }

    fn rows_of(grid: &PixelGrid<u8>) -> Vec<String> {
        grid.pixels()
            .chunks(grid.width())
            .map(|row| String::from_utf8(row.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_short_seam_does_not_split_region() {
        // 4x4 white with black at (1, 1) and (1, 2)
        let mut grid = PixelGrid::new(4, 4, WHITE).unwrap();
        grid[(1, 1)] = BLACK;
        grid[(1, 2)] = BLACK;

        let report = fill_area(&mut grid, Point::new(0, 0), RED).unwrap();

        assert_eq!(report.painted, 14);
        assert_eq!(report.bounds, Some((0, 0, 4, 4)));
        assert_eq!(grid[(1, 1)], BLACK);
        assert_eq!(grid[(1, 2)], BLACK);
        assert!(grid.pixels().iter().all(|&c| c == RED || c == BLACK));
    }

    #[test]
    fn test_full_seam_keeps_far_side() {
        let mut grid = grid_from_rows(&[
            "..#..",
            "..#..",
            "..#..",
        ]);

        let report = fill_area(&mut grid, Point::new(0, 1), b'r').unwrap();

        assert_eq!(report.painted, 6);
        assert_eq!(report.bounds, Some((0, 0, 2, 3)));
        assert_eq!(rows_of(&grid), vec!["rr#..", "rr#..", "rr#.."]);
    }

    #[test]
    fn test_winding_region_fills_through_rows() {
        // U-turns force runs to be discovered from above and below
        let mut grid = grid_from_rows(&[
            "......",
            "#####.",
            "......",
            ".#####",
            "......",
        ]);

        let report = fill_area(&mut grid, Point::new(0, 4), b'o').unwrap();

        assert_eq!(report.painted, 20);
        assert_eq!(
            rows_of(&grid),
            vec!["oooooo", "#####o", "oooooo", "o#####", "oooooo"]
        );
    }

    #[test]
    fn test_heterogeneous_neighbors_are_boundaries() {
        let mut grid = grid_from_rows(&[
            "aab",
            "acb",
            "aaa",
        ]);

        let report = fill_area(&mut grid, Point::new(2, 2), b'z').unwrap();

        assert_eq!(report.painted, 6);
        assert_eq!(rows_of(&grid), vec!["zzb", "zcb", "zzz"]);
    }

    #[test]
    fn test_idempotent() {
        let mut once = grid_from_rows(&["..#", ".##", "#.."]);
        fill_area(&mut once, Point::new(0, 0), b'x').unwrap();

        let mut twice = once.clone();
        let report = fill_area(&mut twice, Point::new(0, 0), b'x').unwrap();

        assert!(report.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_seed_with_fill_color_is_noop() {
        let mut grid = PixelGrid::new(3, 3, RED).unwrap();
        let before = grid.clone();

        let report = fill_area(&mut grid, Point::new(1, 1), RED).unwrap();

        assert_eq!(report, FillReport::default());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_corners_and_single_pixel() {
        for (x, y) in [(0, 0), (4, 0), (0, 2), (4, 2)] {
            let mut grid = PixelGrid::new(5, 3, 0u32).unwrap();
            let report = fill_area(&mut grid, Point::new(x, y), 9).unwrap();
            assert_eq!(report.painted, 15, "seed ({x}, {y})");
            assert!(grid.pixels().iter().all(|&c| c == 9));
        }

        let mut tiny = PixelGrid::new(1, 1, 0u32).unwrap();
        let report = fill_area(&mut tiny, Point::new(0, 0), 1).unwrap();
        assert_eq!(report.bounds, Some((0, 0, 1, 1)));
        assert_eq!(tiny.pixels(), &[1]);
    }

    #[test]
    fn test_invalid_seed_leaves_grid_untouched() {
        let mut grid = grid_from_rows(&["..", ".."]);
        let before = grid.clone();

        for seed in [Point::new(2, 0), Point::new(0, 2), Point::new(-1, 1)] {
            let err = fill_area(&mut grid, seed, b'x').unwrap_err();
            assert!(matches!(err, FillError::SeedOutOfBounds { .. }));
            assert!(err.is_invalid_argument());
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fills_borrowed_buffer() {
        let mut backing = vec![1u32, 1, 2, 1, 2, 2];
        let mut view = GridMut::new(&mut backing, 3, 2).unwrap();

        let report = fill_area(&mut view, Point::new(0, 1), 7).unwrap();

        assert_eq!(report.painted, 3);
        assert_eq!(backing, vec![7, 7, 2, 7, 2, 2]);
    }
}
