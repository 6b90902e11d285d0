//! Scanline flood fill over pixel grids.
//!
//! Two stop policies are supported:
//! - **Area match**: grow through pixels equal to the seed's original color
//! - **Border stop**: grow through anything that is not the border color
//!
//! Both paint whole row runs per queue entry and treat the grid edge as an
//! implicit border. Work is bounded by `O(width * height)` for any shape.

pub mod area;
pub mod border;

pub use area::fill_area;
pub use border::fill_border;

use rayon::prelude::*;
use tracing::debug;

use crate::error::FillResult;
use crate::grid::{PixelBuffer, PixelGrid, Point};

/// Stop condition of a flood fill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillPolicy<C> {
    /// Continue through pixels matching the seed's original color.
    AreaMatch,
    /// Continue through any pixel that is not the given border color.
    BorderStop(C),
}

/// Outcome of a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillReport {
    /// Number of painted pixels
    pub painted: usize,
    /// Bounds of painted region
    pub bounds: Option<(usize, usize, usize, usize)>, // (x, y, width, height)
}

impl FillReport {
    pub fn is_empty(&self) -> bool {
        self.painted == 0
    }
}

/// Running count and bounding box of painted pixels.
pub(crate) struct Tally {
    painted: usize,
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl Tally {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            painted: 0,
            min_x: width,
            min_y: height,
            max_x: 0,
            max_y: 0,
        }
    }

    #[inline]
    pub(crate) fn record(&mut self, x: usize, y: usize) {
        self.painted += 1;
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub(crate) fn finish(self) -> FillReport {
        let bounds = if self.painted > 0 {
            Some((
                self.min_x,
                self.min_y,
                self.max_x - self.min_x + 1,
                self.max_y - self.min_y + 1,
            ))
        } else {
            None
        };
        FillReport {
            painted: self.painted,
            bounds,
        }
    }
}

/// Fill `grid` from `seed` with the given stop policy.
pub fn flood_fill<B: PixelBuffer + ?Sized>(
    grid: &mut B,
    seed: Point,
    fill: B::Color,
    policy: FillPolicy<B::Color>,
) -> FillResult<FillReport> {
    match policy {
        FillPolicy::AreaMatch => fill_area(grid, seed, fill),
        FillPolicy::BorderStop(border) => fill_border(grid, seed, fill, border),
    }
}

/// A complete fill description that can be stored, shipped and replayed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillRequest<C> {
    pub seed: Point,
    pub fill: C,
    pub policy: FillPolicy<C>,
}

impl<C: Copy + PartialEq> FillRequest<C> {
    pub fn area(seed: Point, fill: C) -> Self {
        Self {
            seed,
            fill,
            policy: FillPolicy::AreaMatch,
        }
    }

    pub fn border(seed: Point, fill: C, border: C) -> Self {
        Self {
            seed,
            fill,
            policy: FillPolicy::BorderStop(border),
        }
    }

    pub fn apply<B>(&self, grid: &mut B) -> FillResult<FillReport>
    where
        B: PixelBuffer<Color = C> + ?Sized,
    {
        flood_fill(grid, self.seed, self.fill, self.policy)
    }
}

/// Apply one request to many independent grids in parallel.
///
/// Each grid is filled by exactly one worker. Results come back in the
/// order of `grids`; a failing grid does not affect the others.
pub fn fill_batch<B>(grids: &mut [B], request: &FillRequest<B::Color>) -> Vec<FillResult<FillReport>>
where
    B: PixelBuffer + Send,
    B::Color: Sync,
{
    debug!(grids = grids.len(), "batch flood fill");
    grids.par_iter_mut().map(|grid| request.apply(grid)).collect()
}

impl<C: Copy + PartialEq> PixelGrid<C> {
    /// Copy of this grid with [`fill_area`] applied; `self` is left as is.
    pub fn with_area_filled(&self, seed: Point, fill: C) -> FillResult<Self> {
        let mut out = self.clone();
        fill_area(&mut out, seed, fill)?;
        Ok(out)
    }

    /// Copy of this grid with [`fill_border`] applied; `self` is left as is.
    pub fn with_border_filled(&self, seed: Point, fill: C, border: C) -> FillResult<Self> {
        let mut out = self.clone();
        fill_border(&mut out, seed, fill, border)?;
        Ok(out)
    }
}
