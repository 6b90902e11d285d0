//! Pixel grids the flood-fill engine operates on.
//!
//! A grid is a row-major array of colors addressed by `x + y * width`.
//! The engine never interprets a color beyond equality, so any
//! `Copy + PartialEq` type works: packed integers, `[u8; 4]` RGBA,
//! `[f32; 4]` linear RGBA, palette indices.
//!
//! ## Layout conversions
//! - flat interleaved channel buffers (`[r, g, b, a, r, g, b, a, ...]`)
//! - ndarray `(H, W)` arrays of whole colors
//! - ndarray `(H, W, C)` arrays of channel values, as handed over by numpy

use std::ops::{Index, IndexMut};

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use crate::error::{FillError, FillResult};

/// 8-bit RGBA color (0-255 per channel).
pub type Rgba8 = [u8; 4];

/// Float RGBA color (0.0-1.0 per channel).
pub type RgbaF32 = [f32; 4];

/// Integer pixel coordinate.
///
/// Signed so that negative caller input is rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A mutable, rectangular, row-major color buffer.
///
/// Implementors guarantee `pixels().len() == width() * height()` and
/// that both dimensions stay fixed for the lifetime of a borrow.
pub trait PixelBuffer {
    type Color: Copy + PartialEq;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixels(&self) -> &[Self::Color];
    fn pixels_mut(&mut self) -> &mut [Self::Color];

    /// Color at `(x, y)`, or `None` outside the grid.
    fn get(&self, x: usize, y: usize) -> Option<Self::Color> {
        if x < self.width() && y < self.height() {
            Some(self.pixels()[y * self.width() + x])
        } else {
            None
        }
    }
}

/// Number of pixels in a non-empty `width` x `height` grid.
pub(crate) fn pixel_count(width: usize, height: usize) -> FillResult<usize> {
    if width == 0 || height == 0 {
        return Err(FillError::EmptyGrid { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(FillError::TooLarge { width, height })
}

/// Check that `len` values describe a non-empty `width` x `height` grid.
pub(crate) fn check_dimensions(width: usize, height: usize, len: usize) -> FillResult<()> {
    let expected = pixel_count(width, height)?;
    if len != expected {
        return Err(FillError::BufferSize {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Validate the grid and the seed, returning the seed as unsigned coordinates.
pub(crate) fn validate_seed<B: PixelBuffer + ?Sized>(
    grid: &B,
    seed: Point,
) -> FillResult<(usize, usize)> {
    let (width, height) = (grid.width(), grid.height());
    check_dimensions(width, height, grid.pixels().len())?;

    let in_bounds = seed.x >= 0
        && seed.y >= 0
        && (seed.x as usize) < width
        && (seed.y as usize) < height;
    if !in_bounds {
        return Err(FillError::SeedOutOfBounds {
            x: seed.x,
            y: seed.y,
            width,
            height,
        });
    }
    Ok((seed.x as usize, seed.y as usize))
}

/// Owned pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid<C> {
    width: usize,
    height: usize,
    pixels: Vec<C>,
}

impl<C: Copy + PartialEq> PixelGrid<C> {
    /// Create a grid filled with a single color.
    pub fn new(width: usize, height: usize, color: C) -> FillResult<Self> {
        let count = pixel_count(width, height)?;
        // allocations are capped at isize::MAX bytes
        let fits = count
            .checked_mul(std::mem::size_of::<C>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(FillError::TooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![color; count],
        })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, pixels: Vec<C>) -> FillResult<Self> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn into_vec(self) -> Vec<C> {
        self.pixels
    }

    /// Build a grid from an `(H, W)` array of colors.
    pub fn from_array2(view: ArrayView2<'_, C>) -> FillResult<Self> {
        let (height, width) = view.dim();
        // iter() walks logical row-major order regardless of memory layout
        let pixels: Vec<C> = view.iter().copied().collect();
        Self::from_vec(width, height, pixels)
    }

    pub fn to_array2(&self) -> Array2<C> {
        Array2::from_shape_fn((self.height, self.width), |(y, x)| {
            self.pixels[y * self.width + x]
        })
    }
}

impl<T: Copy + PartialEq, const N: usize> PixelGrid<[T; N]> {
    /// Build a grid from an `(H, W, N)` array of channel values.
    pub fn from_channels(view: ArrayView3<'_, T>) -> FillResult<Self> {
        let (height, width, channels) = view.dim();
        if channels != N {
            return Err(FillError::ChannelCount {
                expected: N,
                actual: channels,
            });
        }
        let count = pixel_count(width, height)?;

        let mut pixels = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                pixels.push(std::array::from_fn(|c| view[[y, x, c]]));
            }
        }
        Self::from_vec(width, height, pixels)
    }

    /// Expand back into an `(H, W, N)` array.
    pub fn to_channels(&self) -> Array3<T> {
        Array3::from_shape_fn((self.height, self.width, N), |(y, x, c)| {
            self.pixels[y * self.width + x][c]
        })
    }

    /// Build a grid from a flat interleaved buffer of `width * height * N` values.
    pub fn from_interleaved(data: &[T], width: usize, height: usize) -> FillResult<Self> {
        if N == 0 {
            return Err(FillError::ChannelCount {
                expected: 1,
                actual: 0,
            });
        }
        let expected = pixel_count(width, height)?
            .checked_mul(N)
            .ok_or(FillError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(FillError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(N)
            .map(|px| std::array::from_fn(|c| px[c]))
            .collect();
        Self::from_vec(width, height, pixels)
    }

    pub fn to_interleaved(&self) -> Vec<T> {
        self.pixels.iter().flat_map(|px| px.iter().copied()).collect()
    }
}

impl<C: Copy + PartialEq> PixelBuffer for PixelGrid<C> {
    type Color = C;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[C] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [C] {
        &mut self.pixels
    }
}

impl<C> Index<(usize, usize)> for PixelGrid<C> {
    type Output = C;

    fn index(&self, (x, y): (usize, usize)) -> &C {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        &self.pixels[y * self.width + x]
    }
}

impl<C> IndexMut<(usize, usize)> for PixelGrid<C> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut C {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        &mut self.pixels[y * self.width + x]
    }
}

/// Grid view over a caller-owned buffer.
///
/// Lets a host fill its own pixel storage in place without copying it
/// into a `PixelGrid` first.
#[derive(Debug)]
pub struct GridMut<'a, C> {
    width: usize,
    height: usize,
    pixels: &'a mut [C],
}

impl<'a, C: Copy + PartialEq> GridMut<'a, C> {
    pub fn new(pixels: &'a mut [C], width: usize, height: usize) -> FillResult<Self> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl<C: Copy + PartialEq> PixelBuffer for GridMut<'_, C> {
    type Color = C;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[C] {
        &*self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [C] {
        &mut *self.pixels
    }
}

/// Paint the one-pixel frame of a grid with `color`.
///
/// Top and bottom rows span the width, left and right columns span the
/// height. Grids of one row or one column are painted entirely.
pub fn clear_border<B: PixelBuffer + ?Sized>(grid: &mut B, color: B::Color) {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return;
    }
    let pixels = grid.pixels_mut();

    let last_row = (height - 1) * width;
    for x in 0..width {
        pixels[x] = color;
        pixels[last_row + x] = color;
    }
    for y in 0..height {
        pixels[y * width] = color;
        pixels[y * width + width - 1] = color;
    }
}
