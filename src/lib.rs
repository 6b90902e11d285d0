//! Flood Fill Rust Extensions
//!
//! Scanline flood fill over in-memory pixel grids, with Python bindings via
//! PyO3 and WASM bindings for JavaScript.
//!
//! ## Grid Format
//! A grid is a row-major array of colors, `index = x + y * width`. Colors
//! are opaque: any `Copy + PartialEq` type works and only equality is used.
//! The bindings work on RGBA images:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! ## Fill Policies
//! - **Area**: repaint the 4-connected region sharing the seed's color
//! - **Border**: repaint the 4-connected region enclosed by a border color
//!
//! Both mutate the grid in place and return a [`FillReport`] with the
//! painted pixel count and bounds. Invalid input is rejected with a
//! [`FillError`] before any pixel changes.

pub mod error;
pub mod fill;
pub mod grid;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FillError, FillResult};
pub use fill::{
    fill_area, fill_batch, fill_border, flood_fill, FillPolicy, FillReport, FillRequest,
};
pub use grid::{clear_border, GridMut, PixelBuffer, PixelGrid, Point, Rgba8, RgbaF32};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FillError;
    use crate::fill::{fill_area, fill_border};
    use crate::grid::{PixelGrid, Point, Rgba8, RgbaF32};

    fn value_error(err: FillError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Area Fill
    // ========================================================================

    /// Flood fill the region sharing the seed pixel's color (u8 RGBA).
    ///
    /// # Arguments
    /// * `image` - RGBA image (height, width, 4)
    /// * `x`, `y` - Seed pixel
    /// * `fill` - Replacement color [r, g, b, a]
    ///
    /// # Returns
    /// New image with the region repainted. Raises ValueError for an empty
    /// image, a non-RGBA image or a seed outside the image.
    #[pyfunction]
    pub fn flood_fill_area<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: i32,
        y: i32,
        fill: [u8; 4],
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut grid = PixelGrid::<Rgba8>::from_channels(image.as_array()).map_err(value_error)?;
        fill_area(&mut grid, Point::new(x, y), fill).map_err(value_error)?;
        Ok(grid.to_channels().into_pyarray(py))
    }

    /// Flood fill the region sharing the seed pixel's color (f32 RGBA).
    ///
    /// Colors compare exactly; no tolerance is applied.
    #[pyfunction]
    pub fn flood_fill_area_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        x: i32,
        y: i32,
        fill: [f32; 4],
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut grid = PixelGrid::<RgbaF32>::from_channels(image.as_array()).map_err(value_error)?;
        fill_area(&mut grid, Point::new(x, y), fill).map_err(value_error)?;
        Ok(grid.to_channels().into_pyarray(py))
    }

    // ========================================================================
    // Border Fill
    // ========================================================================

    /// Flood fill up to a border color (u8 RGBA).
    ///
    /// # Arguments
    /// * `image` - RGBA image (height, width, 4)
    /// * `x`, `y` - Seed pixel
    /// * `fill` - Replacement color [r, g, b, a]
    /// * `border` - Color that stops the fill [r, g, b, a]
    #[pyfunction]
    pub fn flood_fill_border<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: i32,
        y: i32,
        fill: [u8; 4],
        border: [u8; 4],
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut grid = PixelGrid::<Rgba8>::from_channels(image.as_array()).map_err(value_error)?;
        fill_border(&mut grid, Point::new(x, y), fill, border).map_err(value_error)?;
        Ok(grid.to_channels().into_pyarray(py))
    }

    #[pyfunction]
    pub fn flood_fill_border_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        x: i32,
        y: i32,
        fill: [f32; 4],
        border: [f32; 4],
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let mut grid = PixelGrid::<RgbaF32>::from_channels(image.as_array()).map_err(value_error)?;
        fill_border(&mut grid, Point::new(x, y), fill, border).map_err(value_error)?;
        Ok(grid.to_channels().into_pyarray(py))
    }

    /// Flood fill Rust extension module
    #[pymodule]
    pub fn floodfill_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill_area, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_area_f32, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_border, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_border_f32, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::floodfill_rust;
