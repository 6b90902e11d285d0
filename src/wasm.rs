//! WebAssembly exports for flood fill.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Bit Depth Support
//!
//! Both fills have two versions:
//! - **u8**: 8-bit per channel (0-255), standard for canvas `ImageData`
//! - **f32**: Float per channel (0.0-1.0), for HDR/linear workflows
//!
//! Images are flat RGBA arrays of length `width * height * 4`. Colors are
//! passed as 4-element arrays. Invalid input throws a JS error string.

use wasm_bindgen::prelude::*;

use crate::error::FillError;
use crate::fill::{fill_area, fill_border};
use crate::grid::{PixelGrid, Point};

fn js_error(err: FillError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn rgba<T: Copy>(values: &[T], name: &str) -> Result<[T; 4], JsValue> {
    <[T; 4]>::try_from(values).map_err(|_| {
        JsValue::from_str(&format!("{name} must have 4 channels, got {}", values.len()))
    })
}

// ============================================================================
// Area Fill
// ============================================================================

/// Flood fill the region sharing the seed pixel's color.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed pixel
/// * `fill` - Replacement color [r, g, b, a]
///
/// # Returns
/// Flat array of RGBA bytes with the region repainted
#[wasm_bindgen]
pub fn flood_fill_area_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: &[u8],
) -> Result<Vec<u8>, JsValue> {
    let fill = rgba(fill, "fill")?;
    let mut grid = PixelGrid::<[u8; 4]>::from_interleaved(data, width, height).map_err(js_error)?;
    fill_area(&mut grid, Point::new(x, y), fill).map_err(js_error)?;
    Ok(grid.to_interleaved())
}

#[wasm_bindgen]
pub fn flood_fill_area_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: &[f32],
) -> Result<Vec<f32>, JsValue> {
    let fill = rgba(fill, "fill")?;
    let mut grid = PixelGrid::<[f32; 4]>::from_interleaved(data, width, height).map_err(js_error)?;
    fill_area(&mut grid, Point::new(x, y), fill).map_err(js_error)?;
    Ok(grid.to_interleaved())
}

// ============================================================================
// Border Fill
// ============================================================================

/// Flood fill outward from the seed until the border color is reached.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed pixel
/// * `fill` - Replacement color [r, g, b, a]
/// * `border` - Stop color [r, g, b, a]
#[wasm_bindgen]
pub fn flood_fill_border_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: &[u8],
    border: &[u8],
) -> Result<Vec<u8>, JsValue> {
    let fill = rgba(fill, "fill")?;
    let border = rgba(border, "border")?;
    let mut grid = PixelGrid::<[u8; 4]>::from_interleaved(data, width, height).map_err(js_error)?;
    fill_border(&mut grid, Point::new(x, y), fill, border).map_err(js_error)?;
    Ok(grid.to_interleaved())
}

#[wasm_bindgen]
pub fn flood_fill_border_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: &[f32],
    border: &[f32],
) -> Result<Vec<f32>, JsValue> {
    let fill = rgba(fill, "fill")?;
    let border = rgba(border, "border")?;
    let mut grid = PixelGrid::<[f32; 4]>::from_interleaved(data, width, height).map_err(js_error)?;
    fill_border(&mut grid, Point::new(x, y), fill, border).map_err(js_error)?;
    Ok(grid.to_interleaved())
}
