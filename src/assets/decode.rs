use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{GenError, GenResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Read-only decoded icon in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied pixels, `width * height * 4` bytes.
    pub rgba8_premul: Vec<u8>,
}

impl Icon {
    /// Pixel at `(x, y)`; callers stay inside `[0, width) x [0, height)`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[i..i + 4];
        Rgba8Premul::from_array([px[0], px[1], px[2], px[3]])
    }
}

/// Decode an icon from encoded image bytes (any format the `image` crate recognizes).
pub fn decode_icon(bytes: &[u8]) -> GenResult<Icon> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(Icon {
        width,
        height,
        rgba8_premul,
    })
}

/// Read and decode an icon file. Missing and corrupt files are both decode errors.
pub fn load_icon(path: &Path) -> GenResult<Icon> {
    let bytes = std::fs::read(path).map_err(|e| GenError::decode(path, e))?;
    decode_icon(&bytes).map_err(|e| GenError::decode(path, format!("{e:#}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
