use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::foundation::error::{GenError, GenResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::canvas::Canvas;

/// File format a frame is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, straight alpha.
    Png,
    /// Lossy, no alpha. `quality` is 1..=100.
    Jpeg {
        /// Encoder quality.
        quality: u8,
    },
}

impl OutputFormat {
    /// JPEG when a quality is supplied, PNG otherwise.
    pub fn from_quality(quality: Option<u8>) -> Self {
        match quality {
            Some(quality) => OutputFormat::Jpeg { quality },
            None => OutputFormat::Png,
        }
    }
}

/// Encode a premultiplied canvas into file bytes.
pub fn encode_canvas(canvas: &Canvas, format: OutputFormat) -> GenResult<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        OutputFormat::Png => {
            let mut straight = canvas.data().to_vec();
            unpremultiply_rgba8_in_place(&mut straight);
            PngEncoder::new(&mut out)
                .write_image(
                    &straight,
                    canvas.width(),
                    canvas.height(),
                    ExtendedColorType::Rgba8,
                )
                .map_err(|e| GenError::encode(format!("png: {e}")))?;
        }
        OutputFormat::Jpeg { quality } => {
            // Premultiplied color is the frame composited over black.
            let rgb: Vec<u8> = canvas
                .data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut out, quality)
                .write_image(&rgb, canvas.width(), canvas.height(), ExtendedColorType::Rgb8)
                .map_err(|e| GenError::encode(format!("jpeg: {e}")))?;
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
