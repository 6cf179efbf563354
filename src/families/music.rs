//! Music-library update spinner: a dot pulsing along half a sine period.

use std::f64::consts::PI;

use crate::effects::composite::CompositeOp;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::GenResult;
use crate::mask::annulus::AnnulusSector;
use crate::render::canvas::Canvas;
use crate::render::generate::{FrameCtx, FrameSpec};

const SIZE: u32 = 32;
const LAST_FRAME: u32 = 11;
const MAX_RADIUS: f64 = 8.0;
const DOT_COLOR: Rgba8Premul = Rgba8Premul::opaque(0xFF, 0x99, 0x00);

pub(crate) fn spec() -> FrameSpec {
    FrameSpec::frames(SIZE, SIZE, "litegui/theme1/music_update/{:02}.png", 0, LAST_FRAME)
}

/// Dot radius for frame `i`.
pub fn dot_radius(i: u32) -> f64 {
    MAX_RADIUS * (f64::from(i + 1) / 12.5 * PI).sin()
}

pub(crate) fn draw(ctx: &FrameCtx, canvas: &mut Canvas) -> GenResult<()> {
    let dot = AnnulusSector::disc(ctx.center, dot_radius(ctx.index))?;
    canvas.fill_masked(&dot, DOT_COLOR, CompositeOp::Replace);
    Ok(())
}
