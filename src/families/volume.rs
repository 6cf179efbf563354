//! Volume arc: 120 clockwise steps from 12 o'clock with a warning zone at the end.

use std::f64::consts::TAU;

use crate::effects::composite::CompositeOp;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::GenResult;
use crate::foundation::math::ceil_channel;
use crate::mask::annulus::AnnulusSector;
use crate::render::canvas::Canvas;
use crate::render::generate::{FrameCtx, FrameSpec};

use super::wrap_below_neg_pi;

/// Angular steps in the arc.
pub const STEPS: u32 = 120;
/// First step drawn with the warning ramp.
pub const WARNING_FROM: u32 = 100;

const SIZE: u32 = 118;
const OUTER_RADIUS: f64 = 59.0;
const INNER_RADIUS: f64 = 44.4;

pub(crate) fn spec() -> FrameSpec {
    FrameSpec::single(SIZE, SIZE, "litegui/theme1/adjust/volume_scale_focus.png")
}

/// Sector `[start, end]` of step `j`; each step starts one step clockwise of the previous one.
pub fn step_angles(j: u32) -> (f64, f64) {
    let steps = f64::from(STEPS);
    let j = f64::from(j);
    let start = (0.25 - j / steps) * TAU;
    let end = (0.25 - (j - 1.0) / steps) * TAU;
    (wrap_below_neg_pi(start), wrap_below_neg_pi(end))
}

/// Green-to-yellow ramp, then yellow-to-red over the warning steps.
pub fn step_color(j: u32) -> Rgba8Premul {
    if j < WARNING_FROM {
        let c = 1.0 - f64::from(WARNING_FROM - 1 - j) * 0.004;
        Rgba8Premul::opaque(ceil_channel(c, 153.0), ceil_channel(c, 255.0), 0x00)
    } else {
        let c = 1.0 - f64::from(j - WARNING_FROM) / 20.0;
        Rgba8Premul::opaque(0xFF, ceil_channel(c, 130.0), 0x34)
    }
}

pub(crate) fn draw(ctx: &FrameCtx, canvas: &mut Canvas) -> GenResult<()> {
    let ring = AnnulusSector::ring(ctx.center, INNER_RADIUS, OUTER_RADIUS)?;
    for j in 0..STEPS {
        let (start, end) = step_angles(j);
        canvas.fill_masked(
            &ring.with_angles(start, end),
            step_color(j),
            CompositeOp::Over,
        );
    }
    Ok(())
}
