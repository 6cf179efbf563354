//! Tapered linear-scale arcs shared by the adjust screens.

use std::f64::consts::TAU;

use crate::effects::composite::CompositeOp;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::GenResult;
use crate::foundation::math::ceil_channel;
use crate::mask::annulus::AnnulusSector;
use crate::render::canvas::Canvas;
use crate::render::generate::{FrameCtx, FrameSpec};

use super::wrap_below_neg_pi;

/// Adjust screens that get a scale arc.
pub const SCALE_NAMES: [&str; 4] = ["maxvol", "blktime", "savetime", "sleeptime"];

const STEPS: u32 = 120;
const SWEEP_TURNS: f64 = 0.7;
const SIZE: u32 = 122;
const OUTER_RADIUS: f64 = 56.0;

pub(crate) fn spec(name: &str) -> FrameSpec {
    FrameSpec::single(SIZE, SIZE, format!("litegui/theme1/adjust/{name}_scale_focus.png"))
}

/// Inner radius of step `j`; the band widens from 4 px towards 12 px.
pub fn step_inner_radius(j: u32) -> f64 {
    OUTER_RADIUS - 4.0 - 8.0 * f64::from(j) / f64::from(STEPS)
}

/// Sector `[start, end]` of step `j`.
pub fn step_angles(j: u32) -> (f64, f64) {
    let steps = f64::from(STEPS);
    let start = (-0.4 - f64::from(j + 1) / steps * SWEEP_TURNS) * TAU;
    let end = (-0.4 - f64::from(j) / steps * SWEEP_TURNS) * TAU;
    (wrap_below_neg_pi(start), wrap_below_neg_pi(end))
}

/// Brightens towards full `#99FF00` at the last step.
pub fn step_color(j: u32) -> Rgba8Premul {
    let c = 1.0 - f64::from(STEPS - j) * 0.004;
    Rgba8Premul::opaque(ceil_channel(c, 153.0), ceil_channel(c, 255.0), 0x00)
}

pub(crate) fn draw(ctx: &FrameCtx, canvas: &mut Canvas) -> GenResult<()> {
    let arc = AnnulusSector::disc(ctx.center, OUTER_RADIUS)?;
    for j in 1..STEPS {
        let (start, end) = step_angles(j);
        let step = arc
            .with_inner_radius(step_inner_radius(j))?
            .with_angles(start, end);
        canvas.fill_masked(&step, step_color(j), CompositeOp::Over);
    }
    Ok(())
}
