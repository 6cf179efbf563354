//! Boot glow animation and the shutdown sequence derived from it.

use std::path::{Path, PathBuf};

use crate::effects::composite::CompositeOp;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{GenError, GenResult};
use crate::foundation::math::ceil_channel;
use crate::mask::annulus::AnnulusSector;
use crate::render::canvas::Canvas;
use crate::render::generate::{FilenameTemplate, FrameCtx, FrameSpec, ensure_parent_dir};

/// Last boot frame index; frames run `0..=BOOT_LAST_FRAME`.
pub const BOOT_LAST_FRAME: u32 = 45;
/// Last shutdown frame index; frames run `0..=SHUTDOWN_LAST_FRAME`.
pub const SHUTDOWN_LAST_FRAME: u32 = 17;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const JPEG_QUALITY: u8 = 25;
const MAX_RADIUS: f64 = 336.0;

const BOOT_TEMPLATE: &str = "litegui/boot_animation/boot{}.jpg";
const SHUTDOWN_TEMPLATE: &str = "litegui/boot_animation/shutdown{}.jpg";

pub(crate) fn spec() -> FrameSpec {
    FrameSpec::frames(WIDTH, HEIGHT, BOOT_TEMPLATE, 0, BOOT_LAST_FRAME)
        .with_jpeg_quality(JPEG_QUALITY)
}

/// Frame `i` stacks `i + 1` concentric discs, largest first.
pub(crate) fn draw(ctx: &FrameCtx, canvas: &mut Canvas) -> GenResult<()> {
    let i = ctx.index;
    let last = f64::from(BOOT_LAST_FRAME);
    let f0 = f64::from(BOOT_LAST_FRAME - i) / last;

    for c in 0..=i {
        let f1 = f64::from(i - c + 1) / (last + 1.0);
        let disc = AnnulusSector::disc(ctx.center, MAX_RADIUS * f1)?;
        let f2 = ((f64::from(c + 1) / 2.0).sin() + 1.0).max(0.0) * 0.5 * (1.0 - f1) * f0;
        let color = Rgba8Premul::opaque(
            ceil_channel(f2, 192.0) + 0x0C,
            ceil_channel(f2, 240.0) + 0x0F,
            0,
        );
        canvas.fill_masked(&disc, color, CompositeOp::Over);
    }
    Ok(())
}

/// Boot frame whose content shutdown frame `i` reuses.
pub fn shutdown_source_frame(i: u32) -> u32 {
    (SHUTDOWN_LAST_FRAME - i) * 2
}

/// Write the shutdown sequence as byte copies of every second boot frame, reversed.
///
/// Existing shutdown files are replaced.
pub(crate) fn copy_shutdown_frames(out_root: &Path) -> GenResult<Vec<PathBuf>> {
    let boot = FilenameTemplate::parse(BOOT_TEMPLATE)?;
    let shutdown = FilenameTemplate::parse(SHUTDOWN_TEMPLATE)?;

    let mut written = Vec::with_capacity(SHUTDOWN_LAST_FRAME as usize + 1);
    for i in 0..=SHUTDOWN_LAST_FRAME {
        let src = out_root.join(boot.format(shutdown_source_frame(i)));
        let dst = out_root.join(shutdown.format(i));
        ensure_parent_dir(&dst)?;
        tracing::info!(path = %dst.display(), from = %src.display(), "copying");

        std::fs::copy(&src, &dst).map_err(|e| {
            GenError::io(&dst, format!("copy from '{}': {e}", src.display()))
        })?;
        written.push(dst);
    }
    Ok(written)
}
