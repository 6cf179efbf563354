//! Launcher badges: a solid disc with the category icon drawn over it.

use std::path::{Path, PathBuf};

use crate::assets::decode::load_icon;
use crate::effects::composite::CompositeOp;
use crate::foundation::core::{Point, Rgba8Premul};
use crate::foundation::error::GenResult;
use crate::mask::annulus::AnnulusSector;
use crate::render::canvas::Canvas;
use crate::render::generate::{FrameCtx, FrameSpec};

/// Launcher categories, one badge each.
pub const LAUNCHER_NAMES: [&str; 5] = ["playing", "category", "explorer", "play_set", "sys_set"];

const WIDTH: u32 = 56;
const HEIGHT: u32 = 72;
const BADGE_CENTER: Point = Point::new(28, 21);
const BADGE_RADIUS: f64 = 22.0;
const BADGE_COLOR: Rgba8Premul = Rgba8Premul::opaque(0x80, 0xAA, 0x00);

pub(crate) fn spec(name: &str) -> FrameSpec {
    FrameSpec::single(WIDTH, HEIGHT, format!("litegui/theme1/launcher/{name}_f.png"))
}

/// Source icon for badge `name`.
pub fn icon_path(input_root: &Path, name: &str) -> PathBuf {
    input_root
        .join("litegui")
        .join("theme1")
        .join("launcher")
        .join(format!("{name}.png"))
}

pub(crate) fn draw(
    name: &str,
    _ctx: &FrameCtx,
    input_root: &Path,
    canvas: &mut Canvas,
) -> GenResult<()> {
    let badge = AnnulusSector::disc(BADGE_CENTER, BADGE_RADIUS)?;
    canvas.fill_masked(&badge, BADGE_COLOR, CompositeOp::Replace);

    let icon = load_icon(&icon_path(input_root, name))?;
    canvas.overlay(&icon, Point::new(0, 0));
    Ok(())
}
