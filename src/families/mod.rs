//! The fixed catalogue of asset families and their draw routines.

use std::f64::consts::{PI, TAU};
use std::path::{Path, PathBuf};

use crate::foundation::error::GenResult;
use crate::render::canvas::Canvas;
use crate::render::generate::{FrameCtx, FrameSpec};

pub(crate) mod boot;
pub(crate) mod launcher;
pub(crate) mod music;
pub(crate) mod scale;
pub(crate) mod theme;
pub(crate) mod volume;

/// Bring an angle computed below `-π` back into the `atan2` range.
pub(crate) fn wrap_below_neg_pi(a: f64) -> f64 {
    if a < -PI { a + TAU } else { a }
}

/// One output artifact family: its geometry and how each frame is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Launcher badge for one category, with its icon.
    LauncherBadge(&'static str),
    /// Boot glow animation; also produces the shutdown sequence.
    BootAnimation,
    /// Pulsing music-library update dot.
    MusicUpdate,
    /// Theme selector wheel, one file per selected wedge.
    ThemeWheel,
    /// Volume arc with warning zone.
    VolumeArc,
    /// Tapered scale arc for one adjust screen.
    LinearScale(&'static str),
}

impl Family {
    /// Short name used in logs.
    pub fn name(&self) -> String {
        match self {
            Family::LauncherBadge(n) => format!("launcher:{n}"),
            Family::BootAnimation => "boot".to_string(),
            Family::MusicUpdate => "music_update".to_string(),
            Family::ThemeWheel => "theme".to_string(),
            Family::VolumeArc => "volume".to_string(),
            Family::LinearScale(n) => format!("scale:{n}"),
        }
    }

    /// Canvas size, output template and frame range.
    pub fn spec(&self) -> FrameSpec {
        match self {
            Family::LauncherBadge(n) => launcher::spec(n),
            Family::BootAnimation => boot::spec(),
            Family::MusicUpdate => music::spec(),
            Family::ThemeWheel => theme::spec(),
            Family::VolumeArc => volume::spec(),
            Family::LinearScale(n) => scale::spec(n),
        }
    }

    /// Paint frame `ctx.index` onto a fresh canvas. Icons are read from `input_root`.
    pub fn draw(&self, ctx: &FrameCtx, input_root: &Path, canvas: &mut Canvas) -> GenResult<()> {
        match self {
            Family::LauncherBadge(n) => launcher::draw(n, ctx, input_root, canvas),
            Family::BootAnimation => boot::draw(ctx, canvas),
            Family::MusicUpdate => music::draw(ctx, canvas),
            Family::ThemeWheel => theme::draw(ctx, input_root, canvas),
            Family::VolumeArc => volume::draw(ctx, canvas),
            Family::LinearScale(_) => scale::draw(ctx, canvas),
        }
    }

    /// Files derived from this family's rendered output, written after all frames.
    pub fn finish(&self, out_root: &Path) -> GenResult<Vec<PathBuf>> {
        match self {
            Family::BootAnimation => boot::copy_shutdown_frames(out_root),
            _ => Ok(Vec::new()),
        }
    }
}

/// Every family in generation order.
pub fn catalog() -> Vec<Family> {
    let mut out: Vec<Family> = launcher::LAUNCHER_NAMES
        .into_iter()
        .map(Family::LauncherBadge)
        .collect();
    out.push(Family::BootAnimation);
    out.push(Family::MusicUpdate);
    out.push(Family::ThemeWheel);
    out.push(Family::VolumeArc);
    out.extend(scale::SCALE_NAMES.into_iter().map(Family::LinearScale));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/families/mod.rs"]
mod tests;
