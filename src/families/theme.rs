//! Theme selector wheel.
//!
//! Six wedges around the wheel; the selected wedge is filled to the center, the others only show
//! their outer ring. A neutral disc covers the hub and the selection's icon sits inside its wedge.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use crate::assets::decode::load_icon;
use crate::effects::composite::CompositeOp;
use crate::foundation::core::{Point, Rgba8Premul, Vec2};
use crate::foundation::error::GenResult;
use crate::mask::annulus::AnnulusSector;
use crate::render::canvas::Canvas;
use crate::render::generate::{FrameCtx, FrameSpec};

/// Number of selectable wedges; selections are `1..=WEDGES`.
pub const WEDGES: u32 = 6;

const SIZE: u32 = 128;
const OUTER_RADIUS: f64 = 64.0;
const RING_INNER_RADIUS: f64 = 60.0;
const ICON_RADIUS: f64 = 48.0;
const CUTOFF_RADIUS: f64 = 16.0;

const GREEN: Rgba8Premul = Rgba8Premul::opaque(0x66, 0x99, 0x00);
const WEDGE_COLORS: [Rgba8Premul; WEDGES as usize] = [
    GREEN,
    GREEN,
    GREEN,
    GREEN,
    Rgba8Premul::opaque(0x00, 0x00, 0x99),
    Rgba8Premul::opaque(0x33, 0x33, 0x33),
];
/// Hub color.
pub const CUTOFF_COLOR: Rgba8Premul = Rgba8Premul::opaque(0x99, 0x99, 0x99);

pub(crate) fn spec() -> FrameSpec {
    FrameSpec::frames(SIZE, SIZE, "litegui/theme1/theme/theme_{}.png", 1, WEDGES)
}

/// Source icon for selection `i`.
pub fn icon_path(input_root: &Path, i: u32) -> PathBuf {
    input_root.join(format!("theme_icon_{i}.png"))
}

/// Start, center and end angle of wedge `j` (1-based), in radians.
///
/// Wedges are eighths of the circle laid out clockwise from the left.
pub fn wedge_angles(j: u32) -> (f64, f64, f64) {
    let k = f64::from((9 - j) % 8);
    let start = (k - 4.0) / 4.0 * PI;
    let center = (k - 3.5) / 4.0 * PI;
    let end = (k - 3.0) / 4.0 * PI;
    (start, center, end)
}

/// Color of wedge `j` (1-based).
pub fn wedge_color(j: u32) -> Rgba8Premul {
    WEDGE_COLORS[(j - 1) as usize]
}

pub(crate) fn draw(ctx: &FrameCtx, input_root: &Path, canvas: &mut Canvas) -> GenResult<()> {
    let selected = ctx.index;
    let mut selected_center = 0.0;

    for j in 1..=WEDGES {
        let (start, center, end) = wedge_angles(j);
        let inner = if j == selected {
            selected_center = center;
            0.0
        } else {
            RING_INNER_RADIUS
        };
        let wedge = AnnulusSector::new(ctx.center, inner, OUTER_RADIUS, start, end)?;
        canvas.fill_masked(&wedge, wedge_color(j), CompositeOp::Over);
    }

    let hub = AnnulusSector::disc(ctx.center, CUTOFF_RADIUS)?;
    canvas.fill_masked(&hub, CUTOFF_COLOR, CompositeOp::Over);

    let icon = load_icon(&icon_path(input_root, selected))?;
    let origin = icon_origin(ctx.center, selected_center, icon.width, icon.height);
    canvas.overlay(&icon, origin);
    Ok(())
}

/// Top-left corner placing an icon of the given size around the wedge's icon point.
///
/// Polar offsets use `trunc(v + 0.5)`, not `round(v)`; negative offsets differ.
pub fn icon_origin(center: Point, angle: f64, width: u32, height: u32) -> Point {
    let polar = Vec2::from_angle(angle) * ICON_RADIUS;
    let dx = (polar.x + 0.5) as i32;
    let dy = (polar.y + 0.5) as i32;
    Point::new(
        center.x + dx - (width / 2) as i32,
        center.y - dy - (height / 2) as i32,
    )
}
