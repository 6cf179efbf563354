//! litegui-gen renders the procedural graphics of the litegui device shell.
//!
//! Every asset is built from one primitive, the [`AnnulusSector`] stencil: a ring bounded by an
//! inner and outer radius and restricted to an angular sector. Draw routines composite solid
//! colors through stencils (and decoded icons on top) onto a [`Canvas`]; the frame driver encodes
//! each canvas to PNG or JPEG and writes it.
//!
//! # Pipeline overview
//!
//! 1. **Catalogue**: [`catalog`] lists the fixed asset [`Family`] descriptors
//! 2. **Drive**: [`render_frames`] allocates a blank canvas per frame index and calls the draw routine
//! 3. **Draw**: [`Canvas::fill_masked`] / [`Canvas::overlay`] with [`CompositeOp::Replace`] or
//!    [`CompositeOp::Over`]
//! 4. **Encode**: [`encode_canvas`] to PNG (straight alpha) or JPEG
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce byte-identical PNG files.
//! - **Premultiplied RGBA8** on canvases; encoders convert on the way out.
//! - **Fail fast**: every error is fatal and propagates to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod encode;
mod families;
mod foundation;
mod mask;
mod render;

pub use assets::decode::{Icon, decode_icon, load_icon};
pub use effects::composite::{CompositeOp, PremulRgba8, over, replace};
pub use encode::codec::{OutputFormat, encode_canvas};
pub use families::boot::{BOOT_LAST_FRAME, SHUTDOWN_LAST_FRAME, shutdown_source_frame};
pub use families::launcher::LAUNCHER_NAMES;
pub use families::scale::SCALE_NAMES;
pub use families::theme::{CUTOFF_COLOR, WEDGES, icon_origin, wedge_angles, wedge_color};
pub use families::{Family, catalog};
pub use foundation::core::{OPAQUE, Point, Rect, Rgba8Premul, TRANSPARENT, Vec2};
pub use foundation::error::{GenError, GenResult};
pub use mask::annulus::AnnulusSector;
pub use render::canvas::Canvas;
pub use render::generate::{
    FilenameTemplate, FrameCtx, FrameSpec, ensure_parent_dir, render_frames,
};
pub use render::pipeline::{
    DEFAULT_INPUT_ROOT, DEFAULT_OUTPUT_ROOT, GenerateOpts, generate_all, generate_family,
};
