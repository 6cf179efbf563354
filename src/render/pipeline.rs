use std::path::{Path, PathBuf};

use crate::families::{Family, catalog};
use crate::foundation::error::GenResult;
use crate::render::generate::render_frames;

/// Default directory holding hand-edited source icons.
pub const DEFAULT_INPUT_ROOT: &str = "changes_edited";
/// Default directory receiving generated assets.
pub const DEFAULT_OUTPUT_ROOT: &str = "changes_generated";

/// Where icons are read from and generated files are written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOpts {
    /// Root of the source icon tree.
    pub input_root: PathBuf,
    /// Root of the generated asset tree, created on demand.
    pub output_root: PathBuf,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from(DEFAULT_INPUT_ROOT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

/// Render one family and any files derived from it.
///
/// Returns every path written, rendered frames first.
#[tracing::instrument(skip_all, fields(family = %family.name()))]
pub fn generate_family(family: Family, opts: &GenerateOpts) -> GenResult<Vec<PathBuf>> {
    let spec = family.spec();
    let input_root: &Path = &opts.input_root;
    let mut written = render_frames(&spec, &opts.output_root, |ctx, canvas| {
        family.draw(ctx, input_root, canvas)
    })?;
    written.extend(family.finish(&opts.output_root)?);
    tracing::debug!(files = written.len(), "family done");
    Ok(written)
}

/// Render the whole fixed batch, stopping at the first failure.
pub fn generate_all(opts: &GenerateOpts) -> GenResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for family in catalog() {
        written.extend(generate_family(family, opts)?);
    }
    Ok(written)
}
