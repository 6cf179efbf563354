use std::path::{Path, PathBuf};

use crate::encode::codec::{OutputFormat, encode_canvas};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{GenError, GenResult};
use crate::render::canvas::Canvas;

/// Output file name pattern with at most one frame-index placeholder.
///
/// Supported placeholders: `{}` (plain decimal) and `{:0N}` (zero-padded to `N` digits).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilenameTemplate {
    raw: String,
    prefix: String,
    placeholder: Option<Placeholder>,
    suffix: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placeholder {
    Plain,
    ZeroPad(usize),
}

impl FilenameTemplate {
    /// Parse a template string.
    pub fn parse(raw: &str) -> GenResult<Self> {
        let Some(open) = raw.find('{') else {
            return Ok(Self {
                raw: raw.to_string(),
                prefix: raw.to_string(),
                placeholder: None,
                suffix: String::new(),
            });
        };
        let close = raw[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| GenError::validation(format!("unterminated placeholder in '{raw}'")))?;

        let spec = &raw[open + 1..close];
        let placeholder = match spec {
            "" => Placeholder::Plain,
            _ => {
                let width = spec
                    .strip_prefix(":0")
                    .and_then(|w| w.parse::<usize>().ok())
                    .ok_or_else(|| {
                        GenError::validation(format!("unsupported placeholder '{{{spec}}}' in '{raw}'"))
                    })?;
                Placeholder::ZeroPad(width)
            }
        };

        let suffix = &raw[close + 1..];
        if suffix.contains('{') || suffix.contains('}') {
            return Err(GenError::validation(format!(
                "template '{raw}' has more than one placeholder"
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
            prefix: raw[..open].to_string(),
            placeholder: Some(placeholder),
            suffix: suffix.to_string(),
        })
    }

    /// Return `true` when the template can number frames.
    pub fn has_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    /// The template exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `index` into the placeholder. Templates without one are returned verbatim.
    pub fn format(&self, index: u32) -> String {
        match self.placeholder {
            None => self.raw.clone(),
            Some(Placeholder::Plain) => format!("{}{index}{}", self.prefix, self.suffix),
            Some(Placeholder::ZeroPad(w)) => {
                format!("{}{index:0w$}{}", self.prefix, self.suffix)
            }
        }
    }
}

/// Geometry and output settings for one asset family.
#[derive(Clone, Debug)]
pub struct FrameSpec {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Output path template, relative to the output root.
    pub template: String,
    /// First frame index (inclusive).
    pub first: u32,
    /// Last frame index (inclusive).
    pub last: u32,
    /// JPEG quality; `None` writes PNG.
    pub jpeg_quality: Option<u8>,
}

impl FrameSpec {
    /// Single-file spec writing `template` verbatim.
    pub fn single(width: u32, height: u32, template: impl Into<String>) -> Self {
        Self {
            width,
            height,
            template: template.into(),
            first: 0,
            last: 0,
            jpeg_quality: None,
        }
    }

    /// Multi-frame spec over `[first, last]`.
    pub fn frames(
        width: u32,
        height: u32,
        template: impl Into<String>,
        first: u32,
        last: u32,
    ) -> Self {
        Self {
            width,
            height,
            template: template.into(),
            first,
            last,
            jpeg_quality: None,
        }
    }

    /// Write JPEG at `quality` instead of PNG.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    /// Output file name for frame `index`.
    pub fn file_name(&self, template: &FilenameTemplate, index: u32) -> String {
        if self.first == self.last {
            template.as_str().to_string()
        } else {
            template.format(index)
        }
    }
}

/// Per-frame inputs handed to a draw routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCtx {
    /// Frame index within the family's range.
    pub index: u32,
    /// Canvas extent.
    pub bounds: Rect,
    /// Canvas center, `(width / 2, height / 2)`.
    pub center: Point,
}

/// Render every frame of `spec` through `draw` and write the encoded files under `out_root`.
///
/// Returns the written paths in frame order. The first failure aborts the run; files already
/// written stay on disk.
pub fn render_frames<F>(spec: &FrameSpec, out_root: &Path, mut draw: F) -> GenResult<Vec<PathBuf>>
where
    F: FnMut(&FrameCtx, &mut Canvas) -> GenResult<()>,
{
    if spec.first > spec.last {
        return Err(GenError::validation(format!(
            "frame range {}..={} is inverted for '{}'",
            spec.first, spec.last, spec.template
        )));
    }
    let template = FilenameTemplate::parse(&spec.template)?;
    if spec.first != spec.last && !template.has_placeholder() {
        return Err(GenError::validation(format!(
            "multi-frame template '{}' has no index placeholder",
            spec.template
        )));
    }

    let format = OutputFormat::from_quality(spec.jpeg_quality);
    let center = Point::new((spec.width / 2) as i32, (spec.height / 2) as i32);
    let mut written = Vec::with_capacity((spec.last - spec.first + 1) as usize);

    for index in spec.first..=spec.last {
        let path = out_root.join(spec.file_name(&template, index));
        ensure_parent_dir(&path)?;
        tracing::info!(path = %path.display(), "writing");

        let mut canvas = Canvas::new(spec.width, spec.height);
        let ctx = FrameCtx {
            index,
            bounds: canvas.bounds(),
            center,
        };
        draw(&ctx, &mut canvas)?;

        let bytes = encode_canvas(&canvas, format)?;
        std::fs::write(&path, bytes).map_err(|e| GenError::io(&path, e))?;
        written.push(path);
    }

    Ok(written)
}

/// Create the parent directory of `path` (and its ancestors) when missing.
pub fn ensure_parent_dir(path: &Path) -> GenResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/generate.rs"]
mod tests;
