use crate::foundation::core::{OPAQUE, Point, Rect, TRANSPARENT, Vec2};
use crate::foundation::error::{GenError, GenResult};

/// Ring-and-angle stencil: pixels whose distance from `center` lies in `[inner, outer]` and whose
/// polar angle lies in the sector `[start, end]`.
///
/// Angles are radians, counter-clockwise from the positive x axis with screen-up positive. The
/// sector may wrap through the ±π branch cut (`start > end`). `start == end` selects the full
/// annulus, not an empty slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnulusSector {
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
}

impl AnnulusSector {
    /// Create a validated stencil. Fails when `inner > outer`.
    pub fn new(center: Point, inner: f64, outer: f64, start: f64, end: f64) -> GenResult<Self> {
        if inner > outer {
            return Err(GenError::validation(format!(
                "annulus inner radius {inner} > outer radius {outer}"
            )));
        }
        Ok(Self {
            center,
            inner,
            outer,
            start,
            end,
        })
    }

    /// Full disc of radius `outer`.
    pub fn disc(center: Point, outer: f64) -> GenResult<Self> {
        Self::new(center, 0.0, outer, 0.0, 0.0)
    }

    /// Full ring between `inner` and `outer`.
    pub fn ring(center: Point, inner: f64, outer: f64) -> GenResult<Self> {
        Self::new(center, inner, outer, 0.0, 0.0)
    }

    /// Same radii, new sector.
    pub fn with_angles(self, start: f64, end: f64) -> Self {
        Self { start, end, ..self }
    }

    /// Same sector, new inner radius (re-validated against `outer`).
    pub fn with_inner_radius(self, inner: f64) -> GenResult<Self> {
        Self::new(self.center, inner, self.outer, self.start, self.end)
    }

    /// Center of the stencil.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Inner radius in pixels.
    pub fn inner_radius(&self) -> f64 {
        self.inner
    }

    /// Outer radius in pixels.
    pub fn outer_radius(&self) -> f64 {
        self.outer
    }

    /// Smallest square enclosing the disc of radius `ceil(outer)`, half-open.
    pub fn bounds(&self) -> Rect {
        let half = self.outer.ceil() as i32;
        Rect::centered(self.center, half)
    }

    /// Return `true` when pixel `(x, y)` is inside the stencil.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let d = Point::new(x, y).offset_from(self.center);
        let rr = d.hypot2();
        if rr < self.inner * self.inner || rr > self.outer * self.outer {
            return false;
        }
        if self.start == self.end {
            return true;
        }

        // Image rows grow downwards; flip y so angles grow counter-clockwise.
        let a = Vec2::new(d.x, -d.y).atan2();
        if self.start < self.end {
            self.start <= a && a <= self.end
        } else {
            self.start <= a || a <= self.end
        }
    }

    /// Binary coverage byte for pixel `(x, y)`.
    pub fn coverage(&self, x: i32, y: i32) -> u8 {
        if self.covers(x, y) { OPAQUE } else { TRANSPARENT }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/annulus.rs"]
mod tests;
