pub use kurbo::Vec2;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset of `self` relative to `origin`, as a floating-point vector in screen space.
    pub fn offset_from(self, origin: Point) -> Vec2 {
        Vec2::new(f64::from(self.x - origin.x), f64::from(self.y - origin.y))
    }
}

/// Integer pixel rectangle, half-open `[min, max)` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub min: Point,
    /// Exclusive bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin with the given size.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(
            Point::new(0, 0),
            Point::new(clamp_dim(width), clamp_dim(height)),
        )
    }

    /// Square of side `2 * half` centered on `center`.
    pub fn centered(center: Point, half: i32) -> Self {
        Self::new(
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y + half),
        )
    }

    /// Width in pixels (0 for empty or inverted rects).
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    /// Height in pixels (0 for empty or inverted rects).
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// Return `true` when the rectangle holds no pixels.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Return `true` when `p` is inside `[min, max)`.
    pub fn contains(self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Largest rectangle contained in both `self` and `other`.
    ///
    /// Disjoint inputs yield an empty rectangle.
    pub fn intersect(self, other: Rect) -> Rect {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x >= max.x || min.y >= max.y {
            return Rect::default();
        }
        Rect::new(min, max)
    }

    /// Translate both corners by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            Point::new(self.min.x + dx, self.min.y + dy),
            Point::new(self.max.x + dx, self.max.y + dy),
        )
    }
}

fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from straight 8-bit channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from `[r, g, b, a]` channels that are already premultiplied.
    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

/// Binary stencil coverage for a pixel the mask leaves untouched.
pub const TRANSPARENT: u8 = 0;
/// Binary stencil coverage for a pixel inside the mask.
pub const OPAQUE: u8 = 255;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
