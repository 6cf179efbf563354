use crate::assets::decode::Icon;
use crate::effects::composite::CompositeOp;
use crate::foundation::core::{Point, Rect, Rgba8Premul};
use crate::mask::annulus::AnnulusSector;

/// Mutable premultiplied RGBA8 pixel grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas extent, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `p`, or `None` outside the canvas.
    pub fn pixel(&self, p: Point) -> Option<Rgba8Premul> {
        let i = self.index(p)?;
        let px = &self.data[i..i + 4];
        Some(Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]))
    }

    /// Overwrite the pixel at `p`; ignored outside the canvas.
    pub fn set_pixel(&mut self, p: Point, color: Rgba8Premul) {
        if let Some(i) = self.index(p) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Composite a solid `color` through `mask` onto the canvas.
    ///
    /// Only pixels inside `mask.bounds()` are visited.
    pub fn fill_masked(&mut self, mask: &AnnulusSector, color: Rgba8Premul, op: CompositeOp) {
        let area = self.bounds().intersect(mask.bounds());
        let src = color.to_array();
        for y in area.min.y..area.max.y {
            for x in area.min.x..area.max.x {
                let Some(i) = self.index(Point::new(x, y)) else {
                    continue;
                };
                let d = &mut self.data[i..i + 4];
                let out = op.apply([d[0], d[1], d[2], d[3]], src, mask.coverage(x, y));
                d.copy_from_slice(&out);
            }
        }
    }

    /// Blend `icon` over the canvas with its top-left corner at `origin`.
    pub fn overlay(&mut self, icon: &Icon, origin: Point) {
        let placed = Rect::from_size(icon.width, icon.height).translate(origin.x, origin.y);
        let area = self.bounds().intersect(placed);
        for y in area.min.y..area.max.y {
            for x in area.min.x..area.max.x {
                let Some(i) = self.index(Point::new(x, y)) else {
                    continue;
                };
                let src = icon
                    .pixel((x - origin.x) as u32, (y - origin.y) as u32)
                    .to_array();
                let d = &mut self.data[i..i + 4];
                let out = CompositeOp::Over.apply([d[0], d[1], d[2], d[3]], src, 255);
                d.copy_from_slice(&out);
            }
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(((p.y as usize) * (self.width as usize) + (p.x as usize)) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
