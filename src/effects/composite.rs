use crate::foundation::math::mul_div255_u8;

/// Premultiplied `[r, g, b, a]` pixel.
pub type PremulRgba8 = [u8; 4];

/// How a masked source is written onto the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeOp {
    /// Destination becomes `src * coverage`; uncovered pixels inside the mask bounds are cleared.
    Replace,
    /// Source blended over the destination, weighted by coverage.
    Over,
}

impl CompositeOp {
    /// Apply the operator to one pixel.
    pub fn apply(self, dst: PremulRgba8, src: PremulRgba8, coverage: u8) -> PremulRgba8 {
        match self {
            CompositeOp::Replace => replace(src, coverage),
            CompositeOp::Over => over(dst, src, coverage),
        }
    }
}

/// `src` scaled by `coverage`.
pub fn replace(src: PremulRgba8, coverage: u8) -> PremulRgba8 {
    let m = u16::from(coverage);
    [
        mul_div255_u8(u16::from(src[0]), m),
        mul_div255_u8(u16::from(src[1]), m),
        mul_div255_u8(u16::from(src[2]), m),
        mul_div255_u8(u16::from(src[3]), m),
    ]
}

/// Porter-Duff source-over with an extra coverage weight on the source.
pub fn over(dst: PremulRgba8, src: PremulRgba8, coverage: u8) -> PremulRgba8 {
    if coverage == 0 || src[3] == 0 {
        return dst;
    }

    let m = u16::from(coverage);
    let sa = mul_div255_u8(u16::from(src[3]), m);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), m);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
