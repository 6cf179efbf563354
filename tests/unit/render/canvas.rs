use super::*;

const RED: Rgba8Premul = Rgba8Premul::opaque(255, 0, 0);
const GREEN: Rgba8Premul = Rgba8Premul::opaque(0, 255, 0);

fn red_canvas(w: u32, h: u32) -> Canvas {
    let mut c = Canvas::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            c.set_pixel(Point::new(x, y), RED);
        }
    }
    c
}

fn icon_2x2(px: [[u8; 4]; 4]) -> Icon {
    Icon {
        width: 2,
        height: 2,
        rgba8_premul: px.concat(),
    }
}

#[test]
fn new_canvas_is_transparent() {
    let c = Canvas::new(3, 2);
    assert_eq!(c.data().len(), 3 * 2 * 4);
    assert!(c.data().iter().all(|&b| b == 0));
    assert_eq!(c.bounds(), Rect::from_size(3, 2));
    assert_eq!(c.pixel(Point::new(3, 0)), None);
}

#[test]
fn replace_clears_uncovered_pixels_inside_mask_bounds_only() {
    let mut c = red_canvas(20, 20);
    let disc = AnnulusSector::disc(Point::new(10, 10), 3.0).unwrap();
    c.fill_masked(&disc, GREEN, CompositeOp::Replace);

    assert_eq!(c.pixel(Point::new(10, 10)), Some(GREEN));
    // Corner of the mask bounds, outside the disc.
    assert_eq!(c.pixel(Point::new(7, 7)), Some(Rgba8Premul::TRANSPARENT));
    // Outside the mask bounds.
    assert_eq!(c.pixel(Point::new(0, 0)), Some(RED));
    assert_eq!(c.pixel(Point::new(13, 10)), Some(RED));
}

#[test]
fn over_keeps_uncovered_pixels() {
    let mut c = red_canvas(20, 20);
    let disc = AnnulusSector::disc(Point::new(10, 10), 3.0).unwrap();
    c.fill_masked(&disc, GREEN, CompositeOp::Over);

    assert_eq!(c.pixel(Point::new(10, 10)), Some(GREEN));
    assert_eq!(c.pixel(Point::new(7, 7)), Some(RED));
}

#[test]
fn masks_hanging_off_the_canvas_are_clipped() {
    let mut c = Canvas::new(8, 8);
    let disc = AnnulusSector::disc(Point::new(0, 0), 100.0).unwrap();
    c.fill_masked(&disc, GREEN, CompositeOp::Over);
    assert_eq!(c.pixel(Point::new(7, 7)), Some(GREEN));

    let away = AnnulusSector::disc(Point::new(-50, -50), 3.0).unwrap();
    c.fill_masked(&away, RED, CompositeOp::Replace);
    assert_eq!(c.pixel(Point::new(0, 0)), Some(GREEN));
}

#[test]
fn overlay_places_icon_top_left_and_clips() {
    let white = [255, 255, 255, 255];
    let clear = [0, 0, 0, 0];
    let icon = icon_2x2([clear, white, white, white]);

    let mut c = red_canvas(4, 4);
    c.overlay(&icon, Point::new(0, 0));
    assert_eq!(c.pixel(Point::new(0, 0)), Some(RED));
    assert_eq!(c.pixel(Point::new(1, 0)), Some(Rgba8Premul::opaque(255, 255, 255)));
    assert_eq!(c.pixel(Point::new(2, 2)), Some(RED));

    let mut c = red_canvas(4, 4);
    c.overlay(&icon, Point::new(-1, -1));
    assert_eq!(c.pixel(Point::new(0, 0)), Some(Rgba8Premul::opaque(255, 255, 255)));
    assert_eq!(c.pixel(Point::new(1, 0)), Some(RED));
    assert_eq!(c.pixel(Point::new(0, 1)), Some(RED));
}

#[test]
fn overlay_blends_translucent_icon_pixels() {
    let half_black = [0, 0, 0, 128];
    let icon = icon_2x2([half_black; 4]);
    let mut c = red_canvas(2, 2);
    c.overlay(&icon, Point::new(0, 0));
    assert_eq!(c.pixel(Point::new(1, 1)).map(|p| p.to_array()), Some([127, 0, 0, 255]));
}
