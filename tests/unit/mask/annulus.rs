use std::f64::consts::PI;

use super::*;

const C: Point = Point::new(10, 10);

fn deg(d: f64) -> f64 {
    d.to_radians()
}

#[test]
fn disc_covers_its_center() {
    let m = AnnulusSector::disc(C, 5.0).unwrap();
    assert!(m.covers(10, 10));
    assert_eq!(m.coverage(10, 10), OPAQUE);
}

#[test]
fn beyond_outer_radius_is_transparent_at_any_angle() {
    let m = AnnulusSector::new(C, 0.0, 5.0, deg(-30.0), deg(200.0)).unwrap();
    for (x, y) in [(16, 10), (4, 10), (10, 16), (10, 4), (14, 14), (6, 6), (15, 12)] {
        assert!(!m.covers(x, y), "({x}, {y}) should be outside");
        assert_eq!(m.coverage(x, y), TRANSPARENT);
    }
}

#[test]
fn outer_radius_is_inclusive() {
    let m = AnnulusSector::disc(C, 5.0).unwrap();
    assert!(m.covers(15, 10));
    assert!(m.covers(10, 5));
    assert!(!m.covers(15, 11));
}

#[test]
fn equal_angles_select_the_full_ring() {
    for a in [0.0, 1.0, -3.0, PI, -PI] {
        let m = AnnulusSector::new(C, 3.0, 6.0, a, a).unwrap();
        let b = m.bounds();
        for y in b.min.y..b.max.y {
            for x in b.min.x..b.max.x {
                let (dx, dy) = (f64::from(x - C.x), f64::from(y - C.y));
                let rr = dx * dx + dy * dy;
                let in_band = (9.0..=36.0).contains(&rr);
                assert_eq!(m.covers(x, y), in_band, "angle {a} at ({x}, {y})");
            }
        }
    }
}

#[test]
fn inner_radius_cuts_a_hole() {
    let m = AnnulusSector::ring(C, 3.0, 6.0).unwrap();
    assert!(!m.covers(10, 10));
    assert!(!m.covers(12, 10));
    assert!(m.covers(13, 10));
}

#[test]
fn sector_uses_screen_up_angles() {
    // First quadrant: right and up on screen.
    let m = AnnulusSector::new(C, 0.0, 6.0, 0.0, PI / 2.0).unwrap();
    assert!(m.covers(13, 7));
    assert!(!m.covers(13, 13));
    assert!(!m.covers(7, 7));
}

#[test]
fn sector_wraps_through_the_branch_cut() {
    let m = AnnulusSector::new(C, 0.0, 6.0, deg(170.0), deg(-170.0)).unwrap();
    // 180 degrees: straight left of the center.
    assert!(m.covers(5, 10));
    // 0 degrees: straight right.
    assert!(!m.covers(15, 10));
    // 90 degrees: straight up.
    assert!(!m.covers(10, 5));
}

#[test]
fn bounds_are_a_square_of_twice_the_ceiled_radius() {
    for (outer, half) in [(5.0, 5), (5.5, 6), (0.2, 1), (0.0, 0), (59.0, 59)] {
        let m = AnnulusSector::new(C, 0.0, outer, 0.0, 0.0).unwrap();
        let b = m.bounds();
        assert_eq!(b.width(), 2 * half);
        assert_eq!(b.height(), 2 * half);
        assert_eq!(b.min, Point::new(C.x - half, C.y - half));
        assert_eq!(b.max, Point::new(C.x + half, C.y + half));
    }
}

#[test]
fn inner_above_outer_is_rejected_with_both_values() {
    let err = AnnulusSector::new(C, 7.5, 3.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, GenError::Validation(_)));
    let msg = err.to_string();
    assert!(msg.contains("7.5"));
    assert!(msg.contains('3'));

    let ok = AnnulusSector::disc(C, 4.0).unwrap();
    assert!(ok.with_inner_radius(4.0).is_ok());
    assert!(ok.with_inner_radius(4.5).is_err());
}

#[test]
fn with_angles_keeps_radii() {
    let m = AnnulusSector::ring(C, 2.0, 4.0)
        .unwrap()
        .with_angles(0.0, 1.0);
    assert_eq!(m.inner_radius(), 2.0);
    assert_eq!(m.outer_radius(), 4.0);
    assert_eq!(m.center(), C);
    assert!(!m.covers(7, 10));
}
