use std::path::PathBuf;

use super::*;
use crate::foundation::core::Rgba8Premul;

fn test_root(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_generate").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn template_formats_plain_and_padded_indices() {
    let t = FilenameTemplate::parse("boot{}.jpg").unwrap();
    assert!(t.has_placeholder());
    assert_eq!(t.format(7), "boot7.jpg");
    assert_eq!(t.format(45), "boot45.jpg");

    let t = FilenameTemplate::parse("music_update/{:02}.png").unwrap();
    assert_eq!(t.format(3), "music_update/03.png");
    assert_eq!(t.format(11), "music_update/11.png");
}

#[test]
fn template_without_placeholder_is_verbatim() {
    let t = FilenameTemplate::parse("adjust/volume_scale_focus.png").unwrap();
    assert!(!t.has_placeholder());
    assert_eq!(t.format(9), "adjust/volume_scale_focus.png");
}

#[test]
fn template_rejects_malformed_placeholders() {
    for bad in ["a{x}.png", "a{}{}.png", "a{.png", "a{:2}.png"] {
        let err = FilenameTemplate::parse(bad).unwrap_err();
        assert!(matches!(err, GenError::Validation(_)), "{bad}");
    }
}

#[test]
fn single_file_mode_uses_the_template_verbatim() {
    let spec = FrameSpec::single(4, 4, "x_{}.png");
    let t = FilenameTemplate::parse(&spec.template).unwrap();
    assert_eq!(spec.file_name(&t, 0), "x_{}.png");

    let spec = FrameSpec::frames(4, 4, "x_{}.png", 2, 3);
    assert_eq!(spec.file_name(&t, 3), "x_3.png");
}

#[test]
fn render_frames_writes_one_png_per_index() {
    let root = test_root("multi");
    let spec = FrameSpec::frames(6, 4, "seq/f{:02}.png", 1, 3);

    let mut seen = Vec::new();
    let written = render_frames(&spec, &root, |ctx, canvas| {
        seen.push(*ctx);
        canvas.set_pixel(Point::new(ctx.index as i32, 0), Rgba8Premul::opaque(9, 9, 9));
        Ok(())
    })
    .unwrap();

    assert_eq!(
        written,
        vec![
            root.join("seq/f01.png"),
            root.join("seq/f02.png"),
            root.join("seq/f03.png"),
        ]
    );
    assert_eq!(seen.iter().map(|c| c.index).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(seen.iter().all(|c| c.center == Point::new(3, 2)));
    assert!(seen.iter().all(|c| c.bounds == Rect::from_size(6, 4)));

    let img = image::open(&written[1]).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (6, 4));
    assert_eq!(img.get_pixel(2, 0).0, [9, 9, 9, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
}

#[test]
fn render_frames_single_file_and_jpeg() {
    let root = test_root("single_jpeg");
    let spec = FrameSpec::single(8, 8, "deep/dir/one.jpg").with_jpeg_quality(25);
    let written = render_frames(&spec, &root, |_, _| Ok(())).unwrap();

    assert_eq!(written, vec![root.join("deep/dir/one.jpg")]);
    let bytes = std::fs::read(&written[0]).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn render_frames_rejects_bad_specs() {
    let root = test_root("bad_specs");
    let no_placeholder = FrameSpec::frames(2, 2, "same.png", 0, 2);
    assert!(matches!(
        render_frames(&no_placeholder, &root, |_, _| Ok(())),
        Err(GenError::Validation(_))
    ));

    let inverted = FrameSpec::frames(2, 2, "f{}.png", 3, 1);
    assert!(matches!(
        render_frames(&inverted, &root, |_, _| Ok(())),
        Err(GenError::Validation(_))
    ));
}

#[test]
fn draw_failure_aborts_and_keeps_earlier_files() {
    let root = test_root("abort");
    let spec = FrameSpec::frames(2, 2, "f{}.png", 0, 3);
    let err = render_frames(&spec, &root, |ctx, _| {
        if ctx.index == 2 {
            return Err(GenError::validation("boom"));
        }
        Ok(())
    })
    .unwrap_err();

    assert!(err.to_string().contains("boom"));
    assert!(root.join("f0.png").is_file());
    assert!(root.join("f1.png").is_file());
    assert!(!root.join("f2.png").exists());
    assert!(!root.join("f3.png").exists());
}
