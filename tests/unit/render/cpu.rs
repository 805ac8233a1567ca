use super::*;
use crate::foundation::core::Rect;

fn pixel(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

#[test]
fn rejects_empty_and_oversized_canvases() {
    assert!(matches!(CpuCanvas::new(0, 10), Err(ArtError::Render(_))));
    assert!(matches!(CpuCanvas::new(10, 0), Err(ArtError::Render(_))));
    assert!(matches!(CpuCanvas::new(70_000, 10), Err(ArtError::Render(_))));
}

#[test]
fn clear_fills_every_pixel() {
    let mut c = CpuCanvas::new(16, 8).unwrap();
    c.clear(Color::rgba(1.0, 0.0, 0.0, 1.0));
    let data = c.to_rgba8();
    assert_eq!(data.len(), 16 * 8 * 4);
    for px in data.chunks_exact(4) {
        assert_eq!(px, [255, 0, 0, 255]);
    }
}

#[test]
fn global_alpha_scales_paint() {
    let mut c = CpuCanvas::new(8, 8).unwrap();
    c.set_global_alpha(0.5);
    c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Color::WHITE);
    let px = pixel(&c.to_rgba8(), 8, 4, 4);
    assert!((i32::from(px[3]) - 128).abs() <= 2, "{px:?}");
}

#[test]
fn translate_moves_subsequent_draws() {
    let mut c = CpuCanvas::new(20, 20).unwrap();
    c.save();
    c.translate(Vec2::new(10.0, 10.0));
    c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
    c.restore();
    assert_eq!(c.state_depth(), 0);

    let data = c.to_rgba8();
    assert_eq!(pixel(&data, 20, 15, 15)[3], 255);
    assert_eq!(pixel(&data, 20, 5, 5)[3], 0);
}

#[test]
fn multiply_over_white_keeps_source_color() {
    let mut c = CpuCanvas::new(8, 8).unwrap();
    c.clear(Color::WHITE);
    c.set_blend_mode(BlendMode::Multiply);
    c.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Color::rgba(0.0, 0.0, 1.0, 1.0));
    let px = pixel(&c.to_rgba8(), 8, 4, 4);
    assert!(px[0] <= 2 && px[1] <= 2 && px[2] >= 253, "{px:?}");
}

#[test]
fn encode_png_writes_a_decodable_file() {
    let dir = std::path::PathBuf::from("target").join("cpu_canvas_png");
    let path = dir.join("solid.png");
    let _ = std::fs::remove_file(&path);

    let mut c = CpuCanvas::new(12, 6).unwrap();
    c.clear(Color::rgba(0.0, 1.0, 0.0, 1.0));
    c.encode_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (12, 6));
    assert_eq!(img.get_pixel(3, 3).0, [0, 255, 0, 255]);
}

#[test]
fn translucent_rotated_edges_stay_opaque_over_a_cleared_base() {
    for alpha in [0.05, 0.3, 1.0] {
        let mut c = CpuCanvas::new(32, 32).unwrap();
        c.clear(Color::rgba(0.94, 0.92, 0.88, 1.0));
        assert!(c.has_opaque_base());

        c.save();
        c.set_global_alpha(alpha);
        c.translate(Vec2::new(16.0, 16.0));
        c.rotate(0.4);
        c.fill_rect(Rect::new(-9.3, -5.7, 9.3, 5.7), Color::rgba(0.2, 0.4, 0.9, 1.0));
        c.restore();

        let data = c.to_rgba8();
        assert!(data.chunks_exact(4).all(|px| px[3] == 255), "alpha {alpha}");
    }
}

#[test]
fn uncleared_canvas_keeps_transparent_background() {
    let mut c = CpuCanvas::new(8, 8).unwrap();
    assert!(!c.has_opaque_base());
    c.fill_rect(Rect::new(0.0, 0.0, 4.0, 8.0), Color::WHITE);
    let data = c.to_rgba8();
    assert_eq!(pixel(&data, 8, 6, 4)[3], 0);
}
