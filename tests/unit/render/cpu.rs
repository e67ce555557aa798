use super::*;
use crate::foundation::core::{Point, Rect};
use crate::render::surface::DrawSurface;
use crate::shapes::primitives::{circle, segment};

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas::new(w, h).unwrap()).unwrap()
}

#[test]
fn rejects_surfaces_the_rasterizer_cannot_address() {
    assert!(
        CpuSurface::new(Canvas {
            width: 0,
            height: 4
        })
        .is_err()
    );
    assert!(
        CpuSurface::new(Canvas {
            width: 70_000,
            height: 4
        })
        .is_err()
    );
    assert!(
        CpuSurface::new(Canvas {
            width: 60_000,
            height: 60_000
        })
        .is_err()
    );
}

#[test]
fn clear_fills_every_pixel() {
    let mut s = surface(8, 8);
    s.clear(Rgba8::opaque(248, 249, 250));
    let frame = s.read_back();
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 8 * 8 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, &[248, 249, 250, 255]);
    }
}

#[test]
fn transparent_clear_leaves_zeroed_pixels() {
    let mut s = surface(4, 4);
    s.clear(Rgba8::TRANSPARENT);
    assert!(s.read_back().data.iter().all(|&b| b == 0));
}

#[test]
fn later_fills_paint_over_earlier_ones() {
    let mut s = surface(32, 32);
    s.clear(Rgba8::WHITE);
    s.fill_rect(Rect::new(0.0, 0.0, 32.0, 32.0), Rgba8::opaque(255, 0, 0));
    s.fill_path(&circle(Point::new(16.0, 16.0), 8.0), Rgba8::opaque(0, 0, 255));
    let frame = s.read_back();
    assert_eq!(frame.pixel(16, 16), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 0, 0, 255]));
}

#[test]
fn stroke_covers_the_segment_only() {
    let mut s = surface(32, 32);
    s.clear(Rgba8::WHITE);
    s.stroke_path(
        &segment(Point::new(4.0, 16.0), Point::new(28.0, 16.0)),
        4.0,
        Rgba8::BLACK,
    );
    let frame = s.read_back();
    assert_eq!(frame.pixel(16, 15), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(16, 4), Some([255, 255, 255, 255]));
    // Butt caps: nothing past the end point.
    assert_eq!(frame.pixel(30, 16), Some([255, 255, 255, 255]));
}

#[test]
fn clear_discards_previous_draws() {
    let mut s = surface(16, 16);
    s.clear(Rgba8::WHITE);
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Rgba8::BLACK);
    s.clear(Rgba8::WHITE);
    assert_eq!(s.read_back().pixel(8, 8), Some([255, 255, 255, 255]));
}
