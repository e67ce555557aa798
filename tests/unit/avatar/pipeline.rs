use super::*;
use crate::avatar::options::{EyeStyle, HairStyle};
use crate::foundation::color::Rgb8;
use crate::render::recording::{DrawKind, RecordingSurface};

fn record(opts: &AvatarOptions) -> RecordingSurface {
    let mut s = RecordingSurface::new(Canvas::AVATAR);
    assert_eq!(render_avatar(Some(&mut s), opts), RenderStatus::Drawn);
    s
}

#[test]
fn stages_run_in_z_order() {
    let opts = AvatarOptions {
        accessory: Accessory::Glasses,
        blush_intensity: 30,
        ..AvatarOptions::default()
    };
    assert_eq!(
        record(&opts).stages(),
        [
            Stage::Clear,
            Stage::Background,
            Stage::HairBack,
            Stage::Head,
            Stage::HairFront,
            Stage::Eyes,
            Stage::Mouth,
            Stage::Blush,
            Stage::Accessory,
        ]
    );
}

#[test]
fn optional_stages_are_skipped() {
    let s = record(&AvatarOptions::default());
    assert!(!s.stages().contains(&Stage::Blush));
    assert!(!s.stages().contains(&Stage::Accessory));
    assert_eq!(s.commands_in(Stage::Accessory).count(), 0);
    assert_eq!(s.stages().last(), Some(&Stage::Mouth));
}

#[test]
fn background_and_head_colors() {
    let opts = AvatarOptions {
        skin_tone: Rgb8::new(0x8D, 0x55, 0x24),
        ..AvatarOptions::default()
    };
    let s = record(&opts);
    let bg: Vec<_> = s.commands_in(Stage::Background).collect();
    assert_eq!(bg.len(), 1);
    assert_eq!(bg[0].paint, BACKGROUND);
    assert_eq!(bg[0].bounds().unwrap(), Canvas::AVATAR.rect());

    let head: Vec<_> = s.commands_in(Stage::Head).collect();
    assert_eq!(head.len(), 1);
    assert_eq!(head[0].paint, Rgba8::opaque(0x8D, 0x55, 0x24));
    let b = head[0].bounds().unwrap();
    assert!((b.width() - 280.0).abs() < 0.5);
}

#[test]
fn first_command_clears_to_transparent() {
    let s = record(&AvatarOptions::default());
    assert_eq!(s.commands()[0].kind, DrawKind::Clear(Rgba8::TRANSPARENT));
}

#[test]
fn rerendering_replays_every_stage() {
    let opts = AvatarOptions {
        hair_style: HairStyle::Twintails,
        eye_style: EyeStyle::Wide,
        ..AvatarOptions::default()
    };
    let mut s = RecordingSurface::new(Canvas::AVATAR);
    render_avatar(Some(&mut s), &opts);
    let first = s.commands().to_vec();
    render_avatar(Some(&mut s), &opts);
    assert_eq!(s.commands(), first.as_slice());
}

#[test]
fn missing_surface_is_a_no_op() {
    assert_eq!(
        render_avatar(None, &AvatarOptions::default()),
        RenderStatus::SkippedNoSurface
    );
}

#[test]
fn undrawable_surface_is_skipped() {
    let mut s = RecordingSurface::new(Canvas {
        width: 0,
        height: 400,
    });
    assert_eq!(
        render_avatar(Some(&mut s), &AvatarOptions::default()),
        RenderStatus::SkippedNoSurface
    );
    assert!(s.commands().is_empty());
}

#[test]
fn renderer_without_surface_returns_nothing() {
    let mut r = AvatarRenderer::new(Canvas {
        width: 70_000,
        height: 10,
    });
    assert!(!r.has_surface());
    assert!(r.render(&AvatarOptions::default()).is_none());
}

#[test]
fn renderer_frames_match_canvas() {
    let mut r = AvatarRenderer::new(Canvas {
        width: 64,
        height: 48,
    });
    let frame = r.render(&AvatarOptions::default()).unwrap();
    assert_eq!((frame.width, frame.height), (64, 48));
    assert_eq!(frame.data.len(), 64 * 48 * 4);
    assert!(frame.premultiplied);
}
