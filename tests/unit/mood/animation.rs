use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::ToonError;

const CANVAS: Canvas = Canvas {
    width: 64,
    height: 32,
};

struct CancelAfter {
    inner: InMemorySink,
    token: CancelToken,
    after: usize,
}

impl FrameSink for CancelAfter {
    fn begin(&mut self, cfg: SinkConfig) -> ToonResult<()> {
        self.inner.begin(cfg)
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ToonResult<()> {
        self.inner.push_frame(idx, frame)?;
        if self.inner.frames().len() == self.after {
            self.token.cancel();
        }
        Ok(())
    }

    fn end(&mut self) -> ToonResult<()> {
        self.inner.end()
    }
}

struct FailingSink;

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> ToonResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: u64, _frame: &FrameRGBA) -> ToonResult<()> {
        Err(ToonError::render("disk full"))
    }

    fn end(&mut self) -> ToonResult<()> {
        Ok(())
    }
}

#[test]
fn runs_the_requested_number_of_frames() {
    let mut anim = AnimationLoop::new(Mood::Happy, CANVAS, 1).unwrap().with_fps(24);
    let mut sink = InMemorySink::new();
    let stats = anim.run(5, &mut sink, &CancelToken::new()).unwrap();
    assert_eq!(
        stats,
        LoopStats {
            frames_requested: 5,
            frames_rendered: 5,
            cancelled: false,
        }
    );
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 64,
            height: 32,
            fps: 24,
        })
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, [0, 1, 2, 3, 4]);
    assert!(sink.ended());
}

#[test]
fn frames_change_as_particles_move() {
    let mut anim = AnimationLoop::new(Mood::Angry, CANVAS, 4).unwrap();
    let a = anim.next_frame();
    let b = anim.next_frame();
    assert_eq!(a.data.len(), 64 * 32 * 4);
    assert_ne!(a.data, b.data);
}

#[test]
fn background_stays_transparent() {
    let canvas = Canvas {
        width: 200,
        height: 100,
    };
    let mut anim = AnimationLoop::new(Mood::Sad, canvas, 8).unwrap();
    let frame = anim.next_frame();
    let covered = frame.data.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(covered > 0);
    assert!(covered < 200 * 100 / 2);
}

#[test]
fn same_seed_same_frames() {
    let mut a = AnimationLoop::new(Mood::Surprised, CANVAS, 42).unwrap();
    let mut b = AnimationLoop::new(Mood::Surprised, CANVAS, 42).unwrap();
    for _ in 0..3 {
        assert_eq!(a.next_frame(), b.next_frame());
    }
}

#[test]
fn cancelled_token_stops_before_the_first_frame() {
    let mut anim = AnimationLoop::new(Mood::Neutral, CANVAS, 1).unwrap();
    let token = CancelToken::new();
    token.cancel();
    let mut sink = InMemorySink::new();
    let stats = anim.run(10, &mut sink, &token).unwrap();
    assert!(stats.cancelled);
    assert_eq!(stats.frames_rendered, 0);
    assert!(sink.frames().is_empty());
    assert!(sink.ended());
}

#[test]
fn cancelling_mid_run_keeps_delivered_frames() {
    let mut anim = AnimationLoop::new(Mood::Happy, CANVAS, 1).unwrap();
    let token = CancelToken::new();
    let mut sink = CancelAfter {
        inner: InMemorySink::new(),
        token: token.clone(),
        after: 3,
    };
    let stats = anim.run(100, &mut sink, &token).unwrap();
    assert_eq!(stats.frames_rendered, 3);
    assert!(stats.cancelled);
    assert_eq!(sink.inner.frames().len(), 3);
}

#[test]
fn sink_errors_propagate() {
    let mut anim = AnimationLoop::new(Mood::Happy, CANVAS, 1).unwrap();
    let err = anim
        .run(3, &mut FailingSink, &CancelToken::new())
        .unwrap_err();
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn set_mood_respawns_particles() {
    let mut anim = AnimationLoop::new(Mood::Happy, CANVAS, 1).unwrap();
    anim.set_mood(Mood::Angry);
    assert_eq!(anim.field().mood(), Mood::Angry);
    assert_eq!(anim.field().particles().len(), 70);
}

#[test]
fn oversized_canvas_is_an_error() {
    let err = AnimationLoop::new(
        Mood::Happy,
        Canvas {
            width: 100_000,
            height: 1,
        },
        0,
    )
    .unwrap_err();
    assert!(matches!(err, ToonError::Render(_)));
}
