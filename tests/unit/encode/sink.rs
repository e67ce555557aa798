use super::*;

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![v, v, v, 255],
        premultiplied: true,
    }
}

const CFG: SinkConfig = SinkConfig {
    width: 1,
    height: 1,
    fps: 30,
};

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(CFG).unwrap();
    sink.push_frame(0, &frame(1)).unwrap();
    sink.push_frame(1, &frame(2)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(CFG));
    assert!(sink.ended());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, [0, 1]);
    assert_eq!(sink.frames()[1].1.data[0], 2);
}

#[test]
fn begin_resets_the_in_memory_sink() {
    let mut sink = InMemorySink::new();
    sink.begin(CFG).unwrap();
    sink.push_frame(0, &frame(1)).unwrap();
    sink.end().unwrap();
    sink.begin(CFG).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.ended());
}

#[test]
fn png_sequence_writes_numbered_files() {
    let dir = std::env::temp_dir().join(format!("toonface_seq_{}", std::process::id()));
    let mut sink = PngSequenceSink::new(&dir, "mood");
    sink.begin(CFG).unwrap();
    sink.push_frame(0, &frame(10)).unwrap();
    sink.push_frame(1, &frame(20)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written().len(), 2);
    assert!(sink.written()[1].ends_with("mood_00001.png"));
    for p in sink.written() {
        assert!(p.is_file(), "{}", p.display());
        assert_eq!(p.parent(), Some(sink.dir()));
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn png_sequence_rejects_empty_frames() {
    let mut sink = PngSequenceSink::new(std::env::temp_dir(), "x");
    let err = sink
        .begin(SinkConfig {
            width: 0,
            height: 4,
            fps: 30,
        })
        .unwrap_err();
    assert!(matches!(err, ToonError::Validation(_)));
}
