use super::*;

fn frame(v: f32) -> FrameRgb {
    FrameRgb {
        width: 1,
        height: 1,
        data: vec![v, 0.0, 0.0],
    }
}

#[test]
fn in_memory_sink_collects_frames_and_masks_in_order() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        frame: FrameSize::new(1, 1),
        frame_count: 2,
    };
    sink.begin(cfg).unwrap();
    for (i, v) in [0.25f32, 0.75].into_iter().enumerate() {
        let f = frame(v);
        sink.push_frame(FrameIndex(i as u32), &f, &f.red_mask()).unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert!(sink.is_finished());
    assert_eq!(sink.frames(), &[frame(0.25), frame(0.75)]);
    assert_eq!(sink.masks()[1].data, vec![0.75]);

    let (frames, masks) = sink.into_parts();
    assert_eq!(frames.len(), 2);
    assert_eq!(masks.len(), 2);
}

#[test]
fn begin_resets_previous_capture() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        frame: FrameSize::new(1, 1),
        frame_count: 1,
    };
    sink.begin(cfg).unwrap();
    let f = frame(1.0);
    sink.push_frame(FrameIndex(0), &f, &f.red_mask()).unwrap();
    sink.end().unwrap();

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(sink.masks().is_empty());
    assert!(!sink.is_finished());
}
