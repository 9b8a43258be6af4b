use super::*;
use crate::foundation::core::FrameSize;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pathmotion_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn file_names_are_zero_padded() {
    let sink = PngSequenceSink::new("out");
    assert_eq!(
        sink.frame_path(FrameIndex(7)),
        Path::new("out").join("frame_0007.png")
    );
    assert_eq!(
        sink.mask_path(FrameIndex(12)),
        Path::new("out").join("mask_0012.png")
    );
}

#[test]
fn push_before_begin_is_rejected() {
    let mut sink = PngSequenceSink::new(temp_dir("png_no_begin"));
    let f = FrameRgb {
        width: 1,
        height: 1,
        data: vec![0.0; 3],
    };
    assert!(sink.push_frame(FrameIndex(0), &f, &f.red_mask()).is_err());
}

#[test]
fn writes_rgb_frame_and_gray_mask() {
    let dir = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        frame: FrameSize::new(2, 1),
        frame_count: 1,
    })
    .unwrap();

    let f = FrameRgb {
        width: 2,
        height: 1,
        data: vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    };
    sink.push_frame(FrameIndex(0), &f, &f.red_mask()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written(), 1);

    let rgb = image::open(sink.frame_path(FrameIndex(0))).unwrap().to_rgb8();
    assert_eq!(rgb.dimensions(), (2, 1));
    assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 255]);

    let mask = image::open(sink.mask_path(FrameIndex(0))).unwrap();
    assert_eq!(mask.color(), image::ColorType::L8);
    assert_eq!(mask.to_luma8().into_raw(), vec![255, 0]);

    let _ = std::fs::remove_dir_all(&dir);
}
