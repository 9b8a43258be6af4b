use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MotionError::render("x").to_string().contains("render error:"));
    assert!(
        MotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_and_other_preserve_source() {
    let err = MotionError::from(std::io::Error::other("disk full"));
    assert!(err.to_string().contains("disk full"));

    let err = MotionError::Other(anyhow::Error::new(std::io::Error::other("boom")));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = MotionError::from(parse);
    assert!(matches!(err, MotionError::Serde(_)));
}
