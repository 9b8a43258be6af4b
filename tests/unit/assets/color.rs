use super::*;

#[test]
fn parses_comma_separated_channels() {
    assert_eq!(parse_color("255,128,0").unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!(parse_color(" 10 , 20 , 30 ").unwrap(), Rgb8::new(10, 20, 30));
    assert_eq!(parse_color("300,-5,7").unwrap(), Rgb8::new(255, 0, 7));
    assert_eq!(parse_color("1,2,3,128").unwrap(), Rgb8::new(1, 2, 3));
}

#[test]
fn parses_named_colors_case_insensitively() {
    assert_eq!(parse_color("white").unwrap(), Rgb8::WHITE);
    assert_eq!(parse_color("Black").unwrap(), Rgb8::BLACK);
    assert_eq!(parse_color("RED").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(parse_color("rebeccapurple").unwrap(), Rgb8::new(0x66, 0x33, 0x99));
}

#[test]
fn named_table_is_sorted() {
    for pair in NAMED_COLORS.windows(2) {
        assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
    }
}

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(parse_color("#0F0").unwrap(), Rgb8::new(0, 255, 0));
    assert_eq!(parse_color("#0000ff80").unwrap(), Rgb8::new(0, 0, 255));
    assert!(parse_color("#12345").is_err());
}

#[test]
fn parses_functional_forms() {
    assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Rgb8::new(1, 2, 3));
    assert_eq!(parse_color("rgb(100%, 0%, 0%)").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(parse_color("hsl(120, 100%, 25%)").unwrap(), Rgb8::new(0, 128, 0));
}

#[test]
fn rejects_garbage() {
    assert!(parse_color("").is_err());
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("1,2").is_err());
    assert!(parse_color("a,b,c").is_err());
}

#[test]
fn resolve_substitutes_fallback() {
    assert_eq!(resolve_color("nope", Rgb8::BLACK), Rgb8::BLACK);
    assert_eq!(resolve_color("nope", Rgb8::WHITE), Rgb8::WHITE);
    assert_eq!(resolve_color("blue", Rgb8::WHITE), Rgb8::new(0, 0, 255));
}
