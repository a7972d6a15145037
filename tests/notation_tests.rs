use figscore::elements::{find_basic, is_position_marker, Position};
use figscore::scorer::notation::{analyze_symbol, split_routine, validate_symbol};
use rstest::rstest;
use std::str::FromStr;

#[rstest]
#[case("-o", false, 1, 0, Some(Position::Tuck))]
#[case("-2o", false, 2, 2, Some(Position::Tuck))]
#[case("42/", false, 2, 6, Some(Position::Straight))]
#[case(".--<", true, 2, 0, Some(Position::Pike))]
#[case("2--", false, 3, 2, None)]
#[case(".1", true, 1, 1, None)]
#[case("", false, 0, 0, None)]
fn test_analyze_symbol(
    #[case] symbol: &str,
    #[case] is_front: bool,
    #[case] rotations: usize,
    #[case] half_twists: u32,
    #[case] trailing: Option<Position>,
) {
    let shape = analyze_symbol(symbol);
    assert_eq!(shape.is_front, is_front);
    assert_eq!(shape.rotations, rotations);
    assert_eq!(shape.half_twists, half_twists);
    assert_eq!(shape.trailing, trailing);
}

#[test]
fn test_interior_markers_are_not_rotations() {
    let shape = analyze_symbol("-o-<-/");
    assert_eq!(shape.rotations, 3);
    assert_eq!(shape.trailing, Some(Position::Straight));
}

#[test]
fn test_only_leading_dot_is_front() {
    // A dot elsewhere is just another body character.
    let shape = analyze_symbol("-.-");
    assert!(!shape.is_front);
    assert_eq!(shape.rotations, 3);
}

#[test]
fn test_position_markers_round_trip() {
    for (marker, position) in [('o', Position::Tuck), ('<', Position::Pike), ('/', Position::Straight)] {
        assert_eq!(Position::from_marker(marker), Some(position));
        assert_eq!(position.marker(), marker);
        assert_eq!(position.to_string(), marker.to_string());
        assert_eq!(Position::from_str(&marker.to_string()).unwrap(), position);
        assert!(is_position_marker(marker));
    }
    assert_eq!(Position::from_marker('>'), None);
    assert!(!is_position_marker('-'));
}

#[test]
fn test_find_basic_exact_only() {
    assert_eq!(find_basic("(").map(|b| b.points), Some(0.1));
    assert!(find_basic("( ").is_none());
    assert!(find_basic("x").is_none());
    assert!(find_basic("").is_none());
}

#[test]
fn test_split_routine_drops_blanks() {
    let tokens: Vec<&str> = split_routine("  ( ^   -/ ").collect();
    assert_eq!(tokens, vec!["(", "^", "-/"]);
    assert_eq!(split_routine("").count(), 0);
}

#[rstest]
#[case("-")]
#[case(".-/")]
#[case("22/")]
#[case("-o-<")]
#[case("!")]
fn test_validate_accepts(#[case] symbol: &str) {
    assert!(validate_symbol(symbol).is_ok());
}

#[rstest]
#[case("", "empty")]
#[case("-x", "unexpected character 'x'")]
#[case("-.", "must lead")]
#[case(".", "no rotation")]
#[case("<", "no rotation")]
fn test_validate_reasons(#[case] symbol: &str, #[case] reason_fragment: &str) {
    let err = validate_symbol(symbol).unwrap_err();
    assert!(
        err.to_string().contains(reason_fragment),
        "Error '{}' does not mention '{}'",
        err,
        reason_fragment
    );
}
