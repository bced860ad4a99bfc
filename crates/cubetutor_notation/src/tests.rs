use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

#[test]
fn test_parse_tokens() {
    let r2: Move = "R2".parse().unwrap();
    assert_eq!(r2, Move::new(MoveFamily::R, Suffix::Double));
    assert_eq!(r2.axis(), Axis::X);
    assert_eq!(r2.grip(), Grip::Face(Sign::Pos));
    assert_eq!(r2.quarter_turns(), -2);

    let x_prime: Move = "x'".parse().unwrap();
    assert_eq!(x_prime.grip(), Grip::WholeCube);
    assert_eq!(
        x_prime.quarter_turns(),
        -MoveFamily::X.canonical_quarter_turns(),
    );

    let m: Move = "M".parse().unwrap();
    assert_eq!(m.axis(), Axis::X);
    assert_eq!(m.grip(), Grip::Slice);
    // M follows L, against R.
    assert_eq!(
        m.quarter_turns(),
        MoveFamily::L.canonical_quarter_turns(),
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Move>(), Err(InvalidMoveToken::Empty));
    assert_eq!("Q".parse::<Move>(), Err(InvalidMoveToken::UnknownFamily('Q')));
    // Whole-cube rotations are lowercase only.
    assert_eq!("X".parse::<Move>(), Err(InvalidMoveToken::UnknownFamily('X')));
    assert_eq!(
        "R2'".parse::<Move>(),
        Err(InvalidMoveToken::BadSuffix("2'".to_owned())),
    );
    assert_eq!(
        "Rw".parse::<Move>(),
        Err(InvalidMoveToken::BadSuffix("w".to_owned())),
    );
}

#[test]
fn test_inverse() {
    let parse = |s: &str| s.parse::<Move>().unwrap();
    assert_eq!(parse("R").inverse(), parse("R'"));
    assert_eq!(parse("R'").inverse(), parse("R"));
    assert_eq!(parse("U2").inverse(), parse("U2"));
    assert_eq!(parse("z'").inverse(), parse("z"));
}

#[test]
fn test_sequence_roundtrip() {
    let s = "R U R' U' M2 x y' S E2 z";
    let moves: Vec<Move> = parse_moves(s).collect::<Result<_, _>>().unwrap();
    assert_eq!(moves.len(), 10);
    assert_eq!(format_moves(moves), s);
}

#[test]
fn test_sequence_with_bad_token() {
    let results: Vec<_> = parse_moves("R Q U'").collect();
    assert_eq!(results[0], Ok(Move::new(MoveFamily::R, Suffix::Quarter)));
    assert_eq!(results[1], Err(InvalidMoveToken::UnknownFamily('Q')));
    assert_eq!(results[2], Ok(Move::new(MoveFamily::U, Suffix::Prime)));
}

proptest! {
    #[test]
    fn proptest_token_roundtrip(mv: Move) {
        prop_assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
    }

    #[test]
    fn proptest_inverse_involution(mv: Move) {
        prop_assert_eq!(mv.inverse().inverse(), mv);
        // The two turns sum to a whole rotation.
        let total = i32::from(mv.quarter_turns()) + i32::from(mv.inverse().quarter_turns());
        prop_assert_eq!(total.rem_euclid(4), 0);
    }
}
