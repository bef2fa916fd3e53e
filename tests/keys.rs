use pleco::{Board, SQ};
use tactician::search::keys::{full_hash, keys, piece_code};

#[test]
fn piece_codes_cover_both_colors() {
    let b = Board::start_pos();
    // e2 pawn, e1 king, e8 king, an empty square.
    assert_eq!(piece_code(b.piece_at_sq(SQ(12))), Some(1));
    assert_eq!(piece_code(b.piece_at_sq(SQ(4))), Some(6));
    assert_eq!(piece_code(b.piece_at_sq(SQ(60))), Some(12));
    assert_eq!(piece_code(b.piece_at_sq(SQ(28))), None);

    for sq in 0..64u8 {
        if let Some(code) = piece_code(b.piece_at_sq(SQ(sq))) {
            assert!((1..=12).contains(&code));
        }
    }
}

#[test]
fn table_values_are_not_degenerate() {
    let table = keys();
    let first = table.key(0, 1);
    let all_same = (0..64).all(|sq| (1..=12).all(|code| table.key(sq, code) == first));
    assert!(!all_same, "key table must not collapse to a single value");
}

#[test]
fn full_hash_is_stable_under_make_unmake() {
    let mut b = Board::start_pos();
    let before = full_hash(&b);

    let mv = tactician::board::find_move(&b, "e2e4").expect("e2e4 is legal");
    b.apply_move(mv);
    let after = full_hash(&b);
    assert_ne!(before, after, "a played move must change the recomputed hash");

    b.undo_move();
    assert_eq!(full_hash(&b), before, "unmake must restore the hash exactly");
}

#[test]
fn equal_positions_hash_equally_regardless_of_path() {
    // Same knight position reached via two different move orders.
    let mut a = Board::start_pos();
    for mv in ["g1f3", "g8f6", "b1c3", "b8c6"] {
        tactician::board::apply_uci(&mut a, mv).expect("legal");
    }
    let mut b = Board::start_pos();
    for mv in ["b1c3", "b8c6", "g1f3", "g8f6"] {
        tactician::board::apply_uci(&mut b, mv).expect("legal");
    }
    assert_eq!(full_hash(&a), full_hash(&b));
    assert_eq!(a.zobrist(), b.zobrist());
}
