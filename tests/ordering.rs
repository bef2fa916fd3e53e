use pleco::{BitMove, Board};
use tactician::search::ordering::{move_score, promote_cached, sort};

fn sorted_legal_moves(board: &Board) -> Vec<BitMove> {
    let mut moves: Vec<BitMove> = board.generate_moves().iter().copied().collect();
    sort(board, &mut moves);
    moves
}

#[test]
fn free_queen_capture_by_pawn_sorts_first() {
    // Black queen on d5, white pawn on e4: exd5 is the only capture.
    let b = Board::from_fen("k7/8/8/3q4/4P3/8/8/7K w - - 0 1").expect("valid fen");
    let moves = sorted_legal_moves(&b);
    assert!(!moves.is_empty());
    assert_eq!(moves[0].to_string(), "e4d5", "queen capture should lead the order");
}

#[test]
fn cheap_attacker_outranks_expensive_one() {
    // Both the e4 pawn and the d1 rook can take the d5 queen; the pawn
    // capture carries the better victim/attacker ratio.
    let b = Board::from_fen("k7/8/8/3q4/4P3/8/8/3R3K w - - 0 1").expect("valid fen");
    let moves = sorted_legal_moves(&b);
    assert_eq!(moves[0].to_string(), "e4d5");
    let rook_capture = moves
        .iter()
        .position(|m| m.to_string() == "d1d5")
        .expect("rook capture is legal");
    let first_quiet = moves
        .iter()
        .position(|m| !m.is_capture())
        .expect("quiet moves exist");
    assert!(
        rook_capture < first_quiet,
        "captures sort ahead of quiet moves: rook at {rook_capture}, quiet at {first_quiet}"
    );
}

#[test]
fn scores_are_strictly_ordered_after_sort() {
    let b = Board::start_pos();
    let moves = sorted_legal_moves(&b);
    for pair in moves.windows(2) {
        assert!(
            move_score(&b, pair[0]) >= move_score(&b, pair[1]),
            "sort must be descending"
        );
    }
}

#[test]
fn promote_cached_swaps_to_front() {
    let b = Board::start_pos();
    let mut moves = sorted_legal_moves(&b);
    let len = moves.len();
    let target = moves[len / 2];
    promote_cached(&mut moves, target);
    assert_eq!(moves[0], target);
    assert_eq!(moves.len(), len);
    // Unknown moves leave the order untouched.
    let snapshot = moves.clone();
    promote_cached(&mut moves, BitMove::null());
    assert_eq!(moves, snapshot);
}
