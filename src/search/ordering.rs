use pleco::{BitMove, Board, PieceType};

fn kind_index(kind: PieceType) -> u32 {
    match kind {
        PieceType::P => 0,
        PieceType::N => 1,
        PieceType::B => 2,
        PieceType::R => 3,
        PieceType::Q => 4,
        PieceType::K => 5,
        _ => 0,
    }
}

fn captured_kind(board: &Board, mv: BitMove) -> PieceType {
    // En passant lands on an empty square; the victim is always a pawn.
    if mv.is_en_passant() {
        PieceType::P
    } else {
        board.piece_at_sq(mv.get_dest()).type_of()
    }
}

/// 4-bit move-kind discriminator: 0 quiet, 1 double pawn push, 2/3 king and
/// queen castle, 4 capture, 5 en passant, 8..=11 promotions (N B R Q),
/// 12..=15 promotion-captures.
fn move_kind_code(mv: BitMove) -> u32 {
    if mv.is_promo() {
        let promo = match mv.promo_piece() {
            PieceType::N => 0,
            PieceType::B => 1,
            PieceType::R => 2,
            _ => 3,
        };
        if mv.is_capture() {
            12 + promo
        } else {
            8 + promo
        }
    } else if mv.is_en_passant() {
        5
    } else if mv.is_capture() {
        4
    } else if mv.is_king_castle() {
        2
    } else if mv.is_queen_castle() {
        3
    } else if mv.is_double_push().0 {
        1
    } else {
        0
    }
}

/// Composite ordering score. The leading term prefers captures of valuable
/// victims by cheap attackers (MVV-LVA over kind indices); the trailing
/// fields embed a componentwise tie-break on mover kind, move kind,
/// destination, and origin.
///
/// The capture ratio is a genuine fraction, so the score stays in `f64` and
/// comparisons go through `total_cmp`.
pub fn move_score(board: &Board, mv: BitMove) -> f64 {
    let mover = kind_index(board.piece_at_sq(mv.get_src()).type_of());
    let mut score = if mv.is_capture() {
        let captured = kind_index(captured_kind(board, mv));
        (1.0 + captured as f64) / (1.0 + mover as f64)
    } else {
        0.0
    };
    score = score * 6.0 + mover as f64;
    score = score * 16.0 + move_kind_code(mv) as f64;
    score = score * 64.0 + mv.get_dest().0 as f64;
    score = score * 64.0 + mv.get_src().0 as f64;
    score
}

/// Stable descending sort by `move_score`; equal scores keep their
/// generated order.
pub fn sort(board: &Board, moves: &mut [BitMove]) {
    moves.sort_by(|a, b| move_score(board, *b).total_cmp(&move_score(board, *a)));
}

/// Swap the move matching the cached best move to the front, overriding the
/// heuristic order for that one move. Identity is `BitMove` equality.
pub fn promote_cached(moves: &mut [BitMove], cached: BitMove) {
    if let Some(pos) = moves.iter().position(|&m| m == cached) {
        moves.swap(0, pos);
    }
}
