use pleco::{Board, PieceType, Player};

/// Centipawn values indexed by piece kind (P, N, B, R, Q, K). The king value
/// never enters the material sum; checkmate is not represented via material.
const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 20000];

/// Half a pawn, granted to a side holding two or more bishops.
pub const BISHOP_PAIR_BONUS: i32 = PIECE_VALUES[0] / 2;

const KINDS: [PieceType; 6] = [
    PieceType::P,
    PieceType::N,
    PieceType::B,
    PieceType::R,
    PieceType::Q,
    PieceType::K,
];

// Tables are written rank-8 first, so White mirrors with `sq ^ 56` while
// Black indexes directly. Only the middle-game king table exists; there is
// no end-game king table regardless of phase.
#[rustfmt::skip]
const PIECE_SQUARE_TABLES: [[i32; 64]; 6] = [
    // pawn
    [
         0,  0,  0,  0,  0,  0,  0,  0,
        50, 50, 50, 50, 50, 50, 50, 50,
        10, 10, 20, 30, 30, 20, 10, 10,
         5,  5, 10, 25, 25, 10,  5,  5,
         0,  0,  0, 20, 20,  0,  0,  0,
         5, -5,-10,  0,  0,-10, -5,  5,
         5, 10, 10,-20,-20, 10, 10,  5,
         0,  0,  0,  0,  0,  0,  0,  0,
    ],
    // knight
    [
        -50,-40,-30,-30,-30,-30,-40,-50,
        -40,-20,  0,  0,  0,  0,-20,-40,
        -30,  0, 10, 15, 15, 10,  0,-30,
        -30,  5, 15, 20, 20, 15,  5,-30,
        -30,  0, 15, 20, 20, 15,  0,-30,
        -30,  5, 10, 15, 15, 10,  5,-30,
        -40,-20,  0,  5,  5,  0,-20,-40,
        -50,-40,-30,-30,-30,-30,-40,-50,
    ],
    // bishop
    [
        -20,-10,-10,-10,-10,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5, 10, 10,  5,  0,-10,
        -10,  5,  5, 10, 10,  5,  5,-10,
        -10,  0, 10, 10, 10, 10,  0,-10,
        -10, 10, 10, 10, 10, 10, 10,-10,
        -10,  5,  0,  0,  0,  0,  5,-10,
        -20,-10,-10,-10,-10,-10,-10,-20,
    ],
    // rook
    [
         0,  0,  0,  0,  0,  0,  0,  0,
         5, 10, 10, 10, 10, 10, 10,  5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
        -5,  0,  0,  0,  0,  0,  0, -5,
         0,  0,  0,  5,  5,  0,  0,  0,
    ],
    // queen
    [
        -20,-10,-10, -5, -5,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5,  5,  5,  5,  0,-10,
         -5,  0,  5,  5,  5,  5,  0, -5,
          0,  0,  5,  5,  5,  5,  0, -5,
        -10,  5,  5,  5,  5,  5,  0,-10,
        -10,  0,  5,  0,  0,  0,  0,-10,
        -20,-10,-10, -5, -5,-10,-10,-20,
    ],
    // king, middle game
    [
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -20,-30,-30,-40,-40,-30,-30,-20,
        -10,-20,-20,-20,-20,-20,-20,-10,
         20, 20,  0,  0,  0,  0, 20, 20,
         20, 30, 10,  0,  0, 10, 30, 20,
    ],
];

pub fn piece_value(kind: PieceType) -> i32 {
    match kind {
        PieceType::P => PIECE_VALUES[0],
        PieceType::N => PIECE_VALUES[1],
        PieceType::B => PIECE_VALUES[2],
        PieceType::R => PIECE_VALUES[3],
        PieceType::Q => PIECE_VALUES[4],
        PieceType::K => PIECE_VALUES[5],
        _ => 0,
    }
}

/// Material in centipawns for one side: piece counts times piece values,
/// king excluded, plus the bishop-pair bonus when bishop count > 1.
pub fn material_value(board: &Board, side: Player) -> i32 {
    let mut value = 0;
    for &kind in KINDS.iter().take(5) {
        value += board.count_piece(side, kind) as i32 * piece_value(kind);
    }
    if board.count_piece(side, PieceType::B) > 1 {
        value += BISHOP_PAIR_BONUS;
    }
    value
}

/// Piece-square contribution for one side, king included.
pub fn placement_value(board: &Board, side: Player) -> i32 {
    let mut value = 0;
    for (kind_ix, &kind) in KINDS.iter().enumerate() {
        let mut bits = board.piece_bb(side, kind).0;
        while bits != 0 {
            let sq = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            let ix = if side == Player::White { sq ^ 56 } else { sq };
            value += PIECE_SQUARE_TABLES[kind_ix][ix];
        }
    }
    value
}

/// Static score from White's perspective: material difference plus
/// piece-square difference. Pure function of the board, no mobility or
/// king-safety terms.
pub fn evaluate(board: &Board) -> i32 {
    material_value(board, Player::White) - material_value(board, Player::Black)
        + placement_value(board, Player::White)
        - placement_value(board, Player::Black)
}
