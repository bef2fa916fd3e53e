use pleco::{Board, Piece, PieceType, Player, SQ};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

pub const SQUARES: usize = 64;
pub const PIECE_CODES: usize = 12;

/// One pseudo-random 32-bit value per (square, piece-identity) pair.
///
/// Generated once per process and immutable afterwards. The table is seeded
/// from entropy, so two runs produce different tables and no hash derived
/// from it is portable across processes.
pub struct HashKeys {
    table: [[u32; PIECE_CODES]; SQUARES],
}

static KEYS: OnceLock<HashKeys> = OnceLock::new();

impl HashKeys {
    fn generate() -> Self {
        let mut rng = SmallRng::from_entropy();
        let mut table = [[0u32; PIECE_CODES]; SQUARES];
        for square in table.iter_mut() {
            for value in square.iter_mut() {
                *value = rng.gen();
            }
        }
        Self { table }
    }

    /// Table value for a square index and a piece code in `1..=12`.
    pub fn key(&self, square: usize, code: u32) -> u32 {
        self.table[square][(code - 1) as usize]
    }
}

pub fn keys() -> &'static HashKeys {
    KEYS.get_or_init(HashKeys::generate)
}

/// Piece-identity code in `1..=12`: white P=1 R=2 N=3 B=4 Q=5 K=6,
/// black the same order shifted by 6. `None` for an empty square.
pub fn piece_code(piece: Piece) -> Option<u32> {
    let player = piece.player()?;
    let base = match piece.type_of() {
        PieceType::P => 1,
        PieceType::R => 2,
        PieceType::N => 3,
        PieceType::B => 4,
        PieceType::Q => 5,
        PieceType::K => 6,
        _ => return None,
    };
    Some(if player == Player::White { base } else { base + 6 })
}

/// From-scratch recompute of the position fingerprint: for every occupied
/// square, XOR in `code * table[square][code]`.
///
/// Diagnostic/verification use only. The search keys its cache on the
/// collaborator's incrementally maintained `Board::zobrist()`; this function
/// is a different hash and must never be mixed with it.
pub fn full_hash(board: &Board) -> u32 {
    let keys = keys();
    let mut hash = 0u32;
    for square in 0..SQUARES {
        let piece = board.piece_at_sq(SQ(square as u8));
        if let Some(code) = piece_code(piece) {
            hash ^= code.wrapping_mul(keys.key(square, code));
        }
    }
    hash
}
