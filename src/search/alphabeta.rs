use log::info;
use pleco::{BitMove, Board};
use std::time::{Duration, Instant};

use crate::search::eval;
use crate::search::ordering;
use crate::search::tt::{Entry, Flag, TranspositionTable};

/// Root search window.
pub const SCORE_INF: i32 = 1_000_000;
/// Initial best-value sentinel at internal nodes, inside the root window.
const SCORE_SENTINEL: i32 = 999_999;

/// Search context: the transposition table plus per-search statistics.
/// Counters reset at the start of every root call and are reported through
/// the returned [`SearchReport`].
pub struct Searcher {
    tt: TranspositionTable,
    nodes: u64,
    cache_hits: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    pub best: Option<BitMove>,
    pub value: i32,
    pub nodes: u64,
    pub cache_hits: u64,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self::with_table(TranspositionTable::new())
    }

    /// Smaller tables keep tests and benches light; the replacement policy
    /// is capacity-independent.
    pub fn with_table_capacity(slots: usize) -> Self {
        Self::with_table(TranspositionTable::with_capacity(slots))
    }

    fn with_table(tt: TranspositionTable) -> Self {
        Self { tt, nodes: 0, cache_hits: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Search every root move at `depth - 1` and pick the strongest. The
    /// board is only mutated through make/unmake pairs and is bit-identical
    /// when the call returns. With no legal move the report carries
    /// `best: None`; a finished game is the caller's precondition to check.
    pub fn select_best_move(&mut self, board: &mut Board, depth: u32) -> SearchReport {
        self.nodes = 0;
        self.cache_hits = 0;
        let started = Instant::now();

        let mut moves: Vec<BitMove> = board.generate_pseudolegal_moves().iter().copied().collect();
        ordering::sort(board, &mut moves);

        let mut best_value = -SCORE_INF;
        let mut best: Option<BitMove> = None;
        for mv in moves {
            if !board.legal_move(mv) {
                continue;
            }
            board.apply_move(mv);
            let value = self.search(board, depth.saturating_sub(1), -SCORE_INF, SCORE_INF, false);
            board.undo_move();
            // Strict improvement only: the first move in sorted order wins ties.
            if value > best_value {
                best_value = value;
                best = Some(mv);
            }
        }

        let report = SearchReport {
            best,
            value: best_value,
            nodes: self.nodes,
            cache_hits: self.cache_hits,
            elapsed: started.elapsed(),
        };
        info!(
            "depth {} best {} value {} nodes {} cache_hits {} nps {:.0}",
            depth,
            report.best.map(|m| m.to_string()).unwrap_or_else(|| "-".into()),
            report.value,
            report.nodes,
            report.cache_hits,
            report.nodes_per_second(),
        );
        report
    }

    /// Alpha-beta over the fixed-depth game tree. `maximizing` alternates
    /// each ply; depth 0 returns the static evaluation negated per the
    /// negamax-style leaf convention.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return -eval::evaluate(board);
        }

        // Hash observed at node entry; every store below is keyed by it.
        let hash = board.zobrist();
        let cached = self.tt.get(hash);
        if let Some(entry) = cached {
            if entry.depth > depth {
                self.cache_hits += 1;
                match entry.flag {
                    Flag::Exact => return entry.value,
                    Flag::Upper => beta = beta.min(entry.value),
                    Flag::Lower => alpha = alpha.max(entry.value),
                }
                if alpha > beta {
                    return entry.value;
                }
            }
        }

        let mut moves: Vec<BitMove> = board.generate_pseudolegal_moves().iter().copied().collect();
        ordering::sort(board, &mut moves);
        if let Some(entry) = cached {
            if entry.depth <= depth {
                if let Some(cached_move) = entry.best {
                    let usable = match entry.flag {
                        Flag::Exact => true,
                        Flag::Upper => maximizing,
                        Flag::Lower => !maximizing,
                    };
                    if usable {
                        ordering::promote_cached(&mut moves, cached_move);
                    }
                }
            }
        }

        if maximizing {
            let mut best = -SCORE_SENTINEL;
            let mut best_move: Option<BitMove> = None;
            for mv in moves {
                // Own king left in check is an expected outcome, not an error.
                if !board.legal_move(mv) {
                    continue;
                }
                board.apply_move(mv);
                let value = self.search(board, depth - 1, alpha, beta, false);
                board.undo_move();
                if value > best {
                    best = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.tt.put(Entry { hash, depth, value: best, best: best_move, flag: Flag::Upper });
                    return best;
                }
            }
            self.tt.put(Entry { hash, depth, value: best, best: best_move, flag: Flag::Exact });
            best
        } else {
            let mut best = SCORE_SENTINEL;
            let mut best_move: Option<BitMove> = None;
            for mv in moves {
                if !board.legal_move(mv) {
                    continue;
                }
                board.apply_move(mv);
                let value = self.search(board, depth - 1, alpha, beta, true);
                board.undo_move();
                if value < best {
                    best = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
                if beta <= alpha {
                    self.tt.put(Entry { hash, depth, value: best, best: best_move, flag: Flag::Lower });
                    return best;
                }
            }
            self.tt.put(Entry { hash, depth, value: best, best: best_move, flag: Flag::Exact });
            best
        }
    }
}
