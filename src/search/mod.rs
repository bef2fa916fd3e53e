pub mod alphabeta;
pub mod eval;
pub mod keys;
pub mod ordering;
pub mod tt;
