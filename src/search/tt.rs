use pleco::BitMove;

/// Default slot count of the fixed-capacity table.
pub const TABLE_SIZE: usize = 2_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// The stored value is the true minimax value of the node.
    Exact,
    /// A maximizing node stopped on a beta cutoff; the value is a bound.
    Upper,
    /// A minimizing node stopped on an alpha cutoff; the value is a bound.
    Lower,
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub hash: u64,
    pub depth: u32,
    pub value: i32,
    pub best: Option<BitMove>,
    pub flag: Flag,
}

/// Direct-mapped cache from position hash to a memoized search result.
///
/// One slot per index, no chaining, no probing, no resizing: a hash
/// mismatch at a slot is a miss, and a colliding write simply takes the
/// slot over.
pub struct TranspositionTable {
    slots: Vec<Option<Entry>>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_capacity(TABLE_SIZE)
    }

    pub fn with_capacity(slots: usize) -> Self {
        Self { slots: vec![None; slots.max(1)] }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn index(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    pub fn get(&self, hash: u64) -> Option<Entry> {
        match self.slots[self.index(hash)] {
            Some(entry) if entry.hash == hash => Some(entry),
            _ => None,
        }
    }

    /// Store an entry. On a same-hash slot the deeper result wins: the new
    /// entry is written when its depth is greater than or equal to the
    /// stored depth, so depth ties favor the most recent result. A slot
    /// holding a different hash is overwritten unconditionally.
    pub fn put(&mut self, entry: Entry) {
        let ix = self.index(entry.hash);
        if let Some(existing) = self.slots[ix] {
            if existing.hash == entry.hash && existing.depth > entry.depth {
                return;
            }
        }
        self.slots[ix] = Some(entry);
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
