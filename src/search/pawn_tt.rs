//! Pawn structure cache, keyed by the board's pawn-only Zobrist key.
//!
//! Pawn structure (doubled/isolated/passed pawn terms) is expensive to
//! recompute and changes far less often than the rest of the position, so it
//! gets its own small table with unconditional-replace semantics: unlike the
//! main transposition table there is no depth to prefer, just a different
//! pawn skeleton.

use tracing::warn;

#[derive(Clone, Copy, Debug)]
pub struct PawnEntry {
    pub key: u64,
    pub mid_value: i16,
    pub end_value: i16,
}

impl PawnEntry {
    const EMPTY: PawnEntry = PawnEntry {
        key: 0,
        mid_value: 0,
        end_value: 0,
    };
}

#[derive(Debug, Default)]
struct PawnTTStats {
    hits: u64,
    misses: u64,
    puts: u64,
    collisions: u64,
    overwrites: u64,
    updates: u64,
}

pub struct PawnTT {
    entries: Vec<PawnEntry>,
    mask: usize,
    stats: PawnTTStats,
}

impl PawnTT {
    pub const DEFAULT_SIZE_MB: usize = 2;

    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<PawnEntry>();
        let num_entries = (size_mb * 1024 * 1024) / entry_size.max(1);

        let mut capacity = 1usize;
        while capacity * 2 <= num_entries.max(1) {
            capacity *= 2;
        }

        Self {
            entries: vec![PawnEntry::EMPTY; capacity],
            mask: capacity - 1,
            stats: PawnTTStats::default(),
        }
    }

    #[inline]
    fn hash(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = PawnEntry::EMPTY;
        }
        self.stats = PawnTTStats::default();
    }

    /// Look up the cached mid/end-game pawn structure score for `key`.
    pub fn probe(&mut self, key: u64) -> Option<(i32, i32)> {
        let idx = self.hash(key);
        let entry = self.entries[idx];
        if entry.key == key && entry.key != 0 {
            self.stats.hits += 1;
            Some((entry.mid_value as i32, entry.end_value as i32))
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Store a freshly computed pawn structure score. Always overwrites
    /// whatever was in the slot; a key collision that clobbers an entry no
    /// one has probed since its last write is logged, since that's a sign
    /// the table is too small for the position's pawn-structure churn.
    pub fn put(&mut self, key: u64, mid_value: i32, end_value: i32) {
        let idx = self.hash(key);
        let entry = &mut self.entries[idx];

        if entry.key == 0 {
            self.stats.puts += 1;
        } else if entry.key == key {
            self.stats.updates += 1;
        } else {
            self.stats.collisions += 1;
            self.stats.overwrites += 1;
            warn!(
                old_key = entry.key,
                new_key = key,
                "pawn TT collision: overwriting unconsumed entry"
            );
        }

        entry.key = key;
        entry.mid_value = mid_value.clamp(-32000, 32000) as i16;
        entry.end_value = end_value.clamp(-32000, 32000) as i16;
    }

    /// Hint that `key` will be probed soon; see `TranspositionTable::prefetch`.
    #[inline(always)]
    pub fn prefetch(&self, _key: u64) {}
}

impl Default for PawnTT {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE_MB)
    }
}
