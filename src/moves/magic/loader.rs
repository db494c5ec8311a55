//! Startup entry point for obtaining a `MagicTables` instance.
//!
//! Under the `deterministic_magic` feature the search uses a fixed seed so
//! that magic numbers (and therefore table layout) are reproducible across
//! runs, which is convenient for deterministic perft/test comparisons.

use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;

#[cfg(feature = "deterministic_magic")]
const MAGIC_SEED: u64 = 0x5EED_C0DE_1234_5678;

pub fn load_magic_tables() -> MagicTables {
    #[cfg(feature = "deterministic_magic")]
    let seed = MagicTableSeed::Fixed(MAGIC_SEED);
    #[cfg(not(feature = "deterministic_magic"))]
    let seed = MagicTableSeed::Random;

    generate_magic_tables(seed).expect("failed to generate magic bitboard tables")
}
