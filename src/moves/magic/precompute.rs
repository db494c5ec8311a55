//! Generates magic bitboard tables for rook and bishop attacks at startup.
//!
//! For each square we compute the "relevant occupancy" mask (the squares whose
//! occupancy can change the attack set, excluding the board edge along each
//! ray), enumerate every blocker subset of that mask, and search for a magic
//! multiplier that maps each subset to a collision-free index into a
//! per-square attack table.

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use crate::utils::square_index;
use rand::{RngCore, SeedableRng, rngs::StdRng};

pub enum MagicTableSeed {
    Fixed(u64),
    Random,
}

fn rng_from_seed(seed: MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            let mut bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    }
}

fn rook_relevant_mask(square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let mut mask = 0u64;
    for r in (rank + 1)..7 {
        mask |= 1 << square_index(r, file);
    }
    for r in 1..rank {
        mask |= 1 << square_index(r, file);
    }
    for f in (file + 1)..7 {
        mask |= 1 << square_index(rank, f);
    }
    for f in 1..file {
        mask |= 1 << square_index(rank, f);
    }
    mask
}

fn bishop_relevant_mask(square: usize) -> u64 {
    let rank = square as isize / 8;
    let file = square as isize % 8;
    let mut mask = 0u64;
    let rays: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    for (dr, df) in rays {
        let mut r = rank + dr;
        let mut f = file + df;
        while (1..7).contains(&r) && (1..7).contains(&f) {
            mask |= 1 << square_index(r as usize, f as usize);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Enumerate every subset of `mask` using the carry-rippler trick.
fn subsets_of(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset: u64 = 0;
    loop {
        subsets.push(subset);
        if subset == mask {
            break;
        }
        subset = subset.wrapping_sub(mask) & mask;
    }
    subsets
}

fn build_entry(
    square: usize,
    mask: u64,
    attacks_fn: fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let bits = mask.count_ones();
    let shift = 64 - bits;
    let blockers = subsets_of(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| attacks_fn(square, b)).collect();

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let mut table = vec![0u64; 1 << bits];
    for (&b, &a) in blockers.iter().zip(attacks.iter()) {
        let index = (b.wrapping_mul(magic) >> shift) as usize;
        table[index] = a;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = rng_from_seed(seed);

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        let rook_mask = rook_relevant_mask(square);
        rook_entries.push(build_entry(
            square,
            rook_mask,
            rook_attacks_per_square,
            &mut rng,
        )?);

        let bishop_mask = bishop_relevant_mask(square);
        bishop_entries.push(build_entry(
            square,
            bishop_mask,
            bishop_attacks_per_square,
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_tables_for_all_squares() {
        let tables = generate_magic_tables(MagicTableSeed::Fixed(0x45)).unwrap();
        assert_eq!(tables.rook.entries.len(), 64);
        assert_eq!(tables.bishop.entries.len(), 64);
    }

    #[test]
    fn rook_a1_matches_scan_for_sampled_blockers() {
        let tables = generate_magic_tables(MagicTableSeed::Fixed(0x45)).unwrap();
        let blockers = (1u64 << 8) | (1u64 << 1); // a2, b1
        assert_eq!(
            tables.rook.get_attacks(0, blockers),
            rook_attacks_per_square(0, blockers)
        );
    }
}
