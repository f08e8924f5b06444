//! Stable grid fingerprints for reproducibility checks.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::grid::Grid;

impl Grid {
    /// Hash of the dimensions and every wall flag. Generation bookkeeping (`visited`)
    /// is left out so two grids with identical passages share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.rows() as u64);
        hasher.write_u64(self.cols() as u64);
        for cell in self.cells() {
            let bits = cell
                .walls
                .iter()
                .enumerate()
                .fold(0_u8, |acc, (index, wall)| acc | (u8::from(*wall) << index));
            hasher.write_u8(bits);
        }
        hasher.finish()
    }
}

/// `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}
