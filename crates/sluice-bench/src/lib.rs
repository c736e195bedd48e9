//! Benchmark profiles for the Sluice core primitives.
//!
//! Provides the request geometries shared by the allocation benches so
//! the natural and over-aligned paths are measured over the same sizes.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sluice_alloc::natural_alignment;

/// Request sizes covering small, cacheline-ish, and page-ish payloads.
pub const REQUEST_SIZES: [usize; 4] = [16, 64, 1024, 4096];

/// Alignments exercising the natural (standard allocator) path.
pub fn natural_alignments() -> Vec<usize> {
    vec![1, 8, natural_alignment()]
}

/// Alignments exercising the platform over-aligned path.
pub fn over_alignments() -> Vec<usize> {
    vec![
        natural_alignment() * 2,
        natural_alignment() * 8,
        4096,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladders_split_at_the_natural_boundary() {
        for alignment in natural_alignments() {
            assert!(alignment <= natural_alignment());
            assert!(alignment.is_power_of_two());
        }
        for alignment in over_alignments() {
            assert!(alignment > natural_alignment());
            assert!(alignment.is_power_of_two());
        }
    }
}
