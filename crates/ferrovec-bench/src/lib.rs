//! Benchmark workloads for ferrovec.
//!
//! Shared builders so every benchmark measures the same inputs:
//!
//! - [`SMALL`], [`LARGE`]: element counts used across benches
//! - [`filled_u64`]: a `DynArray<u64>` grown one push at a time
//! - [`filled_strings`]: a `DynArray<String>` of heap-owning elements

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ferrovec::prelude::*;

/// Element count for short-lived, cache-resident workloads.
pub const SMALL: usize = 64;

/// Element count large enough to cross many growth steps.
pub const LARGE: usize = 10_000;

/// Build `len` sequential integers by repeated `push`.
pub fn filled_u64(len: usize) -> DynArray<u64> {
    let mut array = DynArray::new();
    for i in 0..len as u64 {
        array.push(i);
    }
    array
}

/// Build `len` strings (`"item0"`, `"item1"`, ...) by repeated `emplace_with`.
pub fn filled_strings(len: usize) -> DynArray<String> {
    let mut array = DynArray::new();
    for i in 0..len {
        array.emplace_with(|| format!("item{i}"));
    }
    array
}
