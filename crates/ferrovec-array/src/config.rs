//! Growth parameters.

use ferrovec_alloc::AllocError;

/// Capacity growth policy for [`DynArray`](crate::DynArray).
///
/// Growth is geometric: the first allocation holds
/// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) slots and each later one
/// multiplies the capacity by [`GROWTH_FACTOR`](Self::GROWTH_FACTOR), which
/// keeps append amortized O(1). The values are fixed; there is no runtime
/// override.
#[derive(Clone, Copy, Debug)]
pub struct GrowthConfig;

impl GrowthConfig {
    /// Capacity of the first block allocated for an empty array.
    pub const INITIAL_CAPACITY: usize = 1;

    /// Factor applied to a non-zero capacity on each growth step.
    pub const GROWTH_FACTOR: usize = 2;

    /// Capacity to grow to from `current`.
    ///
    /// Returns [`AllocError::CapacityOverflow`] if the product does not fit
    /// in `usize`.
    pub fn next_capacity(current: usize) -> Result<usize, AllocError> {
        if current == 0 {
            return Ok(Self::INITIAL_CAPACITY);
        }
        current
            .checked_mul(Self::GROWTH_FACTOR)
            .ok_or(AllocError::CapacityOverflow {
                requested: usize::MAX,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grows_to_one() {
        assert_eq!(GrowthConfig::next_capacity(0), Ok(1));
    }

    #[test]
    fn non_empty_doubles() {
        assert_eq!(GrowthConfig::next_capacity(1), Ok(2));
        assert_eq!(GrowthConfig::next_capacity(64), Ok(128));
    }

    #[test]
    fn overflow_is_reported() {
        let result = GrowthConfig::next_capacity(usize::MAX / 2 + 1);
        assert!(matches!(result, Err(AllocError::CapacityOverflow { .. })));
    }

    #[test]
    fn sequence_from_empty_is_powers_of_two() {
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..8 {
            cap = GrowthConfig::next_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16, 32, 64, 128]);
    }
}
