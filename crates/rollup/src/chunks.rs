use core::ops::RangeInclusive;

/// Iterator over inclusive block ranges of bounded size.
///
/// Yields consecutive ranges from `floor` up to and including `ceiling`, each
/// covering at most `chunk_size` blocks. The last range is clipped to the
/// ceiling. Yields nothing if `floor > ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChunks {
    next: Option<u64>,
    ceiling: u64,
    chunk_size: u64,
}

impl BlockChunks {
    /// Create a new iterator. A `chunk_size` of zero is treated as one.
    pub const fn new(floor: u64, ceiling: u64, chunk_size: u64) -> Self {
        let next = if floor <= ceiling { Some(floor) } else { None };
        let chunk_size = if chunk_size == 0 { 1 } else { chunk_size };
        Self { next, ceiling, chunk_size }
    }

    /// Get the inclusive upper bound of the iteration.
    pub const fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Get the maximum number of blocks in a single range.
    pub const fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Number of ranges not yet yielded.
    pub const fn remaining(&self) -> u64 {
        match self.next {
            Some(next) => ((self.ceiling - next) / self.chunk_size).saturating_add(1),
            None => 0,
        }
    }
}

impl Iterator for BlockChunks {
    type Item = RangeInclusive<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.next?;
        let to = from.saturating_add(self.chunk_size - 1).min(self.ceiling);
        self.next = to.checked_add(1).filter(|next| *next <= self.ceiling);
        Some(from..=to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl core::iter::FusedIterator for BlockChunks {}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn last_chunk_is_clipped() {
        let chunks: Vec<_> = BlockChunks::new(0, 25_000, 10_000).collect();
        assert_eq!(chunks, vec![0..=9_999, 10_000..=19_999, 20_000..=25_000]);
    }

    #[test]
    fn exact_multiple() {
        let chunks: Vec<_> = BlockChunks::new(100, 299, 100).collect();
        assert_eq!(chunks, vec![100..=199, 200..=299]);
    }

    #[test]
    fn floor_equals_ceiling() {
        let chunks: Vec<_> = BlockChunks::new(7, 7, 10_000).collect();
        assert_eq!(chunks, vec![7..=7]);
    }

    #[test]
    fn floor_above_ceiling() {
        let mut chunks = BlockChunks::new(8, 7, 10_000);
        assert_eq!(chunks.remaining(), 0);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn zero_chunk_size() {
        let chunks: Vec<_> = BlockChunks::new(0, 2, 0).collect();
        assert_eq!(chunks, vec![0..=0, 1..=1, 2..=2]);
    }

    #[test]
    fn does_not_overflow_at_u64_max() {
        let chunks: Vec<_> = BlockChunks::new(u64::MAX - 5, u64::MAX, 4).collect();
        assert_eq!(chunks, vec![u64::MAX - 5..=u64::MAX - 2, u64::MAX - 1..=u64::MAX]);
    }

    proptest! {
        #[test]
        fn chunks_tile_the_range(
            floor in 0u64..1_000_000,
            span in 0u64..1_000_000,
            chunk_size in 1u64..50_000,
        ) {
            let ceiling = floor + span;
            let chunks = BlockChunks::new(floor, ceiling, chunk_size);
            let expected = chunks.remaining();

            let mut cursor = floor;
            let mut count = 0;
            for range in chunks {
                prop_assert_eq!(*range.start(), cursor);
                prop_assert!(range.start() <= range.end());
                prop_assert!(range.end() - range.start() < chunk_size);
                prop_assert!(*range.end() <= ceiling);
                cursor = range.end() + 1;
                count += 1;
            }
            prop_assert_eq!(cursor, ceiling + 1);
            prop_assert_eq!(count, expected);
            prop_assert_eq!(count, (ceiling - floor + 1).div_ceil(chunk_size));
        }
    }
}
