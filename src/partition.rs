//! Range partitioning: linear mapping from a `u32` key to a bucket id.
//!
//! Conventions
//! - Bucket ranges are contiguous, disjoint, and ascending in bucket id, so
//!   concatenating buckets in id order yields globally sorted output once each
//!   bucket is sorted internally.
//! - Widths are computed in `u64`: with a single bucket the width is 2^32,
//!   which would overflow `u32`.

/// Width of each bucket's value range when splitting the `u32` domain into
/// `buckets` ranges: `⌊(2^32 − 1) / buckets⌋ + 1`.
#[inline]
pub fn bucket_width(buckets: usize) -> u64 {
    debug_assert!(buckets >= 1);
    u32::MAX as u64 / buckets as u64 + 1
}

/// Bucket id for `value` given a width from [`bucket_width`].
#[inline]
pub fn bucket_id(value: u32, width: u64) -> usize {
    (value as u64 / width) as usize
}

/// Scatter every element of `values` into its range bucket, appending.
///
/// Buckets are not cleared first; callers hand in empty buckets. Relative
/// order within a bucket follows input order, but no stability is promised.
pub fn partition_into(values: &[u32], buckets: &mut [Vec<u32>]) {
    let width = bucket_width(buckets.len());
    for &v in values {
        buckets[bucket_id(v, width)].push(v);
    }
}
