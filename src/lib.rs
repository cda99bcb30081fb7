//! Parallel range-bucket sort for `u32` keys.
//!
//! Pipeline: scatter every key into one of `B` contiguous value-range buckets,
//! quicksort each bucket in place (optionally across a fixed pool of worker
//! threads pulling bucket ids from a shared cursor), then concatenate the
//! buckets back into the input array in bucket order. Because the ranges are
//! disjoint and ordered, concatenation needs no cross-bucket comparison.
//!
//! The whole pass is owned by a [`SortSession`], which walks
//! `Idle → Partitioned → Sorted → Recombined` and exposes read-only views of
//! the array and buckets after each phase. The core does no I/O, timing, or
//! printing; see `src/bin/bsort.rs` for a timed driver.
//!
//! Worst-case note: the per-bucket quicksort uses a first-element pivot and
//! degrades to O(n²) on already-sorted buckets. That is the documented
//! behavior for uniform random keys, not an oversight.

mod builder;
mod dispatch;
mod partition;
mod quicksort;
mod session;

pub use builder::SortConfig;
pub use dispatch::WorkQueue;
pub use partition::{bucket_id, bucket_width, partition_into};
pub use quicksort::sort_bucket;
pub use session::{bucket_sort, Phase, SortError, SortSession};
