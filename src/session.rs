//! SortSession: owns the array and bucket table for one sort pass and drives
//! the `Idle → Partitioned → Sorted → Recombined` phase machine.

use std::fmt;
use std::thread;

use thiserror::Error;

use crate::builder::SortConfig;
use crate::dispatch::{BucketSlots, WorkQueue};
use crate::partition::partition_into;
use crate::quicksort::sort_bucket;

/// Errors returned by a sort pass. All of them are rejected configuration or
/// misuse; a validly configured pass has no failure modes.
#[derive(Debug, Error)]
pub enum SortError {
    /// Bucket count of zero.
    #[error("bucket count must be at least 1")]
    ZeroBuckets,
    /// Explicit thread override of zero.
    #[error("thread override must be at least 1")]
    ZeroThreads,
    /// Phase-advance operation called out of order.
    #[error("phase out of order: operation needs {expected}, session is {actual}")]
    PhaseOrder { expected: Phase, actual: Phase },
}

/// Where a session is in its pass. `Recombined` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Partitioned,
    Sorted,
    Recombined,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Partitioned => "partitioned",
            Phase::Sorted => "sorted",
            Phase::Recombined => "recombined",
        };
        f.write_str(name)
    }
}

/// One bucket-sort pass over an owned array.
///
/// The session exclusively owns the array and the bucket table; both are
/// released when it is dropped or consumed by [`into_values`]. Phase-advance
/// methods must run in order; there is no partial-result or retry path.
///
/// [`into_values`]: SortSession::into_values
pub struct SortSession {
    values: Vec<u32>,
    buckets: Vec<Vec<u32>>,
    threads: usize,
    phase: Phase,
}

impl SortSession {
    /// New idle session. Fails on malformed configuration before touching
    /// `values`.
    pub fn new(values: Vec<u32>, cfg: &SortConfig) -> Result<Self, SortError> {
        cfg.validate()?;
        Ok(SortSession {
            values,
            buckets: vec![Vec::new(); cfg.bucket_count()],
            threads: cfg.effective_threads(),
            phase: Phase::Idle,
        })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SortError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SortError::PhaseOrder {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Scatter every value into its range bucket. `Idle → Partitioned`.
    pub fn partition(&mut self) -> Result<(), SortError> {
        self.expect_phase(Phase::Idle)?;
        partition_into(&self.values, &mut self.buckets);
        self.phase = Phase::Partitioned;
        Ok(())
    }

    /// Sort every bucket in place. `Partitioned → Sorted`.
    ///
    /// With one worker this is a plain loop over the buckets. With more, a
    /// fixed pool of scoped threads runs the claim-then-sort loop against a
    /// fresh [`WorkQueue`] until it is exhausted; all workers are joined
    /// before this returns.
    pub fn sort_buckets(&mut self) -> Result<(), SortError> {
        self.expect_phase(Phase::Partitioned)?;
        if self.threads <= 1 {
            for bucket in &mut self.buckets {
                sort_bucket(bucket);
            }
        } else {
            let threads = self.threads;
            let queue = WorkQueue::new(self.buckets.len());
            let slots = BucketSlots::new(&mut self.buckets);
            thread::scope(|s| {
                for _ in 0..threads {
                    s.spawn(|| {
                        while let Some(id) = queue.claim() {
                            // SAFETY: the queue yields each id exactly once,
                            // so this worker holds the only reference to
                            // bucket `id`.
                            let bucket = unsafe { slots.bucket_mut(id) };
                            sort_bucket(bucket);
                        }
                    });
                }
            });
        }
        self.phase = Phase::Sorted;
        Ok(())
    }

    /// Concatenate the sorted buckets back into the array in bucket order,
    /// one advancing output cursor across bucket boundaries.
    /// `Sorted → Recombined`.
    pub fn recombine(&mut self) -> Result<(), SortError> {
        self.expect_phase(Phase::Sorted)?;
        debug_assert_eq!(
            self.buckets.iter().map(Vec::len).sum::<usize>(),
            self.values.len()
        );
        let mut out = 0;
        for bucket in &self.buckets {
            self.values[out..out + bucket.len()].copy_from_slice(bucket);
            out += bucket.len();
        }
        self.phase = Phase::Recombined;
        Ok(())
    }

    /// Run the full pass: partition, sort, recombine.
    pub fn run(&mut self) -> Result<(), SortError> {
        self.partition()?;
        self.sort_buckets()?;
        self.recombine()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Worker threads the sort phase uses.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Read-only view of the array.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of range buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Read-only view of bucket `id`.
    pub fn bucket(&self, id: usize) -> &[u32] {
        &self.buckets[id]
    }

    /// Consume the session, returning the array and dropping the buckets.
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }
}

/// Sort `values` in place with a full pass under `cfg`.
pub fn bucket_sort(values: &mut Vec<u32>, cfg: &SortConfig) -> Result<(), SortError> {
    // Reject bad configuration before taking the caller's buffer.
    cfg.validate()?;
    let mut session = SortSession::new(std::mem::take(values), cfg)?;
    session.run()?;
    *values = session.into_values();
    Ok(())
}
