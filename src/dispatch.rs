//! Dynamic work distribution for the per-bucket sort phase.
//!
//! A [`WorkQueue`] is a mutex-guarded cursor over bucket ids: each `claim`
//! hands out the next unclaimed id, so workers that finish small buckets early
//! immediately pull the next one (pull-based load balancing, not round-robin).
//! One queue is built per multi-threaded pass and dropped with it.

use std::marker::PhantomData;
use std::sync::Mutex;

/// Mutex-guarded monotone cursor over `0..limit`.
pub struct WorkQueue {
    cursor: Mutex<usize>,
    limit: usize,
}

impl WorkQueue {
    /// New queue over the ids `0..limit`, cursor at 0.
    pub fn new(limit: usize) -> Self {
        WorkQueue {
            cursor: Mutex::new(0),
            limit,
        }
    }

    /// Claim the next unclaimed id.
    ///
    /// Read-and-increment happens as one step under the lock, so no two
    /// callers observe the same id and no id is skipped. Returns `None` once
    /// every id in `0..limit` has been handed out; surplus callers simply see
    /// `None` right away (oversubscription is not an error).
    pub fn claim(&self) -> Option<usize> {
        let mut cursor = self.cursor.lock().expect("work queue mutex poisoned");
        let id = *cursor;
        *cursor += 1;
        if id < self.limit {
            Some(id)
        } else {
            None
        }
    }
}

/// Shared view of the bucket table handed to the worker pool.
///
/// Each bucket id is claimed from the [`WorkQueue`] by exactly one worker, so
/// slots are never aliased across threads; that invariant is what makes the
/// unsafe access sound. No per-bucket lock is taken.
pub(crate) struct BucketSlots<'a> {
    ptr: *mut Vec<u32>,
    len: usize,
    _marker: PhantomData<&'a mut [Vec<u32>]>,
}

// SAFETY: access is partitioned by claimed id; at most one thread ever
// touches a given slot (see `WorkQueue::claim`).
unsafe impl Sync for BucketSlots<'_> {}

impl<'a> BucketSlots<'a> {
    pub(crate) fn new(buckets: &'a mut [Vec<u32>]) -> Self {
        BucketSlots {
            ptr: buckets.as_mut_ptr(),
            len: buckets.len(),
            _marker: PhantomData,
        }
    }

    /// Exclusive access to bucket `id`.
    ///
    /// # Safety
    /// `id` must have been claimed from the pass's [`WorkQueue`], which yields
    /// each id at most once, and must be `< len`.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn bucket_mut(&self, id: usize) -> &mut Vec<u32> {
        debug_assert!(id < self.len);
        unsafe { &mut *self.ptr.add(id) }
    }
}
