//! Sort-pass configuration: bucket count, multithreading toggle, thread
//! override, and the pure thread-count policy.

use crate::session::SortError;

/// Configuration for one sort pass.
#[derive(Clone, Debug)]
pub struct SortConfig {
    buckets: usize,
    multithreaded: bool,
    threads: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            buckets: 16,
            multithreaded: true,
            threads: None,
        }
    }
}

impl SortConfig {
    /// Set the number of range buckets `B` (must be >= 1).
    pub fn with_buckets(mut self, b: usize) -> Self {
        self.buckets = b;
        self
    }
    /// Enable/disable the multi-threaded sort phase (default: enabled).
    pub fn multithreaded(mut self, yes: bool) -> Self {
        self.multithreaded = yes;
        self
    }
    /// Fix the worker-thread count instead of deriving it from the machine.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }

    /// Number of range buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets
    }

    /// Worker threads the sort phase will use.
    ///
    /// 1 when multithreading is off; the explicit override when set.
    /// Otherwise derive from available parallelism `C`: a single-core machine
    /// with more than one bucket still gets 2 workers (exercises contention on
    /// the work queue), else `min(B, C)`.
    pub fn effective_threads(&self) -> usize {
        if !self.multithreaded {
            return 1;
        }
        if let Some(n) = self.threads {
            return n;
        }
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        if cores == 1 && self.buckets > 1 {
            2
        } else {
            cores.min(self.buckets)
        }
    }

    /// Reject malformed configuration before any caller data is touched.
    pub(crate) fn validate(&self) -> Result<(), SortError> {
        if self.buckets == 0 {
            return Err(SortError::ZeroBuckets);
        }
        if self.threads == Some(0) {
            return Err(SortError::ZeroThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_threaded_policy_forces_one_worker() {
        let cfg = SortConfig::default().multithreaded(false).threads(8);
        assert_eq!(cfg.effective_threads(), 1);
    }

    #[test]
    fn test_explicit_override_wins() {
        let cfg = SortConfig::default().with_buckets(4).threads(11);
        assert_eq!(cfg.effective_threads(), 11);
    }

    #[test]
    fn test_derived_count_never_exceeds_buckets() {
        let cfg = SortConfig::default().with_buckets(2);
        assert!(cfg.effective_threads() <= 2);
        assert!(cfg.effective_threads() >= 1);
    }

    #[test]
    fn test_validate_rejects_zero_buckets_and_threads() {
        assert!(SortConfig::default().with_buckets(0).validate().is_err());
        assert!(SortConfig::default().threads(0).validate().is_err());
        assert!(SortConfig::default().validate().is_ok());
    }
}
