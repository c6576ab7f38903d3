//! Static contiguous partitioning of `[0, n)` across a fixed number of workers.
//!
//! Worker `tid` of `T` receives `[start, end)` with
//!
//! ```text
//! base  = n / T,  rem = n % T
//! start = tid * base + min(tid, rem)
//! end   = start + base + (tid < rem ? 1 : 0)
//! ```
//!
//! so the first `rem` workers get one extra index. All arithmetic is `u64`,
//! which cannot overflow for any `n` because `tid * base <= n`.

/// Half-open index range owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    /// Worker index in `[0, T)`.
    pub worker: usize,
    /// First index (inclusive).
    pub start: u64,
    /// One past the last index.
    pub end: u64,
}

impl WorkRange {
    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// True when the worker has nothing to sum (happens when `T > n`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Range for worker `worker` out of `workers` over `[0, n)`.
///
/// `workers` must be non-zero and `worker < workers`.
#[must_use]
pub fn chunk_range(n: u64, workers: usize, worker: usize) -> WorkRange {
    debug_assert!(workers > 0 && worker < workers);
    let t = workers as u64;
    let tid = worker as u64;
    let base = n / t;
    let rem = n % t;
    let start = tid * base + tid.min(rem);
    let end = start + base + u64::from(tid < rem);
    WorkRange { worker, start, end }
}

/// The complete set of worker ranges for one call.
#[derive(Debug, Clone)]
pub struct Partition {
    n: u64,
    ranges: Vec<WorkRange>,
}

impl Partition {
    /// Partition `[0, n)` into `workers` contiguous ranges.
    ///
    /// `workers` must be non-zero.
    #[must_use]
    pub fn new(n: u64, workers: usize) -> Self {
        let ranges = (0..workers).map(|w| chunk_range(n, workers, w)).collect();
        Self { n, ranges }
    }

    /// Ranges in ascending worker order.
    #[must_use]
    pub fn ranges(&self) -> &[WorkRange] {
        &self.ranges
    }

    /// Number of workers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkRange> {
        self.ranges.iter()
    }

    /// Check that the ranges are contiguous, gapless, cover `[0, n)` and
    /// differ in length by at most one.
    #[must_use]
    pub fn is_exact_cover(&self) -> bool {
        if self.ranges.is_empty() {
            return false;
        }
        let t = self.ranges.len() as u64;
        let floor = self.n / t;
        let ceil = floor + u64::from(self.n % t != 0);

        let mut cursor = 0u64;
        for (i, r) in self.ranges.iter().enumerate() {
            if r.worker != i || r.start != cursor || r.end < r.start {
                return false;
            }
            if r.len() != floor && r.len() != ceil {
                return false;
            }
            cursor = r.end;
        }
        cursor == self.n
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a WorkRange;
    type IntoIter = std::slice::Iter<'a, WorkRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
