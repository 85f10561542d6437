//! Packing and checklist progress aggregation.

use serde::Serialize;

/// Compute a completion percentage from total and completed counts.
///
/// Returns 0 if `total` is 0. Rounds half away from zero, so 0.5 % steps
/// round up (1 of 200 is 1 %), and clamps to 100 when `completed` exceeds
/// `total`.
pub fn progress_pct(total: usize, completed: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (completed as f64 / total as f64 * 100.0).round();
    pct.min(100.0) as u8
}

/// Count the `true` flags in a sequence (packed items, completed tasks).
pub fn count_completed<I>(flags: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    flags.into_iter().filter(|done| *done).count()
}

/// Progress snapshot for a packing list or checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackingProgress {
    pub total_items: usize,
    pub packed_items: usize,
    pub percent: u8,
}

impl PackingProgress {
    pub fn new(total_items: usize, packed_items: usize) -> Self {
        Self {
            total_items,
            packed_items,
            percent: progress_pct(total_items, packed_items),
        }
    }

    /// Progress when there is no list to measure.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Build a snapshot from per-item completion flags.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut total = 0usize;
        let mut done = 0usize;
        for flag in flags {
            total += 1;
            if flag {
                done += 1;
            }
        }
        Self::new(total, done)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
