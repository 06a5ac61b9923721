// crates/artledger-core/src/clock.rs
//
// Clock sources for timestamping registry records.
//
// The registry only needs a monotonically non-decreasing counter (a block
// height on-chain). How it advances is up to the host.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::types::BlockHeight;

/// External, monotonically non-decreasing clock.
pub trait Clock: Send + Sync {
    /// Current clock reading.
    fn height(&self) -> BlockHeight;
}

/// Clock advanced explicitly by its owner.
#[derive(Debug, Default)]
pub struct ManualClock {
    height: AtomicU64,
}

impl ManualClock {
    /// Create a clock reading `height`.
    pub fn new(height: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Move the clock forward to `height`. Lower values are ignored.
    pub fn set(&self, height: BlockHeight) {
        self.height.fetch_max(height, Ordering::SeqCst);
    }

    /// Advance the clock by `blocks` and return the new reading.
    ///
    /// Saturates at `u64::MAX`.
    pub fn advance(&self, blocks: u64) -> BlockHeight {
        let prev = self
            .height
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |h| {
                Some(h.saturating_add(blocks))
            })
            .unwrap_or_else(|h| h);
        prev.saturating_add(blocks)
    }
}

impl Clock for ManualClock {
    fn height(&self) -> BlockHeight {
        self.height.load(Ordering::SeqCst)
    }
}

/// Wall clock in seconds since the Unix epoch.
///
/// Never reads lower than a value it has already returned, even if the
/// system time steps backwards.
#[derive(Debug, Default)]
pub struct UnixClock {
    last: AtomicU64,
}

impl UnixClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for UnixClock {
    fn height(&self) -> BlockHeight {
        let now = Utc::now().timestamp().max(0) as u64;
        let prev = self.last.fetch_max(now, Ordering::SeqCst);
        prev.max(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.height(), 100);
        assert_eq!(clock.advance(5), 105);
        assert_eq!(clock.height(), 105);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 1);
        assert_eq!(clock.advance(5), u64::MAX);
        assert_eq!(clock.height(), u64::MAX);
        assert_eq!(clock.advance(1), u64::MAX);
    }

    #[test]
    fn test_manual_clock_never_moves_back() {
        let clock = ManualClock::new(100);
        clock.set(50);
        assert_eq!(clock.height(), 100);
        clock.set(200);
        assert_eq!(clock.height(), 200);
    }

    #[test]
    fn test_unix_clock_non_decreasing() {
        let clock = UnixClock::new();
        let a = clock.height();
        let b = clock.height();
        assert!(b >= a);
        assert!(a > 1_600_000_000);
    }
}
