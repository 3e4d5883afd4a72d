// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicU32, Ordering};

use conduit_core::domain::article::SuffixSource;

/// Deterministic suffixes: 2, 3, 4, ...
#[derive(Debug)]
pub struct SequenceSuffix {
    next: AtomicU32,
}

impl Default for SequenceSuffix {
    fn default() -> Self {
        Self {
            next: AtomicU32::new(2),
        }
    }
}

impl SuffixSource for SequenceSuffix {
    fn next_suffix(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
