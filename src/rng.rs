//! Random name sources.
//! The pool draws one integer per synthesized file name; anything that can
//! produce a non-negative integer on demand can be plugged in.

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of integers used to build file names.
pub trait RandomSource: Send {
    /// Next integer; rendered in decimal as a file name.
    fn next_name(&mut self) -> u64;
}

impl RandomSource for SmallRng {
    fn next_name(&mut self) -> u64 {
        self.next_u64()
    }
}

impl RandomSource for StdRng {
    fn next_name(&mut self) -> u64 {
        self.next_u64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_name(&mut self) -> u64 {
        (**self).next_name()
    }
}

/// Deterministic source for a fixed seed.
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Source seeded from the current unix time in seconds.
pub fn time_seeded() -> SmallRng {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    seeded(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..16 {
            assert_eq!(a.next_name(), b.next_name());
        }
    }

    #[test]
    fn boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(seeded(3));
        let mut plain = seeded(3);
        assert_eq!(boxed.next_name(), plain.next_name());
    }

    #[test]
    fn draws_are_spread() {
        let mut r = time_seeded();
        let seen: HashSet<u64> = (0..1000).map(|_| r.next_name()).collect();
        assert_eq!(seen.len(), 1000);
    }
}
