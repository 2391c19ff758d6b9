//! Deterministic random number generation for demo-roster seeding.
//!
//! RULE: the assigner never draws randomness — it is fully determined
//! by its inputs. Only the roster generator uses this stream, so the
//! same master seed always yields the same demo roster.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct RosterRng {
    inner: Pcg64Mcg,
}

impl RosterRng {
    pub fn new(master_seed: u64) -> Self {
        RosterRng {
            inner: Pcg64Mcg::seed_from_u64(master_seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
