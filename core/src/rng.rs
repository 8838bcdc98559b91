//! Deterministic random number generation.
//!
//! RULE: No pipeline stage may call a platform RNG directly.
//! All randomness flows through StageRng instances derived from the
//! single master seed held by the RngBank.
//!
//! Each stage gets its own RNG stream, seeded deterministically from
//! (master_seed XOR stage_slot). This means:
//!   - Adding a new stage never perturbs existing stages' streams.
//!   - Each stage's stream is fully reproducible in isolation.
//!
//! The master seed defaults to OS entropy (a plain run is intentionally
//! different every time) but can be pinned for reproducible fixtures.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single pipeline stage.
pub struct StageRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StageRng {
    /// Create a stage RNG from the master seed and a stable stage slot.
    /// The slot value must never change once assigned.
    pub fn new(master_seed: u64, slot: u64) -> Self {
        let derived_seed = master_seed ^ slot.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u64 in [lo, hi] inclusive.
    pub fn next_u64_in(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "lo must be <= hi");
        lo + self.next_u64_below(hi - lo + 1)
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn uniform_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// All stage RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// A bank seeded from OS entropy, for plain (non-reproducible) runs.
    pub fn from_entropy() -> Self {
        Self::new(rand::rngs::OsRng.next_u64())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_stage(&self, slot: StageSlot) -> StageRng {
        StageRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stage's derived seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Customer = 0,
    Product = 1,
    Order = 2,
    // Add new stages here — append only.
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Product => "product",
            Self::Order => "order",
        }
    }
}
