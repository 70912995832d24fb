//! Linear congruential generator used by every estimator worker.
//!
//! Each worker owns one [`Lcg`] by value for the lifetime of its partition.
//! The recurrence is the classic `seed = (seed * 1103515245 + 12345) mod 2^31`,
//! evaluated with wrapping `u32` arithmetic and a 31-bit mask.

use rand::{RngCore, SeedableRng};

/// Multiplier of the recurrence.
pub const MULTIPLIER: u32 = 1_103_515_245;

/// Increment of the recurrence.
pub const INCREMENT: u32 = 12_345;

/// Mask keeping the low 31 bits (modulo 2^31).
pub const MASK: u32 = 0x7FFF_FFFF;

/// `i32::MAX` as a float; the scale all draws are taken against.
const SCALE: f64 = 2_147_483_647.0;

/// A source of uniform values scaled to a caller-supplied bound.
///
/// Trial predicates are generic over this so they can be driven by a
/// scripted sequence in tests.
pub trait Draw {
    /// Returns the next value in `[0, bound)`.
    ///
    /// [`Lcg`] is the exception: its state reaches `MASK` once per 2^31
    /// period, and that single draw returns exactly `bound`.
    fn draw(&mut self, bound: f64) -> f64;
}

/// Per-worker seeding: worker `w` starts from `base + stride * w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPolicy {
    pub base: u32,
    pub stride: u32,
}

impl SeedPolicy {
    pub const fn new(base: u32, stride: u32) -> Self {
        Self { base, stride }
    }

    /// Initial seed for the given worker index.
    #[inline]
    pub fn seed_for(&self, worker: usize) -> u32 {
        self.base.wrapping_add(self.stride.wrapping_mul(worker as u32))
    }
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::new(25_234, 17)
    }
}

/// Linear congruential generator with a single 31-bit state word.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::lcg::{Draw, Lcg};
///
/// let mut lcg = Lcg::new(25_234);
/// let x = lcg.draw(1.0);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Seeds a generator for `worker` under `policy`.
    #[inline]
    pub fn for_worker(worker: usize, policy: &SeedPolicy) -> Self {
        Self::new(policy.seed_for(worker))
    }

    /// Current state.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances the recurrence and returns the new state.
    ///
    /// The result always fits in 31 bits.
    #[inline]
    pub fn next_state(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        self.seed
    }
}

impl Draw for Lcg {
    /// Scales the new state by `bound / i32::MAX`.
    ///
    /// The state reaches `MASK` once per 2^31 period, at which point the
    /// value equals `bound`.
    #[inline]
    fn draw(&mut self, bound: f64) -> f64 {
        let state = self.next_state();
        state as f64 / (SCALE / bound)
    }
}

/// The state only has 31 bits and its low bits are weak, so each `u32` is
/// assembled from the high 16 bits of two consecutive states.
impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        let hi = self.next_state() >> 15;
        let lo = self.next_state() >> 15;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
