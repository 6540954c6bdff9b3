//! RNG module - seedable piece selection
//!
//! The engine never touches an ambient random source. A [`PieceGenerator`] owns
//! a small deterministic LCG, so the same seed always produces the same game,
//! which is what the tests rely on. The host seeds it from the clock.
//!
//! Two selection rules are available:
//! - **Uniform**: every spawn picks any allowed kind with equal probability.
//! - **Seven-bag**: allowed kinds are shuffled into a bag and dealt until it runs
//!   out, then a new bag is shuffled.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift so the result comes from the high bits; the low bits of
    /// a power-of-two LCG have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Piece selection rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Randomizer {
    #[default]
    Uniform,
    SevenBag,
}

/// Draws the kind of each newly spawned piece
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    randomizer: Randomizer,
    /// Allowed kinds, deduplicated, in catalog order
    kinds: ArrayVec<PieceKind, 7>,
    bag: ArrayVec<PieceKind, 7>,
    bag_index: usize,
}

impl PieceGenerator {
    /// Create a generator over `kinds`.
    ///
    /// Duplicates are ignored. An empty `kinds` is a configuration error caught by
    /// `EngineConfig::validate`; if one slips through, every kind is allowed.
    pub fn new(seed: u32, randomizer: Randomizer, kinds: &[PieceKind]) -> Self {
        let mut allowed: ArrayVec<PieceKind, 7> = PieceKind::ALL
            .into_iter()
            .filter(|k| kinds.contains(k))
            .collect();
        if allowed.is_empty() {
            allowed = PieceKind::ALL.into_iter().collect();
        }

        let mut generator = Self {
            rng: SimpleRng::new(seed),
            randomizer,
            bag: ArrayVec::new(),
            bag_index: 0,
            kinds: allowed,
        };
        generator.refill_bag();
        generator
    }

    /// Kinds this generator can produce
    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(self.kinds.len() as u32) as usize;
                self.kinds[idx]
            }
            Randomizer::SevenBag => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag.clone_from(&self.kinds);
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_hits_every_kind() {
        let mut generator = PieceGenerator::new(42, Randomizer::Uniform, &PieceKind::ALL);
        let seen: HashSet<PieceKind> = (0..200).map(|_| generator.next_kind()).collect();
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceGenerator::new(99, Randomizer::Uniform, &PieceKind::ALL);
        let mut b = PieceGenerator::new(99, Randomizer::Uniform, &PieceKind::ALL);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_seven_bag_deals_each_kind_once_per_bag() {
        let mut generator = PieceGenerator::new(12345, Randomizer::SevenBag, &PieceKind::ALL);
        for _ in 0..3 {
            let bag: HashSet<PieceKind> = (0..7).map(|_| generator.next_kind()).collect();
            assert_eq!(bag.len(), 7);
        }
    }

    #[test]
    fn test_restricted_kinds() {
        let mut generator =
            PieceGenerator::new(5, Randomizer::Uniform, &[PieceKind::O, PieceKind::O]);
        assert_eq!(generator.kinds(), &[PieceKind::O]);
        for _ in 0..20 {
            assert_eq!(generator.next_kind(), PieceKind::O);
        }
    }

    #[test]
    fn test_empty_kinds_falls_back_to_all() {
        let generator = PieceGenerator::new(5, Randomizer::Uniform, &[]);
        assert_eq!(generator.kinds().len(), 7);
    }
}
