//! RNG module - uniform piece selection
//!
//! The engine never owns a concrete random source. It draws through the
//! [`PieceRng`] trait, so a session can run on the seeded [`SimpleRng`] in
//! play and on a [`ScriptedRng`] when a test needs an exact piece sequence.

use log::error;

use crate::types::PieceKind;

/// Source of uniform selectors.
pub trait PieceRng {
    /// Return a value in `[0, max)`. Callers never pass `max == 0`.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: PieceRng + ?Sized> PieceRng for Box<R> {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Draw a kind uniformly over the seven tetrominoes.
///
/// A generator that ignores its bound is logged and its value wrapped into
/// range rather than aborting the game.
pub fn draw_kind<R: PieceRng + ?Sized>(rng: &mut R) -> PieceKind {
    let selector = rng.next_range(PieceKind::COUNT as u32);
    match PieceKind::from_index(selector) {
        Ok(kind) => kind,
        Err(err) => {
            error!("piece generator out of range: {}", err);
            PieceKind::ALL[selector as usize % PieceKind::COUNT]
        }
    }
}

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state, usable as a seed to replay from here.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceRng for SimpleRng {
    /// Multiply-shift reduction: uses the high bits, which are the
    /// well-mixed ones in a power-of-two LCG.
    fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of selectors, cycling when it runs out.
///
/// Values are returned unchanged, even when they exceed `max`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    /// An empty script yields 0 forever.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    pub fn from_kinds(kinds: &[PieceKind]) -> Self {
        Self::new(kinds.iter().map(|k| k.index() as u32).collect())
    }

    /// How many values have been handed out.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl PieceRng for ScriptedRng {
    fn next_range(&mut self, _max: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_draws_cover_every_kind() {
        let mut rng = SimpleRng::new(2024);
        let mut counts = [0u32; 7];
        for _ in 0..7_000 {
            counts[draw_kind(&mut rng).index()] += 1;
        }
        // Roughly uniform: each kind near 1000.
        for (i, c) in counts.iter().enumerate() {
            assert!((800..1200).contains(c), "kind {} drawn {} times", i, c);
        }
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::from_kinds(&[PieceKind::T, PieceKind::O]);
        assert_eq!(draw_kind(&mut rng), PieceKind::T);
        assert_eq!(draw_kind(&mut rng), PieceKind::O);
        assert_eq!(draw_kind(&mut rng), PieceKind::T);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_out_of_range_selector_is_wrapped() {
        let mut rng = ScriptedRng::new(vec![9]);
        // 9 % 7 == 2 -> O
        assert_eq!(draw_kind(&mut rng), PieceKind::O);
    }

    #[test]
    fn test_boxed_rng() {
        let mut rng: Box<dyn PieceRng> = Box::new(ScriptedRng::new(vec![5]));
        assert_eq!(draw_kind(&mut rng), PieceKind::L);
    }
}
