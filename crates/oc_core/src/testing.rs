//! Scripted random source for deterministic outcome tests.

use rand::RngCore;
use std::collections::VecDeque;

/// `RngCore` over a fixed queue of 64-bit words; yields 0 once exhausted.
///
/// The `Standard` f64 sampler takes the top 53 bits of a `next_u64` word,
/// so a desired uniform draw `d` maps back to the word
/// `((d * 2^53) as u64) << 11`. Integer range sampling consumes raw 32-bit
/// words; push those explicitly with [`ScriptedRng::push_word`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    /// One queued word per uniform draw, in order.
    pub fn from_uniform_draws(draws: &[f64]) -> Self {
        let mut rng = Self::default();
        for &draw in draws {
            rng.push_uniform(draw);
        }
        rng
    }

    pub fn from_words(words: &[u64]) -> Self {
        Self { words: words.iter().copied().collect() }
    }

    /// Queue a word that `gen::<f64>()` will read back as `draw`.
    pub fn push_uniform(&mut self, draw: f64) {
        debug_assert!((0.0..1.0).contains(&draw));
        let word = ((draw * (1u64 << 53) as f64) as u64) << 11;
        self.words.push_back(word);
    }

    /// Queue a raw word, consumed verbatim by the next `next_u64`/`next_u32`.
    pub fn push_word(&mut self, word: u64) {
        self.words.push_back(word);
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words.pop_front().unwrap_or(0)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_uniform_draw_round_trips() {
        let mut rng = ScriptedRng::from_uniform_draws(&[0.0, 0.25, 0.5, 0.999]);
        for expected in [0.0, 0.25, 0.5, 0.999] {
            let got: f64 = rng.gen();
            assert!((got - expected).abs() < 1e-12, "got {got}, wanted {expected}");
        }
    }

    #[test]
    fn test_exhausted_queue_yields_zero() {
        let mut rng = ScriptedRng::from_words(&[7]);
        assert_eq!(rng.next_u64(), 7);
        assert_eq!(rng.next_u64(), 0);
        let draw: f64 = rng.gen();
        assert_eq!(draw, 0.0);
    }

    #[test]
    fn test_word_zero_maps_to_range_minimum() {
        let mut rng = ScriptedRng::from_words(&[0]);
        let value: u8 = rng.gen_range(1..=6);
        assert_eq!(value, 1);
    }
}
