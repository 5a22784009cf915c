//! Randomness injection for the simulation engines.
//!
//! Every random draw in the crate goes through [`RandomSource`]. The
//! application hands the engines a fastrand-backed [`FastrandSource`]
//! (optionally seeded for a reproducible particle layout); tests replay
//! exact sequences with [`ScriptedSource`].

/// Source of uniform draws for the simulation.
pub trait RandomSource {
    /// Uniform draw in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[0.0, 1.0)` at `f32` precision.
    fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Production source backed by `fastrand`.
pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Seeded construction; the same seed yields the same draw sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastrandSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Test source replaying a fixed sequence, cycling when exhausted.
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
