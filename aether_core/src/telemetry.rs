//! Cosmetic telemetry readouts for the header.
//!
//! Nothing here measures anything. Every refresh draws a fresh decoherence
//! percentage and entropy level from the random source, and occasionally the
//! decoherence value trips a "quantum noise" warning for flavor.

use crate::entropy::RandomSource;

/// Rounded decoherence values above this read as noise.
pub const NOISE_THRESHOLD: f64 = 0.008;

/// Header entropy readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyLevel {
    Low,
    Nominal,
}

impl EntropyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EntropyLevel::Low => "LOW",
            EntropyLevel::Nominal => "NOMINAL",
        }
    }
}

/// One refresh of the header readouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    /// Percentage in [0, 0.01), already rounded to four decimals.
    pub decoherence: f64,
    pub entropy: EntropyLevel,
}

impl TelemetrySample {
    /// Draw order: decoherence, entropy.
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        let raw = rng.next_f64() * 0.01;
        let decoherence = (raw * 10_000.0).round() / 10_000.0;
        let entropy = if rng.next_f64() > 0.5 {
            EntropyLevel::Low
        } else {
            EntropyLevel::Nominal
        };
        Self {
            decoherence,
            entropy,
        }
    }

    pub fn decoherence_label(&self) -> String {
        format!("{:.4}%", self.decoherence)
    }

    /// Whether this sample should raise a noise warning. Applies to the
    /// rounded value, so 0.00796 raised to 0.0080 does not trip it.
    pub fn is_noisy(&self) -> bool {
        self.decoherence > NOISE_THRESHOLD
    }

    pub fn noise_warning(&self) -> String {
        format!("QUANTUM NOISE DETECTED: {:.4}%", self.decoherence)
    }
}

impl Default for TelemetrySample {
    fn default() -> Self {
        Self {
            decoherence: 0.0,
            entropy: EntropyLevel::Nominal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{FastrandSource, ScriptedSource};

    #[test]
    fn test_draw_rounds_to_four_decimals() {
        // 0.56789 * 0.01 = 0.0056789 -> 0.0057.
        let mut rng = ScriptedSource::new(vec![0.56789, 0.0]);
        let sample = TelemetrySample::draw(&mut rng);
        assert_eq!(sample.decoherence, 0.0057);
    }

    #[test]
    fn test_draw_stays_under_one_percent() {
        let mut rng = FastrandSource::with_seed(7);
        for _ in 0..200 {
            let sample = TelemetrySample::draw(&mut rng);
            assert!((0.0..=0.01).contains(&sample.decoherence));
        }
    }

    #[test]
    fn test_entropy_draw_split() {
        let mut rng = ScriptedSource::new(vec![0.0, 0.6]);
        assert_eq!(TelemetrySample::draw(&mut rng).entropy, EntropyLevel::Low);

        let mut rng = ScriptedSource::new(vec![0.0, 0.4]);
        assert_eq!(
            TelemetrySample::draw(&mut rng).entropy,
            EntropyLevel::Nominal
        );
    }

    #[test]
    fn test_noise_check_uses_rounded_value() {
        // 0.80006 * 0.01 = 0.0080006, rounds down to 0.0080: not noise.
        let mut rng = ScriptedSource::new(vec![0.80006, 0.0]);
        let sample = TelemetrySample::draw(&mut rng);
        assert_eq!(sample.decoherence, 0.008);
        assert!(!sample.is_noisy());

        // 0.81 * 0.01 rounds to 0.0081: noise.
        let mut rng = ScriptedSource::new(vec![0.81, 0.0]);
        let sample = TelemetrySample::draw(&mut rng);
        assert!(sample.is_noisy());
    }

    #[test]
    fn test_labels() {
        let sample = TelemetrySample {
            decoherence: 0.0081,
            entropy: EntropyLevel::Low,
        };
        assert_eq!(sample.decoherence_label(), "0.0081%");
        assert_eq!(sample.noise_warning(), "QUANTUM NOISE DETECTED: 0.0081%");
        assert_eq!(EntropyLevel::Low.label(), "LOW");
        assert_eq!(EntropyLevel::Nominal.label(), "NOMINAL");
    }
}
