//! Simulation engines behind the Aether Deck dashboard.
//!
//! Everything in this crate is plain state advanced by explicit tick calls:
//! the terminal console, the particle field, the scripted pipeline, and the
//! telemetry draws. Randomness enters only through [`RandomSource`], so every
//! engine replays deterministically under test. The desktop crate owns the
//! timers and the rendering.

#![allow(dead_code)]

pub mod console;
pub mod entropy;
pub mod field;
pub mod pipeline;
pub mod telemetry;
pub mod utils;

pub use console::{Console, LogLine, QueuedMessage, Severity};
pub use entropy::{FastrandSource, RandomSource, ScriptedSource};
pub use field::{Connection, Particle, ParticleField, Shade};
pub use pipeline::{
    boot_script, intent_script, submit, Effect, Intent, Sequencer, StagePhase, StageUnit, Step,
};
pub use telemetry::{EntropyLevel, TelemetrySample};
pub use utils::*;
