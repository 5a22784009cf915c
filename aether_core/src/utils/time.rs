//! Time helpers for Aether Deck.

use chrono::Local;

/// Wall-clock stamp for terminal lines, 24-hour with milliseconds.
///
/// # Examples
///
/// - "14:02:33.481"
/// - "09:00:07.002"
pub fn clock_stamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}
