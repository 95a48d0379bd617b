//! Battery pack keep-alive pulse
//!
//! USB power banks switch themselves off when the load stays too low for a
//! while. Briefly pulling a dedicated output to its active level at a fixed
//! period is enough to make the pack see some load again.
//!
//! Two drivers are provided:
//! - [`KeepAlive`]: runs from a hardware alarm interrupt and busy-waits for
//!   the duration of the pulse. [`SharedKeepAlive`] lets it live in a
//!   `static` reachable from the interrupt handler.
//! - [`PulseTicker`]: non-blocking state machine driven by the caller's
//!   clock, for targets with more than one execution context.

mod scheduler;
mod shared;
mod ticker;

use embassy_time::Duration;
use embedded_hal::digital::{OutputPin, PinState};

pub use scheduler::KeepAlive;
pub use shared::{FireError, SharedKeepAlive};
pub use ticker::{PulseEdge, PulsePhase, PulseTicker};

/// Time between the starts of two pulses
pub const DEFAULT_INTERVAL: Duration = Duration::from_micros(5_000_000);

/// Time the output stays at its active level
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_micros(5);

/// Electrical level that counts as a pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Output idles high and is pulled low for the pulse
    ActiveLow,
    /// Output idles low and is driven high for the pulse
    ActiveHigh,
}

impl Polarity {
    pub const fn active(self) -> PinState {
        match self {
            Self::ActiveLow => PinState::Low,
            Self::ActiveHigh => PinState::High,
        }
    }

    pub const fn idle(self) -> PinState {
        match self {
            Self::ActiveLow => PinState::High,
            Self::ActiveHigh => PinState::Low,
        }
    }
}

/// Pulse timing
///
/// Both durations were calibrated against a real power bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseConfig {
    /// Time between the starts of two pulses
    pub interval: Duration,
    /// Time the output stays at its active level
    pub pulse_duration: Duration,
    pub polarity: Polarity,
}

impl PulseConfig {
    pub const DEFAULT: Self = Self {
        interval: DEFAULT_INTERVAL,
        pulse_duration: DEFAULT_PULSE_DURATION,
        polarity: Polarity::ActiveLow,
    };
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Recurring hardware countdown
///
/// The countdown reloads by itself every time it expires, so consecutive
/// expirations are exactly one period apart. `stop` and `start` only mask
/// and unmask the callback; both take effect immediately.
///
/// How the expiration reaches [`KeepAlive::on_fire`] is up to the platform,
/// usually an interrupt handler calling [`SharedKeepAlive::fire`].
pub trait Alarm {
    /// Set the countdown period
    fn configure(&mut self, period: Duration);

    /// Let the alarm fire
    fn start(&mut self);

    /// Keep the alarm from firing
    fn stop(&mut self);
}

/// Drive the output and the monitor pin to the same level
///
/// Both pins are always driven; the first error is returned.
fn drive<P: OutputPin>(output: &mut P, monitor: &mut P, level: PinState) -> Result<(), P::Error> {
    let output_result = output.set_state(level);
    let monitor_result = monitor.set_state(level);
    output_result.and(monitor_result)
}
