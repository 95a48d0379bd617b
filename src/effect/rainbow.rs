//! Color wheel effects
//!
//! Neither effect is part of the default demo sequence; they are kept for
//! custom sequences.
//!
//! - `RainbowEffect`: the whole strip shifts through the wheel, each cell one
//!   position ahead of the previous one
//! - `RainbowCycleEffect`: one full wheel is spread evenly along the strip
//!   and rotated

use embassy_time::Duration;

use super::Effect;
use crate::color::{Rgb, wheel};

/// Number of wheel positions
const WHEEL_SIZE: u32 = 256;

/// Full wheel turns made by [`RainbowCycleEffect`] by default
pub const DEFAULT_RAINBOW_CYCLES: u8 = 5;

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    step: Duration,
    /// Wheel offset of the next frame
    frame: u32,
}

impl RainbowEffect {
    pub const fn new(step: Duration) -> Self {
        Self { step, frame: 0 }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        if self.frame >= WHEEL_SIZE {
            return None;
        }

        for (i, led) in leds.iter_mut().enumerate() {
            *led = wheel((i as u32).wrapping_add(self.frame) as u8);
        }

        self.frame += 1;
        Some(self.step)
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}

#[derive(Debug, Clone)]
pub struct RainbowCycleEffect {
    step: Duration,
    cycles: u8,
    /// Wheel offset of the next frame
    frame: u32,
}

impl RainbowCycleEffect {
    pub const fn new(step: Duration) -> Self {
        Self {
            step,
            cycles: DEFAULT_RAINBOW_CYCLES,
            frame: 0,
        }
    }

    /// Set the number of full wheel turns
    #[must_use]
    pub const fn with_cycles(mut self, cycles: u8) -> Self {
        self.cycles = cycles;
        self
    }
}

impl Effect for RainbowCycleEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        if self.frame >= WHEEL_SIZE * u32::from(self.cycles) {
            return None;
        }

        let count = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let spread = i * WHEEL_SIZE as usize / count;
            *led = wheel((spread as u32).wrapping_add(self.frame) as u8);
        }

        self.frame += 1;
        Some(self.step)
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}
