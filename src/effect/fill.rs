//! Whole-strip effects
//!
//! Both effects write every cell in one go and flush once per frame.

use embassy_time::Duration;

use super::{Effect, NO_HOLD};
use crate::color::{OFF, Rgb};

/// Fills all LEDs with one color and holds it
#[derive(Debug, Clone)]
pub struct FillEffect {
    color: Rgb,
    hold: Duration,
    done: bool,
}

impl FillEffect {
    pub const fn new(color: Rgb, hold: Duration) -> Self {
        Self {
            color,
            hold,
            done: false,
        }
    }
}

impl Effect for FillEffect {
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        if self.done {
            return None;
        }
        self.done = true;
        leds.fill(self.color);
        Some(self.hold)
    }

    fn reset(&mut self) {
        self.done = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlashPhase {
    On,
    Off,
    Done,
}

/// Fills all LEDs with one color, holds it, then turns them off
///
/// The strip is always left dark, whatever the flashed color.
#[derive(Debug, Clone)]
pub struct FlashEffect {
    color: Rgb,
    hold: Duration,
    phase: FlashPhase,
}

impl FlashEffect {
    pub const fn new(color: Rgb, hold: Duration) -> Self {
        Self {
            color,
            hold,
            phase: FlashPhase::On,
        }
    }
}

impl Effect for FlashEffect {
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        match self.phase {
            FlashPhase::On => {
                self.phase = FlashPhase::Off;
                leds.fill(self.color);
                Some(self.hold)
            }
            FlashPhase::Off => {
                self.phase = FlashPhase::Done;
                leds.fill(OFF);
                Some(NO_HOLD)
            }
            FlashPhase::Done => None,
        }
    }

    fn reset(&mut self) {
        self.phase = FlashPhase::On;
    }
}
