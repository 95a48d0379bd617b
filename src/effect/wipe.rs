//! Cell-by-cell wipes
//!
//! A wipe writes a single cell per frame, walking the strip from index 0
//! to the end. Cells that are not reached yet keep whatever they showed.

use embassy_time::Duration;

use super::Effect;
use crate::color::{OFF, Rgb};

/// Draws a color into the strip one cell per frame
#[derive(Debug, Clone)]
pub struct WipeEffect {
    color: Rgb,
    step: Duration,
    /// Index of the next cell to write
    cursor: usize,
}

impl WipeEffect {
    pub const fn new(color: Rgb, step: Duration) -> Self {
        Self {
            color,
            step,
            cursor: 0,
        }
    }
}

impl Effect for WipeEffect {
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        let cell = leds.get_mut(self.cursor)?;
        *cell = self.color;
        self.cursor += 1;
        Some(self.step)
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Wipes a color in, then wipes it out with black
///
/// The off-pass only starts once every cell has been lit.
#[derive(Debug, Clone)]
pub struct WipeOnOffEffect {
    on: WipeEffect,
    off: WipeEffect,
}

impl WipeOnOffEffect {
    pub const fn new(color: Rgb, step: Duration) -> Self {
        Self {
            on: WipeEffect::new(color, step),
            off: WipeEffect::new(OFF, step),
        }
    }
}

impl Effect for WipeOnOffEffect {
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        self.on
            .next_frame(leds)
            .or_else(|| self.off.next_frame(leds))
    }

    fn reset(&mut self) {
        self.on.reset();
        self.off.reset();
    }
}
