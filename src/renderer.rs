use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::sequence::Step;
use crate::strip::Strip;
use crate::{OutputDriver, block_for};

/// Blocking sequence renderer
///
/// Owns the strip and plays steps frame by frame, flushing after every frame
/// and blocking on the delay for the hold the effect asks for. Meant for the
/// foreground loop of a single-threaded target; interrupts may still fire
/// during the blocking waits.
pub struct Renderer<D: OutputDriver, const N: usize> {
    strip: Strip<D, N>,
}

impl<D: OutputDriver, const N: usize> Renderer<D, N> {
    pub const fn new(driver: D) -> Self {
        Self {
            strip: Strip::new(driver),
        }
    }

    /// Turn the strip off
    ///
    /// Call once at startup so the strip does not show power-on garbage.
    pub fn begin(&mut self) {
        self.strip.clear();
        self.strip.show();
    }

    /// Play one step to completion
    pub fn play_step<T: DelayNs>(&mut self, step: &Step, delay: &mut T) {
        #[cfg(feature = "esp32-log")]
        println!("[renderer] step: {}", step.kind.as_str());

        let mut effect = step.to_effect();
        while let Some(hold) = effect.next_frame(self.strip.cells_mut()) {
            self.strip.show();
            block_for(delay, hold);
        }
    }

    /// Play every step once, in order
    pub fn play<T: DelayNs>(&mut self, steps: &[Step], delay: &mut T) {
        for step in steps {
            self.play_step(step, delay);
        }
    }

    /// Play the steps over and over
    pub fn run<T: DelayNs>(&mut self, steps: &[Step], delay: &mut T) -> ! {
        loop {
            self.play(steps, delay);
        }
    }

    pub fn strip(&self) -> &Strip<D, N> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut Strip<D, N> {
        &mut self.strip
    }
}
