//! Frame-paced sequence playback.
//!
//! Plays a sequence without blocking: the caller passes the current time,
//! the player renders a frame when one is due, and the caller sleeps
//! however it likes (async timer, thread sleep, UI repaint).

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::effect::EffectSlot;
use crate::sequence::Step;
use crate::strip::Strip;

/// How long to wait before checking again when the sequence has no frames.
pub const IDLE_FRAME_DURATION: Duration = Duration::from_millis(100);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable sequence player that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut player = SequencePlayer::<_, 60>::new(driver, DEMO_SEQUENCE);
///
/// loop {
///     let result = player.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct SequencePlayer<'a, D: OutputDriver, const N: usize> {
    strip: Strip<D, N>,
    steps: &'a [Step],
    /// Index of the step to start after the current one
    position: usize,
    effect: Option<EffectSlot>,
    next_frame: Instant,
}

impl<'a, D: OutputDriver, const N: usize> SequencePlayer<'a, D, N> {
    /// Create a player; the first tick renders the first frame.
    pub fn new(driver: D, steps: &'a [Step]) -> Self {
        Self {
            strip: Strip::new(driver),
            steps,
            position: 0,
            effect: None,
            next_frame: Instant::from_ticks(0),
        }
    }

    /// Replace the sequence, restarting from its first step.
    ///
    /// The next tick renders a frame whatever its time.
    pub fn set_steps(&mut self, steps: &'a [Step]) {
        self.steps = steps;
        self.position = 0;
        self.effect = None;
        self.next_frame = Instant::from_ticks(0);
    }

    /// Render and flush the next frame if it is due.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again; calling earlier is harmless.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if now < self.next_frame {
            return FrameResult {
                next_deadline: self.next_frame,
                sleep_duration: self.next_frame - now,
            };
        }

        let hold = match self.render_next() {
            Some(hold) => {
                self.strip.show();
                hold
            }
            None => IDLE_FRAME_DURATION,
        };

        // Holds are measured from the flush, so a late tick shifts the
        // schedule instead of bursting to catch up
        self.next_frame = now + hold;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: hold,
        }
    }

    /// Render the next frame into the buffer, moving on to the next step
    /// whenever the current effect runs out of frames.
    fn render_next(&mut self) -> Option<Duration> {
        // Every step gets one chance per call, so a sequence whose steps
        // produce no frames (e.g. wipes on an empty strip) cannot spin forever
        for _ in 0..=self.steps.len() {
            if let Some(effect) = self.effect.as_mut() {
                if let Some(hold) = effect.next_frame(self.strip.cells_mut()) {
                    return Some(hold);
                }
                self.effect = None;
            }

            let step = self.steps.get(self.position)?;
            #[cfg(feature = "esp32-log")]
            println!("[player] step {}: {}", self.position, step.kind.as_str());

            self.effect = Some(step.to_effect());
            self.position = (self.position + 1) % self.steps.len();
        }
        None
    }

    /// Step whose effect is on screen, if any.
    pub fn current_step(&self) -> Option<&Step> {
        let len = self.steps.len();
        self.effect.as_ref()?;
        self.steps.get((self.position + len - 1) % len)
    }

    /// Get a reference to the strip.
    pub fn strip(&self) -> &Strip<D, N> {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut Strip<D, N> {
        &mut self.strip
    }
}
