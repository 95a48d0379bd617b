//! Declarative effect sequences
//!
//! A sequence is plain data: an ordered list of [`Step`]s, each naming an
//! effect kind together with its color and timing. The renderer and the
//! player interpret it with a single dispatch loop.

use embassy_time::Duration;
use heapless::Vec;

use crate::color::{
    AMBER, COMMAND, DEEP_BLUE, EMBER, FLAME, MAGENTA, OFF, ORCHID, ROYAL_PURPLE, Rgb, SPARK,
    STEEL_BLUE,
};
use crate::effect::{EffectKind, EffectSlot};

/// Delay between two cells of a wipe
pub const WIPE_STEP: Duration = Duration::from_millis(50);
/// How long a flash stays lit
pub const FLASH_HOLD: Duration = Duration::from_millis(500);
/// How long the opening command flash stays lit
pub const COMMAND_HOLD: Duration = Duration::from_millis(1000);
/// How long a static fill is held
pub const FILL_HOLD: Duration = Duration::from_millis(3000);
/// Delay between two rainbow frames
pub const RAINBOW_STEP: Duration = Duration::from_millis(20);

/// One entry of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: EffectKind,
    pub color: Rgb,
    /// Hold for fills and flashes, per-frame delay for wipes and rainbows
    pub delay: Duration,
}

impl Step {
    pub const fn new(kind: EffectKind, color: Rgb, delay: Duration) -> Self {
        Self { kind, color, delay }
    }

    pub const fn fill(color: Rgb, hold: Duration) -> Self {
        Self::new(EffectKind::Fill, color, hold)
    }

    pub const fn flash(color: Rgb, hold: Duration) -> Self {
        Self::new(EffectKind::Flash, color, hold)
    }

    pub const fn wipe(color: Rgb, step: Duration) -> Self {
        Self::new(EffectKind::Wipe, color, step)
    }

    pub const fn wipe_on_off(color: Rgb, step: Duration) -> Self {
        Self::new(EffectKind::WipeOnOff, color, step)
    }

    pub const fn rainbow(step: Duration) -> Self {
        Self::new(EffectKind::Rainbow, OFF, step)
    }

    pub const fn rainbow_cycle(step: Duration) -> Self {
        Self::new(EffectKind::RainbowCycle, OFF, step)
    }

    /// Build the effect this step describes, rewound to its first frame
    pub fn to_effect(&self) -> EffectSlot {
        self.kind.to_slot(self.color, self.delay)
    }
}

/// The demo played forever by the firmware
///
/// A command flash opens every round, followed by the fire palette and then
/// the blue/purple palette.
pub const DEMO_SEQUENCE: &[Step] = &[
    Step::flash(COMMAND, COMMAND_HOLD),
    // Fire
    Step::wipe_on_off(EMBER, WIPE_STEP),
    Step::wipe(FLAME, WIPE_STEP),
    Step::flash(AMBER, FLASH_HOLD),
    Step::fill(SPARK, FILL_HOLD),
    Step::fill(EMBER, FILL_HOLD),
    // Blue and purple
    Step::wipe_on_off(DEEP_BLUE, WIPE_STEP),
    Step::wipe(ROYAL_PURPLE, WIPE_STEP),
    Step::flash(STEEL_BLUE, FLASH_HOLD),
    Step::fill(ORCHID, FILL_HOLD),
    Step::fill(MAGENTA, FILL_HOLD),
];

/// Rainbow steps that can be appended to the demo
pub const RAINBOW_STEPS: &[Step] = &[Step::rainbow(RAINBOW_STEP), Step::rainbow_cycle(RAINBOW_STEP)];

/// Sequence assembled at runtime
///
/// CAP is the maximum number of steps
#[derive(Debug, Clone, Default)]
pub struct Sequence<const CAP: usize> {
    steps: Vec<Step, CAP>,
}

impl<const CAP: usize> Sequence<CAP> {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Copy steps from a slice
    ///
    /// Returns the first step that did not fit
    pub fn from_steps(steps: &[Step]) -> Result<Self, Step> {
        let mut sequence = Self::new();
        sequence.extend(steps)?;
        Ok(sequence)
    }

    /// Append a step
    ///
    /// Returns the step if the sequence is full
    pub fn push(&mut self, step: Step) -> Result<(), Step> {
        self.steps.push(step)
    }

    /// Append steps from a slice
    ///
    /// Steps that fit are kept; returns the first one that did not
    pub fn extend(&mut self, steps: &[Step]) -> Result<(), Step> {
        for step in steps {
            self.push(*step)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
