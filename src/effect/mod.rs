//! Effect system with compile-time known effect variants
//!
//! Every effect is a frame generator: each call to [`Effect::next_frame`]
//! renders one frame into the buffer and tells the caller how long to hold
//! it before asking for the next one. All effects are stored in an enum to
//! avoid heap allocations.

mod fill;
mod rainbow;
mod wipe;

use embassy_time::Duration;
pub use fill::{FillEffect, FlashEffect};
pub use rainbow::{DEFAULT_RAINBOW_CYCLES, RainbowCycleEffect, RainbowEffect};
pub use wipe::{WipeEffect, WipeOnOffEffect};

use crate::color::Rgb;

const EFFECT_NAME_FILL: &str = "fill";
const EFFECT_NAME_FLASH: &str = "flash";
const EFFECT_NAME_WIPE: &str = "wipe";
const EFFECT_NAME_WIPE_ON_OFF: &str = "wipe_on_off";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";

/// Hold used for frames that must be flushed but not waited on
pub(crate) const NO_HOLD: Duration = Duration::from_millis(0);

pub trait Effect {
    /// Render the next frame
    ///
    /// Returns how long the frame should stay on the strip, or `None`
    /// once the effect has nothing left to show. A `None` leaves `leds`
    /// untouched.
    fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration>;

    /// Rewind the effect to its first frame
    fn reset(&mut self);
}

/// Kind of effect a sequence step plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Whole strip in one color, held for the step delay
    Fill,
    /// Whole strip in one color for the step delay, then off
    Flash,
    /// Color drawn in cell by cell
    Wipe,
    /// Color drawn in cell by cell, then erased cell by cell
    WipeOnOff,
    /// Whole strip walking through the color wheel
    Rainbow,
    /// Color wheel spread along the strip and rotated
    RainbowCycle,
}

impl EffectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => EFFECT_NAME_FILL,
            Self::Flash => EFFECT_NAME_FLASH,
            Self::Wipe => EFFECT_NAME_WIPE,
            Self::WipeOnOff => EFFECT_NAME_WIPE_ON_OFF,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::RainbowCycle => EFFECT_NAME_RAINBOW_CYCLE,
        }
    }

    /// Build a fresh effect of this kind
    ///
    /// Rainbow effects ignore the color.
    pub fn to_slot(self, color: Rgb, delay: Duration) -> EffectSlot {
        match self {
            Self::Fill => EffectSlot::Fill(FillEffect::new(color, delay)),
            Self::Flash => EffectSlot::Flash(FlashEffect::new(color, delay)),
            Self::Wipe => EffectSlot::Wipe(WipeEffect::new(color, delay)),
            Self::WipeOnOff => EffectSlot::WipeOnOff(WipeOnOffEffect::new(color, delay)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new(delay)),
            Self::RainbowCycle => EffectSlot::RainbowCycle(RainbowCycleEffect::new(delay)),
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Fill(FillEffect),
    Flash(FlashEffect),
    Wipe(WipeEffect),
    WipeOnOff(WipeOnOffEffect),
    Rainbow(RainbowEffect),
    RainbowCycle(RainbowCycleEffect),
}

impl EffectSlot {
    /// Render the next frame of the current effect
    pub fn next_frame(&mut self, leds: &mut [Rgb]) -> Option<Duration> {
        match self {
            Self::Fill(effect) => effect.next_frame(leds),
            Self::Flash(effect) => effect.next_frame(leds),
            Self::Wipe(effect) => effect.next_frame(leds),
            Self::WipeOnOff(effect) => effect.next_frame(leds),
            Self::Rainbow(effect) => effect.next_frame(leds),
            Self::RainbowCycle(effect) => effect.next_frame(leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Fill(effect) => effect.reset(),
            Self::Flash(effect) => effect.reset(),
            Self::Wipe(effect) => effect.reset(),
            Self::WipeOnOff(effect) => effect.reset(),
            Self::Rainbow(effect) => effect.reset(),
            Self::RainbowCycle(effect) => effect.reset(),
        }
    }

    /// Get the effect kind for external observation
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Fill(_) => EffectKind::Fill,
            Self::Flash(_) => EffectKind::Flash,
            Self::Wipe(_) => EffectKind::Wipe,
            Self::WipeOnOff(_) => EffectKind::WipeOnOff,
            Self::Rainbow(_) => EffectKind::Rainbow,
            Self::RainbowCycle(_) => EffectKind::RainbowCycle,
        }
    }
}
