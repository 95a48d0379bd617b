#![no_std]

//! LED strip demo with a battery pack keep-alive pulse.
//!
//! The foreground plays a fixed sequence of strip effects forever while a
//! hardware alarm periodically pulses an output pin so that the USB power
//! bank feeding the board does not switch itself off.
//!
//! ```ignore
//! static KEEPALIVE: SharedKeepAlive<Alarm0, Output<'static>, Delay> = SharedKeepAlive::new();
//!
//! let mut renderer = Renderer::<_, 60>::new(SmartLedsDriver::new(ws2812));
//! renderer.begin();
//! KEEPALIVE.install(KeepAlive::new(alarm, pulse_pin, monitor_pin, Delay::new(), PulseConfig::DEFAULT))?;
//! renderer.run(DEMO_SEQUENCE, &mut delay);
//! ```

use embedded_hal::delay::DelayNs;

pub mod color;
pub mod effect;
pub mod keepalive;
pub mod player;
pub mod renderer;
pub mod sequence;
pub mod strip;

pub use color::{Rgb, wheel};
pub use effect::{Effect, EffectKind, EffectSlot};
pub use keepalive::{
    Alarm, FireError, KeepAlive, Polarity, PulseConfig, PulseEdge, PulsePhase, PulseTicker,
    SharedKeepAlive,
};
pub use player::{FrameResult, SequencePlayer};
pub use renderer::Renderer;
pub use sequence::{DEMO_SEQUENCE, RAINBOW_STEPS, Sequence, Step};
pub use strip::{SmartLedsDriver, Strip};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Block on `delay` for `duration`, saturating at `u32::MAX` microseconds
pub(crate) fn block_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let micros = duration.as_micros();
    if micros == 0 {
        return;
    }
    delay.delay_us(u32::try_from(micros).unwrap_or(u32::MAX));
}
