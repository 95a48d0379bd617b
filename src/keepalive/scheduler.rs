use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Alarm, PulseConfig, drive};
use crate::block_for;

/// Interrupt-driven keep-alive pulse
///
/// Owns the alarm, the pulse output, the monitor output (a LED mirroring the
/// pulse) and a blocking delay. Nothing here touches the LED strip.
pub struct KeepAlive<A, P, D> {
    alarm: A,
    output: P,
    monitor: P,
    delay: D,
    config: PulseConfig,
    pulses: u32,
}

impl<A, P, D> KeepAlive<A, P, D>
where
    A: Alarm,
    P: OutputPin,
    D: DelayNs,
{
    pub const fn new(alarm: A, output: P, monitor: P, delay: D, config: PulseConfig) -> Self {
        Self {
            alarm,
            output,
            monitor,
            delay,
            config,
            pulses: 0,
        }
    }

    /// Release both pins and arm the alarm
    ///
    /// The alarm is armed even if a pin could not be released.
    pub fn start(&mut self) -> Result<(), P::Error> {
        let released = drive(&mut self.output, &mut self.monitor, self.config.polarity.idle());
        self.arm();
        released
    }

    /// Schedule the next fire one interval from now
    pub fn arm(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[keepalive] armed, interval {} us",
            self.config.interval.as_micros()
        );

        self.alarm.configure(self.config.interval);
        self.alarm.start();
    }

    /// Alarm callback: emit one pulse
    ///
    /// The alarm is stopped for the whole pulse body and started again on
    /// every way out of this function, pin errors included.
    pub fn on_fire(&mut self) -> Result<(), P::Error> {
        self.alarm.stop();
        let _rearm = Rearm(&mut self.alarm);

        let polarity = self.config.polarity;
        let output_asserted = self.output.set_state(polarity.active());
        let monitor_asserted = self.monitor.set_state(polarity.active());
        // Only the output pin decides whether a pulse is in progress
        if output_asserted.is_ok() {
            block_for(&mut self.delay, self.config.pulse_duration);
        }
        let released = drive(&mut self.output, &mut self.monitor, polarity.idle());
        self.pulses = self.pulses.wrapping_add(1);

        output_asserted.and(monitor_asserted).and(released)
    }

    /// Number of pulses emitted so far
    pub const fn pulse_count(&self) -> u32 {
        self.pulses
    }

    pub const fn config(&self) -> &PulseConfig {
        &self.config
    }
}

/// Starts the alarm again when dropped
struct Rearm<'a, A: Alarm>(&'a mut A);

impl<A: Alarm> Drop for Rearm<'_, A> {
    fn drop(&mut self) {
        self.0.start();
    }
}
