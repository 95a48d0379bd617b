use embassy_time::Instant;
use embedded_hal::digital::OutputPin;

use super::{PulseConfig, drive};

/// Where the ticker is in its pulse cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    /// Never armed; ticks do nothing
    Disarmed,
    /// Waiting for the next pulse
    Armed { deadline: Instant },
    /// Pins are at the active level
    Active { release_at: Instant, next: Instant },
}

/// Pin transition performed by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseEdge {
    Assert,
    Release,
}

/// Clock-driven keep-alive pulse
///
/// Never blocks: the pulse is split into an assert edge and a release edge,
/// each produced by the first [`PulseTicker::tick`] at or after its
/// deadline. The caller sleeps until [`PulseTicker::next_deadline`] in
/// between, so the ticker can share an executor or a thread with other work,
/// or run next to the strip renderer without any synchronization.
pub struct PulseTicker<P> {
    output: P,
    monitor: P,
    config: PulseConfig,
    phase: PulsePhase,
    pulses: u32,
}

impl<P: OutputPin> PulseTicker<P> {
    pub const fn new(output: P, monitor: P, config: PulseConfig) -> Self {
        Self {
            output,
            monitor,
            config,
            phase: PulsePhase::Disarmed,
            pulses: 0,
        }
    }

    /// Release both pins and schedule the first pulse one interval from now
    ///
    /// The ticker is armed even if a pin could not be released.
    pub fn arm(&mut self, now: Instant) -> Result<(), P::Error> {
        self.phase = PulsePhase::Armed {
            deadline: now + self.config.interval,
        };
        drive(&mut self.output, &mut self.monitor, self.config.polarity.idle())
    }

    /// Advance the pulse cycle to `now`
    ///
    /// Pulse starts stay on a fixed grid of one interval. A tick that comes
    /// more than a whole interval late restarts the grid from `now` instead
    /// of firing the missed pulses back to back.
    ///
    /// The phase moves on before the pins are driven, so a pin error never
    /// stalls the cycle.
    pub fn tick(&mut self, now: Instant) -> Result<Option<PulseEdge>, P::Error> {
        let polarity = self.config.polarity;
        match self.phase {
            PulsePhase::Armed { deadline } if now >= deadline => {
                let mut next = deadline + self.config.interval;
                if next <= now {
                    next = now + self.config.interval;
                }
                self.phase = PulsePhase::Active {
                    release_at: now + self.config.pulse_duration,
                    next,
                };
                self.pulses = self.pulses.wrapping_add(1);
                drive(&mut self.output, &mut self.monitor, polarity.active())
                    .map(|()| Some(PulseEdge::Assert))
            }
            PulsePhase::Active { release_at, next } if now >= release_at => {
                self.phase = PulsePhase::Armed { deadline: next };
                drive(&mut self.output, &mut self.monitor, polarity.idle())
                    .map(|()| Some(PulseEdge::Release))
            }
            PulsePhase::Disarmed | PulsePhase::Armed { .. } | PulsePhase::Active { .. } => {
                Ok(None)
            }
        }
    }

    /// When the next edge is due, if armed
    pub const fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            PulsePhase::Disarmed => None,
            PulsePhase::Armed { deadline } => Some(deadline),
            PulsePhase::Active { release_at, .. } => Some(release_at),
        }
    }

    pub const fn phase(&self) -> PulsePhase {
        self.phase
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.phase, PulsePhase::Active { .. })
    }

    /// Number of pulses started so far
    pub const fn pulse_count(&self) -> u32 {
        self.pulses
    }
}
