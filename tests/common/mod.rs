//! Shared fakes for the integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};
use myrtio_strip_keepalive::{Alarm, Duration, OutputDriver, Rgb};

// ============================================================================
// Strip output
// ============================================================================

/// Driver that keeps a copy of every flushed frame
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

// ============================================================================
// Clock and event log
// ============================================================================

/// Simulated time in microseconds
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now(&self) -> u64 {
        self.0.get()
    }

    pub fn set(&self, micros: u64) {
        self.0.set(micros);
    }

    pub fn advance(&self, micros: u64) {
        self.0.set(self.0.get() + micros);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure { period_us: u64 },
    AlarmStart,
    AlarmStop,
    Pin { name: &'static str, high: bool },
    Delay { micros: u64 },
}

/// Timestamped events shared by every fake
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<(u64, Event)>>>);

impl EventLog {
    pub fn record(&self, at: u64, event: Event) {
        self.0.borrow_mut().push((at, event));
    }

    pub fn events(&self) -> Vec<(u64, Event)> {
        self.0.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<Event> {
        self.0.borrow().iter().map(|(_, event)| *event).collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ============================================================================
// Delay
// ============================================================================

/// Delay that advances the clock instead of sleeping
#[derive(Clone, Default)]
pub struct FakeDelay {
    pub clock: Clock,
    pub log: EventLog,
}

impl FakeDelay {
    pub fn new(clock: Clock, log: EventLog) -> Self {
        Self { clock, log }
    }

    /// Sum of all recorded delays
    pub fn total_micros(&self) -> u64 {
        self.log
            .kinds()
            .iter()
            .map(|event| match event {
                Event::Delay { micros } => *micros,
                _ => 0,
            })
            .sum()
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        let micros = u64::from(ns).div_ceil(1000);
        self.log.record(self.clock.now(), Event::Delay { micros });
        self.clock.advance(micros);
    }

    fn delay_us(&mut self, us: u32) {
        let micros = u64::from(us);
        self.log.record(self.clock.now(), Event::Delay { micros });
        self.clock.advance(micros);
    }
}

// ============================================================================
// Pins
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that logs every level change
pub struct FakePin {
    name: &'static str,
    clock: Clock,
    log: EventLog,
    failing: Rc<Cell<bool>>,
}

impl FakePin {
    pub fn new(name: &'static str, clock: Clock, log: EventLog) -> Self {
        Self {
            name,
            clock,
            log,
            failing: Rc::new(Cell::new(false)),
        }
    }

    /// Handle that makes the pin fail (or recover) from the outside
    pub fn fault_switch(&self) -> Rc<Cell<bool>> {
        self.failing.clone()
    }

    fn set(&mut self, high: bool) -> Result<(), PinFault> {
        if self.failing.get() {
            return Err(PinFault);
        }
        self.log.record(
            self.clock.now(),
            Event::Pin {
                name: self.name,
                high,
            },
        );
        Ok(())
    }
}

impl ErrorType for FakePin {
    type Error = PinFault;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

// ============================================================================
// Alarm
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmState {
    pub period_us: u64,
    /// Next expiration, set by `configure`
    pub due: Option<u64>,
    pub enabled: bool,
}

/// Auto-reloading alarm; the test drives expirations through [`AlarmHandle`]
pub struct FakeAlarm {
    state: Rc<RefCell<AlarmState>>,
    clock: Clock,
    log: EventLog,
}

/// Test-side view of a [`FakeAlarm`]
#[derive(Clone)]
pub struct AlarmHandle {
    state: Rc<RefCell<AlarmState>>,
    clock: Clock,
}

impl FakeAlarm {
    pub fn new(clock: Clock, log: EventLog) -> (Self, AlarmHandle) {
        let state = Rc::new(RefCell::new(AlarmState::default()));
        let handle = AlarmHandle {
            state: state.clone(),
            clock: clock.clone(),
        };
        (Self { state, clock, log }, handle)
    }
}

impl Alarm for FakeAlarm {
    fn configure(&mut self, period: Duration) {
        let period_us = period.as_micros();
        let mut state = self.state.borrow_mut();
        state.period_us = period_us;
        state.due = Some(self.clock.now() + period_us);
        self.log
            .record(self.clock.now(), Event::Configure { period_us });
    }

    fn start(&mut self) {
        self.state.borrow_mut().enabled = true;
        self.log.record(self.clock.now(), Event::AlarmStart);
    }

    fn stop(&mut self) {
        self.state.borrow_mut().enabled = false;
        self.log.record(self.clock.now(), Event::AlarmStop);
    }
}

impl AlarmHandle {
    pub fn state(&self) -> AlarmState {
        *self.state.borrow()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    /// Move the clock to the next expiration if it is not later than `end`
    ///
    /// Reloads the countdown and returns whether the callback should run.
    /// Returns `None` once the next expiration is past `end`.
    pub fn expire_next(&self, end: u64) -> Option<bool> {
        let mut state = self.state.borrow_mut();
        let due = state.due?;
        if due > end {
            return None;
        }
        if self.clock.now() < due {
            self.clock.set(due);
        }
        state.due = Some(due + state.period_us);
        Some(state.enabled)
    }
}
