//! Keep-alive scheduler reachable from an interrupt handler.
//!
//! The scheduler lives behind a `critical-section` mutex so it can sit in a
//! `static`. The firmware installs it once at startup and the alarm
//! interrupt handler calls [`SharedKeepAlive::fire`].

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::{Alarm, KeepAlive};

/// Error returned by [`SharedKeepAlive::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError<E> {
    /// The alarm fired before a scheduler was installed
    NotInstalled,
    /// A pin could not be driven; the alarm is armed regardless
    Pin(E),
}

/// A keep-alive scheduler shared between the main loop and the alarm
/// interrupt.
///
/// ```ignore
/// static KEEPALIVE: SharedKeepAlive<Timer0, Output<'static>, Delay> = SharedKeepAlive::new();
///
/// #[handler]
/// fn on_alarm() {
///     let _ = KEEPALIVE.fire();
/// }
/// ```
pub struct SharedKeepAlive<A, P, D> {
    inner: Mutex<RefCell<Option<KeepAlive<A, P, D>>>>,
}

impl<A, P, D> SharedKeepAlive<A, P, D> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<A, P, D> SharedKeepAlive<A, P, D>
where
    A: Alarm,
    P: OutputPin,
    D: DelayNs,
{
    /// Store the scheduler and start it.
    ///
    /// Replaces any scheduler installed before.
    pub fn install(&self, keepalive: KeepAlive<A, P, D>) -> Result<(), P::Error> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.insert(keepalive).start()
        })
    }

    /// Run the alarm callback.
    ///
    /// The whole pulse runs inside a critical section, so the callback can
    /// never nest and the interrupted code stays suspended until the pulse
    /// is over.
    pub fn fire(&self) -> Result<(), FireError<P::Error>> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            let Some(keepalive) = slot.as_mut() else {
                return Err(FireError::NotInstalled);
            };
            keepalive.on_fire().map_err(FireError::Pin)
        })
    }

    /// Number of pulses emitted by the installed scheduler.
    pub fn pulse_count(&self) -> Option<u32> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow()
                .as_ref()
                .map(KeepAlive::pulse_count)
        })
    }

    /// Remove the installed scheduler.
    pub fn take(&self) -> Option<KeepAlive<A, P, D>> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().take())
    }
}

impl<A, P, D> Default for SharedKeepAlive<A, P, D> {
    fn default() -> Self {
        Self::new()
    }
}
