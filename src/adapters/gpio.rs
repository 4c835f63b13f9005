//! Digital-output actuator adapters.
//!
//! Heater relays and window motor contactors are usually a single GPIO line.
//! These adapters wrap any [`embedded_hal::digital::OutputPin`] and expose it
//! through the [`Heater`] / [`WindowActuator`] ports.
//!
//! ## Pin errors
//!
//! The ports have no error channel.  A failed pin write is logged with
//! `warn!` and counted; the next regulation cycle re-issues the command
//! anyway, so a transient failure heals itself.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::{Heater, WindowActuator};

/// Electrical level that means "active" (heater on / window open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

/// Shared pin-driving core for both actuator adapters.
struct Line<P> {
    pin: P,
    polarity: Polarity,
    active: bool,
    errors: u32,
}

impl<P: OutputPin> Line<P> {
    fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            active: false,
            errors: 0,
        }
    }

    fn drive(&mut self, active: bool, what: &'static str) {
        let high = match self.polarity {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        };
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match result {
            Ok(()) => self.active = active,
            Err(e) => {
                self.errors = self.errors.saturating_add(1);
                warn!("{} pin write failed: {:?}", what, e);
            }
        }
    }
}

// ── Heater ────────────────────────────────────────────────────

/// Heater relay on a single output pin.
pub struct PinHeater<P> {
    line: Line<P>,
}

impl<P: OutputPin> PinHeater<P> {
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveHigh)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self {
            line: Line::new(pin, polarity),
        }
    }

    /// Last successfully written state.
    pub fn is_on(&self) -> bool {
        self.line.active
    }

    /// Number of pin writes that returned an error.
    pub fn error_count(&self) -> u32 {
        self.line.errors
    }

    pub fn release(self) -> P {
        self.line.pin
    }
}

impl<P: OutputPin> Heater for PinHeater<P> {
    fn turn_on(&mut self) {
        self.line.drive(true, "heater");
    }

    fn turn_off(&mut self) {
        self.line.drive(false, "heater");
    }
}

// ── Window ────────────────────────────────────────────────────

/// Window actuator on a single output pin (asserted = open).
pub struct PinWindow<P> {
    line: Line<P>,
}

impl<P: OutputPin> PinWindow<P> {
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveHigh)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self {
            line: Line::new(pin, polarity),
        }
    }

    pub fn is_open(&self) -> bool {
        self.line.active
    }

    pub fn error_count(&self) -> u32 {
        self.line.errors
    }

    pub fn release(self) -> P {
        self.line.pin
    }
}

impl<P: OutputPin> WindowActuator for PinWindow<P> {
    fn open(&mut self) {
        self.line.drive(true, "window");
    }

    fn close(&mut self) {
        self.line.drive(false, "window");
    }
}
