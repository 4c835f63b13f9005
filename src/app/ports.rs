//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   TemperatureSensor ──▶ ┌────────────┐ ──▶ Heater
//!                         │ Controller │
//!                         └────────────┘ ──▶ WindowActuator
//! ```
//!
//! Driven adapters implement these traits.  The
//! [`Controller`](super::controller::Controller) consumes them via generics,
//! so the domain core never touches hardware directly.
//!
//! The ports have no error channel.  An adapter that can fail decides for
//! itself whether to log and carry on or to panic.
//!
//! Each trait is implemented for `&mut T` and `Box<T>`, so a caller can lend
//! a collaborator to the controller and keep ownership of it.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain the ambient temperature.
pub trait TemperatureSensor {
    /// Current reading, in the same unit as the controller thresholds.
    fn read_temperature(&mut self) -> i32;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Heater on/off switch.  Commands must be idempotent.
pub trait Heater {
    fn turn_on(&mut self);

    fn turn_off(&mut self);
}

/// Window actuator.  Commands must be idempotent.
pub trait WindowActuator {
    fn open(&mut self);

    fn close(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Forwarding impls
// ───────────────────────────────────────────────────────────────

impl<T: TemperatureSensor + ?Sized> TemperatureSensor for &mut T {
    fn read_temperature(&mut self) -> i32 {
        (**self).read_temperature()
    }
}

impl<T: TemperatureSensor + ?Sized> TemperatureSensor for Box<T> {
    fn read_temperature(&mut self) -> i32 {
        (**self).read_temperature()
    }
}

impl<T: Heater + ?Sized> Heater for &mut T {
    fn turn_on(&mut self) {
        (**self).turn_on();
    }

    fn turn_off(&mut self) {
        (**self).turn_off();
    }
}

impl<T: Heater + ?Sized> Heater for Box<T> {
    fn turn_on(&mut self) {
        (**self).turn_on();
    }

    fn turn_off(&mut self) {
        (**self).turn_off();
    }
}

impl<T: WindowActuator + ?Sized> WindowActuator for &mut T {
    fn open(&mut self) {
        (**self).open();
    }

    fn close(&mut self) {
        (**self).close();
    }
}

impl<T: WindowActuator + ?Sized> WindowActuator for Box<T> {
    fn open(&mut self) {
        (**self).open();
    }

    fn close(&mut self) {
        (**self).close();
    }
}
