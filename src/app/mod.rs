//! Application core: pure domain logic, zero I/O.
//!
//! The [`controller`] holds the business rule: keep the temperature inside
//! the band by switching the heater and the window.  All interaction with
//! hardware happens through the **port traits** in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod controller;
pub mod ports;
