//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter | Implements               | Connects to                    |
//! |---------|--------------------------|--------------------------------|
//! | `gpio`  | Heater, WindowActuator   | `embedded-hal` output pins     |
//! | `sim`   | TemperatureSensor,       | In-memory state (host / tests) |
//! |         | Heater, WindowActuator   |                                |

pub mod gpio;
pub mod sim;
