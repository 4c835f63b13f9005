//! Environmental control supervisor.
//!
//! Reads an ambient temperature and drives a heater and a window so the
//! temperature stays inside a configurable band `[lower, upper]`.
//!
//! ```
//! use ecs::adapters::sim::{SimHeater, SimSensor, SimWindow};
//! use ecs::app::controller::Controller;
//!
//! let mut sensor = SimSensor::new(20);
//! let probe = sensor.probe();
//! let mut heater = SimHeater::new();
//! let mut window = SimWindow::new();
//!
//! let mut ctrl = Controller::new(&mut sensor, &mut heater, &mut window, 25, 28)?;
//! ctrl.regulate();
//! probe.set(30);
//! ctrl.regulate();
//! drop(ctrl);
//!
//! assert!(!heater.is_on());
//! assert!(window.is_open());
//! # Ok::<(), ecs::Error>(())
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;

mod error;

pub use error::{ConfigError, Error, InvalidThreshold, Result, ThresholdKind};
