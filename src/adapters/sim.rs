//! In-memory simulation adapters.
//!
//! Host-side stand-ins for real peripherals.  The sensor reading lives in a
//! shared atomic so a test or host driver can change it through a
//! [`SimProbe`] while the controller holds the sensor.  The actuators keep
//! their last state and per-command counters.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::app::ports::{Heater, TemperatureSensor, WindowActuator};

// ── Sensor ────────────────────────────────────────────────────

/// Temperature sensor backed by an injectable value.
#[derive(Debug)]
pub struct SimSensor {
    reading: Arc<AtomicI32>,
    reads: u32,
}

/// Handle for injecting readings into a [`SimSensor`].
#[derive(Debug, Clone)]
pub struct SimProbe(Arc<AtomicI32>);

impl SimProbe {
    pub fn set(&self, t: i32) {
        self.0.store(t, Ordering::Relaxed);
    }

    pub fn get(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl SimSensor {
    pub fn new(initial: i32) -> Self {
        Self {
            reading: Arc::new(AtomicI32::new(initial)),
            reads: 0,
        }
    }

    pub fn probe(&self) -> SimProbe {
        SimProbe(Arc::clone(&self.reading))
    }

    pub fn read_count(&self) -> u32 {
        self.reads
    }
}

impl TemperatureSensor for SimSensor {
    fn read_temperature(&mut self) -> i32 {
        self.reads += 1;
        self.reading.load(Ordering::Relaxed)
    }
}

// ── Heater ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SimHeater {
    on: bool,
    turn_on_calls: u32,
    turn_off_calls: u32,
}

impl SimHeater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn turn_on_calls(&self) -> u32 {
        self.turn_on_calls
    }

    pub fn turn_off_calls(&self) -> u32 {
        self.turn_off_calls
    }
}

impl Heater for SimHeater {
    fn turn_on(&mut self) {
        self.on = true;
        self.turn_on_calls += 1;
    }

    fn turn_off(&mut self) {
        self.on = false;
        self.turn_off_calls += 1;
    }
}

// ── Window ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SimWindow {
    open: bool,
    open_calls: u32,
    close_calls: u32,
}

impl SimWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_calls(&self) -> u32 {
        self.open_calls
    }

    pub fn close_calls(&self) -> u32 {
        self.close_calls
    }
}

impl WindowActuator for SimWindow {
    fn open(&mut self) {
        self.open = true;
        self.open_calls += 1;
    }

    fn close(&mut self) {
        self.open = false;
        self.close_calls += 1;
    }
}
