//! Controller: the hexagonal core.
//!
//! [`Controller`] owns the temperature [`Band`] and the three collaborators.
//! Every call to [`Controller::regulate`] takes one reading and issues
//! exactly one heater command and one window command.  Nothing about the
//! previous cycle is remembered.
//!
//! ```text
//!  TemperatureSensor ──▶ ┌──────────────┐ ──▶ Heater
//!                        │  Controller  │
//!                        │  band: [l,u] │ ──▶ WindowActuator
//!                        └──────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::control::band::{self, Band, HeaterCommand, Regulation, WindowCommand};
use crate::error::InvalidThreshold;

use super::ports::{Heater, TemperatureSensor, WindowActuator};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// Keeps the ambient temperature inside `[lower_threshold, upper_threshold]`.
pub struct Controller<S, H, W> {
    sensor: S,
    heater: H,
    window: W,
    band: Band,
}

impl<S, H, W> Controller<S, H, W>
where
    S: TemperatureSensor,
    H: Heater,
    W: WindowActuator,
{
    /// Build a controller around the three collaborators.
    ///
    /// Both thresholds are checked together before either is stored.
    pub fn new(
        sensor: S,
        heater: H,
        window: W,
        lower_threshold: i32,
        upper_threshold: i32,
    ) -> Result<Self, InvalidThreshold> {
        let band = Band::new(lower_threshold, upper_threshold).inspect_err(|e| {
            warn!("Controller rejected initial thresholds: {}", e);
        })?;
        info!("Controller created with band [{}, {}]", band.lower(), band.upper());
        Ok(Self {
            sensor,
            heater,
            window,
            band,
        })
    }

    /// Build a controller from a loaded configuration.
    pub fn from_config(
        sensor: S,
        heater: H,
        window: W,
        config: &ControllerConfig,
    ) -> crate::Result<Self> {
        let band = config.band()?;
        Self::new(sensor, heater, window, band.lower(), band.upper()).map_err(Into::into)
    }

    // ── Regulation ────────────────────────────────────────────

    /// Run one control cycle: read the sensor, then command heater and window.
    ///
    /// Both commands are issued every cycle, even if the actuator is
    /// presumably already in that state.
    pub fn regulate(&mut self) -> Regulation {
        let t = self.sensor.read_temperature();
        let regulation = band::decide(t, &self.band);

        match regulation.heater {
            HeaterCommand::On => self.heater.turn_on(),
            HeaterCommand::Off => self.heater.turn_off(),
        }
        match regulation.window {
            WindowCommand::Open => self.window.open(),
            WindowCommand::Close => self.window.close(),
        }

        debug!(
            "REG | T={} band=[{}, {}] zone={:?} heater={:?} window={:?}",
            t,
            self.band.lower(),
            self.band.upper(),
            regulation.zone,
            regulation.heater,
            regulation.window,
        );
        regulation
    }

    // ── Thresholds ────────────────────────────────────────────

    pub fn lower_threshold(&self) -> i32 {
        self.band.lower()
    }

    pub fn upper_threshold(&self) -> i32 {
        self.band.upper()
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// Accepted only if `value <= upper_threshold`; unchanged otherwise.
    pub fn set_lower_threshold(&mut self, value: i32) -> Result<(), InvalidThreshold> {
        let band = self.band.with_lower(value);
        self.commit(band)
    }

    /// Accepted only if `value >= lower_threshold`; unchanged otherwise.
    pub fn set_upper_threshold(&mut self, value: i32) -> Result<(), InvalidThreshold> {
        let band = self.band.with_upper(value);
        self.commit(band)
    }

    /// Replace both thresholds in one step.
    ///
    /// Unlike two separate setter calls this can move the band past its
    /// current position, e.g. from `[25, 28]` to `[30, 35]`.
    pub fn set_thresholds(&mut self, lower: i32, upper: i32) -> Result<(), InvalidThreshold> {
        let band = Band::new(lower, upper);
        self.commit(band)
    }

    pub fn apply_config(&mut self, config: &ControllerConfig) -> Result<(), InvalidThreshold> {
        self.set_thresholds(config.lower_threshold, config.upper_threshold)
    }

    pub fn config(&self) -> ControllerConfig {
        ControllerConfig::from(self.band)
    }

    // ── Collaborators ─────────────────────────────────────────

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn heater(&self) -> &H {
        &self.heater
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn heater_mut(&mut self) -> &mut H {
        &mut self.heater
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Tear down the controller and hand back the collaborators.
    pub fn into_parts(self) -> (S, H, W) {
        (self.sensor, self.heater, self.window)
    }

    // ── Internal ──────────────────────────────────────────────

    fn commit(&mut self, band: Result<Band, InvalidThreshold>) -> Result<(), InvalidThreshold> {
        match band {
            Ok(band) => {
                info!(
                    "Thresholds updated: [{}, {}] -> [{}, {}]",
                    self.band.lower(),
                    self.band.upper(),
                    band.lower(),
                    band.upper()
                );
                self.band = band;
                Ok(())
            }
            Err(e) => {
                warn!("Threshold update rejected: {}", e);
                Err(e)
            }
        }
    }
}
