//! Temperature band and the regulation decision.
//!
//! A [`Band`] is the closed interval `[lower, upper]`.  Its fields are
//! private and every constructor checks `lower <= upper`, so holding a
//! `Band` is proof the invariant holds.  [`decide`] maps a reading onto the
//! band and returns the actuator commands for that zone.

use crate::error::InvalidThreshold;

/// Acceptable temperature range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    lower: i32,
    upper: i32,
}

impl Band {
    /// Validate the pair together before building the band.
    pub const fn new(lower: i32, upper: i32) -> Result<Self, InvalidThreshold> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(InvalidThreshold::lower(lower, upper))
        }
    }

    pub const fn lower(&self) -> i32 {
        self.lower
    }

    pub const fn upper(&self) -> i32 {
        self.upper
    }

    /// Same band with a new lower end; rejected if it would pass `upper`.
    pub const fn with_lower(self, lower: i32) -> Result<Self, InvalidThreshold> {
        if lower <= self.upper {
            Ok(Self { lower, ..self })
        } else {
            Err(InvalidThreshold::lower(lower, self.upper))
        }
    }

    /// Same band with a new upper end; rejected if it would fall below `lower`.
    pub const fn with_upper(self, upper: i32) -> Result<Self, InvalidThreshold> {
        if upper >= self.lower {
            Ok(Self { upper, ..self })
        } else {
            Err(InvalidThreshold::upper(upper, self.lower))
        }
    }

    pub const fn classify(&self, t: i32) -> Zone {
        if t < self.lower {
            Zone::Below
        } else if t > self.upper {
            Zone::Above
        } else {
            Zone::InBand
        }
    }
}

/// Where a reading falls relative to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Below,
    InBand,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterCommand {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Open,
    Close,
}

/// The pair of commands issued for one regulation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regulation {
    pub zone: Zone,
    pub heater: HeaterCommand,
    pub window: WindowCommand,
}

impl Zone {
    pub const fn regulation(self) -> Regulation {
        let (heater, window) = match self {
            Zone::Below => (HeaterCommand::On, WindowCommand::Close),
            Zone::InBand => (HeaterCommand::Off, WindowCommand::Close),
            Zone::Above => (HeaterCommand::Off, WindowCommand::Open),
        };
        Regulation {
            zone: self,
            heater,
            window,
        }
    }
}

/// Pure regulation decision for reading `t`.
pub const fn decide(t: i32, band: &Band) -> Regulation {
    band.classify(t).regulation()
}
