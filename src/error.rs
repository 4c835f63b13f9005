//! Unified error types for the environmental control supervisor.
//!
//! The regulation core has exactly one failure mode: a threshold update that
//! would break `lower <= upper`.  Configuration adds parse and encode failures
//! on top of that.  All variants are `Copy` so they can be returned from
//! setters and stored by callers without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Threshold errors
// ---------------------------------------------------------------------------

/// Which side of the band a rejected value was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    Lower,
    Upper,
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => write!(f, "lower"),
            Self::Upper => write!(f, "upper"),
        }
    }
}

/// A threshold value was rejected because it would leave `lower > upper`.
///
/// `limit` is the opposing threshold the value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidThreshold {
    pub kind: ThresholdKind,
    pub requested: i32,
    pub limit: i32,
}

impl InvalidThreshold {
    pub const fn lower(requested: i32, upper: i32) -> Self {
        Self {
            kind: ThresholdKind::Lower,
            requested,
            limit: upper,
        }
    }

    pub const fn upper(requested: i32, lower: i32) -> Self {
        Self {
            kind: ThresholdKind::Upper,
            requested,
            limit: lower,
        }
    }
}

impl fmt::Display for InvalidThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ThresholdKind::Lower => write!(
                f,
                "lower threshold {} must be <= upper threshold {}",
                self.requested, self.limit
            ),
            ThresholdKind::Upper => write!(
                f,
                "upper threshold {} must be >= lower threshold {}",
                self.requested, self.limit
            ),
        }
    }
}

impl std::error::Error for InvalidThreshold {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The input was not a well-formed configuration document.
    Parse,
    /// The configuration could not be serialised.
    Encode,
    /// The document parsed but the threshold pair is inconsistent.
    Threshold(InvalidThreshold),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "malformed configuration"),
            Self::Encode => write!(f, "configuration encode failed"),
            Self::Threshold(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse | Self::Encode => None,
            Self::Threshold(e) => Some(e),
        }
    }
}

impl From<InvalidThreshold> for ConfigError {
    fn from(e: InvalidThreshold) -> Self {
        Self::Threshold(e)
    }
}

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A threshold update would violate `lower <= upper`.
    InvalidThreshold(InvalidThreshold),
    /// Configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold(e) => write!(f, "threshold: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidThreshold(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<InvalidThreshold> for Error {
    fn from(e: InvalidThreshold) -> Self {
        Self::InvalidThreshold(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
