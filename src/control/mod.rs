//! Control algorithms.

pub mod band;
