//! # Synth modules
//!
//! Collection of backend-agnostic DSP modules together with the table hosts use to instantiate
//! them by name. Nothing here touches audio drivers, threads or files.
extern crate fnv;

pub mod phasor;
pub mod prelude;
pub mod registry;
pub mod sample;
pub mod unit;
pub mod wrap;
