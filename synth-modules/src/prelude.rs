//! # Prelude
//!
//! Essentially is re-export of all DSP modules in the library.
pub use phasor::Phasor;
pub use registry::{register_standard_units, Constructor, Registry, RegistryError};
pub use sample::Sample;
pub use unit::Unit;
pub use wrap::Wrap;
