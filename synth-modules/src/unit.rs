//! # Unit
//!
//! What a host needs from a module to run it inside a processing graph. Construction goes through
//! the [`Registry`](../registry/struct.Registry.html), release is `Drop`.
use sample::Sample;

pub trait Unit: Send {
    /// Names of control inlets in inlet order. Hosts expose one control input per name.
    fn controls(&self) -> &'static [&'static str];

    /// Called whenever the host (re)starts processing at `sample_rate` Hz.
    ///
    /// Hosts guarantee `sample_rate > 0`.
    fn configure(&mut self, sample_rate: Sample);

    /// Write a control value straight into inlet `inlet`. Unknown inlets are ignored.
    fn set_control(&mut self, inlet: usize, value: Sample);

    /// Fill the whole of `out` with the next block of signal.
    fn render(&mut self, out: &mut [Sample]);

    /// Return to the initial signal state, keeping controls and sample rate.
    fn reset(&mut self) {}
}
