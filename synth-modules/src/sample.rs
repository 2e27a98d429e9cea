//! # Basic audio signal types

/// The type which modules talk to each other.
///
/// Rationale behind choosing f64 over f32 despite the fact that most of audio drivers work with
/// f32 is that a phase accumulator keeps adding tiny increments to its state for hours, and the
/// less is rounding error accumulation the better. Hosts convert to their native format at the
/// boundary.
pub type Sample = f64;
