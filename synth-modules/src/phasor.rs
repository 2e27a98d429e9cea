//! # Phasor
//!
//! ```text
//!  1      /|    /|    /|    /|
//!        / |   / |   / |   / |
//!       /  |  /  |  /  |  /  |
//!      /   | /   | /   | /   |
//!  0  /    |/    |/    |/    |
//! ```
//!
//! Phasor module generates a saw wave in the range 0..1. With pitch `p` it ramps `p` times per
//! second, whatever the sample rate is.
//!
//! It is called phasor because it could be used as input phase for other oscillators, which become
//! just pure transformations then and are not required to care about handling varying frequency by
//! themselves anymore.
//!
//! Pitch is read once per block: every sample of a block is extrapolated from the phase the block
//! started at, and the carried phase is advanced once, after the block. Splitting a block in two
//! therefore doesn't change the output as long as pitch stays the same.
//!
//! Sources to connect: pitch.
use registry::RegistryError;
use sample::Sample;
use unit::Unit;
use wrap::Wrap;

/// Name the phasor is registered under.
pub const NAME: &str = "phasor~";

const CONTROLS: &[&str] = &["pitch"];

pub struct Phasor {
    pitch: Sample,
    sample_period: Sample,
    phase: Sample,
    wrap: Wrap,
}

impl Phasor {
    /// Phasor at pitch 1 and phase 0 which truncates phase into a cycle.
    ///
    /// Until `configure` is called the sample period is unknown and rendering yields NaN.
    pub fn new() -> Self {
        Phasor {
            pitch: 1.0,
            sample_period: Sample::NAN,
            phase: 0.0,
            wrap: Wrap::default(),
        }
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Create phasor from creation arguments: none, or a single wrap rule (`truncate`, `floor`).
    pub fn from_args(args: &[&str]) -> Result<Self, RegistryError> {
        match args {
            [] => Ok(Phasor::new()),
            [wrap] => match wrap.parse::<Wrap>() {
                Ok(wrap) => Ok(Phasor::new().with_wrap(wrap)),
                Err(e) => Err(invalid_args(e.to_string())),
            },
            _ => Err(invalid_args(format!(
                "expected at most one argument, got {}",
                args.len()
            ))),
        }
    }

    /// Take new sample rate into account. Phase is kept as is.
    ///
    /// `sample_rate` must be positive.
    pub fn configure(&mut self, sample_rate: Sample) {
        self.sample_period = sample_rate.recip();
    }

    pub fn set_pitch(&mut self, pitch: Sample) {
        self.pitch = pitch;
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn pitch(&self) -> Sample {
        self.pitch
    }

    /// Phase the next block starts from.
    pub fn phase(&self) -> Sample {
        self.phase
    }

    pub fn sample_period(&self) -> Sample {
        self.sample_period
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    pub fn render(&mut self, out: &mut [Sample]) {
        if out.is_empty() {
            return;
        }
        let phase = self.phase;
        let sample_period = self.sample_period;
        let pitch = self.pitch;
        let wrap = self.wrap;
        for (i, sample) in out.iter_mut().enumerate() {
            *sample = wrap.apply(phase + (i as Sample * sample_period) * pitch);
        }
        self.phase = wrap.apply(phase + (out.len() as Sample * sample_period) * pitch);
    }
}

impl Default for Phasor {
    fn default() -> Self {
        Phasor::new()
    }
}

impl Unit for Phasor {
    fn controls(&self) -> &'static [&'static str] {
        CONTROLS
    }

    fn configure(&mut self, sample_rate: Sample) {
        Phasor::configure(self, sample_rate)
    }

    fn set_control(&mut self, inlet: usize, value: Sample) {
        if inlet == 0 {
            self.set_pitch(value);
        }
    }

    fn render(&mut self, out: &mut [Sample]) {
        Phasor::render(self, out)
    }

    fn reset(&mut self) {
        Phasor::reset(self)
    }
}

/// Registry constructor for `phasor~`.
pub fn construct(args: &[&str]) -> Result<Box<dyn Unit>, RegistryError> {
    Ok(Box::new(Phasor::from_args(args)?))
}

fn invalid_args(reason: String) -> RegistryError {
    RegistryError::InvalidArgs {
        unit: NAME.to_string(),
        reason,
    }
}
