//! # Wrap
//!
//! Rules which fold an unbounded phase back into a single cycle.
use sample::Sample;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How a phase which left the [0, 1) interval is folded back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// Fractional part by truncation, `x - trunc(x)`.
    ///
    /// Agrees with `Floor` for non-negative `x` only. Negative input lands in (-1, 0], so a
    /// descending ramp drifts below zero instead of wrapping around.
    Truncate,
    /// Fractional part by flooring, `x - floor(x)`. Always in [0, 1) for finite input.
    Floor,
}

impl Wrap {
    #[inline]
    pub fn apply(self, x: Sample) -> Sample {
        match self {
            Wrap::Truncate => x.fract(),
            Wrap::Floor => {
                let y = x - x.floor();
                // -1e-17 - floor(-1e-17) rounds to exactly 1.0
                if y >= 1.0 {
                    0.0
                } else {
                    y
                }
            }
        }
    }
}

impl Default for Wrap {
    fn default() -> Self {
        Wrap::Truncate
    }
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Wrap::Truncate => write!(f, "truncate"),
            Wrap::Floor => write!(f, "floor"),
        }
    }
}

/// Text which names no known wrap rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWrapError(pub String);

impl fmt::Display for ParseWrapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown wrap rule `{}` (expected `truncate` or `floor`)",
            self.0
        )
    }
}

impl Error for ParseWrapError {}

impl FromStr for Wrap {
    type Err = ParseWrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" | "trunc" => Ok(Wrap::Truncate),
            "floor" | "floored" => Ok(Wrap::Floor),
            _ => Err(ParseWrapError(s.to_string())),
        }
    }
}
