//! # Config
//!
//! Settings of a module process. Read from a TOML file, then overridden from the command line:
//!
//! ```toml
//! name = "phasor"
//! args = ["floor"]
//! osc = "127.0.0.1:7771"
//!
//! [controls]
//! pitch = 2.0
//! ```
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::io;
use std::net::{AddrParseError, SocketAddr};
use std::path::Path;
use synth_modules::sample::Sample;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JACK client name.
    pub name: Option<String>,
    /// Creation arguments of the unit, e.g. `["floor"]` for phasor~.
    pub args: Vec<String>,
    /// Initial values of control inlets, by inlet name.
    pub controls: BTreeMap<String, Sample>,
    /// Address to listen for OSC control messages. OSC is off when not set.
    pub osc: Option<String>,
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    /// Replaces config args as a whole when given.
    pub args: Option<Vec<String>>,
    /// Merged into config controls one by one.
    pub controls: Vec<(String, Sample)>,
    pub osc: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Address(String, AddrParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {}", e),
            ConfigError::Address(address, e) => {
                write!(f, "failed to parse address `{}`: {}", address, e)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Address(_, e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path)?;
        Config::from_toml(&s)
    }

    pub fn merge(mut self, overrides: Overrides) -> Self {
        if overrides.name.is_some() {
            self.name = overrides.name;
        }
        if let Some(args) = overrides.args {
            self.args = args;
        }
        self.controls.extend(overrides.controls);
        if overrides.osc.is_some() {
            self.osc = overrides.osc;
        }
        self
    }

    /// Creation arguments in the form unit constructors take them.
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }

    pub fn osc_address(&self) -> Result<Option<SocketAddr>, ConfigError> {
        match self.osc {
            Some(ref address) => address
                .parse()
                .map(Some)
                .map_err(|e| ConfigError::Address(address.to_owned(), e)),
            None => Ok(None),
        }
    }

    /// Names in `controls` which are not among `known` inlets.
    pub fn unknown_controls(&self, known: &[&str]) -> Vec<&str> {
        self.controls
            .keys()
            .map(String::as_str)
            .filter(|name| !known.contains(name))
            .collect()
    }
}
