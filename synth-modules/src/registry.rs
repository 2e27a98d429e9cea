//! # Registry
//!
//! Table of unit types a host can instantiate by name, e.g. `phasor~`.
//! Fill it once at startup with [`register_standard_units`] and construct units from it afterwards.
use fnv::FnvHashMap;
use phasor;
use std::error::Error;
use std::fmt;
use unit::Unit;

/// Build a unit from its creation arguments.
pub type Constructor = fn(&[&str]) -> Result<Box<dyn Unit>, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No unit type is registered under this name.
    UnknownUnit(String),
    /// Unit type exists but refused its creation arguments.
    InvalidArgs { unit: String, reason: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegistryError::UnknownUnit(name) => write!(f, "unit `{}` is not registered", name),
            RegistryError::InvalidArgs { unit, reason } => {
                write!(f, "invalid arguments for `{}`: {}", unit, reason)
            }
        }
    }
}

impl Error for RegistryError {}

#[derive(Default)]
pub struct Registry {
    units: FnvHashMap<&'static str, Constructor>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            units: FnvHashMap::default(),
        }
    }

    /// Registry with every unit shipped in this crate.
    pub fn standard() -> Self {
        let mut registry = Registry::new();
        register_standard_units(&mut registry);
        registry
    }

    /// Register `constructor` under `name`.
    /// Return the constructor previously registered under the same name, if any.
    pub fn register(&mut self, name: &'static str, constructor: Constructor) -> Option<Constructor> {
        self.units.insert(name, constructor)
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.units.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Instantiate unit `name` with creation arguments `args`.
    pub fn construct(&self, name: &str, args: &[&str]) -> Result<Box<dyn Unit>, RegistryError> {
        match self.units.get(name) {
            Some(constructor) => constructor(args),
            None => Err(RegistryError::UnknownUnit(name.to_string())),
        }
    }
}

pub fn register_standard_units(registry: &mut Registry) {
    registry.register(phasor::NAME, phasor::construct);
}
