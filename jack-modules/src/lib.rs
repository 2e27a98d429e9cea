//! # JACK modules
//!
//! Harness to run backend-agnostic DSP units from synth-modules as JACK clients: ports, control
//! input over OSC, sample rate notifications, config and logging.
extern crate crossbeam_channel;
extern crate jack;
extern crate rosc;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate slog;
#[macro_use]
extern crate slog_scope;
extern crate sloggers;
extern crate synth_modules;
extern crate toml;
extern crate void;

pub mod config;
pub mod control;
pub mod host;
pub mod logging;
pub mod notification;
