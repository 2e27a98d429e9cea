//! # Phasor
//!
//! Ramp in [0, 1) at `pitch` cycles per second and write it into the `phase` port.
//!
//! Pitch comes from the `pitch` port while it is connected (read once per block), from OSC
//! `/pitch` messages when `--osc` is given, or stays at its initial value (`--pitch`, config,
//! 1.0). `/reset` restarts the ramp. Pass `floor` as an argument to keep descending ramps
//! (negative pitch) inside [0, 1).

#[macro_use]
extern crate clap;
extern crate crossbeam_channel;
extern crate jack;
extern crate jack_modules;
#[macro_use]
extern crate slog;
#[macro_use]
extern crate slog_scope;
extern crate synth_modules;

use clap::{App, Arg};
use crossbeam_channel::bounded;
use jack_modules::config::{Config, Overrides};
use jack_modules::control;
use jack_modules::host::{UnitProcess, UnitRunner};
use jack_modules::logging;
use jack_modules::notification::Notification;
use synth_modules::phasor;
use synth_modules::prelude::*;

pub fn main() {
    let matches = App::new("Phasor")
        .version(crate_version!())
        .author("Ruslan Prokopchuk <fer.obbee@gmail.com>")
        .about("Generate phase in [0, 1) interval at the input pitch")
        .arg(
            Arg::with_name("NAME")
                .long("name")
                .help("Client name")
                .takes_value(true),
        ).arg(
            Arg::with_name("CONFIG")
                .long("config")
                .help("Config file")
                .takes_value(true),
        ).arg(
            Arg::with_name("PITCH")
                .long("pitch")
                .help("Initial pitch, cycles per second")
                .allow_hyphen_values(true)
                .takes_value(true),
        ).arg(
            Arg::with_name("OSC")
                .long("osc")
                .help("Address to listen for OSC messages")
                .takes_value(true),
        ).arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        ).arg(
            Arg::with_name("ARGS")
                .help("Creation arguments: `truncate` (default) or `floor` wrap")
                .multiple(true),
        ).get_matches();

    let _guard = logging::init(matches.occurrences_of("v")).expect("Failed to build logger.");

    let config = match matches.value_of("CONFIG") {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            error!("{}", e);
            panic!("Failed to load config file.");
        }),
        None => Config::default(),
    };

    let pitch = matches.value_of("PITCH").map(|pitch| {
        pitch.parse::<Sample>().unwrap_or_else(|e| {
            error!("Pitch `{}`: {}", pitch, e);
            panic!("Pitch must be a number.");
        })
    });
    let config = config.merge(Overrides {
        name: matches.value_of("NAME").map(String::from),
        args: matches
            .values_of("ARGS")
            .map(|args| args.map(String::from).collect()),
        controls: pitch.map(|p| ("pitch".to_string(), p)).into_iter().collect(),
        osc: matches.value_of("OSC").map(String::from),
    });

    let name = config
        .name
        .clone()
        .expect("Client name must be given with --name or in config");

    let registry = Registry::standard();
    debug!("Registered units: {}.", registry.names().join(", "));
    let mut unit = registry
        .construct(phasor::NAME, &config.args())
        .unwrap_or_else(|e| {
            error!("{}", e);
            panic!("Failed to create {}.", phasor::NAME);
        });
    for control in config.unknown_controls(unit.controls()) {
        warn!("{} has no control `{}`, ignoring it.", phasor::NAME, control);
    }
    for (inlet, control) in unit.controls().iter().enumerate() {
        if let Some(&value) = config.controls.get(*control) {
            unit.set_control(inlet, value);
        }
    }
    let controls = unit
        .controls()
        .iter()
        .map(|control| control.to_string())
        .collect::<Vec<_>>();

    let (client, _status) = jack::Client::new(
        &name,
        jack::ClientOptions::NO_START_SERVER | jack::ClientOptions::USE_EXACT_NAME,
    ).expect("Failed to connect to JACK");

    unit.configure(client.sample_rate() as Sample);

    let (sample_rates_tx, sample_rates_rx) = bounded(16);
    let (events_tx, events_rx) = bounded(64);

    let runner = UnitRunner::new(
        unit,
        client.buffer_size() as usize,
        sample_rates_rx,
        events_rx,
    );
    let process = UnitProcess::new(&client, runner, "phase").expect("Failed to register ports");

    let address = config.osc_address().unwrap_or_else(|e| {
        error!("{}", e);
        panic!("Failed to parse OSC address.");
    });
    if let Some(address) = address {
        control::spawn(address, controls, events_tx).expect("Failed to bind socket.");
        info!("Listening for OSC messages on {}.", address);
    }

    let (notification, is_alive) = Notification::new(sample_rates_tx);
    let active_client = client
        .activate_async(notification, process)
        .expect("Failed to activate client");
    info!("Client `{}` is running.", name);

    assert!(is_alive.recv().is_err());

    active_client.deactivate().expect("Failed to deactivate client");
}
