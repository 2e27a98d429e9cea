//! # Control
//!
//! OSC front end for unit controls. Every control inlet is addressed by its name, e.g.
//! `/pitch 2.0`, and `/reset` brings the unit back to its initial signal state. Messages are
//! decoded on a dedicated thread and handed over to the process thread as `ControlEvent`s.
use crossbeam_channel::{Sender, TrySendError};
use rosc::{OscMessage, OscPacket, OscType};
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::thread;
use synth_modules::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Write `value` into control inlet `inlet`.
    Set { inlet: usize, value: Sample },
    /// Restart the signal.
    Reset,
}

/// Translate OSC packet into control events for a unit with `controls` inlets.
/// Bundles are flattened, everything unknown is logged and skipped.
pub fn route(packet: OscPacket, controls: &[String]) -> Vec<ControlEvent> {
    let mut events = Vec::new();
    route_into(packet, controls, &mut events);
    events
}

fn route_into(packet: OscPacket, controls: &[String], events: &mut Vec<ControlEvent>) {
    match packet {
        OscPacket::Message(msg) => {
            if let Some(event) = route_message(&msg, controls) {
                events.push(event);
            }
        }
        OscPacket::Bundle(bundle) => {
            for packet in bundle.content {
                route_into(packet, controls, events);
            }
        }
    }
}

fn route_message(msg: &OscMessage, controls: &[String]) -> Option<ControlEvent> {
    if msg.addr == "/reset" {
        return Some(ControlEvent::Reset);
    }
    let name = msg.addr.trim_start_matches('/');
    let inlet = match controls.iter().position(|control| control == name) {
        Some(inlet) => inlet,
        None => {
            debug!("OSC address {} is not a control.", msg.addr);
            return None;
        }
    };
    if msg.args.len() > 1 {
        warn!("Extra arguments to {} will be ignored.", msg.addr);
    }
    match msg.args.first() {
        Some(arg) => match number(arg) {
            Some(value) => Some(ControlEvent::Set { inlet, value }),
            None => {
                warn!("Expected number for {}, but got {:?}.", msg.addr, arg);
                None
            }
        },
        None => {
            debug!("No arguments given to {}.", msg.addr);
            None
        }
    }
}

fn number(arg: &OscType) -> Option<Sample> {
    match *arg {
        OscType::Float(x) => Some(Sample::from(x)),
        OscType::Double(x) => Some(x),
        OscType::Int(x) => Some(Sample::from(x)),
        OscType::Long(x) => Some(x as Sample),
        _ => None,
    }
}

/// Receive OSC packets from `sock` and forward routed events until the process side hangs up or
/// the socket fails.
pub fn listen(sock: UdpSocket, controls: Vec<String>, events: Sender<ControlEvent>) {
    let mut buf = [0u8; rosc::decoder::MTU];
    loop {
        match sock.recv_from(&mut buf) {
            Ok((size, _addr)) => match rosc::decoder::decode_udp(&buf[..size]) {
                Ok((_, packet)) => {
                    for event in route(packet, &controls) {
                        match events.try_send(event) {
                            Ok(()) => {}
                            Err(TrySendError::Full(event)) => {
                                warn!("Control queue is full, dropping {:?}.", event)
                            }
                            Err(TrySendError::Disconnected(_)) => {
                                info!("Unit is gone, OSC listener stops.");
                                return;
                            }
                        }
                    }
                }
                Err(e) => error!("Failed to decode OSC packet: {:?}.", e),
            },
            Err(e) => {
                error!("Error receiving from socket: {}.", e);
                break;
            }
        }
    }
}

/// Bind `address` and run `listen` on a new thread.
pub fn spawn(
    address: SocketAddr,
    controls: Vec<String>,
    events: Sender<ControlEvent>,
) -> io::Result<thread::JoinHandle<()>> {
    let sock = UdpSocket::bind(address)?;
    thread::Builder::new()
        .name("osc".to_string())
        .spawn(move || listen(sock, controls, events))
}
