//! # Notification
//!
//! JACK notification handler which allows to block thread until client is shut down, and which
//! forwards sample rate changes to the process thread.
use crossbeam_channel::{bounded, Receiver, Sender};
use synth_modules::sample::Sample;
use void::Void;

pub struct Notification {
    /// Dropping this sender would signal that client is shut down
    is_alive: Option<Sender<Void>>,
    /// New sample rates, picked up by the process thread at the start of the next block.
    sample_rates: Sender<Sample>,
}

impl Notification {
    /// Create new notification handler and return receiver which blocks until client is shut down
    pub fn new(sample_rates: Sender<Sample>) -> (Self, Receiver<Void>) {
        let (tx, rx) = bounded(0);
        (
            Notification {
                is_alive: Some(tx),
                sample_rates,
            },
            rx,
        )
    }

    fn sample_rate_changed(&mut self, sample_rate: Sample) {
        info!("Sample rate is {} Hz.", sample_rate);
        if self.sample_rates.try_send(sample_rate).is_err() {
            warn!("Sample rate {} Hz was not delivered to the process thread.", sample_rate);
        }
    }
}

impl jack::NotificationHandler for Notification {
    unsafe fn shutdown(&mut self, _status: jack::ClientStatus, _reason: &str) {
        self.is_alive = None;
    }

    fn sample_rate(&mut self, _: &jack::Client, srate: jack::Frames) -> jack::Control {
        self.sample_rate_changed(Sample::from(srate));
        jack::Control::Continue
    }
}
