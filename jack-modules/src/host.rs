//! # Host
//!
//! Run a unit inside JACK process callback.
//!
//! Everything which reaches the unit from other threads (sample rate changes, OSC control events)
//! comes through channels and is applied at the start of a block, so the unit itself is only ever
//! touched by the process thread. Control ports are sampled once per block, at their first frame,
//! and only while something is connected to them.
use control::ControlEvent;
use crossbeam_channel::Receiver;
use synth_modules::sample::Sample;
use synth_modules::unit::Unit;

/// Backend-independent part of the process callback.
pub struct UnitRunner {
    unit: Box<dyn Unit>,
    /// Unit renders into this buffer first, then samples are converted to f32.
    scratch: Vec<Sample>,
    sample_rates: Receiver<Sample>,
    events: Receiver<ControlEvent>,
}

impl UnitRunner {
    pub fn new(
        unit: Box<dyn Unit>,
        max_block: usize,
        sample_rates: Receiver<Sample>,
        events: Receiver<ControlEvent>,
    ) -> Self {
        UnitRunner {
            unit,
            scratch: vec![0.0; max_block],
            sample_rates,
            events,
        }
    }

    pub fn controls(&self) -> &'static [&'static str] {
        self.unit.controls()
    }

    /// Make room for blocks of `frames` frames. Call outside of the process callback.
    pub fn reserve(&mut self, frames: usize) {
        if self.scratch.len() < frames {
            self.scratch.resize(frames, 0.0);
        }
    }

    /// Render one block into `out`.
    ///
    /// Pending sample rate changes are applied first, then queued control events, then `inputs`
    /// (one entry per control inlet, `None` for inlets without a connected port).
    pub fn process(&mut self, inputs: &[Option<f32>], out: &mut [f32]) {
        for sample_rate in self.sample_rates.try_iter() {
            self.unit.configure(sample_rate);
        }
        for event in self.events.try_iter() {
            match event {
                ControlEvent::Set { inlet, value } => self.unit.set_control(inlet, value),
                ControlEvent::Reset => self.unit.reset(),
            }
        }
        for (inlet, input) in inputs.iter().enumerate() {
            if let Some(value) = *input {
                self.unit.set_control(inlet, Sample::from(value));
            }
        }
        // Only reallocates if JACK handed over a block bigger than announced.
        self.reserve(out.len());
        let block = &mut self.scratch[..out.len()];
        self.unit.render(block);
        for (y, x) in out.iter_mut().zip(block.iter()) {
            // Phase just below 1 rounds up to 1.0 in f32, which belongs to the next cycle.
            let narrowed = *x as f32;
            *y = if narrowed >= 1.0 { 0.0 } else { narrowed };
        }
    }
}

/// JACK process handler: one input port per unit control, one output port.
pub struct UnitProcess {
    runner: UnitRunner,
    inputs: Vec<jack::Port<jack::AudioIn>>,
    /// Per-block snapshot of `inputs`, allocated once.
    values: Vec<Option<f32>>,
    output: jack::Port<jack::AudioOut>,
}

impl UnitProcess {
    /// Register ports named after the unit controls and `output` on `client`.
    pub fn new(
        client: &jack::Client,
        runner: UnitRunner,
        output: &str,
    ) -> Result<Self, jack::Error> {
        let mut inputs = Vec::new();
        for control in runner.controls() {
            inputs.push(client.register_port(control, jack::AudioIn::default())?);
        }
        let output = client.register_port(output, jack::AudioOut::default())?;
        Ok(UnitProcess {
            values: vec![None; inputs.len()],
            runner,
            inputs,
            output,
        })
    }
}

impl jack::ProcessHandler for UnitProcess {
    fn process(&mut self, _: &jack::Client, ps: &jack::ProcessScope) -> jack::Control {
        for (value, input) in self.values.iter_mut().zip(&self.inputs) {
            *value = match input.connected_count() {
                Ok(n) if n > 0 => input.as_slice(ps).first().cloned(),
                _ => None,
            };
        }
        self.runner
            .process(&self.values, self.output.as_mut_slice(ps));
        jack::Control::Continue
    }

    fn buffer_size(&mut self, _: &jack::Client, size: jack::Frames) -> jack::Control {
        self.runner.reserve(size as usize);
        jack::Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{bounded, Sender};
    use synth_modules::registry::Registry;

    fn runner(args: &[&str]) -> (UnitRunner, Sender<Sample>, Sender<ControlEvent>) {
        let unit = Registry::standard().construct("phasor~", args).unwrap();
        let (rates_tx, rates_rx) = bounded(4);
        let (events_tx, events_rx) = bounded(4);
        (UnitRunner::new(unit, 4, rates_rx, events_rx), rates_tx, events_tx)
    }

    #[test]
    fn sample_rate_arrives_before_first_block() {
        let (mut runner, rates, _events) = runner(&[]);
        rates.send(4.0).unwrap();
        let mut out = [1.0f32; 4];
        runner.process(&[None], &mut out);
        assert_eq!(out, [0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn sample_rate_change_keeps_phase() {
        let (mut runner, rates, _events) = runner(&[]);
        rates.send(4.0).unwrap();
        let mut out = [0.0f32; 2];
        runner.process(&[None], &mut out);
        rates.send(8.0).unwrap();
        runner.process(&[None], &mut out);
        assert_eq!(out, [0.5, 0.625]);
    }

    #[test]
    fn osc_events_apply_to_next_block() {
        let (mut runner, rates, events) = runner(&[]);
        rates.send(8.0).unwrap();
        let mut out = [0.0f32; 4];
        runner.process(&[None], &mut out);
        assert_eq!(out, [0.0, 0.125, 0.25, 0.375]);

        events
            .send(ControlEvent::Set {
                inlet: 0,
                value: 2.0,
            })
            .unwrap();
        runner.process(&[None], &mut out);
        assert_eq!(out, [0.5, 0.75, 0.0, 0.25]);

        events.send(ControlEvent::Reset).unwrap();
        runner.process(&[None], &mut out);
        assert_eq!(out, [0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn connected_port_overrides_queued_events() {
        let (mut runner, rates, events) = runner(&[]);
        rates.send(4.0).unwrap();
        events
            .send(ControlEvent::Set {
                inlet: 0,
                value: 3.0,
            })
            .unwrap();
        let mut out = [0.0f32; 4];
        runner.process(&[Some(0.0)], &mut out);
        assert_eq!(out, [0.0; 4]);
    }

    #[test]
    fn phase_rounded_up_to_one_wraps_to_zero() {
        let (mut runner, rates, _events) = runner(&[]);
        rates.send(48_000.0).unwrap();
        let mut out = [0.5f32; 2];
        runner.process(&[Some(((1.0 - 1e-9) * 48_000.0) as f32)], &mut out);
        assert!(out.iter().all(|&y| y >= 0.0 && y < 1.0), "{:?}", out);
    }

    #[test]
    fn full_precision_pitch_just_below_one_cycle_per_sample() {
        let (mut runner, rates, events) = runner(&[]);
        rates.send(48_000.0).unwrap();
        events
            .send(ControlEvent::Set {
                inlet: 0,
                value: (1.0 - 1e-9) * 48_000.0,
            })
            .unwrap();
        let mut out = [0.5f32; 2];
        runner.process(&[None], &mut out);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn negative_truncated_phase_passes_through() {
        let (mut runner, rates, _events) = runner(&[]);
        rates.send(4.0).unwrap();
        let mut out = [0.0f32; 4];
        runner.process(&[Some(-1.0)], &mut out);
        assert_eq!(out, [0.0, -0.25, -0.5, -0.75]);
    }

    #[test]
    fn larger_block_than_announced() {
        let (mut runner, rates, _events) = runner(&["floor"]);
        rates.send(8.0).unwrap();
        let mut out = [0.0f32; 8];
        runner.process(&[Some(-1.0)], &mut out);
        assert_eq!(out, [0.0, 0.875, 0.75, 0.625, 0.5, 0.375, 0.25, 0.125]);
    }
}
