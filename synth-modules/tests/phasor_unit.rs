//! Phasor driven the way a host drives it: constructed from the registry and used through `Unit`.
extern crate synth_modules;

use synth_modules::prelude::*;

fn configured(args: &[&str], sample_rate: Sample, pitch: Sample) -> Box<dyn Unit> {
    let mut unit = Registry::standard()
        .construct("phasor~", args)
        .expect("phasor~ is a standard unit");
    unit.configure(sample_rate);
    unit.set_control(0, pitch);
    unit
}

/// Distance on the unit circle, so that 0.9999999 and 0.0000001 are neighbours.
fn circular_distance(a: Sample, b: Sample) -> Sample {
    let d = (a - b).abs().fract();
    d.min(1.0 - d)
}

#[test]
fn output_stays_in_unit_interval() {
    let mut unit = configured(&[], 44_100.0, 1234.5);
    let mut block = vec![0.0; 64];
    for _ in 0..200 {
        unit.render(&mut block);
        assert!(block.iter().all(|&x| x >= 0.0 && x < 1.0));
    }
}

#[test]
fn block_splitting_is_transparent() {
    let mut whole = configured(&[], 48_000.0, 440.0);
    let mut split = configured(&[], 48_000.0, 440.0);

    for &(n, m) in &[(64, 64), (1, 127), (100, 28), (0, 128)] {
        let mut a = vec![0.0; n + m];
        whole.render(&mut a);

        let mut b = vec![0.0; n + m];
        {
            let (head, tail) = b.split_at_mut(n);
            split.render(head);
            split.render(tail);
        }

        for (i, (x, y)) in a.iter().zip(&b).enumerate() {
            assert!(
                circular_distance(*x, *y) < 1e-9,
                "split ({}, {}) differs at {}: {} vs {}",
                n,
                m,
                i,
                x,
                y
            );
        }
    }
}

#[test]
fn ramp_rises_by_fixed_step_until_wrap() {
    let sample_rate = 1000.0;
    let pitch = 30.0;
    let step = pitch / sample_rate;
    let mut unit = configured(&[], sample_rate, pitch);
    let mut block = vec![0.0; 256];
    unit.render(&mut block);

    let mut wraps = 0;
    for pair in block.windows(2) {
        let delta = pair[1] - pair[0];
        if delta < 0.0 {
            wraps += 1;
            assert!(pair[1] < step + 1e-9, "wrapped to {}", pair[1]);
        } else {
            assert!((delta - step).abs() < 1e-9, "step was {}", delta);
        }
    }
    // 256 samples at 30 cycles per 1000 samples
    assert_eq!(wraps, 7);
}

#[test]
fn sample_rate_change_keeps_phase() {
    let mut unit = configured(&[], 4.0, 1.0);
    let mut block = [0.0; 3];
    unit.render(&mut block);
    assert_eq!(block, [0.0, 0.25, 0.5]);

    unit.configure(2.0);
    unit.render(&mut block);
    assert_eq!(block, [0.75, 0.25, 0.75]);
}

#[test]
fn floor_argument_keeps_descending_ramp_in_range() {
    let mut unit = configured(&["floor"], 100.0, -3.0);
    let mut block = vec![0.0; 100];
    for _ in 0..5 {
        unit.render(&mut block);
        assert!(block.iter().all(|&x| x >= 0.0 && x < 1.0));
    }

    let mut unit = configured(&[], 100.0, -3.0);
    unit.render(&mut block);
    assert!(block.iter().skip(1).all(|&x| x < 0.0));
}

#[test]
fn reset_restarts_ramp() {
    let mut unit = configured(&[], 4.0, 1.0);
    let mut block = [0.0; 2];
    unit.render(&mut block);
    unit.reset();
    unit.render(&mut block);
    assert_eq!(block, [0.0, 0.25]);
}

#[test]
fn bad_creation_args_are_rejected() {
    match Registry::standard().construct("phasor~", &["sideways"]) {
        Err(e) => assert_eq!(
            e.to_string(),
            "invalid arguments for `phasor~`: unknown wrap rule `sideways` (expected `truncate` or `floor`)"
        ),
        Ok(_) => panic!("`sideways` is not a wrap rule"),
    }
}
