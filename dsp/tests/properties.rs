use lmsif_dsp::{
    analytic::{AnalyticSignal, FftAnalytic},
    iq::IQ,
    lms::estimate_into,
    lms_if,
    math::{cos, Real, TAU},
    wave::{Chirp, Phasor},
    Error, Estimator, Signal,
};

fn tone(frequency: Real, len: usize) -> Vec<IQ> {
    let mut samples = vec![IQ::ZERO; len];
    Phasor::new(frequency).fill(&mut samples);
    samples
}

/// A deterministic, non-periodic test signal.
fn wobble(len: usize) -> Vec<IQ> {
    (0..len)
        .map(|n| {
            let t = n as Real;
            IQ::new(cos(0.37 * t) + 0.3 * cos(1.9 * t), (0.37 * t).sin() - 0.2 * cos(0.05 * t))
        })
        .collect()
}

#[test]
fn repeated_runs_are_bit_identical() {
    let signal = wobble(500);
    let estimator = Estimator {
        mu: 0.02,
        ..Default::default()
    };
    let a = estimator.estimate(Signal::Complex(signal.clone())).unwrap();
    let b = estimator.estimate(Signal::Complex(signal)).unwrap();
    let bits = |f: &[Real]| f.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a.frequencies), bits(&b.frequencies));
}

#[test]
fn writes_exactly_n_minus_one_entries() {
    for len in [1, 2, 3, 10, 257] {
        let signal = wobble(len);
        let mut result = vec![Real::NAN; len];
        let diagnostics = estimate_into(&signal, 0.01, &mut result, &mut ());
        assert_eq!(diagnostics.steps, len - 1);
        assert!(result[0].is_nan(), "index 0 was written for len {}", len);
        assert!(result[1..].iter().all(|f| !f.is_nan()));
    }
}

#[test]
fn single_sample_is_not_an_error() {
    let estimate = lms_if(&[0.4], Some(&[0.1][..]), 0.1).unwrap();
    assert_eq!(estimate.frequencies, vec![0.0]);
    assert_eq!(estimate.diagnostics.steps, 0);

    let estimate = lms_if(&[0.4], None, 0.1).unwrap();
    assert_eq!(estimate.frequencies, vec![0.0]);
}

#[test]
fn estimates_stay_in_half_band() {
    let estimate = Estimator {
        mu: 0.05,
        ..Default::default()
    }
    .estimate(Signal::Complex(wobble(2000)))
    .unwrap();
    for &f in &estimate.frequencies[1..] {
        assert!((0.0..0.5).contains(&f), "{} out of range", f);
    }
}

#[test]
fn converges_to_tone_frequency_for_small_mu() {
    for &f in &[0.03, 0.125, 0.24, 0.26, 0.37, 0.48] {
        for &mu in &[0.005, 0.001] {
            let estimate = Estimator {
                mu,
                ..Default::default()
            }
            .estimate(Signal::Complex(tone(f, 12_000)))
            .unwrap();
            for &estimate in &estimate.frequencies[10_000..] {
                assert!(
                    (estimate - f).abs() < 1e-3,
                    "f = {}, mu = {}: got {}",
                    f,
                    mu,
                    estimate
                );
            }
        }
    }
}

#[test]
fn hand_computed_first_step() {
    let estimate = lms_if(&[1.0, 0.0], Some(&[0.0, 1.0][..]), 0.1).unwrap();
    let expected = ((-0.2 as Real / 0.8).atan() + std::f64::consts::PI) / TAU;
    assert!((estimate.frequencies[1] - expected).abs() < 1e-12);
    assert!((estimate.frequencies[1] - 0.4611).abs() < 1e-4);
    assert!((estimate.diagnostics.final_coeff.i - 0.8).abs() < 1e-15);
    assert!((estimate.diagnostics.final_coeff.q + 0.2).abs() < 1e-15);
}

#[test]
fn degenerate_coefficient_propagates_nan() {
    // x(0) = x(1) = 1 with mu = 0.25 cancels the coefficient exactly.
    let estimate = lms_if(&[1.0, 1.0, 0.0], Some(&[0.0, 0.0, 1.0][..]), 0.25).unwrap();
    assert!(estimate.frequencies[1].is_nan());
    assert_eq!(estimate.diagnostics.degenerate_steps, 1);
    // The next gradient step is driven by x(2) alone and leaves zero again.
    assert!((estimate.frequencies[2] - 0.25).abs() < 1e-12);
}

#[test]
fn real_tone_goes_through_analytic_signal() {
    let len = 4096;
    let f = 512.0 / len as Real;
    let real: Vec<Real> = (0..len).map(|n| cos(TAU * f * n as Real)).collect();

    let estimate = lms_if(&real, None, 0.01).unwrap();
    for &estimate in &estimate.frequencies[1000..] {
        assert!((estimate - f).abs() < 1e-3, "got {}", estimate);
    }
}

#[test]
fn explicit_analytic_matches_real_only_path() {
    let real: Vec<Real> = (0..300).map(|n| cos(0.9 * n as Real) + 0.2).collect();
    let analytic = FftAnalytic::new().analytic(&real).unwrap();
    let (i, q): (Vec<Real>, Vec<Real>) = analytic.iter().map(|z| (z.i, z.q)).unzip();

    let from_real = lms_if(&real, None, 0.02).unwrap();
    let from_parts = lms_if(&i, Some(q.as_slice()), 0.02).unwrap();
    assert_eq!(from_real.frequencies, from_parts.frequencies);
}

#[test]
fn follows_slow_chirp() {
    let len = 20_000;
    let mut chirp = Chirp::spanning(0.05, 0.2, len);
    let mut signal = vec![IQ::ZERO; len];
    chirp.fill_iq(&mut signal);

    let estimate = Estimator {
        mu: 0.05,
        ..Default::default()
    }
    .estimate(Signal::Complex(signal))
    .unwrap();

    let slope = 0.15 / (len - 1) as Real;
    for n in (2000..len).step_by(500) {
        let expected = 0.05 + slope * n as Real;
        assert!(
            (estimate.frequencies[n] - expected).abs() < 5e-3,
            "n = {}: got {}, expected {}",
            n,
            estimate.frequencies[n],
            expected
        );
    }
}

#[test]
fn invalid_input_is_reported_before_work() {
    let err = lms_if(&[1.0, 2.0], None, Real::NAN).unwrap_err();
    assert!(matches!(err, Error::NonFiniteStepSize(_)));
    assert!(err.is_invalid_input());

    let err = lms_if(&[1.0, Real::NAN], None, 0.1).unwrap_err();
    assert!(matches!(err, Error::Analytic(_)));
    assert!(!err.is_invalid_input());
}
