//! End-to-end checks on the reference scenario: a hollow square and a hollow
//! diamond on a 10x10 grid, both carrying the bottom-left corner marker.

use approx::assert_relative_eq;
use hopfield::{
    dynamics, patterns, train, HopfieldError, Image, NetworkState, PatternCodec, Simulator,
    SimulatorConfig, SimulatorStatus, TrainingMethod,
};
use rand::SeedableRng;

#[test]
fn test_diamond_is_fixed_point_under_full_sweep() {
    let codec = PatternCodec::default();
    let set = patterns::reference_set();
    let w = train(&codec, &set, TrainingMethod::Hebbian).unwrap();
    assert_eq!(w.get(0, 0), 0.0);

    let start = NetworkState::from_image(&codec, &patterns::diamond()).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
    let next = dynamics::step(&start, &w, 1.0, &mut rng).unwrap();

    assert_eq!(next, start);
    assert_relative_eq!(next.energy(&w).unwrap(), start.energy(&w).unwrap());
}

#[test]
fn test_reference_energies() {
    let codec = PatternCodec::default();
    let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();

    // E = -(1/4) * ((p1.s)^2 + (p2.s)^2 - 2n) with p1.p2 = 68
    let square = NetworkState::from_image(&codec, &patterns::square()).unwrap();
    let diamond = NetworkState::from_image(&codec, &patterns::diamond()).unwrap();
    assert_relative_eq!(square.energy(&w).unwrap(), -3606.0);
    assert_relative_eq!(diamond.energy(&w).unwrap(), -3606.0);
}

#[test]
fn test_empty_training_set_produces_no_matrix() {
    let codec = PatternCodec::default();
    let result = train(&codec, &[], TrainingMethod::Hebbian);
    assert!(matches!(result, Err(HopfieldError::EmptyTrainingSet)));

    let mut sim = Simulator::new(SimulatorConfig::default()).unwrap();
    assert!(sim
        .initialize(&[], TrainingMethod::PseudoinverseStyle, &patterns::diamond())
        .is_err());
    assert!(sim.weights().is_none());
}

#[test]
fn test_stored_pattern_energy_below_heavily_perturbed() {
    let codec = PatternCodec::default();
    let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();
    let clean = patterns::diamond();
    let e_clean = NetworkState::from_image(&codec, &clean).unwrap().energy(&w).unwrap();

    // Top half flipped (exactly 50%).
    let mut half = clean.clone();
    (0..50).for_each(|i| half.flip(i));
    let e_half = NetworkState::from_image(&codec, &half).unwrap().energy(&w).unwrap();
    assert!(e_clean <= e_half);
    assert_relative_eq!(e_half, 50.0);

    // Random 60% flips.
    let mut rng = rand::rngs::StdRng::seed_from_u64(31);
    for _ in 0..20 {
        let noisy = perturb(&clean, 60, &mut rng);
        assert!(noisy.hamming_distance(&clean).unwrap() >= 50);
        let e = NetworkState::from_image(&codec, &noisy).unwrap().energy(&w).unwrap();
        assert!(e_clean <= e, "{} > {}", e_clean, e);
    }

    // Full inversion is the mirror attractor with equal energy.
    let mut inverted = clean.clone();
    (0..100).for_each(|i| inverted.flip(i));
    let e_inv = NetworkState::from_image(&codec, &inverted).unwrap().energy(&w).unwrap();
    assert!(e_clean <= e_inv);
}

fn perturb(img: &Image, count: usize, rng: &mut rand::rngs::StdRng) -> Image {
    use rand::seq::SliceRandom;
    let mut idx: Vec<usize> = (0..img.len()).collect();
    idx.shuffle(rng);
    let mut out = img.clone();
    idx.into_iter().take(count).for_each(|i| out.flip(i));
    out
}

#[test]
fn test_noisy_diamond_recall_runs_to_terminal() {
    for method in [TrainingMethod::Hebbian, TrainingMethod::PseudoinverseStyle] {
        let config = SimulatorConfig::default().with_seed(7);
        let mut sim = Simulator::new(config).unwrap();
        sim.initialize_with_noise(&patterns::reference_set(), method, &patterns::diamond())
            .unwrap();
        let start_energy = sim.energy().unwrap();

        let status = sim.run_to_completion().unwrap();
        assert!(matches!(status, SimulatorStatus::Converged | SimulatorStatus::Exhausted));
        assert!(sim.iterations() <= 10);
        assert!(sim.energy().unwrap() <= start_energy);
    }
}

#[test]
fn test_light_noise_full_sweep_recovers_diamond() {
    let codec = PatternCodec::default();
    let w = train(&codec, &patterns::reference_set(), TrainingMethod::Hebbian).unwrap();

    // Flip two pixels of the diamond; one full sweep restores it because the
    // local fields stay dominated by the stored pattern.
    let mut noisy = patterns::diamond();
    noisy.flip(0);
    noisy.flip(55);
    let start = NetworkState::from_image(&codec, &noisy).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    let next = dynamics::step(&start, &w, 1.0, &mut rng).unwrap();

    assert_eq!(next.image(), &patterns::diamond());
}
