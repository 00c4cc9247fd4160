use bridge_lattice::diagnostics::quantize;
use bridge_lattice::render::{plate_instances, HeightmapRenderer};
use bridge_lattice::{
    BridgeParams, Dynamics, LatticeState, Rk4Stepper, SimConfig, SimStatus, SimulationHandle,
    SpringLattice,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_single_free_plate_twenty_steps() {
    let stepper = Rk4Stepper::new(SpringLattice::default(), 0.05).unwrap();
    let mut state = LatticeState::new(3, 1).unwrap();
    let mut t = 0.0;

    for step in 1..=20 {
        let (next, t_next) = stepper.step(&state, t).unwrap();
        state = next;
        t = t_next;

        for row in [0, 2] {
            assert_eq!(state.displacement(row, 0), 0.0, "step {}: support moved", step);
            assert_eq!(state.velocity(row, 0), 0.0, "step {}: support moving", step);
        }

        // The taut springs hold the plate near the support plane
        let z = state.displacement(1, 0);
        let v = state.velocity(1, 0);
        assert!(z.is_finite() && v.is_finite());
        assert!(z.abs() < 1.0, "step {}: |z| = {} left the deck", step, z.abs());
        assert!(v.abs() < 25.0, "step {}: |v| = {} too fast", step, v.abs());
    }
    assert!((t - 1.0).abs() < 1e-9);
}

#[test]
fn test_default_lattice_stays_bounded() {
    let config = SimConfig {
        t_max: 10.0,
        ..SimConfig::default()
    };
    let mut handle = SimulationHandle::new(&config).unwrap();
    let mut renderer = HeightmapRenderer::new();
    let steps = handle.run(&mut renderer, |_| true).unwrap();

    assert!((200..=201).contains(&steps));
    assert_eq!(handle.status(), SimStatus::Stopped);
    assert_eq!(renderer.frames(), steps);

    let state = handle.state();
    assert!(state.is_finite());
    assert!(state.matrix().max_abs() < 50.0);
    for j in 0..config.cols {
        assert_eq!(state.displacement(0, j), 0.0);
        assert_eq!(state.displacement(config.rows - 1, j), 0.0);
    }
}

#[test]
fn test_perturbed_deck_keeps_supports_fixed() {
    let mut rng = StdRng::seed_from_u64(2024);
    let state = LatticeState::perturbed(8, 4, 0.5, &mut rng).unwrap();
    let stepper = Rk4Stepper::new(SpringLattice::new(BridgeParams::default()), 0.05).unwrap();
    let mut handle = SimulationHandle::with_state(stepper, state, 2.0);

    while handle.is_running() {
        handle.advance().unwrap();
        let s = handle.state();
        assert!(s.matrix().row(0).iter().all(|&v| v == 0.0));
        assert!(s.matrix().row(7).iter().all(|&v| v == 0.0));
    }
}

#[test]
fn test_flat_deck_accelerates_at_g() {
    let mut state = LatticeState::new(5, 5).unwrap();
    for i in 0..5 {
        for j in 0..5 {
            state.set_plate(i, j, -3.0, 0.0);
        }
    }
    let params = BridgeParams::default();
    let rate = SpringLattice::new(params).derivative(&state);
    for i in 1..4 {
        for j in 0..5 {
            assert!((rate.velocity(i, j) + params.gravity).abs() < 1e-12);
        }
    }
}

#[test]
fn test_snapshot_feeds_render_and_diagnostics() {
    let mut handle = SimulationHandle::new(&SimConfig {
        rows: 4,
        cols: 2,
        t_max: 0.5,
        ..SimConfig::default()
    })
    .unwrap();
    handle.advance().unwrap();

    let instances = plate_instances(handle.state());
    assert_eq!(instances.len(), 8);

    let rounded = quantize(handle.state().matrix(), 2).unwrap();
    assert_eq!(rounded.shape(), (4, 4));
    assert!(quantize(handle.state().matrix(), 9).is_err());
}
