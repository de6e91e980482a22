use approx::assert_relative_eq;
use fsbem::assembly::{AssemblyOptions, BoundaryOperator};
use fsbem::kernel::{FreeSurfaceGreenFunction, LaplaceGreenFunction};
use fsbem::shapes::FloatingCylinder;
use fsbem::solver::{
    motion_response, DiffractionProblem, RadiationProblem, RankineRadiationProblem,
};
use fsbem::types::{c64, WaveParameters};
use std::f64::consts::PI;

const GRAVITY: f64 = 9.81;

/// Heave added mass and damping, far-field wave amplitude and heave exciting
/// force of a half-immersed unit cylinder.
fn heave_coefficients(omega: f64, lid: bool, density: f64) -> (f64, f64, f64, f64) {
    let cylinder = FloatingCylinder::new(1.0, 40).with_lid(lid);
    let boundary = cylinder.boundary().unwrap();
    let kernel = FreeSurfaceGreenFunction::new(omega, GRAVITY).unwrap();
    let op = BoundaryOperator::assemble(&boundary, kernel, &AssemblyOptions::default()).unwrap();
    let params = WaveParameters {
        gravity: GRAVITY,
        density,
    };

    let radiation = RadiationProblem::new(&op, params).unwrap().solve().unwrap();
    let heave = radiation.dof_index("heave").unwrap();
    let added_mass = radiation.added_mass()[(heave, heave)];
    let damping = radiation.damping()[(heave, heave)];
    let amplitude = radiation.wave_amplitude(heave);

    let diffraction = DiffractionProblem::new(&op, params).unwrap().solve().unwrap();
    let force = diffraction.exciting_forces()[heave].norm();
    (added_mass, damping, amplitude, force)
}

#[test]
fn test_heave_coefficients() {
    let (a, b, zeta, force) = heave_coefficients(1.0, false, 1.0);
    let mass = 0.5 * PI;
    assert_relative_eq!(a / mass, 1.3968, max_relative = 0.01);
    assert_relative_eq!(b, 2.7117, max_relative = 0.01);
    assert_relative_eq!(zeta, 0.16786, max_relative = 0.01);
    assert_relative_eq!(force, 16.154, max_relative = 0.01);

    let (a, _, _, _) = heave_coefficients(3.0, false, 1.0);
    assert_relative_eq!(a / mass, 0.599, max_relative = 0.03);
}

#[test]
fn test_energy_and_haskind_relations() {
    let density = 1025.0;
    for omega in [0.5, 1.0, 3.0] {
        let (_, b, zeta, force) = heave_coefficients(omega, false, density);
        // Energy radiated to both sides balances the damping
        let energy = density * GRAVITY * GRAVITY * zeta * zeta / omega.powi(3);
        assert_relative_eq!(b, energy, max_relative = 0.02);
        // Haskind relation between damping and exciting force
        let haskind = omega * force * force / (density * GRAVITY * GRAVITY);
        assert_relative_eq!(b, haskind, max_relative = 0.02);
    }
}

#[test]
fn test_lid_leaves_coefficients_unchanged() {
    for omega in [1.0, 3.0] {
        let (a0, b0, _, f0) = heave_coefficients(omega, false, 1.0);
        let (a1, b1, _, f1) = heave_coefficients(omega, true, 1.0);
        assert_relative_eq!(a0, a1, max_relative = 5e-3);
        assert_relative_eq!(b0, b1, max_relative = 5e-3);
        assert_relative_eq!(f0, f1, max_relative = 5e-3);
    }
}

#[test]
fn test_truncated_domain_matches_free_surface_kernel() {
    let mass = 0.5 * PI;
    for (omega, element_size, tolerance) in [(2.0, 0.5, 0.015), (3.0, 0.35, 0.025)] {
        let wavelength = 2.0 * PI * GRAVITY / (omega * omega);
        let domain = FloatingCylinder::new(1.0, 40)
            .truncated_domain(1.0 + 2.0 * wavelength, 1.0 + wavelength, element_size)
            .unwrap();
        let op = BoundaryOperator::assemble(
            &domain,
            LaplaceGreenFunction,
            &AssemblyOptions::default(),
        )
        .unwrap();
        let radiation = RankineRadiationProblem::new(&op, omega, WaveParameters::default())
            .unwrap()
            .solve()
            .unwrap();
        let heave = radiation.dof_index("heave").unwrap();
        let a = radiation.added_mass()[(heave, heave)];
        let b = radiation.damping()[(heave, heave)];
        let zeta = radiation.wave_amplitude(heave).unwrap();

        let (a_ref, b_ref, zeta_ref, _) = heave_coefficients(omega, false, 1.0);
        assert_relative_eq!(a / mass, a_ref / mass, max_relative = tolerance);
        assert_relative_eq!(b, b_ref, max_relative = tolerance);
        assert_relative_eq!(zeta, zeta_ref, max_relative = 0.01);
        // The truncated domain also conserves energy
        let energy = GRAVITY * GRAVITY * zeta * zeta / omega.powi(3);
        assert_relative_eq!(b, energy, max_relative = 0.02);
    }
}

#[test]
fn test_symmetric_body_decouples_sway_and_heave() {
    let boundary = FloatingCylinder::new(1.0, 24).boundary().unwrap();
    let kernel = FreeSurfaceGreenFunction::new(2.0, GRAVITY).unwrap();
    let op = BoundaryOperator::assemble(&boundary, kernel, &AssemblyOptions::default()).unwrap();
    let radiation = RadiationProblem::new(&op, WaveParameters::default())
        .unwrap()
        .solve()
        .unwrap();
    assert_eq!(radiation.dof_names(), vec!["sway", "heave", "roll"]);
    let f = radiation.force_coefficients();
    let scale = f[(1, 1)].norm();
    assert!(f[(0, 1)].norm() < 1e-8 * scale);
    assert!(f[(1, 0)].norm() < 1e-8 * scale);
    // A circle centred on the roll axis has no roll normal
    assert!(f[(2, 2)].norm() < 1e-8 * scale);
    assert!(radiation.damping()[(0, 0)] > 0.0);
    assert!(radiation.damping()[(1, 1)] > 0.0);
}

#[test]
fn test_heave_response_near_resonance() {
    let omega = 2.5;
    let cylinder = FloatingCylinder::new(1.0, 32);
    let boundary = cylinder.boundary().unwrap();
    let kernel = FreeSurfaceGreenFunction::new(omega, GRAVITY).unwrap();
    let op = BoundaryOperator::assemble(&boundary, kernel, &AssemblyOptions::default()).unwrap();
    let params = WaveParameters::default();
    let radiation = RadiationProblem::new(&op, params).unwrap().solve().unwrap();
    let diffraction = DiffractionProblem::new(&op, params).unwrap().solve().unwrap();

    let mut stiffness = cylinder.stiffness_matrix(params.density, params.gravity);
    // Sway and roll have no restoring force; keep the system regular
    stiffness[(0, 0)] = 1.0;
    stiffness[(2, 2)] = 1.0;
    let mut mass = cylinder.inertia_matrix(params.density);
    mass[(2, 2)] += 1.0;
    let xi = motion_response(
        &mass,
        &stiffness,
        &radiation.added_mass(),
        &radiation.damping(),
        diffraction.exciting_forces(),
        omega,
    )
    .unwrap();

    let heave = 1;
    let z = impedance(
        mass[(heave, heave)] + radiation.added_mass()[(heave, heave)],
        radiation.damping()[(heave, heave)],
        stiffness[(heave, heave)],
        omega,
    );
    let expected = diffraction.exciting_forces()[heave] / z;
    assert_relative_eq!(xi[heave].re, expected.re, max_relative = 1e-6);
    assert_relative_eq!(xi[heave].im, expected.im, max_relative = 1e-6);
}

fn impedance(mass: f64, damping: f64, stiffness: f64, omega: f64) -> c64 {
    c64::new(-omega * omega * mass + stiffness, -omega * damping)
}
