use approx::assert_relative_eq;
use fsbem::assembly::{AssemblyOptions, BoundaryOperator};
use fsbem::boundary::{Boundary, Region};
use fsbem::kernel::{FreeSurfaceGreenFunction, LaplaceGreenFunction};
use fsbem::shapes::{unit_square, FloatingCylinder};
use fsbem::solver::{BoundaryCondition, BoundarySolution, LaplaceProblem};
use fsbem::types::{BemError, Point};
use nalgebra::DVector;

#[test]
fn test_assembly_is_repeatable() {
    let boundary = FloatingCylinder::new(1.0, 16).with_lid(true).boundary().unwrap();
    let kernel = FreeSurfaceGreenFunction::new(1.5, 9.81).unwrap();
    let options = AssemblyOptions::default();
    let first = BoundaryOperator::assemble(&boundary, kernel, &options).unwrap();
    let second = BoundaryOperator::assemble(&boundary, kernel, &options).unwrap();
    assert_eq!(first.g(), second.g());
    assert_eq!(first.q(), second.q());
    assert_eq!(first.dim(), boundary.number_of_elements());
}

#[test]
fn test_lid_diagonal() {
    let boundary = FloatingCylinder::new(1.0, 16).with_lid(true).boundary().unwrap();
    let op = BoundaryOperator::assemble(
        &boundary,
        LaplaceGreenFunction,
        &AssemblyOptions::default(),
    )
    .unwrap();
    for (i, region) in boundary.regions().iter().enumerate() {
        let expected = if *region == Region::Lid { 1.0 } else { -0.5 };
        assert_relative_eq!(op.q()[(i, i)], expected, epsilon = 1e-15);
    }
}

fn mixed_conditions(boundary: &Boundary, f: impl Fn(Point) -> f64) -> Vec<BoundaryCondition> {
    boundary
        .elements()
        .iter()
        .map(|e| {
            if e.normal().x.abs() > 0.5 {
                BoundaryCondition::Potential(f(e.midpoint()))
            } else {
                BoundaryCondition::Flux(0.0)
            }
        })
        .collect()
}

#[test]
fn test_superposition() {
    let boundary = unit_square(8).unwrap();
    let op = BoundaryOperator::assemble(
        &boundary,
        LaplaceGreenFunction,
        &AssemblyOptions::default(),
    )
    .unwrap();
    let solve = |f: &dyn Fn(Point) -> f64| {
        LaplaceProblem::new(&op, mixed_conditions(&boundary, f))
            .unwrap()
            .solve()
            .unwrap()
    };
    let a = solve(&|p| p.x);
    let b = solve(&|p| p.x * p.x);
    let both = solve(&|p| 3.0 * p.x + 3.0 * p.x * p.x);

    let sum = a.try_add(&b).unwrap().scale(3.0);
    for (x, y) in sum.phi().iter().zip(both.phi().iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-10);
    }
    for (x, y) in sum.q().iter().zip(both.q().iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-10);
    }
    let point = [Point::new(0.6, 0.3)];
    assert_relative_eq!(
        sum.evaluate(&point)[0].potential,
        both.evaluate(&point)[0].potential,
        epsilon = 1e-10
    );
}

#[test]
fn test_superposition_requires_same_operator() {
    let boundary = unit_square(4).unwrap();
    let options = AssemblyOptions::default();
    let first = BoundaryOperator::assemble(&boundary, LaplaceGreenFunction, &options).unwrap();
    let second = BoundaryOperator::assemble(&boundary, LaplaceGreenFunction, &options).unwrap();
    let n = boundary.number_of_elements();
    let a = BoundarySolution::new(&first, DVector::zeros(n), DVector::zeros(n)).unwrap();
    let b = BoundarySolution::new(&second, DVector::zeros(n), DVector::zeros(n)).unwrap();
    assert!(matches!(a.try_add(&b), Err(BemError::Mismatch(_))));
    assert!(a.try_add(&a).is_ok());
    assert!(BoundarySolution::new(&first, DVector::zeros(n + 1), DVector::zeros(n)).is_err());
}

#[test]
fn test_free_surface_self_terms_are_complex() {
    let boundary = FloatingCylinder::new(1.0, 12).boundary().unwrap();
    let kernel = FreeSurfaceGreenFunction::new(2.0, 9.81).unwrap();
    let op = BoundaryOperator::assemble(&boundary, kernel, &AssemblyOptions::default()).unwrap();
    for i in 0..op.dim() {
        assert!(op.g()[(i, i)].im.abs() > 1e-6);
    }
}
