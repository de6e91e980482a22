use approx::assert_abs_diff_eq;
use fsbem::assembly::{AssemblyOptions, BoundaryOperator};
use fsbem::kernel::LaplaceGreenFunction;
use fsbem::shapes::unit_square;
use fsbem::solver::{BoundaryCondition, LaplaceProblem};
use fsbem::types::Point;
use std::f64::consts::PI;

fn exact(p: Point) -> f64 {
    (PI * p.z).cos() * (PI * p.x).sinh() / PI.sinh()
}

fn exact_gradient(p: Point) -> [f64; 2] {
    [
        PI * (PI * p.z).cos() * (PI * p.x).cosh() / PI.sinh(),
        -PI * (PI * p.z).sin() * (PI * p.x).sinh() / PI.sinh(),
    ]
}

#[test]
fn test_mixed_problem_on_unit_square() {
    let boundary = unit_square(20).unwrap();
    let op = BoundaryOperator::assemble(
        &boundary,
        LaplaceGreenFunction::new(),
        &AssemblyOptions::default(),
    )
    .unwrap();
    // No flux through the horizontal sides, potential prescribed on the
    // vertical ones.
    let conditions = boundary
        .elements()
        .iter()
        .map(|e| {
            if e.normal().z.abs() > 0.5 {
                BoundaryCondition::Flux(0.0)
            } else {
                BoundaryCondition::Potential(exact(e.midpoint()))
            }
        })
        .collect();
    let problem = LaplaceProblem::new(&op, conditions).unwrap();
    let solution = problem.solve().unwrap();

    for (e, phi) in boundary.elements().iter().zip(solution.phi().iter()) {
        assert_abs_diff_eq!(*phi, exact(e.midpoint()), epsilon = 1e-2);
    }
    for (condition, (phi, q)) in problem
        .conditions()
        .iter()
        .zip(solution.phi().iter().zip(solution.q().iter()))
    {
        match condition {
            BoundaryCondition::Potential(v) => assert_eq!(v, phi),
            BoundaryCondition::Flux(v) => assert_eq!(v, q),
        }
    }

    let points = [
        Point::new(0.5, 0.5),
        Point::new(0.25, 0.75),
        Point::new(0.8, 0.2),
    ];
    for (p, value) in points.iter().zip(solution.evaluate(&points)) {
        assert_abs_diff_eq!(value.potential, exact(*p), epsilon = 2e-3);
        let gradient = exact_gradient(*p);
        assert_abs_diff_eq!(value.gradient[0], gradient[0], epsilon = 1e-2);
        assert_abs_diff_eq!(value.gradient[1], gradient[1], epsilon = 1e-2);
    }
}

#[test]
fn test_constant_potential() {
    // A constant potential on the whole boundary gives a constant field with
    // vanishing flux.
    let boundary = unit_square(6).unwrap();
    let op = BoundaryOperator::assemble(
        &boundary,
        LaplaceGreenFunction::new(),
        &AssemblyOptions::default(),
    )
    .unwrap();
    let conditions = vec![BoundaryCondition::Potential(2.0); boundary.number_of_elements()];
    let solution = LaplaceProblem::new(&op, conditions).unwrap().solve().unwrap();
    for q in solution.q().iter() {
        assert_abs_diff_eq!(*q, 0.0, epsilon = 1e-2);
    }
    let value = solution.evaluate(&[Point::new(0.4, 0.3)]);
    assert_abs_diff_eq!(value[0].potential, 2.0, epsilon = 1e-3);
}
