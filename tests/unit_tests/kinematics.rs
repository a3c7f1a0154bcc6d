use fiberelastic::kinematics::{
    deformed_direction, fiber_direction_from_angle, gamma_1, gamma_2, gamma_3, lambda_m, lambda_s,
    orthogonal_complement, phi, strain_invariants, FiberKinematics,
};
use fiberelastic::proptest::{deformation_gradient, fiber_direction};
use fiberelastic::Error;
use matrixcompare::{assert_matrix_eq, assert_scalar_eq, prop_assert_matrix_eq};
use nalgebra::{matrix, vector, Matrix2};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_2;

#[test]
fn undeformed_state_has_zero_invariants() {
    let f = Matrix2::<f64>::identity();
    let m = fiber_direction_from_angle(0.3);
    let gamma = strain_invariants(&f, &m).unwrap();
    assert_matrix_eq!(gamma, vector![0.0, 0.0, 0.0], comp = abs, tol = 1e-14);
}

#[test]
fn uniaxial_stretch_along_fiber() {
    let f = matrix![2.0, 0.0;
                    0.0, 0.5];
    let m = vector![1.0, 0.0];
    assert_scalar_eq!(lambda_m(&f, &m).unwrap(), 2.0, comp = float);
    assert_scalar_eq!(lambda_s(&f, &m).unwrap(), 0.5, comp = float);
    assert_scalar_eq!(gamma_1(&f, &m).unwrap(), 2.0f64.ln(), comp = float);
    assert_scalar_eq!(gamma_2(&f, &m).unwrap(), 0.5f64.ln(), comp = float);
    assert_eq!(gamma_3(&f, &m).unwrap(), 0.0);
}

#[test]
fn simple_shear_along_fiber() {
    let shear = 0.3;
    let f = matrix![1.0, shear;
                    0.0, 1.0];
    let m = vector![1.0, 0.0];
    let gamma = strain_invariants(&f, &m).unwrap();
    assert_matrix_eq!(gamma, vector![0.0, 0.0, shear], comp = abs, tol = 1e-14);
    assert_scalar_eq!(phi(&f, &m).unwrap(), shear, comp = float);
}

#[test]
fn fiber_perpendicular_to_first_axis() {
    let f = matrix![2.0, 0.0;
                    0.0, 3.0];
    let m = fiber_direction_from_angle(FRAC_PI_2);
    let kinematics = FiberKinematics::compute(&f, &m).unwrap();
    assert_matrix_eq!(kinematics.m, vector![0.0, 1.0], comp = abs, tol = 1e-14);
    assert_matrix_eq!(kinematics.s, vector![-1.0, 0.0], comp = abs, tol = 1e-14);
    assert_scalar_eq!(kinematics.lambda_m, 3.0, comp = abs, tol = 1e-14);
    assert_scalar_eq!(kinematics.lambda_s, 2.0, comp = abs, tol = 1e-14);
    assert_scalar_eq!(kinematics.phi, 0.0, comp = abs, tol = 1e-14);
}

#[test]
fn orthogonal_complement_rotates_counterclockwise() {
    assert_eq!(orthogonal_complement(&vector![1.0, 0.0]), vector![0.0, 1.0]);
    assert_eq!(orthogonal_complement(&vector![3.0, 2.0]), vector![-2.0, 3.0]);
}

#[test]
fn zero_deformation_is_divide_by_zero() {
    let f = Matrix2::<f64>::zeros();
    let m = vector![1.0, 0.0];
    assert_eq!(
        deformed_direction(&f, &m),
        Err(Error::DivideByZero { quantity: "|F M|" })
    );
    assert!(matches!(strain_invariants(&f, &m), Err(Error::DivideByZero { .. })));
}

#[test]
fn inverted_transverse_stretch_is_domain_error() {
    // Reflection across the fiber axis: lambda_S = -1
    let f = matrix![1.0, 0.0;
                    0.0, -1.0];
    let m = vector![1.0, 0.0];
    assert_scalar_eq!(lambda_s(&f, &m).unwrap(), -1.0, comp = float);
    assert_eq!(gamma_2(&f, &m), Err(Error::Domain { quantity: "lambda_S" }));
    assert_eq!(
        strain_invariants(&f, &m),
        Err(Error::Domain { quantity: "lambda_S" })
    );
    // gamma_1 is still well defined
    assert_scalar_eq!(gamma_1(&f, &m).unwrap(), 0.0, comp = abs, tol = 1e-14);
}

proptest! {
    #[test]
    fn stretches_multiply_to_determinant(f in deformation_gradient(), m in fiber_direction()) {
        let kinematics = FiberKinematics::compute(&f, &m).unwrap();
        let det = f.determinant();
        prop_assert!((kinematics.lambda_m * kinematics.lambda_s - det).abs() <= 1e-12 * det.abs().max(1.0));
    }

    #[test]
    fn kinematics_reconstruct_deformation_gradient(f in deformation_gradient(), m_ref in fiber_direction()) {
        let FiberKinematics { m, s, lambda_m, lambda_s, phi } = FiberKinematics::compute(&f, &m_ref).unwrap();
        let m_ref_perp = orthogonal_complement(&m_ref);
        let reconstructed = lambda_m * m * m_ref.transpose()
            + (lambda_m * phi * m + lambda_s * s) * m_ref_perp.transpose();
        prop_assert_matrix_eq!(reconstructed, f, comp = abs, tol = 1e-12);
    }

    #[test]
    fn invariants_agree_with_individual_functions(f in deformation_gradient(), m in fiber_direction()) {
        let gamma = strain_invariants(&f, &m).unwrap();
        let individual = vector![
            gamma_1(&f, &m).unwrap(),
            gamma_2(&f, &m).unwrap(),
            gamma_3(&f, &m).unwrap()
        ];
        prop_assert_matrix_eq!(gamma, individual, comp = abs, tol = 1e-14);
    }
}
