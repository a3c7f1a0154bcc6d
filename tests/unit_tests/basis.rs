use fiberelastic::basis::{
    flatten_row_major, project_reference_to_response, project_to_response, reconstruct_stress, reference_basis,
    tensor_basis,
};
use fiberelastic::proptest::{deformation_gradient, fiber_direction, strain_invariants};
use fiberelastic::Error;
use matrixcompare::{assert_matrix_eq, prop_assert_matrix_eq};
use nalgebra::{matrix, vector, Matrix2};
use proptest::prelude::*;

#[test]
fn tensor_basis_in_undeformed_state() {
    let f = Matrix2::<f64>::identity();
    let m = vector![1.0, 0.0];
    let basis = tensor_basis(&f, &m).unwrap();
    assert_matrix_eq!(basis[0], matrix![1.0, 0.0; 0.0, 0.0], comp = float);
    assert_matrix_eq!(basis[1], matrix![0.0, 0.0; 0.0, 1.0], comp = float);
    assert_matrix_eq!(basis[2], matrix![0.0, 1.0; 1.0, 0.0], comp = float);

    let stress = reconstruct_stress(&basis, &vector![1.0, 2.0, 3.0]);
    assert_matrix_eq!(stress, matrix![1.0, 3.0; 3.0, 2.0], comp = float);
}

#[test]
fn shear_basis_is_scaled_by_stretch_ratio() {
    let f = matrix![2.0, 0.0;
                    0.0, 0.5];
    let m = vector![1.0, 0.0];
    let basis = tensor_basis(&f, &m).unwrap();
    // lambda_S / lambda_M = 0.25
    assert_matrix_eq!(basis[2], matrix![0.0, 0.25; 0.25, 0.0], comp = float);
}

#[test]
fn reference_basis_of_singular_gradient_fails() {
    let f = matrix![1.0, 1.0;
                    1.0, 1.0];
    let m = vector![1.0, 0.0];
    assert_eq!(reference_basis(&f, &m), Err(Error::SingularMatrix));
}

#[test]
fn projection_with_vanishing_transverse_stretch_fails() {
    let f = matrix![1.0, 0.0;
                    0.0, 0.0];
    let m = vector![1.0, 0.0];
    let stress = Matrix2::identity();
    assert_eq!(
        project_to_response(&stress, &f, &m),
        Err(Error::DivideByZero { quantity: "lambda_S" })
    );
}

#[test]
fn projection_ignores_antisymmetric_part() {
    let f = matrix![1.2, 0.3;
                    -0.1, 0.9];
    let m = vector![0.6, 0.8];
    let antisymmetric = matrix![0.0, 1.0;
                                -1.0, 0.0];
    let response = project_to_response(&antisymmetric, &f, &m).unwrap();
    assert_matrix_eq!(response, vector![0.0, 0.0, 0.0], comp = abs, tol = 1e-14);
}

#[test]
fn flatten_row_major_order() {
    let a = matrix![1.0, 2.0;
                    3.0, 4.0];
    assert_eq!(flatten_row_major(&a), vector![1.0, 2.0, 3.0, 4.0]);
}

proptest! {
    #[test]
    fn projection_inverts_reconstruction(
        f in deformation_gradient(),
        m in fiber_direction(),
        response in strain_invariants()
    ) {
        let basis = tensor_basis(&f, &m).unwrap();
        let stress = reconstruct_stress(&basis, &response);
        let recovered = project_to_response(&stress, &f, &m).unwrap();
        prop_assert_matrix_eq!(recovered, response, comp = abs, tol = 1e-10);
    }

    #[test]
    fn reference_basis_is_pull_back_of_tensor_basis(
        f in deformation_gradient(),
        m in fiber_direction(),
        response in strain_invariants()
    ) {
        let f_inv = f.try_inverse().unwrap();
        let tau = reconstruct_stress(&tensor_basis(&f, &m).unwrap(), &response);
        let s = reconstruct_stress(&reference_basis(&f, &m).unwrap(), &response);
        prop_assert_matrix_eq!(s, f_inv * tau * f_inv.transpose(), comp = abs, tol = 1e-10);

        let recovered = project_reference_to_response(&s, &f, &m).unwrap();
        prop_assert_matrix_eq!(recovered, response, comp = abs, tol = 1e-10);
    }
}
