//! Structural tensor bases and stress recovery.
//!
//! For a strain energy $W(\gamma_1, \gamma_2, \gamma_3)$ with response functions
//! $W_a = \partial W / \partial \gamma_a$, the Kirchhoff stress is
//! $$
//! \vec \tau = W_1 \, \vec m \otimes \vec m + W_2 \, \vec s \otimes \vec s
//!     + W_3 \frac{\lambda_S}{\lambda_M} (\vec m \otimes \vec s + \vec s \otimes \vec m).
//! $$
//! The three tensors form the *structural basis* returned by [`tensor_basis`]. Pulling the basis
//! back with $\vec F^{-1}$ gives the basis of the second Piola-Kirchhoff stress
//! $\vec S = \vec F^{-1} \vec \tau \vec F^{-T}$, see [`reference_basis`].
//!
//! Since $\vec m$ and $\vec s$ are orthonormal, the response functions are recovered from a
//! stress tensor by projection, see [`project_to_response`].
use crate::kinematics::FiberKinematics;
use crate::{Error, Real};
use nalgebra::{Matrix2, Vector2, Vector3, Vector4};
use numeric_literals::replace_float_literals;

/// Three 2x2 tensors onto which the response functions $(W_1, W_2, W_3)$ project.
pub type StructuralBasis<T> = [Matrix2<T>; 3];

fn structural_basis<T: Real>(a: &Vector2<T>, b: &Vector2<T>, shear_scale: T) -> StructuralBasis<T> {
    let ab = a * b.transpose();
    [a * a.transpose(), b * b.transpose(), (ab + ab.transpose()) * shear_scale]
}

/// Computes the structural basis $[\vec m \otimes \vec m, \vec s \otimes \vec s,
/// (\lambda_S / \lambda_M)(\vec m \otimes \vec s + \vec s \otimes \vec m)]$ in the deformed
/// configuration.
pub fn tensor_basis<T: Real>(
    deformation_gradient: &Matrix2<T>,
    fiber_direction: &Vector2<T>,
) -> Result<StructuralBasis<T>, Error> {
    let kinematics = FiberKinematics::compute(deformation_gradient, fiber_direction)?;
    let shear_scale = kinematics.shear_scale()?;
    Ok(structural_basis(&kinematics.m, &kinematics.s, shear_scale))
}

/// Computes the pull-back of [`tensor_basis`], built from $\vec F^{-1} \vec m$ and
/// $\vec F^{-1} \vec s$.
///
/// Fails with [`Error::SingularMatrix`] if $\vec F$ is not invertible.
#[allow(non_snake_case)]
pub fn reference_basis<T: Real>(
    deformation_gradient: &Matrix2<T>,
    fiber_direction: &Vector2<T>,
) -> Result<StructuralBasis<T>, Error> {
    let F_inv = deformation_gradient
        .try_inverse()
        .ok_or(Error::SingularMatrix)?;
    let kinematics = FiberKinematics::compute(deformation_gradient, fiber_direction)?;
    let shear_scale = kinematics.shear_scale()?;
    Ok(structural_basis(&(F_inv * kinematics.m), &(F_inv * kinematics.s), shear_scale))
}

/// Forms $\sum_a W_a \vec B_a$ for a structural basis $\vec B$ and responses $W$.
pub fn reconstruct_stress<T: Real>(basis: &StructuralBasis<T>, response: &Vector3<T>) -> Matrix2<T> {
    basis
        .iter()
        .zip(response.iter())
        .fold(Matrix2::zeros(), |stress, (tensor, &w)| stress + tensor * w)
}

/// Recovers the responses $(W_1, W_2, W_3)$ from a stress tensor in the deformed configuration.
///
/// This is the dual of reconstructing the stress from [`tensor_basis`]:
/// $W_1 = \vec m \cdot \vec \tau \vec m$, $W_2 = \vec s \cdot \vec \tau \vec s$ and
/// $W_3 = \operatorname{sym}(\vec \tau) : (\vec m \otimes \vec s) \, \lambda_M / \lambda_S$.
/// Only the symmetric part of the stress contributes.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn project_to_response<T: Real>(
    stress: &Matrix2<T>,
    deformation_gradient: &Matrix2<T>,
    fiber_direction: &Vector2<T>,
) -> Result<Vector3<T>, Error> {
    let kinematics = FiberKinematics::compute(deformation_gradient, fiber_direction)?;
    let FiberKinematics { m, s, .. } = kinematics;
    let shear_scale = kinematics.shear_scale()?;
    if shear_scale == T::zero() {
        return Err(Error::DivideByZero { quantity: "lambda_S" });
    }

    let w1 = m.dot(&(stress * m));
    let w2 = s.dot(&(stress * s));
    let w3 = 0.5 * (m.dot(&(stress * s)) + s.dot(&(stress * m))) / shear_scale;
    Ok(Vector3::new(w1, w2, w3))
}

/// Recovers the responses from a second Piola-Kirchhoff stress $\vec S$.
///
/// The stress is pushed forward to $\vec F \vec S \vec F^T$ and projected with
/// [`project_to_response`].
#[allow(non_snake_case)]
pub fn project_reference_to_response<T: Real>(
    second_piola_kirchhoff: &Matrix2<T>,
    deformation_gradient: &Matrix2<T>,
    fiber_direction: &Vector2<T>,
) -> Result<Vector3<T>, Error> {
    let F = deformation_gradient;
    let tau = F * second_piola_kirchhoff * F.transpose();
    project_to_response(&tau, deformation_gradient, fiber_direction)
}

/// Flattens a 2x2 tensor into $[A_{11}, A_{12}, A_{21}, A_{22}]$.
pub fn flatten_row_major<T: Real>(tensor: &Matrix2<T>) -> Vector4<T> {
    Vector4::new(tensor.m11, tensor.m12, tensor.m21, tensor.m22)
}
