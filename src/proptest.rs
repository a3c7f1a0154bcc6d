//! Proptest strategies for deformation states and polynomial exponents.
use crate::index::ExponentTriple;
use crate::kinematics::fiber_direction_from_angle;
use ::proptest::prelude::*;
use nalgebra::{Matrix2, Rotation2, Vector2, Vector3};
use std::f64::consts::PI;

/// Addressable exponent triples for the given top degree.
pub fn exponent_triple(top_degree: usize) -> impl Strategy<Value = ExponentTriple> {
    (0..=top_degree, 0..=top_degree, 0..=top_degree / 2)
        .prop_map(|(i, j, k_half)| ExponentTriple::new(i, j, 2 * k_half))
}

/// Unit fiber directions at arbitrary angles.
pub fn fiber_direction() -> impl Strategy<Value = Vector2<f64>> {
    (-PI..PI).prop_map(fiber_direction_from_angle)
}

/// Deformation gradients with positive determinant.
///
/// Every such matrix can be written as a rotation times an upper triangular matrix with positive
/// diagonal, so we sample these factors. The ranges are kept moderate so that stretches stay
/// within what a membrane would experience, and the strain invariants remain well defined.
pub fn deformation_gradient() -> impl Strategy<Value = Matrix2<f64>> {
    let stretch = 0.5..2.0;
    let shear = -0.5..0.5;
    (-PI..PI, stretch.clone(), stretch, shear).prop_map(|(angle, a, c, b)| {
        let rotation = Rotation2::new(angle).into_inner();
        rotation * Matrix2::new(a, b, 0.0, c)
    })
}

/// Strain invariants $(\gamma_1, \gamma_2, \gamma_3)$ in a moderate range around the undeformed
/// state.
pub fn strain_invariants() -> impl Strategy<Value = Vector3<f64>> {
    let range = -0.5..0.5;
    (range.clone(), range.clone(), range).prop_map(|(g1, g2, g3)| Vector3::new(g1, g2, g3))
}
