//! Fung-type exponential strain energies.
//!
//! The energy is
//! $$
//! W(\vec \gamma) = c_0 \left( \sum_{i=1}^{6} e^{Q_i(\vec \gamma)} - 1 \right),
//! $$
//! where $\vec Q$ collects the six terms of a quadratic form in the invariants,
//! $$
//! \vec Q = \left[ c_{11} \gamma_1^2, c_{22} \gamma_2^2, c_{33} \gamma_3^2,
//!     c_{12} \gamma_1 \gamma_2, c_{13} \gamma_1 \gamma_3, c_{23} \gamma_2 \gamma_3 \right].
//! $$
//! The exponential is applied to every entry separately, so the response functions are
//! $W_a = c_0 \sum_i \pd{Q_i}{\gamma_a} e^{Q_i}$ (elementwise product, then sum).
//!
//! The *shifted* variant replaces $\vec Q$ in the exponential by $\vec Q(\vec \gamma) -
//! \vec Q(\vec \gamma_\text{ref})$ for a reference strain state $\vec \gamma_\text{ref}$, which
//! leaves the derivatives of $\vec Q$ unchanged.
//!
//! No attempt is made to guard against overflow of the exponential. Large arguments produce
//! `inf` or `NaN`, which are returned to the caller as is.
use crate::StrainEnergy;
use fiberelastic::nalgebra::{Matrix3, Vector3, Vector6};
use fiberelastic::{Error, Real};
use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};

/// The seven coefficients $[c_0, c_{11}, c_{22}, c_{33}, c_{12}, c_{13}, c_{23}]$.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FungCoefficients<T> {
    pub c0: T,
    pub c11: T,
    pub c22: T,
    pub c33: T,
    pub c12: T,
    pub c13: T,
    pub c23: T,
}

impl<T: Real> FungCoefficients<T> {
    /// Number of coefficients in the flat representation.
    pub const LEN: usize = 7;

    pub fn from_array([c0, c11, c22, c33, c12, c13, c23]: [T; 7]) -> Self {
        Self {
            c0,
            c11,
            c22,
            c33,
            c12,
            c13,
            c23,
        }
    }

    /// Reads the coefficients from a flat slice in the order $[c_0, c_{11}, c_{22}, c_{33},
    /// c_{12}, c_{13}, c_{23}]$.
    pub fn from_slice(coefficients: &[T]) -> Result<Self, Error> {
        let array: [T; 7] = coefficients
            .try_into()
            .map_err(|_| Error::ShapeMismatch {
                expected: Self::LEN,
                actual: coefficients.len(),
            })?;
        Ok(Self::from_array(array))
    }

    pub fn to_array(&self) -> [T; 7] {
        [self.c0, self.c11, self.c22, self.c33, self.c12, self.c13, self.c23]
    }
}

/// The quadratic form $\vec Q(\vec \gamma)$.
pub fn quadratic_form<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> Vector6<T> {
    let (g1, g2, g3) = (gamma[0], gamma[1], gamma[2]);
    Vector6::new(
        c.c11 * g1 * g1,
        c.c22 * g2 * g2,
        c.c33 * g3 * g3,
        c.c12 * g1 * g2,
        c.c13 * g1 * g3,
        c.c23 * g2 * g3,
    )
}

/// The quadratic form relative to a reference state, $\vec Q(\vec \gamma) - \vec Q(\vec
/// \gamma_\text{ref})$.
///
/// Every entry is evaluated as the difference of the current and reference products, e.g.
/// $c_{12} (\gamma_1 \gamma_2 - \gamma_{\text{ref},1} \gamma_{\text{ref},2})$.
pub fn quadratic_form_shifted<T: Real>(
    c: &FungCoefficients<T>,
    gamma: &Vector3<T>,
    reference: &Vector3<T>,
) -> Vector6<T> {
    let (g1, g2, g3) = (gamma[0], gamma[1], gamma[2]);
    let (r1, r2, r3) = (reference[0], reference[1], reference[2]);
    Vector6::new(
        c.c11 * (g1 * g1 - r1 * r1),
        c.c22 * (g2 * g2 - r2 * r2),
        c.c33 * (g3 * g3 - r3 * r3),
        c.c12 * (g1 * g2 - r1 * r2),
        c.c13 * (g1 * g3 - r1 * r3),
        c.c23 * (g2 * g3 - r2 * r3),
    )
}

/// $\pd{\vec Q}{\gamma_1} = [2 c_{11} \gamma_1, 0, 0, c_{12} \gamma_2, c_{13} \gamma_3, 0]$.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn quadratic_form_d1<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> Vector6<T> {
    Vector6::new(2.0 * c.c11 * gamma[0], 0.0, 0.0, c.c12 * gamma[1], c.c13 * gamma[2], 0.0)
}

/// $\pd{\vec Q}{\gamma_2} = [0, 2 c_{22} \gamma_2, 0, c_{12} \gamma_1, 0, c_{23} \gamma_3]$.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn quadratic_form_d2<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> Vector6<T> {
    Vector6::new(0.0, 2.0 * c.c22 * gamma[1], 0.0, c.c12 * gamma[0], 0.0, c.c23 * gamma[2])
}

/// $\pd{\vec Q}{\gamma_3} = [0, 0, 2 c_{33} \gamma_3, 0, c_{13} \gamma_1, c_{23} \gamma_2]$.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn quadratic_form_d3<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> Vector6<T> {
    Vector6::new(0.0, 0.0, 2.0 * c.c33 * gamma[2], 0.0, c.c13 * gamma[0], c.c23 * gamma[1])
}

/// The gradient of every entry of $\vec Q$, one column per invariant.
fn quadratic_form_gradient<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> [Vector6<T>; 3] {
    [
        quadratic_form_d1(c, gamma),
        quadratic_form_d2(c, gamma),
        quadratic_form_d3(c, gamma),
    ]
}

/// The (constant) second derivative $\frac{\partial^2 \vec Q}{\partial \gamma_a \partial \gamma_b}$.
///
/// # Panics
///
/// Panics if `a` or `b` is not one of `0, 1, 2`.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn quadratic_form_second_derivative<T: Real>(c: &FungCoefficients<T>, a: usize, b: usize) -> Vector6<T> {
    let mut q_ab = Vector6::zeros();
    match (a.min(b), a.max(b)) {
        (0, 0) => q_ab[0] = 2.0 * c.c11,
        (1, 1) => q_ab[1] = 2.0 * c.c22,
        (2, 2) => q_ab[2] = 2.0 * c.c33,
        (0, 1) => q_ab[3] = c.c12,
        (0, 2) => q_ab[4] = c.c13,
        (1, 2) => q_ab[5] = c.c23,
        _ => panic!("invariant index out of bounds: ({a}, {b})"),
    }
    q_ab
}

fn energy_from_exponent<T: Real>(c: &FungCoefficients<T>, q: &Vector6<T>) -> T {
    c.c0 * (q.map(|q_i| q_i.exp()).sum() - T::one())
}

fn response_from_exponent<T: Real>(c: &FungCoefficients<T>, q_a: &Vector6<T>, q: &Vector6<T>) -> T {
    c.c0 * q_a.component_mul(&q.map(|q_i| q_i.exp())).sum()
}

fn response_vector_from_exponent<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>, q: &Vector6<T>) -> Vector3<T> {
    let exp_q = q.map(|q_i| q_i.exp());
    let [q1, q2, q3] = quadratic_form_gradient(c, gamma);
    Vector3::new(
        q1.component_mul(&exp_q).sum(),
        q2.component_mul(&exp_q).sum(),
        q3.component_mul(&exp_q).sum(),
    ) * c.c0
}

/// $W_{ab} = c_0 \sum_i \left( Q_{ab,i} + Q_{a,i} Q_{b,i} \right) e^{Q_i}$.
fn hessian_from_exponent<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>, q: &Vector6<T>) -> Matrix3<T> {
    let exp_q = q.map(|q_i| q_i.exp());
    let q_grad = quadratic_form_gradient(c, gamma);
    Matrix3::from_fn(|a, b| {
        let q_ab = quadratic_form_second_derivative(c, a, b) + q_grad[a].component_mul(&q_grad[b]);
        c.c0 * q_ab.component_mul(&exp_q).sum()
    })
}

/// $W = c_0 (\sum_i e^{Q_i} - 1)$.
pub fn strain_energy<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> T {
    energy_from_exponent(c, &quadratic_form(c, gamma))
}

/// $W = c_0 (\sum_i e^{Q_i - Q_{\text{ref}, i}} - 1)$.
pub fn strain_energy_shifted<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>, reference: &Vector3<T>) -> T {
    energy_from_exponent(c, &quadratic_form_shifted(c, gamma, reference))
}

/// $W_1 = c_0 \sum_i \pd{Q_i}{\gamma_1} e^{Q_i}$.
pub fn response_w1<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> T {
    response_from_exponent(c, &quadratic_form_d1(c, gamma), &quadratic_form(c, gamma))
}

/// $W_2 = c_0 \sum_i \pd{Q_i}{\gamma_2} e^{Q_i}$.
pub fn response_w2<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> T {
    response_from_exponent(c, &quadratic_form_d2(c, gamma), &quadratic_form(c, gamma))
}

/// $W_3 = c_0 \sum_i \pd{Q_i}{\gamma_3} e^{Q_i}$.
pub fn response_w3<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>) -> T {
    response_from_exponent(c, &quadratic_form_d3(c, gamma), &quadratic_form(c, gamma))
}

/// Shifted analogue of [`response_w1`]. The derivative of $\vec Q$ is not shifted.
pub fn response_w1_shifted<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>, reference: &Vector3<T>) -> T {
    response_from_exponent(
        c,
        &quadratic_form_d1(c, gamma),
        &quadratic_form_shifted(c, gamma, reference),
    )
}

/// Shifted analogue of [`response_w2`]. The derivative of $\vec Q$ is not shifted.
pub fn response_w2_shifted<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>, reference: &Vector3<T>) -> T {
    response_from_exponent(
        c,
        &quadratic_form_d2(c, gamma),
        &quadratic_form_shifted(c, gamma, reference),
    )
}

/// Shifted analogue of [`response_w3`]. The derivative of $\vec Q$ is not shifted.
pub fn response_w3_shifted<T: Real>(c: &FungCoefficients<T>, gamma: &Vector3<T>, reference: &Vector3<T>) -> T {
    response_from_exponent(
        c,
        &quadratic_form_d3(c, gamma),
        &quadratic_form_shifted(c, gamma, reference),
    )
}

/// The Fung-type energy $c_0 (\sum_i e^{Q_i} - 1)$.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungEnergy;

impl<T: Real> StrainEnergy<T> for FungEnergy {
    type Parameters = FungCoefficients<T>;

    fn compute_energy(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> T {
        strain_energy(parameters, invariants)
    }

    fn compute_response(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Vector3<T> {
        let q = quadratic_form(parameters, invariants);
        response_vector_from_exponent(parameters, invariants, &q)
    }

    fn compute_response_derivatives(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Matrix3<T> {
        let q = quadratic_form(parameters, invariants);
        hessian_from_exponent(parameters, invariants, &q)
    }
}

/// The Fung-type energy recentred on a reference strain state, typically the largest strain
/// observed in an experiment.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftedFungEnergy<T: Real> {
    pub reference: Vector3<T>,
}

impl<T: Real> ShiftedFungEnergy<T> {
    pub fn with_reference(reference: Vector3<T>) -> Self {
        Self { reference }
    }
}

impl<T: Real> StrainEnergy<T> for ShiftedFungEnergy<T> {
    type Parameters = FungCoefficients<T>;

    fn compute_energy(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> T {
        strain_energy_shifted(parameters, invariants, &self.reference)
    }

    fn compute_response(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Vector3<T> {
        let q = quadratic_form_shifted(parameters, invariants, &self.reference);
        response_vector_from_exponent(parameters, invariants, &q)
    }

    fn compute_response_derivatives(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Matrix3<T> {
        let q = quadratic_form_shifted(parameters, invariants, &self.reference);
        hessian_from_exponent(parameters, invariants, &q)
    }
}
