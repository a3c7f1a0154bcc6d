//! Polynomial strain energies.
//!
//! The energy is a weighted sum of monomials
//! $$
//! W(\vec \gamma) = \sum_y c_y \, \gamma_1^{i_y} \gamma_2^{j_y} \gamma_3^{k_y},
//! $$
//! where the exponents of term $y$ are obtained by decoding its entry in a parallel sequence
//! of exponent indices (see [`fiberelastic::index`]).
//!
//! Derivatives follow the power rule term by term. A term whose exponent in a differentiated
//! variable is too small contributes *exactly* zero. In particular $\partial_{\gamma_1}$ of a
//! term with $i = 0$ is $0$ even at $\gamma_1 = 0$, where evaluating $i \gamma_1^{i - 1}$ would
//! be undefined.
use crate::StrainEnergy;
use fiberelastic::index::{decode, ExponentTriple};
use fiberelastic::nalgebra::{Matrix3, Vector3};
use fiberelastic::{Error, Real};
use itertools::izip;
use log::debug;
use serde::{Deserialize, Serialize};

/// A single term $c \, \gamma_1^i \gamma_2^j \gamma_3^k$ in a serializable form.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolynomialTerm<T> {
    pub exponents: ExponentTriple,
    pub coefficient: T,
}

/// Coefficients of a polynomial energy together with the vectorized exponents of each term.
///
/// The two sequences always have equal length. The exponent indices are only meaningful for the
/// top degree they were encoded with, which is stored alongside them.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCoefficients<T> {
    top_degree: usize,
    coefficients: Vec<T>,
    exponent_indices: Vec<usize>,
}

impl<T: Real> PolynomialCoefficients<T> {
    /// Pairs coefficients with exponent indices.
    ///
    /// Fails with [`Error::ShapeMismatch`] if the sequences have different lengths.
    pub fn try_new(top_degree: usize, coefficients: Vec<T>, exponent_indices: Vec<usize>) -> Result<Self, Error> {
        check_shape(&coefficients, &exponent_indices)?;
        Ok(Self {
            top_degree,
            coefficients,
            exponent_indices,
        })
    }

    /// Vectorizes a list of terms.
    ///
    /// Fails with [`Error::UnaddressableExponents`] if a term cannot be addressed with the given
    /// top degree.
    pub fn from_terms(top_degree: usize, terms: &[PolynomialTerm<T>]) -> Result<Self, Error> {
        let mut coefficients = Vec::with_capacity(terms.len());
        let mut exponent_indices = Vec::with_capacity(terms.len());
        for term in terms {
            term.exponents.validate(top_degree)?;
            coefficients.push(term.coefficient);
            exponent_indices.push(term.exponents.encode(top_degree));
        }
        debug!(
            "Vectorized {} polynomial terms with top degree {}",
            terms.len(),
            top_degree
        );
        Ok(Self {
            top_degree,
            coefficients,
            exponent_indices,
        })
    }

    /// Interprets a dense parameter vector: entry `y` is the coefficient of the term stored at
    /// position `y` of the codec's address space.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless the vector has exactly
    /// [`parameter_count`](fiberelastic::index::parameter_count) entries.
    pub fn from_parameter_vector(top_degree: usize, parameters: &[T]) -> Result<Self, Error> {
        let expected = fiberelastic::index::parameter_count(top_degree);
        if parameters.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: parameters.len(),
            });
        }
        Ok(Self {
            top_degree,
            coefficients: parameters.to_vec(),
            exponent_indices: (0..expected).collect(),
        })
    }

    /// The top degree the exponent indices are encoded with.
    pub fn top_degree(&self) -> usize {
        self.top_degree
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    pub fn exponent_indices(&self) -> &[usize] {
        &self.exponent_indices
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Decodes the coefficients back into terms.
    pub fn terms(&self) -> Vec<PolynomialTerm<T>> {
        izip!(&self.coefficients, &self.exponent_indices)
            .map(|(&coefficient, &index)| PolynomialTerm {
                exponents: ExponentTriple::decode(self.top_degree, index),
                coefficient,
            })
            .collect()
    }
}

fn check_shape<T>(coefficients: &[T], exponent_indices: &[usize]) -> Result<(), Error> {
    if coefficients.len() == exponent_indices.len() {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            expected: coefficients.len(),
            actual: exponent_indices.len(),
        })
    }
}

fn scalar<T: Real>(n: usize) -> T {
    T::from_usize(n).expect("integer must fit in T")
}

/// Computes $\frac{d^r}{dx^r} x^n$, which is exactly zero when $n < r$.
fn power_derivative<T: Real>(x: T, n: usize, r: usize) -> T {
    if n < r {
        T::zero()
    } else {
        let falling_factorial: usize = (n - r + 1..=n).product();
        scalar::<T>(falling_factorial) * x.powi((n - r) as i32)
    }
}

/// Computes the mixed partial derivative of order `orders[a]` in $\gamma_a$ of the monomial
/// with the given exponents.
fn monomial_derivative<T: Real>(gamma: &Vector3<T>, exponents: &ExponentTriple, orders: [usize; 3]) -> T {
    let &ExponentTriple { i, j, k } = exponents;
    if i < orders[0] || j < orders[1] || k < orders[2] {
        return T::zero();
    }
    power_derivative(gamma[0], i, orders[0])
        * power_derivative(gamma[1], j, orders[1])
        * power_derivative(gamma[2], k, orders[2])
}

/// The monomial $\gamma_1^i \gamma_2^j \gamma_3^k$ itself (with unit coefficient).
pub fn term_energy<T: Real>(gamma: &Vector3<T>, exponents: &ExponentTriple) -> T {
    monomial_derivative(gamma, exponents, [0, 0, 0])
}

macro_rules! term_derivative {
    ($(#[$attr:meta])* $name:ident, $orders:expr) => {
        $(#[$attr])*
        pub fn $name<T: Real>(gamma: &Vector3<T>, exponents: &ExponentTriple) -> T {
            monomial_derivative(gamma, exponents, $orders)
        }
    };
}

term_derivative!(
    /// $\partial_{\gamma_1}$ of the monomial; zero unless $i > 0$.
    d_w1, [1, 0, 0]);
term_derivative!(
    /// $\partial_{\gamma_2}$ of the monomial; zero unless $j > 0$.
    d_w2, [0, 1, 0]);
term_derivative!(
    /// $\partial_{\gamma_3}$ of the monomial; zero unless $k > 0$.
    d_w3, [0, 0, 1]);
term_derivative!(
    /// $\partial^2_{\gamma_1}$ of the monomial; zero unless $i > 1$.
    d_w11, [2, 0, 0]);
term_derivative!(
    /// $\partial^2_{\gamma_2}$ of the monomial; zero unless $j > 1$.
    d_w22, [0, 2, 0]);
term_derivative!(
    /// $\partial^2_{\gamma_3}$ of the monomial; zero unless $k > 1$.
    d_w33, [0, 0, 2]);
term_derivative!(
    /// $\partial_{\gamma_1} \partial_{\gamma_2}$ of the monomial; zero unless $i, j > 0$.
    d_w12, [1, 1, 0]);
term_derivative!(
    /// $\partial_{\gamma_1} \partial_{\gamma_3}$ of the monomial; zero unless $i, k > 0$.
    d_w13, [1, 0, 1]);
term_derivative!(
    /// $\partial_{\gamma_2} \partial_{\gamma_3}$ of the monomial; zero unless $j, k > 0$.
    d_w23, [0, 1, 1]);

/// Value, gradient and Hessian of a single monomial.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TermDerivatives<T: Real> {
    pub value: T,
    pub gradient: Vector3<T>,
    pub hessian: Matrix3<T>,
}

pub fn term_derivatives<T: Real>(gamma: &Vector3<T>, exponents: &ExponentTriple) -> TermDerivatives<T> {
    let w12 = d_w12(gamma, exponents);
    let w13 = d_w13(gamma, exponents);
    let w23 = d_w23(gamma, exponents);
    #[rustfmt::skip]
    let hessian = Matrix3::new(
        d_w11(gamma, exponents), w12, w13,
        w12, d_w22(gamma, exponents), w23,
        w13, w23, d_w33(gamma, exponents),
    );
    TermDerivatives {
        value: term_energy(gamma, exponents),
        gradient: Vector3::new(d_w1(gamma, exponents), d_w2(gamma, exponents), d_w3(gamma, exponents)),
        hessian,
    }
}

/// Sums $\sum_y c_y f(\vec \gamma, (i, j, k)_y)$ over all terms.
fn weighted_sum<T: Real>(
    top_degree: usize,
    gamma: &Vector3<T>,
    coefficients: &[T],
    exponent_indices: &[usize],
    f: impl Fn(&Vector3<T>, &ExponentTriple) -> T,
) -> T {
    izip!(coefficients, exponent_indices).fold(T::zero(), |sum, (&c, &index)| {
        let (i, j, k) = decode(top_degree, index);
        sum + c * f(gamma, &ExponentTriple::new(i, j, k))
    })
}

/// The total strain energy $\sum_y c_y \gamma_1^{i_y} \gamma_2^{j_y} \gamma_3^{k_y}$.
///
/// Fails with [`Error::ShapeMismatch`] if `coefficients` and `exponent_indices` have different
/// lengths.
pub fn strain_energy<T: Real>(
    top_degree: usize,
    gamma: &Vector3<T>,
    coefficients: &[T],
    exponent_indices: &[usize],
) -> Result<T, Error> {
    check_shape(coefficients, exponent_indices)?;
    Ok(weighted_sum(top_degree, gamma, coefficients, exponent_indices, term_energy))
}

macro_rules! response_function {
    ($(#[$attr:meta])* $name:ident, $term_fn:ident) => {
        $(#[$attr])*
        ///
        /// Fails with [`Error::ShapeMismatch`] if `coefficients` and `exponent_indices` have
        /// different lengths.
        pub fn $name<T: Real>(
            top_degree: usize,
            gamma: &Vector3<T>,
            coefficients: &[T],
            exponent_indices: &[usize],
        ) -> Result<T, Error> {
            check_shape(coefficients, exponent_indices)?;
            Ok(weighted_sum(top_degree, gamma, coefficients, exponent_indices, $term_fn))
        }
    };
}

response_function!(
    /// The response function $W_1 = \sum_y c_y \, \partial_{\gamma_1} (\text{term } y)$.
    response_w1, d_w1);
response_function!(
    /// The response function $W_2 = \sum_y c_y \, \partial_{\gamma_2} (\text{term } y)$.
    response_w2, d_w2);
response_function!(
    /// The response function $W_3 = \sum_y c_y \, \partial_{\gamma_3} (\text{term } y)$.
    response_w3, d_w3);
response_function!(
    /// $W_{11} = \partial^2 W / \partial \gamma_1^2$.
    response_w11, d_w11);
response_function!(
    /// $W_{22} = \partial^2 W / \partial \gamma_2^2$.
    response_w22, d_w22);
response_function!(
    /// $W_{33} = \partial^2 W / \partial \gamma_3^2$.
    response_w33, d_w33);
response_function!(
    /// $W_{12} = \partial^2 W / \partial \gamma_1 \partial \gamma_2$.
    response_w12, d_w12);
response_function!(
    /// $W_{13} = \partial^2 W / \partial \gamma_1 \partial \gamma_3$.
    response_w13, d_w13);
response_function!(
    /// $W_{23} = \partial^2 W / \partial \gamma_2 \partial \gamma_3$.
    response_w23, d_w23);

/// The polynomial strain energy family for a fixed top degree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolynomialEnergy {
    pub top_degree: usize,
}

impl PolynomialEnergy {
    pub fn with_top_degree(top_degree: usize) -> Self {
        Self { top_degree }
    }

    /// The energy matching the top degree the coefficients are encoded with.
    pub fn for_coefficients<T: Real>(coefficients: &PolynomialCoefficients<T>) -> Self {
        Self::with_top_degree(coefficients.top_degree)
    }

    fn check_top_degree<T>(&self, parameters: &PolynomialCoefficients<T>) {
        debug_assert_eq!(
            parameters.top_degree, self.top_degree,
            "coefficients encoded with a different top degree than the energy decodes with"
        );
    }
}

impl<T: Real> StrainEnergy<T> for PolynomialEnergy {
    type Parameters = PolynomialCoefficients<T>;

    fn compute_energy(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> T {
        self.check_top_degree(parameters);
        let PolynomialCoefficients {
            coefficients,
            exponent_indices,
            ..
        } = parameters;
        weighted_sum(self.top_degree, invariants, coefficients, exponent_indices, term_energy)
    }

    fn compute_response(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Vector3<T> {
        self.check_top_degree(parameters);
        izip!(&parameters.coefficients, &parameters.exponent_indices).fold(
            Vector3::zeros(),
            |response, (&c, &index)| {
                let exponents = ExponentTriple::decode(self.top_degree, index);
                let gradient = Vector3::new(
                    d_w1(invariants, &exponents),
                    d_w2(invariants, &exponents),
                    d_w3(invariants, &exponents),
                );
                response + gradient * c
            },
        )
    }

    fn compute_response_derivatives(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Matrix3<T> {
        self.check_top_degree(parameters);
        izip!(&parameters.coefficients, &parameters.exponent_indices).fold(
            Matrix3::zeros(),
            |hessian, (&c, &index)| {
                let exponents = ExponentTriple::decode(self.top_degree, index);
                hessian + term_derivatives(invariants, &exponents).hessian * c
            },
        )
    }
}
