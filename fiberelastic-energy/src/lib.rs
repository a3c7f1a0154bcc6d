//! Strain energies of the fiber invariants for `fiberelastic`.
use fiberelastic::basis::{reconstruct_stress, reference_basis, tensor_basis};
use fiberelastic::kinematics::strain_invariants;
use fiberelastic::nalgebra::{Matrix2, Matrix3, Vector2, Vector3};
use fiberelastic::{Error, Real};
use log::warn;
use numeric_literals::replace_float_literals;

pub mod exponential;
pub mod model;
pub mod polynomial;
pub mod residual;

/// A strain energy density $W(\gamma_1, \gamma_2, \gamma_3)$ expressed in the fiber invariants.
///
/// Implementations must keep the three levels of derivatives consistent with each other, i.e.
/// [`compute_response`](Self::compute_response) is the gradient of
/// [`compute_energy`](Self::compute_energy) and
/// [`compute_response_derivatives`](Self::compute_response_derivatives) is its Hessian.
pub trait StrainEnergy<T: Real> {
    type Parameters;

    /// Compute the energy density $W(\vec \gamma)$.
    fn compute_energy(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> T;

    /// Compute the response functions $W_a = \pd{W}{\gamma_a}$.
    fn compute_response(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Vector3<T>;

    /// Compute the symmetric matrix of second derivatives
    /// $W_{ab} = \frac{\partial^2 W}{\partial \gamma_a \partial \gamma_b}$.
    fn compute_response_derivatives(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Matrix3<T>;
}

impl<'a, T, E> StrainEnergy<T> for &'a E
where
    T: Real,
    E: StrainEnergy<T>,
{
    type Parameters = E::Parameters;

    fn compute_energy(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> T {
        E::compute_energy(self, invariants, parameters)
    }

    fn compute_response(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Vector3<T> {
        E::compute_response(self, invariants, parameters)
    }

    fn compute_response_derivatives(&self, invariants: &Vector3<T>, parameters: &Self::Parameters) -> Matrix3<T> {
        E::compute_response_derivatives(self, invariants, parameters)
    }
}

/// A wrapper that turns a strain energy and a fiber direction into a material model acting on
/// deformation gradients.
///
/// All stress measures are assembled from the response functions of the energy and the
/// structural bases of [`fiberelastic::basis`].
#[derive(Debug, Clone)]
pub struct FiberMaterial<'a, T: Real, Energy> {
    energy: &'a Energy,
    fiber_direction: Vector2<T>,
}

impl<'a, T, Energy> FiberMaterial<'a, T, Energy>
where
    T: Real,
    Energy: StrainEnergy<T>,
{
    /// Creates a material with the given reference fiber direction $\vec M$.
    ///
    /// The direction is used as given. A direction that is not of unit length is reported with
    /// a warning, since the invariants are only meaningful for unit $\vec M$.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn new(energy: &'a Energy, fiber_direction: Vector2<T>) -> Self {
        let norm = fiber_direction.norm();
        if (norm - 1.0).abs() > 1e-8 {
            warn!("Fiber direction is not of unit length (norm = {norm})");
        }
        Self {
            energy,
            fiber_direction,
        }
    }

    pub fn energy(&self) -> &'a Energy {
        self.energy
    }

    pub fn fiber_direction(&self) -> &Vector2<T> {
        &self.fiber_direction
    }

    pub fn compute_invariants(&self, deformation_gradient: &Matrix2<T>) -> Result<Vector3<T>, Error> {
        strain_invariants(deformation_gradient, &self.fiber_direction)
    }

    /// Compute the energy density $\psi(\vec F) = W(\vec \gamma(\vec F))$.
    pub fn compute_energy_density(
        &self,
        deformation_gradient: &Matrix2<T>,
        parameters: &Energy::Parameters,
    ) -> Result<T, Error> {
        let gamma = self.compute_invariants(deformation_gradient)?;
        Ok(self.energy.compute_energy(&gamma, parameters))
    }

    /// Compute the response functions $(W_1, W_2, W_3)$ at the deformation $\vec F$.
    pub fn compute_response(
        &self,
        deformation_gradient: &Matrix2<T>,
        parameters: &Energy::Parameters,
    ) -> Result<Vector3<T>, Error> {
        let gamma = self.compute_invariants(deformation_gradient)?;
        Ok(self.energy.compute_response(&gamma, parameters))
    }

    /// Compute the Kirchhoff stress $\vec \tau = \sum_a W_a \vec B_a$.
    pub fn compute_kirchhoff_stress(
        &self,
        deformation_gradient: &Matrix2<T>,
        parameters: &Energy::Parameters,
    ) -> Result<Matrix2<T>, Error> {
        let response = self.compute_response(deformation_gradient, parameters)?;
        let basis = tensor_basis(deformation_gradient, &self.fiber_direction)?;
        Ok(reconstruct_stress(&basis, &response))
    }

    /// Compute the Cauchy stress $\vec \sigma = \vec \tau / J$ with $J = \det \vec F$.
    pub fn compute_cauchy_stress(
        &self,
        deformation_gradient: &Matrix2<T>,
        parameters: &Energy::Parameters,
    ) -> Result<Matrix2<T>, Error> {
        let j = deformation_gradient.determinant();
        if j == T::zero() {
            return Err(Error::SingularMatrix);
        }
        Ok(self.compute_kirchhoff_stress(deformation_gradient, parameters)? / j)
    }

    /// Compute the second Piola-Kirchhoff stress $\vec S = \vec F^{-1} \vec \tau \vec F^{-T}$.
    pub fn compute_second_piola_kirchhoff_stress(
        &self,
        deformation_gradient: &Matrix2<T>,
        parameters: &Energy::Parameters,
    ) -> Result<Matrix2<T>, Error> {
        let basis = reference_basis(deformation_gradient, &self.fiber_direction)?;
        let response = self.compute_response(deformation_gradient, parameters)?;
        Ok(reconstruct_stress(&basis, &response))
    }

    /// Compute the first Piola-Kirchhoff stress $\vec P = \vec F \vec S = \pd{\psi}{\vec F}$.
    pub fn compute_first_piola_kirchhoff_stress(
        &self,
        deformation_gradient: &Matrix2<T>,
        parameters: &Energy::Parameters,
    ) -> Result<Matrix2<T>, Error> {
        let s = self.compute_second_piola_kirchhoff_stress(deformation_gradient, parameters)?;
        Ok(deformation_gradient * s)
    }
}
