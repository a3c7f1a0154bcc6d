//! Fiber kinematics of an in-plane deformation.
//!
//! Given a deformation gradient $\vec F$ and a unit fiber direction $\vec M$ in the reference
//! configuration, the deformed fiber direction is
//! $$
//! \vec m = \frac{\vec F \vec M}{\| \vec F \vec M \|}
//! $$
//! and $\vec s = \vec m^\perp$, $\vec M^\perp$ are the in-plane orthogonal complements.
//! In the frames $\\{ \vec M, \vec M^\perp \\}$ and $\\{ \vec m, \vec s \\}$ the deformation
//! gradient is upper triangular,
//! $$
//! \vec F = \lambda_M \, \vec m \otimes \vec M
//!     + (\lambda_M \phi \, \vec m + \lambda_S \, \vec s) \otimes \vec M^\perp,
//! $$
//! which defines the fiber stretch $\lambda_M$, the transverse stretch $\lambda_S$ and the shear
//! $\phi$. The strain invariants are $\gamma_1 = \ln \lambda_M$, $\gamma_2 = \ln \lambda_S$ and
//! $\gamma_3 = \phi$.
//!
//! Nothing is cached: every function recomputes what it needs from $\vec F$ and $\vec M$.
//! Unit length of $\vec M$ is a precondition owned by the caller.
use crate::{Error, Real};
use nalgebra::{Matrix2, Vector2, Vector3};

/// The in-plane orthogonal complement $\vec v^\perp = (-v_y, v_x)$.
pub fn orthogonal_complement<T: Real>(v: &Vector2<T>) -> Vector2<T> {
    Vector2::new(-v.y, v.x)
}

/// Unit fiber direction at angle `theta` (radians) from the first coordinate axis.
pub fn fiber_direction_from_angle<T: Real>(theta: T) -> Vector2<T> {
    Vector2::new(theta.cos(), theta.sin())
}

/// Computes the deformed fiber direction $\vec m = \vec F \vec M / \| \vec F \vec M \|$.
///
/// Fails with [`Error::DivideByZero`] if $\vec F \vec M = \vec 0$.
#[allow(non_snake_case)]
pub fn deformed_direction<T: Real>(
    deformation_gradient: &Matrix2<T>,
    fiber_direction: &Vector2<T>,
) -> Result<Vector2<T>, Error> {
    let FM = deformation_gradient * fiber_direction;
    let norm = FM.norm();
    if norm == T::zero() {
        Err(Error::DivideByZero { quantity: "|F M|" })
    } else {
        Ok(FM / norm)
    }
}

/// The fiber stretch $\lambda_M = \vec m \cdot \vec F \vec M$.
pub fn lambda_m<T: Real>(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<T, Error> {
    let m = deformed_direction(deformation_gradient, fiber_direction)?;
    Ok(m.dot(&(deformation_gradient * fiber_direction)))
}

/// The transverse stretch $\lambda_S = \vec s \cdot \vec F \vec M^\perp$.
pub fn lambda_s<T: Real>(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<T, Error> {
    let m = deformed_direction(deformation_gradient, fiber_direction)?;
    let s = orthogonal_complement(&m);
    Ok(s.dot(&(deformation_gradient * orthogonal_complement(fiber_direction))))
}

/// The shear $\phi = (\vec m \cdot \vec F \vec M^\perp) / \lambda_M$.
pub fn phi<T: Real>(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<T, Error> {
    let m = deformed_direction(deformation_gradient, fiber_direction)?;
    let lambda_m = m.dot(&(deformation_gradient * fiber_direction));
    let shear = m.dot(&(deformation_gradient * orthogonal_complement(fiber_direction)));
    divide(shear, lambda_m, "lambda_M")
}

/// $\gamma_1 = \ln \lambda_M$.
pub fn gamma_1<T: Real>(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<T, Error> {
    log_stretch(lambda_m(deformation_gradient, fiber_direction)?, "lambda_M")
}

/// $\gamma_2 = \ln \lambda_S$.
pub fn gamma_2<T: Real>(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<T, Error> {
    log_stretch(lambda_s(deformation_gradient, fiber_direction)?, "lambda_S")
}

/// $\gamma_3 = \phi$.
pub fn gamma_3<T: Real>(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<T, Error> {
    phi(deformation_gradient, fiber_direction)
}

/// Computes all three invariants $(\gamma_1, \gamma_2, \gamma_3)$ at once.
pub fn strain_invariants<T: Real>(
    deformation_gradient: &Matrix2<T>,
    fiber_direction: &Vector2<T>,
) -> Result<Vector3<T>, Error> {
    FiberKinematics::compute(deformation_gradient, fiber_direction)?.invariants()
}

/// The fiber frame and stretches of a single deformation state.
///
/// This is a plain value computed from $(\vec F, \vec M)$; it holds no reference to either.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FiberKinematics<T: Real> {
    /// Deformed fiber direction $\vec m$.
    pub m: Vector2<T>,
    /// Deformed transverse direction $\vec s = \vec m^\perp$.
    pub s: Vector2<T>,
    pub lambda_m: T,
    pub lambda_s: T,
    pub phi: T,
}

impl<T: Real> FiberKinematics<T> {
    #[allow(non_snake_case)]
    pub fn compute(deformation_gradient: &Matrix2<T>, fiber_direction: &Vector2<T>) -> Result<Self, Error> {
        let F = deformation_gradient;
        let M = fiber_direction;
        let M_perp = orthogonal_complement(M);
        let m = deformed_direction(F, M)?;
        let s = orthogonal_complement(&m);
        let F_M_perp = F * M_perp;

        let lambda_m = m.dot(&(F * M));
        let lambda_s = s.dot(&F_M_perp);
        let phi = divide(m.dot(&F_M_perp), lambda_m, "lambda_M")?;
        Ok(Self {
            m,
            s,
            lambda_m,
            lambda_s,
            phi,
        })
    }

    /// The invariants $(\ln \lambda_M, \ln \lambda_S, \phi)$.
    pub fn invariants(&self) -> Result<Vector3<T>, Error> {
        Ok(Vector3::new(
            log_stretch(self.lambda_m, "lambda_M")?,
            log_stretch(self.lambda_s, "lambda_S")?,
            self.phi,
        ))
    }

    /// The ratio $\lambda_S / \lambda_M$ scaling the shear part of the structural basis.
    pub fn shear_scale(&self) -> Result<T, Error> {
        divide(self.lambda_s, self.lambda_m, "lambda_M")
    }
}

fn divide<T: Real>(numerator: T, denominator: T, quantity: &'static str) -> Result<T, Error> {
    if denominator == T::zero() {
        Err(Error::DivideByZero { quantity })
    } else {
        Ok(numerator / denominator)
    }
}

fn log_stretch<T: Real>(stretch: T, quantity: &'static str) -> Result<T, Error> {
    if stretch <= T::zero() {
        Err(Error::Domain { quantity })
    } else {
        Ok(stretch.ln())
    }
}
