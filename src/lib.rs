//! Kinematics and stress recovery for invariant-based models of fiber-reinforced membranes.
//!
//! A membrane with a single preferred fiber direction $\vec M$ is described through three
//! invariants of the in-plane deformation gradient $\vec F$,
//! $$
//! \gamma_1 = \ln \lambda_M, \qquad \gamma_2 = \ln \lambda_S, \qquad \gamma_3 = \phi,
//! $$
//! where $\lambda_M$ is the stretch along the fiber, $\lambda_S$ the stretch transverse to it
//! and $\phi$ the amount of shear between the two. Strain energies are functions of these
//! invariants (see the `fiberelastic-energy` crate), and the [`basis`] module maps their
//! derivatives back into 2x2 stress tensors and vice versa.
//!
//! Polynomial energies address their coefficients through the index codec in [`index`].
use nalgebra::RealField;

pub mod basis;
pub mod error;
pub mod index;
pub mod kinematics;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub use error::Error;

pub extern crate nalgebra;

/// Scalar types supported by the library.
///
/// Used as a trait alias for the bounds needed by every generic routine in `fiberelastic`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
