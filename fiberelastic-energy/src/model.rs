//! Serializable descriptions of complete energy models.
//!
//! An [`EnergyModel`] bundles an energy family with its parameters, so that a calibrated
//! material can be stored as e.g. JSON and rebuilt later:
//!
//! ```json
//! { "family": "fung", "coefficients": { "c0": 1.0, "c11": 2.0, ... } }
//! ```
use crate::exponential::{FungCoefficients, FungEnergy, ShiftedFungEnergy};
use crate::polynomial::{PolynomialCoefficients, PolynomialEnergy, PolynomialTerm};
use crate::StrainEnergy;
use fiberelastic::nalgebra::{Matrix3, Vector3};
use fiberelastic::{Error, Real};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum EnergyModel<T: Real> {
    Polynomial {
        top_degree: usize,
        terms: Vec<PolynomialTerm<T>>,
    },
    Fung {
        coefficients: FungCoefficients<T>,
    },
    ShiftedFung {
        coefficients: FungCoefficients<T>,
        reference: Vector3<T>,
    },
}

impl<T: Real> EnergyModel<T> {
    /// Checks that the model can be evaluated, i.e. that every polynomial term is addressable
    /// with the stated top degree.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Polynomial { top_degree, terms } => terms
                .iter()
                .try_for_each(|term| term.exponents.validate(*top_degree)),
            Self::Fung { .. } | Self::ShiftedFung { .. } => Ok(()),
        }
    }

    /// Builds an evaluable energy with its parameters baked in.
    pub fn build(&self) -> Result<AnyEnergy<T>, Error> {
        let energy = match self {
            Self::Polynomial { top_degree, terms } => AnyEnergy::Polynomial {
                energy: PolynomialEnergy::with_top_degree(*top_degree),
                coefficients: PolynomialCoefficients::from_terms(*top_degree, terms)?,
            },
            Self::Fung { coefficients } => AnyEnergy::Fung {
                energy: FungEnergy,
                coefficients: *coefficients,
            },
            Self::ShiftedFung {
                coefficients,
                reference,
            } => AnyEnergy::ShiftedFung {
                energy: ShiftedFungEnergy::with_reference(*reference),
                coefficients: *coefficients,
            },
        };
        Ok(energy)
    }
}

/// An energy of any supported family, together with its parameters.
///
/// Since the parameters are owned by the energy, the associated parameter type is `()`.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyEnergy<T: Real> {
    Polynomial {
        energy: PolynomialEnergy,
        coefficients: PolynomialCoefficients<T>,
    },
    Fung {
        energy: FungEnergy,
        coefficients: FungCoefficients<T>,
    },
    ShiftedFung {
        energy: ShiftedFungEnergy<T>,
        coefficients: FungCoefficients<T>,
    },
}

macro_rules! dispatch {
    ($self:expr, $method:ident, $invariants:expr) => {
        match $self {
            AnyEnergy::Polynomial { energy, coefficients } => energy.$method($invariants, coefficients),
            AnyEnergy::Fung { energy, coefficients } => energy.$method($invariants, coefficients),
            AnyEnergy::ShiftedFung { energy, coefficients } => energy.$method($invariants, coefficients),
        }
    };
}

impl<T: Real> StrainEnergy<T> for AnyEnergy<T> {
    type Parameters = ();

    fn compute_energy(&self, invariants: &Vector3<T>, _parameters: &()) -> T {
        dispatch!(self, compute_energy, invariants)
    }

    fn compute_response(&self, invariants: &Vector3<T>, _parameters: &()) -> Vector3<T> {
        dispatch!(self, compute_response, invariants)
    }

    fn compute_response_derivatives(&self, invariants: &Vector3<T>, _parameters: &()) -> Matrix3<T> {
        dispatch!(self, compute_response_derivatives, invariants)
    }
}
