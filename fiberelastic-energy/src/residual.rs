//! Residuals between measured stresses and the response of a material model.
//!
//! Measured stresses are projected onto the structural basis of the deformed configuration,
//! which gives the "measured" response functions $(W_1, W_2, W_3)$ for each sample. The residual
//! of a sample is the model response minus the measured response, and the residuals of all
//! samples are stacked into a single vector of length $3 n$. A fitting driver minimizes the
//! norm of this vector over the energy parameters.
use crate::{FiberMaterial, StrainEnergy};
use eyre::WrapErr;
use fiberelastic::basis::project_to_response;
use fiberelastic::nalgebra::{DVector, Matrix2, Vector3};
use fiberelastic::Real;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A deformation gradient together with the Kirchhoff stress measured at it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StressSample<T: Real> {
    pub deformation_gradient: Matrix2<T>,
    pub stress: Matrix2<T>,
}

impl<T: Real> StressSample<T> {
    pub fn new(deformation_gradient: Matrix2<T>, stress: Matrix2<T>) -> Self {
        Self {
            deformation_gradient,
            stress,
        }
    }
}

fn sample_residual<T, Energy>(
    material: &FiberMaterial<T, Energy>,
    parameters: &Energy::Parameters,
    sample: &StressSample<T>,
) -> eyre::Result<Vector3<T>>
where
    T: Real,
    Energy: StrainEnergy<T>,
{
    let f = &sample.deformation_gradient;
    let measured = project_to_response(&sample.stress, f, material.fiber_direction())
        .wrap_err("failed to project measured stress")?;
    let model = material
        .compute_response(f, parameters)
        .wrap_err("failed to evaluate model response")?;
    Ok(model - measured)
}

fn stack<T: Real>(residuals: &[Vector3<T>]) -> DVector<T> {
    DVector::from_iterator(3 * residuals.len(), residuals.iter().flat_map(|r| r.iter().copied()))
}

/// Computes the stacked residuals $\vec W^\text{model}(\vec F_s) - \vec W^\text{measured}_s$ of
/// all samples.
///
/// Entries `3 s .. 3 s + 3` of the result belong to sample `s`. An error in any sample is
/// returned with the index of the offending sample attached.
pub fn compute_response_residuals<T, Energy>(
    material: &FiberMaterial<T, Energy>,
    parameters: &Energy::Parameters,
    samples: &[StressSample<T>],
) -> eyre::Result<DVector<T>>
where
    T: Real,
    Energy: StrainEnergy<T>,
{
    debug!("Computing response residuals for {} samples", samples.len());
    let residuals = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            sample_residual(material, parameters, sample)
                .wrap_err_with(|| format!("failed to compute residual for sample {index}"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;
    Ok(stack(&residuals))
}

/// Same as [`compute_response_residuals`], but evaluates the samples in parallel.
pub fn compute_response_residuals_par<T, Energy>(
    material: &FiberMaterial<T, Energy>,
    parameters: &Energy::Parameters,
    samples: &[StressSample<T>],
) -> eyre::Result<DVector<T>>
where
    T: Real,
    Energy: StrainEnergy<T> + Sync,
    Energy::Parameters: Sync,
{
    debug!("Computing response residuals for {} samples in parallel", samples.len());
    let residuals = samples
        .par_iter()
        .enumerate()
        .map(|(index, sample)| {
            sample_residual(material, parameters, sample)
                .wrap_err_with(|| format!("failed to compute residual for sample {index}"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;
    Ok(stack(&residuals))
}
