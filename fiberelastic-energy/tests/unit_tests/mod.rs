use fiberelastic::index::total_degree_triples;
use fiberelastic_energy::exponential::FungCoefficients;
use fiberelastic_energy::polynomial::PolynomialCoefficients;
use proptest::collection::vec;
use proptest::prelude::*;


/// Top degree used for randomly generated polynomial energies.
const TOP_DEGREE: usize = 4;

/// Exponent indices of a complete polynomial of degree `TOP_DEGREE`.
fn exponent_indices() -> Vec<usize> {
    total_degree_triples(TOP_DEGREE)
        .map(|triple| triple.encode(TOP_DEGREE))
        .collect()
}

fn polynomial_coefficients() -> impl Strategy<Value = PolynomialCoefficients<f64>> {
    let indices = exponent_indices();
    vec(-1.0..1.0, indices.len()).prop_map(move |coefficients| {
        PolynomialCoefficients::try_new(TOP_DEGREE, coefficients, indices.clone()).unwrap()
    })
}

fn fung_coefficients() -> impl Strategy<Value = FungCoefficients<f64>> {
    // Kept small so that the exponentials stay moderate for strongly sheared states
    let c = -0.1..0.1;
    (0.1..2.0, [c.clone(), c.clone(), c.clone(), c.clone(), c.clone(), c]).prop_map(
        |(c0, [c11, c22, c33, c12, c13, c23])| FungCoefficients {
            c0,
            c11,
            c22,
            c33,
            c12,
            c13,
            c23,
        },
    )
}
