//! Vectorization of polynomial exponents.
//!
//! A polynomial strain energy is a weighted sum of monomials
//! $\gamma_1^i \gamma_2^j \gamma_3^k$, where only even powers $k$ of the shear invariant are
//! admitted. Each exponent triple $(i, j, k)$ is assigned a position in a flat parameter vector.
//! The layout is determined by the *top degree* $d$: with $n = \lfloor d / 2 \rfloor + 1$,
//! $$
//! y(i, j, k) = (d + 1) n \, i + n \, j + k / 2,
//! $$
//! so that $k$ varies fastest (halved, since only even values occur), then $j$, then $i$.
//!
//! The codec itself does not validate its input. Use [`ExponentTriple::is_addressable`] or
//! [`ExponentTriple::validate`] when the exponents come from an untrusted source.
use crate::Error;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Exponents $(i, j, k)$ of the monomial $\gamma_1^i \gamma_2^j \gamma_3^k$.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExponentTriple {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl ExponentTriple {
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    pub const fn total_degree(&self) -> usize {
        self.i + self.j + self.k
    }

    /// Whether the triple has a position in the parameter vector for the given top degree.
    ///
    /// This is the case when $k$ is even and every exponent is at most `top_degree`.
    pub const fn is_addressable(&self, top_degree: usize) -> bool {
        self.k % 2 == 0 && self.i <= top_degree && self.j <= top_degree && self.k <= top_degree
    }

    pub fn validate(&self, top_degree: usize) -> Result<(), Error> {
        if self.is_addressable(top_degree) {
            Ok(())
        } else {
            Err(Error::UnaddressableExponents {
                triple: *self,
                top_degree,
            })
        }
    }

    /// Position of the triple in the parameter vector. See [`encode`].
    pub const fn encode(&self, top_degree: usize) -> usize {
        encode(top_degree, self.i, self.j, self.k)
    }

    /// Triple stored at the given position of the parameter vector. See [`decode`].
    pub const fn decode(top_degree: usize, index: usize) -> Self {
        let (i, j, k) = decode(top_degree, index);
        Self { i, j, k }
    }
}

impl From<(usize, usize, usize)> for ExponentTriple {
    fn from((i, j, k): (usize, usize, usize)) -> Self {
        Self::new(i, j, k)
    }
}

/// Number of entries addressed along the (halved) $k$ axis.
const fn k_stride(top_degree: usize) -> usize {
    top_degree / 2 + 1
}

/// Number of entries addressed for every fixed $i$.
const fn i_stride(top_degree: usize) -> usize {
    (top_degree + 1) * k_stride(top_degree)
}

/// Maps the exponents $(i, j, k)$ to their position in the parameter vector.
///
/// Requires `k` to be even. Odd `k` or exponents exceeding `top_degree` produce indices that
/// do not round-trip through [`decode`].
pub const fn encode(top_degree: usize, i: usize, j: usize, k: usize) -> usize {
    i_stride(top_degree) * i + k_stride(top_degree) * j + k / 2
}

/// Recovers the exponents $(i, j, k)$ stored at `index` of the parameter vector.
///
/// Exact inverse of [`encode`] for the same `top_degree`.
pub const fn decode(top_degree: usize, index: usize) -> (usize, usize, usize) {
    let n = k_stride(top_degree);
    let n2 = i_stride(top_degree);
    (index / n2, (index % n2) / n, 2 * (index % n))
}

/// Size of the parameter vector, i.e. the number of addressable triples.
pub const fn parameter_count(top_degree: usize) -> usize {
    (top_degree + 1) * i_stride(top_degree)
}

/// All addressable triples, in the order of their position in the parameter vector.
pub fn addressable_triples(top_degree: usize) -> impl Iterator<Item = ExponentTriple> {
    iproduct!(0..=top_degree, 0..=top_degree, 0..k_stride(top_degree))
        .map(|(i, j, k_half)| ExponentTriple::new(i, j, 2 * k_half))
}

/// Addressable triples whose total degree $i + j + k$ does not exceed `top_degree`.
///
/// This is the usual basis of a complete polynomial of degree `top_degree`. The triples are
/// returned in increasing index order, but their indices are not contiguous.
pub fn total_degree_triples(top_degree: usize) -> impl Iterator<Item = ExponentTriple> {
    addressable_triples(top_degree).filter(move |triple| triple.total_degree() <= top_degree)
}
