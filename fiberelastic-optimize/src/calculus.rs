use nalgebra::{RealField, SMatrix, SVector};
use numeric_literals::replace_float_literals;

/// Approximates the gradient of the function `f: R^N -> R` at `x` with central finite
/// differences of step size `h`.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn approximate_gradient_fd<T, const N: usize>(
    mut f: impl FnMut(&SVector<T, N>) -> T,
    x: &SVector<T, N>,
    h: T,
) -> SVector<T, N>
where
    T: RealField + Copy,
{
    // Define quantities x+ and x- as follows:
    //  x+ := x + h e_i
    //  x- := x - h e_i
    // where e_i is the ith basis vector.
    let mut x_h = *x;
    let mut df = SVector::<T, N>::zeros();
    for i in 0..N {
        let x_i = x[i];
        x_h[i] = x_i + h;
        let f_plus = f(&x_h);
        x_h[i] = x_i - h;
        let f_minus = f(&x_h);
        x_h[i] = x_i;
        df[i] = (f_plus - f_minus) / (2.0 * h);
    }
    df
}

/// Approximates the Jacobian of the function $f: \mathbb{R}^N \rightarrow \mathbb{R}^M$
/// with central finite differences.
///
/// The Jacobian matrix is the $M \times N$ matrix whose entries are given by
/// $$ J_{ij} := \pd{f_i}{x_j}.$$
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn approximate_jacobian_fd<T, const M: usize, const N: usize>(
    mut f: impl FnMut(&SVector<T, N>) -> SVector<T, M>,
    x: &SVector<T, N>,
    h: T,
) -> SMatrix<T, M, N>
where
    T: RealField + Copy,
{
    let mut x_h = *x;
    let mut jacobian = SMatrix::<T, M, N>::zeros();
    // Build column by column
    for j in 0..N {
        // df_dxj ~ (f(x + h e_j) - f(x - h e_j)) / (2 h)
        let x_j = x[j];
        x_h[j] = x_j + h;
        let f_plus = f(&x_h);
        x_h[j] = x_j - h;
        let f_minus = f(&x_h);
        x_h[j] = x_j;
        jacobian.set_column(j, &((f_plus - f_minus) / (2.0 * h)));
    }
    jacobian
}

/// Approximates the derivative $\pd{f}{A}$ of a scalar function of a matrix argument with
/// central finite differences.
///
/// Entry $(i, j)$ of the result approximates $\pd{f}{A_{ij}}$. For a strain energy density
/// $\psi(\vec F)$ this is the first Piola-Kirchhoff stress.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn approximate_matrix_gradient_fd<T, const R: usize, const C: usize>(
    mut f: impl FnMut(&SMatrix<T, R, C>) -> T,
    a: &SMatrix<T, R, C>,
    h: T,
) -> SMatrix<T, R, C>
where
    T: RealField + Copy,
{
    let mut a_h = *a;
    let mut df = SMatrix::<T, R, C>::zeros();
    for j in 0..C {
        for i in 0..R {
            let a_ij = a[(i, j)];
            a_h[(i, j)] = a_ij + h;
            let f_plus = f(&a_h);
            a_h[(i, j)] = a_ij - h;
            let f_minus = f(&a_h);
            a_h[(i, j)] = a_ij;
            df[(i, j)] = (f_plus - f_minus) / (2.0 * h);
        }
    }
    df
}
