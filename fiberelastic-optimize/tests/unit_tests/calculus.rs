use fiberelastic_optimize::calculus::*;
use matrixcompare::assert_matrix_eq;
use nalgebra::{matrix, vector, Matrix2, Vector2, Vector3};

#[test]
fn test_approximate_gradient_fd() {
    // Define some function f and its gradient
    let f = |x: &Vector3<f64>| {
        let (x, y, z) = (x[0], x[1], x[2]);
        3.0 * x * x * x + 3.0 * x * y - 5.0 * z * z + 2.0
    };
    let f_grad = |x: &Vector3<f64>| {
        let (x, y, z) = (x[0], x[1], x[2]);
        vector![9.0 * x * x + 3.0 * y, 3.0 * x, -10.0 * z]
    };

    let x = vector![3.0, 4.0, 5.0];
    let f_grad_fd = approximate_gradient_fd(f, &x, 1e-6);

    assert_matrix_eq!(f_grad_fd, f_grad(&x), comp = abs, tol = 1e-5);
}

#[test]
fn approximate_jacobian_simple_function() {
    let f = |x: &Vector2<f64>| {
        let (x1, x2) = (x[0], x[1]);
        vector![x1 * x2 + 3.0, x1 * x1 + x2 * x2 + x1 + 5.0]
    };

    let x = vector![3.0, 4.0];
    let j = approximate_jacobian_fd(f, &x, 1e-6);

    // J = [   x2           x1 ]
    //     [ 2*x1 + 1     2*x2 ]
    let expected = matrix![4.0, 3.0;
                           7.0, 8.0];
    assert_matrix_eq!(j, expected, comp = abs, tol = 1e-6);
}

#[test]
fn approximate_matrix_gradient_of_determinant() {
    // d(det A)/dA = cof(A) = det(A) A^{-T}
    let a = matrix![2.0, 1.0;
                    3.0, 4.0];
    let gradient = approximate_matrix_gradient_fd(|a: &Matrix2<f64>| a.determinant(), &a, 1e-6);
    let expected = matrix![4.0, -3.0;
                           -1.0, 2.0];
    assert_matrix_eq!(gradient, expected, comp = abs, tol = 1e-6);
}

#[test]
fn finite_differences_leave_input_unchanged() {
    let x = vector![1.0, -2.0, 0.5];
    let x_copy = x;
    let _ = approximate_gradient_fd(|x: &Vector3<f64>| x.norm_squared(), &x, 1e-4);
    assert_eq!(x, x_copy);
}
