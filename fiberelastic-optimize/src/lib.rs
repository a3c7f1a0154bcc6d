/// Numerical differentiation of small fixed-size functions
pub mod calculus;
