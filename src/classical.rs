//! Classical row-major multiplication kernels on plain slices

/// Multiply two n×n matrices (row-major) of size `n`.
pub fn multiply_matrices(a: &[f64], b: &[f64], n: usize) -> Vec<f64> {
    multiply_rect(a, b, n, n, n)
}

/// Multiply an m×n matrix by an n×p matrix, both row-major.
///
/// Returns the m×p product, row-major.
///
/// # Panics
/// If `a.len() != m * n` or `b.len() != n * p`.
pub fn multiply_rect(a: &[f64], b: &[f64], m: usize, n: usize, p: usize) -> Vec<f64> {
    assert_eq!(a.len(), m * n, "left operand is not {}x{}", m, n);
    assert_eq!(b.len(), n * p, "right operand is not {}x{}", n, p);

    let mut c = vec![0.0; m * p];
    for i in 0..m {
        for j in 0..p {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * p + j];
            }
            c[i * p + j] = sum;
        }
    }
    c
}
