use num::{Complex, Zero};

use crate::RealScalar;

/// Full 1D convolution of two coefficient slices.
///
/// `output[k] = sum over i + j == k of input[i] * kernel[j]`, with output
/// length `input.len() + kernel.len() - 1`.
pub(crate) fn convolve_1d<T: RealScalar>(
    input: &[Complex<T>],
    kernel: &[Complex<T>],
) -> Vec<Complex<T>> {
    if input.is_empty() || kernel.is_empty() {
        return Vec::new();
    }

    let mut output = vec![Complex::zero(); input.len() + kernel.len() - 1];
    for (i, &a) in input.iter().enumerate() {
        for (j, &b) in kernel.iter().enumerate() {
            output[i + j] += a * b;
        }
    }
    output
}
