//! 1D discrete Haar wavelet transform
//! Elementary averaging/differencing step plus the full multi-resolution
//! decomposition and its exact inverse.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::num::Scalar;

/// Errors shared by every fallible operation in the crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HaarError {
    /// Input slice is empty where at least one element is required.
    EmptyInput,
    /// A length (or active prefix) that must be a power of two is not.
    NonPowerOfTwo { len: usize },
    /// The active prefix of an elementary step exceeds the sequence length.
    StepOutOfRange { count: usize, len: usize },
    /// A grid is not square: a row's length differs from the row count.
    NotSquare { rows: usize, cols: usize },
    /// Two sequences that must have equal lengths do not.
    LengthMismatch { left: usize, right: usize },
    /// Retention fraction outside `(0, 1]`.
    RetentionOutOfRange { q: f64 },
    /// A sequence length that cannot be represented in the element type.
    UnrepresentableLength { len: usize },
}

/// One elementary Haar step over the active prefix `count` of `input`.
///
/// Pairs `(input[2i], input[2i+1])` for `i < count/2` are replaced by their
/// average at position `i` and half-difference at position `i + count/2`.
/// Positions at or beyond `count` pass through unchanged. `count` must be a
/// power of two no larger than the input length.
pub fn haar_step<T: Scalar>(input: &[T], count: usize) -> Result<Vec<T>, HaarError> {
    if !count.is_power_of_two() {
        return Err(HaarError::NonPowerOfTwo { len: count });
    }
    if count > input.len() {
        return Err(HaarError::StepOutOfRange {
            count,
            len: input.len(),
        });
    }
    let half = count / 2;
    let mut output = input.to_vec();
    for i in 0..half {
        let left = input[2 * i];
        let right = input[2 * i + 1];
        output[i] = (left + right) / T::two();
        output[i + half] = (left - right) / T::two();
    }
    Ok(output)
}

/// Exact inverse of [`haar_step`] with the same `count`.
///
/// Reads the average at `i` and the half-difference at `i + count/2` and
/// reconstructs the original pair. Over real arithmetic this undoes the
/// forward step exactly; with integer truncation only when `left + right`
/// and `left - right` are both even.
pub fn haar_step_inverse<T: Scalar>(input: &[T], count: usize) -> Result<Vec<T>, HaarError> {
    if !count.is_power_of_two() {
        return Err(HaarError::NonPowerOfTwo { len: count });
    }
    if count > input.len() {
        return Err(HaarError::StepOutOfRange {
            count,
            len: input.len(),
        });
    }
    let half = count / 2;
    let mut output = input.to_vec();
    for i in 0..half {
        let avg = input[i];
        let det = input[i + half];
        output[2 * i] = avg + det;
        output[2 * i + 1] = avg - det;
    }
    Ok(output)
}

/// Full 1D Haar decomposition.
///
/// Applies the elementary step with `count = len, len/2, ..., 2`, each pass
/// re-deriving the average region of the previous one. Position 0 of the
/// result holds the overall average; the rest are detail coefficients from
/// coarsest (index 1) to finest. Length must be a power of two (a single
/// element is valid and passes through unchanged).
pub fn haar_forward<T: Scalar>(input: &[T]) -> Result<Vec<T>, HaarError> {
    if !input.len().is_power_of_two() {
        return Err(HaarError::NonPowerOfTwo { len: input.len() });
    }
    let mut output = input.to_vec();
    let mut size = input.len();
    while size > 1 {
        output = haar_step(&output, size)?;
        size /= 2;
    }
    Ok(output)
}

/// Full inverse of [`haar_forward`].
///
/// Applies the elementary inverse step with `count = 2, 4, ..., len`, the
/// exact reverse iteration order of the forward pass.
pub fn haar_inverse<T: Scalar>(input: &[T]) -> Result<Vec<T>, HaarError> {
    if !input.len().is_power_of_two() {
        return Err(HaarError::NonPowerOfTwo { len: input.len() });
    }
    let mut output = input.to_vec();
    let mut size = 2;
    while size <= input.len() {
        output = haar_step_inverse(&output, size)?;
        size *= 2;
    }
    Ok(output)
}
