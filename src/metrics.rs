//! Reconstruction-quality metrics
//! Mean absolute error, mean squared error, and a PSNR-style measure for
//! comparing an original signal against its lossy reconstruction.
//! no_std + alloc compatible

use crate::haar::HaarError;
use crate::num::Scalar;

/// Default PSNR reference amplitude (8-bit image convention).
pub const DEFAULT_PSNR_LIMIT: f64 = 255.0;

/// PSNR outcome. A perfect reconstruction has zero mean squared error, which
/// has no finite decibel value; it is reported as [`Psnr::Infinite`] instead
/// of a non-finite float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Psnr<T> {
    Infinite,
    Db(T),
}

fn check_pair<T: Scalar>(input: &[T], output: &[T]) -> Result<T, HaarError> {
    if input.len() != output.len() {
        return Err(HaarError::LengthMismatch {
            left: input.len(),
            right: output.len(),
        });
    }
    if input.is_empty() {
        return Err(HaarError::EmptyInput);
    }
    T::from_usize(input.len()).ok_or(HaarError::UnrepresentableLength { len: input.len() })
}

/// Mean absolute error between two equal-length sequences.
pub fn mean_absolute_error<T: Scalar>(input: &[T], output: &[T]) -> Result<T, HaarError> {
    let n = check_pair(input, output)?;
    let mut sum = T::zero();
    for (&a, &b) in input.iter().zip(output) {
        sum = sum + (a - b).abs();
    }
    Ok(sum / n)
}

/// Mean squared error between two equal-length sequences.
pub fn mean_squared_error<T: Scalar>(input: &[T], output: &[T]) -> Result<T, HaarError> {
    let n = check_pair(input, output)?;
    let mut sum = T::zero();
    for (&a, &b) in input.iter().zip(output) {
        let diff = a - b;
        sum = sum + diff * diff;
    }
    Ok(sum / n)
}

/// PSNR-style metric `10 * log10(max_limit^2 / MSE)` with an explicit
/// reference amplitude.
pub fn psnr_with_limit<T: Scalar>(
    input: &[T],
    output: &[T],
    max_limit: f64,
) -> Result<Psnr<T>, HaarError> {
    let mse = mean_squared_error(input, output)?;
    if mse == T::zero() {
        return Ok(Psnr::Infinite);
    }
    let db = 10.0 * libm::log10(max_limit * max_limit / mse.to_f64());
    Ok(Psnr::Db(T::from_f64(db)))
}

/// PSNR-style metric with the 8-bit default reference amplitude of 255.
pub fn psnr<T: Scalar>(input: &[T], output: &[T]) -> Result<Psnr<T>, HaarError> {
    psnr_with_limit(input, output, DEFAULT_PSNR_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_comparison_is_zero() {
        let x = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(mean_absolute_error(&x, &x).unwrap(), 0.0);
        assert_eq!(mean_squared_error(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn self_comparison_psnr_is_infinite() {
        let x = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(psnr(&x, &x).unwrap(), Psnr::Infinite);
    }

    #[test]
    fn known_values() {
        let a = [0.0f64, 0.0, 0.0, 0.0];
        let b = [1.0f64, -1.0, 2.0, -2.0];
        assert_eq!(mean_absolute_error(&a, &b).unwrap(), 1.5);
        assert_eq!(mean_squared_error(&a, &b).unwrap(), 2.5);
    }

    #[test]
    fn psnr_known_value() {
        // MSE = 1 against the 255 reference: 20 * log10(255).
        let a = [0.0f64; 4];
        let b = [1.0f64; 4];
        match psnr(&a, &b).unwrap() {
            Psnr::Db(db) => assert!((db - 48.1308036087).abs() < 1e-6, "db = {}", db),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn integer_metrics_truncate() {
        let a = [0i32, 0];
        let b = [1i32, 2];
        // (1 + 2) / 2 and (1 + 4) / 2 under integer division.
        assert_eq!(mean_absolute_error(&a, &b).unwrap(), 1);
        assert_eq!(mean_squared_error(&a, &b).unwrap(), 2);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let a = [1.0f64, 2.0];
        let b = [1.0f64];
        assert_eq!(
            mean_absolute_error(&a, &b),
            Err(HaarError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn rejects_empty() {
        let a: [f64; 0] = [];
        assert_eq!(mean_squared_error(&a, &a), Err(HaarError::EmptyInput));
    }
}
