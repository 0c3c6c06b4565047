//! Coefficient thresholding and the bounded-error compression search
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::haar::{haar_forward, haar_inverse, HaarError};
use crate::num::Scalar;

fn value_order<T: Scalar>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

fn ranked_indexes<T: Scalar>(coeffs: &[T], key: impl Fn(T) -> T) -> Vec<(T, usize)> {
    let mut ranked: Vec<(T, usize)> = coeffs
        .iter()
        .enumerate()
        .map(|(index, &c)| (key(c), index))
        .collect();
    ranked.sort_unstable_by(|a, b| value_order(&a.0, &b.0).then(a.1.cmp(&b.1)));
    ranked
}

/// Lossy compression by coefficient thresholding.
///
/// Forward-transforms `input`, ranks the coefficients by signed value
/// ascending, keeps the `floor(len * q)` smallest-valued ones, and zeroes the
/// rest in their original positions. The caller applies [`haar_inverse`] to
/// view the reconstructed signal.
///
/// The ranking is by signed value, not magnitude; [`optimal_zero_count`]
/// ranks by magnitude. The asymmetry is intentional and observable.
pub fn compress<T: Scalar>(input: &[T], q: f64) -> Result<Vec<T>, HaarError> {
    if !(q > 0.0 && q <= 1.0) {
        return Err(HaarError::RetentionOutOfRange { q });
    }
    let mut coeffs = haar_forward(input)?;
    let ranked = ranked_indexes(&coeffs, |c| c);
    let retain = (coeffs.len() as f64 * q) as usize;
    for &(_, index) in &ranked[retain..] {
        coeffs[index] = T::zero();
    }
    Ok(coeffs)
}

/// Search for the largest number of zeroed coefficients whose reconstruction
/// still satisfies a metric bound.
///
/// The coefficients are ranked once by magnitude ascending. Candidate counts
/// `n` run from `input.len()` down to 0 (most aggressive compression first);
/// for each, the `n` smallest-magnitude coefficients are zeroed, the signal
/// reconstructed, and `metric(input, reconstruction)` evaluated. The first
/// candidate with `|metric| <= target_metric` is returned together with its
/// reconstruction. `None` means no candidate satisfied the bound.
///
/// `_eps` is accepted for call-site compatibility but does not widen the
/// bound: the comparison is against `target_metric` exactly.
pub fn optimal_zero_count<T, F>(
    input: &[T],
    target_metric: f64,
    _eps: f64,
    metric: F,
) -> Result<Option<(usize, Vec<T>)>, HaarError>
where
    T: Scalar,
    F: Fn(&[T], &[T]) -> Result<T, HaarError>,
{
    let coeffs = haar_forward(input)?;
    let ranked = ranked_indexes(&coeffs, |c| c.abs());
    for n in (0..=coeffs.len()).rev() {
        let mut truncated = coeffs.clone();
        for &(_, index) in &ranked[..n] {
            truncated[index] = T::zero();
        }
        let restored = haar_inverse(&truncated)?;
        let value = metric(input, &restored)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!("n = {}, metric = {:?}", n, value);
        if value.to_f64().abs() <= target_metric {
            return Ok(Some((n, restored)));
        }
    }
    Ok(None)
}
