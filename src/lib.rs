//! # haar2 - Discrete Haar wavelet transforms
//!
//! One-dimensional and two-dimensional Haar wavelet transforms with exact
//! inverses, plus lossy compression by coefficient thresholding and
//! reconstruction-quality metrics.
//!
//! ## Features
//!
//! - **1D transform**: single-level averaging/differencing step and the full
//!   multi-resolution decomposition, both invertible
//! - **2D transforms**: standard (rows fully, then columns fully) and pyramid
//!   (interleaved per-scale row/column steps) decompositions over square
//!   power-of-two grids
//! - **Compression**: keep a retention fraction of coefficients, zero the rest
//! - **Metrics**: mean absolute error, mean squared error, PSNR
//! - **Optimal-n search**: largest coefficient-discard count meeting a metric
//!   bound
//! - **Generic elements**: `f32`, `f64`, `i32`, `i64` via the [`Scalar`] trait
//!
//! All inputs must have power-of-two length (grids: square, power-of-two
//! side). Float transforms round-trip exactly; integer transforms use
//! truncating division and round-trip only when every division along the
//! recursion is exact.
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library support
//! - `verbose-logging`: per-candidate `log` output from the compression search
//!
//! ## Example
//!
//! ```
//! use haar2::{haar_forward, haar_inverse};
//!
//! let signal = vec![419, 411, 419, 399, 434, 384, 410, 404];
//! let coeffs = haar_forward(&signal).unwrap();
//! assert_eq!(coeffs, vec![410, 2, 3, 1, 4, 10, 25, 3]);
//! // Truncating integer division: this particular signal round-trips.
//! assert_eq!(haar_inverse(&coeffs).unwrap(), signal);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;

/// 1D Haar transform: elementary step, full decomposition, and the crate
/// error type.
pub mod haar;

/// 2D Haar transforms: standard and pyramid decompositions.
pub mod haar2;

/// Arithmetic element trait for generic transforms.
pub mod num;

/// Reconstruction-quality metrics (MAE, MSE, PSNR).
pub mod metrics;

/// Coefficient thresholding and the bounded-error compression search.
pub mod compress;

pub use compress::{compress, optimal_zero_count};
pub use haar::{haar_forward, haar_inverse, haar_step, haar_step_inverse, HaarError};
pub use haar2::{haar2_pyramid, haar2_pyramid_inverse, haar2_standard, haar2_standard_inverse};
pub use metrics::{mean_absolute_error, mean_squared_error, psnr, psnr_with_limit, Psnr};
pub use num::Scalar;
