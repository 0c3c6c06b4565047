//! 2D Haar transforms over square power-of-two grids
//!
//! Two decompositions with exact inverses:
//! - standard: full 1D transform on every row, then on every column
//! - pyramid: one elementary row and column step per scale, interleaved
//!
//! Grids are row-major `Vec<Vec<T>>`; column passes gather each column into
//! a temporary contiguous buffer, transform it, and scatter it back.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::haar::{haar_forward, haar_inverse, haar_step, haar_step_inverse, HaarError};
use crate::num::Scalar;

fn check_square<T: Scalar>(input: &[Vec<T>]) -> Result<usize, HaarError> {
    let size = input.len();
    if !size.is_power_of_two() {
        return Err(HaarError::NonPowerOfTwo { len: size });
    }
    for row in input {
        if row.len() != size {
            return Err(HaarError::NotSquare {
                rows: size,
                cols: row.len(),
            });
        }
    }
    Ok(size)
}

fn gather_column<T: Scalar>(grid: &[Vec<T>], column: usize, count: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(count);
    for row in grid.iter().take(count) {
        out.push(row[column]);
    }
    out
}

fn scatter_column<T: Scalar>(grid: &mut [Vec<T>], values: &[T], column: usize) {
    for (row, &value) in grid.iter_mut().zip(values) {
        row[column] = value;
    }
}

/// Standard 2D Haar decomposition: full 1D forward on every row, then on
/// every column of the intermediate grid. The top-left corner of the result
/// holds the coarsest average.
pub fn haar2_standard<T: Scalar>(input: &[Vec<T>]) -> Result<Vec<Vec<T>>, HaarError> {
    let size = check_square(input)?;
    let mut output = Vec::with_capacity(size);
    for row in input {
        output.push(haar_forward(row)?);
    }
    for column in 0..size {
        let transformed = haar_forward(&gather_column(&output, column, size))?;
        scatter_column(&mut output, &transformed, column);
    }
    Ok(output)
}

/// Inverse of [`haar2_standard`]: full 1D inverse on every column, then on
/// every row.
pub fn haar2_standard_inverse<T: Scalar>(input: &[Vec<T>]) -> Result<Vec<Vec<T>>, HaarError> {
    let size = check_square(input)?;
    let mut output = input.to_vec();
    for column in 0..size {
        let restored = haar_inverse(&gather_column(&output, column, size))?;
        scatter_column(&mut output, &restored, column);
    }
    for row in output.iter_mut() {
        *row = haar_inverse(row)?;
    }
    Ok(output)
}

/// Pyramid 2D Haar decomposition: at each scale `size, size/2, ..., 2` apply
/// one elementary step to every row, then one elementary step to columns
/// `0..scale` over the first `scale` rows.
///
/// The row pass covers every row of the grid at every scale, not just the
/// active block; the inverse mirrors that, so the round trip is still exact.
/// Pyramid and standard decompositions generally differ outside the top-left
/// block and are not interchangeable.
pub fn haar2_pyramid<T: Scalar>(input: &[Vec<T>]) -> Result<Vec<Vec<T>>, HaarError> {
    let size = check_square(input)?;
    let mut output = input.to_vec();
    let mut scale = size;
    while scale > 1 {
        for row in output.iter_mut() {
            *row = haar_step(row, scale)?;
        }
        for column in 0..scale {
            let stepped = haar_step(&gather_column(&output, column, scale), scale)?;
            scatter_column(&mut output, &stepped, column);
        }
        scale /= 2;
    }
    Ok(output)
}

/// Inverse of [`haar2_pyramid`]: scales run `2, 4, ..., size`, columns are
/// undone before rows at each scale — the reverse nesting of the forward
/// pass.
pub fn haar2_pyramid_inverse<T: Scalar>(input: &[Vec<T>]) -> Result<Vec<Vec<T>>, HaarError> {
    let size = check_square(input)?;
    let mut output = input.to_vec();
    let mut scale = 2;
    while scale <= size {
        for column in 0..scale {
            let restored = haar_step_inverse(&gather_column(&output, column, scale), scale)?;
            scatter_column(&mut output, &restored, column);
        }
        for row in output.iter_mut() {
            *row = haar_step_inverse(row, scale)?;
        }
        scale *= 2;
    }
    Ok(output)
}
