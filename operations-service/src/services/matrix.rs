//! Integer matrix product.
//!
//! Validation is separate from the product itself: callers run
//! [`validate_dimensions`] first and only then call [`multiply`], which assumes
//! its operands are compatible.

use crate::error::OperationError;
use crate::models::Matrix;

/// Fewest rows either operand may have.
pub const MIN_ROWS: usize = 2;

/// Checks that `a * b` is defined: both operands rectangular with at least
/// [`MIN_ROWS`] rows, and `columns(a) == rows(b)`.
pub fn validate_dimensions(a: &Matrix, b: &Matrix) -> Result<(), OperationError> {
    if a.rows() < MIN_ROWS || b.rows() < MIN_ROWS {
        return Err(OperationError::DimensionMismatch);
    }
    if !a.is_rectangular() || !b.is_rectangular() {
        return Err(OperationError::DimensionMismatch);
    }
    if a.columns() != b.rows() {
        return Err(OperationError::DimensionMismatch);
    }
    Ok(())
}

/// Rejects products with more than `max_cells` entries before anything is
/// allocated for them.
pub fn check_result_size(a: &Matrix, b: &Matrix, max_cells: usize) -> Result<(), OperationError> {
    match a.rows().checked_mul(b.columns()) {
        Some(cells) if cells <= max_cells => Ok(()),
        _ => Err(OperationError::ResultTooLarge),
    }
}

/// Standard product of an `m x n` and an `n x p` matrix.
///
/// Arithmetic wraps on 64-bit overflow.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let (rows, inner, cols) = (a.rows(), a.columns(), b.columns());

    let mut product = vec![vec![0i64; cols]; rows];
    for (i, out_row) in product.iter_mut().enumerate() {
        let a_row = a.row(i);
        for (j, cell) in out_row.iter_mut().enumerate() {
            *cell = (0..inner).fold(0i64, |acc, k| {
                acc.wrapping_add(a_row[k].wrapping_mul(b.row(k)[j]))
            });
        }
    }

    Matrix::new(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> Matrix {
        Matrix::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn multiplies_square_matrices() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[5, 6], &[7, 8]]);
        assert!(validate_dimensions(&a, &b).is_ok());
        assert_eq!(multiply(&a, &b), m(&[&[19, 22], &[43, 50]]));
    }

    #[test]
    fn product_shape_is_rows_a_by_columns_b() {
        // 2x3 * 3x4
        let a = m(&[&[1, 0, 2], &[-1, 3, 1]]);
        let b = m(&[&[3, 1, 0, 2], &[2, 1, 4, 0], &[1, 0, -1, 5]]);
        validate_dimensions(&a, &b).unwrap();

        let product = multiply(&a, &b);
        assert_eq!(product.rows(), 2);
        assert_eq!(product.columns(), 4);
        assert_eq!(product, m(&[&[5, 1, -2, 12], &[4, 2, 11, 3]]));
    }

    #[test]
    fn each_entry_is_a_row_column_dot_product() {
        let a = m(&[&[2, -3, 7], &[0, 5, 1], &[4, 4, -2]]);
        let b = m(&[&[1, 9], &[-6, 2], &[3, 0]]);
        let product = multiply(&a, &b);

        for i in 0..a.rows() {
            for j in 0..b.columns() {
                let expected: i64 = (0..a.columns()).map(|k| a.row(i)[k] * b.row(k)[j]).sum();
                assert_eq!(product.row(i)[j], expected, "entry ({i},{j})");
            }
        }
    }

    #[test]
    fn single_row_operand_is_rejected() {
        let a = m(&[&[1, 2]]);
        let b = m(&[&[1], &[2]]);
        assert_eq!(
            validate_dimensions(&a, &b),
            Err(OperationError::DimensionMismatch)
        );
        assert_eq!(
            validate_dimensions(&b, &a),
            Err(OperationError::DimensionMismatch)
        );
    }

    #[test]
    fn inner_dimension_mismatch_is_rejected() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let b = m(&[&[1, 2], &[3, 4]]);
        assert_eq!(
            validate_dimensions(&a, &b),
            Err(OperationError::DimensionMismatch)
        );
    }

    #[test]
    fn empty_operands_are_rejected() {
        assert_eq!(
            validate_dimensions(&Matrix::default(), &Matrix::default()),
            Err(OperationError::DimensionMismatch)
        );
    }

    #[test]
    fn ragged_operand_is_rejected() {
        let a = m(&[&[1, 2], &[3]]);
        let b = m(&[&[1, 2], &[3, 4]]);
        assert_eq!(
            validate_dimensions(&a, &b),
            Err(OperationError::DimensionMismatch)
        );
    }

    #[test]
    fn overflow_wraps() {
        let a = m(&[&[i64::MAX, 0], &[0, 1]]);
        let b = m(&[&[2, 0], &[0, 1]]);
        let product = multiply(&a, &b);
        assert_eq!(product.row(0)[0], i64::MAX.wrapping_mul(2));
        assert_eq!(product.row(1)[1], 1);
    }

    #[test]
    fn result_size_guard() {
        let a = m(&[&[1], &[2], &[3]]);
        let b = m(&[&[1, 2, 3, 4]]);
        assert!(check_result_size(&a, &b, 12).is_ok());
        assert_eq!(
            check_result_size(&a, &b, 11),
            Err(OperationError::ResultTooLarge)
        );
    }
}
