use serde::{Deserialize, Serialize};

/// Row-major grid of 64-bit integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix(Vec<Vec<i64>>);

impl Matrix {
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Width of the first row; 0 for a matrix without rows.
    pub fn columns(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.columns();
        self.0.iter().all(|row| row.len() == width)
    }

    pub fn row(&self, i: usize) -> &[i64] {
        &self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_of_empty_matrix() {
        let m = Matrix::default();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.columns(), 0);
        assert!(m.is_rectangular());
    }

    #[test]
    fn ragged_rows_are_detected() {
        let m = Matrix::new(vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert!(!m.is_rectangular());
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let m: Matrix = serde_json::from_str("[[1,2],[3,4]]").unwrap();
        assert_eq!(m, Matrix::new(vec![vec![1, 2], vec![3, 4]]));
    }
}
