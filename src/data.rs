//! Data
//!
//! Feature matrix container shared by the tree builders and predictors.
use crate::errors::SaplingError;
use std::fmt;

/// Contiguous column major matrix of features.
///
/// The matrix borrows its data from the caller and is never mutated by the
/// models. Row `i`, column `j` lives at `data[j * rows + i]`.
///
/// # Type Parameters
/// * `T` - The numeric type of the data, `f64` for every model in this crate.
pub struct Matrix<'a, T> {
    /// The raw data stored in a single slice.
    pub data: &'a [T],
    /// Indices into the data row-wise.
    pub index: Vec<usize>,
    /// Number of rows in the matrix.
    pub rows: usize,
    /// Number of columns in the matrix.
    pub cols: usize,
}

impl<'a, T> Matrix<'a, T> {
    /// Create a new Matrix.
    ///
    /// * `data` - Column major values, must hold `rows * cols` items.
    /// * `rows` - Number of samples.
    /// * `cols` - Number of features.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        Matrix {
            data,
            index: (0..rows).collect(),
            rows,
            cols,
        }
    }

    /// Get a single reference to an item in the matrix.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[self.item_index(i, j)]
    }

    fn item_index(&self, i: usize, j: usize) -> usize {
        j * self.rows + i
    }

    /// Get an entire column in the matrix.
    ///
    /// * `col` - The index of the column to get.
    pub fn get_col(&self, col: usize) -> &[T] {
        let start = self.item_index(0, col);
        &self.data[start..start + self.rows]
    }
}

impl<'a, T> Matrix<'a, T>
where
    T: Copy,
{
    /// Get a row of the data as a vector.
    pub fn get_row(&self, row: usize) -> Vec<T> {
        (0..self.cols).map(|col| *self.get(row, col)).collect()
    }
}

impl<'a, T> Matrix<'a, T> {
    /// Check the buffer length agrees with the declared shape.
    pub fn check_shape(&self) -> Result<(), SaplingError> {
        if self.data.len() != self.rows * self.cols {
            return Err(SaplingError::ShapeMismatch(self.rows * self.cols, self.data.len()));
        }
        Ok(())
    }
}

impl<'a> Matrix<'a, f64> {
    /// Check the matrix is usable as training data.
    ///
    /// The buffer length has to agree with the declared shape, there must be
    /// at least one row, and no value may be NaN.
    pub fn validate(&self) -> Result<(), SaplingError> {
        self.check_shape()?;
        if self.rows == 0 {
            return Err(SaplingError::EmptyDataset);
        }
        if let Some(pos) = self.data.iter().position(|v| v.is_nan()) {
            return Err(SaplingError::NANValueFound(pos % self.rows, pos / self.rows));
        }
        Ok(())
    }
}

/// Flatten a sequence of feature rows into a column major buffer.
///
/// Returns the buffer along with the number of rows and columns, ready to be
/// wrapped with [`Matrix::new`].
pub fn rows_to_column_major(rows: &[Vec<f64>]) -> Result<(Vec<f64>, usize, usize), SaplingError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |r| r.len());
    if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
        return Err(SaplingError::RaggedRows(i, n_cols, r.len()));
    }
    let mut data = Vec::with_capacity(n_rows * n_cols);
    for col in 0..n_cols {
        data.extend(rows.iter().map(|r| r[col]));
    }
    Ok((data, n_rows, n_cols))
}

impl<'a, T> fmt::Display for Matrix<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = String::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                val.push_str(self.get(i, j).to_string().as_str());
                if j == (self.cols - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}
