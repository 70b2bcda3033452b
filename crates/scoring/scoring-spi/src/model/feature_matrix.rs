//! Feature matrix type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// A row-major matrix of per-reading feature vectors.
///
/// Row count always equals the reading count of the batch it was
/// extracted from; column count depends on which optional features
/// were available, decided once per batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl FeatureMatrix {
    /// Build a matrix from equally sized feature columns.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        if columns.is_empty() || columns[0].is_empty() {
            return Err(ScoringError::EmptyBatch);
        }
        let n_rows = columns[0].len();
        let n_cols = columns.len();
        for (i, col) in columns.iter().enumerate() {
            if col.len() != n_rows {
                return Err(ScoringError::InvalidParameter {
                    name: format!("column {}", i),
                    reason: format!("expected {} rows, got {}", n_rows, col.len()),
                });
            }
        }
        let mut data = vec![0.0; n_rows * n_cols];
        for (j, col) in columns.iter().enumerate() {
            for (i, &v) in col.iter().enumerate() {
                data[i * n_cols + j] = v;
            }
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// Number of rows (readings).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of feature columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// One feature row.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Iterator over feature rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.n_cols)
    }

    /// Values of one feature column, copied out.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.n_rows)
            .map(|i| self.data[i * self.n_cols + j])
            .collect()
    }

    /// Map every cell through `f`, producing a new matrix.
    pub fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, f64) -> f64,
    {
        let mut data = self.data.clone();
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                data[i * self.n_cols + j] = f(i, j, self.data[i * self.n_cols + j]);
            }
        }
        Self {
            data,
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }
}
