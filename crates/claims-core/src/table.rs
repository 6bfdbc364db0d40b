//! Contingency table type
//!
//! A labelled r x c grid of non-negative counts where rows and columns are
//! exhaustive, mutually exclusive partitions of the population under study.
//! Counts are stored row-major; row and column totals are always consistent
//! with the underlying population size because cells are the only storage.

use crate::{Error, Result};

/// A labelled contingency table of non-negative integer counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Vec<u64>,
}

impl ContingencyTable {
    /// Build a table from row-major count rows
    ///
    /// Fails if the label counts do not match the grid shape or the grid is
    /// ragged.
    pub fn from_rows(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        rows: Vec<Vec<u64>>,
    ) -> Result<Self> {
        if rows.len() != row_labels.len() {
            return Err(Error::InvalidParameter(format!(
                "contingency table has {} row labels but {} rows",
                row_labels.len(),
                rows.len()
            )));
        }
        let n_cols = col_labels.len();
        let mut counts = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::InvalidParameter(format!(
                    "contingency table row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            counts.extend(row);
        }
        Ok(Self {
            row_labels,
            col_labels,
            counts,
        })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Count in cell (row, col)
    pub fn count(&self, row: usize, col: usize) -> u64 {
        self.counts[row * self.n_cols() + col]
    }

    /// Sum of a row
    pub fn row_total(&self, row: usize) -> u64 {
        let c = self.n_cols();
        self.counts[row * c..(row + 1) * c].iter().sum()
    }

    /// Sum of a column
    pub fn col_total(&self, col: usize) -> u64 {
        (0..self.n_rows()).map(|r| self.count(r, col)).sum()
    }

    /// Grand total (population size)
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Row labels in order
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels in order
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced() -> ContingencyTable {
        ContingencyTable::from_rows(
            vec!["a".to_string(), "b".to_string()],
            vec!["x".to_string(), "y".to_string()],
            vec![vec![10, 10], vec![10, 10]],
        )
        .unwrap()
    }

    #[test]
    fn test_totals() {
        let t = balanced();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.n_cols(), 2);
        assert_eq!(t.row_total(0), 20);
        assert_eq!(t.col_total(1), 20);
        assert_eq!(t.total(), 40);
        assert_eq!(t.count(1, 0), 10);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = ContingencyTable::from_rows(
            vec!["a".to_string(), "b".to_string()],
            vec!["x".to_string(), "y".to_string()],
            vec![vec![1, 2], vec![3]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_label_count_mismatch_rejected() {
        let result = ContingencyTable::from_rows(
            vec!["a".to_string()],
            vec!["x".to_string()],
            vec![vec![1], vec![2]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_marginals_consistent_with_population() {
        let t = ContingencyTable::from_rows(
            vec!["m".to_string(), "f".to_string()],
            vec!["yes".to_string(), "no".to_string()],
            vec![vec![3, 7], vec![5, 5]],
        )
        .unwrap();
        let row_sum: u64 = (0..t.n_rows()).map(|r| t.row_total(r)).sum();
        let col_sum: u64 = (0..t.n_cols()).map(|c| t.col_total(c)).sum();
        assert_eq!(row_sum, t.total());
        assert_eq!(col_sum, t.total());
    }
}
