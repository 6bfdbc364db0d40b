//! Pearson chi-square test of independence

use claims_core::{ContingencyTable, Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::fmt;

/// Result of a chi-square test of independence
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareResult {
    /// Chi-square statistic, non-negative
    pub statistic: f64,
    /// Degrees of freedom, (r - 1)(c - 1)
    pub df: usize,
    /// p-value from the chi-square distribution, unrounded
    pub p_value: f64,
    /// Expected counts under independence, row-major
    pub expected: Vec<f64>,
}

impl fmt::Display for ChiSquareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chi2 = {:.4}, df = {}, p = {:.4}",
            self.statistic, self.df, self.p_value
        )
    }
}

/// Chi-square test of independence over a labelled contingency table
///
/// Expected counts come from the marginal totals under the independence
/// hypothesis. Requires at least a 2x2 table and strictly positive row and
/// column sums (a zero marginal makes an expected cell zero and the
/// statistic undefined).
pub fn chi_square_test(table: &ContingencyTable) -> Result<ChiSquareResult> {
    let (r, c) = (table.n_rows(), table.n_cols());
    if r < 2 || c < 2 {
        return Err(Error::Degenerate(format!(
            "chi-square test needs at least a 2x2 table, got {r}x{c}"
        )));
    }
    for row in 0..r {
        if table.row_total(row) == 0 {
            return Err(Error::Degenerate(format!(
                "chi-square test: row '{}' has zero total",
                table.row_labels()[row]
            )));
        }
    }
    for col in 0..c {
        if table.col_total(col) == 0 {
            return Err(Error::Degenerate(format!(
                "chi-square test: column '{}' has zero total",
                table.col_labels()[col]
            )));
        }
    }

    let total = table.total() as f64;
    let mut statistic = 0.0;
    let mut expected = Vec::with_capacity(r * c);
    for row in 0..r {
        let row_total = table.row_total(row) as f64;
        for col in 0..c {
            let col_total = table.col_total(col) as f64;
            let e = row_total * col_total / total;
            let o = table.count(row, col) as f64;
            statistic += (o - e) * (o - e) / e;
            expected.push(e);
        }
    }

    let df = (r - 1) * (c - 1);
    let dist = ChiSquared::new(df as f64)
        .map_err(|e| Error::Computation(format!("chi-square distribution with df {df}: {e}")))?;
    let p_value = 1.0 - dist.cdf(statistic);

    Ok(ChiSquareResult {
        statistic,
        df,
        p_value,
        expected,
    })
}
