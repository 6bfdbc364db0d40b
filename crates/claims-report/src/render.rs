//! Formatting of individual result types
//!
//! Pure presentation. Statistics print with four decimals, money with two,
//! and very small p-values collapse to a floor marker instead of a wall of
//! zeros. Nothing here computes; the unrounded values stay on the result
//! structs.

use claims_confidence::BootstrapResult;
use claims_core::ContingencyTable;
use claims_effect::{ClassificationOverlap, EffectSize};
use claims_inference::{ChiSquareResult, ProportionTestResult, TTestResult};

/// Format a p-value, flooring anything below 0.0001
pub fn format_p_value(p: f64) -> String {
    if p < 0.0001 {
        "< 0.0001".to_string()
    } else {
        format!("{p:.4}")
    }
}

/// Format a cost amount with two decimals
pub fn format_cost(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Render a Welch t-test result
pub fn format_t_test(result: &TTestResult) -> String {
    let (n1, n2) = result.sample_sizes;
    format!(
        "mean 1 = {} (n = {n1}), mean 2 = {} (n = {n2})\n\
         t = {:.4}, df = {:.2}, two-sided p = {}",
        format_cost(result.mean1),
        format_cost(result.mean2),
        result.t_statistic,
        result.df,
        format_p_value(result.p_value),
    )
}

/// Render a bootstrap difference interval
pub fn format_bootstrap(result: &BootstrapResult) -> String {
    let ci = &result.interval;
    format!(
        "{} difference = {}, {:.0}% CI [{}, {}] ({} resamples)",
        result.statistic,
        format_cost(ci.estimate),
        ci.confidence_level * 100.0,
        format_cost(ci.lower),
        format_cost(ci.upper),
        result.n_resamples,
    )
}

/// Render a chi-square test result
pub fn format_chi_square(result: &ChiSquareResult) -> String {
    format!(
        "chi-square = {:.4}, df = {}, p = {}",
        result.statistic,
        result.df,
        format_p_value(result.p_value),
    )
}

/// Render a two-proportion test result
pub fn format_proportion_test(result: &ProportionTestResult) -> String {
    let (n1, n2) = result.sample_sizes;
    format!(
        "p1 = {:.4} (n = {n1}), p2 = {:.4} (n = {n2})\n\
         z = {:.4}, {} p = {}",
        result.p1,
        result.p2,
        result.z_statistic,
        result.alternative,
        format_p_value(result.p_value),
    )
}

/// Render an odds ratio
pub fn format_odds_ratio(ratio: f64) -> String {
    format!("odds ratio = {ratio:.4}")
}

/// Render an effect size with its interpretation
pub fn format_effect_size(effect: &EffectSize) -> String {
    format!(
        "{} = {:.4} ({})",
        effect.effect_type.name(),
        effect.magnitude,
        effect.interpretation,
    )
}

/// Render a classification overlap result
pub fn format_overlap(overlap: &ClassificationOverlap) -> String {
    format!(
        "threshold = {}, misclassification rate = {:.4} ({})",
        format_cost(overlap.threshold),
        overlap.misclassification_rate,
        overlap.effect_size().interpretation,
    )
}

/// Render a contingency table as an aligned grid with marginal totals
pub fn format_contingency_table(table: &ContingencyTable) -> String {
    let col_labels = table.col_labels();
    let row_labels = table.row_labels();

    // Column widths: label column, one per category, totals column
    let mut label_width = row_labels.iter().map(|l| l.len()).max().unwrap_or(0);
    label_width = label_width.max("total".len());

    let mut widths: Vec<usize> = col_labels.iter().map(|l| l.len()).collect();
    for (c, width) in widths.iter_mut().enumerate() {
        for r in 0..table.n_rows() {
            *width = (*width).max(table.count(r, c).to_string().len());
        }
        *width = (*width).max(table.col_total(c).to_string().len());
    }
    let total_width = "total".len().max(table.total().to_string().len());

    let mut out = String::new();
    out.push_str(&format!("{:label_width$}", ""));
    for (c, label) in col_labels.iter().enumerate() {
        out.push_str(&format!("  {:>width$}", label, width = widths[c]));
    }
    out.push_str(&format!("  {:>total_width$}\n", "total"));

    for (r, label) in row_labels.iter().enumerate() {
        out.push_str(&format!("{label:label_width$}"));
        for c in 0..table.n_cols() {
            out.push_str(&format!("  {:>width$}", table.count(r, c), width = widths[c]));
        }
        out.push_str(&format!("  {:>total_width$}\n", table.row_total(r)));
    }

    out.push_str(&format!("{:label_width$}", "total"));
    for (c, &width) in widths.iter().enumerate() {
        out.push_str(&format!("  {:>width$}", table.col_total(c)));
    }
    out.push_str(&format!("  {:>total_width$}\n", table.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_value_floor() {
        assert_eq!(format_p_value(0.1374), "0.1374");
        assert_eq!(format_p_value(0.00005), "< 0.0001");
        assert_eq!(format_p_value(1.0), "1.0000");
    }

    #[test]
    fn test_cost_formatting() {
        assert_eq!(format_cost(5000.0), "5000.00");
        assert_eq!(format_cost(12.345), "12.35");
    }

    #[test]
    fn test_contingency_rendering() {
        let table = ContingencyTable::from_rows(
            vec!["white".to_string(), "black".to_string()],
            vec!["stroke".to_string(), "no stroke".to_string()],
            vec![vec![12, 388], vec![5, 95]],
        )
        .unwrap();

        let rendered = format_contingency_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("stroke"));
        assert!(lines[0].contains("total"));
        assert!(lines[1].starts_with("white"));
        assert!(lines[1].trim_end().ends_with("400"));
        assert!(lines[3].starts_with("total"));
        assert!(lines[3].trim_end().ends_with("500"));
    }

    #[test]
    fn test_t_test_rendering() {
        let result = claims_inference::welch_t_test(
            &[100.0, 200.0, 300.0],
            &[50.0, 60.0, 70.0],
        )
        .unwrap();
        let rendered = format_t_test(&result);
        assert!(rendered.contains("mean 1 = 200.00"));
        assert!(rendered.contains("t = 2.4128"));
        assert!(rendered.contains("two-sided p ="));
    }
}
