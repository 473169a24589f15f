/// Decoded-report comparison against scenario expectations.
use serde::{Deserialize, Serialize};
use testchart::decode::decoder::CoordinateReport;

/// Outcome of checking a decoded report against its expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub pass: bool,
    /// One entry per report field that differed.
    pub mismatches: Vec<String>,
}

/// Compare a decoded report field by field with the expected one.
pub fn check(actual: &CoordinateReport, expected: &CoordinateReport) -> Verdict {
    let mut mismatches = Vec::new();

    field(&mut mismatches, "cells_x", actual.cells_x, expected.cells_x);
    field(&mut mismatches, "cells_y", actual.cells_y, expected.cells_y);
    field(&mut mismatches, "left", actual.left, expected.left);
    field(&mut mismatches, "top", actual.top, expected.top);
    field(&mut mismatches, "right", actual.right, expected.right);
    field(&mut mismatches, "bottom", actual.bottom, expected.bottom);

    Verdict { pass: mismatches.is_empty(), mismatches }
}

fn field<T: PartialEq + std::fmt::Debug>(
    mismatches: &mut Vec<String>,
    name: &str,
    actual: T,
    expected: T,
) {
    if actual != expected {
        mismatches.push(format!("{name}: expected {expected:?}, got {actual:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CoordinateReport {
        CoordinateReport {
            cells_x: Some((0, 16)),
            cells_y: Some((0, 16)),
            left: Some(0),
            top: Some(0),
            right: Some(4),
            bottom: Some(4),
        }
    }

    #[test]
    fn matching_reports_pass() {
        let verdict = check(&report(), &report());
        assert!(verdict.pass);
        assert!(verdict.mismatches.is_empty());
    }

    #[test]
    fn each_differing_field_is_named() {
        let mut actual = report();
        actual.cells_x = Some((1, 16));
        actual.right = None;
        let verdict = check(&actual, &report());
        assert!(!verdict.pass);
        assert_eq!(verdict.mismatches.len(), 2);
        assert!(verdict.mismatches[0].starts_with("cells_x"), "{:?}", verdict.mismatches);
        assert!(verdict.mismatches[1].starts_with("right"), "{:?}", verdict.mismatches);
    }
}
