use crate::error::{BenchError, Result};
use crate::timing::Timing;

/// |got - expected| relative to |expected|; equal values (infinities too) give 0.
pub fn relative_error(expected: f64, got: f64) -> f64 {
    if expected == got {
        return 0.0;
    }
    (got - expected).abs() / expected.abs().max(f64::MIN_POSITIVE)
}

pub fn cross_check(expected: f64, timing: &Timing, tolerance: f64) -> Result<()> {
    let rel_err = relative_error(expected, timing.result);
    // NaN compares false, so it is caught here as well
    if rel_err <= tolerance {
        return Ok(());
    }
    Err(BenchError::Mismatch {
        name: timing.name.clone(),
        expected,
        got: timing.result,
        rel_err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(result: f64) -> Timing {
        Timing {
            name: "one_loop_pot".to_string(),
            n: 4,
            result,
            seconds: 0.0,
        }
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(2.0, 2.0), 0.0);
        assert!((relative_error(2.0, 2.002) - 1e-3).abs() < 1e-12);
        assert_eq!(relative_error(f64::INFINITY, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_cross_check_within_tolerance() {
        assert!(cross_check(1.0, &timing(1.0 + 1e-12), 1e-9).is_ok());
    }

    #[test]
    fn test_cross_check_mismatch() {
        let err = cross_check(1.0, &timing(1.1), 1e-9).unwrap_err();
        match err {
            BenchError::Mismatch { name, got, .. } => {
                assert_eq!(name, "one_loop_pot");
                assert_eq!(got, 1.1);
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(cross_check(1.0, &timing(f64::NAN), 1e-9).is_err());
    }
}
