use std::fmt;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::constants::NAME_WIDTH;
use crate::points::PointSet;

/// One timed call of a kernel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timing {
    pub name: String,
    pub n: usize,
    pub result: f64,
    pub seconds: f64,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$} Result={:10.6} Time={:10.6}",
            self.name,
            self.result,
            self.seconds,
            width = NAME_WIDTH
        )
    }
}

pub fn time_func<F>(name: &str, f: F, points: &PointSet, soft: f64) -> Timing
where
    F: Fn(&PointSet, f64) -> f64,
{
    /*
    Call f once on the shared input and measure the wall clock around it.
    black_box keeps the optimiser from dropping an unused result.
     */
    let start = Instant::now();
    let result = std::hint::black_box(f(std::hint::black_box(points), soft));
    let seconds = start.elapsed().as_secs_f64();
    debug!("{name}: n={} result={result} in {seconds:.6}s", points.len());

    Timing {
        name: name.to_string(),
        n: points.len(),
        result,
        seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_func_reports_result() {
        let points = PointSet::from_rows(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let timing = time_func("constant", |_, _| 2.5, &points, 0.0);
        assert_eq!(timing.name, "constant");
        assert_eq!(timing.n, 2);
        assert_eq!(timing.result, 2.5);
        assert!(timing.seconds >= 0.0);
    }

    #[test]
    fn test_report_line_format() {
        let timing = Timing {
            name: "two_loop_pot".to_string(),
            n: 10,
            result: 1.0,
            seconds: 0.25,
        };
        assert_eq!(
            timing.to_string(),
            "two_loop_pot         Result=  1.000000 Time=  0.250000"
        );
    }

    #[test]
    fn test_timing_serializes() {
        let timing = Timing {
            name: "pdist_pot".to_string(),
            n: 3,
            result: 2.5,
            seconds: 0.5,
        };
        let json = serde_json::to_string(&timing).unwrap();
        assert_eq!(json, r#"{"name":"pdist_pot","n":3,"result":2.5,"seconds":0.5}"#);
    }
}
