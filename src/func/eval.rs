//! Function evaluation: parameters + x in, samples and expression text out.
//!
//! Points outside a function's domain are reported as NaN, the undefined
//! sentinel. Downstream consumers (feature extraction, rendering) must check
//! `is_nan()` before doing arithmetic with a sample.

use crate::func::def::{FunctionDef, FunctionKind};

/// Sample points per curve unless the caller says otherwise.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Tangent values beyond this magnitude are suppressed as undefined. This is
/// a rendering-scale cutoff, not the mathematical domain of tan.
pub const TAN_CUTOFF: f64 = 50.0;

/// Evaluate one function family at a single x.
///
/// Parameter semantics per family:
/// - Quadratic:    y = a·x² + b·x + c
/// - Sine:         y = a·sin(b·x + c)
/// - Cosine:       y = a·cos(b·x + c)
/// - Tangent:      y = a·tan(b·x + c), NaN where |y| > 50
/// - Exponential:  y = a·e^(b·x) + c
/// - Logarithmic:  y = a·ln(b·x + c), NaN where b·x + c ≤ 0
pub fn evaluate(kind: FunctionKind, a: f64, b: f64, c: f64, x: f64) -> f64 {
    match kind {
        FunctionKind::Quadratic => a * x * x + b * x + c,
        FunctionKind::Sine => a * (b * x + c).sin(),
        FunctionKind::Cosine => a * (b * x + c).cos(),
        FunctionKind::Tangent => {
            let y = a * (b * x + c).tan();
            if y.abs() > TAN_CUTOFF {
                f64::NAN
            } else {
                y
            }
        }
        FunctionKind::Exponential => a * (b * x).exp() + c,
        FunctionKind::Logarithmic => {
            let arg = b * x + c;
            if arg <= 0.0 {
                f64::NAN
            } else {
                a * arg.ln()
            }
        }
    }
}

/// The samples of one curve over an x-range. `x` is strictly increasing;
/// `y[i]` may be NaN where the function is undefined at `x[i]`.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points with the NaN sentinel mapped to `None` (a gap in the curve).
    pub fn points(&self) -> impl Iterator<Item = Option<(f64, f64)>> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| if y.is_nan() { None } else { Some((x, y)) })
    }
}

/// Evenly spaced grid of `n` x-values over `[x_min, x_max]`, endpoints
/// included. `n` is clamped to at least 2.
pub fn x_grid(x_min: f64, x_max: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    let step = (x_max - x_min) / (n - 1) as f64;
    (0..n).map(|i| x_min + step * i as f64).collect()
}

/// Sample a definition over an x-range. A fresh series is built on every
/// call; nothing is cached or mutated in place.
pub fn sample(def: &FunctionDef, x_min: f64, x_max: f64, n: usize) -> SampleSeries {
    let x = x_grid(x_min, x_max, n);
    let y = x
        .iter()
        .map(|&xv| evaluate(def.kind, def.a, def.b, def.c, xv))
        .collect();
    SampleSeries { x, y }
}

/// Closed-form expression text for legends, parameters fixed to 2 decimals.
pub fn expression(kind: FunctionKind, a: f64, b: f64, c: f64) -> String {
    match kind {
        FunctionKind::Quadratic => format!("y = {:.2}x^2 + {:.2}x + {:.2}", a, b, c),
        FunctionKind::Sine => format!("y = {:.2}·sin({:.2}x + {:.2})", a, b, c),
        FunctionKind::Cosine => format!("y = {:.2}·cos({:.2}x + {:.2})", a, b, c),
        FunctionKind::Tangent => format!("y = {:.2}·tan({:.2}x + {:.2})", a, b, c),
        FunctionKind::Exponential => format!("y = {:.2}·e^({:.2}x) + {:.2}", a, b, c),
        FunctionKind::Logarithmic => format!("y = {:.2}·ln({:.2}x + {:.2})", a, b, c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_evaluate_deterministic() {
        for &kind in FunctionKind::ALL {
            for &x in &[-2.5, 0.0, 1.0, 3.75] {
                let first = evaluate(kind, 1.5, 2.0, -0.5, x);
                let second = evaluate(kind, 1.5, 2.0, -0.5, x);
                assert_eq!(first.to_bits(), second.to_bits());
            }
        }
    }

    #[test]
    fn test_quadratic_values() {
        assert_eq!(evaluate(FunctionKind::Quadratic, 1.0, 0.0, -4.0, 3.0), 5.0);
        assert_eq!(evaluate(FunctionKind::Quadratic, 2.0, 1.0, 0.0, -1.0), 1.0);
    }

    #[test]
    fn test_log_domain_exclusion() {
        let y = evaluate(FunctionKind::Logarithmic, 1.0, 1.0, 0.0, -1.0);
        assert!(y.is_nan());
        // ln(1) = 0 exactly
        assert_eq!(evaluate(FunctionKind::Logarithmic, 1.0, 1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_tangent_cutoff() {
        // tan(1.57) ≈ 1256, well past the cutoff
        assert!(evaluate(FunctionKind::Tangent, 1.0, 1.0, 0.0, 1.57).is_nan());
        let y = evaluate(FunctionKind::Tangent, 1.0, 1.0, 0.0, 0.5);
        assert!(y.is_finite() && y.abs() <= TAN_CUTOFF);
    }

    #[test]
    fn test_tangent_sampling_near_asymptote() {
        let def = FunctionDef::new(FunctionKind::Tangent, 1.0, 1.0, 0.0, "").unwrap();
        let series = sample(&def, PI / 2.0 - 0.1, PI / 2.0 + 0.1, 200);
        assert!(series.y.iter().any(|y| y.is_nan()));
        assert!(series.y.iter().all(|y| !y.is_infinite()));
    }

    #[test]
    fn test_x_grid_shape() {
        let grid = x_grid(-5.0, 5.0, 11);
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], -5.0);
        assert!((grid[10] - 5.0).abs() < 1e-12);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_gap_points() {
        let def = FunctionDef::new(FunctionKind::Logarithmic, 1.0, 1.0, 0.0, "").unwrap();
        let series = sample(&def, -1.0, 1.0, 100);
        let pts: Vec<_> = series.points().collect();
        // undefined for x <= 0, defined after
        assert!(pts.first().unwrap().is_none());
        assert!(pts.last().unwrap().is_some());
    }

    #[test]
    fn test_expression_formatting() {
        assert_eq!(
            expression(FunctionKind::Sine, 2.0, 3.0, 0.0),
            "y = 2.00·sin(3.00x + 0.00)"
        );
        assert_eq!(
            expression(FunctionKind::Quadratic, 1.0, 0.0, -4.0),
            "y = 1.00x^2 + 0.00x + -4.00"
        );
        assert_eq!(
            expression(FunctionKind::Exponential, 0.5, -1.0, 2.0),
            "y = 0.50·e^(-1.00x) + 2.00"
        );
        assert_eq!(
            expression(FunctionKind::Logarithmic, 1.0, 2.0, 3.0),
            "y = 1.00·ln(2.00x + 3.00)"
        );
    }
}
