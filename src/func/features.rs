//! Feature extraction: vertex, roots, extrema, asymptotes, intersections.
//!
//! Root, extremum, and intersection detection share one idea: walk
//! consecutive sample pairs and look for a sign change in some derived
//! quantity. The results are approximations bounded by the sample spacing,
//! not the output of a rigorous solver.

use crate::func::def::{FunctionDef, FunctionKind};
use crate::func::eval::evaluate;

/// Sampling noise below this |y| counts as a genuine zero crossing.
pub const ROOT_TOLERANCE: f64 = 0.1;
/// Minimum slope for linear interpolation across a crossing.
const SLOPE_EPSILON: f64 = 1e-10;

pub const MAX_ROOTS: usize = 5;
pub const MAX_EXTREMA: usize = 5;
pub const MAX_INTERSECTIONS: usize = 3;

/// Closed-form features of `y = a·x² + b·x + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticFeatures {
    pub vertex: (f64, f64),
    /// Real roots, ascending. Two, one (repeated), or none depending on the
    /// discriminant.
    pub roots: Vec<f64>,
    pub y_intercept: f64,
}

pub fn quadratic_features(a: f64, b: f64, c: f64) -> QuadraticFeatures {
    // + 0.0 folds IEEE negative zero (b = 0 case) into +0.0, which would
    // otherwise format as "-0.00"
    let vx = -b / (2.0 * a) + 0.0;
    let vy = a * vx * vx + b * vx + c;

    let discriminant = b * b - 4.0 * a * c;
    let roots = if discriminant > 0.0 {
        let s = discriminant.sqrt();
        let mut rs = vec![(-b + s) / (2.0 * a), (-b - s) / (2.0 * a)];
        rs.sort_by(f64::total_cmp);
        rs
    } else if discriminant == 0.0 {
        vec![-b / (2.0 * a) + 0.0]
    } else {
        Vec::new()
    };

    QuadraticFeatures {
        vertex: (vx, vy),
        roots,
        y_intercept: c,
    }
}

/// Amplitude, period, and phase of `y = a·trig(b·x + c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigFeatures {
    pub amplitude: f64,
    pub period: f64,
    pub phase: f64,
}

pub fn trig_features(a: f64, b: f64, c: f64) -> TrigFeatures {
    TrigFeatures {
        amplitude: a.abs(),
        // b = 0 is rejected at definition time; infinity here is a guard,
        // not a reachable output.
        period: if b == 0.0 {
            f64::INFINITY
        } else {
            std::f64::consts::TAU / b.abs()
        },
        phase: c,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Max,
    Min,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub x: f64,
    pub y: f64,
    pub kind: ExtremumKind,
}

/// Zero crossings of a sampled curve via sign-change scan and linear
/// interpolation. Pairs touching an undefined sample are skipped; the
/// `|y[i]| < tolerance` check rejects spurious crossings near asymptotes.
/// Results are rounded to 2 decimals, deduplicated, ascending, at most 5.
pub fn find_roots(x: &[f64], y: &[f64], tolerance: f64) -> Vec<f64> {
    let mut hundredths: Vec<i64> = Vec::new();

    for i in 1..y.len() {
        if y[i].is_nan() || y[i - 1].is_nan() {
            continue;
        }
        if y[i - 1] * y[i] <= 0.0 && y[i].abs() < tolerance {
            let dy = y[i] - y[i - 1];
            if dy.abs() > SLOPE_EPSILON {
                let root = x[i - 1] - y[i - 1] * (x[i] - x[i - 1]) / dy;
                hundredths.push((root * 100.0).round() as i64);
            }
        }
    }

    hundredths.sort_unstable();
    hundredths.dedup();
    hundredths
        .into_iter()
        .take(MAX_ROOTS)
        .map(|h| h as f64 / 100.0)
        .collect()
}

/// Local extrema via a sign change in the first difference. The extremum is
/// reported at the later sample of the changing pair; a positive preceding
/// slope means a maximum. At most 5, in ascending-x scan order.
pub fn find_extrema(x: &[f64], y: &[f64]) -> Vec<Extremum> {
    let mut out = Vec::new();
    if y.len() < 3 {
        return out;
    }

    let dy: Vec<f64> = y.windows(2).map(|w| w[1] - w[0]).collect();
    for i in 1..dy.len() {
        if dy[i - 1].is_nan() || dy[i].is_nan() {
            continue;
        }
        if dy[i - 1] * dy[i] < 0.0 {
            let kind = if dy[i - 1] > 0.0 {
                ExtremumKind::Max
            } else {
                ExtremumKind::Min
            };
            out.push(Extremum {
                x: x[i],
                y: y[i],
                kind,
            });
            if out.len() == MAX_EXTREMA {
                break;
            }
        }
    }
    out
}

/// Intersections of two functions over a shared grid: sign-change scan on
/// the difference series. Unlike `find_roots` there is no magnitude
/// tolerance here; the scans are deliberately asymmetric. The reported y is
/// re-evaluated from `f1` at the interpolated x — at a true intersection
/// both curves agree there within floating tolerance. At most 3, ascending.
pub fn find_intersections(x: &[f64], f1: &FunctionDef, f2: &FunctionDef) -> Vec<(f64, f64)> {
    let y1: Vec<f64> = x
        .iter()
        .map(|&xv| evaluate(f1.kind, f1.a, f1.b, f1.c, xv))
        .collect();
    let y2: Vec<f64> = x
        .iter()
        .map(|&xv| evaluate(f2.kind, f2.a, f2.b, f2.c, xv))
        .collect();
    let diff: Vec<f64> = y1.iter().zip(&y2).map(|(p, q)| p - q).collect();

    let mut out = Vec::new();
    for i in 1..diff.len() {
        if diff[i].is_nan() || diff[i - 1].is_nan() {
            continue;
        }
        if diff[i - 1] * diff[i] <= 0.0 {
            let dd = diff[i] - diff[i - 1];
            if dd.abs() > SLOPE_EPSILON {
                let ix = x[i - 1] - diff[i - 1] * (x[i] - x[i - 1]) / dd;
                let iy = evaluate(f1.kind, f1.a, f1.b, f1.c, ix);
                out.push((ix, iy));
                if out.len() == MAX_INTERSECTIONS {
                    break;
                }
            }
        }
    }
    out
}

/// Human-readable key-point lines for a function, used in reports and
/// legends. Families without closed-form highlights (tangent) get none.
pub fn describe_features(kind: FunctionKind, a: f64, b: f64, c: f64) -> Vec<String> {
    let mut lines = Vec::new();
    match kind {
        FunctionKind::Quadratic => {
            let f = quadratic_features(a, b, c);
            lines.push(format!("vertex: ({:.2}, {:.2})", f.vertex.0, f.vertex.1));
            match f.roots.len() {
                2 => lines.push(format!(
                    "roots: x1 = {:.2}, x2 = {:.2}",
                    f.roots[0], f.roots[1]
                )),
                1 => lines.push(format!("root: x = {:.2} (repeated)", f.roots[0])),
                _ => lines.push("no real roots".to_string()),
            }
            lines.push(format!("y-intercept: (0, {:.2})", c));
        }
        FunctionKind::Sine | FunctionKind::Cosine => {
            let f = trig_features(a, b, c);
            lines.push(format!("amplitude: {:.2}", f.amplitude));
            lines.push(format!("period: {:.2}", f.period));
            lines.push(format!("phase: {:.2}", f.phase));
        }
        FunctionKind::Tangent => {}
        FunctionKind::Exponential => {
            if b < 0.0 {
                lines.push(format!("horizontal asymptote: y = {:.2}", c));
            }
            lines.push(format!("y-intercept: (0, {:.2})", a + c));
        }
        FunctionKind::Logarithmic => {
            if b != 0.0 {
                lines.push(format!("root: ({:.2}, 0)", (1.0 - c) / b));
                lines.push(format!("vertical asymptote: x = {:.2}", -c / b));
            }
        }
    }
    lines
}

/// Compact numeric formatting: "0" below noise level, scientific notation
/// for very large or very small magnitudes, fixed-point otherwise.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.abs() < 1e-10 {
        "0".to_string()
    } else if value.abs() > 1e6 || value.abs() < 1e-3 {
        format!("{:.*e}", precision, value)
    } else {
        format!("{:.*}", precision, value)
    }
}
