use crate::func::error::{PlotError, PlotResult};
use std::fmt;

/// The supported function families. Each is `y = f(x)` with three real
/// parameters whose meaning depends on the family (see `eval::evaluate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Quadratic,
    Sine,
    Cosine,
    Tangent,
    Exponential,
    Logarithmic,
}

impl FunctionKind {
    pub const ALL: &'static [FunctionKind] = &[
        FunctionKind::Quadratic,
        FunctionKind::Sine,
        FunctionKind::Cosine,
        FunctionKind::Tangent,
        FunctionKind::Exponential,
        FunctionKind::Logarithmic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunctionKind::Quadratic => "quadratic",
            FunctionKind::Sine => "sine",
            FunctionKind::Cosine => "cosine",
            FunctionKind::Tangent => "tangent",
            FunctionKind::Exponential => "exponential",
            FunctionKind::Logarithmic => "logarithmic",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FunctionKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quadratic" | "quad" => Ok(FunctionKind::Quadratic),
            "sine" | "sin" => Ok(FunctionKind::Sine),
            "cosine" | "cos" => Ok(FunctionKind::Cosine),
            "tangent" | "tan" => Ok(FunctionKind::Tangent),
            "exponential" | "exp" => Ok(FunctionKind::Exponential),
            "logarithmic" | "log" | "ln" => Ok(FunctionKind::Logarithmic),
            other => Err(PlotError::parameter(format!(
                "unknown function kind: {}",
                other
            ))),
        }
    }
}

/// One plotted curve: a family, its three parameters, and an opaque color
/// tag the renderer resolves. Construction validates the parameters; an
/// invalid triple never produces a definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub kind: FunctionKind,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub color: String,
}

impl FunctionDef {
    pub fn new(
        kind: FunctionKind,
        a: f64,
        b: f64,
        c: f64,
        color: impl Into<String>,
    ) -> PlotResult<Self> {
        validate_params(kind, a, b, c)?;
        Ok(Self {
            kind,
            a,
            b,
            c,
            color: color.into(),
        })
    }

    pub fn params(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

/// Per-family validity predicate. Evaluation assumes these hold, so a
/// failure here must prevent the definition from ever being evaluated.
pub fn validate_params(kind: FunctionKind, a: f64, b: f64, _c: f64) -> PlotResult<()> {
    match kind {
        FunctionKind::Quadratic | FunctionKind::Exponential => {
            if a == 0.0 {
                return Err(PlotError::parameter(format!(
                    "parameter a of a {} function must be non-zero",
                    kind
                )));
            }
        }
        FunctionKind::Sine | FunctionKind::Cosine | FunctionKind::Tangent => {
            if b == 0.0 {
                return Err(PlotError::parameter(format!(
                    "parameter b of a {} function must be non-zero",
                    kind
                )));
            }
        }
        FunctionKind::Logarithmic => {
            if a == 0.0 {
                return Err(PlotError::parameter(
                    "parameter a of a logarithmic function must be non-zero",
                ));
            }
            if b == 0.0 {
                return Err(PlotError::parameter(
                    "parameter b of a logarithmic function must be non-zero",
                ));
            }
        }
    }
    Ok(())
}

/// Validate an x-range before sampling. Inverted and near-zero spans are
/// rejected; sampling itself never re-checks.
pub fn validate_range(x_min: f64, x_max: f64) -> PlotResult<()> {
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(PlotError::range("x-range bounds must be finite"));
    }
    if x_min >= x_max {
        return Err(PlotError::range(format!(
            "x minimum ({}) must be less than x maximum ({})",
            x_min, x_max
        )));
    }
    if (x_max - x_min).abs() < 1e-10 {
        return Err(PlotError::range("x-range span is too small"));
    }
    Ok(())
}
