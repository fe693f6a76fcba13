//! Build a PlotSpec from the function collection: sample every curve,
//! attach expression labels, and gather feature markers.

use crate::func::collection::FunctionCollection;
use crate::func::def::{FunctionDef, FunctionKind};
use crate::func::eval::{expression, sample, x_grid, SampleSeries};
use crate::func::features::{
    find_extrema, find_intersections, find_roots, quadratic_features, trig_features,
    ROOT_TOLERANCE,
};
use crate::plot::types::*;

/// Sample a collection over an x-range and assemble the full plot
/// specification, markers included. Pairwise intersections are computed over
/// the same grid the curves are sampled on.
pub fn compose(
    collection: &FunctionCollection,
    x_min: f64,
    x_max: f64,
    samples: usize,
) -> PlotSpec {
    let defs = collection.defs();
    let mut series = Vec::with_capacity(defs.len());
    let mut markers = Vec::new();

    for (i, def) in defs.iter().enumerate() {
        let s = sample(def, x_min, x_max, samples);
        collect_markers(def, &s, x_min, x_max, &mut markers);

        let color = resolve_color(&def.color)
            .unwrap_or(SERIES_COLORS[i % SERIES_COLORS.len()]);
        series.push(Series {
            label: expression(def.kind, def.a, def.b, def.c),
            color,
            points: s.points().collect(),
        });
    }

    let grid = x_grid(x_min, x_max, samples);
    for i in 0..defs.len() {
        for j in (i + 1)..defs.len() {
            for (x, y) in find_intersections(&grid, &defs[i], &defs[j]) {
                markers.push(Marker {
                    x,
                    y,
                    kind: MarkerKind::Intersection,
                });
            }
        }
    }

    PlotSpec {
        series,
        markers,
        x_min,
        x_max,
        width: DEFAULT_PLOT_WIDTH,
        height: DEFAULT_PLOT_HEIGHT,
    }
}

/// Per-curve markers: the vertex for quadratics, sampled extrema for sine
/// and cosine, sampled roots for every family.
fn collect_markers(
    def: &FunctionDef,
    s: &SampleSeries,
    x_min: f64,
    x_max: f64,
    out: &mut Vec<Marker>,
) {
    match def.kind {
        FunctionKind::Quadratic => {
            let f = quadratic_features(def.a, def.b, def.c);
            let (vx, vy) = f.vertex;
            if vx >= x_min && vx <= x_max {
                out.push(Marker {
                    x: vx,
                    y: vy,
                    kind: MarkerKind::Vertex,
                });
            }
        }
        FunctionKind::Sine | FunctionKind::Cosine => {
            for e in find_extrema(&s.x, &s.y) {
                out.push(Marker {
                    x: e.x,
                    y: e.y,
                    kind: MarkerKind::Extremum,
                });
            }
        }
        _ => {}
    }

    for root in find_roots(&s.x, &s.y, ROOT_TOLERANCE) {
        out.push(Marker {
            x: root,
            y: 0.0,
            kind: MarkerKind::Root,
        });
    }
}

/// Suggested display ranges per family, centered on the interesting part of
/// the curve (the vertex, a couple of periods, the asymptote neighborhood).
pub fn optimal_range(kind: FunctionKind, a: f64, b: f64, c: f64) -> ((f64, f64), (f64, f64)) {
    match kind {
        FunctionKind::Quadratic => {
            let (vx, vy) = quadratic_features(a, b, c).vertex;
            ((vx - 5.0, vx + 5.0), (vy - 10.0, vy + 10.0))
        }
        FunctionKind::Sine | FunctionKind::Cosine => {
            let f = trig_features(a, b, c);
            let period = if f.period.is_finite() {
                f.period
            } else {
                std::f64::consts::TAU
            };
            (
                (-2.0 * period, 2.0 * period),
                (-f.amplitude * 1.5, f.amplitude * 1.5),
            )
        }
        FunctionKind::Tangent => {
            let period = if b != 0.0 {
                std::f64::consts::PI / b.abs()
            } else {
                std::f64::consts::PI
            };
            ((-2.0 * period, 2.0 * period), (-10.0, 10.0))
        }
        FunctionKind::Exponential => {
            let y_range = if b > 0.0 {
                (c - 2.0, c + 20.0)
            } else {
                (c - 20.0, c + 2.0)
            };
            ((-5.0, 5.0), y_range)
        }
        FunctionKind::Logarithmic => ((0.1, 10.0), (-5.0, 5.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_labels_and_colors() {
        let mut coll = FunctionCollection::new();
        coll.add(FunctionKind::Quadratic, 1.0, 0.0, -4.0, "r").unwrap();
        coll.add(FunctionKind::Sine, 1.0, 1.0, 0.0, "").unwrap();
        let spec = compose(&coll, -5.0, 5.0, 1000);

        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].label, "y = 1.00x^2 + 0.00x + -4.00");
        assert_eq!(spec.series[0].color, (214, 39, 40));
        // empty tag falls back to the palette slot for index 1
        assert_eq!(spec.series[1].color, SERIES_COLORS[1]);
    }

    #[test]
    fn test_compose_quadratic_markers() {
        let mut coll = FunctionCollection::new();
        coll.add(FunctionKind::Quadratic, 1.0, 0.0, -4.0, "b").unwrap();
        let spec = compose(&coll, -5.0, 5.0, 1000);

        let vertices: Vec<_> = spec
            .markers
            .iter()
            .filter(|m| m.kind == MarkerKind::Vertex)
            .collect();
        assert_eq!(vertices.len(), 1);
        assert_eq!((vertices[0].x, vertices[0].y), (0.0, -4.0));

        let roots: Vec<_> = spec
            .markers
            .iter()
            .filter(|m| m.kind == MarkerKind::Root)
            .map(|m| m.x)
            .collect();
        assert_eq!(roots, vec![-2.0, 2.0]);
    }

    #[test]
    fn test_compose_vertex_outside_range_is_dropped() {
        let mut coll = FunctionCollection::new();
        // vertex at x = 10, outside [-5, 5]
        coll.add(FunctionKind::Quadratic, 1.0, -20.0, 0.0, "b").unwrap();
        let spec = compose(&coll, -5.0, 5.0, 1000);
        assert!(!spec.markers.iter().any(|m| m.kind == MarkerKind::Vertex));
    }

    #[test]
    fn test_compose_no_intersections_for_shifted_parabolas() {
        let mut coll = FunctionCollection::new();
        coll.add(FunctionKind::Quadratic, 1.0, 0.0, 0.0, "b").unwrap();
        coll.add(FunctionKind::Quadratic, 1.0, 0.0, -4.0, "r").unwrap();
        let spec = compose(&coll, -5.0, 5.0, 1000);
        assert!(!spec
            .markers
            .iter()
            .any(|m| m.kind == MarkerKind::Intersection));
    }

    #[test]
    fn test_compose_sine_extrema_markers() {
        let mut coll = FunctionCollection::new();
        coll.add(FunctionKind::Sine, 2.0, 1.0, 0.0, "g").unwrap();
        let spec = compose(&coll, -5.0, 5.0, 1000);
        let extrema: Vec<_> = spec
            .markers
            .iter()
            .filter(|m| m.kind == MarkerKind::Extremum)
            .collect();
        // ±π/2 and ±3π/2 are in range
        assert_eq!(extrema.len(), 4);
        assert!(extrema.iter().all(|m| (m.y.abs() - 2.0).abs() < 0.01));
    }

    #[test]
    fn test_optimal_range_quadratic_centers_on_vertex() {
        let ((x_lo, x_hi), (y_lo, y_hi)) = optimal_range(FunctionKind::Quadratic, 1.0, 0.0, -4.0);
        assert_eq!((x_lo, x_hi), (-5.0, 5.0));
        assert_eq!((y_lo, y_hi), (-14.0, 6.0));
    }

    #[test]
    fn test_optimal_range_trig_spans_two_periods() {
        let ((x_lo, x_hi), (y_lo, y_hi)) = optimal_range(FunctionKind::Sine, 2.0, 1.0, 0.0);
        assert!((x_hi - 2.0 * std::f64::consts::TAU).abs() < 1e-12);
        assert_eq!(x_lo, -x_hi);
        assert_eq!((y_lo, y_hi), (-3.0, 3.0));
    }
}
