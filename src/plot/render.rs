/// Plot rendering pipeline: PlotSpec → PNG bytes via plotters.

use crate::func::error::{PlotError, PlotResult};
use crate::plot::types::*;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;
use std::path::Path;

/// Background color (light, matching the tool's default theme).
const BG_COLOR: RGBColor = RGBColor(248, 248, 248);
/// Frame / tick color.
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
/// Grid line color (blended down when drawn).
const GRID_COLOR: RGBColor = RGBColor(160, 160, 160);
/// The x = 0 and y = 0 axis lines.
const ZERO_AXIS_COLOR: RGBColor = RGBColor(0, 0, 0);

/// Render a PlotSpec to a PNG image.
pub fn render_plot(spec: &PlotSpec) -> PlotResult<RenderedPlot> {
    let (width, height) = (spec.width, spec.height);
    let mut buf = vec![0u8; (width as usize) * (height as usize) * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR)
            .map_err(|e| PlotError::render(format!("fill: {}", e)))?;

        let (y_min, y_max) = compute_y_range(&spec.series);

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .build_cartesian_2d(spec.x_min..spec.x_max, y_min..y_max)
            .map_err(|e| PlotError::render(format!("chart build: {}", e)))?;

        chart
            .configure_mesh()
            .axis_style(AXIS_COLOR)
            .bold_line_style(GRID_COLOR.mix(0.4))
            .light_line_style(GRID_COLOR.mix(0.15))
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(|e| PlotError::render(format!("mesh: {}", e)))?;

        // emphasised origin lines, drawn only when the origin is visible
        if y_min < 0.0 && y_max > 0.0 {
            chart
                .draw_series(LineSeries::new(
                    [(spec.x_min, 0.0), (spec.x_max, 0.0)],
                    ZERO_AXIS_COLOR.stroke_width(1),
                ))
                .map_err(|e| PlotError::render(format!("x axis: {}", e)))?;
        }
        if spec.x_min < 0.0 && spec.x_max > 0.0 {
            chart
                .draw_series(LineSeries::new(
                    [(0.0, y_min), (0.0, y_max)],
                    ZERO_AXIS_COLOR.stroke_width(1),
                ))
                .map_err(|e| PlotError::render(format!("y axis: {}", e)))?;
        }

        for series in &spec.series {
            let (r, g, b) = series.color;
            let color = RGBColor(r, g, b);
            let segments = split_segments(&series.points);

            for segment in &segments {
                chart
                    .draw_series(LineSeries::new(
                        segment.iter().copied(),
                        color.stroke_width(2),
                    ))
                    .map_err(|e| PlotError::render(format!("draw series: {}", e)))?;
            }
        }

        chart
            .draw_series(
                spec.markers
                    .iter()
                    .filter(|m| {
                        m.y.is_finite()
                            && m.x >= spec.x_min
                            && m.x <= spec.x_max
                            && m.y >= y_min
                            && m.y <= y_max
                    })
                    .map(|m| {
                        let (color, radius) = marker_style(m.kind);
                        Circle::new((m.x, m.y), radius, color.filled())
                    }),
            )
            .map_err(|e| PlotError::render(format!("markers: {}", e)))?;

        root.present()
            .map_err(|e| PlotError::render(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;

    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
    })
}

/// Write a rendered plot to disk.
pub fn save_png(plot: &RenderedPlot, path: &Path) -> PlotResult<()> {
    std::fs::write(path, &plot.png_bytes)
        .map_err(|e| PlotError::render(format!("write {}: {}", path.display(), e)))
}

fn marker_style(kind: MarkerKind) -> (RGBColor, i32) {
    match kind {
        MarkerKind::Vertex => (RGBColor(220, 50, 47), 5),
        MarkerKind::Root => (RGBColor(35, 140, 60), 4),
        MarkerKind::Extremum => (RGBColor(230, 130, 30), 3),
        MarkerKind::Intersection => (RGBColor(120, 60, 200), 4),
    }
}

/// Split a point series at None (undefined samples) into continuous segments.
fn split_segments(points: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for pt in points {
        match pt {
            Some(p) => current.push(*p),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> PlotResult<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| PlotError::render(format!("PNG encode: {}", e)))?;
    Ok(png)
}

/// Compute a good y-axis range from the data, with padding and clamping.
fn compute_y_range(all_series: &[Series]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for series in all_series {
        for pt in &series.points {
            if let Some((_, y)) = pt {
                if y.is_finite() {
                    y_min = y_min.min(*y);
                    y_max = y_max.max(*y);
                }
            }
        }
    }

    // Clamp to avoid asymptote blowup
    y_min = y_min.max(-1000.0);
    y_max = y_max.min(1000.0);

    // Fallback for empty/constant data
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-10 {
        return (y_min - 1.0, y_max + 1.0);
    }

    // Add 10% padding
    let pad = (y_max - y_min) * 0.1;
    (y_min - pad, y_max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabola_series() -> Series {
        let points: Vec<Option<(f64, f64)>> = (0..100)
            .map(|i| {
                let x = -5.0 + 10.0 * i as f64 / 99.0;
                Some((x, x * x - 4.0))
            })
            .collect();
        Series {
            label: "y = 1.00x^2 + 0.00x + -4.00".to_string(),
            color: (31, 119, 180),
            points,
        }
    }

    fn spec_with(series: Vec<Series>, markers: Vec<Marker>) -> PlotSpec {
        PlotSpec {
            series,
            markers,
            x_min: -5.0,
            x_max: 5.0,
            width: 400,
            height: 300,
        }
    }

    #[test]
    fn test_render_simple() {
        let spec = spec_with(vec![parabola_series()], Vec::new());
        let result = render_plot(&spec).unwrap();
        assert!(!result.png_bytes.is_empty());
        assert_eq!(result.width, 400);
        assert_eq!(result.height, 300);
        // full PNG signature
        assert_eq!(
            &result.png_bytes[..8],
            &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]
        );
    }

    #[test]
    fn test_render_with_markers() {
        let markers = vec![
            Marker { x: 0.0, y: -4.0, kind: MarkerKind::Vertex },
            Marker { x: -2.0, y: 0.0, kind: MarkerKind::Root },
            Marker { x: 2.0, y: 0.0, kind: MarkerKind::Root },
            // out of x-range, silently skipped
            Marker { x: 40.0, y: 0.0, kind: MarkerKind::Intersection },
        ];
        let spec = spec_with(vec![parabola_series()], markers);
        assert!(render_plot(&spec).is_ok());
    }

    #[test]
    fn test_render_with_gaps() {
        let mut points: Vec<Option<(f64, f64)>> = Vec::new();
        for i in 0..50 {
            let x = -5.0 + 10.0 * i as f64 / 99.0;
            points.push(Some((x, x)));
        }
        points.push(None); // undefined region
        for i in 50..100 {
            let x = -5.0 + 10.0 * i as f64 / 99.0;
            points.push(Some((x, x + 2.0)));
        }
        let series = Series {
            label: "f".to_string(),
            color: (214, 39, 40),
            points,
        };
        let spec = spec_with(vec![series], Vec::new());
        let result = render_plot(&spec).unwrap();
        assert!(!result.png_bytes.is_empty());
    }

    #[test]
    fn test_split_segments() {
        let points = vec![Some((0.0, 0.0)), Some((1.0, 1.0)), None, Some((3.0, 3.0))];
        let segs = split_segments(&points);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].len(), 2);
        assert_eq!(segs[1].len(), 1);
    }

    #[test]
    fn test_y_range_with_empty() {
        let (y_min, y_max) = compute_y_range(&[]);
        assert!(y_min < y_max);
    }

    #[test]
    fn test_y_range_constant() {
        let series = Series {
            label: "c".to_string(),
            color: (0, 0, 0),
            points: vec![Some((0.0, 5.0)), Some((1.0, 5.0))],
        };
        let (y_min, y_max) = compute_y_range(&[series]);
        assert!(y_min < 5.0);
        assert!(y_max > 5.0);
    }

    #[test]
    fn test_y_range_clamps_blowup() {
        let series = Series {
            label: "spike".to_string(),
            color: (0, 0, 0),
            points: vec![Some((0.0, 0.0)), Some((1.0, 1e9))],
        };
        let (_, y_max) = compute_y_range(&[series]);
        assert!(y_max <= 1100.0);
    }
}
