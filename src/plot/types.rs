/// Plot specification and rendered output types.

/// Output image dimensions (pixels) unless overridden by config.
pub const DEFAULT_PLOT_WIDTH: u32 = 1000;
pub const DEFAULT_PLOT_HEIGHT: u32 = 800;

/// Fallback palette for curves without a recognized color tag (RGB, chosen
/// for a light background).
pub const SERIES_COLORS: &[(u8, u8, u8)] = &[
    (31, 119, 180),  // blue
    (214, 39, 40),   // red
    (44, 160, 44),   // green
    (148, 103, 189), // purple
    (23, 190, 207),  // cyan
    (188, 189, 34),  // olive
    (64, 64, 64),    // dark gray
];

/// Resolve a caller-supplied color tag. Accepts matplotlib-style single
/// letters and full names; unknown tags fall back to the palette.
pub fn resolve_color(tag: &str) -> Option<(u8, u8, u8)> {
    match tag {
        "b" | "blue" => Some((31, 119, 180)),
        "r" | "red" => Some((214, 39, 40)),
        "g" | "green" => Some((44, 160, 44)),
        "m" | "magenta" => Some((197, 27, 138)),
        "c" | "cyan" => Some((23, 190, 207)),
        "y" | "yellow" => Some((188, 189, 34)),
        "k" | "black" => Some((0, 0, 0)),
        _ => None,
    }
}

/// A single curve ready for drawing.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: (u8, u8, u8),
    /// Sample points. `None` = undefined sample (break the line).
    pub points: Vec<Option<(f64, f64)>>,
}

/// What a marker annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Vertex,
    Root,
    Extremum,
    Intersection,
}

/// A feature point drawn as a filled dot on top of the curves.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub kind: MarkerKind,
}

/// Fully specified plot ready for rendering.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub series: Vec<Series>,
    pub markers: Vec<Marker>,
    pub x_min: f64,
    pub x_max: f64,
    pub width: u32,
    pub height: u32,
}

/// A rendered plot image.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tags() {
        assert_eq!(resolve_color("r"), Some((214, 39, 40)));
        assert_eq!(resolve_color("blue"), resolve_color("b"));
        assert_eq!(resolve_color("k"), Some((0, 0, 0)));
    }

    #[test]
    fn test_unknown_tag_falls_through() {
        assert_eq!(resolve_color(""), None);
        assert_eq!(resolve_color("chartreuse"), None);
    }
}
