use std::path::PathBuf;

use anyhow::{bail, Context};

use funcviz::func::collection::FunctionCollection;
use funcviz::func::def::{validate_range, FunctionKind};
use funcviz::func::eval::{expression, x_grid};
use funcviz::func::features::{describe_features, find_intersections, format_number};
use funcviz::persistence::config::load_config;
use funcviz::plot::compose::{compose, optimal_range};
use funcviz::plot::render::{render_plot, save_png};

struct Cli {
    specs: Vec<String>,
    range: Option<(f64, f64)>,
    samples: Option<usize>,
    out: Option<PathBuf>,
    auto_range: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        return Ok(());
    }
    let cli = parse_args(&args)?;
    if cli.specs.is_empty() {
        usage();
        bail!("no functions given");
    }

    let config = load_config();

    let mut collection = FunctionCollection::new();
    for spec in &cli.specs {
        let (kind, a, b, c, color) = parse_spec(spec)?;
        collection.add(kind, a, b, c, color)?;
    }

    let (x_min, x_max) = if let Some(range) = cli.range {
        range
    } else if cli.auto_range {
        let first = &collection.defs()[0];
        optimal_range(first.kind, first.a, first.b, first.c).0
    } else {
        (config.x_min, config.x_max)
    };
    validate_range(x_min, x_max)?;
    let samples = cli.samples.unwrap_or(config.samples);

    for def in collection.defs() {
        println!("{}", expression(def.kind, def.a, def.b, def.c));
        for line in describe_features(def.kind, def.a, def.b, def.c) {
            println!("  {}", line);
        }
    }

    let grid = x_grid(x_min, x_max, samples);
    let defs = collection.defs();
    for i in 0..defs.len() {
        for j in (i + 1)..defs.len() {
            let points = find_intersections(&grid, &defs[i], &defs[j]);
            if !points.is_empty() {
                println!("intersections of f{} and f{}:", i + 1, j + 1);
                for (x, y) in points {
                    println!("  ({}, {})", format_number(x, 2), format_number(y, 2));
                }
            }
        }
    }

    let mut spec = compose(&collection, x_min, x_max, samples);
    spec.width = config.plot_width;
    spec.height = config.plot_height;
    tracing::debug!(
        curves = spec.series.len(),
        markers = spec.markers.len(),
        "plot composed"
    );

    let rendered = render_plot(&spec)?;
    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(&config.save_filename));
    save_png(&rendered, &out)?;
    tracing::info!(path = %out.display(), "plot written");
    println!("saved {}", out.display());

    Ok(())
}

fn usage() {
    eprintln!("usage: funcviz [OPTIONS] SPEC...");
    eprintln!();
    eprintln!("  SPEC              kind:a,b,c[:color]   e.g. quadratic:1,0,-4:r  sine:2,3,0");
    eprintln!("  kinds             quadratic, sine, cosine, tangent, exponential, logarithmic");
    eprintln!();
    eprintln!("  --range MIN:MAX   x-axis range (default from config)");
    eprintln!("  --auto-range      derive the x-range from the first function");
    eprintln!("  --samples N       sample points per curve (default 1000)");
    eprintln!("  --out FILE        output PNG path (default function_plot.png)");
}

fn parse_args(args: &[String]) -> anyhow::Result<Cli> {
    let mut cli = Cli {
        specs: Vec::new(),
        range: None,
        samples: None,
        out: None,
        auto_range: false,
    };

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--range" => {
                let v = it.next().context("--range needs MIN:MAX")?;
                cli.range = Some(parse_range(v)?);
            }
            "--samples" => {
                let v = it.next().context("--samples needs a number")?;
                cli.samples = Some(v.parse().context("invalid --samples")?);
            }
            "--out" => {
                let v = it.next().context("--out needs a path")?;
                cli.out = Some(PathBuf::from(v));
            }
            "--auto-range" => cli.auto_range = true,
            s if s.starts_with("--") => bail!("unknown option: {}", s),
            _ => cli.specs.push(arg.clone()),
        }
    }
    Ok(cli)
}

fn parse_range(s: &str) -> anyhow::Result<(f64, f64)> {
    let (lo, hi) = s
        .split_once(':')
        .with_context(|| format!("invalid range '{}', expected MIN:MAX", s))?;
    let lo: f64 = lo.trim().parse().with_context(|| format!("invalid range minimum '{}'", lo))?;
    let hi: f64 = hi.trim().parse().with_context(|| format!("invalid range maximum '{}'", hi))?;
    Ok((lo, hi))
}

fn parse_spec(s: &str) -> anyhow::Result<(FunctionKind, f64, f64, f64, String)> {
    let mut parts = s.splitn(3, ':');
    let kind: FunctionKind = parts
        .next()
        .unwrap_or_default()
        .parse()
        .with_context(|| format!("in '{}'", s))?;
    let params = parts
        .next()
        .with_context(|| format!("missing parameters in '{}', expected kind:a,b,c", s))?;
    let nums: Vec<f64> = params
        .split(',')
        .map(|p| p.trim().parse())
        .collect::<Result<_, _>>()
        .with_context(|| format!("invalid parameters in '{}'", s))?;
    if nums.len() != 3 {
        bail!("expected three parameters a,b,c in '{}'", s);
    }
    let color = parts.next().unwrap_or("").to_string();
    Ok((kind, nums[0], nums[1], nums[2], color))
}
