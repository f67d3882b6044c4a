use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use collinear::rand::{draw_point_cloud, CloudCfg, LineLength, ReplayToken};
use collinear::{
    BruteCollinearFinder, CollinearError, CollinearFinder, FastCollinearFinder, LineSegment, Point,
};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod pointfile;

#[derive(Parser)]
#[command(name = "collinear")]
#[command(about = "Find maximal segments of four or more collinear points")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    /// O(N^4) quadruple check; at most four points per line
    Brute,
    /// O(N^2 log N) slope sort
    Fast,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::Brute => "brute",
            Algo::Fast => "fast",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Detect segments and print one `p -> q` line per segment
    Run {
        #[arg(long, value_enum, default_value_t = Algo::Fast)]
        algo: Algo,
        /// Text point file (count, then `x y` pairs) or CSV with x,y columns
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON dump of the segments with run metadata
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random point file with planted lines (text format)
    Gen {
        #[arg(long, default_value_t = 64)]
        noise: usize,
        #[arg(long, default_value_t = 4)]
        lines: usize,
        #[arg(long, default_value_t = 4)]
        per_line_min: usize,
        #[arg(long, default_value_t = 6)]
        per_line_max: usize,
        #[arg(long, default_value_t = 1000)]
        extent: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    // stdout carries segment lines only
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { algo, input, out } => run(algo, &input, out.as_deref()),
        Action::Gen {
            noise,
            lines,
            per_line_min,
            per_line_max,
            extent,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                noise_points: noise,
                lines,
                per_line: LineLength::Uniform {
                    min: per_line_min,
                    max: per_line_max,
                },
                extent,
                ..CloudCfg::default()
            };
            generate(cfg, ReplayToken { seed, index }, &out)
        }
    }
}

fn run(algo: Algo, input: &Path, out: Option<&Path>) -> Result<()> {
    tracing::info!(algo = algo.name(), input = %input.display(), "run");
    let points = pointfile::read_points(input)?;
    let outside = points
        .iter()
        .flatten()
        .filter(|p| !p.within_exact_range())
        .count();
    if outside > 0 {
        tracing::warn!(
            outside,
            bound = Point::MAX_EXACT_COORD,
            "points beyond exact slope range; near-parallel lines may merge"
        );
    }

    let segments = detect(algo, &points)
        .with_context(|| format!("detecting segments in {}", input.display()))?;
    tracing::info!(
        points = points.len(),
        segments = segments.len(),
        "detection complete"
    );

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    for s in &segments {
        writeln!(w, "{s}")?;
    }
    w.flush()?;

    if let Some(out) = out {
        write_segments_json(out, algo, input, points.len(), &segments)?;
    }
    Ok(())
}

fn detect(algo: Algo, points: &[Option<Point>]) -> Result<Vec<LineSegment>, CollinearError> {
    let segments = match algo {
        Algo::Brute => BruteCollinearFinder::from_nullable(Some(points))?.segments(),
        Algo::Fast => FastCollinearFinder::from_nullable(Some(points))?.segments(),
    };
    Ok(segments)
}

fn write_segments_json(
    out: &Path,
    algo: Algo,
    input: &Path,
    point_count: usize,
    segments: &[LineSegment],
) -> Result<()> {
    ensure_parent(out)?;
    let doc = json!({
        "collinear_version": collinear::VERSION,
        "algo": algo.name(),
        "input": input.to_string_lossy(),
        "point_count": point_count,
        "segment_count": segments.len(),
        "segments": segments,
    });
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn generate(cfg: CloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(
        noise = cfg.noise_points,
        lines = cfg.lines,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "generate"
    );
    let points = draw_point_cloud(cfg, tok);
    ensure_parent(out)?;
    std::fs::write(out, pointfile::render_text(&points))
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(points = points.len(), "point file written");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
