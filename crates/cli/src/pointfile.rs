//! Point file readers and writer.
//!
//! - Text: first token is the point count N, followed by N `x y` integer
//!   pairs, all whitespace separated.
//! - CSV (`.csv` extension): header row with `x` and `y` columns, read via
//!   Polars. Both columns must infer as integers; float or text cells are
//!   rejected rather than truncated. Empty cells become absent points and are
//!   left for the core to reject.

use anyhow::{bail, Context, Result};
use collinear::Point;
use polars::prelude::*;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Read points from `path`, dispatching on the extension.
pub fn read_points(path: &Path) -> Result<Vec<Option<Point>>> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
        return read_csv(path).with_context(|| format!("reading CSV {}", path.display()));
    }
    let src = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let points = parse_text(&src).with_context(|| format!("parsing {}", path.display()))?;
    Ok(points.into_iter().map(Some).collect())
}

pub fn parse_text(src: &str) -> Result<Vec<Point>> {
    let mut tokens = src.split_whitespace();
    let count: usize = tokens
        .next()
        .context("missing point count")?
        .parse()
        .context("point count is not a non-negative integer")?;
    let mut coord = |i: usize, axis: &str| -> Result<i32> {
        tokens
            .next()
            .with_context(|| format!("point {i}: missing {axis}"))?
            .parse()
            .with_context(|| format!("point {i}: {axis} is not an integer"))
    };
    // count is untrusted; grow as pairs are actually read
    let mut points = Vec::new();
    for i in 0..count {
        let x = coord(i, "x")?;
        let y = coord(i, "y")?;
        points.push(Point::new(x, y));
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected token {extra:?} after {count} points");
    }
    Ok(points)
}

fn read_csv(path: &Path) -> Result<Vec<Option<Point>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(None)
        .finish()?
        .select([col("x"), col("y")])
        .collect()?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let x = int32_column(&df, "x")?;
    let y = int32_column(&df, "y")?;
    let xs = x.i32()?;
    let ys = y.i32()?;
    Ok(xs
        .into_iter()
        .zip(ys.into_iter())
        .map(|(x, y)| Some(Point::new(x?, y?)))
        .collect())
}

/// Column `name` as `Int32`; non-integer columns and out-of-range values fail.
fn int32_column(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df.column(name)?;
    let dtype = column.dtype();
    if !dtype.is_integer() {
        bail!("column {name} has type {dtype}, expected integers");
    }
    column
        .strict_cast(&DataType::Int32)
        .with_context(|| format!("column {name} does not fit in i32"))
}

/// Render points in the text format accepted by `parse_text`.
pub fn render_text(points: &[Point]) -> String {
    let mut out = String::with_capacity(16 * (points.len() + 1));
    let _ = writeln!(out, "{}", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x(), p.y());
    }
    out
}
