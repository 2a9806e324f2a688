use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use azimuth::traverse::{run_traverse, TraverseOutcome, TraverseRow};
use azimuth::Vec2;

mod provenance;

#[derive(Parser)]
#[command(name = "azimuth-cli")]
#[command(about = "Traverse engine front end: CSV in, interchange table out")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run a traverse over a CSV of azimuth/distance rows and export the result table
    Run {
        /// Input CSV with `azimuth` and `distance` columns
        #[arg(long)]
        input: String,
        /// Output CSV path for the result table
        #[arg(long)]
        out: String,
        /// Starting reference point X
        #[arg(long, default_value_t = 0.0)]
        start_x: f64,
        /// Starting reference point Y
        #[arg(long, default_value_t = 0.0)]
        start_y: f64,
    },
    /// Parse a single angle string and print decimal degrees
    Angle {
        #[arg(long)]
        text: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            start_x,
            start_y,
        } => run(input, out, start_x, start_y),
        Action::Angle { text } => angle(text),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct RunSummary {
    rows_in: usize,
    accepted: usize,
    rejected: usize,
    area: Option<f64>,
    closure_distance: Option<f64>,
    closes: Option<bool>,
}

fn run(input: String, out: String, start_x: f64, start_y: f64) -> Result<()> {
    tracing::info!(input, out, start_x, start_y, "run");
    let rows = read_rows(&input)?;
    let outcome = run_traverse(&rows, Vec2::new(start_x, start_y));
    for e in &outcome.errors {
        tracing::warn!(row = e.row, message = %e.kind, "row rejected");
    }
    let summary = RunSummary {
        rows_in: rows.len(),
        accepted: outcome.results.len(),
        rejected: outcome.errors.len(),
        area: outcome.area,
        closure_distance: outcome.closure.map(|c| c.distance),
        closes: outcome.closure.map(|c| c.closes),
    };
    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        area = ?summary.area,
        closes = ?summary.closes,
        "finished"
    );
    write_results(&out, &outcome)?;
    provenance::write_sidecar(
        &out,
        provenance::Payload::new(serde_json::json!({
            "input": input,
            "start": [start_x, start_y],
            "summary": summary,
        })),
    )?;
    Ok(())
}

/// Read the `azimuth` and `distance` columns. Azimuth is ingested as text
/// so every notation (DMS symbols, comma decimals) survives the CSV layer.
/// A missing column or a missing cell is a structural error, not a per-row
/// rejection; incomplete rows never enter the traverse.
fn read_rows(input: &str) -> Result<Vec<TraverseRow>> {
    let lf = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {input}"))?;
    let df = lf.collect()?;
    let azimuth = df.column("azimuth")?.cast(&DataType::String)?;
    let azimuth = azimuth.str()?;
    let distance = df.column("distance")?.cast(&DataType::Float64)?;
    let distance = distance.f64()?;
    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let az = azimuth
            .get(i)
            .ok_or_else(|| anyhow!("{input}: row {i}: missing azimuth"))?;
        let d = distance
            .get(i)
            .ok_or_else(|| anyhow!("{input}: row {i}: missing distance"))?;
        rows.push(TraverseRow::new(az, d));
    }
    if rows.is_empty() {
        bail!("{input}: no rows");
    }
    Ok(rows)
}

/// Interchange table: one row per accepted leg, column names and order
/// fixed by the existing CSV export.
fn write_results(out: &str, outcome: &TraverseOutcome) -> Result<()> {
    let rows: Vec<i64> = outcome.results.iter().map(|r| r.row as i64).collect();
    let raw: Vec<String> = outcome
        .results
        .iter()
        .map(|r| r.azimuth_raw.clone())
        .collect();
    let decimal: Vec<f64> = outcome.results.iter().map(|r| r.azimuth_deg).collect();
    let dist: Vec<f64> = outcome.results.iter().map(|r| r.distance).collect();
    let ref_x: Vec<f64> = outcome.results.iter().map(|r| r.reference.x).collect();
    let ref_y: Vec<f64> = outcome.results.iter().map(|r| r.reference.y).collect();
    let x: Vec<f64> = outcome.results.iter().map(|r| r.point.x).collect();
    let y: Vec<f64> = outcome.results.iter().map(|r| r.point.y).collect();
    let mut df = df!(
        "Row" => rows,
        "Azimuth_Original" => raw,
        "Azimuth_Decimal" => decimal,
        "Distance" => dist,
        "Reference_X" => ref_x,
        "Reference_Y" => ref_y,
        "X_Coordinate" => x,
        "Y_Coordinate" => y,
    )?;
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = std::fs::File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

fn angle(text: String) -> Result<()> {
    match azimuth::angle::parse_angle(&text) {
        Some(deg) => {
            println!("{deg}");
            Ok(())
        }
        None => bail!("unrecognized angle: {text:?}"),
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": azimuth::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
