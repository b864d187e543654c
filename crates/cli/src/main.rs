use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geofacts::api::{preprocess, SegmentMap};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod figure_json;
mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "geofacts")]
#[command(about = "Preprocess geometry figures into their implied segments")]
struct Cmd {
    /// Optional free-form tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Preprocess a JSON figure and write its segment table (.csv or .parquet)
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print every point of a preprocessed figure, implicit points included
    Points {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out } => run(input, out, cmd.tag),
        Action::Points { input } => points(input),
        Action::Report => report(cmd.tag),
    }
}

fn load_and_preprocess(input: &Path) -> Result<SegmentMap> {
    let fig = figure_json::load(input)?;
    tracing::info!(
        description = %fig.description,
        points = fig.points.len(),
        segments = fig.segments.len(),
        "figure"
    );
    preprocess(fig.points, &fig.segments)
        .with_context(|| format!("preprocessing {}", input.display()))
}

fn summary(map: &SegmentMap) -> serde_json::Value {
    json!({
        "points": map.points().len(),
        "implicit": map.implicit_points().len(),
        "segments": map.len(),
        "minimal": map.minimal_segments().len(),
        "non_minimal": map.non_minimal_segments().len(),
    })
}

fn run(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let map = load_and_preprocess(&input)?;
    let mut df = table::segment_frame(&map)?;
    tracing::info!(rows = df.height(), cols = df.width(), "segment_table_shape");
    table::write_frame(&mut df, &out)?;

    let payload = provenance::Payload::new(json!({
        "input": input.to_string_lossy(),
        "eps": geofacts::EPS,
    }))
    .with_summary(summary(&map))
    .with_tag(tag);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn points(input: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), "points");
    let map = load_and_preprocess(&input)?;
    let rows: Vec<_> = map
        .points()
        .points()
        .iter()
        .map(|p| {
            json!({
                "label": p.label().to_string(),
                "x": p.x(),
                "y": p.y(),
                "implicit": p.is_generated(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = provenance::Payload::new(json!({ "eps": geofacts::EPS })).with_tag(tag);
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::document(&payload))?
    );
    Ok(())
}
