//! Segment table: one row per segment of a `SegmentMap`, sorted.
//!
//! Columns: `p1`, `p1_x`, `p1_y`, `p2`, `p2_x`, `p2_y`, `length`, `minimal`.
//! Point columns render labels the way `Label` displays them (`*_A` for
//! generated names, `__UNNAMED` for anonymous points).

use anyhow::{bail, Context, Result};
use geofacts::api::{Point, SegmentMap};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

pub fn segment_frame(map: &SegmentMap) -> PolarsResult<DataFrame> {
    let rows = map.sorted();
    let label = |p: &Point| p.label().to_string();
    df!(
        "p1" => rows.iter().map(|s| label(s.p1())).collect::<Vec<_>>(),
        "p1_x" => rows.iter().map(|s| s.p1().x()).collect::<Vec<_>>(),
        "p1_y" => rows.iter().map(|s| s.p1().y()).collect::<Vec<_>>(),
        "p2" => rows.iter().map(|s| label(s.p2())).collect::<Vec<_>>(),
        "p2_x" => rows.iter().map(|s| s.p2().x()).collect::<Vec<_>>(),
        "p2_y" => rows.iter().map(|s| s.p2().y()).collect::<Vec<_>>(),
        "length" => rows.iter().map(|s| s.length()).collect::<Vec<_>>(),
        "minimal" => rows.iter().map(|s| map.is_minimal(s)).collect::<Vec<_>>(),
    )
}

/// Write `df` as CSV or Parquet, chosen by the extension of `out`.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" => {
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        "parquet" => {
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        other => bail!("unsupported output extension `{other}` (expected csv or parquet)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geofacts::api::{preprocess, FigureInput};
    use tempfile::tempdir;

    fn crossed_square_map() -> SegmentMap {
        let fig = FigureInput::new("crossed square")
            .point("A", 0.0, 0.0)
            .point("B", 2.0, 0.0)
            .point("C", 2.0, 2.0)
            .point("D", 0.0, 2.0)
            .adjacency("A", &["B", "C", "D"])
            .adjacency("B", &["C", "D"])
            .adjacency("C", &["D"])
            .validate()
            .unwrap();
        preprocess(fig.points, &fig.segments).unwrap()
    }

    #[test]
    fn frame_has_one_row_per_segment() {
        let map = crossed_square_map();
        let df = segment_frame(&map).unwrap();
        assert_eq!(df.shape(), (10, 8));
        let minimal = df.column("minimal").unwrap().bool().unwrap();
        assert_eq!(minimal.into_iter().filter(|v| *v == Some(true)).count(), 8);
        let p2 = df.column("p2").unwrap().str().unwrap();
        assert!(p2.into_iter().any(|v| v == Some("*_A")));
    }

    #[test]
    fn csv_round_trips_through_lazy_reader() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/segments.csv");
        let mut df = segment_frame(&crossed_square_map()).unwrap();
        write_frame(&mut df, &out).unwrap();
        let back = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.shape(), (10, 8));
    }

    #[test]
    fn parquet_is_written() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("segments.parquet");
        let mut df = segment_frame(&crossed_square_map()).unwrap();
        write_frame(&mut df, &out).unwrap();
        assert!(fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let mut df = segment_frame(&crossed_square_map()).unwrap();
        assert!(write_frame(&mut df, &dir.path().join("segments.txt")).is_err());
    }
}
