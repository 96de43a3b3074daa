use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{CameraDataset, CameraRecord, NumericColumn, MODEL_HEADER};
use super::stats::median;
use crate::error::CameraError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the camera table from a CSV file and fill numeric gaps with each
/// column's median.
///
/// The header must name every schema column; extra columns are ignored.
/// Blank numeric cells are gaps, any other unparseable cell is an error.
pub fn load_file(path: &Path) -> Result<CameraDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;
    let dataset = read_csv(file).with_context(|| format!("reading {}", path.display()))?;
    log::info!("Loaded {} cameras from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse CSV text from any reader. See [`load_file`].
pub fn read_csv<R: io::Read>(source: R) -> Result<CameraDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    let required = std::iter::once(MODEL_HEADER).chain(NumericColumn::ALL.iter().map(|c| c.header()));
    for name in required {
        if !headers.iter().any(|h| h == name) {
            return Err(CameraError::MissingColumn(name).into());
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("reading CSV record")?;
        let line = record.position().map_or(0, |p| p.line());
        let raw: RawCamera = record
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV line {line}"))?;
        rows.push(raw);
    }

    impute_medians(rows)
}

// ---------------------------------------------------------------------------
// Raw rows and median imputation
// ---------------------------------------------------------------------------

/// One CSV row before imputation; `None` marks a blank cell.
#[derive(Debug, Deserialize)]
struct RawCamera {
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Release date")]
    release_date: Option<f64>,
    #[serde(rename = "Max resolution")]
    max_resolution: Option<f64>,
    #[serde(rename = "Low resolution")]
    low_resolution: Option<f64>,
    #[serde(rename = "Effective pixels")]
    effective_pixels: Option<f64>,
    #[serde(rename = "Zoom wide (W)")]
    zoom_wide: Option<f64>,
    #[serde(rename = "Zoom tele (T)")]
    zoom_tele: Option<f64>,
    #[serde(rename = "Normal focus range")]
    normal_focus_range: Option<f64>,
    #[serde(rename = "Macro focus range")]
    macro_focus_range: Option<f64>,
    #[serde(rename = "Storage included")]
    storage_included: Option<f64>,
    #[serde(rename = "Weight (inc. batteries)")]
    weight: Option<f64>,
    #[serde(rename = "Dimensions")]
    dimensions: Option<f64>,
    #[serde(rename = "Price")]
    price: Option<f64>,
}

impl RawCamera {
    fn value(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::ReleaseDate => self.release_date,
            NumericColumn::MaxResolution => self.max_resolution,
            NumericColumn::LowResolution => self.low_resolution,
            NumericColumn::EffectivePixels => self.effective_pixels,
            NumericColumn::ZoomWide => self.zoom_wide,
            NumericColumn::ZoomTele => self.zoom_tele,
            NumericColumn::NormalFocusRange => self.normal_focus_range,
            NumericColumn::MacroFocusRange => self.macro_focus_range,
            NumericColumn::StorageIncluded => self.storage_included,
            NumericColumn::Weight => self.weight,
            NumericColumn::Dimensions => self.dimensions,
            NumericColumn::Price => self.price,
        }
    }
}

/// Medians are computed from the file as read, once, before any edit.
/// A float column with no values at all stays NaN; release date must have
/// at least one value if any row lacks it.
fn impute_medians(rows: Vec<RawCamera>) -> Result<CameraDataset> {
    let mut fills = Vec::with_capacity(NumericColumn::ALL.len());
    for col in NumericColumn::ALL {
        let present: Vec<f64> = rows.iter().filter_map(|r| r.value(col)).collect();
        let gaps = rows.len() - present.len();
        let fill = match median(&present) {
            Some(m) => m,
            None if gaps > 0 && col.is_integer() => {
                return Err(CameraError::EmptyColumn(col.header()).into());
            }
            None => {
                if gaps > 0 {
                    log::warn!("Column '{col}' has no values; leaving {gaps} cell(s) empty");
                }
                f64::NAN
            }
        };
        if gaps > 0 {
            log::debug!("Filled {gaps} gap(s) in '{col}' with median {fill}");
        }
        fills.push((col, fill));
    }

    let records = rows
        .into_iter()
        .map(|raw| {
            let mut record = CameraRecord::new(raw.model.clone());
            for &(col, fill) in &fills {
                col.set(&mut record, raw.value(col).unwrap_or(fill));
            }
            record
        })
        .collect();

    Ok(CameraDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Model,Release date,Max resolution,Low resolution,Effective pixels,\
Zoom wide (W),Zoom tele (T),Normal focus range,Macro focus range,Storage included,\
Weight (inc. batteries),Dimensions,Price";

    fn csv_text(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn reads_complete_rows_in_order() {
        let text = csv_text(&[
            "Agfa ePhoto 1280,1997,1024,640,0,38,114,70,40,4,420,95,179",
            "Canon PowerShot A5,1999,1024,768,1,35,105,60,10,8,275,116,149",
        ]);
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].model, "Agfa ePhoto 1280");
        assert_eq!(ds.records[0].release_date, 1997);
        assert_eq!(ds.records[0].weight, 420.0);
        assert_eq!(ds.records[1].price, 149.0);
    }

    #[test]
    fn blank_cells_take_column_median() {
        let text = csv_text(&[
            "A,2000,1000,500,1,30,90,50,5,8,100,90,100",
            "B,2001,2000,500,1,30,90,50,,8,300,90,200",
            "C,2002,3000,500,1,30,90,50,15,8,,90,",
            "D,2003,4000,500,1,30,90,50,20,8,400,90,700",
        ]);
        let ds = read_csv(text.as_bytes()).unwrap();
        // Macro focus range: median of 5, 15, 20.
        assert_eq!(ds.records[1].macro_focus_range, 15.0);
        // Weight: median of 100, 300, 400.
        assert_eq!(ds.records[2].weight, 300.0);
        // Price: median of 100, 200, 700.
        assert_eq!(ds.records[2].price, 200.0);
        // Present cells are untouched.
        assert_eq!(ds.records[3].price, 700.0);
    }

    #[test]
    fn missing_column_is_rejected() {
        let text = "Model,Release date,Price\nA,2000,100";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CameraError>(),
            Some(CameraError::MissingColumn("Max resolution"))
        ));
    }

    #[test]
    fn non_numeric_cell_names_its_file_line() {
        let text = csv_text(&[
            "A,2000,1000,500,1,30,90,50,5,8,100,90,100",
            "B,2000,lots,500,1,30,90,50,5,8,100,90,100",
        ]);
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV line 3"), "{err:#}");
    }

    #[test]
    fn blank_release_date_takes_rounded_median() {
        let text = csv_text(&[
            "A,2000,1000,500,1,30,90,50,5,8,100,90,100",
            "B,2001,1000,500,1,30,90,50,5,8,100,90,100",
            "C,,1000,500,1,30,90,50,5,8,100,90,100",
        ]);
        let ds = read_csv(text.as_bytes()).unwrap();
        // Median of 2000 and 2001 is 2000.5.
        assert_eq!(ds.records[2].release_date, 2001);
        assert_eq!(ds.records[0].release_date, 2000);
    }

    #[test]
    fn all_blank_release_dates_are_rejected() {
        let text = csv_text(&[
            "A,,1000,500,1,30,90,50,5,8,100,90,100",
            "B,,1000,500,1,30,90,50,5,8,100,90,100",
        ]);
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CameraError>(),
            Some(CameraError::EmptyColumn("Release date"))
        ));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = format!("{HEADER},Notes\nA,2000,1000,500,1,30,90,50,5,8,100,90,100,refurbished");
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].price, 100.0);
    }

    #[test]
    fn load_file_reads_from_disk() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("camera_dataset.csv");
        std::fs::write(&path, csv_text(&["Kodak DC40,1996,756,504,0,0,0,0,0,0,0,0,199"])).unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].model, "Kodak DC40");
    }

    #[test]
    fn load_file_fails_when_missing() {
        let tempdir = tempfile::tempdir().unwrap();
        assert!(load_file(&tempdir.path().join("nope.csv")).is_err());
    }
}
