use std::fmt;

// ---------------------------------------------------------------------------
// NumericColumn – the numeric part of the fixed schema
// ---------------------------------------------------------------------------

/// CSV header of the text column.
pub const MODEL_HEADER: &str = "Model";

/// Every numeric column of a camera record, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericColumn {
    ReleaseDate,
    MaxResolution,
    LowResolution,
    EffectivePixels,
    ZoomWide,
    ZoomTele,
    NormalFocusRange,
    MacroFocusRange,
    StorageIncluded,
    Weight,
    Dimensions,
    Price,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 12] = [
        NumericColumn::ReleaseDate,
        NumericColumn::MaxResolution,
        NumericColumn::LowResolution,
        NumericColumn::EffectivePixels,
        NumericColumn::ZoomWide,
        NumericColumn::ZoomTele,
        NumericColumn::NormalFocusRange,
        NumericColumn::MacroFocusRange,
        NumericColumn::StorageIncluded,
        NumericColumn::Weight,
        NumericColumn::Dimensions,
        NumericColumn::Price,
    ];

    /// Column name as it appears in the CSV header.
    pub fn header(self) -> &'static str {
        match self {
            NumericColumn::ReleaseDate => "Release date",
            NumericColumn::MaxResolution => "Max resolution",
            NumericColumn::LowResolution => "Low resolution",
            NumericColumn::EffectivePixels => "Effective pixels",
            NumericColumn::ZoomWide => "Zoom wide (W)",
            NumericColumn::ZoomTele => "Zoom tele (T)",
            NumericColumn::NormalFocusRange => "Normal focus range",
            NumericColumn::MacroFocusRange => "Macro focus range",
            NumericColumn::StorageIncluded => "Storage included",
            NumericColumn::Weight => "Weight (inc. batteries)",
            NumericColumn::Dimensions => "Dimensions",
            NumericColumn::Price => "Price",
        }
    }

    /// Human label used when prompting for a value.
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::ReleaseDate => "Release Year",
            NumericColumn::MaxResolution => "Max Resolution",
            NumericColumn::LowResolution => "Low Resolution",
            NumericColumn::EffectivePixels => "Effective Pixels",
            NumericColumn::ZoomWide => "Zoom Wide (W)",
            NumericColumn::ZoomTele => "Zoom Tele (T)",
            NumericColumn::NormalFocusRange => "Normal Focus Range",
            NumericColumn::MacroFocusRange => "Macro Focus Range",
            NumericColumn::StorageIncluded => "Storage Included",
            NumericColumn::Weight => "Weight (inc. batteries)",
            NumericColumn::Dimensions => "Dimensions",
            NumericColumn::Price => "Price",
        }
    }

    /// Integer-typed columns are prompted for and stored as whole numbers.
    pub fn is_integer(self) -> bool {
        matches!(self, NumericColumn::ReleaseDate)
    }

    /// Read this column from a record.
    pub fn get(self, record: &CameraRecord) -> f64 {
        match self {
            NumericColumn::ReleaseDate => record.release_date as f64,
            NumericColumn::MaxResolution => record.max_resolution,
            NumericColumn::LowResolution => record.low_resolution,
            NumericColumn::EffectivePixels => record.effective_pixels,
            NumericColumn::ZoomWide => record.zoom_wide,
            NumericColumn::ZoomTele => record.zoom_tele,
            NumericColumn::NormalFocusRange => record.normal_focus_range,
            NumericColumn::MacroFocusRange => record.macro_focus_range,
            NumericColumn::StorageIncluded => record.storage_included,
            NumericColumn::Weight => record.weight,
            NumericColumn::Dimensions => record.dimensions,
            NumericColumn::Price => record.price,
        }
    }

    /// Write this column on a record. Release date is rounded to a whole year.
    pub fn set(self, record: &mut CameraRecord, value: f64) {
        match self {
            NumericColumn::ReleaseDate => record.release_date = value.round() as i32,
            NumericColumn::MaxResolution => record.max_resolution = value,
            NumericColumn::LowResolution => record.low_resolution = value,
            NumericColumn::EffectivePixels => record.effective_pixels = value,
            NumericColumn::ZoomWide => record.zoom_wide = value,
            NumericColumn::ZoomTele => record.zoom_tele = value,
            NumericColumn::NormalFocusRange => record.normal_focus_range = value,
            NumericColumn::MacroFocusRange => record.macro_focus_range = value,
            NumericColumn::StorageIncluded => record.storage_included = value,
            NumericColumn::Weight => record.weight = value,
            NumericColumn::Dimensions => record.dimensions = value,
            NumericColumn::Price => record.price = value,
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// CameraRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single camera (one row of the source CSV).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraRecord {
    pub model: String,
    pub release_date: i32,
    pub max_resolution: f64,
    pub low_resolution: f64,
    pub effective_pixels: f64,
    pub zoom_wide: f64,
    pub zoom_tele: f64,
    pub normal_focus_range: f64,
    pub macro_focus_range: f64,
    pub storage_included: f64,
    pub weight: f64,
    pub dimensions: f64,
    pub price: f64,
}

impl CameraRecord {
    /// A record with the given model and every numeric column set to zero.
    pub fn new(model: impl Into<String>) -> Self {
        CameraRecord {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive substring match against the model name.
    pub fn model_contains(&self, needle_lower: &str) -> bool {
        self.model.to_lowercase().contains(needle_lower)
    }
}

// ---------------------------------------------------------------------------
// CameraDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full table in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraDataset {
    pub records: Vec<CameraRecord>,
}

impl CameraDataset {
    pub fn from_records(records: Vec<CameraRecord>) -> Self {
        CameraDataset { records }
    }

    /// Number of cameras.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one numeric column, in row order.
    pub fn column(&self, column: NumericColumn) -> Vec<f64> {
        self.records.iter().map(|r| column.get(r)).collect()
    }
}
