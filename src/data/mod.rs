/// Data layer: core types, loading, querying and statistics.
///
/// Architecture:
/// ```text
///  camera_dataset.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → CameraDataset, median-fill gaps
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ CameraStore │  Vec<CameraRecord>, append / update price
///   └─────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌─────────┐
///   │  filter  │   │  stats  │  summary table, histogram bins
///   └──────────┘   └─────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod store;
