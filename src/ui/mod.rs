pub mod panels;
pub mod plot;

use anyhow::Result;

use crate::data::model::CameraDataset;

/// Presentation backend for the two charts offered by the menu.
///
/// Implementations only read the dataset. Each call returns once the chart
/// has been dismissed.
pub trait ChartRenderer {
    /// 30-bucket histogram of Price.
    fn price_distribution(&mut self, dataset: &CameraDataset) -> Result<()>;

    /// Scatter of Max resolution against Price.
    fn resolution_vs_price(&mut self, dataset: &CameraDataset) -> Result<()>;
}
