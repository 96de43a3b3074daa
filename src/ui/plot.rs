use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::YearColors;
use crate::data::model::{CameraDataset, NumericColumn};
use crate::data::stats::{histogram, Bin};

/// Number of buckets in the price histogram.
pub const PRICE_BINS: usize = 30;

const BAR_COLOR: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// Chart data, computed once from the table before the window opens
// ---------------------------------------------------------------------------

/// A chart ready to draw; owns a snapshot of the values it needs.
#[derive(Debug, Clone)]
pub enum Chart {
    PriceDistribution { bins: Vec<Bin> },
    ResolutionVsPrice { series: BTreeMap<i32, Vec<[f64; 2]>>, colors: YearColors },
}

impl Chart {
    /// Histogram of Price over its full range.
    pub fn price_distribution(dataset: &CameraDataset) -> Self {
        Chart::PriceDistribution {
            bins: histogram(&dataset.column(NumericColumn::Price), PRICE_BINS),
        }
    }

    /// Max resolution (x) against Price (y), one series per release year.
    pub fn resolution_vs_price(dataset: &CameraDataset) -> Self {
        let mut series: BTreeMap<i32, Vec<[f64; 2]>> = BTreeMap::new();
        for rec in &dataset.records {
            series
                .entry(rec.release_date)
                .or_default()
                .push([rec.max_resolution, rec.price]);
        }
        let years: BTreeSet<i32> = series.keys().copied().collect();
        Chart::ResolutionVsPrice {
            colors: YearColors::new(&years),
            series,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Chart::PriceDistribution { .. } => "Distribution of Camera Prices",
            Chart::ResolutionVsPrice { .. } => "Max Resolution vs Price",
        }
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            Chart::PriceDistribution { .. } => ("Price", "Frequency"),
            Chart::ResolutionVsPrice { .. } => ("Max Resolution (pixels)", "Price ($)"),
        }
    }

    /// Number of cameras represented in the chart.
    pub fn camera_count(&self) -> usize {
        match self {
            Chart::PriceDistribution { bins } => bins.iter().map(|b| b.count).sum(),
            Chart::ResolutionVsPrice { series, .. } => series.values().map(Vec::len).sum(),
        }
    }
}

// ---------------------------------------------------------------------------
// Plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart in the central panel.
pub fn chart_plot(ui: &mut Ui, chart: &Chart) {
    if chart.camera_count() == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No cameras to plot");
        });
        return;
    }

    let (x_label, y_label) = chart.axis_labels();

    Plot::new("camera_plot")
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| match chart {
            Chart::PriceDistribution { bins } => {
                let bars: Vec<Bar> = bins
                    .iter()
                    .map(|b| Bar::new(b.center(), b.count as f64).width(b.width()))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("Price"));
            }
            Chart::ResolutionVsPrice { series, colors } => {
                for (year, points) in series {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.points(
                        Points::new(points)
                            .radius(3.0)
                            .color(colors.color_for(*year))
                            .name(year.to_string()),
                    );
                }
            }
        });
}
