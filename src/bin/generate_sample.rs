use anyhow::{Context, Result};
use serde::Serialize;

/// One output row; `None` is written as an empty cell.
#[derive(Serialize)]
struct CameraRow {
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Release date")]
    release_date: i32,
    #[serde(rename = "Max resolution")]
    max_resolution: f64,
    #[serde(rename = "Low resolution")]
    low_resolution: f64,
    #[serde(rename = "Effective pixels")]
    effective_pixels: f64,
    #[serde(rename = "Zoom wide (W)")]
    zoom_wide: f64,
    #[serde(rename = "Zoom tele (T)")]
    zoom_tele: f64,
    #[serde(rename = "Normal focus range")]
    normal_focus_range: f64,
    #[serde(rename = "Macro focus range")]
    macro_focus_range: Option<f64>,
    #[serde(rename = "Storage included")]
    storage_included: Option<f64>,
    #[serde(rename = "Weight (inc. batteries)")]
    weight: Option<f64>,
    #[serde(rename = "Dimensions")]
    dimensions: Option<f64>,
    #[serde(rename = "Price")]
    price: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// `value` most of the time, `None` with the given probability.
    fn maybe(&mut self, value: f64, blank_probability: f64) -> Option<f64> {
        (self.next_f64() >= blank_probability).then_some(value)
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let brands = [
        "Agfa", "Canon", "Casio", "Fujifilm", "Kodak", "Nikon", "Olympus", "Panasonic",
        "Pentax", "Sony",
    ];
    let lines = ["PowerShot", "Coolpix", "Cyber-shot", "FinePix", "EasyShare", "Optio", "Lumix"];
    let widths: [(f64, f64); 4] = [(640.0, 480.0), (1024.0, 768.0), (1600.0, 1200.0), (2048.0, 1536.0)];

    let output_path = "camera_dataset.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    let rows = 200;
    for i in 0..rows {
        let year = 1994 + (i % 14) as i32;
        // Resolution grows with the release year.
        let (base_w, base_h) = *rng.pick(&widths);
        let scale = 1.0 + (year - 1994) as f64 * 0.15;
        let max_resolution = (base_w * scale).round();
        let low_resolution = (max_resolution * rng.range(0.5, 0.8)).round();
        let effective_pixels = ((max_resolution * base_h * scale) / 1.0e6).round();
        let zoom_wide = rng.range(28.0, 40.0).round();
        let zoom_tele = (zoom_wide * rng.range(1.0, 10.0)).round();
        let macro_focus = rng.range(1.0, 30.0).round();
        let storage = *rng.pick(&[8.0, 16.0, 32.0, 64.0]);
        let weight = rng.range(100.0, 900.0).round();
        let dimensions = rng.range(80.0, 160.0).round();

        let row = CameraRow {
            model: format!(
                "{} {} {}",
                rng.pick(&brands),
                rng.pick(&lines),
                100 + i * 7
            ),
            release_date: year,
            max_resolution,
            low_resolution,
            effective_pixels,
            zoom_wide,
            zoom_tele,
            normal_focus_range: rng.range(10.0, 120.0).round(),
            macro_focus_range: rng.maybe(macro_focus, 0.05),
            storage_included: rng.maybe(storage, 0.05),
            weight: rng.maybe(weight, 0.03),
            dimensions: rng.maybe(dimensions, 0.03),
            price: (rng.range(1.0, 8.0).powi(2) * 40.0).round(),
        };
        writer.serialize(&row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {rows} cameras to {output_path}");
    Ok(())
}
