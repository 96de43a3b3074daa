use super::filter::{matching_indices, Predicate};
use super::model::{CameraDataset, CameraRecord};
use super::stats::Summary;

/// A matching record with its row index in the full table.
pub type Row<'a> = (usize, &'a CameraRecord);

// ---------------------------------------------------------------------------
// CameraStore – the session's working copy of the table
// ---------------------------------------------------------------------------

/// Owns the loaded table for one session and exposes every query and edit.
/// Nothing here writes back to the source file.
#[derive(Debug, Clone, Default)]
pub struct CameraStore {
    dataset: CameraDataset,
}

impl CameraStore {
    pub fn new(dataset: CameraDataset) -> Self {
        CameraStore { dataset }
    }

    pub fn dataset(&self) -> &CameraDataset {
        &self.dataset
    }

    #[cfg(test)]
    pub fn records(&self) -> &[CameraRecord] {
        &self.dataset.records
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Cameras released in `[start, end]`.
    pub fn filter_by_year(&self, start: i32, end: i32) -> Vec<Row<'_>> {
        self.select(&Predicate::YearRange { start, end })
    }

    /// Cameras priced at or below `max_price`.
    pub fn filter_by_price(&self, max_price: f64) -> Vec<Row<'_>> {
        self.select(&Predicate::MaxPrice(max_price))
    }

    /// Cameras whose model contains `text`, ignoring case.
    pub fn retrieve_by_model(&self, text: &str) -> Vec<Row<'_>> {
        self.select(&Predicate::ModelContains(text.to_string()))
    }

    /// Append a camera at the end of the table.
    pub fn add_record(&mut self, record: CameraRecord) {
        log::debug!("Appending camera '{}'", record.model);
        self.dataset.records.push(record);
    }

    /// Set the price of every camera whose model contains `text`, ignoring
    /// case. Returns how many rows changed; zero is not an error.
    pub fn update_price(&mut self, text: &str, new_price: f64) -> usize {
        let indices = matching_indices(&self.dataset, &Predicate::ModelContains(text.to_string()));
        for &i in &indices {
            self.dataset.records[i].price = new_price;
        }
        log::debug!("Updated price of {} camera(s) matching '{text}'", indices.len());
        indices.len()
    }

    /// Descriptive statistics over the records currently held.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.dataset.records)
    }

    fn select(&self, predicate: &Predicate) -> Vec<Row<'_>> {
        matching_indices(&self.dataset, predicate)
            .into_iter()
            .map(|i| (i, &self.dataset.records[i]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::NumericColumn;

    fn camera(model: &str, year: i32, price: f64) -> CameraRecord {
        CameraRecord {
            release_date: year,
            price,
            ..CameraRecord::new(model)
        }
    }

    fn store() -> CameraStore {
        CameraStore::new(CameraDataset::from_records(vec![
            camera("Canon A1", 2001, 300.0),
            camera("Nikon D1", 2003, 500.0),
            camera("NIKON Coolpix 990", 2000, 800.0),
            camera("Sony DSC-F707", 2001, 650.0),
        ]))
    }

    fn models<'a>(rows: &[Row<'a>]) -> Vec<&'a str> {
        rows.iter().map(|(_, r)| r.model.as_str()).collect()
    }

    #[test]
    fn inverted_year_range_is_empty() {
        let store = store();
        for (s, e) in [(2002, 2001), (3000, 0), (2001, 2000)] {
            assert!(store.filter_by_year(s, e).is_empty(), "{s}..{e}");
        }
    }

    #[test]
    fn year_filter_keeps_table_order() {
        let store = store();
        assert_eq!(
            models(&store.filter_by_year(2000, 2001)),
            vec!["Canon A1", "NIKON Coolpix 990", "Sony DSC-F707"]
        );
    }

    #[test]
    fn price_filter_is_bounded_and_idempotent() {
        let store = store();
        let first = store.filter_by_price(650.0);
        assert!(first.iter().all(|(_, r)| r.price <= 650.0));
        assert_eq!(models(&first), vec!["Canon A1", "Nikon D1", "Sony DSC-F707"]);

        let again = CameraStore::new(CameraDataset::from_records(
            first.iter().map(|(_, r)| (*r).clone()).collect(),
        ));
        assert_eq!(models(&again.filter_by_price(650.0)), models(&first));
    }

    #[test]
    fn results_carry_table_row_indices() {
        let store = store();
        let indices: Vec<usize> = store.retrieve_by_model("nikon").iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 2]);
        let sony = store.retrieve_by_model("sony");
        assert_eq!(sony[0].0, 3);
        assert_eq!(sony[0].1.model, "Sony DSC-F707");
    }

    #[test]
    fn add_record_appends_at_end() {
        let mut store = store();
        let before: Vec<CameraRecord> = store.records().to_vec();
        store.add_record(camera("Pentax Optio", 2006, 199.0));
        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(&store.records()[..before.len()], &before[..]);
        assert_eq!(store.records().last().unwrap().model, "Pentax Optio");
    }

    #[test]
    fn update_price_touches_only_matches() {
        let mut store = store();
        let changed = store.update_price("Nikon", 499.0);
        assert_eq!(changed, 2);
        for rec in store.records() {
            if rec.model.to_lowercase().contains("nikon") {
                assert_eq!(rec.price, 499.0);
            }
        }
        assert_eq!(store.records()[0].price, 300.0);
        assert_eq!(store.records()[3].price, 650.0);
    }

    #[test]
    fn update_without_match_is_a_no_op() {
        let mut store = store();
        let before = store.records().to_vec();
        assert_eq!(store.update_price("Leica", 1.0), 0);
        assert_eq!(store.records(), &before[..]);
    }

    #[test]
    fn retrieve_unknown_model_is_empty() {
        assert!(store().retrieve_by_model("zzz-nonexistent").is_empty());
    }

    #[test]
    fn update_does_not_leak_into_price_filter() {
        let mut store = CameraStore::new(CameraDataset::from_records(vec![
            camera("Canon A1", 2001, 300.0),
            camera("Nikon D1", 2003, 500.0),
        ]));
        assert_eq!(models(&store.filter_by_price(400.0)), vec!["Canon A1"]);
        store.update_price("nikon", 450.0);
        assert_eq!(models(&store.filter_by_price(400.0)), vec!["Canon A1"]);
    }

    #[test]
    fn summary_includes_edits() {
        let mut store = store();
        store.add_record(camera("Kodak DX", 2004, 100.0));
        store.update_price("canon", 200.0);
        let summary = store.summary();
        let price = summary.get(NumericColumn::Price).unwrap();
        assert_eq!(price.count, 5);
        assert_eq!(price.min, 100.0);
        assert_eq!(price.max, 800.0);
        assert_eq!(price.mean, (200.0 + 500.0 + 800.0 + 650.0 + 100.0) / 5.0);
    }
}
