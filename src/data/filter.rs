use super::model::CameraDataset;

// ---------------------------------------------------------------------------
// Row predicates → matching indices
// ---------------------------------------------------------------------------

/// A row selection criterion over the camera table.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Release date within `[start, end]`, both ends inclusive.
    YearRange { start: i32, end: i32 },
    /// Price at or below the ceiling.
    MaxPrice(f64),
    /// Model contains the text, ignoring case.
    ModelContains(String),
}

/// Return indices of records matching the predicate, in table order.
///
/// An inverted year range (`start > end`) matches nothing. The empty model
/// text matches every row.
pub fn matching_indices(dataset: &CameraDataset, predicate: &Predicate) -> Vec<usize> {
    let needle = match predicate {
        Predicate::ModelContains(text) => text.to_lowercase(),
        _ => String::new(),
    };

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| match predicate {
            Predicate::YearRange { start, end } => {
                rec.release_date >= *start && rec.release_date <= *end
            }
            Predicate::MaxPrice(max) => rec.price <= *max,
            Predicate::ModelContains(_) => rec.model_contains(&needle),
        })
        .map(|(i, _)| i)
        .collect()
}
