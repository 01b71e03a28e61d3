use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Row-selection predicates shared by the chart bindings
// ---------------------------------------------------------------------------

/// Whether a record's payload mass lies strictly inside `(low, high)`.
///
/// Both bounds are exclusive: rows whose mass equals either bound are
/// dropped. This matches the historical dashboard behaviour and is relied on
/// by the scatter binding.
pub fn in_payload_range(record: &LaunchRecord, low: f64, high: f64) -> bool {
    record.payload_mass_kg > low && record.payload_mass_kg < high
}

/// All records with payload mass strictly inside `(low, high)`.
pub fn payload_slice(dataset: &LaunchDataset, low: f64, high: f64) -> Vec<&LaunchRecord> {
    dataset
        .records
        .iter()
        .filter(|r| in_payload_range(r, low, high))
        .collect()
}

/// Restrict records to a single launch site.
pub fn site_slice<'a>(
    records: impl IntoIterator<Item = &'a LaunchRecord>,
    site: &str,
) -> Vec<&'a LaunchRecord> {
    records.into_iter().filter(|r| r.site == site).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchDataset;

    fn record(site: &str, mass: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome: 1,
            booster_category: "FT".to_string(),
        }
    }

    #[test]
    fn payload_bounds_are_exclusive() {
        let low = record("A", 2000.0);
        let mid = record("A", 2000.1);
        let high = record("A", 6000.0);
        assert!(!in_payload_range(&low, 2000.0, 6000.0));
        assert!(in_payload_range(&mid, 2000.0, 6000.0));
        assert!(!in_payload_range(&high, 2000.0, 6000.0));
    }

    #[test]
    fn payload_slice_drops_boundary_rows() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 2000.0),
            record("A", 3000.0),
            record("B", 6000.0),
        ]);
        let inside = payload_slice(&ds, 2000.0, 6000.0);
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].payload_mass_kg, 3000.0);
    }

    #[test]
    fn site_slice_filters_exact_label() {
        let rows = [record("A", 1.0), record("B", 2.0), record("A", 3.0)];
        let only_a = site_slice(rows.iter(), "A");
        assert_eq!(only_a.len(), 2);
        assert!(only_a.iter().all(|r| r.site == "A"));
    }
}
