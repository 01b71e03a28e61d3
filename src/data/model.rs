use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch-site label, e.g. `"KSC LC-39A"`.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Binary outcome: `1` = success, `0` = failure.
    pub outcome: u8,
    /// Booster category, used only as a chart colour dimension.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after load.
///
/// `min_payload` / `max_payload` are derived once at load time and only seed
/// the initial value of the payload range control.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    pub records: Vec<LaunchRecord>,
    pub min_payload: f64,
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build a dataset from loaded records, computing the payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        let (min_payload, max_payload) = if min.is_finite() && max.is_finite() {
            (min, max)
        } else {
            (0.0, 0.0)
        };

        LaunchDataset {
            records,
            min_payload,
            max_payload,
        }
    }

    /// Sorted distinct site labels present in the data.
    pub fn sites(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.site.as_str()).collect()
    }

    /// Sorted distinct booster-category labels present in the data.
    pub fn booster_categories(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|r| r.booster_category.as_str())
            .collect()
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
