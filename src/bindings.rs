use std::collections::BTreeMap;

use crate::chart::{ChartSpec, PieSlice, PieSpec, ScatterPoint, ScatterSpec};
use crate::data::filter::{payload_slice, site_slice};
use crate::data::model::LaunchDataset;
use crate::layout::{
    ALL_SITES, PAYLOAD_SLIDER, SITE_DROPDOWN, SUCCESS_PAYLOAD_SCATTER_CHART, SUCCESS_PIE_CHART,
};

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Current values of the two input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValues {
    /// Selected site, or the `ALL` sentinel.
    pub site: String,
    /// Selected `(low, high)` payload range.
    pub payload_range: (f64, f64),
}

// ---------------------------------------------------------------------------
// Chart bindings – pure functions of (dataset, control values)
// ---------------------------------------------------------------------------

/// Pie binding for `success-pie-chart`, subscribed to `site-dropdown`.
///
/// For the `ALL` sentinel the slices are the distinct sites present in the
/// dataset, weighted by their success counts. For a single site the slices
/// are the outcome classes present for that site, weighted by row counts.
pub fn success_pie(dataset: &LaunchDataset, controls: &ControlValues) -> ChartSpec {
    let site = controls.site.as_str();
    let title = format!("Successful launches for: {site}");

    let slices = if site == ALL_SITES {
        let mut successes: BTreeMap<&str, f64> = BTreeMap::new();
        for record in &dataset.records {
            *successes.entry(record.site.as_str()).or_default() += f64::from(record.outcome);
        }
        successes
            .into_iter()
            .map(|(label, weight)| PieSlice {
                label: label.to_string(),
                weight,
            })
            .collect()
    } else {
        let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
        for record in site_slice(&dataset.records, site) {
            *counts.entry(record.outcome).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(class, count)| PieSlice {
                label: class.to_string(),
                weight: count as f64,
            })
            .collect()
    };

    ChartSpec::Pie(PieSpec { title, slices })
}

/// Scatter binding for `success-payload-scatter-chart`, subscribed to
/// `site-dropdown` and `payload-slider`.
///
/// Rows are filtered to `low < payload_mass_kg < high` (both bounds
/// exclusive), then to the selected site unless `ALL`. The title shows the
/// raw dropdown value, including the literal `ALL`.
pub fn payload_scatter(dataset: &LaunchDataset, controls: &ControlValues) -> ChartSpec {
    let site = controls.site.as_str();
    let (low, high) = controls.payload_range;
    let title = format!("Correlation between Payload and Success for {site}");

    let in_range = payload_slice(dataset, low, high);
    let selected = if site == ALL_SITES {
        in_range
    } else {
        site_slice(in_range, site)
    };

    let points = selected
        .into_iter()
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    ChartSpec::Scatter(ScatterSpec { title, points })
}

// ---------------------------------------------------------------------------
// Binding registry
// ---------------------------------------------------------------------------

/// One reactive binding: an output region, the input controls it subscribes
/// to, and the pure function recomputing its chart.
pub struct Binding {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
    pub compute: fn(&LaunchDataset, &ControlValues) -> ChartSpec,
}

/// All bindings, keyed by output region.
pub const BINDINGS: [Binding; 2] = [
    Binding {
        output: SUCCESS_PIE_CHART,
        inputs: &[SITE_DROPDOWN],
        compute: success_pie,
    },
    Binding {
        output: SUCCESS_PAYLOAD_SCATTER_CHART,
        inputs: &[SITE_DROPDOWN, PAYLOAD_SLIDER],
        compute: payload_scatter,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn record(site: &str, mass: f64, outcome: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    /// Fixture mirroring the shape of the real dataset: four sites, two
    /// outcome classes, boundary-exact payload masses included.
    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 2000.0, 0, "v1.0"),
            record("CCAFS LC-40", 2500.0, 1, "v1.1"),
            record("CCAFS SLC-40", 3100.0, 1, "FT"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("KSC LC-39A", 6000.0, 0, "B4"),
            record("KSC LC-39A", 6100.0, 1, "B4"),
            record("VAFB SLC-4E", 9600.0, 1, "B5"),
        ])
    }

    fn controls(site: &str, low: f64, high: f64) -> ControlValues {
        ControlValues {
            site: site.to_string(),
            payload_range: (low, high),
        }
    }

    fn pie(spec: ChartSpec) -> PieSpec {
        match spec {
            ChartSpec::Pie(p) => p,
            other => panic!("expected pie spec, got {other:?}"),
        }
    }

    fn scatter(spec: ChartSpec) -> ScatterSpec {
        match spec {
            ChartSpec::Scatter(s) => s,
            other => panic!("expected scatter spec, got {other:?}"),
        }
    }

    #[test]
    fn all_sites_pie_has_one_slice_per_site_weighted_by_successes() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &controls(ALL_SITES, 0.0, 10_000.0)));

        assert_eq!(p.title, "Successful launches for: ALL");
        let labels: Vec<&str> = p.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        let ksc = p.slices.iter().find(|s| s.label == "KSC LC-39A").unwrap();
        assert_eq!(ksc.weight, 2.0);
    }

    #[test]
    fn single_site_pie_counts_rows_per_outcome_class() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &controls("KSC LC-39A", 0.0, 10_000.0)));

        assert_eq!(p.title, "Successful launches for: KSC LC-39A");
        let labels: Vec<&str> = p.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1"]);
        assert_eq!(p.slices[0].weight, 1.0);
        assert_eq!(p.slices[1].weight, 2.0);
        // Weights sum to the site's total row count.
        assert_eq!(p.total(), 3.0);
    }

    #[test]
    fn single_site_pie_omits_absent_outcome_class() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &controls("VAFB SLC-4E", 0.0, 10_000.0)));
        let labels: Vec<&str> = p.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["1"]);
    }

    #[test]
    fn unknown_site_pie_is_empty() {
        let ds = dataset();
        let p = pie(success_pie(&ds, &controls("CCAFS SLC-41", 0.0, 10_000.0)));
        assert!(p.slices.is_empty());
        assert_eq!(p.total(), 0.0);
    }

    #[test]
    fn scatter_bounds_are_exclusive() {
        let ds = dataset();
        let s = scatter(payload_scatter(&ds, &controls(ALL_SITES, 2000.0, 6000.0)));

        assert!(s
            .points
            .iter()
            .all(|p| p.payload_mass_kg > 2000.0 && p.payload_mass_kg < 6000.0));
        // The 2000 kg and 6000 kg rows sit exactly on the bounds and drop out.
        assert_eq!(s.points.len(), 3);
    }

    #[test]
    fn scatter_full_range_still_drops_boundary_rows() {
        let ds = dataset();
        let s = scatter(payload_scatter(&ds, &controls(ALL_SITES, 0.0, 10_000.0)));
        // Only the 0 kg row sits on a bound; everything else is included.
        assert_eq!(s.points.len(), ds.len() - 1);
        assert!(s.points.iter().all(|p| p.payload_mass_kg > 0.0));
    }

    #[test]
    fn scatter_restricts_to_selected_site() {
        let ds = dataset();
        let s = scatter(payload_scatter(&ds, &controls("KSC LC-39A", 0.0, 10_000.0)));
        assert_eq!(s.points.len(), 3);
        assert!(s
            .points
            .iter()
            .all(|p| p.booster_category == "FT" || p.booster_category == "B4"));
    }

    #[test]
    fn scatter_title_shows_raw_dropdown_value() {
        let ds = dataset();
        let s = scatter(payload_scatter(&ds, &controls(ALL_SITES, 0.0, 10_000.0)));
        assert_eq!(s.title, "Correlation between Payload and Success for ALL");
    }

    #[test]
    fn bindings_are_idempotent() {
        let ds = dataset();
        let values = controls("CCAFS LC-40", 1000.0, 9000.0);
        assert_eq!(success_pie(&ds, &values), success_pie(&ds, &values));
        assert_eq!(payload_scatter(&ds, &values), payload_scatter(&ds, &values));
    }

    #[test]
    fn registry_wires_outputs_to_their_inputs() {
        let by_output: BTreeMap<&str, &Binding> =
            BINDINGS.iter().map(|b| (b.output, b)).collect();
        assert_eq!(
            by_output[SUCCESS_PIE_CHART].inputs,
            &[SITE_DROPDOWN]
        );
        assert_eq!(
            by_output[SUCCESS_PAYLOAD_SCATTER_CHART].inputs,
            &[SITE_DROPDOWN, PAYLOAD_SLIDER]
        );
    }
}
