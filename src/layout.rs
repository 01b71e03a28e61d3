use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Control contract
// ---------------------------------------------------------------------------

/// Single-select launch-site control.
pub const SITE_DROPDOWN: &str = "site-dropdown";
/// Dual-handle payload-mass range control.
pub const PAYLOAD_SLIDER: &str = "payload-slider";
/// Pie-chart output region.
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
/// Scatter-chart output region.
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";

/// Dropdown sentinel meaning "do not filter by site".
pub const ALL_SITES: &str = "ALL";

/// The selectable launch sites, in dropdown order.
pub const LAUNCH_SITES: [&str; 4] = [
    "CCAFS LC-40",
    "CCAFS SLC-40",
    "KSC LC-39A",
    "VAFB SLC-4E",
];

pub const PAYLOAD_MIN: f64 = 0.0;
pub const PAYLOAD_MAX: f64 = 10_000.0;
pub const PAYLOAD_STEP: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Layout tree
// ---------------------------------------------------------------------------

/// One node of the static dashboard layout.
///
/// The tree is built once at startup and never changes afterwards; only the
/// contents of the two `Graph` regions are replaced, by the chart bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Heading(String),
    Label(String),
    Dropdown {
        id: &'static str,
        options: Vec<String>,
        default: String,
    },
    RangeSlider {
        id: &'static str,
        min: f64,
        max: f64,
        step: f64,
        /// Fixed tick labels: (position, label).
        marks: Vec<(f64, String)>,
        initial: (f64, f64),
    },
    /// Placeholder for a chart output region.
    Graph { id: &'static str },
}

/// Build the dashboard layout.
///
/// The payload slider's initial selection spans the dataset's payload bounds;
/// everything else is fixed.
pub fn dashboard(dataset: &LaunchDataset) -> Vec<LayoutNode> {
    let mut options: Vec<String> = LAUNCH_SITES.iter().map(|s| s.to_string()).collect();
    options.push(ALL_SITES.to_string());

    vec![
        LayoutNode::Heading("Launch Records Dashboard".to_string()),
        LayoutNode::Dropdown {
            id: SITE_DROPDOWN,
            options,
            default: ALL_SITES.to_string(),
        },
        LayoutNode::Graph {
            id: SUCCESS_PIE_CHART,
        },
        LayoutNode::Label("Payload range (Kg):".to_string()),
        LayoutNode::RangeSlider {
            id: PAYLOAD_SLIDER,
            min: PAYLOAD_MIN,
            max: PAYLOAD_MAX,
            step: PAYLOAD_STEP,
            marks: vec![
                (0.0, "0".to_string()),
                (2_500.0, "2,500".to_string()),
                (5_000.0, "5,000".to_string()),
                (7_500.0, "7,500".to_string()),
                (10_000.0, "10,000".to_string()),
            ],
            initial: (dataset.min_payload, dataset.max_payload),
        },
        LayoutNode::Graph {
            id: SUCCESS_PAYLOAD_SCATTER_CHART,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "CCAFS LC-40".to_string(),
                payload_mass_kg: 500.0,
                outcome: 0,
                booster_category: "v1.0".to_string(),
            },
            LaunchRecord {
                site: "KSC LC-39A".to_string(),
                payload_mass_kg: 9600.0,
                outcome: 1,
                booster_category: "B4".to_string(),
            },
        ])
    }

    #[test]
    fn dropdown_lists_sites_then_sentinel_and_defaults_to_all() {
        let tree = dashboard(&dataset());
        let dropdown = tree
            .iter()
            .find_map(|n| match n {
                LayoutNode::Dropdown {
                    id: SITE_DROPDOWN,
                    options,
                    default,
                } => Some((options, default)),
                _ => None,
            })
            .unwrap();
        assert_eq!(dropdown.0.last().map(String::as_str), Some(ALL_SITES));
        assert_eq!(dropdown.0.len(), LAUNCH_SITES.len() + 1);
        assert_eq!(dropdown.1, ALL_SITES);
    }

    #[test]
    fn slider_initial_range_comes_from_dataset_bounds() {
        let tree = dashboard(&dataset());
        let slider = tree
            .iter()
            .find_map(|n| match n {
                LayoutNode::RangeSlider {
                    id: PAYLOAD_SLIDER,
                    min,
                    max,
                    step,
                    initial,
                    ..
                } => Some((*min, *max, *step, *initial)),
                _ => None,
            })
            .unwrap();
        assert_eq!(slider, (0.0, 10_000.0, 1_000.0, (500.0, 9600.0)));
    }

    #[test]
    fn both_graph_regions_are_present() {
        let tree = dashboard(&dataset());
        let graphs: Vec<&str> = tree
            .iter()
            .filter_map(|n| match n {
                LayoutNode::Graph { id } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(
            graphs,
            vec![SUCCESS_PIE_CHART, SUCCESS_PAYLOAD_SCATTER_CHART]
        );
    }
}
