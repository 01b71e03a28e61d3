use std::collections::BTreeMap;

use crate::bindings::{ControlValues, BINDINGS};
use crate::chart::ChartSpec;
use crate::color::ColorMap;
use crate::data::model::LaunchDataset;
use crate::layout::{self, LayoutNode};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, read-only for the process lifetime.
    pub dataset: LaunchDataset,

    /// Static layout tree, built once at startup.
    pub layout: Vec<LayoutNode>,

    /// Current values of the input controls.
    pub controls: ControlValues,

    /// Computed chart specs, keyed by output region id.
    charts: BTreeMap<&'static str, ChartSpec>,

    /// Booster-category colours shared by both charts.
    pub color_map: ColorMap,
}

impl AppState {
    /// Build the state for a loaded dataset: construct the layout, seed the
    /// control values from its defaults, and run every binding once.
    pub fn new(dataset: LaunchDataset) -> Self {
        let layout = layout::dashboard(&dataset);
        let controls = initial_controls(&layout);
        let color_map = ColorMap::new(&dataset.booster_categories());

        let mut state = AppState {
            dataset,
            layout,
            controls,
            charts: BTreeMap::new(),
            color_map,
        };
        for binding in &BINDINGS {
            state
                .charts
                .insert(binding.output, (binding.compute)(&state.dataset, &state.controls));
        }
        state
    }

    /// Dispatch a control-value change: re-run exactly the bindings
    /// subscribed to `control_id` and replace their output charts.
    pub fn control_changed(&mut self, control_id: &str) {
        for binding in BINDINGS.iter().filter(|b| b.inputs.contains(&control_id)) {
            let spec = (binding.compute)(&self.dataset, &self.controls);
            self.charts.insert(binding.output, spec);
        }
    }

    /// The current chart spec for an output region, if any binding feeds it.
    pub fn chart(&self, output_id: &str) -> Option<&ChartSpec> {
        self.charts.get(output_id)
    }
}

/// Read the initial control values out of the layout tree's defaults.
fn initial_controls(layout: &[LayoutNode]) -> ControlValues {
    let mut site = layout::ALL_SITES.to_string();
    let mut payload_range = (layout::PAYLOAD_MIN, layout::PAYLOAD_MAX);

    for node in layout {
        match node {
            LayoutNode::Dropdown { id, default, .. } if *id == layout::SITE_DROPDOWN => {
                site = default.clone();
            }
            LayoutNode::RangeSlider { id, initial, .. } if *id == layout::PAYLOAD_SLIDER => {
                payload_range = *initial;
            }
            _ => {}
        }
    }

    ControlValues {
        site,
        payload_range,
    }
}
