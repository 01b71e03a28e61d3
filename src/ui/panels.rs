use eframe::egui::{self, Slider, Ui};

use crate::layout::LayoutNode;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Layout-tree rendering
// ---------------------------------------------------------------------------

/// Walk the static layout tree and render each node with egui widgets.
/// Widget interaction updates the control values and dispatches the change
/// to the subscribed bindings.
pub fn render_layout(ui: &mut Ui, state: &mut AppState) {
    // Clone the tree so node data can be read while mutating state below.
    let layout = state.layout.clone();

    for node in &layout {
        match node {
            LayoutNode::Heading(text) => {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.heading(text.as_str());
                });
                ui.add_space(8.0);
            }
            LayoutNode::Label(text) => {
                ui.label(text.as_str());
            }
            LayoutNode::Dropdown { id, options, .. } => {
                dropdown(ui, state, id, options);
            }
            LayoutNode::RangeSlider {
                id,
                min,
                max,
                step,
                marks,
                ..
            } => {
                range_slider(ui, state, id, *min, *max, *step, marks);
            }
            LayoutNode::Graph { id } => {
                ui.add_space(8.0);
                if let Some(spec) = state.chart(id) {
                    plot::chart(ui, id, spec, &state.color_map);
                }
                ui.add_space(8.0);
            }
        }
    }
}

fn dropdown(ui: &mut Ui, state: &mut AppState, id: &str, options: &[String]) {
    let current = state.controls.site.clone();
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.as_str())
        .width(220.0)
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui
                    .selectable_label(current == *option, option.as_str())
                    .clicked()
                {
                    state.controls.site = option.clone();
                    state.control_changed(id);
                }
            }
        });
}

/// Dual-handle range control: paired min/max sliders whose ranges clamp
/// against each other so `low <= high` always holds.
fn range_slider(
    ui: &mut Ui,
    state: &mut AppState,
    id: &str,
    min: f64,
    max: f64,
    step: f64,
    marks: &[(f64, String)],
) {
    let (mut low, mut high) = state.controls.payload_range;
    let mut changed = false;

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Min");
        changed |= ui
            .add(Slider::new(&mut low, min..=high).step_by(step))
            .changed();
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Max");
        changed |= ui
            .add(Slider::new(&mut high, low..=max).step_by(step))
            .changed();
    });

    // Fixed tick labels along the control's full extent.
    ui.columns(marks.len(), |columns: &mut [Ui]| {
        for (column, (_, label)) in columns.iter_mut().zip(marks) {
            column.vertical_centered(|ui: &mut Ui| {
                ui.small(label.as_str());
            });
        }
    });

    if changed {
        state.controls.payload_range = (low, high);
        state.control_changed(id);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the slim status bar above the dashboard.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} launches loaded", state.dataset.len()));
        ui.separator();
        let (low, high) = state.controls.payload_range;
        ui.label(format!(
            "site: {}  |  payload: {low:.0} – {high:.0} kg",
            state.controls.site
        ));
    });
}
