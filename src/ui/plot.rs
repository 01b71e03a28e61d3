use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::chart::{ChartSpec, PieSpec, ScatterSpec};
use crate::color::{generate_palette, ColorMap};

// ---------------------------------------------------------------------------
// Chart-spec rendering
// ---------------------------------------------------------------------------

/// Render a chart spec into its output region.
pub fn chart(ui: &mut Ui, region_id: &str, spec: &ChartSpec, color_map: &ColorMap) {
    match spec {
        ChartSpec::Pie(pie) => pie_chart(ui, region_id, pie),
        ChartSpec::Scatter(scatter) => scatter_chart(ui, region_id, scatter, color_map),
    }
}

// ---------------------------------------------------------------------------
// Pie chart – filled polygon sectors on a unit circle
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, region_id: &str, spec: &PieSpec) {
    ui.label(RichText::new(&spec.title).strong());

    let total = spec.total();

    Plot::new(region_id)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .height(280.0)
        .show(ui, |plot_ui| {
            // Zero matching rows: an empty chart, by design.
            if total <= 0.0 {
                return;
            }
            let colors = generate_palette(spec.slices.len());
            let mut start = 0.0;
            for (slice, color) in spec.slices.iter().zip(colors) {
                let fraction = slice.weight / total;
                if fraction <= 0.0 {
                    continue;
                }
                let sector = sector_points(start, start + fraction);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(sector))
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, color)),
                );
                start += fraction;
            }
        });
}

/// Vertices of a unit-circle sector spanning `[start, end]` as fractions of
/// the full circle, clockwise from twelve o'clock.
fn sector_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = ((end - start) * 64.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let fraction = start + (end - start) * (i as f64 / steps as f64);
        let angle = TAU / 4.0 - TAU * fraction;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Scatter chart – one point series per booster category
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, region_id: &str, spec: &ScatterSpec, color_map: &ColorMap) {
    ui.label(RichText::new(&spec.title).strong());

    // Group points per category so each gets its own legend entry.
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &spec.points {
        series
            .entry(point.booster_category.as_str())
            .or_default()
            .push([point.payload_mass_kg, f64::from(point.outcome)]);
    }

    Plot::new(region_id)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .height(300.0)
        .show(ui, |plot_ui| {
            for (category, points) in series {
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(color_map.color_for(category))
                        .radius(3.5),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_covers_requested_arc() {
        let points = sector_points(0.0, 0.25);
        // Center plus at least the two arc endpoints.
        assert!(points.len() >= 3);
        assert_eq!(points[0], [0.0, 0.0]);
        // Quarter turn clockwise from twelve o'clock: starts at (0, 1),
        // ends at (1, 0).
        let first = points[1];
        let last = points[points.len() - 1];
        assert!((first[0] - 0.0).abs() < 1e-9 && (first[1] - 1.0).abs() < 1e-9);
        assert!((last[0] - 1.0).abs() < 1e-9 && (last[1] - 0.0).abs() < 1e-9);
    }

    #[test]
    fn sector_vertices_stay_on_unit_circle() {
        let points = sector_points(0.3, 0.9);
        for p in &points[1..] {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }
}
