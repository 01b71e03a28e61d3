// ---------------------------------------------------------------------------
// Chart specifications – plain data, decoupled from rendering
// ---------------------------------------------------------------------------

/// The output of a chart binding, rendered by `ui::plot`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}

/// One pie slice: a label and its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    /// Slices in label order. An empty list renders an empty chart.
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice weights.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.weight).sum()
    }
}

/// One scatter point: payload mass (x), outcome class (y), colour category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: u8,
    pub booster_category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}
