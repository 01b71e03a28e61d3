/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  launches .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload-range predicates → record slices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
