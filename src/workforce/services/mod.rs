pub mod activity_series;
pub mod gap_analysis;

pub use activity_series::{ActivitySeries, DayActivity};
pub use gap_analysis::GapAnalysis;
