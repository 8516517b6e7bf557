// Housing analysis domain model

/// One row of the housing-analysis dataset: a month-over-month price
/// increase for a geographic region.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub month: String,
    pub region: String,
    pub increase: f64,
}

impl DataPoint {
    pub fn new(month: String, region: String, increase: f64) -> Self {
        Self {
            month,
            region,
            increase,
        }
    }

    /// Increase percentage as shown in the table, always two decimals.
    pub fn increase_display(&self) -> String {
        format!("{:.2}", self.increase)
    }
}
