// Panel state - loading/error/data owned by the fetch controller
use crate::domain::analysis::DataPoint;

/// The dashboard panel's state. There is exactly one writer (the fetch
/// controller); the chart and table views only read the accessors.
///
/// `error` and `data` are independent: a failed fetch records an error but
/// leaves the previously fetched dataset in place, so stale data stays
/// visible under the error banner.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    loading: bool,
    error: Option<String>,
    data: Vec<DataPoint>,
}

impl PanelState {
    /// Empty state: no data, no error, no fetch outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// A fetch has been issued: mark loading and clear any previous error.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A fetch resolved with a decoded dataset, stored verbatim.
    pub fn complete_success(&mut self, data: Vec<DataPoint>) {
        self.data = data;
        self.error = None;
        self.loading = false;
    }

    /// A fetch failed; the previous dataset is kept.
    pub fn complete_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
