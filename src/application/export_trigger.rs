// CSV export trigger - hands the export URL to the OS
use anyhow::Context;

/// Fire-and-forget navigation to the CSV export endpoint. The platform's
/// default browser performs the request and handles the resulting download;
/// no loading or error state is tracked here.
pub struct ExportTrigger {
    export_url: String,
}

impl ExportTrigger {
    pub fn new(export_url: String) -> Self {
        Self { export_url }
    }

    pub fn url(&self) -> &str {
        &self.export_url
    }

    pub fn open(&self) -> anyhow::Result<()> {
        tracing::debug!(url = %self.export_url, "opening export endpoint");
        open::that_detached(&self.export_url)
            .with_context(|| format!("could not open {}", self.export_url))
    }
}
