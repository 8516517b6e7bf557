// Repository trait for the remote analysis service
use crate::domain::analysis::DataPoint;
use async_trait::async_trait;
use thiserror::Error;

/// Why a fetch of the analysis dataset failed. All variants collapse into a
/// single user-visible message at the fetch-controller boundary; none of
/// them is fatal, a manual refresh retries from scratch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response received from the analysis service.
    #[error("failed to reach analysis service: {0}")]
    Transport(String),

    /// A response arrived with a non-2xx status.
    #[error("analysis service returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of analysis records.
    #[error("could not decode analysis response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Fetch the precomputed analysis dataset, in service order.
    async fn fetch_analysis(&self) -> Result<Vec<DataPoint>, FetchError>;
}
