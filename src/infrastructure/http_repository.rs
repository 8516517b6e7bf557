// HTTP repository implementation for the analysis service
use crate::application::analysis_repository::{AnalysisRepository, FetchError};
use crate::domain::analysis::DataPoint;
use async_trait::async_trait;
use serde::Deserialize;

/// Fetches the precomputed dataset from `<base_url>/api/analysis`.
#[derive(Debug, Clone)]
pub struct HttpAnalysisRepository {
    base_url: String,
    client: reqwest::Client,
}

/// Wire shape of one record as served by the analysis endpoint.
#[derive(Debug, Deserialize)]
struct AnalysisRecord {
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Increase")]
    increase: f64,
}

impl AnalysisRecord {
    fn into_point(self) -> DataPoint {
        DataPoint::new(self.month, self.region, self.increase)
    }
}

impl HttpAnalysisRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn analysis_url(&self) -> String {
        format!("{}/api/analysis", self.base_url)
    }
}

#[async_trait]
impl AnalysisRepository for HttpAnalysisRepository {
    async fn fetch_analysis(&self) -> Result<Vec<DataPoint>, FetchError> {
        let url = self.analysis_url();

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let records = response
            .json::<Vec<AnalysisRecord>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(records.into_iter().map(AnalysisRecord::into_point).collect())
    }
}
