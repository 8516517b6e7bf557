// Fetch controller - Use case for retrieving the dataset and owning panel state
use crate::application::analysis_repository::{AnalysisRepository, FetchError};
use crate::domain::analysis::DataPoint;
use crate::domain::panel_state::PanelState;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one fetch, tagged with the sequence number it was issued under.
#[derive(Debug)]
struct FetchOutcome {
    seq: u64,
    result: Result<Vec<DataPoint>, FetchError>,
}

/// Orchestrates retrieval of the analysis dataset and owns the panel's
/// loading/error/data state.
///
/// `refresh()` spawns the fetch on the runtime and returns immediately; the
/// outcome comes back over an internal channel and is applied by
/// `poll_outcomes()` on the panel loop, so the views never observe a
/// half-updated state.
///
/// Each fetch carries a monotonically increasing sequence number. An outcome
/// whose number is not the latest issued is discarded, so overlapping
/// refreshes resolve last-requested-wins instead of last-resolved-wins.
pub struct FetchController {
    repository: Arc<dyn AnalysisRepository>,
    state: PanelState,
    latest_seq: u64,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl FetchController {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            repository,
            state: PanelState::new(),
            latest_seq: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Issue a fetch. No preconditions: calling again while a fetch is
    /// outstanding supersedes it via the sequence number.
    pub fn refresh(&mut self) {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.state.begin_fetch();

        let repository = self.repository.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = repository.fetch_analysis().await;
            // Receiver only drops when the controller does; nothing to do then.
            let _ = tx.send(FetchOutcome { seq, result });
        });
    }

    /// Drain completed fetches. Returns true if the panel state changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply_outcome(outcome);
        }
        changed
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "discarding superseded fetch outcome"
            );
            return false;
        }

        match outcome.result {
            Ok(data) => {
                tracing::debug!(rows = data.len(), "analysis fetch succeeded");
                self.state.complete_success(data);
            }
            Err(error) => {
                tracing::warn!("analysis fetch failed: {error}");
                self.state.complete_failure(error.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;
    use tokio::sync::Mutex;

    struct ScriptedRepository {
        responses: Mutex<VecDeque<Result<Vec<DataPoint>, FetchError>>>,
    }

    impl ScriptedRepository {
        fn new(responses: Vec<Result<Vec<DataPoint>, FetchError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl AnalysisRepository for ScriptedRepository {
        async fn fetch_analysis(&self) -> Result<Vec<DataPoint>, FetchError> {
            self.responses
                .lock()
                .await
                .pop_front()
                .expect("no scripted response left")
        }
    }

    fn sample_point() -> DataPoint {
        DataPoint::new("Jan".to_string(), "North".to_string(), 5.5)
    }

    /// Poll until the spawned fetch resolves and its outcome is applied.
    async fn settle(controller: &mut FetchController) {
        for _ in 0..200 {
            if controller.poll_outcomes() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("fetch outcome never arrived");
    }

    #[tokio::test]
    async fn test_refresh_success_updates_state() {
        let repository = ScriptedRepository::new(vec![Ok(vec![sample_point()])]);
        let mut controller = FetchController::new(repository);

        controller.refresh();
        assert!(controller.state().is_loading());

        settle(&mut controller).await;

        assert!(!controller.state().is_loading());
        assert!(controller.state().error().is_none());
        assert_eq!(controller.state().data(), &[sample_point()]);
    }

    #[tokio::test]
    async fn test_refresh_failure_sets_error_and_keeps_data() {
        let repository = ScriptedRepository::new(vec![
            Ok(vec![sample_point()]),
            Err(FetchError::Status(500)),
        ]);
        let mut controller = FetchController::new(repository);

        controller.refresh();
        settle(&mut controller).await;

        controller.refresh();
        settle(&mut controller).await;

        let state = controller.state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("analysis service returned HTTP 500"));
        assert_eq!(state.data(), &[sample_point()]);
    }

    #[tokio::test]
    async fn test_sequential_identical_refreshes_are_idempotent() {
        let repository = ScriptedRepository::new(vec![
            Ok(vec![sample_point()]),
            Ok(vec![sample_point()]),
        ]);
        let mut controller = FetchController::new(repository);

        controller.refresh();
        settle(&mut controller).await;
        let after_first = controller.state().clone();

        controller.refresh();
        settle(&mut controller).await;
        let after_second = controller.state().clone();

        assert_eq!(after_first.data(), after_second.data());
        assert_eq!(after_first.error(), after_second.error());
        assert_eq!(after_first.is_loading(), after_second.is_loading());
    }

    #[tokio::test]
    async fn test_stale_outcome_is_discarded() {
        let repository = ScriptedRepository::new(vec![
            Ok(vec![sample_point()]),
            Ok(vec![sample_point()]),
        ]);
        let mut controller = FetchController::new(repository);

        // Two overlapping refreshes; only seq 2 outcomes may apply.
        controller.refresh();
        controller.refresh();

        let newer = DataPoint::new("Feb".to_string(), "South".to_string(), 1.0);
        let applied = controller.apply_outcome(FetchOutcome {
            seq: 2,
            result: Ok(vec![newer.clone()]),
        });
        assert!(applied);

        let stale = controller.apply_outcome(FetchOutcome {
            seq: 1,
            result: Ok(vec![sample_point()]),
        });
        assert!(!stale);

        assert_eq!(controller.state().data(), &[newer]);
    }

    #[tokio::test]
    async fn test_stale_error_does_not_clobber_newer_success() {
        let repository = ScriptedRepository::new(vec![Ok(Vec::new()), Ok(Vec::new())]);
        let mut controller = FetchController::new(repository);

        controller.refresh();
        controller.refresh();

        controller.apply_outcome(FetchOutcome {
            seq: 2,
            result: Ok(vec![sample_point()]),
        });
        controller.apply_outcome(FetchOutcome {
            seq: 1,
            result: Err(FetchError::Transport("connection reset".to_string())),
        });

        assert!(controller.state().error().is_none());
        assert_eq!(controller.state().data(), &[sample_point()]);
    }
}
