//! Background persistence of visit events.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error};

use crate::domain::entities::NewVisit;
use crate::domain::store::{StoreError, VisitStore};

const MAX_RETRIES: usize = 3;

/// Drains the visit queue and persists each event.
///
/// Transient store failures are retried with jittered exponential backoff;
/// any final failure is logged and the event is dropped. Returns when every
/// sender has been dropped.
pub async fn run_visit_worker(mut rx: mpsc::Receiver<NewVisit>, store: Arc<dyn VisitStore>) {
    while let Some(new_visit) = rx.recv().await {
        let link_id = new_visit.link_id;

        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_secs(1))
            .map(jitter)
            .take(MAX_RETRIES);

        let result = RetryIf::start(
            strategy,
            || {
                let store = Arc::clone(&store);
                let new_visit = new_visit.clone();
                async move { store.insert_visit(new_visit).await }
            },
            StoreError::is_transient,
        )
        .await;

        match result {
            Ok(visit) => debug!(link_id, visit_id = visit.id, "visit recorded"),
            Err(e) => error!(link_id, error = %e, "failed to record visit"),
        }
    }

    debug!("visit queue closed, worker stopping");
}
