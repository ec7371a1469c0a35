//! Hand-off of visit events to the background worker.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{error, warn};

use crate::domain::entities::NewVisit;

/// Enqueues visits without waiting on the store.
///
/// Recording never fails from the caller's point of view: a full or closed
/// queue drops the visit with a log line.
#[derive(Clone)]
pub struct VisitRecorder {
    sender: mpsc::Sender<NewVisit>,
}

impl VisitRecorder {
    pub fn new(sender: mpsc::Sender<NewVisit>) -> Self {
        Self { sender }
    }

    pub fn record(&self, visit: NewVisit) {
        match self.sender.try_send(visit) {
            Ok(()) => {}
            Err(TrySendError::Full(visit)) => {
                warn!(link_id = visit.link_id, "visit queue full, visit dropped");
            }
            Err(TrySendError::Closed(visit)) => {
                error!(link_id = visit.link_id, "visit queue closed, visit dropped");
            }
        }
    }
}
