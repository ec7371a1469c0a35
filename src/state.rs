//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkDirectory, RedirectResolver, VisitRecorder, VisitService};
use crate::domain::entities::NewVisit;
use crate::domain::store::{LinkStore, VisitStore};
use crate::utils::code_generator::ShortCodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkDirectory<dyn LinkStore>>,
    pub redirects: Arc<RedirectResolver<dyn LinkStore>>,
    pub visits: Arc<VisitService<dyn VisitStore>>,
    pub recorder: VisitRecorder,
    /// Public base for `short_url`; derived per request when unset.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_store: Arc<dyn LinkStore>,
        visit_store: Arc<dyn VisitStore>,
        generator: Arc<ShortCodeGenerator>,
        visit_sender: mpsc::Sender<NewVisit>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            links: Arc::new(LinkDirectory::new(Arc::clone(&link_store), generator)),
            redirects: Arc::new(RedirectResolver::new(link_store)),
            visits: Arc::new(VisitService::new(visit_store)),
            recorder: VisitRecorder::new(visit_sender),
            base_url,
        }
    }
}
