//! Business logic services for the application layer.

pub mod link_directory;
pub mod redirect_resolver;
pub mod visit_recorder;
pub mod visit_service;

pub use link_directory::LinkDirectory;
pub use redirect_resolver::RedirectResolver;
pub use visit_recorder::VisitRecorder;
pub use visit_service::VisitService;
