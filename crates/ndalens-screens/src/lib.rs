//! Screen controllers and client-side state for the NDA review workflow.
//!
//! One controller per workflow stage, each owning its fetched data and form
//! state exclusively. The only shared state is the response cache keyed by
//! resource kind plus document id. Controllers are UI-agnostic: a terminal
//! front end binds them to prompts, a graphical one would bind them to
//! widgets, and tests bind them to a scripted backend.

pub mod analysis;
pub mod cache;
pub mod feedback;
pub mod notify;
pub mod phase;
pub mod route;
pub mod scope;
pub mod training;
pub mod upload;
pub mod view;

#[cfg(test)]
pub(crate) mod mock;

pub use analysis::AnalysisScreen;
pub use cache::{QueryCache, ResourceKind};
pub use feedback::FeedbackScreen;
pub use notify::Notifier;
pub use phase::Phase;
pub use route::Route;
pub use scope::{RequestScope, ScopeToken};
pub use training::TrainingScreen;
pub use upload::UploadScreen;
pub use view::{DownloadedFile, ViewScreen};
