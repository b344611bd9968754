pub mod confidence;
pub mod document;
pub mod feedback;
pub mod training;
pub mod upload;

pub use confidence::ConfidenceTier;
pub use document::{Analysis, ClauseSuggestion, CleanDocument, CleanMetadata, Document, DocumentStatus};
pub use feedback::{FeedbackDraft, FeedbackEntry, FeedbackSubmission};
pub use training::TrainingOutcome;
pub use upload::{UploadError, UploadFile, accepts_filename};
