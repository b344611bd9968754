//! Upload screen: one document in, navigation to analysis out.

use ndalens_client::Api;
use ndalens_core::UploadFile;
use tracing::error;

use crate::notify::Notifier;
use crate::route::Route;

/// Controller for the document upload screen.
///
/// Accepts exactly one `.docx` per submission; anything else is rejected
/// before a request is built. A second submission while one is in flight is
/// ignored (the drop zone is replaced by a spinner in the original UI).
pub struct UploadScreen<'a, A: Api> {
    api: &'a A,
    in_flight: bool,
}

impl<'a, A: Api> UploadScreen<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            in_flight: false,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight
    }

    /// Submit a selected file. Returns the analysis route for the new
    /// document on success; on any failure the screen stays put and the
    /// selection is dropped.
    pub async fn submit(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
        notifier: &dyn Notifier,
    ) -> Option<Route> {
        if !self.begin() {
            return None;
        }

        // Format filter runs before any network traffic.
        let file = match UploadFile::new(filename, bytes) {
            Ok(file) => file,
            Err(err) => {
                self.in_flight = false;
                notifier.error(&err.to_string());
                return None;
            }
        };

        let result = self.api.upload_document(&file).await;
        self.in_flight = false;
        match result {
            Ok(document) => {
                notifier.success("Document uploaded successfully");
                Some(Route::Analysis(document.id))
            }
            Err(err) => {
                error!(error = %err, "upload failed");
                notifier.error("Error uploading document");
                None
            }
        }
    }

    fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockApi, RecordingNotifier, fixtures, op};
    use ndalens_core::DocumentStatus;

    #[tokio::test]
    async fn success_navigates_to_analysis_for_returned_id() {
        let api = MockApi::new();
        *api.upload_response.lock().unwrap() =
            Some(fixtures::document("42", DocumentStatus::Uploaded));
        let notifier = RecordingNotifier::new();
        let mut screen = UploadScreen::new(&api);

        let route = screen.submit("nda.docx", vec![1, 2, 3], &notifier).await;
        assert_eq!(route, Some(Route::Analysis("42".into())));
        assert_eq!(api.count(op::UPLOAD), 1);
        assert_eq!(notifier.success_count(), 1);
        assert!(!screen.is_uploading());
    }

    #[tokio::test]
    async fn wrong_file_type_never_reaches_the_network() {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        let mut screen = UploadScreen::new(&api);

        let route = screen.submit("nda.pdf", vec![1], &notifier).await;
        assert_eq!(route, None);
        assert_eq!(api.total_calls(), 0);
        assert_eq!(notifier.error_count(), 1);
        // Rejection is not a terminal state; the next drop goes through.
        assert!(!screen.is_uploading());
    }

    #[tokio::test]
    async fn failure_notifies_and_stays() {
        let api = MockApi::new();
        api.fail(op::UPLOAD);
        let notifier = RecordingNotifier::new();
        let mut screen = UploadScreen::new(&api);

        let route = screen.submit("nda.docx", vec![1], &notifier).await;
        assert_eq!(route, None);
        assert_eq!(notifier.error_count(), 1);
        assert!(!screen.is_uploading());
    }

    #[tokio::test]
    async fn in_flight_submission_blocks_another() {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        let mut screen = UploadScreen::new(&api);

        assert!(screen.begin());
        // Second drop while the first is still pending.
        let route = screen.submit("nda.docx", vec![1], &notifier).await;
        assert_eq!(route, None);
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn failed_upload_allows_manual_retry() {
        let api = MockApi::new();
        api.fail(op::UPLOAD);
        let notifier = RecordingNotifier::new();
        let mut screen = UploadScreen::new(&api);

        assert_eq!(screen.submit("nda.docx", vec![1], &notifier).await, None);
        assert_eq!(api.count(op::UPLOAD), 1);
        // Retry is user-initiated; a fresh submit issues a fresh request.
        assert_eq!(screen.submit("nda.docx", vec![1], &notifier).await, None);
        assert_eq!(api.count(op::UPLOAD), 2);
    }
}
