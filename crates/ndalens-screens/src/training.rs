//! Operator screen: retrain the suggestion model from redline files and
//! smoke-test inference with a single document.
//!
//! Train and test are fully independent: separate selections, separate
//! pending flags, and separate error slots. (The original UI funneled both
//! errors into one banner; that coupling looked unintended and is gone.)

use ndalens_client::Api;
use ndalens_core::UploadFile;
use tracing::error;

/// Controller for the model-training screen.
///
/// Results are ephemeral: dropping the controller on navigation discards
/// them, and nothing here touches the query cache.
pub struct TrainingScreen<'a, A: Api> {
    api: &'a A,
    training_files: Vec<UploadFile>,
    test_file: Option<UploadFile>,
    training_pending: bool,
    testing_pending: bool,
    pub training_status: Option<String>,
    pub train_error: Option<String>,
    pub test_results: Option<serde_json::Value>,
    pub test_error: Option<String>,
}

impl<'a, A: Api> TrainingScreen<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            training_files: Vec::new(),
            test_file: None,
            training_pending: false,
            testing_pending: false,
            training_status: None,
            train_error: None,
            test_results: None,
            test_error: None,
        }
    }

    /// Replace the multi-file training selection.
    pub fn select_training_files(&mut self, files: Vec<UploadFile>) {
        self.training_files = files;
    }

    /// Replace the single test-file selection.
    pub fn select_test_file(&mut self, file: UploadFile) {
        self.test_file = Some(file);
    }

    pub fn training_file_count(&self) -> usize {
        self.training_files.len()
    }

    pub fn is_training(&self) -> bool {
        self.training_pending
    }

    pub fn is_testing(&self) -> bool {
        self.testing_pending
    }

    /// The train button: disabled until at least one file is selected.
    pub fn can_train(&self) -> bool {
        !self.training_files.is_empty() && !self.training_pending
    }

    pub fn can_test(&self) -> bool {
        self.test_file.is_some() && !self.testing_pending
    }

    /// Submit every selected redline file in one request.
    pub async fn train(&mut self) {
        if !self.begin_train() {
            return;
        }
        let result = self.api.train_from_files(&self.training_files).await;
        self.training_pending = false;
        match result {
            Ok(outcome) => self.training_status = Some(outcome.summary()),
            Err(err) => {
                error!(error = %err, "training failed");
                self.train_error = Some("Training failed".to_string());
            }
        }
    }

    /// Run one inference against the current model, keeping the raw payload.
    pub async fn test(&mut self) {
        if !self.begin_test() {
            return;
        }
        // can_test guarantees the selection exists.
        let Some(file) = self.test_file.clone() else {
            self.testing_pending = false;
            return;
        };
        let result = self.api.test_inference(&file).await;
        self.testing_pending = false;
        match result {
            Ok(payload) => self.test_results = Some(payload),
            Err(err) => {
                error!(error = %err, "test inference failed");
                self.test_error = Some("Testing failed".to_string());
            }
        }
    }

    fn begin_train(&mut self) -> bool {
        if !self.can_train() {
            return false;
        }
        self.training_pending = true;
        self.train_error = None;
        self.training_status = None;
        true
    }

    fn begin_test(&mut self) -> bool {
        if !self.can_test() {
            return false;
        }
        self.testing_pending = true;
        self.test_error = None;
        self.test_results = None;
        true
    }
}
