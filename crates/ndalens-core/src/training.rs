//! Results of the operator training/testing actions.

use serde::{Deserialize, Serialize};

/// Response to a train-from-files request.
///
/// The backend returns more diagnostics than this; only the sample count is
/// surfaced to the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub training_samples: u64,
}

impl TrainingOutcome {
    /// Operator-facing status line.
    pub fn summary(&self) -> String {
        format!(
            "Training completed successfully: trained on {} samples",
            self.training_samples
        )
    }
}
