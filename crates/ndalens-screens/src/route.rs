//! Navigation targets of the review workflow.

use std::fmt;

/// One screen per workflow stage; document-scoped screens carry the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Upload,
    Analysis(String),
    Feedback(String),
    View(String),
    Training,
}

impl Route {
    /// URL path of this route in the original screen router.
    pub fn path(&self) -> String {
        match self {
            Route::Upload => "/".to_string(),
            Route::Analysis(id) => format!("/document/{id}/analysis"),
            Route::Feedback(id) => format!("/document/{id}/feedback"),
            Route::View(id) => format!("/document/{id}/view"),
            Route::Training => "/training".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
