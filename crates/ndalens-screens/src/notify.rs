//! User-facing notification seam (the toast equivalent).

/// Non-blocking user notifications emitted by the controllers.
///
/// Implementations decide delivery (toast, terminal line, test recorder);
/// controllers also log the underlying error via `tracing` before notifying.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
