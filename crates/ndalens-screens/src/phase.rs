//! Per-request screen state machine.

/// Lifecycle of one screen-scoped request: `Idle → Loading → {Ready | Failed}`.
///
/// `Failed` is terminal until a new user action restarts the request. Mutation
/// success is not represented here because it immediately becomes navigation.
#[derive(Debug, Clone, Default)]
pub enum Phase<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Phase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed(_))
    }

    /// The loaded value, if this phase reached `Ready`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Phase::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if this phase reached `Failed`.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let phase: Phase<u32> = Phase::default();
        assert!(!phase.is_loading());
        assert!(phase.value().is_none());
    }

    #[test]
    fn ready_exposes_value() {
        let phase = Phase::Ready(7);
        assert!(phase.is_ready());
        assert_eq!(phase.value(), Some(&7));
        assert!(phase.failure().is_none());
    }

    #[test]
    fn failed_exposes_message() {
        let phase: Phase<u32> = Phase::Failed("server returned 500".into());
        assert!(phase.is_failed());
        assert_eq!(phase.failure(), Some("server returned 500"));
    }
}
