//! The fault type produced by wrapped operations and callbacks

use crate::kind::{FaultKind, KindSet};
use serde::{Deserialize, Serialize};

/// A classified failure
///
/// Operations and recovery callbacks report failures as faults; the wrapper
/// matches the kind against its configured [`KindSet`] to decide between
/// local recovery and propagation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    /// Create a fault with an explicit kind
    #[inline]
    #[must_use]
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A mapping lookup found no entry for `key`
    #[must_use]
    pub fn missing_key(key: impl AsRef<str>) -> Self {
        Self::new(
            FaultKind::MissingKey,
            format!("no entry for key `{}`", key.as_ref()),
        )
    }

    /// A sequence index fell outside the populated range
    #[must_use]
    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::new(
            FaultKind::IndexOutOfRange,
            format!("index {index} outside sequence of length {len}"),
        )
    }

    /// An argument or override had the wrong shape
    #[must_use]
    pub fn type_mismatch(expected: &str, got: &str) -> Self {
        Self::new(
            FaultKind::TypeMismatch,
            format!("expected {expected}, got {got}"),
        )
    }

    /// Callback or receiver dispatch could not be completed
    #[must_use]
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Dispatch, message)
    }

    /// The fault's classified kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &FaultKind {
        &self.kind
    }

    /// Human-readable failure description
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether this fault would be intercepted by `kinds`
    #[inline]
    #[must_use]
    pub fn matches(&self, kinds: &KindSet) -> bool {
        kinds.contains(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let fault = Fault::missing_key("user_id");
        assert_eq!(fault.to_string(), "missing key: no entry for key `user_id`");
    }

    #[test]
    fn constructors_set_kinds() {
        assert_eq!(Fault::missing_key("k").kind(), &FaultKind::MissingKey);
        assert_eq!(
            Fault::index_out_of_range(7, 3).kind(),
            &FaultKind::IndexOutOfRange
        );
        assert_eq!(
            Fault::type_mismatch("string", "number").kind(),
            &FaultKind::TypeMismatch
        );
        assert_eq!(Fault::dispatch("no handler").kind(), &FaultKind::Dispatch);
    }

    #[test]
    fn matches_consults_kind_set() {
        let fault = Fault::index_out_of_range(5, 2);
        assert!(fault.matches(&KindSet::all()));
        assert!(fault.matches(&KindSet::only([FaultKind::IndexOutOfRange])));
        assert!(!fault.matches(&KindSet::only([FaultKind::MissingKey])));
    }
}
