//! Fault kinds and interception sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Classified category of a failure
///
/// Kinds are what wrappers match on when deciding whether a fault is
/// intercepted or propagated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FaultKind {
    /// A mapping lookup found no entry for the requested key
    MissingKey,

    /// A sequence index fell outside the populated range
    IndexOutOfRange,

    /// An argument or override had the wrong shape
    TypeMismatch,

    /// Callback or receiver dispatch could not be completed
    Dispatch,

    /// Caller-defined category
    Custom(String),
}

impl FaultKind {
    /// Create a caller-defined kind
    #[inline]
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => write!(f, "missing key"),
            Self::IndexOutOfRange => write!(f, "index out of range"),
            Self::TypeMismatch => write!(f, "type mismatch"),
            Self::Dispatch => write!(f, "dispatch"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// Set of fault kinds a wrapper intercepts
///
/// Defaults to [`KindSet::All`], matching every kind. Anything outside the
/// set propagates to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindSet {
    /// Intercept every fault kind
    All,

    /// Intercept only the listed kinds
    Only(BTreeSet<FaultKind>),
}

impl KindSet {
    /// Set matching every kind
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::All
    }

    /// Empty set; nothing is intercepted
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    /// Set containing exactly the given kinds
    #[must_use]
    pub fn only(kinds: impl IntoIterator<Item = FaultKind>) -> Self {
        Self::Only(kinds.into_iter().collect())
    }

    /// Add a kind to the set
    ///
    /// No-op on [`KindSet::All`], which already contains everything.
    pub fn insert(&mut self, kind: FaultKind) {
        if let Self::Only(kinds) = self {
            kinds.insert(kind);
        }
    }

    /// Check whether a kind is intercepted
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: &FaultKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(kinds) => kinds.contains(kind),
        }
    }

    /// Check whether this set matches every kind
    #[inline]
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kind_display_uses_category_names() {
        assert_eq!(FaultKind::MissingKey.to_string(), "missing key");
        assert_eq!(FaultKind::IndexOutOfRange.to_string(), "index out of range");
        assert_eq!(FaultKind::custom("stale cache").to_string(), "stale cache");
    }

    #[test]
    fn default_set_matches_everything() {
        let kinds = KindSet::default();
        assert!(kinds.is_all());
        assert!(kinds.contains(&FaultKind::MissingKey));
        assert!(kinds.contains(&FaultKind::custom("anything")));
    }

    #[test]
    fn only_set_matches_listed_kinds() {
        let kinds = KindSet::only([FaultKind::MissingKey]);
        assert!(kinds.contains(&FaultKind::MissingKey));
        assert!(!kinds.contains(&FaultKind::IndexOutOfRange));
    }

    #[test]
    fn none_matches_nothing() {
        let kinds = KindSet::none();
        assert!(!kinds.contains(&FaultKind::MissingKey));
        assert!(!kinds.contains(&FaultKind::Dispatch));
    }

    #[test]
    fn insert_extends_only_sets() {
        let mut kinds = KindSet::none();
        kinds.insert(FaultKind::TypeMismatch);
        assert!(kinds.contains(&FaultKind::TypeMismatch));

        let mut all = KindSet::all();
        all.insert(FaultKind::TypeMismatch);
        assert!(all.is_all());
    }

    fn any_kind() -> impl Strategy<Value = FaultKind> {
        prop_oneof![
            Just(FaultKind::MissingKey),
            Just(FaultKind::IndexOutOfRange),
            Just(FaultKind::TypeMismatch),
            Just(FaultKind::Dispatch),
            "[a-z]{1,12}".prop_map(FaultKind::Custom),
        ]
    }

    proptest! {
        #[test]
        fn all_contains_any_kind(kind in any_kind()) {
            prop_assert!(KindSet::all().contains(&kind));
        }

        #[test]
        fn only_contains_exactly_its_members(kind in any_kind(), other in any_kind()) {
            let kinds = KindSet::only([kind.clone()]);
            prop_assert!(kinds.contains(&kind));
            prop_assert_eq!(kinds.contains(&other), other == kind);
        }
    }
}
