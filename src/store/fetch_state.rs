//! Fetch lifecycle state.

use crate::models::{Identity, MealDetail};

/// Render state of one screen's fetch lifecycle.
///
/// Exactly one variant is active at a time and transitions happen only
/// through a store's intent handler. `Idle` is the only state before the
/// first load.
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }

    /// Borrow the loaded payload, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    /// Borrow the error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Identity-based payload comparison backing [`FetchState`] equality.
///
/// Loaded states compare by entity id only: two payloads with the same ids
/// but different field values compare equal.
pub trait IdentityEq {
    fn identity_eq(&self, other: &Self) -> bool;
}

impl<T: Identity> IdentityEq for Vec<T> {
    fn identity_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.identity() == b.identity())
    }
}

impl IdentityEq for MealDetail {
    fn identity_eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: IdentityEq> PartialEq for FetchState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FetchState::Idle, FetchState::Idle) => true,
            (FetchState::Loading, FetchState::Loading) => true,
            (FetchState::Loaded(a), FetchState::Loaded(b)) => a.identity_eq(b),
            (FetchState::Error(a), FetchState::Error(b)) => a == b,
            _ => false,
        }
    }
}
