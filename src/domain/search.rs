// src/domain/search.rs
use crate::domain::Comparable;
use std::fmt::Display;

pub const INVALID_PIN_ALERT: &str = "Please select a valid property PIN.";
pub const BLANK_ADDRESS_ERROR: &str = "Please enter a property address.";

/// Lifecycle of one address search:
///
/// ```text
/// Idle --submit--> Loading --resolve(Ok)--> Success
///                          \-resolve(Err)-> Error
/// ```
///
/// A settled state may be submitted again. Previous results and errors are
/// dropped on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Comparable>),
    Error(String),
}

impl SearchState {
    pub fn submit(self) -> SearchState {
        SearchState::Loading
    }

    /// Settle a pending search. Only `Loading` reacts; a settled state
    /// ignores late outcomes.
    pub fn resolve<E: Display>(self, outcome: Result<Vec<Comparable>, E>) -> SearchState {
        match self {
            SearchState::Loading => match outcome {
                Ok(comparables) => SearchState::Success(comparables),
                Err(e) => SearchState::Error(e.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Searching..."
        } else {
            "Find Comparables"
        }
    }

    pub fn comparables(&self) -> Option<&[Comparable]> {
        match self {
            SearchState::Success(c) => Some(c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Trimmed address, or `None` when there is nothing to search for.
pub fn normalize_address(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A PIN the user actually picked: present, non-empty, and not the
/// `-- Select a PIN --` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct PinSelection(String);

impl PinSelection {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let pin = raw?;
        if pin.is_empty() || pin.starts_with("--") {
            return None;
        }
        Some(Self(pin.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
