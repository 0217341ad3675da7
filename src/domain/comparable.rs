// src/domain/comparable.rs

/// A property the backend judged similar to the one being analyzed.
///
/// Both backends feed this one shape: the PIN lookup fills `pin` and
/// `year_built`, the address search fills `address`, `property_type` and
/// `age`. Views render whatever is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparable {
    pub pin: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub square_footage: f64,
    pub year_built: Option<f64>,
    pub age: Option<f64>,
    /// Backend-computed ranking value, nominally 0..1. Never validated here.
    pub confidence_score: f64,
}
