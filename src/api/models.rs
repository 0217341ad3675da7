use crate::domain::Comparable;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Wire shapes of the two backends. Each converts into the canonical
// `Comparable`; unknown fields (latitude, zoning_code, ...) are ignored.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertySummary {
    #[serde(deserialize_with = "pin_text")]
    pub property_identification_number: String,
}

/// Row shape of `GET /api/comparables/{pin}`.
#[derive(Debug, Deserialize)]
pub struct PinComparable {
    #[serde(deserialize_with = "pin_text")]
    pub property_identification_number: String,
    pub square_footage: f64,
    pub year_built: f64,
    pub confidence_score: f64,
}

/// Card shape of `POST /api/get_comparables`.
#[derive(Debug, Deserialize)]
pub struct AddressComparable {
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub size: f64,
    pub age: f64,
    #[serde(rename = "confidenceScore")]
    pub confidence_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct GetComparablesResponse {
    pub best_comparables: Vec<AddressComparable>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

impl From<PinComparable> for Comparable {
    fn from(row: PinComparable) -> Self {
        Comparable {
            pin: Some(row.property_identification_number),
            address: None,
            property_type: None,
            square_footage: row.square_footage,
            year_built: Some(row.year_built),
            age: None,
            confidence_score: row.confidence_score,
        }
    }
}

impl From<AddressComparable> for Comparable {
    fn from(card: AddressComparable) -> Self {
        Comparable {
            pin: None,
            address: Some(card.address),
            property_type: Some(card.property_type),
            square_footage: card.size,
            year_built: None,
            age: Some(card.age),
            confidence_score: card.confidence_score,
        }
    }
}

// Some county exports carry the PIN as a JSON number.
fn pin_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected PIN string, got {other}"
        ))),
    }
}
