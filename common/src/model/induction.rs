//! Induction document fields.
//!
//! The static content fragment marks placeholders with `data-field="<key>"`.
//! Only the keys listed in [`InductionField`] are recognised; anything else in
//! the fragment or in the workflow payload is ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Attribute carrying the field key in the content fragment.
pub const FIELD_ATTRIBUTE: &str = "data-field";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InductionField {
    SiteName,
    SiteAddress,
    SiteManager,
    SiteManagerPhone,
    FirstAidOfficer,
    FirstAidKitLocation,
    EmergencyAssemblyPoint,
    NearestHospital,
    WorkingHours,
    PpeRequirements,
    SiteHazards,
    RestrictedAreas,
    Amenities,
    Parking,
}

impl InductionField {
    pub const ALL: [InductionField; 14] = [
        InductionField::SiteName,
        InductionField::SiteAddress,
        InductionField::SiteManager,
        InductionField::SiteManagerPhone,
        InductionField::FirstAidOfficer,
        InductionField::FirstAidKitLocation,
        InductionField::EmergencyAssemblyPoint,
        InductionField::NearestHospital,
        InductionField::WorkingHours,
        InductionField::PpeRequirements,
        InductionField::SiteHazards,
        InductionField::RestrictedAreas,
        InductionField::Amenities,
        InductionField::Parking,
    ];

    /// Key used both in the workflow payload and in `data-field` markers.
    pub fn key(self) -> &'static str {
        match self {
            InductionField::SiteName => "siteName",
            InductionField::SiteAddress => "siteAddress",
            InductionField::SiteManager => "siteManager",
            InductionField::SiteManagerPhone => "siteManagerPhone",
            InductionField::FirstAidOfficer => "firstAidOfficer",
            InductionField::FirstAidKitLocation => "firstAidKitLocation",
            InductionField::EmergencyAssemblyPoint => "emergencyAssemblyPoint",
            InductionField::NearestHospital => "nearestHospital",
            InductionField::WorkingHours => "workingHours",
            InductionField::PpeRequirements => "ppeRequirements",
            InductionField::SiteHazards => "siteHazards",
            InductionField::RestrictedAreas => "restrictedAreas",
            InductionField::Amenities => "amenities",
            InductionField::Parking => "parking",
        }
    }
}

impl fmt::Display for InductionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown induction field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for InductionField {
    type Err = UnknownField;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        InductionField::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| UnknownField(key.to_string()))
    }
}

/// Display values for the recognised induction fields.
///
/// Deserializes from any JSON object: string values are taken as-is,
/// numbers and booleans are rendered to text, and nulls, nested values and
/// unknown keys are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, serde_json::Value>",
    into = "BTreeMap<String, String>"
)]
pub struct InductionData {
    values: BTreeMap<InductionField, String>,
}

impl InductionData {
    pub fn get(&self, field: InductionField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Value for a raw `data-field` key, if the key is recognised and set.
    pub fn value_for_key(&self, key: &str) -> Option<&str> {
        key.parse::<InductionField>()
            .ok()
            .and_then(|field| self.get(field))
    }

    pub fn insert(&mut self, field: InductionField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for InductionData {
    fn from(raw: BTreeMap<String, serde_json::Value>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let field = key.parse::<InductionField>().ok()?;
                let text = match value {
                    serde_json::Value::String(text) => text,
                    serde_json::Value::Number(number) => number.to_string(),
                    serde_json::Value::Bool(flag) => flag.to_string(),
                    _ => return None,
                };
                Some((field, text))
            })
            .collect();
        Self { values }
    }
}

impl From<InductionData> for BTreeMap<String, String> {
    fn from(data: InductionData) -> Self {
        data.values
            .into_iter()
            .map(|(field, value)| (field.key().to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_round_trips_through_from_str() {
        for field in InductionField::ALL {
            assert_eq!(field.key().parse::<InductionField>(), Ok(field));
        }
        assert!("SiteName".parse::<InductionField>().is_err());
    }

    #[test]
    fn unknown_key_reports_itself() {
        let err = "bogus".parse::<InductionField>().unwrap_err();
        assert_eq!(err, UnknownField("bogus".to_string()));
        assert_eq!(err.to_string(), "unknown induction field `bogus`");
    }

    #[test]
    fn payload_keeps_only_recognised_scalar_values() {
        let data: InductionData = serde_json::from_str(
            r#"{
                "siteManager": "Ann Lee",
                "parking": 12,
                "amenities": true,
                "nearestHospital": null,
                "siteHazards": ["dust"],
                "favouriteColour": "blue"
            }"#,
        )
        .unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data.get(InductionField::SiteManager), Some("Ann Lee"));
        assert_eq!(data.get(InductionField::Parking), Some("12"));
        assert_eq!(data.get(InductionField::Amenities), Some("true"));
        assert_eq!(data.get(InductionField::NearestHospital), None);
        assert_eq!(data.value_for_key("favouriteColour"), None);
        assert_eq!(data.value_for_key("siteManager"), Some("Ann Lee"));
    }

    #[test]
    fn serializes_with_wire_keys() {
        let mut data = InductionData::default();
        data.insert(InductionField::WorkingHours, "7am - 5pm");
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"workingHours":"7am - 5pm"}"#
        );
    }
}
