//! Site metadata returned by the site data workflow and the derived values
//! the page header displays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::format_display_date;
use crate::model::induction::InductionData;

/// Separator between name and phone in the workflow's `SiteContact` value.
const CONTACT_SEPARATOR: &str = " - ";

/// Site record as delivered by the workflow.
///
/// The workflow emits PascalCase keys; camelCase is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Address", alias = "address", default)]
    pub address: Option<String>,
    /// Contact in the form `"Name - Phone"`.
    #[serde(rename = "SiteContact", alias = "siteContact", default)]
    pub site_contact: Option<String>,
}

impl SiteInfo {
    /// Parses `site_contact` once into a [`ContactInfo`].
    pub fn contact(&self) -> Option<ContactInfo> {
        self.site_contact
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(ContactInfo::parse)
    }
}

/// Site contact split into its display name and phone number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
}

impl ContactInfo {
    /// Splits `"Name - Phone"`. Without a separator the whole value is the
    /// name and the phone stays empty.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(CONTACT_SEPARATOR);
        let name = parts
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(raw)
            .to_string();
        let phone = parts.next().map(|phone| phone.trim().to_string()).unwrap_or_default();
        Self { name, phone }
    }

    /// Phone number with every whitespace character removed.
    pub fn dialable_phone(&self) -> String {
        self.phone.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Result of the site data request: both halves or neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteData {
    pub site_info: Option<SiteInfo>,
    pub induction_data: Option<InductionData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteDataResponse {
    site_info: SiteInfo,
    induction_data: InductionData,
}

impl SiteData {
    /// Degraded value used after any transport or parse failure.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Decodes a workflow response body. A body missing either
    /// `siteInfo` or `inductionData` is rejected as a whole.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let response: SiteDataResponse = serde_json::from_str(body)?;
        Ok(Self {
            site_info: Some(response.site_info),
            induction_data: Some(response.induction_data),
        })
    }

    pub fn is_available(&self) -> bool {
        self.site_info.is_some() && self.induction_data.is_some()
    }
}

/// Text rendered in the page header. Absent values stay `None` and are
/// skipped by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDisplay {
    pub site_name: Option<String>,
    pub address: Option<String>,
    /// Today in the `"Tuesday, 22nd of March"` form.
    pub date: String,
    pub contact_name: Option<String>,
}

impl SiteDisplay {
    pub fn new(site: Option<&SiteInfo>, today: NaiveDate) -> Self {
        Self {
            site_name: site.map(|s| s.name.clone()),
            address: site
                .and_then(|s| s.address.clone())
                .filter(|address| !address.is_empty()),
            date: format_display_date(today),
            contact_name: site.and_then(SiteInfo::contact).map(|c| c.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_22() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 22).unwrap()
    }

    #[test]
    fn contact_splits_name_and_phone() {
        let contact = ContactInfo::parse("John Smith - 0412 345 678 ");
        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.phone, "0412 345 678");
        assert_eq!(contact.dialable_phone(), "0412345678");
    }

    #[test]
    fn contact_without_separator_is_name_only() {
        let contact = ContactInfo::parse("Reception");
        assert_eq!(contact.name, "Reception");
        assert!(contact.phone.is_empty());
    }

    #[test]
    fn contact_with_leading_separator_keeps_raw_name() {
        let contact = ContactInfo::parse(" - 0400 000 000");
        assert_eq!(contact.name, " - 0400 000 000");
        assert_eq!(contact.phone, "0400 000 000");
    }

    #[test]
    fn site_data_requires_both_halves() {
        let full = r#"{"siteInfo":{"Name":"Depot"},"inductionData":{"siteManager":"Ann"}}"#;
        let data = SiteData::from_json(full).unwrap();
        assert!(data.is_available());
        assert_eq!(data.site_info.unwrap().name, "Depot");

        assert!(SiteData::from_json(r#"{"siteInfo":{"Name":"Depot"}}"#).is_err());
        assert!(SiteData::from_json(r#"{"inductionData":{}}"#).is_err());
        assert!(SiteData::from_json(r#"{"siteInfo":null,"inductionData":{}}"#).is_err());
        assert!(SiteData::from_json("<html>").is_err());
        assert!(!SiteData::unavailable().is_available());
    }

    #[test]
    fn site_info_accepts_camel_case_keys() {
        let info: SiteInfo = serde_json::from_str(
            r#"{"name":"Depot","address":"1 Quay St","siteContact":"Jo - 0400"}"#,
        )
        .unwrap();
        assert_eq!(info.address.as_deref(), Some("1 Quay St"));
        assert_eq!(info.contact().unwrap().phone, "0400");
    }

    #[test]
    fn display_without_site_only_has_date() {
        let display = SiteDisplay::new(None, march_22());
        assert_eq!(display.site_name, None);
        assert_eq!(display.address, None);
        assert_eq!(display.contact_name, None);
        assert_eq!(display.date, "Tuesday, 22nd of March");
    }

    #[test]
    fn display_skips_absent_fields() {
        let site = SiteInfo {
            name: "Depot".to_string(),
            address: None,
            site_contact: Some("  ".to_string()),
        };
        let display = SiteDisplay::new(Some(&site), march_22());
        assert_eq!(display.site_name.as_deref(), Some("Depot"));
        assert_eq!(display.address, None);
        assert_eq!(display.contact_name, None);
    }

    #[test]
    fn display_shows_contact_name_only() {
        let site = SiteInfo {
            name: "Depot".to_string(),
            address: Some("1 Quay St".to_string()),
            site_contact: Some("John Smith - 0412 345 678".to_string()),
        };
        let display = SiteDisplay::new(Some(&site), march_22());
        assert_eq!(display.contact_name.as_deref(), Some("John Smith"));
        assert_eq!(display.address.as_deref(), Some("1 Quay St"));
    }
}
