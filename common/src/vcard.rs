//! vCard export of the site contact.

use crate::model::site::ContactInfo;

pub const VCARD_MIME: &str = "text/vcard";

/// Name written when the site contact carries no name.
pub const FALLBACK_CONTACT_NAME: &str = "Site Contact";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VCardError {
    #[error("Phone number not available")]
    MissingPhone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    name: String,
    phone: String,
}

impl VCard {
    /// Builds a card for the contact. Fails when there is no phone number to
    /// dial, since a card without one is useless to the visitor.
    pub fn for_contact(contact: Option<&ContactInfo>) -> Result<Self, VCardError> {
        let name = contact
            .map(|c| c.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_CONTACT_NAME)
            .to_string();
        let phone = contact.map(ContactInfo::dialable_phone).unwrap_or_default();
        if phone.is_empty() {
            return Err(VCardError::MissingPhone);
        }
        Ok(Self { name, phone })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// vCard 3.0 text, lines separated by `\n`.
    pub fn to_vcf(&self) -> String {
        [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", self.name),
            format!("TEL;TYPE=CELL:{}", self.phone),
            "END:VCARD".to_string(),
        ]
        .join("\n")
    }

    /// `<name with underscores>_<site>.vcf`
    pub fn file_name(&self, site: &str) -> String {
        let name: String = self
            .name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("{}_{}.vcf", name, site)
    }
}
