use serde::{Deserialize, Serialize};

/// Site identifier used when the page is opened without a `site` parameter.
pub const DEFAULT_SITE: &str = "JSBHQ";

/// Default workflow endpoint that answers site data requests.
pub const DEFAULT_SITE_DATA_URL: &str = "/workflows/site-data";

/// Default workflow endpoint that accepts completed inductions.
pub const DEFAULT_SUBMISSION_URL: &str = "/workflows/induction-submission";

/// Runtime configuration handed to the browser by `GET /api/config`.
///
/// The frontend falls back to [`ClientConfig::default`] when the endpoint is
/// unreachable, so a static deployment without the backend still works with
/// same-origin workflow paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Workflow URL receiving `SiteDataRequest` and returning site data.
    pub site_data_url: String,
    /// Workflow URL receiving the `FormSubmission` payload.
    pub submission_url: String,
    /// Terms document shown in the signing modal. `None` disables the
    /// document viewer entirely.
    #[serde(default)]
    pub terms_document_url: Option<String>,
    /// Site requested when the query string carries no `site` parameter.
    #[serde(default = "default_site")]
    pub default_site: String,
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            site_data_url: DEFAULT_SITE_DATA_URL.to_string(),
            submission_url: DEFAULT_SUBMISSION_URL.to_string(),
            terms_document_url: None,
            default_site: default_site(),
        }
    }
}

impl ClientConfig {
    /// Picks the site to request: the query value when it is non-blank,
    /// otherwise the configured default.
    pub fn resolve_site(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|site| !site.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.default_site.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_site_falls_back_to_default() {
        let config = ClientConfig::default();
        assert_eq!(config.resolve_site(None), "JSBHQ");
        assert_eq!(config.resolve_site(Some("   ")), "JSBHQ");
        assert_eq!(config.resolve_site(Some("NORTHYARD")), "NORTHYARD");
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"siteDataUrl":"https://a.example/site","submissionUrl":"https://a.example/submit"}"#,
        )
        .unwrap();
        assert_eq!(config.terms_document_url, None);
        assert_eq!(config.default_site, DEFAULT_SITE);
    }
}
