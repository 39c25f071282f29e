use serde::{Deserialize, Serialize};

/// Request payload for the site data workflow.
/// Carries the site identifier taken from the `site` query parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteDataRequest {
    pub site: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_single_site_key() {
        let body = serde_json::to_string(&SiteDataRequest {
            site: "JSBHQ".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"site":"JSBHQ"}"#);
    }
}
