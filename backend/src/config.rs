//! Server settings read from the environment at startup.
//!
//! | Variable                  | Default                            |
//! |---------------------------|------------------------------------|
//! | `INDUCTION_HOST`          | `127.0.0.1`                        |
//! | `INDUCTION_PORT`          | `8080`                             |
//! | `INDUCTION_OPEN_BROWSER`  | enabled; `0`/`false`/`no` disables |
//! | `INDUCTION_SITE_DATA_URL` | `/workflows/site-data`             |
//! | `INDUCTION_SUBMISSION_URL`| `/workflows/induction-submission`  |
//! | `INDUCTION_TERMS_URL`     | unset (no document viewer)         |
//! | `INDUCTION_DEFAULT_SITE`  | `JSBHQ`                            |

use common::model::config::ClientConfig;
use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Handed to the page by `GET /api/config`.
    pub client: ClientConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let port = match value("INDUCTION_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid INDUCTION_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let open_browser = value("INDUCTION_OPEN_BROWSER")
            .map(|raw| !matches!(raw.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        let defaults = ClientConfig::default();
        let client = ClientConfig {
            site_data_url: value("INDUCTION_SITE_DATA_URL").unwrap_or(defaults.site_data_url),
            submission_url: value("INDUCTION_SUBMISSION_URL").unwrap_or(defaults.submission_url),
            terms_document_url: value("INDUCTION_TERMS_URL").or(defaults.terms_document_url),
            default_site: value("INDUCTION_DEFAULT_SITE").unwrap_or(defaults.default_site),
        };

        Self {
            host: value("INDUCTION_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
            client,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
