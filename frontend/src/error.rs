//! Failures the page recovers from locally: they are logged through
//! `gloo_console` and, where the visitor needs to know, shown as a toast.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("page error: {0}")]
    Dom(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Dom(message)
    }
}
