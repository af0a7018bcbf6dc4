use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("handoff to `{uri}` was rejected: {reason}")]
    HandoffRejected { uri: String, reason: String },
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("unknown legal document `{0}`")]
    UnknownLegalDocument(String),
}

impl SiteError {
    /// Turns a JS exception into a readable message.
    pub fn describe(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}
