use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("required element `{selector}` is missing")]
    MissingElement { selector: String },

    #[error("element `{selector}` is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },

    #[error("no window or document available")]
    NoDocument,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("post catalog is malformed: {0}")]
    Catalog(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
