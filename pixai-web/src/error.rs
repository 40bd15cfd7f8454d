use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document body unavailable")]
    NoBody,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
