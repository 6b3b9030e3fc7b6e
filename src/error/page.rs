use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Element not found: #{0}")]
    ElementMissing(String),
    #[error("Storage Error: {0}")]
    Storage(String),
    #[error("Script Error: {0}")]
    Script(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PageError {
    fn from(error: serde_json::Error) -> Self {
        PageError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PageError::Script(format!("{:?}", value))
    }
}
