//! Error Types

use wasm_bindgen::JsValue;

pub type InviteResult<T> = Result<T, InviteError>;

#[derive(thiserror::Error, Debug)]
pub enum InviteError {
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid event date {value:?}: {source}")]
    InvalidEventDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("duplicate image id {0}")]
    DuplicateImageId(u32),

    #[error("image {0} has an empty path")]
    EmptyImagePath(u32),

    #[error("no browser window")]
    NoWindow,

    #[error("element #{0} not found")]
    ElementMissing(String),

    #[error("js error: {0}")]
    Js(String),
}

impl InviteError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::ElementMissing(id.into())
    }
}

impl From<JsValue> for InviteError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(InviteError::missing("gallery").to_string(), "element #gallery not found");
        assert_eq!(InviteError::DuplicateImageId(3).to_string(), "duplicate image id 3");
        assert!(InviteError::NoWindow.to_string().contains("window"));
    }
}
