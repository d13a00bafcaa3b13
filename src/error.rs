use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can stop the page from coming up.
///
/// None of these are recoverable: the page either has its required
/// elements and content or it is broken, so callers hand them to
/// [`fail_fast`] instead of rendering a half-working page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("required element `{0}` is missing")]
    MissingElement(String),

    #[error("site content was not provided to the page")]
    NoContent,

    #[error("slider needs at least one slide")]
    EmptySlider,

    #[error("operations panel needs at least one tab")]
    EmptyTabs,

    #[error("failed to parse site content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl PageError {
    pub fn js(context: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| PageError::Js {
            context,
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

/// Logs the error and throws it into the JS runtime.
pub fn fail_fast(err: PageError) -> ! {
    log::error!("{}", err);
    wasm_bindgen::throw_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_the_selector() {
        let err = PageError::MissingElement("#section--1".to_string());
        assert_eq!(err.to_string(), "required element `#section--1` is missing");
    }

    #[test]
    fn test_content_errors_convert_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PageError = parse.into();
        assert!(err.to_string().starts_with("failed to parse site content"));
    }
}
