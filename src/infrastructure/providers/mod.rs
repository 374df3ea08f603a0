// Provider adapters and the helpers they share
pub mod libretranslate;
pub mod lingva;
pub mod mymemory;

pub use libretranslate::LibreTranslateTranslator;
pub use lingva::LingvaTranslator;
pub use mymemory::MyMemoryTranslator;

use crate::domain::error::ProviderError;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Longest error body kept in [`ProviderError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Turn a non-2xx response into [`ProviderError::Status`], otherwise decode JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

/// Require a non-empty translated-text field.
pub(crate) fn require_text(value: Option<String>, field: &str) -> Result<String, ProviderError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(ProviderError::MalformedResponse(format!("`{}` is empty", field))),
        None => Err(ProviderError::MalformedResponse(format!("missing `{}`", field))),
    }
}

pub(crate) fn trim_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

fn truncate(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
