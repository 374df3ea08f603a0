use super::{read_json, require_text, trim_base_url};
use crate::domain::error::ProviderError;
use crate::domain::language::{Language, SourceLanguage};
use crate::domain::model::TranslationResult;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://lingva.ml";

// Lingva API response
#[derive(Deserialize, Debug)]
struct LingvaResponse {
    translation: Option<String>,
}

/// Lingva Translate: `GET /api/v1/{source}/{target}/{text}`
pub struct LingvaTranslator {
    client: Client,
    base_url: String,
}

impl LingvaTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    fn request_url(
        &self,
        text: &str,
        source: SourceLanguage,
        target: Language,
    ) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidEndpoint(format!("{}: {}", self.base_url, e)))?;

        // Text goes in as a single percent-encoded path segment.
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidEndpoint(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "v1", source.code_or("auto"), target.code, text]);

        Ok(url)
    }
}

#[async_trait]
impl Translator for LingvaTranslator {
    fn name(&self) -> &str {
        "Lingva"
    }

    async fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: Language,
    ) -> Result<TranslationResult, ProviderError> {
        let url = self.request_url(text, source, target)?;
        let response = self.client.get(url).send().await?;
        let body: LingvaResponse = read_json(response).await?;
        let translated = require_text(body.translation, "translation")?;

        Ok(TranslationResult::new(translated, self.name()))
    }
}
