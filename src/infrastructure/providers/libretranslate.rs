use super::{read_json, require_text, trim_base_url};
use crate::domain::error::ProviderError;
use crate::domain::language::{Language, SourceLanguage};
use crate::domain::model::TranslationResult;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://libretranslate.com";

#[derive(Serialize, Debug)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// LibreTranslate: `POST /translate` with a JSON body
pub struct LibreTranslateTranslator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    fn name(&self) -> &str {
        "LibreTranslate"
    }

    async fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: Language,
    ) -> Result<TranslationResult, ProviderError> {
        let payload = LibreTranslateRequest {
            q: text,
            source: source.code_or("auto"),
            target: target.code,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&payload)
            .send()
            .await?;
        let body: LibreTranslateResponse = read_json(response).await?;
        let translated = require_text(body.translated_text, "translatedText")?;

        Ok(TranslationResult::new(translated, self.name()))
    }
}
