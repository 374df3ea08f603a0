use super::{read_json, require_text, trim_base_url};
use crate::domain::error::ProviderError;
use crate::domain::language::{Language, SourceLanguage};
use crate::domain::model::TranslationResult;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net";

/// MyMemory has no `auto` code; this is its detection sentinel.
const AUTO_SOURCE: &str = "Autodetect";

// MyMemory API response
#[derive(Deserialize, Debug)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    // Sent as a number on success and sometimes as a string on errors.
    #[serde(rename = "responseStatus")]
    response_status: Option<Value>,
    #[serde(rename = "responseDetails")]
    response_details: Option<Value>,
}

#[derive(Deserialize, Debug)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// MyMemory: `GET /get?q=..&langpair={source}|{target}`
pub struct MyMemoryTranslator {
    client: Client,
    base_url: String,
    email: Option<String>,
}

impl MyMemoryTranslator {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
            email: None,
        }
    }

    /// Contact address sent as `de`, which raises the anonymous daily quota.
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email.filter(|e| !e.trim().is_empty());
        self
    }
}

fn status_code(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    fn name(&self) -> &str {
        "MyMemory"
    }

    async fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: Language,
    ) -> Result<TranslationResult, ProviderError> {
        let langpair = format!("{}|{}", source.code_or(AUTO_SOURCE), target.code);
        let mut params = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = self.email.as_deref() {
            params.push(("de", email));
        }

        let response = self
            .client
            .get(format!("{}/get", self.base_url))
            .query(&params)
            .send()
            .await?;
        let body: MyMemoryResponse = read_json(response).await?;

        // Errors come back as HTTP 200 with the real status in the body.
        if let Some(status) = body.response_status.as_ref().and_then(status_code) {
            if status != 200 {
                let details = match body.response_details {
                    Some(Value::String(s)) => s,
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
                return Err(ProviderError::Status {
                    status,
                    body: details,
                });
            }
        }

        let translated = require_text(
            body.response_data.and_then(|d| d.translated_text),
            "responseData.translatedText",
        )?;

        Ok(TranslationResult::new(translated, self.name()))
    }
}
