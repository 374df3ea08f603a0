use crate::domain::error::AttemptFailure;
use crate::domain::language::{Language, SourceLanguage};
use serde::{Deserialize, Serialize};

// 翻译请求 (只能通过 validate 构造)
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub(crate) text: String,
    pub(crate) source: SourceLanguage,
    pub(crate) target: Language,
}

impl TranslationRequest {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> SourceLanguage {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }
}

// 翻译结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub provider_name: String,
}

impl TranslationResult {
    pub fn new(translated_text: impl Into<String>, provider_name: impl Into<String>) -> Self {
        Self {
            translated_text: translated_text.into(),
            provider_name: provider_name.into(),
        }
    }
}

// 单次尝试的结果
#[derive(Debug)]
pub enum AttemptOutcome {
    Success(TranslationResult),
    Failure(AttemptFailure),
}
