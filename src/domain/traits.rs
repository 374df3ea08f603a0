use crate::domain::error::ProviderError;
use crate::domain::language::{Language, SourceLanguage};
use crate::domain::model::TranslationResult;
use async_trait::async_trait;

/// Trait for translation services
///
/// Each implementation shapes requests for one remote provider and parses its
/// response. Implementations never retry; the fallback chain decides what
/// happens after a failure.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider name reported in [`TranslationResult::provider_name`].
    fn name(&self) -> &str;

    /// Translate `text` into `target`.
    async fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: Language,
    ) -> Result<TranslationResult, ProviderError>;
}
