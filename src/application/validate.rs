use crate::domain::error::AppError;
use crate::domain::language::{Language, SourceLanguage};
use crate::domain::model::TranslationRequest;

/// Maximum input length in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Check text length and language codes, producing a request the fallback chain accepts.
pub fn build_request(
    text: &str,
    source: &str,
    target: &str,
) -> Result<TranslationRequest, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("text is empty".to_string()));
    }

    let count = char_count(trimmed);
    if count > MAX_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "text is {} characters long, the limit is {}",
            count, MAX_TEXT_CHARS
        )));
    }

    let source: SourceLanguage = source.parse()?;
    let target: Language = target.parse()?;

    Ok(TranslationRequest {
        text: trimmed.to_string(),
        source,
        target,
    })
}

/// Character count as shown to the user (Unicode scalar values, not bytes).
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
