use crate::domain::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Static entry in the language registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const fn lang(code: &'static str, name: &'static str, rtl: bool) -> Language {
    Language { code, name, rtl }
}

/// Supported target languages, in display order.
pub static LANGUAGES: &[Language] = &[
    lang("en", "English", false),
    lang("fr", "French", false),
    lang("es", "Spanish", false),
    lang("de", "German", false),
    lang("it", "Italian", false),
    lang("pt", "Portuguese", false),
    lang("nl", "Dutch", false),
    lang("pl", "Polish", false),
    lang("sv", "Swedish", false),
    lang("uk", "Ukrainian", false),
    lang("ru", "Russian", false),
    lang("tr", "Turkish", false),
    lang("hi", "Hindi", false),
    lang("zh", "Chinese", false),
    lang("ja", "Japanese", false),
    lang("ko", "Korean", false),
    lang("ar", "Arabic", true),
    lang("he", "Hebrew", true),
    lang("fa", "Persian", true),
    lang("ur", "Urdu", true),
];

impl Language {
    /// Case-insensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        LANGUAGES
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(code))
            .copied()
    }

    pub fn all() -> &'static [Language] {
        LANGUAGES
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| AppError::UnsupportedLanguage(s.to_string()))
    }
}

/// Source language sent to providers.
///
/// `Auto` is the detection sentinel; each adapter renders it in its own dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLanguage {
    #[default]
    Auto,
    Fixed(Language),
}

impl SourceLanguage {
    /// Wire code, using `auto_sentinel` for [`SourceLanguage::Auto`].
    pub fn code_or<'a>(&self, auto_sentinel: &'a str) -> &'a str {
        match self {
            SourceLanguage::Auto => auto_sentinel,
            SourceLanguage::Fixed(lang) => lang.code,
        }
    }
}

impl FromStr for SourceLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(SourceLanguage::Auto);
        }
        s.parse::<Language>().map(SourceLanguage::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let fr = Language::from_code("FR").unwrap();
        assert_eq!(fr.code, "fr");
        assert_eq!(fr.name, "French");
        assert!(!fr.rtl);
    }

    #[test]
    fn rtl_languages_are_flagged() {
        for code in ["ar", "he", "fa", "ur"] {
            assert!(Language::from_code(code).unwrap().rtl, "{code} should be rtl");
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(code) if code == "xx"));
    }

    #[test]
    fn source_language_parses_auto_sentinel() {
        assert_eq!("auto".parse::<SourceLanguage>().unwrap(), SourceLanguage::Auto);
        assert_eq!(SourceLanguage::Auto.code_or("Autodetect"), "Autodetect");

        let de: SourceLanguage = "de".parse().unwrap();
        assert_eq!(de.code_or("auto"), "de");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGES.len());
    }
}
