use crate::application::validate::char_count;
use crate::domain::language::Language;
use crate::domain::model::TranslationResult;
use crate::presentation::theme::Theme;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::time::Duration;

// Unicode embedding marks for right-to-left output
const RLE: char = '\u{202B}';
const PDF: char = '\u{202C}';

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} [{elapsed}]";

/// What the terminal shows; exactly one state at a time.
///
/// `Loading` is not rendered as text; [`ViewState::loading_indicator`] turns it
/// into a [`Spinner`] that lives until the translation settles.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Empty,
    Loading,
    Error(String),
    Output {
        result: TranslationResult,
        target: Language,
    },
}

impl ViewState {
    /// Render the state as text. `Loading` renders as nothing; see [`Spinner`].
    pub fn render(&self, theme: &Theme, rtl_marks: bool) -> String {
        let mut out = String::new();
        match self {
            ViewState::Empty => {
                writeln!(out, "{}", (theme.hint)("Nothing to translate.")).ok();
            }
            ViewState::Loading => {}
            ViewState::Error(message) => {
                writeln!(out, "{}", (theme.error)(&format!("✘ {}", message))).ok();
            }
            ViewState::Output { result, target } => {
                let text = if target.rtl && rtl_marks {
                    wrap_rtl(&result.translated_text)
                } else {
                    result.translated_text.clone()
                };
                writeln!(out, "{}", (theme.output)(&text)).ok();
                writeln!(out, "{}", (theme.line)(&"⸺".repeat(20))).ok();
                let meta = format!(
                    "{} · {} chars · ",
                    target,
                    char_count(&result.translated_text)
                );
                writeln!(
                    out,
                    "{}{}",
                    (theme.meta)(&meta),
                    (theme.provider)(&result.provider_name)
                )
                .ok();
            }
        }
        out
    }

    /// Spinner for the `Loading` state, `None` for every other state.
    pub fn loading_indicator(&self) -> Option<Spinner> {
        matches!(self, ViewState::Loading).then(|| Spinner::start("Translating..."))
    }
}

fn wrap_rtl(text: &str) -> String {
    text.lines()
        .map(|line| format!("{RLE}{line}{PDF}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Loading indicator on stderr, cleared when dropped.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
