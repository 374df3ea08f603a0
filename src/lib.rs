//! Text translation with ordered fallback across free translation providers.
//!
//! Providers are tried one at a time in a fixed order (Lingva, MyMemory,
//! LibreTranslate), each bounded by a timeout. The first success wins.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;
