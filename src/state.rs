use crate::application::translate::FallbackChain;
use crate::domain::error::AppError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::providers::{
    libretranslate, lingva, mymemory, LibreTranslateTranslator, LingvaTranslator,
    MyMemoryTranslator,
};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    in_flight: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = create_client(&config)?;
        Ok(Self::with_client(config, http_client))
    }

    pub fn with_client(config: Config, http_client: Client) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Build the fallback chain in its fixed order: Lingva, MyMemory, LibreTranslate.
    ///
    /// Disabled providers are skipped; the order of the rest never changes.
    pub fn fallback_chain(&self, timeout_override: Option<Duration>) -> FallbackChain {
        let providers = &self.config.providers;
        let client = &self.http_client;
        let mut chain: Vec<Box<dyn Translator>> = Vec::with_capacity(3);

        if providers.lingva.enabled {
            chain.push(Box::new(LingvaTranslator::with_base_url(
                client.clone(),
                providers.lingva.base_url_or(lingva::DEFAULT_BASE_URL),
            )));
        }
        if providers.mymemory.enabled {
            chain.push(Box::new(
                MyMemoryTranslator::with_base_url(
                    client.clone(),
                    providers.mymemory.base_url_or(mymemory::DEFAULT_BASE_URL),
                )
                .with_email(providers.mymemory.email.clone()),
            ));
        }
        if providers.libretranslate.enabled {
            chain.push(Box::new(
                LibreTranslateTranslator::with_base_url(
                    client.clone(),
                    providers
                        .libretranslate
                        .base_url_or(libretranslate::DEFAULT_BASE_URL),
                )
                .with_api_key(providers.libretranslate.api_key.clone()),
            ));
        }

        let timeout =
            timeout_override.unwrap_or_else(|| Duration::from_secs(self.config.timeout_secs));
        FallbackChain::new(chain, timeout)
    }

    /// Mark a translation as running.
    ///
    /// Fails with [`AppError::Busy`] while another guard from this state is alive.
    pub fn begin_translation(&self) -> Result<InFlightGuard, AppError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::Busy)?;
        Ok(InFlightGuard {
            flag: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_translating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
