use crate::domain::error::{AppError, AttemptFailure};
use crate::domain::model::{AttemptOutcome, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Default per-attempt timeout.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed-priority list of providers tried one after another.
pub struct FallbackChain {
    providers: Vec<Box<dyn Translator>>,
    attempt_timeout: Duration,
}

impl FallbackChain {
    pub fn new(providers: Vec<Box<dyn Translator>>, attempt_timeout: Duration) -> Self {
        Self {
            providers,
            attempt_timeout,
        }
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Translate using the first provider that answers in time.
    ///
    /// Providers are tried strictly in order and at most one call is in flight.
    /// Fails with [`AppError::AllProvidersFailed`] only once every provider failed.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, AppError> {
        let span = info_span!(
            "translate",
            request_id = %Uuid::new_v4(),
            target = request.target().code,
            chars = request.text().chars().count() as u64,
        );

        async {
            let mut attempts = Vec::with_capacity(self.providers.len());

            for provider in &self.providers {
                match self.attempt(provider.as_ref(), request).await {
                    AttemptOutcome::Success(result) => return Ok(result),
                    AttemptOutcome::Failure(failure) => attempts.push(failure),
                }
            }

            error!(attempts = attempts.len(), "all providers failed");
            Err(AppError::AllProvidersFailed { attempts })
        }
        .instrument(span)
        .await
    }

    async fn attempt(
        &self,
        provider: &dyn Translator,
        request: &TranslationRequest,
    ) -> AttemptOutcome {
        let name = provider.name();
        debug!(provider = name, "attempting");
        let started = Instant::now();

        // Dropping the future on timeout cancels the in-flight request.
        let call = provider.translate(request.text(), request.source(), request.target());
        let outcome = tokio::time::timeout(self.attempt_timeout, call).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok(result)) => {
                info!(provider = name, elapsed_ms, "translation succeeded");
                AttemptOutcome::Success(result)
            }
            Ok(Err(e)) => {
                warn!(provider = name, elapsed_ms, error = %e, "provider failed");
                AttemptOutcome::Failure(AttemptFailure {
                    provider: name.to_string(),
                    reason: e.to_string(),
                    timed_out: false,
                })
            }
            Err(_) => {
                warn!(
                    provider = name,
                    timeout_ms = self.attempt_timeout.as_millis() as u64,
                    "provider timed out"
                );
                AttemptOutcome::Failure(AttemptFailure {
                    provider: name.to_string(),
                    reason: format!("timed out after {:?}", self.attempt_timeout),
                    timed_out: true,
                })
            }
        }
    }
}
