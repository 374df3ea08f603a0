// HTTP client utilities
use crate::domain::error::AppError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};

const USER_AGENT: &str = concat!("transchain/", env!("CARGO_PKG_VERSION"));

/// Create the shared HTTP client.
///
/// No overall request timeout is set here; each attempt is bounded by the
/// fallback chain instead.
pub fn create_client(config: &Config) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .user_agent(USER_AGENT);

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
