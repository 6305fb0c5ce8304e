//! HTTP client creation seam.
//!
//! Transport code obtains a ready-to-use [`reqwest::Client`] through the
//! [`HttpClientFactory`] contract without knowing how it was configured.

use std::time::Duration;

use typed_builder::TypedBuilder;

use crate::error::RestClientError;

/// Default connect timeout applied by [`DefaultHttpClientFactory`]
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Factory for HTTP clients.
///
/// The single seam between this crate and the transport layer: callers ask
/// for a client and get one, with timeouts, pooling and proxy settings being
/// opaque choices of the implementation.
pub trait HttpClientFactory: Send + Sync {
    /// Creates an HTTP client ready for use.
    fn create_http_client(&self) -> reqwest::Client;
}

/// Configuration for the default HTTP client factory.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct ClientConfig {
    /// Maximum time to wait for a connection to be established
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
    /// Overall per-request timeout; `None` means no limit
    #[builder(default, setter(strip_option))]
    pub timeout: Option<Duration>,
    /// User agent header sent with every request
    #[builder(setter(into), default = format!("rest-client-core/{}", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A factory that hands out clones of one shared, pre-configured client.
///
/// `reqwest` clients share their connection pool across clones, so every
/// client produced by this factory reuses the same pool.
#[derive(Debug, Clone)]
pub struct DefaultHttpClientFactory {
    client: reqwest::Client,
}

impl DefaultHttpClientFactory {
    /// Creates a factory from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest` client cannot be built,
    /// e.g. when no TLS backend is available.
    pub fn new(config: ClientConfig) -> Result<Self, RestClientError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Creates a factory with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest` client cannot be built.
    pub fn with_defaults() -> Result<Self, RestClientError> {
        Self::new(ClientConfig::default())
    }
}

impl HttpClientFactory for DefaultHttpClientFactory {
    fn create_http_client(&self) -> reqwest::Client {
        self.client.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_connect_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("rest-client-core/"));
    }

    #[test]
    fn factory_produces_clients() {
        let factory = DefaultHttpClientFactory::with_defaults().expect("factory should build");
        // Clones of a shared client; creation must never fail.
        let _first = factory.create_http_client();
        let _second = factory.create_http_client();
    }

    #[test]
    fn factory_accepts_custom_config() {
        let config = ClientConfig::builder()
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(30))
            .user_agent("custom-agent/1.0")
            .build();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(DefaultHttpClientFactory::new(config).is_ok());
    }
}
