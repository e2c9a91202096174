use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the API region or base URL, a request timeout, and optionally
/// customizing the inner `reqwest::ClientBuilder`.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is set to the US region.
    /// - No timeout.
    /// - No custom `reqwest::ClientBuilder` is used.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::US_REGION),
            client_builder: None,
            timeout: None,
        }
    }
}

fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var("PCLOUD_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid PCLOUD_TIMEOUT value {value:?}: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `PCLOUD_REGION` or `PCLOUD_BASE_URL` for the endpoint.
    /// - Uses `PCLOUD_TIMEOUT`, in milliseconds, for the request timeout. Invalid values are ignored.
    ///
    /// Falls back to the US region if none is specified.
    pub fn from_env() -> Self {
        let base_url = crate::Region::from_env()
            .map(|region| Cow::Borrowed(region.base_url()))
            .or_else(|| std::env::var("PCLOUD_BASE_URL").ok().map(Cow::Owned))
            .unwrap_or(Cow::Borrowed(crate::US_REGION));

        Self {
            base_url,
            client_builder: None,
            timeout: timeout_from_env(),
        }
    }
}

impl ClientBuilder {
    /// Sets the API region.
    pub fn set_region(&mut self, region: crate::Region) {
        self.base_url = region.base_url().into();
    }

    /// Sets the API region and returns the modified builder.
    pub fn with_region(mut self, region: crate::Region) -> Self {
        self.set_region(region);
        self
    }

    /// Sets a custom base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a timeout applied to every upstream request.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Sets a timeout applied to every upstream request and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let base_url = match self.base_url {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(value) => Cow::Owned(value.trim_end_matches('/').to_string()),
        };
        Ok(crate::Client {
            base_url,
            inner: builder.build()?,
        })
    }
}
