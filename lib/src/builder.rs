use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no credentials were provided.
    #[error("credentials missing")]
    MissingCredentials,
    /// Returned when no site was provided.
    #[error("site id missing")]
    MissingSiteId,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the Graph and identity endpoints, the credentials, the site,
/// a timeout and optionally customizing the inner `reqwest::ClientBuilder`.
///
/// ```
/// use sharepoint::{ClientBuilder, Credentials};
///
/// let _client = ClientBuilder::default()
///     .with_credentials(Credentials::new("tenant-id", "client-id", "client-secret"))
///     .with_site_id("site-id")
///     .build()
///     .expect("unable to build client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    authority_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<crate::Credentials>,
    site_id: Option<String>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is set to the Graph API v1.0.
    /// - Authority URL is set to the Microsoft identity platform.
    /// - No credentials, site or timeout are set.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::GRAPH_BASE_URL),
            authority_url: Cow::Borrowed(crate::AUTHORITY_URL),
            client_builder: None,
            credentials: None,
            site_id: None,
            timeout: None,
        }
    }
}

fn timeout_from_env() -> Option<Duration> {
    std::env::var("SP_TIMEOUT")
        .ok()
        .and_then(|value| parse_timeout(&value))
}

/// Parses a timeout in milliseconds, an invalid value is ignored.
fn parse_timeout(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid SP_TIMEOUT value {value:?}: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `SP_TENANT_ID`, `SP_CLIENT_ID` and `SP_CLIENT_SECRET` for credentials.
    /// - Uses `SP_SITE_ID` for the site.
    /// - Uses `SP_BASE_URL` and `SP_AUTHORITY_URL` for the endpoints, when set.
    /// - Uses `SP_TIMEOUT`, in milliseconds, for the request timeout.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("SP_BASE_URL")
                .map(Cow::Owned)
                .unwrap_or(defaults.base_url),
            authority_url: std::env::var("SP_AUTHORITY_URL")
                .map(Cow::Owned)
                .unwrap_or(defaults.authority_url),
            client_builder: None,
            credentials: crate::Credentials::from_env(),
            site_id: std::env::var("SP_SITE_ID").ok(),
            timeout: timeout_from_env(),
        }
    }
}

impl ClientBuilder {
    /// Sets a custom Graph base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom Graph base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom identity provider URL.
    pub fn set_authority_url(&mut self, authority_url: impl Into<Cow<'static, str>>) {
        self.authority_url = authority_url.into();
    }

    /// Sets a custom identity provider URL and returns the modified builder.
    pub fn with_authority_url(mut self, authority_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_authority_url(authority_url);
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

    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = Some(credentials);
    }

    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    pub fn set_site_id(&mut self, site_id: impl Into<String>) {
        self.site_id = Some(site_id.into());
    }

    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.set_site_id(site_id);
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::MissingSiteId`] if no site was set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let site_id = self.site_id.ok_or(Error::MissingSiteId)?;
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(crate::Client {
            base_url: self.base_url,
            authority_url: self.authority_url,
            credentials,
            site_id,
            inner: builder.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_timeout, ClientBuilder, Error};
    use crate::Credentials;
    use std::time::Duration;

    #[test]
    fn should_parse_timeout_in_millis() {
        assert_eq!(parse_timeout("1500"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_timeout(" 30 "), Some(Duration::from_millis(30)));
    }

    #[test]
    fn should_ignore_invalid_timeout() {
        crate::tests::init();
        assert_eq!(parse_timeout("10s"), None);
        assert_eq!(parse_timeout("-1"), None);
        assert_eq!(parse_timeout(""), None);
    }

    #[test]
    fn should_fail_without_credentials() {
        let err = ClientBuilder::default()
            .with_site_id("site-id")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn should_fail_without_site() {
        let err = ClientBuilder::default()
            .with_credentials(Credentials::new("tenant", "client", "secret"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingSiteId));
    }

    #[test]
    fn should_build_with_custom_url() {
        let client = ClientBuilder::default()
            .with_base_url("http://localhost:1234/")
            .with_credentials(Credentials::new("tenant", "client", "secret"))
            .with_site_id("site-id")
            .build()
            .unwrap();
        assert_eq!(
            client.root().url(),
            "http://localhost:1234/sites/site-id/drive/root:"
        );
    }
}
