//! The application credentials used to get a token with the [client credentials flow](https://learn.microsoft.com/en-us/entra/identity-platform/v2-oauth2-client-creds-grant-flow).

/// Credentials of an application registered in a tenant
#[derive(Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"********")
            .finish()
    }
}

impl Credentials {
    pub fn new<T, I, S>(tenant_id: T, client_id: I, client_secret: S) -> Self
    where
        T: Into<String>,
        I: Into<String>,
        S: Into<String>,
    {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Creates the credentials based on the environment variables
    ///
    /// When `SP_TENANT_ID`, `SP_CLIENT_ID` and `SP_CLIENT_SECRET` are set, `Some(Credentials)` is returned.
    ///
    /// If any of them is missing, `None` is returned.
    ///
    /// ```rust
    /// use sharepoint::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(creds) => println!("authenticating as {}", creds.client_id),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        match (
            std::env::var("SP_TENANT_ID"),
            std::env::var("SP_CLIENT_ID"),
            std::env::var("SP_CLIENT_SECRET"),
        ) {
            (Ok(tenant_id), Ok(client_id), Ok(client_secret)) => {
                Some(Self::new(tenant_id, client_id, client_secret))
            }
            _ => None,
        }
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}
