//! Client for the document library of a SharePoint site, through the [Microsoft Graph API](https://learn.microsoft.com/en-us/graph/api/resources/driveitem).
//!
//! Folders are addressed by path: [`Client::ensure_folder_chain`] walks a [`CanonicalPath`]
//! and creates the missing folders, then [`Client::upload_file`] writes a file in it and
//! [`Client::get_download_url`] resolves a file to a short lived download link.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use sharepoint::{CanonicalPath, ClientBuilder};
//!
//! let client = ClientBuilder::from_env().build()?;
//! let path = CanonicalPath::normalize("/reports//2024/");
//! client.ensure_folder_chain(&path).await?;
//! let file = client
//!     .upload_file(&path, "summary.txt", None, "hello".as_bytes().to_vec())
//!     .await?;
//! println!("uploaded to {}", file.content_url());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod auth;
pub mod builder;
pub mod credentials;
pub mod file;
pub mod folder;
pub mod location;
pub mod path;
mod request;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use location::{RemoteFile, RemoteFolder};
pub use path::CanonicalPath;

/// Base url of the Microsoft Graph API
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
/// Base url of the Microsoft identity platform
pub const AUTHORITY_URL: &str = "https://login.microsoftonline.com";
/// Scope requested when asking for an application token
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";
/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The identity provider refused to deliver a token
    #[error("unable to authenticate, identity provider responded with status {status}")]
    Authentication { status: u16, body: String },
    /// A missing folder couldn't be created, the chain has been aborted
    #[error("unable to create folder {name:?}, provider responded with status {status}")]
    FolderCreation {
        name: String,
        status: u16,
        body: String,
    },
    /// The content of a file couldn't be written
    #[error("unable to upload file, provider responded with status {status}")]
    Upload { status: u16, body: String },
    #[error("file not found")]
    NotFound,
    /// The provider rejected the token, it might be expired
    #[error("authentication failed, the token might be expired")]
    AuthExpired,
    #[error("permission denied to access file")]
    PermissionDenied,
    /// The file metadata doesn't contain any download url
    #[error("download url not found in response")]
    DownloadUrlMissing,
    #[error("unexpected error {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for a SharePoint site drive
///
/// Cloning the client is cheap, the connection pool is shared between the clones.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) authority_url: Cow<'static, str>,
    pub(crate) credentials: Credentials,
    pub(crate) site_id: String,
    pub(crate) inner: reqwest::Client,
}

impl Client {
    /// Creates a client targeting the default Graph and identity endpoints.
    pub fn new(
        credentials: Credentials,
        site_id: impl Into<String>,
    ) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_credentials(credentials)
            .with_site_id(site_id)
            .build()
    }

    /// The root folder of the site drive
    pub fn root(&self) -> RemoteFolder {
        RemoteFolder::root(&self.base_url, &self.site_id)
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::{Client, ClientBuilder, Credentials};

    pub const TOKEN_PATH: &str = "/tenant-id/oauth2/v2.0/token";

    pub fn init() {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    /// Client using the mock server as both identity and storage provider
    pub fn client(server: &mockito::Server) -> Client {
        ClientBuilder::default()
            .with_base_url(server.url())
            .with_authority_url(server.url())
            .with_credentials(Credentials::new("tenant-id", "client-id", "client-secret"))
            .with_site_id("site-id")
            .build()
            .unwrap()
    }

    pub async fn mock_token(server: &mut mockito::Server, hits: usize) -> mockito::Mock {
        server
            .mock("POST", TOKEN_PATH)
            .expect(hits)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token_type":"Bearer","expires_in":3599,"access_token":"access-token"}"#)
            .create_async()
            .await
    }
}
