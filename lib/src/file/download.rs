//! Resources needed to get a link to download a file

use crate::CanonicalPath;

#[derive(Debug, serde::Deserialize)]
struct DriveItem {
    #[serde(rename = "@microsoft.graph.downloadUrl")]
    download_url: Option<String>,
}

impl crate::Client {
    /// Resolves the file `filename` of the folder at `path` to a short lived download url.
    ///
    /// The url can be fetched without authentication, the content never goes through this client.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`](crate::Error::NotFound) when the provider responds `404 Not Found`.
    /// * [`Error::AuthExpired`](crate::Error::AuthExpired) when it responds `401 Unauthorized`.
    /// * [`Error::PermissionDenied`](crate::Error::PermissionDenied) when it responds `403 Forbidden`.
    /// * [`Error::UnexpectedStatus`](crate::Error::UnexpectedStatus) for any other failure status.
    /// * [`Error::DownloadUrlMissing`](crate::Error::DownloadUrlMissing) when the metadata has no download url.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &sharepoint::Client) -> sharepoint::Result<()> {
    /// let path = sharepoint::CanonicalPath::normalize("reports");
    /// let url = client.get_download_url(&path, "summary.pdf").await?;
    /// println!("download from {url}");
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, path), fields(path = path.as_str()))]
    pub async fn get_download_url(
        &self,
        path: &CanonicalPath,
        filename: &str,
    ) -> crate::Result<String> {
        let token = self.fetch_token().await?;
        let file = self.root().join(path).file(filename);
        let res = self.get_request(&token, file.url()).await?;
        match res.status.as_u16() {
            404 => {
                tracing::warn!("file not found: {path}/{filename}");
                return Err(crate::Error::NotFound);
            }
            401 => {
                tracing::warn!("authentication failed, token might be expired");
                return Err(crate::Error::AuthExpired);
            }
            403 => {
                tracing::warn!("permission denied to access file");
                return Err(crate::Error::PermissionDenied);
            }
            _ if !res.status.is_success() => {
                tracing::error!("unexpected error {}: {}", res.status, res.body);
                return Err(crate::Error::UnexpectedStatus {
                    status: res.status.as_u16(),
                    body: res.body,
                });
            }
            _ => {}
        }
        let item: DriveItem = serde_json::from_str(&res.body)?;
        match item.download_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => {
                tracing::warn!("download url not found in response");
                Err(crate::Error::DownloadUrlMissing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{client, init, mock_token};
    use crate::CanonicalPath;

    const FILE_PATH: &str = "/sites/site-id/drive/root:/a/b/report.pdf";

    async fn resolve(server: &mockito::Server) -> crate::Result<String> {
        client(server)
            .get_download_url(&CanonicalPath::normalize("a/b"), "report.pdf")
            .await
    }

    async fn mock_status(
        server: &mut mockito::Server,
        status: usize,
        body: &str,
    ) -> mockito::Mock {
        server
            .mock("GET", FILE_PATH)
            .match_header("authorization", "Bearer access-token")
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn success() {
        init();
        let mut server = mockito::Server::new_async().await;
        let token = mock_token(&mut server, 1).await;
        let m = mock_status(
            &mut server,
            200,
            r#"{
    "@microsoft.graph.downloadUrl": "https://contoso.sharepoint.com/download.aspx?UniqueId=abc&tempauth=xyz",
    "id": "01BYE5RZ",
    "name": "report.pdf",
    "size": 35212,
    "file": {"mimeType": "application/pdf"}
}"#,
        )
        .await;
        let url = resolve(&server).await.unwrap();
        assert_eq!(
            url,
            "https://contoso.sharepoint.com/download.aspx?UniqueId=abc&tempauth=xyz"
        );
        token.assert_async().await;
        m.assert_async().await;
    }

    #[tokio::test]
    async fn not_found() {
        init();
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server, 1).await;
        let m = mock_status(&mut server, 404, r#"{"error":{"code":"itemNotFound"}}"#).await;
        let err = resolve(&server).await.unwrap_err();
        assert!(matches!(err, crate::Error::NotFound));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn auth_expired() {
        init();
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server, 1).await;
        let m = mock_status(&mut server, 401, r#"{"error":{"code":"InvalidAuthenticationToken"}}"#).await;
        let err = resolve(&server).await.unwrap_err();
        assert!(matches!(err, crate::Error::AuthExpired));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn permission_denied() {
        init();
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server, 1).await;
        let m = mock_status(&mut server, 403, r#"{"error":{"code":"accessDenied"}}"#).await;
        let err = resolve(&server).await.unwrap_err();
        assert!(matches!(err, crate::Error::PermissionDenied));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn unexpected_status() {
        init();
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server, 1).await;
        let m = mock_status(&mut server, 503, "service unavailable").await;
        let err = resolve(&server).await.unwrap_err();
        assert!(
            matches!(err, crate::Error::UnexpectedStatus { status: 503, ref body } if body == "service unavailable")
        );
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_download_url() {
        init();
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token(&mut server, 1).await;
        let m = mock_status(
            &mut server,
            200,
            r#"{"id":"01BYE5RZ","name":"report.pdf","file":{}}"#,
        )
        .await;
        let err = resolve(&server).await.unwrap_err();
        assert!(matches!(err, crate::Error::DownloadUrlMissing));
        m.assert_async().await;
    }
}
