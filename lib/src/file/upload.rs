//! Resources needed to upload a file

use crate::{CanonicalPath, RemoteFile};

impl crate::Client {
    /// Writes the content of the file `filename` in the folder at `path`, replacing any previous content.
    ///
    /// The folders of `path` must already exist, see [`ensure_folder_chain`](crate::Client::ensure_folder_chain).
    /// The content is sent in a single request.
    ///
    /// # Arguments
    ///
    /// * `path` - Folder containing the file.
    /// * `filename` - Name of the file.
    /// * `content_type` - Type of the content, `text/plain` when `None`.
    /// * `content` - The whole content of the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upload`](crate::Error::Upload) when the provider doesn't respond with
    /// `200 OK` or `201 Created`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &sharepoint::Client) -> sharepoint::Result<()> {
    /// let path = sharepoint::CanonicalPath::normalize("reports");
    /// let file = client
    ///     .upload_file(&path, "hello.txt", None, b"hello world".to_vec())
    ///     .await?;
    /// println!("uploaded to {}", file.content_url());
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, path, content), fields(path = path.as_str()))]
    pub async fn upload_file(
        &self,
        path: &CanonicalPath,
        filename: &str,
        content_type: Option<&str>,
        content: impl Into<bytes::Bytes>,
    ) -> crate::Result<RemoteFile> {
        let token = self.fetch_token().await?;
        let file = self.root().join(path).file(filename);
        let res = self
            .put_request_data(
                &token,
                &file.content_url(),
                content_type.unwrap_or(super::DEFAULT_CONTENT_TYPE),
                content.into(),
            )
            .await?;
        if res.is_ok_or_created() {
            tracing::info!("successfully uploaded {filename}");
            Ok(file)
        } else {
            tracing::error!(
                "failed to upload {filename}, status={} body={}",
                res.status,
                res.body
            );
            Err(crate::Error::Upload {
                status: res.status.as_u16(),
                body: res.body,
            })
        }
    }
}
