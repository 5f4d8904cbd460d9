use crate::{CanonicalPath, RemoteFolder};

impl crate::Client {
    /// Makes sure every folder of `path` exists, creating the missing ones from the root down.
    ///
    /// Each segment is looked up, then created when the lookup fails. A single token is used
    /// for the whole chain, and an empty path returns the root without any request.
    ///
    /// # Returns
    ///
    /// The deepest folder of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FolderCreation`](crate::Error::FolderCreation) as soon as a folder
    /// cannot be created. The folders created before that point are left in place.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &sharepoint::Client) -> sharepoint::Result<()> {
    /// let path = sharepoint::CanonicalPath::normalize("invoices/2024/03");
    /// let folder = client.ensure_folder_chain(&path).await?;
    /// println!("ready: {}", folder.url());
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, path), fields(path = path.as_str()))]
    pub async fn ensure_folder_chain(&self, path: &CanonicalPath) -> crate::Result<RemoteFolder> {
        let mut current = self.root();
        if path.is_empty() {
            return Ok(current);
        }
        let token = self.fetch_token().await?;
        for segment in path.segments() {
            let child = current.child(segment);
            current = if self.folder_exists(&token, &child).await? {
                tracing::debug!("folder {segment:?} exists");
                child
            } else {
                self.create_folder(&token, &current, segment).await?
            };
        }
        Ok(current)
    }
}
