use crate::auth::AccessToken;
use crate::RemoteFolder;

impl crate::Client {
    /// Checks whether a folder exists, by fetching its metadata.
    ///
    /// Any status other than `200 OK` or `201 Created` is considered as a missing folder,
    /// including the authentication failures and the transient errors.
    ///
    /// # Errors
    ///
    /// Only transport errors are returned.
    #[tracing::instrument(skip(self, token, folder), fields(folder = folder.url()))]
    pub async fn folder_exists(
        &self,
        token: &AccessToken,
        folder: &RemoteFolder,
    ) -> crate::Result<bool> {
        let res = self.get_request(token, folder.url()).await?;
        if res.is_ok_or_created() {
            Ok(true)
        } else {
            tracing::debug!("folder considered missing, status={}", res.status);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::AccessToken;
    use crate::tests::{client, init};
    use mockito::Matcher;

    #[tokio::test]
    async fn existing() {
        init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/sites/site-id/drive/root:/reports")
            .match_header("authorization", "Bearer access-token")
            .with_status(200)
            .with_body(r#"{"name":"reports","folder":{"childCount":0}}"#)
            .create_async()
            .await;
        let client = client(&server);
        let folder = client.root().child("reports");
        let token = AccessToken::new("access-token");
        assert!(client.folder_exists(&token, &folder).await.unwrap());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn any_failure_is_missing() {
        init();
        let mut server = mockito::Server::new_async().await;
        for status in [404, 401, 403, 500, 503] {
            let m = server
                .mock("GET", "/sites/site-id/drive/root:/reports")
                .match_header("authorization", Matcher::Any)
                .with_status(status)
                .with_body(r#"{"error":{"code":"whatever"}}"#)
                .create_async()
                .await;
            let client = client(&server);
            let folder = client.root().child("reports");
            let token = AccessToken::new("access-token");
            assert!(
                !client.folder_exists(&token, &folder).await.unwrap(),
                "status {status}"
            );
            m.assert_async().await;
            m.remove_async().await;
        }
    }
}
