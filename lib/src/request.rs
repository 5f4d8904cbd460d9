use crate::auth::AccessToken;

/// A response from the storage provider, read entirely
pub(crate) struct RawResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}

impl RawResponse {
    /// The provider answers `200 OK` or `201 Created` when the operation succeeded
    pub fn is_ok_or_created(&self) -> bool {
        matches!(
            self.status,
            reqwest::StatusCode::OK | reqwest::StatusCode::CREATED
        )
    }
}

async fn read_response(res: reqwest::Response) -> crate::Result<RawResponse> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.text().await?;
    Ok(RawResponse { status, body })
}

impl crate::Client {
    #[tracing::instrument(name = "get", skip(self, token))]
    pub(crate) async fn get_request(
        &self,
        token: &AccessToken,
        url: &str,
    ) -> crate::Result<RawResponse> {
        let res = self
            .inner
            .get(url)
            .bearer_auth(token.secret())
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "post", skip(self, token, payload))]
    pub(crate) async fn post_request_json<P: serde::Serialize>(
        &self,
        token: &AccessToken,
        url: &str,
        payload: &P,
    ) -> crate::Result<RawResponse> {
        let res = self
            .inner
            .post(url)
            .bearer_auth(token.secret())
            .json(payload)
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "put", skip(self, token, payload))]
    pub(crate) async fn put_request_data(
        &self,
        token: &AccessToken,
        url: &str,
        content_type: &str,
        payload: bytes::Bytes,
    ) -> crate::Result<RawResponse> {
        let res = self
            .inner
            .put(url)
            .bearer_auth(token.secret())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(payload)
            .send()
            .await?;
        read_response(res).await
    }
}
