//! Acquisition of an application token, scoped to the Graph API.

/// A bearer token attached to every request to the storage provider
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(********)")
    }
}

#[derive(serde::Serialize)]
struct TokenParams<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    scope: &'static str,
    grant_type: &'static str,
}

#[derive(serde::Deserialize)]
struct TokenPayload {
    access_token: String,
}

impl crate::Client {
    fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority_url.trim_end_matches('/'),
            self.credentials.tenant_id
        )
    }

    /// Requests a new token for the application.
    ///
    /// Tokens are not cached, every call reaches the identity provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`](crate::Error::Authentication) when the identity provider
    /// rejects the credentials, or a transport error.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_token(&self) -> crate::Result<AccessToken> {
        let res = self
            .inner
            .post(self.token_url())
            .form(&TokenParams {
                client_id: &self.credentials.client_id,
                client_secret: self.credentials.client_secret(),
                scope: crate::GRAPH_SCOPE,
                grant_type: "client_credentials",
            })
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!("unable to acquire token, status={status} body={body}");
            return Err(crate::Error::Authentication {
                status: status.as_u16(),
                body,
            });
        }
        let payload: TokenPayload = res.json().await?;
        Ok(AccessToken(payload.access_token))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{client, init, TOKEN_PATH};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", TOKEN_PATH)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("client_id".into(), "client-id".into()),
                Matcher::UrlEncoded("client_secret".into(), "client-secret".into()),
                Matcher::UrlEncoded("scope".into(), crate::GRAPH_SCOPE.into()),
                Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"token_type":"Bearer","expires_in":3599,"access_token":"abcdef"}"#)
            .create_async()
            .await;
        let token = client(&server).fetch_token().await.unwrap();
        assert_eq!(token.secret(), "abcdef");
        assert_eq!(format!("{token:?}"), "AccessToken(********)");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn rejected() {
        init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", TOKEN_PATH)
            .with_status(401)
            .with_body(r#"{"error":"invalid_client"}"#)
            .create_async()
            .await;
        let err = client(&server).fetch_token().await.unwrap_err();
        assert!(
            matches!(err, crate::Error::Authentication { status: 401, ref body } if body.contains("invalid_client"))
        );
        m.assert_async().await;
    }
}
