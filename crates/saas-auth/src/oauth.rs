//! OAuth 2.0 refresh-token grant.
//!
//! Token endpoints differ only in how the grant request is shaped: the HTTP
//! method used and where the client credentials travel. [`GrantShape`]
//! captures both so a single [`TokenEndpoint`] can talk to every provider.

use chrono::{DateTime, Duration, Utc};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::credentials::ClientCredentials;
use crate::error::{Error, ErrorKind, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP method used for the grant request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrantMethod {
    /// Parameters are form-encoded into the query string.
    Get,
    /// Parameters are form-encoded into the request body.
    Post,
}

/// Where the client id and secret are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialPlacement {
    /// HTTP Basic `Authorization` header.
    BasicAuth,
    /// `client_id` / `client_secret` grant parameters.
    Body,
}

/// Shape of a refresh-token grant request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantShape {
    pub method: GrantMethod,
    pub credentials: CredentialPlacement,
}

impl GrantShape {
    /// POST with form body, client authenticated by Basic auth.
    pub const POST_BASIC: GrantShape = GrantShape {
        method: GrantMethod::Post,
        credentials: CredentialPlacement::BasicAuth,
    };

    /// GET with query-encoded parameters, client authenticated by Basic auth.
    pub const GET_BASIC: GrantShape = GrantShape {
        method: GrantMethod::Get,
        credentials: CredentialPlacement::BasicAuth,
    };

    /// POST with form body carrying the client id and secret.
    pub const POST_BODY: GrantShape = GrantShape {
        method: GrantMethod::Post,
        credentials: CredentialPlacement::Body,
    };

    /// Encode the grant parameters for this shape.
    pub(crate) fn encode_params(
        &self,
        client: &ClientCredentials,
        refresh_token: &str,
    ) -> Result<String> {
        let mut params = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        if self.credentials == CredentialPlacement::Body {
            params.push(("client_id", client.client_id()));
            params.push(("client_secret", client.client_secret()));
        }

        Ok(serde_urlencoded::to_string(params)?)
    }
}

/// Token response from a refresh grant.
///
/// Sensitive fields are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// New access token.
    pub access_token: String,
    /// Rotated refresh token, when the provider issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

impl TokenResponse {
    /// When the access token stops being valid, counted from `issued_at`.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_in
            .map(|secs| issued_at + Duration::seconds(secs))
    }
}

/// OAuth error body. HubSpot reports `status`/`message` instead of the
/// RFC 6749 field names.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    #[serde(alias = "status")]
    error: String,
    #[serde(default, alias = "message")]
    error_description: Option<String>,
}

/// A provider token endpoint together with the request shape it expects.
#[derive(Debug, Clone)]
pub struct TokenEndpoint {
    url: Url,
    shape: GrantShape,
}

impl TokenEndpoint {
    /// Create an endpoint from a URL string.
    pub fn new(url: &str, shape: GrantShape) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url)?,
            shape,
        })
    }

    /// The endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request shape.
    pub fn shape(&self) -> GrantShape {
        self.shape
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token and client credentials are not logged. Any
    /// transport error or non-2xx status is returned as-is; no retry is
    /// attempted.
    #[instrument(skip(self, http, client, refresh_token), fields(url = %self.url, method = ?self.shape.method))]
    pub async fn refresh(
        &self,
        http: &reqwest::Client,
        client: &ClientCredentials,
        refresh_token: &str,
    ) -> Result<TokenResponse> {
        let params = self.shape.encode_params(client, refresh_token)?;

        let request = match self.shape.method {
            GrantMethod::Get => {
                let mut url = self.url.clone();
                url.set_query(Some(&params));
                http.get(url)
            }
            GrantMethod::Post => http
                .post(self.url.clone())
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(params),
        };

        let request = match self.shape.credentials {
            CredentialPlacement::BasicAuth => {
                request.basic_auth(client.client_id(), Some(client.client_secret()))
            }
            CredentialPlacement::Body => request,
        };

        let response = request.header(ACCEPT, "application/json").send().await?;

        handle_token_response(response).await
    }
}

/// Check the status and decode a token response.
async fn handle_token_response(response: reqwest::Response) -> Result<TokenResponse> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "token endpoint rejected refresh");

        if let Ok(error) = serde_json::from_str::<OAuthErrorResponse>(&body) {
            return Err(Error::new(ErrorKind::OAuth {
                status: status.as_u16(),
                error: error.error,
                description: error.error_description.unwrap_or_default(),
            }));
        }

        return Err(Error::new(ErrorKind::Http {
            status: Some(status.as_u16()),
            message: status
                .canonical_reason()
                .unwrap_or("token request failed")
                .to_string(),
        }));
    }

    let token: TokenResponse = response.json().await?;
    if token.access_token.is_empty() {
        return Err(Error::new(ErrorKind::TokenInvalid(
            "response does not contain access_token".to_string(),
        )));
    }

    if let Some(expires_at) = token.expires_at(Utc::now()) {
        debug!(expires_at = %expires_at.to_rfc3339(), "access token issued");
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> ClientCredentials {
        ClientCredentials::new("client-id", "client-secret")
    }

    fn basic_header() -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode("client-id:client-secret");
        format!("Basic {encoded}")
    }

    #[test]
    fn test_encode_params_basic() {
        let params = GrantShape::POST_BASIC
            .encode_params(&client(), "r/1+2")
            .unwrap();
        assert_eq!(params, "grant_type=refresh_token&refresh_token=r%2F1%2B2");
    }

    #[test]
    fn test_encode_params_body() {
        let params = GrantShape::POST_BODY
            .encode_params(&client(), "r1")
            .unwrap();
        assert_eq!(
            params,
            "grant_type=refresh_token&refresh_token=r1&client_id=client-id&client_secret=client-secret"
        );
    }

    #[test]
    fn test_token_response_expires_at() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"T1","expires_in":3599}"#).unwrap();
        let issued = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(
            token.expires_at(issued).unwrap().to_rfc3339(),
            "2024-01-01T00:59:59+00:00"
        );
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_token_response_debug_redacts_tokens() {
        let token = TokenResponse {
            access_token: "super_secret_access_token".to_string(),
            refresh_token: Some("super_secret_refresh_token".to_string()),
            token_type: Some("Bearer".to_string()),
            expires_in: Some(3600),
            scope: None,
        };

        let debug_output = format!("{:?}", token);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_access_token"));
        assert!(!debug_output.contains("super_secret_refresh_token"));
    }

    #[tokio::test]
    async fn test_refresh_post_basic() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("authorization", basic_header().as_str()))
            .and(header("content-type", FORM_CONTENT_TYPE))
            .and(body_string("grant_type=refresh_token&refresh_token=R0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "T1",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint =
            TokenEndpoint::new(&format!("{}/token", server.uri()), GrantShape::POST_BASIC)
                .unwrap();
        let token = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap();

        assert_eq!(token.access_token, "T1");
        assert_eq!(token.token_type.as_deref(), Some("Bearer"));
    }

    #[tokio::test]
    async fn test_refresh_get_basic_uses_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(query_param("refresh_token", "R0"))
            .and(header("authorization", basic_header().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "T1",
                "refresh_token": "R1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint =
            TokenEndpoint::new(&format!("{}/token", server.uri()), GrantShape::GET_BASIC)
                .unwrap();
        let token = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap();

        assert_eq!(token.access_token, "T1");
        assert_eq!(token.refresh_token.as_deref(), Some("R1"));
    }

    #[tokio::test]
    async fn test_refresh_post_body_has_no_basic_auth() {
        use wiremock::{Match, Request};

        struct NoAuthorization;
        impl Match for NoAuthorization {
            fn matches(&self, request: &Request) -> bool {
                !request.headers.contains_key("authorization")
            }
        }

        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v1/token"))
            .and(NoAuthorization)
            .and(body_string(
                "grant_type=refresh_token&refresh_token=R0&client_id=client-id&client_secret=client-secret",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "T1",
                "refresh_token": "R0",
                "expires_in": 1800
            })))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = TokenEndpoint::new(
            &format!("{}/oauth/v1/token", server.uri()),
            GrantShape::POST_BODY,
        )
        .unwrap();
        let token = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap();

        assert_eq!(token.access_token, "T1");
    }

    #[tokio::test]
    async fn test_refresh_oauth_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Token has been expired or revoked."
            })))
            .mount(&server)
            .await;

        let endpoint = TokenEndpoint::new(&server.uri(), GrantShape::POST_BASIC).unwrap();
        let err = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap_err();

        assert!(matches!(
            err.kind,
            ErrorKind::OAuth { status: 400, ref error, .. } if error == "invalid_grant"
        ));
    }

    #[tokio::test]
    async fn test_refresh_hubspot_style_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "status": "BAD_REFRESH_TOKEN",
                "message": "missing or unknown refresh token"
            })))
            .mount(&server)
            .await;

        let endpoint = TokenEndpoint::new(&server.uri(), GrantShape::POST_BODY).unwrap();
        let err = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap_err();

        match err.kind {
            ErrorKind::OAuth {
                error, description, ..
            } => {
                assert_eq!(error, "BAD_REFRESH_TOKEN");
                assert_eq!(description, "missing or unknown refresh token");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refresh_plain_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
            .mount(&server)
            .await;

        let endpoint = TokenEndpoint::new(&server.uri(), GrantShape::POST_BASIC).unwrap();
        let err = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(matches!(err.kind, ErrorKind::Http { .. }));
    }

    #[tokio::test]
    async fn test_refresh_empty_access_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": ""})),
            )
            .mount(&server)
            .await;

        let endpoint = TokenEndpoint::new(&server.uri(), GrantShape::POST_BASIC).unwrap();
        let err = endpoint
            .refresh(&reqwest::Client::new(), &client(), "R0")
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::TokenInvalid(_)));
    }

    #[tokio::test]
    async fn test_transport_error_hides_get_grant_refresh_token() {
        // Nothing listens on port 1, so the GET grant fails before any status
        let endpoint = TokenEndpoint::new(
            "http://127.0.0.1:1/integrations/oauth2/api/v1/token",
            GrantShape::GET_BASIC,
        )
        .unwrap();
        let err = endpoint
            .refresh(&reqwest::Client::new(), &client(), "SUPERSECRETREFRESH")
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Http { status: None, .. }));

        let mut rendered = format!("{err} {err:?}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            rendered.push_str(&format!(" {cause} {cause:?}"));
            source = cause.source();
        }
        assert!(!rendered.contains("SUPERSECRETREFRESH"));
        assert!(!rendered.contains("refresh_token="));
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let err = TokenEndpoint::new("not a url", GrantShape::POST_BASIC).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }
}
