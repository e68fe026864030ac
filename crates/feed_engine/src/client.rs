use std::time::Duration;

use feed_core::ApiErrorKind;
use feed_logging::{feed_debug, feed_trace};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::wire::ErrorBody;
use crate::{ClientError, FetchError};

/// Error code the server puts in the body when it throttles a client.
const RATE_LIMIT_ERROR: &str = "rate_limit_error";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Instance root, e.g. `https://lemmy.ml`.
    pub base_url: String,
    /// Session token of the signed-in account, if any.
    pub auth_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://lemmy.ml".to_string(),
            auth_token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Typed JSON client for one instance's v3 HTTP API.
#[derive(Debug, Clone)]
pub struct LemmyClient {
    base: Url,
    auth_token: Option<String>,
    http: reqwest::Client,
}

impl LemmyClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let mut base = Url::parse(&settings.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;

        Ok(Self {
            base,
            auth_token: settings.auth_token,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let mut url = self.endpoint(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(token) = self.auth_token() {
                pairs.append_pair("auth", token);
            }
        }
        feed_trace!("GET {}", url.path());
        self.send(self.authorize(self.http.get(url))).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body).map_err(|err| {
            FetchError::api(ApiErrorKind::Other("invalid request".into()), err.to_string())
        })?;
        feed_trace!("POST {}", url.path());
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.send(self.authorize(request)).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|err| {
            FetchError::api(ApiErrorKind::Other("invalid endpoint".into()), err.to_string())
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FetchError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let err = map_api_error(status, &bytes);
            feed_debug!("request failed with {}: {}", status, err);
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            FetchError::api(
                ApiErrorKind::Other("unexpected response".into()),
                err.to_string(),
            )
        })
    }
}

fn map_api_error(status: StatusCode, body: &[u8]) -> FetchError {
    let reported = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.error);

    if status == StatusCode::TOO_MANY_REQUESTS || reported.as_deref() == Some(RATE_LIMIT_ERROR) {
        return FetchError::api(ApiErrorKind::RateLimited, status.to_string());
    }

    let text = reported.unwrap_or_else(|| status.to_string());
    FetchError::api(ApiErrorKind::Other(text.clone()), text)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::network(format!("timeout: {err}"));
    }
    FetchError::network(err.to_string())
}
