//! REST client for the academic backend.
//!
//! List endpoints answer either a bare array or a `{"results": [...]}` page; both are
//! normalized here so callers only ever see `Vec<T>`.

use std::sync::Arc;
use std::time::Instant;

use facultyhub_config::ApiConfig;
use facultyhub_core::{ClientError, ListEnvelope};
use facultyhub_models::SessionUser;
use reqwest::{Method, RequestBuilder, Response, StatusCode, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use crate::api::Session;

pub const PROFILE_PATH: &str = "/api/auth/profile/";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Query string pairs.
pub type Params = Vec<(&'static str, String)>;

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<Session>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// Client whose session carries the token from `config`, if any.
    pub fn from_config(config: ApiConfig) -> Result<Self, ClientError> {
        let session = match &config.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::anonymous(),
        };
        Self::new(config, Arc::new(session))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Validates the session token against the profile endpoint and records the user.
    #[instrument(skip(self))]
    pub async fn establish_session(&self) -> Result<SessionUser, ClientError> {
        if self.session.token().is_none() {
            return Err(ClientError::Unauthorized);
        }

        let url = self.config.absolute(PROFILE_PATH);
        let response = self.execute(self.request(Method::GET, &url), &url).await?;
        let user: SessionUser = decode(response).await?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    /// `GET` of a list endpoint, accepting both list shapes.
    pub async fn get_list<T>(&self, path: &str, params: &Params) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let envelope: ListEnvelope<T> = self.get_json(path, params).await?;
        Ok(envelope.into_vec())
    }

    pub async fn get_json<T>(&self, path: &str, params: &Params) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::GET, &url).query(params);
        decode(self.execute(request, &url).await?).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::POST, &url).json(body);
        decode(self.execute(request, &url).await?).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::PUT, &url).json(body);
        decode(self.execute(request, &url).await?).await
    }

    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let request = self.request(Method::POST, &url).multipart(form);
        decode(self.execute(request, &url).await?).await
    }

    /// `POST` without a body, for action endpoints such as approvals.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        decode(self.execute(self.request(Method::POST, &url), &url).await?).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, request: RequestBuilder, url: &str) -> Result<Response, ClientError> {
        if self.session.is_expired() {
            return Err(ClientError::Unauthorized);
        }

        let request_id = Uuid::new_v4().to_string();
        let request = request.header(REQUEST_ID_HEADER, &request_id).build()?;
        let method = request.method().clone();
        let start = Instant::now();

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    url = %url,
                    error = %e,
                    "Request failed"
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        let latency = start.elapsed();

        match status.as_u16() {
            200..=299 => {
                debug!(
                    request_id = %request_id,
                    method = %method,
                    url = %url,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
            }
            400..=499 => {
                warn!(
                    request_id = %request_id,
                    method = %method,
                    url = %url,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Client error"
                );
            }
            _ => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    url = %url,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Server error"
                );
            }
        }

        if status == StatusCode::UNAUTHORIZED {
            self.session.mark_expired();
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &body));
        }

        Ok(response)
    }
}

async fn decode<T>(response: Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
