//! Single point of HTTP communication with the backend.
//!
//! All-text payloads go out as JSON, file-bearing ones as multipart form
//! data. Every response is expected to be an [`Envelope`]; export endpoints
//! are the exception and hand back raw bytes. There is no retry or timeout
//! policy: a call either resolves or fails once.

mod admin;
mod blog;
mod contact;
mod enrollments;
mod mailer;
pub mod session;
mod volunteers;

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use beacon_api_types::Envelope;

use crate::error::ApiError;
pub use session::AdminSession;
pub use volunteers::CvAttachment;

/// Thin typed wrapper over the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?.join("/")?;
        let http = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { http, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("beacon-cli/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    fn apply_query(url: &mut Url, query: &[(&str, String)]) {
        if query.is_empty() {
            return;
        }
        url.set_query(None);
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    /// Issue a JSON request and unwrap the response envelope.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&(impl Serialize + ?Sized)>,
        session: Option<&AdminSession>,
    ) -> Result<T, ApiError> {
        let mut url = self.url(path)?;
        Self::apply_query(&mut url, query);
        debug!(%method, %url, "api request");

        let mut req = self.http.request(method, url);
        if let Some(session) = session {
            req = req.header(AUTHORIZATION, session.auth_header()?);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        Self::unwrap_envelope(resp).await
    }

    /// Like [`Self::request`] but for endpoints whose envelope carries no
    /// data (e.g. delete, newsletter subscribe).
    pub(crate) async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
        session: Option<&AdminSession>,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%method, %url, "api request");

        let mut req = self.http.request(method, url);
        if let Some(session) = session {
            req = req.header(AUTHORIZATION, session.auth_header()?);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let envelope: Envelope<serde_json::Value> = Self::decode(resp).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Backend(envelope.message))
        }
    }

    /// Issue a multipart request (volunteer CV, mailer CSV) and unwrap the
    /// response envelope.
    pub(crate) async fn request_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        session: Option<&AdminSession>,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%url, "api multipart request");

        let mut req = self.http.post(url).multipart(form);
        if let Some(session) = session {
            req = req.header(AUTHORIZATION, session.auth_header()?);
        }

        let resp = req.send().await?;
        Self::unwrap_envelope(resp).await
    }

    /// Fetch a raw binary body from an export endpoint. These endpoints do
    /// not use the envelope, so a non-success status is the only failure
    /// signal available.
    pub(crate) async fn fetch_bytes(
        &self,
        path: &str,
        session: &AdminSession,
    ) -> Result<Bytes, ApiError> {
        let url = self.url(path)?;
        debug!(%url, "api export request");

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, session.auth_header()?)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(resp.bytes().await?)
    }

    async fn unwrap_envelope<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let envelope: Envelope<T> = Self::decode(resp).await?;
        if !envelope.success {
            return Err(ApiError::Backend(envelope.message));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::malformed("success envelope without data"))
    }

    /// Decode an envelope from the body regardless of HTTP status; the
    /// backend reports business failures inside a 200 as well as inside
    /// error statuses. A non-JSON body is malformed either way.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<Envelope<T>, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            ApiError::malformed(format!("status {status}: failed to parse body: {err}"))
        })
    }
}

pub(crate) fn page_query(page: u32, limit: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("limit", limit.to_string())]
}
