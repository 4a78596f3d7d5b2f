//! Unosend async client implementation.

use crate::resources::{Audiences, Contacts, Domains, Emails};
use crate::{Error, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.unosend.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT_VALUE: &str = concat!("unosend-rust/", env!("CARGO_PKG_VERSION"));

/// Async client for the Unosend email API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] to override the base
/// URL, timeout, user agent or proxy. Resource groups are reached through
/// [`Client::emails`], [`Client::domains`], [`Client::audiences`] and
/// [`Client::contacts`].
///
/// Cloning is cheap and clones share one connection pool. The pool is released
/// when the last clone is dropped or [`Client::close`]d.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a new Unosend client with default settings.
    ///
    /// Fails with [`Error::MissingApiKey`] when `api_key` is empty. No network
    /// call is made.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::Client;
    /// # fn main() -> Result<(), unosend::Error> {
    /// let client = Client::new("un_live_xxx")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Email operations.
    pub const fn emails(&self) -> Emails<'_> {
        Emails::new(self)
    }

    /// Sending domain operations.
    pub const fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    /// Audience operations.
    pub const fn audiences(&self) -> Audiences<'_> {
        Audiences::new(self)
    }

    /// Contact operations.
    pub const fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// Release the underlying connection pool.
    ///
    /// Dropping the client has the same effect; this only makes the release
    /// point explicit.
    pub fn close(self) {
        debug!(base_url = %self.base_url, "closing unosend client");
    }

    /// Send one request to the API and return its JSON payload.
    ///
    /// `path` is relative to the base URL (e.g. `/domains/d_123/verify`). The
    /// body, when given, is sent as JSON. On success the response's `data`
    /// field is returned if present, otherwise the whole body.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::{Client, Method};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unosend::Error> {
    /// let client = Client::new("un_live_xxx")?;
    /// let raw = client.request::<()>(Method::GET, "/domains", None).await?;
    /// println!("{raw}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request_with_query::<B, [(&str, &str)]>(method, path, None, body)
            .await
    }

    /// Like [`Client::request`], with query parameters appended to the URL.
    pub(crate) async fn request_with_query<B, Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "sending unosend request");

        let mut builder = self.http.request(method.clone(), url);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        self.execute(builder, &method, path).await
    }

    async fn execute(&self, builder: RequestBuilder, method: &Method, path: &str) -> Result<Value> {
        let response = builder.send().await.inspect_err(|e| {
            warn!(%method, path, error = %e, "unosend request did not complete");
        })?;

        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "unosend response");

        let bytes = response.bytes().await.inspect_err(|e| {
            warn!(%method, path, error = %e, "failed to read unosend response body");
        })?;

        if !status.is_success() {
            let err = Error::from_response(status, &bytes);
            debug!(%method, path, status = status.as_u16(), code = %err.code(), "unosend API error");
            return Err(err);
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        let body: Value = serde_json::from_slice(&bytes).map_err(|source| Error::Json {
            status_code: status.as_u16(),
            source,
        })?;

        Ok(unwrap_data(body))
    }
}

/// Responses are usually wrapped as `{"data": ...}`; some endpoints are not.
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(null) => {
                map.insert("data".to_string(), null);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Builder for configuring a Unosend client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL `https://api.unosend.com/v1`
    /// - 30 second timeout
    /// - `unosend-rust/<version>` user agent
    /// - No proxy
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: None,
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a mock server. A trailing `/` is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client.
    ///
    /// Fails fast on an empty API key; no request is sent here.
    ///
    /// # Examples
    /// ```no_run
    /// # use unosend::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), unosend::Error> {
    /// let client = Client::builder("un_live_xxx")
    ///     .timeout(Duration::from_secs(10))
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(self.headers()?)
            .timeout(self.timeout);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
            proxy: self.proxy,
        })
    }

    /// Headers attached to every request.
    fn headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(Client::new(""), Err(Error::MissingApiKey)));
        assert!(matches!(Client::new("   "), Err(Error::MissingApiKey)));
    }

    #[test]
    fn api_key_must_be_a_valid_header() {
        assert!(matches!(
            Client::new("bad\nkey"),
            Err(Error::InvalidHeader(_))
        ));
    }

    #[test]
    fn builder_defaults() {
        let client = Client::new("key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.proxy(), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::builder("key")
            .base_url("http://localhost:8080/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn unwrap_data_prefers_data_field() {
        assert_eq!(
            unwrap_data(json!({"data": {"id": "e1"}})),
            json!({"id": "e1"})
        );
        assert_eq!(unwrap_data(json!({"id": "e1"})), json!({"id": "e1"}));
        assert_eq!(unwrap_data(json!([1, 2])), json!([1, 2]));
        assert_eq!(
            unwrap_data(json!({"data": null, "ok": true})),
            json!({"data": null, "ok": true})
        );
    }
}
