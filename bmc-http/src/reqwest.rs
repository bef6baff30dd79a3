// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! [`HttpClient`] backed by `reqwest`.

use crate::BmcCredentials;
use crate::HttpClient;
use crate::InvalidUrlError;
use http::header;
use http::HeaderMap;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;
use typed_redfish_core::ODataETag;
use typed_redfish_core::Response;
use url::Url;

/// Longest body prefix written to the debug log.
const LOGGED_BODY_LIMIT: usize = 1500;

/// Transport failure: no HTTP response was received.
#[derive(Debug)]
pub enum BmcError {
    /// Connection, TLS, timeout or body read failure.
    ReqwestError(reqwest::Error),
    /// URI that cannot be turned into a request URL.
    InvalidUrl {
        uri: String,
        source: url::ParseError,
    },
}

impl From<reqwest::Error> for BmcError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(value)
    }
}

impl InvalidUrlError for BmcError {
    fn invalid_url(uri: &str, err: url::ParseError) -> Self {
        Self::InvalidUrl {
            uri: uri.to_string(),
            source: err,
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::fmt::Display for BmcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReqwestError(e) => write!(f, "HTTP client error: {e}"),
            Self::InvalidUrl { uri, source } => write!(f, "invalid URI {uri:?}: {source}"),
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::error::Error for BmcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReqwestError(e) => Some(e),
            Self::InvalidUrl { source, .. } => Some(source),
        }
    }
}

/// Settings of the underlying `reqwest` client.
///
/// ```rust
/// use typed_redfish_bmc_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(30))
///     .user_agent("inventory/2.1")
///     .accept_invalid_certs(true);
/// assert!(params.accept_invalid_certs);
/// ```
#[derive(Debug, Clone)]
pub struct ClientParams {
    /// Whole-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
    /// TCP connect timeout.
    pub connect_timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
    /// Skip certificate verification. BMCs commonly ship self-signed
    /// certificates.
    pub accept_invalid_certs: bool,
    /// Redirects followed before giving up.
    pub max_redirects: Option<usize>,
    /// TCP keep-alive interval.
    pub tcp_keepalive: Option<Duration>,
    /// Idle pooled connections are closed after this long.
    pub pool_idle_timeout: Option<Duration>,
    /// Idle connections kept per host.
    pub pool_max_idle_per_host: Option<usize>,
    /// Headers sent with every request of this client.
    pub default_headers: Option<HeaderMap>,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(120)),
            connect_timeout: Some(Duration::from_secs(5)),
            user_agent: Some("typed-redfish/v1".to_string()),
            accept_invalid_certs: false,
            max_redirects: Some(10),
            tcp_keepalive: Some(Duration::from_secs(60)),
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: Some(1),
            default_headers: None,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = Some(max);
        self
    }

    #[must_use]
    pub const fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    #[must_use]
    pub fn default_headers(mut self, default_headers: HeaderMap) -> Self {
        self.default_headers = Some(default_headers);
        self
    }
}

/// [`HttpClient`] implementation using `reqwest` with rustls.
///
/// ```rust,no_run
/// use typed_redfish_bmc_http::reqwest::Client;
/// use typed_redfish_bmc_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::with_params(ClientParams::new().timeout(Duration::from_secs(60)))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

#[allow(clippy::missing_errors_doc)]
impl Client {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_params(ClientParams::default())
    }

    pub fn with_params(params: ClientParams) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(params.accept_invalid_certs);

        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = params.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = params.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(max_redirects) = params.max_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::limited(max_redirects));
        }
        if let Some(keepalive) = params.tcp_keepalive {
            builder = builder.tcp_keepalive(keepalive);
        }
        if let Some(idle_timeout) = params.pool_idle_timeout {
            builder = builder.pool_idle_timeout(idle_timeout);
        }
        if let Some(max_idle) = params.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
        if let Some(default_headers) = params.default_headers {
            builder = builder.default_headers(default_headers);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Use an already configured `reqwest` client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn request(
        &self,
        method: reqwest::Method,
        url: Url,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&credentials.username, Some(credentials.password()))
            .headers(custom_headers.clone())
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Response, BmcError> {
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        debug!(
            "RX {status} {}",
            truncate(&String::from_utf8_lossy(&body), LOGGED_BODY_LIMIT)
        );
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn truncate(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

impl HttpClient for Client {
    type Error = BmcError;

    async fn get(
        &self,
        url: Url,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> Result<Response, Self::Error> {
        let request = self.request(reqwest::Method::GET, url, credentials, custom_headers);
        Self::send(request).await
    }

    async fn post(
        &self,
        url: Url,
        body: Option<&JsonValue>,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> Result<Response, Self::Error> {
        let mut request = self.request(reqwest::Method::POST, url, credentials, custom_headers);
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::send(request).await
    }

    async fn patch(
        &self,
        url: Url,
        etag: Option<&ODataETag>,
        body: &JsonValue,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> Result<Response, Self::Error> {
        let mut request = self.request(reqwest::Method::PATCH, url, credentials, custom_headers);
        if let Some(etag) = etag {
            request = request.header(header::IF_MATCH, etag.as_str());
        }
        Self::send(request.json(body)).await
    }

    async fn delete(
        &self,
        url: Url,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> Result<Response, Self::Error> {
        let request = self.request(reqwest::Method::DELETE, url, credentials, custom_headers);
        Self::send(request).await
    }
}
