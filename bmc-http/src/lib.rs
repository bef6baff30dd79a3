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

//! HTTP transport for typed-redfish
//!
//! [`HttpBmc`] implements the core transport trait on top of an
//! [`HttpClient`]. It owns the service endpoint, the credentials and the
//! headers added to every request, and resolves resource URIs:
//!
//! - `/redfish/v1/...` is joined with the endpoint (query strings such as
//!   the ones in `Members@odata.nextLink` are preserved);
//! - `https://...` is used as-is.
//!
//! Responses are returned whatever their status; the core decides what a
//! non-2xx status means. The transport does not retry.

pub mod credentials;

#[cfg(feature = "reqwest")]
pub mod reqwest;

use http::HeaderMap;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::future::Future;
use tracing::trace;
use typed_redfish_core::Bmc;
use typed_redfish_core::ODataETag;
use typed_redfish_core::Response;
use url::Url;

#[doc(inline)]
pub use credentials::BmcCredentials;

/// Raw HTTP operations used by [`HttpBmc`].
pub trait HttpClient: Send + Sync {
    type Error: StdError + Send + Sync + 'static + InvalidUrlError;

    /// Perform an HTTP GET request.
    fn get(
        &self,
        url: Url,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;

    /// Perform an HTTP POST request. `None` sends no body.
    fn post(
        &self,
        url: Url,
        body: Option<&JsonValue>,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;

    /// Perform an HTTP PATCH request, conditional when `etag` is set.
    fn patch(
        &self,
        url: Url,
        etag: Option<&ODataETag>,
        body: &JsonValue,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;

    /// Perform an HTTP DELETE request.
    fn delete(
        &self,
        url: Url,
        credentials: &BmcCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;
}

/// Errors that can report a URI that does not form a valid URL.
pub trait InvalidUrlError {
    /// Create the error for `uri`.
    fn invalid_url(uri: &str, err: url::ParseError) -> Self;
}

/// HTTP-based BMC implementation that wraps an [`HttpClient`].
///
/// ```rust,no_run
/// use typed_redfish_bmc_http::BmcCredentials;
/// use typed_redfish_bmc_http::HttpBmc;
/// use typed_redfish_bmc_http::reqwest::Client;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = BmcCredentials::new("admin".to_string(), "password".to_string());
/// let endpoint = Url::parse("https://192.168.1.100")?;
/// let bmc = HttpBmc::new(Client::new()?, endpoint, credentials);
/// # Ok(())
/// # }
/// ```
pub struct HttpBmc<C: HttpClient> {
    client: C,
    redfish_endpoint: RedfishEndpoint,
    credentials: BmcCredentials,
    custom_headers: HeaderMap,
}

impl<C: HttpClient> HttpBmc<C> {
    /// Create a new HTTP-based BMC client.
    pub fn new(client: C, redfish_endpoint: Url, credentials: BmcCredentials) -> Self {
        Self::with_custom_headers(client, redfish_endpoint, credentials, HeaderMap::new())
    }

    /// Create a new HTTP-based BMC client that adds `custom_headers` to
    /// every request (vendor headers, `X-Auth-Token`, ...).
    pub fn with_custom_headers(
        client: C,
        redfish_endpoint: Url,
        credentials: BmcCredentials,
        custom_headers: HeaderMap,
    ) -> Self {
        Self {
            client,
            redfish_endpoint: RedfishEndpoint::from(redfish_endpoint),
            credentials,
            custom_headers,
        }
    }

    /// Endpoint requests are resolved against.
    pub const fn endpoint(&self) -> &RedfishEndpoint {
        &self.redfish_endpoint
    }

    fn url(&self, uri: &str) -> Result<Url, C::Error> {
        self.redfish_endpoint
            .resolve(uri)
            .map_err(|err| C::Error::invalid_url(uri, err))
    }
}

/// Base URL of a Redfish service.
#[derive(Debug, Clone)]
pub struct RedfishEndpoint {
    base_url: Url,
}

impl RedfishEndpoint {
    /// Create a new `RedfishEndpoint` from a base URL
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Convert a path to a full Redfish endpoint URL
    #[must_use]
    pub fn with_path(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    /// Convert a path to a full Redfish endpoint URL with query parameters
    #[must_use]
    pub fn with_path_and_query(&self, path: &str, query: &str) -> Url {
        let mut url = self.with_path(path);
        url.set_query(Some(query));
        url
    }

    /// Resolve a resource URI: service relative when it starts with `/`,
    /// absolute otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is neither a path nor an absolute URL.
    pub fn resolve(&self, uri: &str) -> Result<Url, url::ParseError> {
        if uri.starts_with('/') {
            Ok(match uri.split_once('?') {
                Some((path, query)) => self.with_path_and_query(path, query),
                None => self.with_path(uri),
            })
        } else {
            Url::parse(uri)
        }
    }
}

impl From<Url> for RedfishEndpoint {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl From<&RedfishEndpoint> for Url {
    fn from(endpoint: &RedfishEndpoint) -> Self {
        endpoint.base_url.clone()
    }
}

impl<C: HttpClient + 'static> Bmc for HttpBmc<C> {
    type Error = C::Error;

    async fn get(&self, uri: &str) -> Result<Response, Self::Error> {
        let url = self.url(uri)?;
        trace!("GET {url}");
        self.client
            .get(url, &self.credentials, &self.custom_headers)
            .await
    }

    async fn post(&self, uri: &str, body: &JsonValue) -> Result<Response, Self::Error> {
        let url = self.url(uri)?;
        trace!("POST {url}");
        let body = (!body.is_null()).then_some(body);
        self.client
            .post(url, body, &self.credentials, &self.custom_headers)
            .await
    }

    async fn patch(
        &self,
        uri: &str,
        etag: Option<&ODataETag>,
        diff: &JsonValue,
    ) -> Result<Response, Self::Error> {
        let url = self.url(uri)?;
        trace!("PATCH {url}");
        self.client
            .patch(url, etag, diff, &self.credentials, &self.custom_headers)
            .await
    }

    async fn delete(&self, uri: &str) -> Result<Response, Self::Error> {
        let url = self.url(uri)?;
        trace!("DELETE {url}");
        self.client
            .delete(url, &self.credentials, &self.custom_headers)
            .await
    }
}
