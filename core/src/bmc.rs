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

//! Transport abstraction
//!
//! [`Bmc`] is the minimal contract the rest of the workspace consumes from
//! whatever HTTP stack talks to the Baseboard Management Controller. It
//! moves JSON bodies and headers and nothing else: decoding, diffing and
//! action validation all happen above it.
//!
//! Contract for implementors:
//! - A URI that begins with `/` is resolved against the service endpoint
//!   the implementation was configured with.
//! - `post` with [`JsonValue::Null`] sends no body.
//! - `patch` adds `If-Match` when an entity tag is supplied.
//! - A response with any status code is a successful call and is
//!   returned as [`Response`]. `Err` is reserved for calls where no
//!   response was received (connection, TLS, timeout, cancellation).
//! - Implementations must not retry on behalf of the caller.

use crate::ODataETag;
use http::header;
use http::HeaderMap;
use http::StatusCode;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::future::Future;

/// BMC trait defines access to a Baseboard Management Controller using
/// the Redfish protocol.
pub trait Bmc: Send + Sync + 'static {
    /// Transport error: no response was received.
    type Error: StdError + Send + Sync + 'static;

    /// GET the resource at `uri`.
    fn get(&self, uri: &str) -> impl Future<Output = Result<Response, Self::Error>> + Send;

    /// POST `body` to `uri`.
    fn post(
        &self,
        uri: &str,
        body: &JsonValue,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;

    /// PATCH `uri` with a partial document.
    fn patch(
        &self,
        uri: &str,
        etag: Option<&ODataETag>,
        diff: &JsonValue,
    ) -> impl Future<Output = Result<Response, Self::Error>> + Send;

    /// DELETE the resource at `uri`.
    fn delete(&self, uri: &str) -> impl Future<Output = Result<Response, Self::Error>> + Send;
}

/// Response received from the BMC.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body, exactly as received.
    pub body: Vec<u8>,
}

impl Response {
    /// Response with the given status, no headers and the given body.
    #[must_use]
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// `204 No Content`.
    #[must_use]
    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, Vec::new())
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Value of the `ETag` header, if any.
    #[must_use]
    pub fn etag(&self) -> Option<ODataETag> {
        self.headers
            .get(header::ETAG)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(ODataETag::from)
    }

    /// Value of the `Location` header, if any. Servers use it to point
    /// at task monitors and newly created members.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}
