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

//! Canned responses for the mock BMC.

use http::header;
use http::HeaderValue;
use http::Method;
use http::StatusCode;
use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;
use typed_redfish_core::Response;

/// Request a canned response answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URI as passed to the transport.
    pub uri: String,
}

/// Canned response for one request.
#[derive(Debug)]
pub struct Expect<E> {
    pub request: ExpectedRequest,
    pub response: Result<Response, E>,
}

fn json_body(body: impl Display) -> Vec<u8> {
    let body = body.to_string();
    let _: JsonValue = from_str(&body).expect("invalid json");
    body.into_bytes()
}

impl<E> Expect<E> {
    /// Answer `method uri` with `status` and raw `body`.
    pub fn respond(method: Method, uri: impl Display, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Expect {
            request: ExpectedRequest {
                method,
                uri: uri.to_string(),
            },
            response: Ok(Response::new(
                StatusCode::from_u16(status).expect("valid status"),
                body.into(),
            )),
        }
    }

    /// Answer `GET uri` with `200` and JSON `response`.
    pub fn get(uri: impl Display, response: impl Display) -> Self {
        Self::respond(Method::GET, uri, 200, json_body(response))
    }

    /// Answer `GET uri` with `200`, JSON `response` and an `ETag` header.
    pub fn get_with_etag(uri: impl Display, etag: &str, response: impl Display) -> Self {
        let mut exp = Self::get(uri, response);
        if let Ok(resp) = exp.response.as_mut() {
            resp.headers
                .insert(header::ETAG, HeaderValue::from_str(etag).expect("valid etag"));
        }
        exp
    }

    /// Answer `POST uri` with `200` and JSON `response`.
    pub fn post(uri: impl Display, response: impl Display) -> Self {
        Self::respond(Method::POST, uri, 200, json_body(response))
    }

    /// Answer `PATCH uri` with `200` and JSON `response`.
    pub fn patch(uri: impl Display, response: impl Display) -> Self {
        Self::respond(Method::PATCH, uri, 200, json_body(response))
    }

    /// Fail `method uri` as if no response was received.
    pub fn failure(method: Method, uri: impl Display, err: E) -> Self {
        Expect {
            request: ExpectedRequest {
                method,
                uri: uri.to_string(),
            },
            response: Err(err),
        }
    }

    /// Add a response header.
    #[must_use]
    pub fn with_header(mut self, name: header::HeaderName, value: &str) -> Self {
        if let Ok(resp) = self.response.as_mut() {
            resp.headers
                .insert(name, HeaderValue::from_str(value).expect("valid header"));
        }
        self
    }
}
