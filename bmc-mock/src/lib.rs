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

//! Captured-call BMC
//!
//! Implements the transport trait without I/O. Every request is recorded
//! as a [`Call`] (method, URI, JSON payload, request headers) so tests can
//! assert on exactly what would have been sent. Responses come from
//! [`Expect`] entries: the first entry matching method and URI answers
//! the request and is consumed. A `POST`, `PATCH` or `DELETE` with no
//! matching entry succeeds with `204 No Content`. A `GET` with no
//! matching entry fails.

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;

use http::header;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use typed_redfish_core::Bmc as TypedRedfishBmc;
use typed_redfish_core::ODataETag;
use typed_redfish_core::Response;

#[derive(Debug)]
pub enum Error {
    ErrorResponse(Box<dyn StdError + Send + Sync>),
    UnexpectedGet(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ErrorResponse(err) => write!(f, "response: {err}"),
            Self::UnexpectedGet(uri) => write!(f, "unexpected get: {uri}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::ErrorResponse(err) => Some(err.as_ref()),
            Self::UnexpectedGet(_) => None,
        }
    }
}

/// Lock ignoring poisoning. Every critical section leaves the queues
/// consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Request recorded by the mock.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub uri: String,
    /// JSON body. `None` when no body was sent.
    pub payload: Option<JsonValue>,
    pub headers: HeaderMap,
}

impl Call {
    /// Payload rendered as JSON text (empty when there is no body).
    #[must_use]
    pub fn payload_string(&self) -> String {
        self.payload
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

pub struct Bmc<E> {
    expect: Mutex<VecDeque<Expect<E>>>,
    calls: Mutex<Vec<Call>>,
}

impl<E> Default for Bmc<E> {
    fn default() -> Self {
        Self {
            expect: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<E> Bmc<E> {
    /// Queue a canned response.
    pub fn expect(&self, exp: Expect<E>) {
        lock(&self.expect).push_back(exp);
    }

    /// Everything requested so far.
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    /// Requests with the given method.
    pub fn calls_with(&self, method: &Method) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == *method)
            .collect()
    }

    /// Forget recorded requests.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Canned responses not consumed yet.
    pub fn pending(&self) -> usize {
        lock(&self.expect).len()
    }

    pub fn debug_expect(&self) {
        let expect: &VecDeque<Expect<E>> = &lock(&self.expect);
        println!("Expectations (total: {})", expect.len());
        for v in expect {
            println!("{:#?}", v.request);
        }
    }
}

impl<E> Bmc<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn record(&self, call: Call) -> Option<Result<Response, E>> {
        let canned = {
            let mut expect = lock(&self.expect);
            expect
                .iter()
                .position(|exp| exp.request.method == call.method && exp.request.uri == call.uri)
                .and_then(|pos| expect.remove(pos))
                .map(|exp| exp.response)
        };
        lock(&self.calls).push(call);
        canned
    }

    fn answer(&self, call: Call) -> Result<Response, Error> {
        let method = call.method.clone();
        let uri = call.uri.clone();
        match self.record(call) {
            Some(Ok(response)) => Ok(response),
            Some(Err(err)) => Err(Error::ErrorResponse(Box::new(err))),
            None if method == Method::GET => Err(Error::UnexpectedGet(uri)),
            None => Ok(Response::no_content()),
        }
    }
}

fn body(value: &JsonValue) -> Option<JsonValue> {
    (!value.is_null()).then(|| value.clone())
}

impl<E> TypedRedfishBmc for Bmc<E>
where
    E: StdError + Send + Sync + 'static,
{
    type Error = Error;

    async fn get(&self, uri: &str) -> Result<Response, Self::Error> {
        self.answer(Call {
            method: Method::GET,
            uri: uri.to_string(),
            payload: None,
            headers: HeaderMap::new(),
        })
    }

    async fn post(&self, uri: &str, payload: &JsonValue) -> Result<Response, Self::Error> {
        self.answer(Call {
            method: Method::POST,
            uri: uri.to_string(),
            payload: body(payload),
            headers: HeaderMap::new(),
        })
    }

    async fn patch(
        &self,
        uri: &str,
        etag: Option<&ODataETag>,
        diff: &JsonValue,
    ) -> Result<Response, Self::Error> {
        let mut headers = HeaderMap::new();
        if let Some(value) = etag.and_then(|etag| HeaderValue::from_str(etag.as_str()).ok()) {
            headers.insert(header::IF_MATCH, value);
        }
        self.answer(Call {
            method: Method::PATCH,
            uri: uri.to_string(),
            payload: body(diff),
            headers,
        })
    }

    async fn delete(&self, uri: &str) -> Result<Response, Self::Error> {
        self.answer(Call {
            method: Method::DELETE,
            uri: uri.to_string(),
            payload: None,
            headers: HeaderMap::new(),
        })
    }
}
