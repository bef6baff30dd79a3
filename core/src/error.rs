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

//! Error taxonomy
//!
//! Every operation returns at most one [`Error`] kind:
//!
//! | Kind | Variant |
//! |------|---------|
//! | no response from the BMC | [`Error::Bmc`] |
//! | non-2xx response | [`Error::Remote`] |
//! | payload does not match the resource shape | [`Error::Decode`] |
//! | action not advertised by the resource | [`Error::UnsupportedAction`] |
//! | action parameter outside the advertised values | [`Error::InvalidParameter`] |
//! | some members of a batch failed | [`Error::Collection`] |

use crate::Bmc;
use crate::ODataId;
use crate::Response;
use http::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Errors returned by the typed Redfish client.
pub enum Error<B: Bmc> {
    /// Transport failure: no response was received.
    Bmc(B::Error),
    /// The BMC answered with a non-2xx status.
    Remote(RemoteError),
    /// The response body could not be decoded.
    Decode(DecodeError),
    /// Caller supplied data could not be serialized.
    Json(serde_json::Error),
    /// The resource does not advertise the action.
    UnsupportedAction {
        /// Action name, e.g. `Chassis.Reset`.
        action: String,
    },
    /// Parameter value is not in the list advertised by the BMC.
    InvalidParameter {
        /// Action name, e.g. `Chassis.Reset`.
        action: String,
        /// Parameter name, e.g. `ResetType`.
        parameter: String,
        /// Rejected value.
        value: String,
        /// Values the BMC accepts.
        allowed: Vec<String>,
    },
    /// Some members of a batch could not be retrieved.
    Collection(CollectionError<B>),
}

impl<B: Bmc> Error<B> {
    /// Turn a non-2xx response into [`Error::Remote`].
    #[must_use]
    pub fn remote(uri: &str, response: &Response) -> Self {
        Self::Remote(RemoteError::new(uri, response))
    }

    /// HTTP status of a remote error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote(err) => Some(err.status),
            _ => None,
        }
    }
}

impl<B: Bmc> Display for Error<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bmc(err) => write!(f, "BMC error: {err}"),
            Self::Remote(err) => write!(f, "remote error: {err}"),
            Self::Decode(err) => write!(f, "decode error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::UnsupportedAction { action } => {
                write!(f, "action {action} is not supported by the resource")
            }
            Self::InvalidParameter {
                action,
                parameter,
                value,
                allowed,
            } => write!(
                f,
                "{action}: invalid {parameter} value {value:?}; allowed: {}",
                allowed.join(", ")
            ),
            Self::Collection(err) => Display::fmt(err, f),
        }
    }
}

impl<B: Bmc> Debug for Error<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bmc(err) => f.debug_tuple("Bmc").field(err).finish(),
            Self::Remote(err) => f.debug_tuple("Remote").field(err).finish(),
            Self::Decode(err) => f.debug_tuple("Decode").field(err).finish(),
            Self::Json(err) => f.debug_tuple("Json").field(err).finish(),
            Self::UnsupportedAction { action } => f
                .debug_struct("UnsupportedAction")
                .field("action", action)
                .finish(),
            Self::InvalidParameter {
                action,
                parameter,
                value,
                allowed,
            } => f
                .debug_struct("InvalidParameter")
                .field("action", action)
                .field("parameter", parameter)
                .field("value", value)
                .field("allowed", allowed)
                .finish(),
            Self::Collection(err) => f.debug_tuple("Collection").field(err).finish(),
        }
    }
}

impl<B: Bmc> StdError for Error<B> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Bmc(err) => Some(err),
            Self::Remote(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Collection(err) => Some(err),
            Self::UnsupportedAction { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Non-2xx response.
#[derive(Debug, Clone)]
pub struct RemoteError {
    /// Requested URI.
    pub uri: String,
    /// Response status.
    pub status: StatusCode,
    /// Response body (lossy UTF-8).
    pub body: String,
    /// Redfish error object when the body carries one.
    pub redfish: Option<RedfishError>,
}

impl RemoteError {
    /// Build from the failed response.
    #[must_use]
    pub fn new(uri: &str, response: &Response) -> Self {
        let redfish = serde_json::from_slice::<RedfishErrorEnvelope>(&response.body)
            .ok()
            .map(|v| v.error);
        Self {
            uri: uri.to_string(),
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
            redfish,
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.status.as_u16(), self.body)
    }
}

impl StdError for RemoteError {}

#[derive(Deserialize)]
struct RedfishErrorEnvelope {
    error: RedfishError,
}

/// Redfish error object (`{"error": {...}}`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RedfishError {
    /// Message registry identifier of the main error.
    #[serde(default)]
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Details.
    #[serde(rename = "@Message.ExtendedInfo", default)]
    pub extended_info: Vec<MessageInfo>,
}

/// Entry of `@Message.ExtendedInfo`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MessageInfo {
    #[serde(rename = "MessageId", default)]
    pub message_id: String,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "MessageArgs", default)]
    pub message_args: Vec<String>,
    #[serde(rename = "Severity")]
    pub severity: Option<String>,
    #[serde(rename = "Resolution")]
    pub resolution: Option<String>,
}

/// Response body did not match the expected shape.
#[derive(Debug)]
pub struct DecodeError {
    /// URI the body came from.
    pub uri: String,
    /// JSON path of the offending field (`.` for the document itself).
    pub path: String,
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(uri: &str, err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self {
            uri: uri.to_string(),
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }

    pub(crate) fn custom(uri: &str, path: &str, msg: impl Display) -> Self {
        Self {
            uri: uri.to_string(),
            path: path.to_string(),
            source: <serde_json::Error as serde::de::Error>::custom(msg),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} at {}: {}", self.uri, self.path, self.source)
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

/// Failures of a batch fetch, keyed by member URI.
pub struct CollectionError<B: Bmc> {
    /// Failed member URI and its error.
    pub failures: BTreeMap<ODataId, Error<B>>,
}

impl<B: Bmc> CollectionError<B> {
    pub(crate) const fn new() -> Self {
        Self {
            failures: BTreeMap::new(),
        }
    }

    /// True when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failed members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

impl<B: Bmc> Display for CollectionError<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "failed to retrieve some items: ")?;
        for (n, (uri, err)) in self.failures.iter().enumerate() {
            if n > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{uri}: {err}")?;
        }
        Ok(())
    }
}

impl<B: Bmc> Debug for CollectionError<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionError")
            .field("failures", &self.failures)
            .finish()
    }
}

impl<B: Bmc> StdError for CollectionError<B> {}
