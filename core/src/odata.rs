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

//! OData identifiers and opaque payloads
//!
//! - [`ODataId`]: value of `@odata.id`, a resource URI. The empty id
//!   means "no such resource on this server".
//! - [`ODataETag`]: value of `@odata.etag` or of the `ETag` header.
//! - [`ODataType`]: parsed view of `@odata.type`. Decoded, never
//!   interpreted by the core.
//! - [`Oem`]: vendor extension payload kept as-is.
//!
//! ```rust
//! use typed_redfish_core::ODataId;
//!
//! let root = ODataId::service_root();
//! assert_eq!(root.to_string(), "/redfish/v1");
//! assert!(ODataId::default().is_empty());
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Type for `@odata.id` identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// Redfish service root id.
    #[must_use]
    pub fn service_root() -> Self {
        Self("/redfish/v1".into())
    }

    /// Identifier as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier does not point anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ODataId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Type for `@odata.etag` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ODataETag(String);

impl ODataETag {
    /// Entity tag as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ODataETag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ODataETag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ODataETag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Type for retrieving `@odata.type` from a JSON payload.
#[derive(Debug, PartialEq, Eq)]
pub struct ODataType<'a> {
    /// Namespace of the data type. For example: `["Chassis", "v1_22_0"]`.
    pub namespace: Vec<&'a str>,
    /// Name of the type. For example "Chassis".
    pub type_name: &'a str,
}

impl<'a> ODataType<'a> {
    /// Parse `#<Namespace>.<Version>.<Name>` form.
    #[must_use]
    pub fn parse(v: &'a str) -> Option<Self> {
        let v = v.strip_prefix('#')?;
        let mut all = v.split('.').collect::<Vec<_>>();
        all.pop().map(|type_name| ODataType {
            namespace: all,
            type_name,
        })
    }

    /// Get `@odata.type` from a JSON payload and parse it.
    #[must_use]
    pub fn parse_from(v: &'a JsonValue) -> Option<Self> {
        v.get("@odata.type")
            .and_then(JsonValue::as_str)
            .and_then(Self::parse)
    }
}

/// Vendor extension payload (`Oem`).
///
/// Kept as opaque JSON. Nothing in this workspace looks inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Oem(JsonValue);

impl Oem {
    /// Raw vendor payload.
    #[must_use]
    pub const fn as_json(&self) -> &JsonValue {
        &self.0
    }

    /// Consume and return the vendor payload.
    #[must_use]
    pub fn into_json(self) -> JsonValue {
        self.0
    }
}
