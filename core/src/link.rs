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

//! Links to neighbour resources
//!
//! Redfish references another resource with an object that carries its
//! URI in `@odata.id`. Resources never hold neighbours in memory: a
//! [`Link`] is just that URI, and following it is an explicit fetch.
//!
//! - `{"@odata.id": "/redfish/v1/Chassis/1"}` decodes to that URI.
//! - Missing field, `null`, `{}` and `{"@odata.id": ""}` decode to the
//!   empty URI, which means the neighbour is absent on this server.
//! - Older services use `href` instead of `@odata.id`; it is accepted
//!   when `@odata.id` is not present.
//! - A [`LinkSet`] is an array of such objects. `<Field>@odata.count` is
//!   decoded by the owner record and attached with [`LinkSet::with_count`].

use crate::ODataId;
use serde::de;
use serde::de::Deserializer;
use serde::ser::SerializeSeq;
use serde::ser::SerializeStruct;
use serde::ser::Serializer;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Reference to a single neighbour resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Link(ODataId);

impl Link {
    /// Link to `uri`.
    #[must_use]
    pub const fn new(uri: ODataId) -> Self {
        Self(uri)
    }

    /// Neighbour URI. Empty when the neighbour is absent.
    #[must_use]
    pub const fn uri(&self) -> &ODataId {
        &self.0
    }

    /// True when the neighbour is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Some(uri)` when the neighbour is present.
    #[must_use]
    pub fn present(&self) -> Option<&ODataId> {
        (!self.is_empty()).then_some(&self.0)
    }

    fn from_json(v: &JsonValue) -> Self {
        v.get("@odata.id")
            .or_else(|| v.get("href"))
            .and_then(JsonValue::as_str)
            .map(|uri| Self(uri.into()))
            .unwrap_or_default()
    }
}

impl From<ODataId> for Link {
    fn from(uri: ODataId) -> Self {
        Self(uri)
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(|v| Self::from_json(&v))
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Link", 1)?;
        s.serialize_field("@odata.id", &self.0)?;
        s.end()
    }
}

/// Ordered references to neighbour resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    uris: Vec<ODataId>,
    count: Option<usize>,
}

impl LinkSet {
    /// Link set over `uris` with no advertised count.
    #[must_use]
    pub const fn new(uris: Vec<ODataId>) -> Self {
        Self { uris, count: None }
    }

    /// Attach the advertised `@odata.count`.
    #[must_use]
    pub fn with_count(mut self, count: Option<usize>) -> Self {
        self.count = count;
        self
    }

    /// Member URIs in server order.
    #[must_use]
    pub fn uris(&self) -> &[ODataId] {
        &self.uris
    }

    /// Consume and return member URIs.
    #[must_use]
    pub fn into_uris(self) -> Vec<ODataId> {
        self.uris
    }

    /// Number of decoded links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// True when no links were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    /// Count advertised by the server. Advisory only: [`Self::uris`] is
    /// what was actually sent.
    #[must_use]
    pub const fn advertised_count(&self) -> Option<usize> {
        self.count
    }
}

impl<'de> Deserialize<'de> for LinkSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Null => Ok(Self::default()),
            JsonValue::Array(items) => Ok(Self::new(
                items
                    .iter()
                    .map(Link::from_json)
                    .filter(|link| !link.is_empty())
                    .map(|link| link.0)
                    .collect(),
            )),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"array of links",
            )),
        }
    }
}

impl Serialize for LinkSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.uris.len()))?;
        for uri in &self.uris {
            seq.serialize_element(&Link::new(uri.clone()))?;
        }
        seq.end()
    }
}

fn unexpected(v: &JsonValue) -> de::Unexpected<'_> {
    match v {
        JsonValue::Bool(b) => de::Unexpected::Bool(*b),
        JsonValue::String(s) => de::Unexpected::Str(s),
        JsonValue::Object(_) => de::Unexpected::Map,
        JsonValue::Number(_) => de::Unexpected::Other("number"),
        JsonValue::Null | JsonValue::Array(_) => de::Unexpected::Other("value"),
    }
}
