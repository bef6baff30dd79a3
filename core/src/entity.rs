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

//! Decoded resource identity
//!
//! Every resource handle embeds an [`Entity`]: identity properties common
//! to all Redfish resources, the transport that fetched it and the exact
//! bytes it was decoded from. The transport is attached by the fetch
//! primitives after decoding, never by serde.

use crate::bmc::Response;
use crate::error::Error;
use crate::error::MessageInfo;
use crate::Bmc;
use crate::ODataETag;
use crate::ODataId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Resource handle decoded through an interposed wire record.
///
/// `Wire` receives every property of the payload except the identity
/// properties consumed by [`Entity`]. `assemble` copies the public
/// portion and fills hidden slots (links, actions) from it.
pub trait Resource<B: Bmc>: Sized {
    /// Interposed decode record.
    type Wire: DeserializeOwned;

    /// Build the handle.
    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self;

    /// Identity of the handle.
    fn entity(&self) -> &Entity<B>;
}

/// Identity properties as they appear on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct EntityWire {
    #[serde(rename = "@odata.id", default)]
    odata_id: ODataId,
    #[serde(rename = "@odata.type")]
    odata_type: Option<String>,
    #[serde(rename = "@odata.context")]
    odata_context: Option<String>,
    #[serde(rename = "@odata.etag")]
    odata_etag: Option<ODataETag>,
    #[serde(rename = "Id", default)]
    id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "@Message.ExtendedInfo", default)]
    extended_info: Vec<MessageInfo>,
}

/// Full payload split into identity and resource specific parts.
#[derive(Deserialize)]
pub(crate) struct Envelope<W> {
    #[serde(flatten)]
    pub entity: EntityWire,
    #[serde(flatten)]
    pub wire: W,
}

impl<W> Envelope<W> {
    pub fn entity_is_anonymous(&self) -> bool {
        self.entity.odata_id.is_empty()
    }
}

/// Identity of a decoded resource.
pub struct Entity<B: Bmc> {
    bmc: Arc<B>,
    odata_id: ODataId,
    odata_type: Option<String>,
    odata_context: Option<String>,
    etag: Option<ODataETag>,
    id: String,
    name: String,
    description: Option<String>,
    extended_info: Vec<MessageInfo>,
    strip_etag_quotes: bool,
    disable_etag_match: bool,
    raw: Arc<[u8]>,
}

impl<B: Bmc> Entity<B> {
    pub(crate) fn attach(
        bmc: Arc<B>,
        requested: &ODataId,
        wire: EntityWire,
        header_etag: Option<ODataETag>,
        raw: Vec<u8>,
    ) -> Self {
        let odata_id = if wire.odata_id.is_empty() {
            requested.clone()
        } else {
            wire.odata_id
        };
        Self {
            bmc,
            odata_id,
            odata_type: wire.odata_type,
            odata_context: wire.odata_context,
            etag: wire
                .odata_etag
                .filter(|etag| !etag.as_str().is_empty())
                .or(header_etag),
            id: wire.id,
            name: wire.name,
            description: wire.description,
            extended_info: wire.extended_info,
            strip_etag_quotes: false,
            disable_etag_match: false,
            raw: raw.into(),
        }
    }

    /// Transport that fetched this resource.
    #[must_use]
    pub fn bmc(&self) -> &Arc<B> {
        &self.bmc
    }

    /// Self URI (`@odata.id`).
    #[must_use]
    pub const fn odata_id(&self) -> &ODataId {
        &self.odata_id
    }

    /// `@odata.type`, uninterpreted.
    #[must_use]
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    /// `@odata.context`, uninterpreted.
    #[must_use]
    pub fn odata_context(&self) -> Option<&str> {
        self.odata_context.as_deref()
    }

    /// Entity tag from `@odata.etag` or from the `ETag` response header.
    #[must_use]
    pub const fn etag(&self) -> Option<&ODataETag> {
        self.etag.as_ref()
    }

    /// `Id` property.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `Name` property.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Description` property.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Messages the service attached to the resource
    /// (`@Message.ExtendedInfo`).
    #[must_use]
    pub fn extended_info(&self) -> &[MessageInfo] {
        &self.extended_info
    }

    /// Send the entity tag without surrounding quotes in `If-Match`.
    ///
    /// For services that only match unquoted tags.
    pub fn strip_etag_quotes(&mut self, strip: bool) {
        self.strip_etag_quotes = strip;
    }

    /// Never send `If-Match` from this handle.
    ///
    /// For services that reject conditional requests they advertised
    /// tags for.
    pub fn disable_etag_match(&mut self, disable: bool) {
        self.disable_etag_match = disable;
    }

    #[must_use]
    pub const fn is_etag_match_disabled(&self) -> bool {
        self.disable_etag_match
    }

    /// Tag sent as `If-Match` when patching `uri`.
    fn if_match(&self, uri: &str) -> Option<ODataETag> {
        if self.disable_etag_match || uri != self.odata_id.as_str() {
            return None;
        }
        let etag = self.etag.as_ref()?;
        if self.strip_etag_quotes {
            Some(etag.as_str().trim_matches('"').into())
        } else {
            Some(etag.clone())
        }
    }

    /// Bytes this resource was decoded from.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// POST `body` to `uri` through the attached transport.
    ///
    /// A body serializing to `null` is sent as an empty request body.
    ///
    /// # Errors
    ///
    /// Transport error, [`Error::Remote`] for non-2xx responses or
    /// [`Error::Json`] if `body` cannot be serialized.
    pub async fn post<P: Serialize + ?Sized>(
        &self,
        uri: &str,
        body: &P,
    ) -> Result<Response, Error<B>> {
        let body = serde_json::to_value(body).map_err(Error::Json)?;
        debug!("POST {uri}");
        let response = self.bmc.post(uri, &body).await.map_err(Error::Bmc)?;
        success(uri, response)
    }

    /// PATCH `uri` with `diff` through the attached transport.
    ///
    /// `If-Match` is sent when `uri` is this resource, its entity tag
    /// is known and matching was not disabled with
    /// [`Entity::disable_etag_match`].
    ///
    /// # Errors
    ///
    /// Transport error or [`Error::Remote`] for non-2xx responses.
    pub async fn patch(&self, uri: &str, diff: &JsonValue) -> Result<Response, Error<B>> {
        let etag = self.if_match(uri);
        debug!("PATCH {uri} if-match={etag:?}");
        let response = self
            .bmc
            .patch(uri, etag.as_ref(), diff)
            .await
            .map_err(Error::Bmc)?;
        success(uri, response)
    }

    /// DELETE this resource.
    ///
    /// # Errors
    ///
    /// Transport error or [`Error::Remote`] for non-2xx responses.
    pub async fn delete(&self) -> Result<Response, Error<B>> {
        crate::fetch::delete_object(&self.bmc, &self.odata_id).await
    }
}

pub(crate) fn success<B: Bmc>(uri: &str, response: Response) -> Result<Response, Error<B>> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::remote(uri, &response))
    }
}

impl<B: Bmc> Clone for Entity<B> {
    fn clone(&self) -> Self {
        Self {
            bmc: Arc::clone(&self.bmc),
            odata_id: self.odata_id.clone(),
            odata_type: self.odata_type.clone(),
            odata_context: self.odata_context.clone(),
            etag: self.etag.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            extended_info: self.extended_info.clone(),
            strip_etag_quotes: self.strip_etag_quotes,
            disable_etag_match: self.disable_etag_match,
            raw: Arc::clone(&self.raw),
        }
    }
}

impl<B: Bmc> fmt::Debug for Entity<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("odata_id", &self.odata_id)
            .field("odata_type", &self.odata_type)
            .field("etag", &self.etag)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("raw_len", &self.raw.len())
            .finish_non_exhaustive()
    }
}
