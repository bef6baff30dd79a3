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

//! Object and collection retrieval
//!
//! Generic primitives every resource type is fetched with:
//!
//! - [`get_object`]: GET, decode through the resource wire record, attach
//!   the transport.
//! - [`get_objects`]: sequential [`get_object`] over a list of URIs that
//!   keeps going after failures and reports them in a [`Batch`].
//! - [`get_collection`]: member URIs of a collection, following
//!   `Members@odata.nextLink` across pages.
//! - [`get_collection_objects`]: both of the above.
//!
//! Nothing is cached: every call goes to the BMC.

use crate::entity::success;
use crate::entity::Envelope;
use crate::error::CollectionError;
use crate::error::DecodeError;
use crate::Bmc;
use crate::Entity;
use crate::Error;
use crate::LinkSet;
use crate::ODataId;
use crate::Resource;
use crate::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use tracing::warn;

/// Upper bound on pages followed for one collection when the server
/// does not advertise a member count.
pub const MAX_COLLECTION_PAGES: usize = 10_000;

/// Fetch and decode the resource at `uri`.
///
/// The `ETag` response header is used as entity tag when the payload has
/// no `@odata.etag`.
///
/// # Errors
///
/// Transport error, [`Error::Remote`] for non-2xx responses and
/// [`Error::Decode`] when the payload does not match `T`.
pub async fn get_object<B, T>(bmc: &Arc<B>, uri: &ODataId) -> Result<T, Error<B>>
where
    B: Bmc,
    T: Resource<B>,
{
    debug!("GET {uri}");
    let response = bmc.get(uri.as_str()).await.map_err(Error::Bmc)?;
    let response = success(uri.as_str(), response)?;
    decode_object(bmc, uri, response)
}

/// Decode an already received response into `T`.
///
/// `uri` is used as self URI when the payload carries no `@odata.id`.
///
/// # Errors
///
/// [`Error::Decode`] when the payload does not match `T`.
pub fn decode_object<B, T>(bmc: &Arc<B>, uri: &ODataId, response: Response) -> Result<T, Error<B>>
where
    B: Bmc,
    T: Resource<B>,
{
    let header_etag = response.etag();
    let envelope: Envelope<T::Wire> = decode::<B, _>(uri.as_str(), &response.body)?;
    if envelope.entity_is_anonymous() && uri.is_empty() {
        return Err(Error::Decode(DecodeError::custom(
            uri.as_str(),
            "@odata.id",
            "resource has no @odata.id",
        )));
    }
    let entity = Entity::attach(
        Arc::clone(bmc),
        uri,
        envelope.entity,
        header_etag,
        response.body,
    );
    Ok(T::assemble(entity, envelope.wire))
}

pub(crate) fn decode<B: Bmc, T: DeserializeOwned>(uri: &str, body: &[u8]) -> Result<T, Error<B>> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let value =
        serde_path_to_error::deserialize(&mut de).map_err(|err| Error::Decode(DecodeError::new(uri, err)))?;
    de.end()
        .map_err(|err| Error::Decode(DecodeError::custom(uri, ".", err)))?;
    Ok(value)
}

/// Objects retrieved by a batch fetch.
///
/// Holds every member that was fetched, in request order, and the
/// failures of the others.
pub struct Batch<T, B: Bmc> {
    /// Successfully retrieved objects in request order.
    pub items: Vec<T>,
    /// Per-URI failures, `None` when every member was retrieved.
    pub failures: Option<CollectionError<B>>,
}

impl<T, B: Bmc> Batch<T, B> {
    /// Batch with no members.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            failures: None,
        }
    }

    /// True when every member was retrieved.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_none()
    }

    /// All members or the failures.
    ///
    /// # Errors
    ///
    /// [`Error::Collection`] when at least one member failed. The
    /// retrieved members are dropped.
    pub fn into_result(self) -> Result<Vec<T>, Error<B>> {
        match self.failures {
            Some(failures) => Err(Error::Collection(failures)),
            None => Ok(self.items),
        }
    }
}

impl<T: std::fmt::Debug, B: Bmc> std::fmt::Debug for Batch<T, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batch")
            .field("items", &self.items)
            .field("failures", &self.failures)
            .finish()
    }
}

/// Fetch every URI in order, one request at a time.
pub async fn get_objects<B, T>(bmc: &Arc<B>, uris: &[ODataId]) -> Batch<T, B>
where
    B: Bmc,
    T: Resource<B>,
{
    let mut items = Vec::with_capacity(uris.len());
    let mut failures = CollectionError::new();
    for uri in uris {
        match get_object(bmc, uri).await {
            Ok(v) => items.push(v),
            Err(err) => {
                debug!("member {uri} failed: {err}");
                failures.failures.insert(uri.clone(), err);
            }
        }
    }
    Batch {
        items,
        failures: (!failures.is_empty()).then_some(failures),
    }
}

/// Member URIs of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Member URIs in server order, all pages concatenated.
    pub members: Vec<ODataId>,
    /// `Members@odata.count` of the first page that advertised it.
    pub advertised_count: Option<usize>,
    /// Number of pages fetched.
    pub pages: usize,
}

#[derive(Deserialize)]
struct CollectionPage {
    #[serde(rename = "Members", default)]
    members: LinkSet,
    #[serde(rename = "Members@odata.count")]
    count: Option<usize>,
    #[serde(rename = "Members@odata.nextLink")]
    next_link: Option<String>,
    #[serde(rename = "Links")]
    links: Option<LegacyLinks>,
}

#[derive(Deserialize)]
struct LegacyLinks {
    #[serde(rename = "Members", default)]
    members: LinkSet,
}

impl CollectionPage {
    fn into_members(self) -> Vec<ODataId> {
        if self.members.is_empty() && self.count.is_none() {
            if let Some(links) = self.links {
                return links.members.into_uris();
            }
        }
        self.members.into_uris()
    }
}

/// Member URIs of the collection at `uri`, following continuation links.
///
/// Stops when there is no continuation, when the advertised member
/// count has been reached, when a continuation repeats or after
/// [`MAX_COLLECTION_PAGES`] pages.
///
/// # Errors
///
/// Transport error, [`Error::Remote`] or [`Error::Decode`] of any page.
pub async fn get_collection<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Collection, Error<B>> {
    let mut collection = Collection::default();
    let mut visited = HashSet::new();
    let mut next = Some(uri.clone());
    while let Some(page_uri) = next.take() {
        if collection.pages == MAX_COLLECTION_PAGES {
            warn!("{uri}: stopped after {MAX_COLLECTION_PAGES} pages");
            break;
        }
        if !visited.insert(page_uri.clone()) {
            warn!("{uri}: continuation {page_uri} repeats, stopping");
            break;
        }
        debug!("GET {page_uri}");
        let response = bmc.get(page_uri.as_str()).await.map_err(Error::Bmc)?;
        let response = success(page_uri.as_str(), response)?;
        let page: CollectionPage = decode::<B, _>(page_uri.as_str(), &response.body)?;
        collection.pages += 1;
        collection.advertised_count = collection.advertised_count.or(page.count);
        next = page
            .next_link
            .as_deref()
            .filter(|link| !link.is_empty())
            .map(ODataId::from);
        collection.members.extend(page.into_members());
        if collection
            .advertised_count
            .is_some_and(|count| collection.members.len() >= count)
        {
            break;
        }
    }
    Ok(collection)
}

/// Fetch the collection at `uri`, then each of its members.
///
/// # Errors
///
/// Failure to read the collection itself. Member failures are reported
/// in the returned [`Batch`].
pub async fn get_collection_objects<B, T>(bmc: &Arc<B>, uri: &ODataId) -> Result<Batch<T, B>, Error<B>>
where
    B: Bmc,
    T: Resource<B>,
{
    let collection = get_collection(bmc, uri).await?;
    Ok(get_objects(bmc, &collection.members).await)
}

/// DELETE the resource at `uri`.
///
/// # Errors
///
/// Transport error or [`Error::Remote`] for non-2xx responses.
pub async fn delete_object<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Response, Error<B>> {
    debug!("DELETE {uri}");
    let response = bmc.delete(uri.as_str()).await.map_err(Error::Bmc)?;
    success(uri.as_str(), response)
}
