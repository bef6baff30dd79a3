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

//! Diff-patch update engine
//!
//! A resource handle keeps the bytes it was decoded from. On update, the
//! bytes are decoded again into a fresh copy of the public properties
//! and both copies are serialized to JSON trees. Only writable fields are
//! compared:
//!
//! - objects are walked key by key and only changed leaves are kept,
//!   together with the chain of keys leading to them;
//! - scalars and arrays are compared as a whole and replaced as a whole.
//!
//! The result is an RFC 7396 merge patch. An empty patch is not sent.

use crate::fetch::decode;
use crate::Bmc;
use crate::Error;
use crate::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Resource that can be written back with PATCH.
pub trait Updatable<B: Bmc>: Resource<B> {
    /// Public properties with on-wire names.
    type Properties: Serialize + DeserializeOwned;

    /// On-wire names of the writable properties.
    const WRITABLE: &'static [&'static str];

    /// Current (possibly modified) properties.
    fn properties(&self) -> &Self::Properties;
}

/// Compute the merge patch turning `original` into `current`.
///
/// Only top-level keys listed in `writable` are considered.
#[must_use]
pub fn diff_properties(
    original: &JsonValue,
    current: &JsonValue,
    writable: &[&str],
) -> JsonMap<String, JsonValue> {
    let mut patch = JsonMap::new();
    for &name in writable {
        let before = original.get(name).unwrap_or(&JsonValue::Null);
        let after = current.get(name).unwrap_or(&JsonValue::Null);
        if let Some(change) = diff_value(before, after) {
            patch.insert(name.to_string(), change);
        }
    }
    patch
}

fn diff_value(before: &JsonValue, after: &JsonValue) -> Option<JsonValue> {
    match (before, after) {
        (JsonValue::Object(before), JsonValue::Object(after)) => {
            let mut changed = JsonMap::new();
            for (key, value) in after {
                match before.get(key) {
                    Some(old) => {
                        if let Some(change) = diff_value(old, value) {
                            changed.insert(key.clone(), change);
                        }
                    }
                    None if value.is_null() => {}
                    None => {
                        changed.insert(key.clone(), value.clone());
                    }
                }
            }
            for (key, old) in before {
                if !after.contains_key(key) && !old.is_null() {
                    changed.insert(key.clone(), JsonValue::Null);
                }
            }
            (!changed.is_empty()).then_some(JsonValue::Object(changed))
        }
        _ => (before != after).then(|| after.clone()),
    }
}

/// Push changed writable properties of `resource` to the BMC.
///
/// No request is issued when nothing changed. `If-Match` is sent when the
/// resource has an entity tag. The handle is not refreshed: fetch the
/// resource again to see what the BMC applied.
///
/// # Errors
///
/// [`Error::Decode`] if the stored payload cannot be decoded again,
/// [`Error::Json`] if properties cannot be serialized, transport error
/// or [`Error::Remote`] for the PATCH itself.
pub async fn update_resource<B, T>(resource: &T) -> Result<(), Error<B>>
where
    B: Bmc,
    T: Updatable<B>,
{
    let entity = resource.entity();
    let uri = entity.odata_id().as_str();
    let original: T::Properties = decode::<B, _>(uri, entity.raw())?;
    let original = serde_json::to_value(&original).map_err(Error::Json)?;
    let current = serde_json::to_value(resource.properties()).map_err(Error::Json)?;
    let patch = diff_properties(&original, &current, T::WRITABLE);
    if patch.is_empty() {
        debug!("{uri}: no changes");
        return Ok(());
    }
    debug!(
        "{uri}: changed {}",
        patch.keys().map(String::as_str).collect::<Vec<_>>().join(",")
    );
    entity
        .patch(uri, &JsonValue::Object(patch))
        .await
        .map(|_| ())
}
