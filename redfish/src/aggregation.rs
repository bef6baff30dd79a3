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

//! Aggregation service: groups of resources acted upon together.
//!
//! An [`Aggregate`] lists its elements as links. Elements are added or
//! removed with actions; the aggregate itself has no writable property.

use crate::follow_collection;
use crate::list_referenced;
use crate::resource::resource_handle;
use crate::resource::updatable;
use crate::Batch;
use crate::Error;
use crate::ResetType;
use crate::Status;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Actions;
use typed_redfish_core::Bmc;
use typed_redfish_core::Entity;
use typed_redfish_core::Link;
use typed_redfish_core::LinkSet;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;
use typed_redfish_core::Response;

const ADD_ELEMENTS: &str = "Aggregate.AddElements";
const REMOVE_ELEMENTS: &str = "Aggregate.RemoveElements";
const RESET: &str = "Aggregate.Reset";
const SET_DEFAULT_BOOT_ORDER: &str = "Aggregate.SetDefaultBootOrder";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregationServiceProperties {
    pub service_enabled: Option<bool>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct AggregationServiceWire {
    #[serde(flatten)]
    properties: AggregationServiceProperties,
    #[serde(rename = "Aggregates", default)]
    aggregates: Link,
    #[serde(rename = "Actions", default)]
    actions: Actions,
}

/// Entry point of aggregation, linked from the service root.
pub struct AggregationService<B: Bmc> {
    entity: Entity<B>,
    properties: AggregationServiceProperties,
    aggregates: Link,
    actions: Actions,
}

resource_handle!(AggregationService, AggregationServiceProperties);

updatable!(
    AggregationService,
    AggregationServiceProperties,
    ["ServiceEnabled"]
);

impl<B: Bmc> Resource<B> for AggregationService<B> {
    type Wire = AggregationServiceWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            aggregates: wire.aggregates,
            actions: wire.actions,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

impl<B: Bmc> AggregationService<B> {
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    #[must_use]
    pub const fn aggregates_link(&self) -> &Link {
        &self.aggregates
    }

    /// Fetch every aggregate. Empty when the service exposes none.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be retrieved.
    pub async fn aggregates(&self) -> Result<Batch<Aggregate<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.aggregates).await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregateProperties {
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct AggregateWire {
    #[serde(flatten)]
    properties: AggregateProperties,
    #[serde(rename = "Elements", default)]
    elements: LinkSet,
    #[serde(rename = "Elements@odata.count", default)]
    elements_count: Option<usize>,
    #[serde(rename = "Actions", default)]
    actions: Actions,
}

/// Group of resources.
pub struct Aggregate<B: Bmc> {
    entity: Entity<B>,
    properties: AggregateProperties,
    elements: LinkSet,
    actions: Actions,
}

resource_handle!(Aggregate, AggregateProperties);

impl<B: Bmc> Resource<B> for Aggregate<B> {
    type Wire = AggregateWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            elements: wire.elements.with_count(wire.elements_count),
            actions: wire.actions,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

#[derive(Serialize)]
struct ElementsParams<'a> {
    #[serde(rename = "Elements")]
    elements: &'a LinkSet,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AggregateResetParams {
    batch_size: u32,
    delay_between_batches_in_seconds: u32,
    reset_type: ResetType,
}

/// Fetch the aggregation service at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_aggregation_service<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<AggregationService<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch the aggregate at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_aggregate<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Aggregate<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every aggregate of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_aggregates<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<Aggregate<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}

impl<B: Bmc> Aggregate<B> {
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Links to the members of this aggregate.
    #[must_use]
    pub const fn elements(&self) -> &LinkSet {
        &self.elements
    }

    /// Add `elements` to the aggregate.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAction`] if `Aggregate.AddElements` is not
    /// advertised, transport or remote error otherwise.
    pub async fn add_elements(&self, elements: &LinkSet) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, ADD_ELEMENTS, &ElementsParams { elements })
            .await
    }

    /// Remove `elements` from the aggregate.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAction`] if `Aggregate.RemoveElements` is not
    /// advertised, transport or remote error otherwise.
    pub async fn remove_elements(&self, elements: &LinkSet) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, REMOVE_ELEMENTS, &ElementsParams { elements })
            .await
    }

    /// Reset the elements in batches of `batch_size`, waiting
    /// `delay_between_batches_in_seconds` between batches.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if `Aggregate.Reset` is not advertised;
    /// - [`Error::InvalidParameter`] if `reset_type` is not allowed.
    pub async fn reset(
        &self,
        batch_size: u32,
        delay_between_batches_in_seconds: u32,
        reset_type: ResetType,
    ) -> Result<Response, Error<B>> {
        let params = AggregateResetParams {
            batch_size,
            delay_between_batches_in_seconds,
            reset_type,
        };
        self.entity.run_action(&self.actions, RESET, &params).await
    }

    /// Restore the default boot order of every system in the aggregate.
    /// Sent without a body.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAction`] if the action is not advertised.
    pub async fn set_default_boot_order(&self) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, SET_DEFAULT_BOOT_ORDER, &())
            .await
    }
}
