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

use crate::resource::resource_handle;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Bmc;
use typed_redfish_core::Entity;
use typed_redfish_core::Link;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;

#[cfg(feature = "aggregation")]
use crate::aggregation::AggregationService;
#[cfg(feature = "aggregation")]
use crate::follow;
#[cfg(any(feature = "chassis", feature = "computer-systems", feature = "managers"))]
use crate::follow_collection;
#[cfg(any(feature = "chassis", feature = "computer-systems", feature = "managers"))]
use crate::Batch;
#[cfg(feature = "chassis")]
use crate::chassis::Chassis;
#[cfg(feature = "computer-systems")]
use crate::computer_system::ComputerSystem;
#[cfg(feature = "managers")]
use crate::managers::Manager;

/// Public properties of the service root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRootProperties {
    pub redfish_version: Option<String>,
    #[serde(rename = "UUID")]
    pub uuid: Option<String>,
    pub product: Option<String>,
    pub vendor: Option<String>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ServiceRootWire {
    #[serde(flatten)]
    properties: ServiceRootProperties,
    #[serde(rename = "Chassis", default)]
    chassis: Link,
    #[serde(rename = "Systems", default)]
    systems: Link,
    #[serde(rename = "Managers", default)]
    managers: Link,
    #[serde(rename = "AggregationService", default)]
    aggregation_service: Link,
}

/// Represents `ServiceRoot` in the BMC model.
pub struct ServiceRoot<B: Bmc> {
    entity: Entity<B>,
    properties: ServiceRootProperties,
    chassis: Link,
    systems: Link,
    managers: Link,
    #[allow(dead_code)] // used when aggregation feature enabled.
    aggregation_service: Link,
}

resource_handle!(ServiceRoot, ServiceRootProperties);

impl<B: Bmc> Resource<B> for ServiceRoot<B> {
    type Wire = ServiceRootWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            chassis: wire.chassis,
            systems: wire.systems,
            managers: wire.managers,
            aggregation_service: wire.aggregation_service,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Fetch the service root at `/redfish/v1`.
///
/// # Errors
///
/// Returns error if retrieving the root path via Redfish fails.
pub async fn get_service_root<B: Bmc>(bmc: &Arc<B>) -> Result<ServiceRoot<B>, Error<B>> {
    ServiceRoot::new(Arc::clone(bmc)).await
}

impl<B: Bmc> ServiceRoot<B> {
    /// Create a new service root.
    ///
    /// # Errors
    ///
    /// Returns error if retrieving the root path via Redfish fails.
    pub async fn new(bmc: Arc<B>) -> Result<Self, Error<B>> {
        get_object(&bmc, &ODataId::service_root()).await
    }

    /// URI of the chassis collection. Empty when not advertised.
    #[must_use]
    pub const fn chassis_collection(&self) -> &Link {
        &self.chassis
    }

    /// URI of the computer systems collection.
    #[must_use]
    pub const fn systems_collection(&self) -> &Link {
        &self.systems
    }

    /// URI of the managers collection.
    #[must_use]
    pub const fn managers_collection(&self) -> &Link {
        &self.managers
    }

    /// Get every chassis of the service.
    ///
    /// # Errors
    ///
    /// Returns error if the chassis collection cannot be retrieved.
    /// Failed members are reported in the batch.
    #[cfg(feature = "chassis")]
    pub async fn chassis(&self) -> Result<Batch<Chassis<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.chassis).await
    }

    /// Get every computer system of the service.
    ///
    /// # Errors
    ///
    /// Returns error if the systems collection cannot be retrieved.
    #[cfg(feature = "computer-systems")]
    pub async fn systems(&self) -> Result<Batch<ComputerSystem<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.systems).await
    }

    /// Get every manager of the service.
    ///
    /// # Errors
    ///
    /// Returns error if the managers collection cannot be retrieved.
    #[cfg(feature = "managers")]
    pub async fn managers(&self) -> Result<Batch<Manager<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.managers).await
    }

    /// Get the aggregation service, `None` if the service has none.
    ///
    /// # Errors
    ///
    /// Returns error if retrieving the aggregation service fails.
    #[cfg(feature = "aggregation")]
    pub async fn aggregation_service(&self) -> Result<Option<AggregationService<B>>, Error<B>> {
        follow(self.entity.bmc(), &self.aggregation_service).await
    }
}
