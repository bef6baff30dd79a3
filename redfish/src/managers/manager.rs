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

use crate::follow;
use crate::follow_collection;
use crate::list_referenced;
use crate::managers::NetworkProtocol;
use crate::resource::resource_handle;
use crate::resource::updatable;
use crate::resource::ResetParams;
use crate::virtual_media::VirtualMedia;
use crate::Batch;
use crate::Error;
use crate::PowerState;
use crate::ResetType;
use crate::Status;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Actions;
use typed_redfish_core::Bmc;
use typed_redfish_core::DateTimeOffset;
use typed_redfish_core::Empty;
use typed_redfish_core::Entity;
use typed_redfish_core::Link;
use typed_redfish_core::LinkSet;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;
use typed_redfish_core::Response;

#[cfg(feature = "chassis")]
use crate::chassis::Chassis;
#[cfg(feature = "computer-systems")]
use crate::computer_system::ComputerSystem;
#[cfg(any(feature = "chassis", feature = "computer-systems"))]
use crate::follow_all;

const RESET: &str = "Manager.Reset";
const RESET_TO_DEFAULTS: &str = "Manager.ResetToDefaults";

/// Kind of manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerType {
    ManagementController,
    EnclosureManager,
    #[serde(rename = "BMC")]
    Bmc,
    RackManager,
    AuxiliaryController,
    Service,
    #[serde(other)]
    Other,
}

/// What `Manager.ResetToDefaults` preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetToDefaultsType {
    ResetAll,
    PreserveNetworkAndUsers,
    PreserveNetwork,
}

/// Public properties of a manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagerProperties {
    pub manager_type: Option<ManagerType>,
    pub firmware_version: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub part_number: Option<String>,
    pub serial_number: Option<String>,
    #[serde(rename = "UUID")]
    pub uuid: Option<String>,
    #[serde(rename = "ServiceEntryPointUUID")]
    pub service_entry_point_uuid: Option<String>,
    /// Kept as reported. Some BMCs omit the UTC offset.
    pub date_time: Option<String>,
    pub date_time_local_offset: Option<String>,
    pub last_reset_time: Option<String>,
    pub location_indicator_active: Option<bool>,
    pub service_identification: Option<String>,
    pub power_state: Option<PowerState>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[derive(Deserialize, Default)]
struct ManagerLinks {
    #[serde(rename = "ManagerForChassis", default)]
    manager_for_chassis: LinkSet,
    #[serde(rename = "ManagerForServers", default)]
    manager_for_servers: LinkSet,
    #[serde(rename = "ManagerInChassis", default)]
    manager_in_chassis: Link,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ManagerWire {
    #[serde(flatten)]
    properties: ManagerProperties,
    #[serde(rename = "Links", default)]
    links: ManagerLinks,
    #[serde(rename = "Actions", default)]
    actions: Actions,
    #[serde(rename = "NetworkProtocol", default)]
    network_protocol: Link,
    #[serde(rename = "VirtualMedia", default)]
    virtual_media: Link,
}

/// Represents a manager.
pub struct Manager<B: Bmc> {
    entity: Entity<B>,
    properties: ManagerProperties,
    links: ManagerLinks,
    actions: Actions,
    network_protocol: Link,
    virtual_media: Link,
}

resource_handle!(Manager, ManagerProperties);

updatable!(
    Manager,
    ManagerProperties,
    [
        "DateTime",
        "DateTimeLocalOffset",
        "LocationIndicatorActive",
        "ServiceIdentification",
    ]
);

impl<B: Bmc> Resource<B> for Manager<B> {
    type Wire = ManagerWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            links: wire.links,
            actions: wire.actions,
            network_protocol: wire.network_protocol,
            virtual_media: wire.virtual_media,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

#[derive(Serialize)]
struct ResetToDefaultsParams {
    #[serde(rename = "ResetType")]
    reset_type: ResetToDefaultsType,
}

/// Fetch the manager at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_manager<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Manager<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every manager of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_managers<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<Manager<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}

impl<B: Bmc> Manager<B> {
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Reset types the BMC advertises for `Manager.Reset`.
    #[must_use]
    pub fn supported_reset_types(&self) -> Option<&[String]> {
        self.actions
            .get(RESET)
            .and_then(|action| action.allowable_values("ResetType"))
    }

    /// `DateTime` as a timestamp. `None` when absent or not RFC 3339.
    #[must_use]
    pub fn date_time_offset(&self) -> Option<DateTimeOffset> {
        self.properties.date_time.as_deref()?.parse().ok()
    }

    #[must_use]
    pub fn last_reset_time_offset(&self) -> Option<DateTimeOffset> {
        self.properties.last_reset_time.as_deref()?.parse().ok()
    }

    /// Set the manager clock on the next [`Manager::update`].
    pub fn set_date_time(&mut self, value: DateTimeOffset) {
        self.properties.date_time = Some(value.to_string());
    }

    #[must_use]
    pub const fn manager_for_chassis_links(&self) -> &LinkSet {
        &self.links.manager_for_chassis
    }

    #[must_use]
    pub const fn manager_for_servers_links(&self) -> &LinkSet {
        &self.links.manager_for_servers
    }

    #[must_use]
    pub const fn manager_in_chassis_link(&self) -> &Link {
        &self.links.manager_in_chassis
    }

    #[must_use]
    pub const fn network_protocol_link(&self) -> &Link {
        &self.network_protocol
    }

    /// Chassis managed by this manager.
    #[cfg(feature = "chassis")]
    pub async fn manager_for_chassis(&self) -> Batch<Chassis<B>, B> {
        follow_all(self.entity.bmc(), &self.links.manager_for_chassis).await
    }

    /// Systems managed by this manager.
    #[cfg(feature = "computer-systems")]
    pub async fn manager_for_servers(&self) -> Batch<ComputerSystem<B>, B> {
        follow_all(self.entity.bmc(), &self.links.manager_for_servers).await
    }

    /// Network protocol settings, `None` if not exposed.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching the settings fails.
    pub async fn network_protocol(&self) -> Result<Option<NetworkProtocol<B>>, Error<B>> {
        follow(self.entity.bmc(), &self.network_protocol).await
    }

    /// Virtual media slots of this manager. Empty when the manager has
    /// none.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be retrieved.
    pub async fn virtual_media(&self) -> Result<Batch<VirtualMedia<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.virtual_media).await
    }

    /// Reset the manager.
    ///
    /// With `None` the action is posted with an empty object. Some BMCs
    /// advertise `Manager.Reset` without allowable values and expect
    /// that form.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if `Manager.Reset` is not advertised;
    /// - [`Error::InvalidParameter`] if `reset_type` is not in the
    ///   advertised list.
    pub async fn reset(&self, reset_type: Option<ResetType>) -> Result<Response, Error<B>> {
        match reset_type {
            Some(reset_type) => {
                self.entity
                    .run_action(&self.actions, RESET, &ResetParams { reset_type })
                    .await
            }
            None => self.entity.run_action(&self.actions, RESET, &Empty {}).await,
        }
    }

    /// Reset the manager configuration to factory defaults.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if `Manager.ResetToDefaults` is not
    ///   advertised;
    /// - [`Error::InvalidParameter`] if `reset_type` is not allowed.
    pub async fn reset_to_defaults(
        &self,
        reset_type: ResetToDefaultsType,
    ) -> Result<Response, Error<B>> {
        self.entity
            .run_action(
                &self.actions,
                RESET_TO_DEFAULTS,
                &ResetToDefaultsParams { reset_type },
            )
            .await
    }
}
