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

//! `ComputerSystem` resource.

use crate::follow_collection;
use crate::list_referenced;
use crate::resource::resource_handle;
use crate::resource::ResetParams;
use crate::resource::updatable;
use crate::virtual_media::VirtualMedia;
use crate::Batch;
use crate::Error;
use crate::IndicatorLed;
use crate::PowerState;
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

#[cfg(feature = "chassis")]
use crate::chassis::Chassis;
#[cfg(any(feature = "chassis", feature = "managers"))]
use crate::follow_all;
#[cfg(feature = "managers")]
use crate::managers::Manager;

const RESET: &str = "ComputerSystem.Reset";
const SET_DEFAULT_BOOT_ORDER: &str = "ComputerSystem.SetDefaultBootOrder";

/// Policy applied when power returns after a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerRestorePolicy {
    AlwaysOn,
    AlwaysOff,
    LastState,
    #[serde(other)]
    Unknown,
}

/// Whether the boot source override is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootSourceOverrideEnabled {
    Disabled,
    Once,
    Continuous,
    #[serde(other)]
    Unknown,
}

/// Firmware boot mode used with the override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootSourceOverrideMode {
    Legacy,
    #[serde(rename = "UEFI")]
    Uefi,
    #[serde(other)]
    Unknown,
}

/// Boot source used with the override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootSourceOverrideTarget {
    None,
    Pxe,
    Floppy,
    Cd,
    Usb,
    Hdd,
    BiosSetup,
    Utilities,
    Diags,
    UefiShell,
    UefiTarget,
    SDCard,
    UefiHttp,
    RemoteDrive,
    UefiBootNext,
    Recovery,
    #[serde(other)]
    Unknown,
}

/// Boot settings of a system. Unset properties are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Boot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_source_override_enabled: Option<BootSourceOverrideEnabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_source_override_mode: Option<BootSourceOverrideMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_source_override_target: Option<BootSourceOverrideTarget>,
    #[serde(rename = "UefiTargetBootSourceOverride", skip_serializing_if = "Option::is_none")]
    pub uefi_target_boot_source_override: Option<String>,
    #[serde(rename = "HttpBootUri", skip_serializing_if = "Option::is_none")]
    pub http_boot_uri: Option<String>,
}

/// Summary of the processors of a system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorSummary {
    pub count: Option<u32>,
    pub logical_processor_count: Option<u32>,
    pub model: Option<String>,
    pub status: Option<Status>,
}

/// Summary of the memory of a system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemorySummary {
    #[serde(rename = "TotalSystemMemoryGiB")]
    pub total_system_memory_gib: Option<f64>,
    pub status: Option<Status>,
}

/// Public properties of a computer system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystemProperties {
    pub system_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "SKU")]
    pub sku: Option<String>,
    pub serial_number: Option<String>,
    pub part_number: Option<String>,
    #[serde(rename = "UUID")]
    pub uuid: Option<String>,
    pub asset_tag: Option<String>,
    pub host_name: Option<String>,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    pub location_indicator_active: Option<bool>,
    pub power_state: Option<PowerState>,
    pub power_restore_policy: Option<PowerRestorePolicy>,
    pub bios_version: Option<String>,
    pub boot: Option<Boot>,
    pub processor_summary: Option<ProcessorSummary>,
    pub memory_summary: Option<MemorySummary>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ComputerSystemLinks {
    #[serde(default)]
    chassis: LinkSet,
    #[serde(rename = "Chassis@odata.count")]
    chassis_count: Option<usize>,
    #[serde(default)]
    managed_by: LinkSet,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ComputerSystemWire {
    #[serde(flatten)]
    properties: ComputerSystemProperties,
    #[serde(rename = "Links", default)]
    links: ComputerSystemLinks,
    #[serde(rename = "Actions", default)]
    actions: Actions,
    #[serde(rename = "VirtualMedia", default)]
    virtual_media: Link,
}

/// Represents a computer system in the BMC.
pub struct ComputerSystem<B: Bmc> {
    entity: Entity<B>,
    properties: ComputerSystemProperties,
    chassis: LinkSet,
    managed_by: LinkSet,
    virtual_media: Link,
    actions: Actions,
}

resource_handle!(ComputerSystem, ComputerSystemProperties);

updatable!(
    ComputerSystem,
    ComputerSystemProperties,
    [
        "AssetTag",
        "Boot",
        "HostName",
        "IndicatorLED",
        "LocationIndicatorActive",
        "PowerRestorePolicy",
    ]
);

impl<B: Bmc> Resource<B> for ComputerSystem<B> {
    type Wire = ComputerSystemWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            chassis: wire.links.chassis.with_count(wire.links.chassis_count),
            managed_by: wire.links.managed_by,
            virtual_media: wire.virtual_media,
            actions: wire.actions,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Fetch the computer system at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_computer_system<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<ComputerSystem<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every computer system of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_computer_systems<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<ComputerSystem<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}

impl<B: Bmc> ComputerSystem<B> {
    /// Actions advertised by this system.
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Reset types advertised for `ComputerSystem.Reset`.
    #[must_use]
    pub fn supported_reset_types(&self) -> Option<&[String]> {
        self.actions
            .get(RESET)
            .and_then(|action| action.allowable_values("ResetType"))
    }

    /// Chassis containing this system (`Links.Chassis`).
    #[must_use]
    pub const fn chassis_links(&self) -> &LinkSet {
        &self.chassis
    }

    /// Managers of this system (`Links.ManagedBy`).
    #[must_use]
    pub const fn managed_by_links(&self) -> &LinkSet {
        &self.managed_by
    }

    /// Get the chassis containing this system.
    #[cfg(feature = "chassis")]
    pub async fn chassis(&self) -> Batch<Chassis<B>, B> {
        follow_all(self.entity.bmc(), &self.chassis).await
    }

    /// Get the managers of this system.
    #[cfg(feature = "managers")]
    pub async fn managed_by(&self) -> Batch<Manager<B>, B> {
        follow_all(self.entity.bmc(), &self.managed_by).await
    }

    /// Get the virtual media of this system.
    ///
    /// # Errors
    ///
    /// Returns an error if the virtual media collection cannot be
    /// retrieved.
    pub async fn virtual_media(&self) -> Result<Batch<VirtualMedia<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.virtual_media).await
    }

    /// Stage a new boot order. Sent by the next [`Self::update`].
    pub fn set_boot_order(&mut self, order: Vec<String>) {
        self.properties.boot.get_or_insert_with(Boot::default).boot_order = Some(order);
    }

    /// PATCH `Boot` with the given settings right away.
    ///
    /// Only the properties set in `boot` are sent.
    ///
    /// # Errors
    ///
    /// Transport error or [`Error::Remote`] if the BMC rejects the PATCH.
    pub async fn set_boot(&self, boot: &Boot) -> Result<(), Error<B>> {
        let body = serde_json::to_value(BootPatch { boot }).map_err(Error::Json)?;
        let uri = self.entity.odata_id().as_str();
        self.entity.patch(uri, &body).await.map(|_| ())
    }

    /// Reset the system.
    ///
    /// Sends `{"ResetType": <reset_type>}`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if `ComputerSystem.Reset` is not
    ///   advertised;
    /// - [`Error::InvalidParameter`] if `reset_type` is not in the
    ///   advertised list.
    pub async fn reset(&self, reset_type: ResetType) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, RESET, &ResetParams { reset_type })
            .await
    }

    /// Restore the default boot order.
    ///
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

#[derive(Serialize)]
struct BootPatch<'a> {
    #[serde(rename = "Boot")]
    boot: &'a Boot,
}
