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

use crate::chassis::Power;
use crate::chassis::Sensor;
use crate::chassis::Thermal;
use crate::follow;
use crate::follow_collection;
use crate::list_referenced;
use crate::resource::resource_handle;
use crate::resource::ResetParams;
use crate::resource::updatable;
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

#[cfg(feature = "computer-systems")]
use crate::computer_system::ComputerSystem;
#[cfg(feature = "controls")]
use crate::control::Control;
#[cfg(feature = "managers")]
use crate::managers::Manager;
#[cfg(any(feature = "computer-systems", feature = "managers"))]
use crate::follow_all;

const RESET: &str = "Chassis.Reset";

/// Physical form of the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChassisType {
    Rack,
    Blade,
    Enclosure,
    StandAlone,
    RackMount,
    Card,
    Cartridge,
    Row,
    Pod,
    Expansion,
    Sidecar,
    Zone,
    Sled,
    Shelf,
    Drawer,
    Module,
    Component,
    IPBasedDrive,
    RackGroup,
    StorageEnclosure,
    ImmersionTank,
    HeatExchanger,
    PowerStrip,
    #[serde(other)]
    Other,
}

/// ASHRAE environmental class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentalClass {
    A1,
    A2,
    A3,
    A4,
    #[serde(other)]
    Unknown,
}

/// Public properties of a chassis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChassisProperties {
    pub chassis_type: Option<ChassisType>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "SKU")]
    pub sku: Option<String>,
    pub serial_number: Option<String>,
    pub part_number: Option<String>,
    pub spare_part_number: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "UUID")]
    pub uuid: Option<String>,
    pub asset_tag: Option<String>,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    pub location_indicator_active: Option<bool>,
    pub power_state: Option<PowerState>,
    pub environmental_class: Option<EnvironmentalClass>,
    #[serde(rename = "ElectricalSourceManagerURIs")]
    pub electrical_source_manager_uris: Option<Vec<String>>,
    pub electrical_source_names: Option<Vec<String>>,
    pub heating_cooling_equipment_names: Option<Vec<String>>,
    #[serde(rename = "HeatingCoolingManagerURIs")]
    pub heating_cooling_manager_uris: Option<Vec<String>>,
    pub height_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub max_power_watts: Option<f64>,
    pub min_power_watts: Option<f64>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ChassisLinks {
    #[serde(default)]
    computer_systems: LinkSet,
    #[serde(default)]
    managed_by: LinkSet,
    #[serde(default)]
    drives: LinkSet,
    #[serde(rename = "Drives@odata.count")]
    drives_count: Option<usize>,
    #[serde(default)]
    contained_by: Link,
    #[serde(default)]
    contains: LinkSet,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ChassisWire {
    #[serde(flatten)]
    properties: ChassisProperties,
    #[serde(rename = "Links", default)]
    links: ChassisLinks,
    #[serde(rename = "Actions", default)]
    actions: Actions,
    #[serde(rename = "Power", default)]
    power: Link,
    #[serde(rename = "Thermal", default)]
    thermal: Link,
    #[serde(rename = "Sensors", default)]
    sensors: Link,
    #[serde(rename = "Controls", default)]
    controls: Link,
}

/// Represents a chassis in the BMC.
///
/// Dereferences to [`ChassisProperties`]. Writable properties are sent
/// back with [`Chassis::update`].
pub struct Chassis<B: Bmc> {
    entity: Entity<B>,
    properties: ChassisProperties,
    computer_systems: LinkSet,
    managed_by: LinkSet,
    drives: LinkSet,
    contained_by: Link,
    contains: LinkSet,
    power: Link,
    thermal: Link,
    sensors: Link,
    #[allow(dead_code)] // used when controls feature enabled.
    controls: Link,
    actions: Actions,
}

resource_handle!(Chassis, ChassisProperties);

updatable!(
    Chassis,
    ChassisProperties,
    [
        "AssetTag",
        "IndicatorLED",
        "ElectricalSourceManagerURIs",
        "ElectricalSourceNames",
        "EnvironmentalClass",
        "HeatingCoolingEquipmentNames",
        "HeatingCoolingManagerURIs",
        "LocationIndicatorActive",
    ]
);

impl<B: Bmc> Resource<B> for Chassis<B> {
    type Wire = ChassisWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        let links = wire.links;
        Self {
            entity,
            properties: wire.properties,
            computer_systems: links.computer_systems,
            managed_by: links.managed_by,
            drives: links.drives.with_count(links.drives_count),
            contained_by: links.contained_by,
            contains: links.contains,
            power: wire.power,
            thermal: wire.thermal,
            sensors: wire.sensors,
            controls: wire.controls,
            actions: wire.actions,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Fetch the chassis at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding the chassis fails.
pub async fn get_chassis<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Chassis<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every chassis of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_chassis<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<Chassis<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}

impl<B: Bmc> Chassis<B> {
    /// Actions advertised by this chassis.
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Reset types advertised for `Chassis.Reset`, if the server lists them.
    #[must_use]
    pub fn supported_reset_types(&self) -> Option<&[String]> {
        self.actions
            .get(RESET)
            .and_then(|action| action.allowable_values("ResetType"))
    }

    /// Computer systems in this chassis (`Links.ComputerSystems`).
    #[must_use]
    pub const fn computer_system_links(&self) -> &LinkSet {
        &self.computer_systems
    }

    /// Managers of this chassis (`Links.ManagedBy`).
    #[must_use]
    pub const fn managed_by_links(&self) -> &LinkSet {
        &self.managed_by
    }

    /// Drives in this chassis with the advertised count.
    #[must_use]
    pub const fn drive_links(&self) -> &LinkSet {
        &self.drives
    }

    /// Chassis this one is contained by. Empty for a top-level chassis.
    #[must_use]
    pub const fn contained_by_link(&self) -> &Link {
        &self.contained_by
    }

    /// Chassis contained in this one.
    #[must_use]
    pub const fn contains_links(&self) -> &LinkSet {
        &self.contains
    }

    /// Get legacy Power resource (for older BMCs).
    ///
    /// # Errors
    ///
    /// Returns an error if fetching power data fails.
    pub async fn power(&self) -> Result<Option<Power<B>>, Error<B>> {
        follow(self.entity.bmc(), &self.power).await
    }

    /// Get legacy Thermal resource (for older BMCs).
    ///
    /// # Errors
    ///
    /// Returns an error if fetching thermal data fails.
    pub async fn thermal(&self) -> Result<Option<Thermal<B>>, Error<B>> {
        follow(self.entity.bmc(), &self.thermal).await
    }

    /// Get the sensors of this chassis.
    ///
    /// # Errors
    ///
    /// Returns an error if the sensor collection cannot be retrieved.
    pub async fn sensors(&self) -> Result<Batch<Sensor<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.sensors).await
    }

    /// Get the controls of this chassis.
    ///
    /// # Errors
    ///
    /// Returns an error if the control collection cannot be retrieved.
    #[cfg(feature = "controls")]
    pub async fn controls(&self) -> Result<Batch<Control<B>, B>, Error<B>> {
        follow_collection(self.entity.bmc(), &self.controls).await
    }

    /// Get the chassis containing this one.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching the parent fails.
    pub async fn contained_by(&self) -> Result<Option<Self>, Error<B>> {
        follow(self.entity.bmc(), &self.contained_by).await
    }

    /// Get the computer systems in this chassis.
    #[cfg(feature = "computer-systems")]
    pub async fn computer_systems(&self) -> Batch<ComputerSystem<B>, B> {
        follow_all(self.entity.bmc(), &self.computer_systems).await
    }

    /// Get the managers of this chassis.
    #[cfg(feature = "managers")]
    pub async fn managed_by(&self) -> Batch<Manager<B>, B> {
        follow_all(self.entity.bmc(), &self.managed_by).await
    }

    /// Reset the chassis.
    ///
    /// Sends `{"ResetType": <reset_type>}`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if the chassis does not advertise
    ///   `Chassis.Reset`;
    /// - [`Error::InvalidParameter`] if `reset_type` is not in the
    ///   advertised list.
    pub async fn reset(&self, reset_type: ResetType) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, RESET, &ResetParams { reset_type })
            .await
    }
}
