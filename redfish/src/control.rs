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

//! `Control` resource: set points of fans, power limits and similar.

use crate::list_referenced;
use crate::resource::resource_handle;
use crate::resource::updatable;
use crate::Batch;
use crate::Error;
use crate::Status;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Actions;
use typed_redfish_core::Bmc;
use typed_redfish_core::Empty;
use typed_redfish_core::Entity;
use typed_redfish_core::LinkSet;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;
use typed_redfish_core::Response;

#[cfg(feature = "chassis")]
use crate::chassis::Sensor;
#[cfg(feature = "chassis")]
use crate::follow_all;

const RESET_TO_DEFAULTS: &str = "Control.ResetToDefaults";

/// Operating mode of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    Automatic,
    Override,
    Manual,
    Disabled,
    #[serde(other)]
    Unknown,
}

/// Excerpt of the sensor that measures the controlled value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SensorExcerpt {
    pub reading: Option<f64>,
    pub data_source_uri: Option<String>,
}

/// Public properties of a control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControlProperties {
    pub control_type: Option<String>,
    pub control_mode: Option<ControlMode>,
    pub control_delay_seconds: Option<f64>,
    pub set_point: Option<f64>,
    pub set_point_units: Option<String>,
    pub default_set_point: Option<f64>,
    pub setting_min: Option<f64>,
    pub setting_max: Option<f64>,
    pub allowable_min: Option<f64>,
    pub allowable_max: Option<f64>,
    pub dead_band: Option<f64>,
    pub increment: Option<f64>,
    pub physical_context: Option<String>,
    pub sensor: Option<SensorExcerpt>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ControlWire {
    #[serde(flatten)]
    properties: ControlProperties,
    #[serde(rename = "Actions", default)]
    actions: Actions,
    #[serde(rename = "AssociatedSensors", default)]
    associated_sensors: LinkSet,
    #[serde(rename = "AssociatedSensors@odata.count")]
    associated_sensors_count: Option<usize>,
    #[serde(rename = "RelatedItem", default)]
    related_item: LinkSet,
    #[serde(rename = "RelatedItem@odata.count")]
    related_item_count: Option<usize>,
}

/// Represents a control of a chassis.
pub struct Control<B: Bmc> {
    entity: Entity<B>,
    properties: ControlProperties,
    #[allow(dead_code)] // used when chassis feature enabled.
    associated_sensors: LinkSet,
    related_item: LinkSet,
    actions: Actions,
}

resource_handle!(Control, ControlProperties);

updatable!(
    Control,
    ControlProperties,
    [
        "ControlDelaySeconds",
        "ControlMode",
        "DeadBand",
        "SetPoint",
        "SettingMax",
        "SettingMin",
    ]
);

impl<B: Bmc> Resource<B> for Control<B> {
    type Wire = ControlWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            associated_sensors: wire
                .associated_sensors
                .with_count(wire.associated_sensors_count),
            related_item: wire.related_item.with_count(wire.related_item_count),
            actions: wire.actions,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Fetch the control at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_control<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Control<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every control of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_controls<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<Control<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}

impl<B: Bmc> Control<B> {
    /// Actions advertised by this control.
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Resources affected by this control (`RelatedItem`).
    #[must_use]
    pub const fn related_item_links(&self) -> &LinkSet {
        &self.related_item
    }

    /// Sensors that measure the controlled value.
    #[must_use]
    pub const fn associated_sensor_links(&self) -> &LinkSet {
        &self.associated_sensors
    }

    /// Get the sensor named by `Sensor.DataSourceUri`.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching the sensor fails.
    #[cfg(feature = "chassis")]
    pub async fn sensor(&self) -> Result<Option<Sensor<B>>, Error<B>> {
        match self
            .sensor
            .as_ref()
            .and_then(|sensor| sensor.data_source_uri.as_deref())
            .filter(|uri| !uri.is_empty())
        {
            Some(uri) => get_object(self.entity.bmc(), &ODataId::from(uri)).await.map(Some),
            None => Ok(None),
        }
    }

    /// Get the sensors listed in `AssociatedSensors`.
    #[cfg(feature = "chassis")]
    pub async fn associated_sensors(&self) -> Batch<Sensor<B>, B> {
        follow_all(self.entity.bmc(), &self.associated_sensors).await
    }

    /// Reset the control to its default settings.
    ///
    /// Sends `{}`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAction`] if the control does not advertise
    /// `Control.ResetToDefaults`.
    pub async fn reset_to_defaults(&self) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, RESET_TO_DEFAULTS, &Empty {})
            .await
    }
}
