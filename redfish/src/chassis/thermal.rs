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

//! Legacy `Thermal` resource of a chassis.

use crate::resource::resource_handle;
use crate::Error;
use crate::Status;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Bmc;
use typed_redfish_core::Entity;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;

/// Temperature sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Temperature {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub sensor_number: Option<i64>,
    pub reading_celsius: Option<f64>,
    pub upper_threshold_non_critical: Option<f64>,
    pub upper_threshold_critical: Option<f64>,
    pub upper_threshold_fatal: Option<f64>,
    pub lower_threshold_non_critical: Option<f64>,
    pub lower_threshold_critical: Option<f64>,
    pub lower_threshold_fatal: Option<f64>,
    pub physical_context: Option<String>,
    pub status: Option<Status>,
}

/// Fan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fan {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub reading: Option<f64>,
    pub reading_units: Option<String>,
    pub lower_threshold_critical: Option<f64>,
    pub lower_threshold_fatal: Option<f64>,
    pub physical_context: Option<String>,
    pub status: Option<Status>,
}

/// Public properties of the `Thermal` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThermalProperties {
    #[serde(default)]
    pub temperatures: Vec<Temperature>,
    #[serde(default)]
    pub fans: Vec<Fan>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ThermalWire {
    #[serde(flatten)]
    properties: ThermalProperties,
}

/// Legacy `Chassis/Thermal` resource. Read-only.
pub struct Thermal<B: Bmc> {
    entity: Entity<B>,
    properties: ThermalProperties,
}

resource_handle!(Thermal, ThermalProperties);

impl<B: Bmc> Resource<B> for Thermal<B> {
    type Wire = ThermalWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Fetch the thermal resource at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_thermal<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Thermal<B>, Error<B>> {
    get_object(bmc, uri).await
}
