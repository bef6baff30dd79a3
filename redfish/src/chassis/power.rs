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

//! Legacy `Power` resource of a chassis.

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

/// Power consumption and limiting of a chassis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerControl {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub power_consumed_watts: Option<f64>,
    pub power_requested_watts: Option<f64>,
    pub power_available_watts: Option<f64>,
    pub power_capacity_watts: Option<f64>,
    pub power_allocated_watts: Option<f64>,
    pub power_metrics: Option<PowerMetric>,
    pub power_limit: Option<PowerLimit>,
    pub status: Option<Status>,
}

/// Consumption statistics over an interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerMetric {
    pub interval_in_min: Option<u32>,
    pub min_consumed_watts: Option<f64>,
    pub max_consumed_watts: Option<f64>,
    pub average_consumed_watts: Option<f64>,
}

/// Power limit applied to the chassis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerLimit {
    pub limit_in_watts: Option<f64>,
    pub limit_exception: Option<String>,
    pub correction_in_ms: Option<u64>,
}

/// Power supply unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerSupply {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub part_number: Option<String>,
    pub firmware_version: Option<String>,
    pub power_supply_type: Option<String>,
    pub line_input_voltage: Option<f64>,
    pub power_capacity_watts: Option<f64>,
    pub last_power_output_watts: Option<f64>,
    pub status: Option<Status>,
}

/// Voltage sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voltage {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub sensor_number: Option<i64>,
    pub reading_volts: Option<f64>,
    pub upper_threshold_critical: Option<f64>,
    pub lower_threshold_critical: Option<f64>,
    pub physical_context: Option<String>,
    pub status: Option<Status>,
}

/// Public properties of the `Power` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerProperties {
    #[serde(default)]
    pub power_control: Vec<PowerControl>,
    #[serde(default)]
    pub power_supplies: Vec<PowerSupply>,
    #[serde(default)]
    pub voltages: Vec<Voltage>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct PowerWire {
    #[serde(flatten)]
    properties: PowerProperties,
}

/// Legacy `Chassis/Power` resource. Read-only.
pub struct Power<B: Bmc> {
    entity: Entity<B>,
    properties: PowerProperties,
}

resource_handle!(Power, PowerProperties);

impl<B: Bmc> Resource<B> for Power<B> {
    type Wire = PowerWire;

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

/// Fetch the power resource at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_power<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Power<B>, Error<B>> {
    get_object(bmc, uri).await
}

impl<B: Bmc> Power<B> {
    /// Sum of `PowerConsumedWatts` over all power controls that report it.
    #[must_use]
    pub fn consumed_watts(&self) -> Option<f64> {
        self.power_control
            .iter()
            .filter_map(|control| control.power_consumed_watts)
            .reduce(|acc, v| acc + v)
    }
}
