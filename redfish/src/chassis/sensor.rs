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

//! `Sensor` resource.

use crate::list_referenced;
use crate::resource::resource_handle;
use crate::Batch;
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

/// One threshold of a sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Threshold {
    pub reading: Option<f64>,
}

/// Thresholds of a sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Thresholds {
    pub upper_caution: Option<Threshold>,
    pub upper_critical: Option<Threshold>,
    pub upper_fatal: Option<Threshold>,
    pub lower_caution: Option<Threshold>,
    pub lower_critical: Option<Threshold>,
    pub lower_fatal: Option<Threshold>,
}

/// Public properties of a sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SensorProperties {
    pub reading: Option<f64>,
    pub reading_type: Option<String>,
    pub reading_units: Option<String>,
    pub reading_range_max: Option<f64>,
    pub reading_range_min: Option<f64>,
    pub precision: Option<f64>,
    pub accuracy: Option<f64>,
    pub physical_context: Option<String>,
    pub thresholds: Option<Thresholds>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct SensorWire {
    #[serde(flatten)]
    properties: SensorProperties,
}

/// A single sensor reading. Read-only.
pub struct Sensor<B: Bmc> {
    entity: Entity<B>,
    properties: SensorProperties,
}

resource_handle!(Sensor, SensorProperties);

impl<B: Bmc> Resource<B> for Sensor<B> {
    type Wire = SensorWire;

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

/// Fetch the sensor at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_sensor<B: Bmc>(bmc: &Arc<B>, uri: &ODataId) -> Result<Sensor<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every sensor of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_sensors<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<Sensor<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}
